//! Instance descriptions attached to reservation recommendations.

use costexplorer_core::value_object;

value_object! {
    /// Instance details of a recommendation; one member is set, matching the service.
    pub struct InstanceDetails {
        object ec2_instance_details("EC2InstanceDetails"): Ec2InstanceDetails => set_ec2_instance_details, with_ec2_instance_details;
        object rds_instance_details("RDSInstanceDetails"): RdsInstanceDetails => set_rds_instance_details, with_rds_instance_details;
        object redshift_instance_details("RedshiftInstanceDetails"): RedshiftInstanceDetails => set_redshift_instance_details, with_redshift_instance_details;
        object elasti_cache_instance_details("ElastiCacheInstanceDetails"): ElastiCacheInstanceDetails => set_elasti_cache_instance_details, with_elasti_cache_instance_details;
        object es_instance_details("ESInstanceDetails"): EsInstanceDetails => set_es_instance_details, with_es_instance_details;
    }
}

value_object! {
    /// EC2 instances to reserve.
    pub struct Ec2InstanceDetails {
        /// Instance family, e.g. `m4`.
        string family("Family"): String => set_family, with_family;
        string instance_type("InstanceType"): String => set_instance_type, with_instance_type;
        string region("Region"): String => set_region, with_region;
        string availability_zone("AvailabilityZone"): String => set_availability_zone, with_availability_zone;
        string platform("Platform"): String => set_platform, with_platform;
        /// `shared` or `dedicated`.
        string tenancy("Tenancy"): String => set_tenancy, with_tenancy;
        scalar current_generation("CurrentGeneration"): bool => set_current_generation, with_current_generation;
        scalar size_flex_eligible("SizeFlexEligible"): bool => set_size_flex_eligible, with_size_flex_eligible;
    }
}

value_object! {
    /// RDS instances to reserve.
    pub struct RdsInstanceDetails {
        string family("Family"): String => set_family, with_family;
        string instance_type("InstanceType"): String => set_instance_type, with_instance_type;
        string region("Region"): String => set_region, with_region;
        string database_engine("DatabaseEngine"): String => set_database_engine, with_database_engine;
        string database_edition("DatabaseEdition"): String => set_database_edition, with_database_edition;
        /// Single-AZ or Multi-AZ.
        string deployment_option("DeploymentOption"): String => set_deployment_option, with_deployment_option;
        string license_model("LicenseModel"): String => set_license_model, with_license_model;
        scalar current_generation("CurrentGeneration"): bool => set_current_generation, with_current_generation;
        scalar size_flex_eligible("SizeFlexEligible"): bool => set_size_flex_eligible, with_size_flex_eligible;
    }
}

value_object! {
    pub struct RedshiftInstanceDetails {
        string family("Family"): String => set_family, with_family;
        string node_type("NodeType"): String => set_node_type, with_node_type;
        string region("Region"): String => set_region, with_region;
        scalar current_generation("CurrentGeneration"): bool => set_current_generation, with_current_generation;
        scalar size_flex_eligible("SizeFlexEligible"): bool => set_size_flex_eligible, with_size_flex_eligible;
    }
}

value_object! {
    pub struct ElastiCacheInstanceDetails {
        string family("Family"): String => set_family, with_family;
        string node_type("NodeType"): String => set_node_type, with_node_type;
        string region("Region"): String => set_region, with_region;
        string product_description("ProductDescription"): String => set_product_description, with_product_description;
        scalar current_generation("CurrentGeneration"): bool => set_current_generation, with_current_generation;
        scalar size_flex_eligible("SizeFlexEligible"): bool => set_size_flex_eligible, with_size_flex_eligible;
    }
}

value_object! {
    /// Elasticsearch instances to reserve.
    pub struct EsInstanceDetails {
        string instance_class("InstanceClass"): String => set_instance_class, with_instance_class;
        string instance_size("InstanceSize"): String => set_instance_size, with_instance_size;
        string region("Region"): String => set_region, with_region;
        scalar current_generation("CurrentGeneration"): bool => set_current_generation, with_current_generation;
        scalar size_flex_eligible("SizeFlexEligible"): bool => set_size_flex_eligible, with_size_flex_eligible;
    }
}
