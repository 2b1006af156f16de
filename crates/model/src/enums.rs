//! Typed helpers for enumerated string fields.
//!
//! Model fields keep the raw string. These enums list the documented values
//! and convert into that string, so `with_granularity(Granularity::Monthly)`
//! and `with_granularity("MONTHLY")` store the same thing. Values outside the
//! documented set are still accepted by the models; the service decides.

use costexplorer_core::string_enum;

string_enum! {
    /// Time granularity of cost and usage results.
    pub enum Granularity {
        Daily = "DAILY",
        Monthly = "MONTHLY",
        Hourly = "HOURLY",
    }
}

string_enum! {
    /// Context of a `GetDimensionValues` call; decides which dimensions can be searched.
    pub enum Context {
        /// Values usable with `GetCostAndUsage`. The service default.
        CostAndUsage = "COST_AND_USAGE",
        /// Values usable with `GetReservationUtilization`.
        Reservations = "RESERVATIONS",
        /// Values usable with the Savings Plans operations.
        SavingsPlans = "SAVINGS_PLANS",
    }
}

string_enum! {
    /// Name of a cost dimension.
    pub enum Dimension {
        /// Availability Zone, e.g. `us-east-1a`.
        Az = "AZ",
        /// EC2 instance type, e.g. `m4.xlarge`.
        InstanceType = "INSTANCE_TYPE",
        /// Member account id; the attribute map carries its full name.
        LinkedAccount = "LINKED_ACCOUNT",
        LinkedAccountName = "LINKED_ACCOUNT_NAME",
        /// Action performed, e.g. `RunInstance`.
        Operation = "OPERATION",
        /// Reservation type of the purchase the usage relates to.
        PurchaseType = "PURCHASE_TYPE",
        Region = "REGION",
        /// AWS service such as Amazon DynamoDB.
        Service = "SERVICE",
        ServiceCode = "SERVICE_CODE",
        /// Type of usage, e.g. `DataTransfer-In-Bytes`.
        UsageType = "USAGE_TYPE",
        UsageTypeGroup = "USAGE_TYPE_GROUP",
        /// Charge type: RI fees, usage costs, tax refunds, credits.
        RecordType = "RECORD_TYPE",
        OperatingSystem = "OPERATING_SYSTEM",
        Tenancy = "TENANCY",
        Scope = "SCOPE",
        Platform = "PLATFORM",
        SubscriptionId = "SUBSCRIPTION_ID",
        /// Organization that sells the services.
        LegalEntityName = "LEGAL_ENTITY_NAME",
        DeploymentOption = "DEPLOYMENT_OPTION",
        DatabaseEngine = "DATABASE_ENGINE",
        CacheEngine = "CACHE_ENGINE",
        InstanceTypeFamily = "INSTANCE_TYPE_FAMILY",
        BillingEntity = "BILLING_ENTITY",
        ReservationId = "RESERVATION_ID",
        /// Opt-in; only the last 14 days of EC2 compute.
        ResourceId = "RESOURCE_ID",
        RightsizingType = "RIGHTSIZING_TYPE",
        SavingsPlansType = "SAVINGS_PLANS_TYPE",
        SavingsPlanArn = "SAVINGS_PLAN_ARN",
        PaymentOption = "PAYMENT_OPTION",
    }
}

string_enum! {
    /// Cost and usage metric names. The service spells these in PascalCase.
    pub enum Metric {
        AmortizedCost = "AmortizedCost",
        BlendedCost = "BlendedCost",
        NetAmortizedCost = "NetAmortizedCost",
        NetUnblendedCost = "NetUnblendedCost",
        NormalizedUsageAmount = "NormalizedUsageAmount",
        UnblendedCost = "UnblendedCost",
        UsageQuantity = "UsageQuantity",
    }
}

string_enum! {
    /// Payment option of a reservation.
    pub enum PaymentOption {
        NoUpfront = "NO_UPFRONT",
        PartialUpfront = "PARTIAL_UPFRONT",
        AllUpfront = "ALL_UPFRONT",
        LightUtilization = "LIGHT_UTILIZATION",
        MediumUtilization = "MEDIUM_UTILIZATION",
        HeavyUtilization = "HEAVY_UTILIZATION",
    }
}

string_enum! {
    /// What a group definition groups by.
    pub enum GroupDefinitionType {
        Dimension = "DIMENSION",
        Tag = "TAG",
        CostCategory = "COST_CATEGORY",
    }
}

string_enum! {
    /// How filter values are matched.
    pub enum MatchOption {
        Equals = "EQUALS",
        StartsWith = "STARTS_WITH",
        EndsWith = "ENDS_WITH",
        Contains = "CONTAINS",
        CaseSensitive = "CASE_SENSITIVE",
        CaseInsensitive = "CASE_INSENSITIVE",
    }
}

string_enum! {
    /// Whether a recommendation covers the payer account only or linked accounts too.
    pub enum AccountScope {
        Payer = "PAYER",
        Linked = "LINKED",
    }
}

string_enum! {
    pub enum LookbackPeriodInDays {
        SevenDays = "SEVEN_DAYS",
        ThirtyDays = "THIRTY_DAYS",
        SixtyDays = "SIXTY_DAYS",
    }
}

string_enum! {
    pub enum TermInYears {
        OneYear = "ONE_YEAR",
        ThreeYears = "THREE_YEARS",
    }
}

string_enum! {
    /// Offering class of EC2 reserved instances.
    pub enum OfferingClass {
        Standard = "STANDARD",
        Convertible = "CONVERTIBLE",
    }
}
