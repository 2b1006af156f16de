//! `GetReservationPurchaseRecommendation`: which reservations to buy.
//!
//! Recommendation figures (counts, costs, percentages) arrive as decimal
//! strings and are kept verbatim.

use costexplorer_core::value_object;

use crate::instance_details::InstanceDetails;

value_object! {
    /// Service-specific part of a recommendation request.
    pub struct ServiceSpecification {
        object ec2_specification("EC2Specification"): Ec2Specification => set_ec2_specification, with_ec2_specification;
    }
}

value_object! {
    pub struct Ec2Specification {
        /// See [`crate::OfferingClass`].
        string offering_class("OfferingClass"): String => set_offering_class, with_offering_class;
    }
}

value_object! {
    /// One recommended purchase.
    pub struct ReservationPurchaseRecommendationDetail {
        /// Account the recommendation is for.
        string account_id("AccountId"): String => set_account_id, with_account_id;
        object instance_details("InstanceDetails"): InstanceDetails => set_instance_details, with_instance_details;
        string recommended_number_of_instances_to_purchase("RecommendedNumberOfInstancesToPurchase"): String
            => set_recommended_number_of_instances_to_purchase, with_recommended_number_of_instances_to_purchase;
        string recommended_normalized_units_to_purchase("RecommendedNormalizedUnitsToPurchase"): String
            => set_recommended_normalized_units_to_purchase, with_recommended_normalized_units_to_purchase;
        /// Minimum hourly instance usage over the lookback period.
        string minimum_number_of_instances_used_per_hour("MinimumNumberOfInstancesUsedPerHour"): String
            => set_minimum_number_of_instances_used_per_hour, with_minimum_number_of_instances_used_per_hour;
        string minimum_normalized_units_used_per_hour("MinimumNormalizedUnitsUsedPerHour"): String
            => set_minimum_normalized_units_used_per_hour, with_minimum_normalized_units_used_per_hour;
        /// Maximum hourly instance usage over the lookback period.
        string maximum_number_of_instances_used_per_hour("MaximumNumberOfInstancesUsedPerHour"): String
            => set_maximum_number_of_instances_used_per_hour, with_maximum_number_of_instances_used_per_hour;
        string maximum_normalized_units_used_per_hour("MaximumNormalizedUnitsUsedPerHour"): String
            => set_maximum_normalized_units_used_per_hour, with_maximum_normalized_units_used_per_hour;
        /// Average hourly instance usage over the lookback period.
        string average_number_of_instances_used_per_hour("AverageNumberOfInstancesUsedPerHour"): String
            => set_average_number_of_instances_used_per_hour, with_average_number_of_instances_used_per_hour;
        string average_normalized_units_used_per_hour("AverageNormalizedUnitsUsedPerHour"): String
            => set_average_normalized_units_used_per_hour, with_average_normalized_units_used_per_hour;
        string average_utilization("AverageUtilization"): String => set_average_utilization, with_average_utilization;
        /// Months until the reservation starts saving money.
        string estimated_break_even_in_months("EstimatedBreakEvenInMonths"): String
            => set_estimated_break_even_in_months, with_estimated_break_even_in_months;
        /// Currency of every cost figure below.
        string currency_code("CurrencyCode"): String => set_currency_code, with_currency_code;
        string estimated_monthly_savings_amount("EstimatedMonthlySavingsAmount"): String
            => set_estimated_monthly_savings_amount, with_estimated_monthly_savings_amount;
        string estimated_monthly_savings_percentage("EstimatedMonthlySavingsPercentage"): String
            => set_estimated_monthly_savings_percentage, with_estimated_monthly_savings_percentage;
        /// Monthly On-Demand spend without the reservation.
        string estimated_monthly_on_demand_cost("EstimatedMonthlyOnDemandCost"): String
            => set_estimated_monthly_on_demand_cost, with_estimated_monthly_on_demand_cost;
        /// What the lookback period would have cost with the reservation.
        string estimated_reservation_cost_for_lookback_period("EstimatedReservationCostForLookbackPeriod"): String
            => set_estimated_reservation_cost_for_lookback_period, with_estimated_reservation_cost_for_lookback_period;
        string upfront_cost("UpfrontCost"): String => set_upfront_cost, with_upfront_cost;
        string recurring_standard_monthly_cost("RecurringStandardMonthlyCost"): String
            => set_recurring_standard_monthly_cost, with_recurring_standard_monthly_cost;
    }
}

value_object! {
    pub struct ReservationPurchaseRecommendationSummary {
        string total_estimated_monthly_savings_amount("TotalEstimatedMonthlySavingsAmount"): String
            => set_total_estimated_monthly_savings_amount, with_total_estimated_monthly_savings_amount;
        string total_estimated_monthly_savings_percentage("TotalEstimatedMonthlySavingsPercentage"): String
            => set_total_estimated_monthly_savings_percentage, with_total_estimated_monthly_savings_percentage;
        string currency_code("CurrencyCode"): String => set_currency_code, with_currency_code;
    }
}

value_object! {
    pub struct ReservationPurchaseRecommendationMetadata {
        string recommendation_id("RecommendationId"): String => set_recommendation_id, with_recommendation_id;
        /// When the recommendation was computed.
        string generation_timestamp("GenerationTimestamp"): String => set_generation_timestamp, with_generation_timestamp;
    }
}

value_object! {
    /// Recommendations for one combination of scope, term and payment option.
    pub struct ReservationPurchaseRecommendation {
        string account_scope("AccountScope"): String => set_account_scope, with_account_scope;
        string lookback_period_in_days("LookbackPeriodInDays"): String => set_lookback_period_in_days, with_lookback_period_in_days;
        string term_in_years("TermInYears"): String => set_term_in_years, with_term_in_years;
        string payment_option("PaymentOption"): String => set_payment_option, with_payment_option;
        object service_specification("ServiceSpecification"): ServiceSpecification => set_service_specification, with_service_specification;
        list recommendation_details("RecommendationDetails"): ReservationPurchaseRecommendationDetail
            => set_recommendation_details, with_recommendation_details, add_recommendation_details;
        object recommendation_summary("RecommendationSummary"): ReservationPurchaseRecommendationSummary
            => set_recommendation_summary, with_recommendation_summary;
    }
}

value_object! {
    /// Request of `GetReservationPurchaseRecommendation`.
    pub struct GetReservationPurchaseRecommendationRequest {
        string account_id("AccountId"): String => set_account_id, with_account_id;
        /// Service to recommend reservations for, e.g. `Amazon Elastic Compute Cloud - Compute`.
        string service("Service"): String => set_service, with_service;
        /// See [`crate::AccountScope`].
        string account_scope("AccountScope"): String => set_account_scope, with_account_scope;
        /// See [`crate::LookbackPeriodInDays`].
        string lookback_period_in_days("LookbackPeriodInDays"): String => set_lookback_period_in_days, with_lookback_period_in_days;
        /// See [`crate::TermInYears`].
        string term_in_years("TermInYears"): String => set_term_in_years, with_term_in_years;
        /// See [`crate::PaymentOption`].
        string payment_option("PaymentOption"): String => set_payment_option, with_payment_option;
        object service_specification("ServiceSpecification"): ServiceSpecification => set_service_specification, with_service_specification;
        scalar page_size("PageSize"): i32 => set_page_size, with_page_size;
        string next_page_token("NextPageToken"): String => set_next_page_token, with_next_page_token;
    }
}

value_object! {
    /// Result of `GetReservationPurchaseRecommendation`.
    pub struct GetReservationPurchaseRecommendationResult {
        object metadata("Metadata"): ReservationPurchaseRecommendationMetadata => set_metadata, with_metadata;
        list recommendations("Recommendations"): ReservationPurchaseRecommendation
            => set_recommendations, with_recommendations, add_recommendations;
        string next_page_token("NextPageToken"): String => set_next_page_token, with_next_page_token;
    }
}
