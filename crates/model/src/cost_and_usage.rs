//! `GetCostAndUsage`: cost and usage metrics per period, optionally grouped.

use costexplorer_core::value_object;

use crate::date_interval::DateInterval;
use crate::dimension_values::DimensionValuesWithAttributes;
use crate::expression::Expression;
use crate::grouping::{GroupDefinition, ResultByTime};

value_object! {
    /// Request of `GetCostAndUsage`.
    pub struct GetCostAndUsageRequest {
        /// Start inclusive, end exclusive.
        object time_period("TimePeriod"): DateInterval => set_time_period, with_time_period;
        /// See [`crate::Granularity`].
        string granularity("Granularity"): String => set_granularity, with_granularity;
        object filter("Filter"): Expression => set_filter, with_filter;
        /// Metric names, see [`crate::Metric`].
        list metrics("Metrics"): String => set_metrics, with_metrics, add_metrics;
        /// Up to two group definitions.
        list group_by("GroupBy"): GroupDefinition => set_group_by, with_group_by, add_group_by;
        string next_page_token("NextPageToken"): String => set_next_page_token, with_next_page_token;
    }
}

value_object! {
    /// Result of `GetCostAndUsage`.
    pub struct GetCostAndUsageResult {
        string next_page_token("NextPageToken"): String => set_next_page_token, with_next_page_token;
        /// Groups the request asked for.
        list group_definitions("GroupDefinitions"): GroupDefinition => set_group_definitions, with_group_definitions, add_group_definitions;
        list results_by_time("ResultsByTime"): ResultByTime => set_results_by_time, with_results_by_time, add_results_by_time;
        list dimension_value_attributes("DimensionValueAttributes"): DimensionValuesWithAttributes => set_dimension_value_attributes, with_dimension_value_attributes, add_dimension_value_attributes;
    }
}
