//! Grouping and per-period result values of cost and usage queries.

use costexplorer_core::value_object;

use crate::date_interval::DateInterval;
use crate::enums::GroupDefinitionType;

value_object! {
    /// A dimension, tag or cost category to group results by.
    pub struct GroupDefinition {
        /// See [`GroupDefinitionType`].
        string r#type("Type"): String => set_type, with_type;
        string key("Key"): String => set_key, with_key;
    }
}

value_object! {
    /// Aggregated value of one metric.
    pub struct MetricValue {
        /// Decimal amount as sent by the service, e.g. `"12.5"`.
        string amount("Amount"): String => set_amount, with_amount;
        /// Unit of `amount`, e.g. `USD` or `Hrs`.
        string unit("Unit"): String => set_unit, with_unit;
    }
}

value_object! {
    /// Metrics of one group within a period.
    pub struct Group {
        /// Group key values, one per group definition.
        list keys("Keys"): String => set_keys, with_keys, add_keys;
        /// Metric name to value.
        map metrics("Metrics"): MetricValue => set_metrics, with_metrics, add_metrics_entry;
    }
}

value_object! {
    /// Results of one time period.
    pub struct ResultByTime {
        object time_period("TimePeriod"): DateInterval => set_time_period, with_time_period;
        /// Totals per metric across all groups.
        map total("Total"): MetricValue => set_total, with_total, add_total_entry;
        list groups("Groups"): Group => set_groups, with_groups, add_groups;
        /// Whether the period is still open and the figures may change.
        scalar estimated("Estimated"): bool => set_estimated, with_estimated;
    }
}

impl GroupDefinition {
    /// Group by the dimension `key`.
    pub fn dimension(key: impl Into<String>) -> Self {
        Self::new().with_type(GroupDefinitionType::Dimension).with_key(key)
    }

    /// Group by the tag `key`.
    pub fn tag(key: impl Into<String>) -> Self {
        Self::new().with_type(GroupDefinitionType::Tag).with_key(key)
    }
}

impl MetricValue {
    pub fn of(amount: impl Into<String>, unit: impl Into<String>) -> Self {
        Self::new().with_amount(amount).with_unit(unit)
    }
}
