//! `GetDimensionValues`: search the values of one dimension.

use costexplorer_core::value_object;

use crate::date_interval::DateInterval;

value_object! {
    /// One dimension value and its attributes.
    pub struct DimensionValuesWithAttributes {
        string value("Value"): String => set_value, with_value;
        /// Extra data, e.g. the account name for `LINKED_ACCOUNT` values.
        map attributes("Attributes"): String => set_attributes, with_attributes, add_attributes_entry;
    }
}

value_object! {
    /// Request of `GetDimensionValues`.
    ///
    /// Which dimensions can be searched depends on `Context`: with
    /// `COST_AND_USAGE` (the default) most billing dimensions are available,
    /// with `RESERVATIONS` only reservation-related ones such as
    /// `CACHE_ENGINE`, `DEPLOYMENT_OPTION` or `SCOPE`.
    pub struct GetDimensionValuesRequest {
        /// Value to search the dimension values for.
        string search_string("SearchString"): String => set_search_string, with_search_string;
        object time_period("TimePeriod"): DateInterval => set_time_period, with_time_period;
        /// See [`crate::Dimension`].
        string dimension("Dimension"): String => set_dimension, with_dimension;
        /// See [`crate::Context`].
        string context("Context"): String => set_context, with_context;
        /// Token from the previous page; opaque.
        string next_page_token("NextPageToken"): String => set_next_page_token, with_next_page_token;
    }
}

value_object! {
    /// Result of `GetDimensionValues`.
    pub struct GetDimensionValuesResult {
        list dimension_values("DimensionValues"): DimensionValuesWithAttributes => set_dimension_values, with_dimension_values, add_dimension_values;
        /// Number of values in this page.
        scalar return_size("ReturnSize"): i32 => set_return_size, with_return_size;
        /// Number of values overall.
        scalar total_size("TotalSize"): i32 => set_total_size, with_total_size;
        string next_page_token("NextPageToken"): String => set_next_page_token, with_next_page_token;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Context, Dimension};
    use costexplorer_core::{ModelValue, ValueObject};

    #[test]
    fn renders_only_present_fields_in_declaration_order() {
        let request = GetDimensionValuesRequest::new()
            .with_context(Context::Reservations)
            .with_dimension(Dimension::Region)
            .with_search_string("");
        assert_eq!(
            request.to_string(),
            "{SearchString: ,Dimension: REGION,Context: RESERVATIONS}"
        );
    }

    #[test]
    fn typed_and_string_setters_store_the_same_value() {
        let mut typed = GetDimensionValuesRequest::new();
        typed.set_dimension(Some(Dimension::LinkedAccount.into()));
        let plain = GetDimensionValuesRequest::new().with_dimension("LINKED_ACCOUNT");
        assert_eq!(typed, plain);
        assert_eq!(typed.hash_code(), plain.hash_code());
        assert_eq!(
            typed.dimension().unwrap().parse::<Dimension>().unwrap(),
            Dimension::LinkedAccount
        );
    }

    #[test]
    fn undocumented_values_are_stored_as_given() {
        let request = GetDimensionValuesRequest::new().with_context("FUTURE_CONTEXT");
        assert_eq!(request.context(), Some("FUTURE_CONTEXT"));
        assert!(request.context().unwrap().parse::<Context>().is_err());
    }

    #[test]
    fn decodes_result_with_attributes() {
        let result = GetDimensionValuesResult::from_json(
            r#"{
                "DimensionValues": [
                    {"Value": "111122223333", "Attributes": {"description": "payer"}},
                    {"Value": "444455556666", "Attributes": {}}
                ],
                "ReturnSize": 2,
                "TotalSize": 2
            }"#,
        )
        .unwrap();

        let values = result.dimension_values().unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(
            values[0].attributes().and_then(|a| a.get("description")).map(String::as_str),
            Some("payer")
        );
        assert_eq!(result.return_size(), Some(2));
        assert_eq!(result.next_page_token(), None);
    }

    #[test]
    fn result_renders_nested_lists() {
        let result = GetDimensionValuesResult::new()
            .add_dimension_values([DimensionValuesWithAttributes::new()
                .with_value("us-east-1")
                .add_attributes_entry("name", "N. Virginia")])
            .with_total_size(1);
        assert_eq!(
            result.to_string(),
            "{DimensionValues: [{Value: us-east-1,Attributes: {name=N. Virginia}}],TotalSize: 1}"
        );
    }
}
