//! Black-box checks of the value object contract through the public API.

use costexplorer_model::{
    DateInterval, Expression, GetCostAndUsage, GetCostAndUsageRequest, GetCostAndUsageResult,
    GetDimensionValuesRequest, Granularity, GroupDefinition, Metric, ModelError, ModelValue,
    Operation, PageRequest, Paginated, ValueObject,
};
use serde_json::{Value, json};

fn two_metric_request() -> GetCostAndUsageRequest {
    GetCostAndUsageRequest::new()
        .with_time_period(DateInterval::new().with_start("2017-01-01").with_end("2017-05-01"))
        .with_metrics([Metric::BlendedCost, Metric::UsageQuantity])
}

#[test]
fn request_with_time_range_and_two_metrics_serializes_present_keys_only() {
    costexplorer_observability::init();

    let json = two_metric_request().to_json_value().unwrap();
    let object = json.as_object().unwrap();

    assert!(object.contains_key("TimePeriod"));
    assert!(object.contains_key("Metrics"));
    assert!(!object.contains_key("NextPageToken"));
    assert!(!object.contains_key("Granularity"));
    assert_eq!(
        json,
        json!({
            "TimePeriod": { "Start": "2017-01-01", "End": "2017-05-01" },
            "Metrics": ["BlendedCost", "UsageQuantity"]
        })
    );
}

#[test]
fn absent_fields_are_never_emitted_as_null() {
    let body = GetCostAndUsage::encode_input(&GetCostAndUsageRequest::new()).unwrap();
    assert_eq!(body, "{}");
    assert!(!body.contains("null"));
}

#[test]
fn builders_in_either_order_compare_and_hash_equal() {
    let a_then_b = GetDimensionValuesRequest::new()
        .with_search_string("Amazon")
        .with_dimension("SERVICE");
    let b_then_a = GetDimensionValuesRequest::new()
        .with_dimension("SERVICE")
        .with_search_string("Amazon");

    assert_eq!(a_then_b, b_then_a);
    assert_eq!(a_then_b.hash_code(), b_then_a.hash_code());
}

#[test]
fn display_lists_present_fields_in_declaration_order() {
    let request = two_metric_request().with_granularity(Granularity::Monthly);
    assert_eq!(
        request.to_string(),
        "{TimePeriod: {Start: 2017-01-01,End: 2017-05-01},Granularity: MONTHLY,Metrics: [BlendedCost, UsageQuantity]}"
    );
}

#[test]
fn service_response_decodes_and_continues_pagination() {
    let body = json!({
        "GroupDefinitions": [{ "Type": "DIMENSION", "Key": "SERVICE" }],
        "ResultsByTime": [{
            "TimePeriod": { "Start": "2017-01-01", "End": "2017-02-01" },
            "Total": {},
            "Groups": [{
                "Keys": ["Amazon Simple Storage Service"],
                "Metrics": { "BlendedCost": { "Amount": "12.0", "Unit": "USD" } }
            }],
            "Estimated": false
        }],
        "DimensionValueAttributes": [],
        "NextPageToken": "token/with+symbols==",
        "ResponseMetadata": { "RequestId": "ignored" }
    })
    .to_string();

    let result = GetCostAndUsage::decode_output(&body).unwrap();
    assert_eq!(
        result.group_definitions().unwrap(),
        [GroupDefinition::dimension("SERVICE")]
    );
    assert_eq!(result.dimension_value_attributes().map(<[_]>::len), Some(0));
    assert_eq!(result.page_token(), Some("token/with+symbols=="));

    let request = two_metric_request().with_group_by([GroupDefinition::dimension("SERVICE")]);
    let next = request.next_page(&result).unwrap();
    assert_eq!(next.next_page_token(), Some("token/with+symbols=="));
    assert_eq!(next.clone().with_page_token(None), request);

    let last = GetCostAndUsageResult::new().with_group_definitions([GroupDefinition::tag("team")]);
    assert!(next.next_page(&last).is_none());
}

#[test]
fn explicit_null_decodes_to_absent() {
    let request = GetCostAndUsageRequest::from_json_value(json!({
        "Granularity": "DAILY",
        "NextPageToken": Value::Null,
        "Filter": Value::Null
    }))
    .unwrap();
    assert_eq!(request, GetCostAndUsageRequest::new().with_granularity("DAILY"));
}

#[test]
fn malformed_payload_reports_the_target_type() {
    let err = GetCostAndUsageRequest::from_json(r#"{"Metrics": "BlendedCost"}"#).unwrap_err();
    assert!(matches!(
        err,
        ModelError::Deserialize { type_name: "GetCostAndUsageRequest", .. }
    ));
}

#[test]
fn filters_compose_into_the_request() {
    let request = two_metric_request().with_filter(Expression::any_of([
        Expression::dimension("LINKED_ACCOUNT", ["111122223333"]),
        Expression::tag("team", ["platform", "data"]),
    ]));
    let json = request.to_json_value().unwrap();
    assert_eq!(
        json["Filter"],
        json!({
            "Or": [
                { "Dimensions": { "Key": "LINKED_ACCOUNT", "Values": ["111122223333"] } },
                { "Tags": { "Key": "team", "Values": ["platform", "data"] } }
            ]
        })
    );
    assert_eq!(GetCostAndUsageRequest::from_json_value(json).unwrap(), request);
}
