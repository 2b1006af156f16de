//! Cost Explorer request, result and detail models.
//!
//! This crate contains payload shapes only: every type is a value object (see
//! [`costexplorer_core::ValueObject`]) that a transport encodes and decodes.
//! Nothing here performs IO.

pub mod cost_and_usage;
pub mod date_interval;
pub mod dimension_values;
pub mod enums;
pub mod expression;
pub mod grouping;
pub mod instance_details;
pub mod operations;
pub mod reservation_recommendation;
pub mod tags;

pub use cost_and_usage::{GetCostAndUsageRequest, GetCostAndUsageResult};
pub use date_interval::DateInterval;
pub use dimension_values::{
    DimensionValuesWithAttributes, GetDimensionValuesRequest, GetDimensionValuesResult,
};
pub use enums::{
    AccountScope, Context, Dimension, Granularity, GroupDefinitionType, LookbackPeriodInDays,
    MatchOption, Metric, OfferingClass, PaymentOption, TermInYears,
};
pub use expression::{CostCategoryValues, DimensionValues, Expression, TagValues};
pub use grouping::{Group, GroupDefinition, MetricValue, ResultByTime};
pub use instance_details::{
    Ec2InstanceDetails, ElastiCacheInstanceDetails, EsInstanceDetails, InstanceDetails,
    RdsInstanceDetails, RedshiftInstanceDetails,
};
pub use operations::{
    GetCostAndUsage, GetDimensionValues, GetReservationPurchaseRecommendation, GetTags,
};
pub use reservation_recommendation::{
    Ec2Specification, GetReservationPurchaseRecommendationRequest,
    GetReservationPurchaseRecommendationResult, ReservationPurchaseRecommendation,
    ReservationPurchaseRecommendationDetail, ReservationPurchaseRecommendationMetadata,
    ReservationPurchaseRecommendationSummary, ServiceSpecification,
};
pub use tags::{GetTagsRequest, GetTagsResult};

pub use costexplorer_core::{
    ModelError, ModelResult, ModelValue, Operation, PageRequest, Paginated, ValueObject,
};
