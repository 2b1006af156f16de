//! Operation descriptors and page-token plumbing for the modelled operations.
//!
//! Four operations are modelled: `GetCostAndUsage`, `GetDimensionValues`,
//! `GetTags` and `GetReservationPurchaseRecommendation`. The service's other
//! operations (forecasts, reservation utilization and coverage, cost
//! categories and so on) have no request or result types here.

use costexplorer_core::{Operation, PageRequest, Paginated};

use crate::cost_and_usage::{GetCostAndUsageRequest, GetCostAndUsageResult};
use crate::dimension_values::{GetDimensionValuesRequest, GetDimensionValuesResult};
use crate::reservation_recommendation::{
    GetReservationPurchaseRecommendationRequest, GetReservationPurchaseRecommendationResult,
};
use crate::tags::{GetTagsRequest, GetTagsResult};

macro_rules! impl_operation {
    ($op:ident, $name:literal, $input:ty, $output:ty) => {
        #[doc = concat!("The `", $name, "` operation.")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $op;

        impl Operation for $op {
            const NAME: &'static str = $name;
            type Input = $input;
            type Output = $output;
        }
    };
}

macro_rules! impl_paginated {
    (request $t:ty) => {
        impl_paginated!(result $t);

        impl PageRequest for $t {
            fn with_page_token(mut self, token: Option<String>) -> Self {
                self.set_next_page_token(token);
                self
            }
        }
    };
    (result $t:ty) => {
        impl Paginated for $t {
            fn page_token(&self) -> Option<&str> {
                self.next_page_token()
            }
        }
    };
}

impl_operation!(GetCostAndUsage, "GetCostAndUsage", GetCostAndUsageRequest, GetCostAndUsageResult);
impl_operation!(
    GetDimensionValues,
    "GetDimensionValues",
    GetDimensionValuesRequest,
    GetDimensionValuesResult
);
impl_operation!(GetTags, "GetTags", GetTagsRequest, GetTagsResult);
impl_operation!(
    GetReservationPurchaseRecommendation,
    "GetReservationPurchaseRecommendation",
    GetReservationPurchaseRecommendationRequest,
    GetReservationPurchaseRecommendationResult
);

impl_paginated!(request GetCostAndUsageRequest);
impl_paginated!(result GetCostAndUsageResult);
impl_paginated!(request GetDimensionValuesRequest);
impl_paginated!(result GetDimensionValuesResult);
impl_paginated!(request GetTagsRequest);
impl_paginated!(result GetTagsResult);
impl_paginated!(request GetReservationPurchaseRecommendationRequest);
impl_paginated!(result GetReservationPurchaseRecommendationResult);
