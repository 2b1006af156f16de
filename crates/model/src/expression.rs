//! Filter expressions.
//!
//! An `Expression` is a tree: each node sets exactly one of `Or`, `And`, `Not`,
//! `Dimensions`, `Tags` or `CostCategories`. The one-of rule is the service's
//! to enforce; the model stores whatever is set.

use costexplorer_core::value_object;

value_object! {
    /// Filter expression node.
    pub struct Expression {
        /// Matches when any child matches.
        list or("Or"): Expression => set_or, with_or, add_or;
        /// Matches when every child matches.
        list and("And"): Expression => set_and, with_and, add_and;
        /// Matches when the child does not.
        boxed not("Not"): Expression => set_not, with_not;
        /// Filter on a dimension.
        object dimensions("Dimensions"): DimensionValues => set_dimensions, with_dimensions;
        /// Filter on a cost allocation tag.
        object tags("Tags"): TagValues => set_tags, with_tags;
        /// Filter on a cost category.
        object cost_categories("CostCategories"): CostCategoryValues => set_cost_categories, with_cost_categories;
    }
}

value_object! {
    /// Values of one dimension to filter on.
    pub struct DimensionValues {
        /// Dimension name, see [`crate::Dimension`].
        string key("Key"): String => set_key, with_key;
        list values("Values"): String => set_values, with_values, add_values;
        /// See [`crate::MatchOption`]. Only `EQUALS` and `CASE_SENSITIVE` apply here.
        list match_options("MatchOptions"): String => set_match_options, with_match_options, add_match_options;
    }
}

value_object! {
    /// Values of one tag key to filter on.
    pub struct TagValues {
        string key("Key"): String => set_key, with_key;
        list values("Values"): String => set_values, with_values, add_values;
        list match_options("MatchOptions"): String => set_match_options, with_match_options, add_match_options;
    }
}

value_object! {
    /// Values of one cost category to filter on.
    pub struct CostCategoryValues {
        string key("Key"): String => set_key, with_key;
        list values("Values"): String => set_values, with_values, add_values;
    }
}

impl Expression {
    /// `And` over `children`.
    pub fn all_of<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expression>,
    {
        Self::new().with_and(children)
    }

    /// `Or` over `children`.
    pub fn any_of<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expression>,
    {
        Self::new().with_or(children)
    }

    /// `Not` of `child`.
    pub fn negate(child: impl Into<Expression>) -> Self {
        Self::new().with_not(child)
    }

    /// Dimension `key` equal to any of `values`.
    pub fn dimension<I>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::new().with_dimensions(DimensionValues::new().with_key(key).with_values(values))
    }

    /// Tag `key` equal to any of `values`.
    pub fn tag<I>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::new().with_tags(TagValues::new().with_key(key).with_values(values))
    }
}

impl From<DimensionValues> for Expression {
    fn from(values: DimensionValues) -> Self {
        Self::new().with_dimensions(values)
    }
}

impl From<TagValues> for Expression {
    fn from(values: TagValues) -> Self {
        Self::new().with_tags(values)
    }
}

impl From<CostCategoryValues> for Expression {
    fn from(values: CostCategoryValues) -> Self {
        Self::new().with_cost_categories(values)
    }
}
