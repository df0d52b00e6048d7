//! List query model for Bitrix `*.list` / `*.get` methods
//!
//! Bitrix encodes comparison operators as key prefixes: `>=DATE_CREATE`,
//! `!OPPORTUNITY` (not null when paired with `null`), `@ASSIGNED_BY_ID`
//! (value in list). [`ListQuery`] builds those keys so callers never
//! hand-assemble them.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::impl_code_conversions;

/// Sort direction for `order`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl_code_conversions!(SortDirection {
    Asc => "ASC",
    Desc => "DESC",
});

impl Serialize for SortDirection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Filter, select, order and limit for a paginated list call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListQuery {
    pub filter: BTreeMap<String, Value>,
    pub select: Vec<String>,
    pub order: BTreeMap<String, SortDirection>,
    /// Stop paginating once this many records are collected.
    #[serde(skip)]
    pub limit: Option<usize>,
}

impl ListQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `FIELD = value`
    #[must_use]
    pub fn eq(self, field: &str, value: impl Into<Value>) -> Self {
        self.raw_filter(field.to_string(), value.into())
    }

    /// `>=FIELD`
    #[must_use]
    pub fn gte(self, field: &str, value: impl Into<Value>) -> Self {
        self.raw_filter(format!(">={field}"), value.into())
    }

    /// `<=FIELD`
    #[must_use]
    pub fn lte(self, field: &str, value: impl Into<Value>) -> Self {
        self.raw_filter(format!("<={field}"), value.into())
    }

    /// `!FIELD = null`, i.e. the field is set.
    #[must_use]
    pub fn not_null(self, field: &str) -> Self {
        self.raw_filter(format!("!{field}"), Value::Null)
    }

    /// `!=FIELD = null`; Bitrix treats this like [`Self::not_null`] on most
    /// fields but some user fields only honour this spelling.
    #[must_use]
    pub fn not_eq_null(self, field: &str) -> Self {
        self.raw_filter(format!("!={field}"), Value::Null)
    }

    /// `@FIELD = [..]`, value is one of the list.
    #[must_use]
    pub fn in_set<I, V>(self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let list = values.into_iter().map(Into::into).collect::<Vec<Value>>();
        self.raw_filter(format!("@{field}"), Value::Array(list))
    }

    /// Filter key passed through untouched, for operators without a helper.
    #[must_use]
    pub fn raw_filter(mut self, key: String, value: Value) -> Self {
        self.filter.insert(key, value);
        self
    }

    #[must_use]
    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select.extend(fields.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn order(mut self, field: &str, direction: SortDirection) -> Self {
        self.order.insert(field.to_string(), direction);
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether `limit` has been reached by `count` records.
    #[must_use]
    pub fn is_satisfied_by(&self, count: usize) -> bool {
        self.limit.is_some_and(|limit| count >= limit)
    }
}

/// Records returned by a paginated fetch.
///
/// `complete` is false when pagination stopped early because the upstream
/// returned something unusable; `items` then holds what was collected before
/// the anomaly.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub items: Vec<T>,
    pub complete: bool,
}

impl<T> Fetched<T> {
    #[must_use]
    pub const fn complete(items: Vec<T>) -> Self {
        Self { items, complete: true }
    }

    #[must_use]
    pub const fn partial(items: Vec<T>) -> Self {
        Self { items, complete: false }
    }
}
