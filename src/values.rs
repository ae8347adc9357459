//! Request parameter values.
//!
//! Twilio distinguishes between a parameter that was never supplied (it is
//! omitted from the request entirely) and a parameter explicitly cleared with
//! `null` (it is sent with an empty value). [`Param`] models those three states,
//! and [`ParameterSet`] collects the supplied ones in wire order.
//!
//! # Wire encoding
//!
//! [`ParameterSet::to_pairs`] flattens values into `application/x-www-form-urlencoded`
//! pairs:
//!
//! | Value | Encoding |
//! |-------|----------|
//! | string, number | `Key=value` |
//! | boolean | `Key=true` / `Key=false` |
//! | null | `Key=` |
//! | list | one `Key=item` pair per element |
//! | map | `Key[sub]=value`, recursively |
//!
//! # Example
//!
//! ```rust
//! use twilio_api::{Param, ParameterSet};
//!
//! let beta: Param<bool> = Param::Unset;
//! let friendly_name: Param<String> = Param::Value("x".to_string());
//!
//! let params = ParameterSet::new()
//!     .with("Beta", beta)
//!     .with("FriendlyName", friendly_name);
//!
//! assert_eq!(params.to_pairs(), vec![("FriendlyName".to_string(), "x".to_string())]);
//! ```

use std::collections::BTreeMap;

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};

/// ISO 8601 format used when sending timestamps.
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// ISO 8601 format used when sending calendar dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A request parameter that may be unset, explicitly null, or present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Param<T> {
    /// Not supplied. Omitted from the request.
    #[default]
    Unset,
    /// Explicitly cleared. Sent with an empty value.
    Null,
    /// Supplied value.
    Value(T),
}

impl<T> Param<T> {
    /// Returns `true` if the parameter was not supplied.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns `true` if the parameter was explicitly cleared.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the supplied value, if any.
    #[must_use]
    pub const fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unset | Self::Null => None,
        }
    }

    /// Maps a supplied value, preserving `Unset` and `Null`.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Param<U> {
        match self {
            Self::Unset => Param::Unset,
            Self::Null => Param::Null,
            Self::Value(value) => Param::Value(f(value)),
        }
    }

    /// Converts an `Option`, treating `None` as unset.
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Self::Value)
    }
}

impl<T> From<T> for Param<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// A parameter value in a form that can be flattened onto the wire.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// Explicit null.
    Null,
    /// A string.
    String(String),
    /// An integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A boolean, sent as `true` or `false`.
    Boolean(bool),
    /// A list, sent as repeated keys.
    List(Vec<ParamValue>),
    /// A nested map, sent with bracket notation.
    Map(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    fn flatten_into(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        match self {
            Self::Null => pairs.push((key.to_string(), String::new())),
            Self::String(s) => pairs.push((key.to_string(), s.clone())),
            Self::Integer(i) => pairs.push((key.to_string(), i.to_string())),
            Self::Float(f) => pairs.push((key.to_string(), f.to_string())),
            Self::Boolean(b) => pairs.push((key.to_string(), b.to_string())),
            Self::List(items) => {
                for item in items {
                    item.flatten_into(key, pairs);
                }
            }
            Self::Map(map) => {
                for (sub, value) in map {
                    value.flatten_into(&format!("{key}[{sub}]"), pairs);
                }
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u16> for ParamValue {
    fn from(value: u16) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<BigDecimal> for ParamValue {
    fn from(value: BigDecimal) -> Self {
        Self::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::String(value.format(DATETIME_FORMAT).to_string())
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(value: NaiveDate) -> Self {
        Self::String(value.format(DATE_FORMAT).to_string())
    }
}

impl<T: Into<Self>> From<Vec<T>> for ParamValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<BTreeMap<String, T>> for ParamValue {
    fn from(value: BTreeMap<String, T>) -> Self {
        Self::Map(value.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

/// JSON objects and arrays are sent as their compact JSON text.
impl From<serde_json::Value> for ParamValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::String(n.to_string()), Self::Integer),
            serde_json::Value::String(s) => Self::String(s),
            other @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                Self::String(other.to_string())
            }
        }
    }
}

/// An ordered set of request parameters keyed by wire name.
///
/// Built once per call. Unset parameters never enter the set; keys keep
/// their first insertion position when overridden.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterSet {
    entries: Vec<(String, ParamValue)>,
}

impl ParameterSet {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a set from `(key, param)` entries, dropping unset ones.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twilio_api::{Param, ParameterSet};
    ///
    /// let params = ParameterSet::of([
    ///     ("Beta", Param::<String>::Unset),
    ///     ("FriendlyName", Param::Value("x".to_string())),
    /// ]);
    /// assert_eq!(params.len(), 1);
    /// ```
    pub fn of<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<ParamValue>,
        I: IntoIterator<Item = (K, Param<V>)>,
    {
        entries
            .into_iter()
            .fold(Self::new(), |set, (key, value)| set.with(key, value))
    }

    /// Adds a parameter unless it is unset.
    #[must_use]
    pub fn with<T: Into<ParamValue>>(mut self, key: impl Into<String>, value: Param<T>) -> Self {
        match value {
            Param::Unset => {}
            Param::Null => self.insert(key, ParamValue::Null),
            Param::Value(value) => self.insert(key, value),
        }
        self
    }

    /// Inserts a value, replacing an existing entry with the same key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Merges extra parameters over this set. Extras override or extend
    /// existing entries but never remove them.
    pub fn extend(&mut self, extra: Self) {
        for (key, value) in extra.entries {
            self.insert(key, value);
        }
    }

    /// Returns the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if the set contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Flattens the set into wire `(key, value)` pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            value.flatten_into(key, &mut pairs);
        }
        pairs
    }
}
