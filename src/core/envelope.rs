//! Request bodies for the single `/apis` endpoint.
//!
//! Every call is a JSON object with a `method` discriminator, an optional `token`,
//! and flat method-specific parameters.

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::core::JqError;

/// Wire format for date parameters.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// A scalar parameter value.
///
/// `Empty` is sent as `""`. The service treats a present-but-empty field differently
/// from a missing one (e.g. `date: ""` means "all dates"), so empty values are never pruned.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    Empty,
}

impl ParamValue {
    /// `true` for `Empty` and for empty strings.
    pub fn is_empty(&self) -> bool {
        match self {
            ParamValue::Empty => true,
            ParamValue::Str(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Str(s) => serializer.serialize_str(s),
            ParamValue::Int(i) => serializer.serialize_i64(*i),
            ParamValue::Float(f) => serializer.serialize_f64(*f),
            ParamValue::Bool(b) => serializer.serialize_bool(*b),
            ParamValue::Date(d) => serializer.collect_str(&d.format(DATE_FORMAT)),
            ParamValue::Empty => serializer.serialize_str(""),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

impl From<&String> for ParamValue {
    fn from(v: &String) -> Self {
        ParamValue::Str(v.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(i64::from(v))
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::Int(i64::from(v))
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(v: NaiveDate) -> Self {
        ParamValue::Date(v)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(ParamValue::Empty, Into::into)
    }
}

/// Ordered named parameters for one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing an earlier value under the same name in place.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> + Clone {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

/// The serialized request object for one remote call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEnvelope {
    method: String,
    token: Option<String>,
    params: Params,
}

impl RequestEnvelope {
    /// Builds an envelope. `token` is `None` only for the token-acquisition methods.
    pub fn build(method: impl Into<String>, token: Option<&str>, params: Params) -> Self {
        Self {
            method: method.into(),
            token: token.map(str::to_string),
            params,
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The exact text sent as the request body.
    pub fn to_json(&self) -> Result<String, JqError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for RequestEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // `method` and `token` are owned by the envelope itself.
        let params = self
            .params
            .iter()
            .filter(|(name, _)| *name != "method" && *name != "token");
        let len = 1 + usize::from(self.token.is_some()) + params.clone().count();
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("method", &self.method)?;
        if let Some(token) = &self.token {
            map.serialize_entry("token", token)?;
        }
        for (name, value) in params {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
