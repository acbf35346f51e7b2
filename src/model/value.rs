//! Dynamically typed plan values.
//!
//! Terraform plans carry attribute trees whose shape depends on the provider
//! schema. [`PlanValue`] closes that open-ended JSON into a fixed set of
//! variants so the flattener can dispatch exhaustively.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// A node in a plan's before/after/overlay tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PlanValue {
    /// JSON `null`, or a field that was not present
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    /// A non-empty list whose elements are all strings
    StringList(Vec<String>),
    /// Any other list
    List(Vec<PlanValue>),
    Map(IndexMap<String, PlanValue>),
}

impl PlanValue {
    /// Returns true for [`PlanValue::Null`]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Render a scalar the way it appears in a flattened diff.
    ///
    /// Containers and null have no scalar rendering.
    #[must_use]
    pub fn render_scalar(&self) -> Option<String> {
        match self {
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) => Some(render_number(n)),
            Self::String(s) => Some(s.clone()),
            Self::Null | Self::StringList(_) | Self::List(_) | Self::Map(_) => None,
        }
    }
}

/// Integral floats print without a fractional part so `0.0` and `0` agree.
/// Numbers are always positional, never in exponent form.
fn render_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

impl From<serde_json::Value> for PlanValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => {
                if !items.is_empty() && items.iter().all(Value::is_string) {
                    Self::StringList(
                        items
                            .into_iter()
                            .filter_map(|v| match v {
                                Value::String(s) => Some(s),
                                _ => None,
                            })
                            .collect(),
                    )
                } else {
                    Self::List(items.into_iter().map(Self::from).collect())
                }
            }
            Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<&str> for PlanValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<bool> for PlanValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<'de> Deserialize<'de> for PlanValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

impl fmt::Display for PlanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::StringList(items) => write!(f, "{}", items.join(",")),
            Self::List(items) => write!(f, "[{} items]", items.len()),
            Self::Map(map) => write!(f, "{{{} keys}}", map.len()),
            scalar => write!(f, "{}", scalar.render_scalar().unwrap_or_default()),
        }
    }
}

/// Deserialize an overlay tree (`after_unknown`, `before_sensitive`,
/// `after_sensitive`).
///
/// Terraform writes `false` when no leaf is marked; that, `null` and a missing
/// field all mean "no overlay". A top-level `true` marks the whole value.
pub fn deserialize_overlay<'de, D>(deserializer: D) -> Result<Option<PlanValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = PlanValue::deserialize(deserializer)?;
    Ok(match value {
        PlanValue::Null | PlanValue::Bool(false) => None,
        other => Some(other),
    })
}
