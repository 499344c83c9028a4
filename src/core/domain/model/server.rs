//! Domain models for server records served by `/servers`.

use crate::core::domain::value_object::ServerId;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A monitored host as returned by the `/servers` endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Server {
    /// Backend identifier (a stringified object id).
    #[serde(rename = "_id")]
    pub id: ServerId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Latest utilization figures.
    #[serde(default)]
    pub metrics: Metrics,
    /// Log entries. Carried through untouched, never read.
    #[serde(default)]
    pub logs: Vec<serde_json::Value>,
}

/// Point-in-time utilization percentages as reported by the backend.
///
/// Either figure may be missing or `null` when the record was created from
/// a form field that did not parse as a number.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Metrics {
    #[serde(default)]
    pub cpu_usage: Option<f64>,
    #[serde(default)]
    pub memory_usage: Option<f64>,
}

/// Utilization figures read from form fields.
///
/// Each field holds the result of [`parse_int`]; `None` is sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsInput {
    pub cpu_usage: Option<Number>,
    pub memory_usage: Option<Number>,
}

impl MetricsInput {
    pub fn parse(cpu_usage: &str, memory_usage: &str) -> Self {
        Self {
            cpu_usage: parse_int(cpu_usage),
            memory_usage: parse_int(memory_usage),
        }
    }
}

/// Body of `POST /servers`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewServer {
    pub name: String,
    pub metrics: MetricsInput,
    pub logs: Vec<serde_json::Value>,
}

impl NewServer {
    /// A new record always starts without logs.
    pub fn new(name: impl Into<String>, metrics: MetricsInput) -> Self {
        Self {
            name: name.into(),
            metrics,
            logs: Vec::new(),
        }
    }
}

/// Body of `PUT /servers/{id}`. Logs are left as they are on the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerUpdate {
    pub name: String,
    pub metrics: MetricsInput,
}

/// Parses the leading integer of `text` the way a browser's `parseInt` does
/// for decimal input: leading whitespace is skipped, an optional sign is
/// accepted, and digits are read up to the first non-digit. Returns `None`
/// when no digit is found.
///
/// Values beyond `i64` come back as the nearest float; only a digit run too
/// long for any finite float yields `None`.
pub fn parse_int(text: &str) -> Option<Number> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let literal = format!("{}{}", if negative { "-" } else { "" }, &rest[..digits_end]);
    match literal.parse::<i64>() {
        Ok(value) => Some(Number::from(value)),
        Err(_) => literal.parse::<f64>().ok().and_then(Number::from_f64),
    }
}

/// Formats a reported metric for display; missing figures show as `n/a`.
pub(crate) fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "n/a".to_string(),
    }
}
