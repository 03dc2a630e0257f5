//! Typed statement arguments.
//!
//! Every value bound into a prepared statement travels as a [`Value`], so
//! condition builders and statement assemblers stay independent of the
//! database driver until execution time.

use chrono::{DateTime, Utc};
use rusqlite::ToSql;
use rusqlite::types::ToSqlOutput;

/// A single statement argument.
///
/// The variant set is closed: repositories only ever bind identifiers,
/// money amounts, names, flags, and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Real(f64),
    Text(String),
    Bool(bool),
    Timestamp(DateTime<Utc>),
}

impl Value {
    /// Wraps a slice of identifiers for a set filter.
    pub fn ints(values: &[i64]) -> Vec<Value> {
        values.iter().copied().map(Value::Int).collect()
    }

    /// Wraps a slice of strings for a set filter.
    pub fn texts(values: &[String]) -> Vec<Value> {
        values.iter().cloned().map(Value::Text).collect()
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Value::Int(v) => v.to_sql(),
            Value::Real(v) => v.to_sql(),
            Value::Text(v) => v.to_sql(),
            Value::Bool(v) => v.to_sql(),
            Value::Timestamp(v) => v.to_sql(),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v)
    }
}
