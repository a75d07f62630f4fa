//! Named aliases of [`Maybe`] for the common JSON payloads, each with an accessor named after
//! its payload. Every accessor behaves like [`Maybe::value`]: absent and null give the
//! payload's zero value.

#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::Maybe;

pub type MaybeString = Maybe<String>;
pub type MaybeInt = Maybe<i32>;
pub type MaybeInt64 = Maybe<i64>;
pub type MaybeFloat64 = Maybe<f64>;
pub type MaybeBool = Maybe<bool>;
/// RFC 3339 timestamps, e.g. `"2022-02-22T02:02:02Z"`.
#[cfg(feature = "chrono")]
pub type MaybeTime = Maybe<DateTime<Utc>>;
/// Any JSON value: objects, arrays and scalars are kept as decoded.
pub type MaybeAny = Maybe<Value>;

impl Maybe<String> {
    /// Borrows the payload; `""` when absent or null.
    pub fn string(&self) -> &str {
        match self {
            Maybe::Value(s) => s,
            _ => "",
        }
    }
}

impl Maybe<i32> {
    pub fn int(&self) -> i32 {
        self.value()
    }
}

impl Maybe<i64> {
    pub fn int64(&self) -> i64 {
        self.value()
    }
}

impl Maybe<f64> {
    pub fn float64(&self) -> f64 {
        self.value()
    }
}

impl Maybe<bool> {
    pub fn bool(&self) -> bool {
        self.value()
    }
}

#[cfg(feature = "chrono")]
impl Maybe<DateTime<Utc>> {
    /// The Unix epoch when absent or null.
    pub fn time(&self) -> DateTime<Utc> {
        self.value()
    }
}

impl Maybe<Value> {
    /// [`Value::Null`] when absent or null.
    pub fn any(&self) -> &Value {
        static NULL: Value = Value::Null;
        match self {
            Maybe::Value(v) => v,
            _ => &NULL,
        }
    }
}
