//! Tri-state fields for serde: a key can be missing, `null`, or carry a value.
//!
//! ```
//! use maybe_field::{MaybeInt, MaybeString};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Deserialize)]
//! struct UserPatch {
//!     #[serde(default)]
//!     name: MaybeString,
//!     #[serde(default)]
//!     age: MaybeInt,
//!     #[serde(default)]
//!     email: MaybeString,
//! }
//!
//! #[derive(Serialize)]
//! struct UserPatchOut<'a> {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     name: Option<Option<&'a String>>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     age: Option<Option<&'a i32>>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     email: Option<Option<&'a String>>,
//! }
//!
//! let patch: UserPatch = serde_json::from_str(r#"{"name":"Alice","age":null}"#).unwrap();
//! assert!(patch.name.has_value() && patch.age.is_null() && patch.email.is_absent());
//! assert_eq!(patch.name.string(), "Alice");
//!
//! let out = UserPatchOut {
//!     name: patch.name.nested(),
//!     age: patch.age.nested(),
//!     email: patch.email.nested(),
//! };
//! assert_eq!(serde_json::to_string(&out).unwrap(), r#"{"name":"Alice","age":null}"#);
//! ```

pub mod kinds;
mod maybe;

pub use kinds::*;
pub use maybe::{
    state::{InvalidStateError, State},
    Maybe,
};

#[cfg(feature = "tracing")]
pub(crate) use tracing::trace;

#[cfg(not(feature = "tracing"))]
/// Forwards to tracing::trace when the tracing feature is enabled
macro_rules! trace {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
pub(crate) use trace;
