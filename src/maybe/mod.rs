pub mod state;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::trace;

use self::state::State;

/// serde value that can be Absent, Null, or Value(T)
///
/// Fields of this type must be annotated with `#[serde(default)]`. Without it serde-derive
/// hands a missing key to the deserializer as `null`, and the field decodes as
/// [`Maybe::Null`] instead of [`Maybe::Absent`].
///
/// The [`Serialize`] impl writes both `Absent` and `Null` as `null`, so it does not
/// round-trip. To write the three states back out, serialize [`Maybe::nested`] (or
/// [`Maybe::into_nested`]) from an `Option<Option<T>>` field annotated with
/// `#[serde(skip_serializing_if = "Option::is_none")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Maybe<T> {
    /// A missing key.
    pub const fn absent() -> Self {
        Maybe::Absent
    }

    /// A key present with `null`.
    pub const fn null() -> Self {
        Maybe::Null
    }

    /// A key present with `value`.
    pub const fn with_value(value: T) -> Self {
        Maybe::Value(value)
    }

    /// Builds a `Maybe` from a state tag. `value` is dropped unless `state` is
    /// [`State::HasValue`].
    pub fn from_state(state: State, value: T) -> Self {
        match state {
            State::Absent => Maybe::Absent,
            State::Null => Maybe::Null,
            State::HasValue => Maybe::Value(value),
        }
    }

    /// The variant tag, without the payload.
    pub const fn state(&self) -> State {
        match self {
            Maybe::Absent => State::Absent,
            Maybe::Null => State::Null,
            Maybe::Value(_) => State::HasValue,
        }
    }

    /// True when the key was missing. Exactly one of `is_absent`, `is_null` and
    /// `has_value` holds.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Maybe::Null)
    }

    pub const fn has_value(&self) -> bool {
        matches!(self, Maybe::Value(_))
    }

    /// Returns a clone of the payload, or `T::default()` when absent or null.
    pub fn value(&self) -> T
    where
        T: Clone + Default,
    {
        match self {
            Maybe::Value(v) => v.clone(),
            _ => T::default(),
        }
    }

    pub fn into_value(self) -> T
    where
        T: Default,
    {
        match self {
            Maybe::Value(v) => v,
            _ => T::default(),
        }
    }

    /// Absent and null both map to `None`.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Maybe::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Absent and null both map to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Value(v) => Some(v),
            _ => None,
        }
    }

    /// The write-side form of this field:
    ///
    /// | `Maybe`    | nested           | JSON with `skip_serializing_if = "Option::is_none"` |
    /// |------------|------------------|------------------------------------------------------|
    /// | `Absent`   | `None`           | key omitted                                          |
    /// | `Null`     | `Some(None)`     | `null`                                               |
    /// | `Value(v)` | `Some(Some(&v))` | `v`                                                  |
    pub fn nested(&self) -> Option<Option<&T>> {
        self.as_ref().into_nested()
    }

    pub fn into_nested(self) -> Option<Option<T>> {
        match self {
            Maybe::Absent => None,
            Maybe::Null => Some(None),
            Maybe::Value(v) => Some(Some(v)),
        }
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Absent => Maybe::Absent,
            Maybe::Null => Maybe::Null,
            Maybe::Value(v) => Maybe::Value(v),
        }
    }

    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Absent => Maybe::Absent,
            Maybe::Null => Maybe::Null,
            Maybe::Value(v) => Maybe::Value(v),
        }
    }

    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Absent => Maybe::Absent,
            Maybe::Null => Maybe::Null,
            Maybe::Value(v) => Maybe::Value(f(v)),
        }
    }

    /// Applies this field to `target` as a partial update: absent keeps the current value,
    /// null clears it, a value replaces it.
    pub fn patch(self, target: &mut Option<T>) {
        match self {
            Maybe::Absent => (),
            Maybe::Null => *target = None,
            Maybe::Value(v) => *target = Some(v),
        }
    }
}

// no `T: Default` bound, unlike the derive
impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(opt: Option<T>) -> Maybe<T> {
        match opt {
            Some(v) => Maybe::Value(v),
            None => Maybe::Null,
        }
    }
}

impl<T> From<Option<Option<T>>> for Maybe<T> {
    fn from(nested: Option<Option<T>>) -> Maybe<T> {
        match nested {
            None => Maybe::Absent,
            Some(inner) => inner.into(),
        }
    }
}

impl<T> From<Maybe<T>> for Option<Option<T>> {
    fn from(maybe: Maybe<T>) -> Option<Option<T>> {
        maybe.into_nested()
    }
}

impl<'de, T> Deserialize<'de> for Maybe<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // only reached when the key is present; a missing key stays at Default
        let maybe = Maybe::from(Option::<T>::deserialize(deserializer)?);
        trace!(state = %maybe.state(), "decoded Maybe field");
        Ok(maybe)
    }
}

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // lossy: absent is written as null too
            Maybe::Absent | Maybe::Null => serializer.serialize_none(),
            Maybe::Value(v) => serializer.serialize_some(v),
        }
    }
}
