use std::{fmt, str::FromStr};

use thiserror::Error;

/// Which of the three shapes a [`Maybe`](super::Maybe) field has, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// The key was missing from the input.
    #[default]
    Absent,
    /// The key was present with a literal `null`.
    Null,
    /// The key was present with a non-null value.
    HasValue,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidStateError {
    #[error("invalid state tag {0}; must be one of 0 (absent), 1 (null) or 2 (has value)")]
    Tag(u8),
    #[error("invalid state name `{0}`; must be one of absent, null or value")]
    Name(String),
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Absent => "absent",
            State::Null => "null",
            State::HasValue => "value",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for State {
    type Err = InvalidStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "absent" => Ok(Self::Absent),
            "null" => Ok(Self::Null),
            "value" => Ok(Self::HasValue),
            _ => Err(InvalidStateError::Name(s.to_string())),
        }
    }
}

impl TryFrom<u8> for State {
    type Error = InvalidStateError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Absent),
            1 => Ok(Self::Null),
            2 => Ok(Self::HasValue),
            _ => Err(InvalidStateError::Tag(tag)),
        }
    }
}

impl From<State> for u8 {
    fn from(state: State) -> u8 {
        match state {
            State::Absent => 0,
            State::Null => 1,
            State::HasValue => 2,
        }
    }
}
