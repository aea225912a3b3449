// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for pitch and scale computations.
//!
//! Lookups in this crate rarely have a single right answer when they fail, so
//! every failure carries a usable fallback value alongside the error kind.
//! Callers that want degraded-but-continuing behavior call [`Recover::recover`].

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;
use tracing::debug;

/// Result type for operations whose errors carry a default value.
pub type PitchResult<T> = Result<T, Defaulted<T>>;

/// The two error kinds raised by the pitch core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchError {
    /// Structurally wrong input (wrong table length, wrong temperament size, duplicates).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A pitch name or index could not be resolved in any known table.
    #[error("item not found: {0}")]
    ItemNotFound(String),
}

impl PitchError {
    /// Creates an invalid argument error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates an item not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::ItemNotFound(message.into())
    }

    /// Attaches a fallback value to this error.
    pub fn with_default<T>(self, default: T) -> Defaulted<T> {
        Defaulted {
            error: self,
            default,
        }
    }
}

/// An error paired with the value a caller may substitute for the failed result.
#[derive(Debug, Clone, PartialEq)]
pub struct Defaulted<T> {
    /// What went wrong.
    pub error: PitchError,
    /// Best-effort value to use instead.
    pub default: T,
}

impl<T> Defaulted<T> {
    /// Shorthand for an invalid argument error with a default.
    pub fn invalid(message: impl Into<String>, default: T) -> Self {
        PitchError::invalid(message).with_default(default)
    }

    /// Shorthand for an item not found error with a default.
    pub fn not_found(message: impl Into<String>, default: T) -> Self {
        PitchError::not_found(message).with_default(default)
    }

    /// Discards the error and keeps the default.
    pub fn into_default(self) -> T {
        self.default
    }

    /// Converts the carried default, keeping the error kind.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Defaulted<U> {
        Defaulted {
            error: self.error,
            default: f(self.default),
        }
    }
}

impl<T> fmt::Display for Defaulted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl<T: fmt::Debug> StdError for Defaulted<T> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}

/// Catch-and-substitute for [`PitchResult`].
pub trait Recover<T> {
    /// Returns the value, or the default carried by the error.
    fn recover(self) -> T;
}

impl<T> Recover<T> for PitchResult<T> {
    fn recover(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                debug!("Using default value after error: {}", err.error);
                err.default
            }
        }
    }
}
