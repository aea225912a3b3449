// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory core.
//!
//! Name tables and notation helpers, generic scales, and key signatures with
//! their conversion and transposition operations.

pub mod key_signature;
pub mod notation;
pub mod scale;
mod transform;

pub use key_signature::{KeySignature, Mode};
pub use notation::PitchNotation;
pub use scale::Scale;
pub use transform::InvertMode;
