// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch cursor.
//!
//! [`CurrentPitch`] tracks one note through a key signature and a temperament.

pub mod current;

pub use current::{CurrentPitch, PitchValue};
