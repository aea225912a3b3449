// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Session configuration.
//!
//! A `PitchConfig` names the key, mode and temperament of a session and where
//! the pitch cursor starts. It is read from YAML, or from TOML when the file
//! extension says so, and turns into live key signature, temperament and
//! cursor objects.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::music::notation::{lookup, mode_half_steps, MAQAM_KEY_OVERRIDES};
use crate::music::{KeySignature, Mode};
use crate::pitch::CurrentPitch;
use crate::temperament::standard::{DEFAULT_OCTAVES, TEMPERAMENT_NAMES};
use crate::temperament::{StandardTemperament, Temperament};

/// Root configuration for a pitch session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PitchConfig {
    /// Key, in any letter or generic spelling (e.g., "c", "F#", "n7")
    #[serde(default = "default_key")]
    pub key: String,
    /// Mode name or explicit half-step pattern
    #[serde(default)]
    pub mode: Mode,
    /// Tuning system
    #[serde(default)]
    pub temperament: TemperamentConfig,
    /// Solfège and degree names follow the mode instead of C
    #[serde(default)]
    pub fixed_solfege: bool,
    /// One name per mode note
    #[serde(default)]
    pub custom_note_names: Vec<String>,
    /// Where the pitch cursor starts
    #[serde(default)]
    pub start: StartConfig,
}

fn default_key() -> String {
    "c".to_string()
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            mode: Mode::default(),
            temperament: TemperamentConfig::default(),
            fixed_solfege: false,
            custom_note_names: Vec::new(),
            start: StartConfig::default(),
        }
    }
}

/// Temperament configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemperamentConfig {
    /// Predefined temperament name (e.g., "equal", "pythagorean")
    #[serde(default = "default_temperament")]
    pub name: String,
    /// Divide the octave into this many equal steps instead
    #[serde(default)]
    pub equal_steps: Option<usize>,
    /// Frequency of the lowest note in Hertz
    #[serde(default)]
    pub base_frequency: Option<f64>,
    /// Number of octaves to generate
    #[serde(default = "default_octaves")]
    pub octaves: usize,
}

fn default_temperament() -> String {
    "equal".to_string()
}
fn default_octaves() -> usize {
    DEFAULT_OCTAVES
}

impl Default for TemperamentConfig {
    fn default() -> Self {
        Self {
            name: default_temperament(),
            equal_steps: None,
            base_frequency: None,
            octaves: default_octaves(),
        }
    }
}

/// Starting pitch of the cursor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StartConfig {
    /// Semitone index within the octave
    #[serde(default = "default_start_index")]
    pub index: usize,
    /// Octave number
    #[serde(default = "default_start_octave")]
    pub octave: i32,
}

fn default_start_index() -> usize {
    7
}
fn default_start_octave() -> i32 {
    4
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            index: default_start_index(),
            octave: default_start_octave(),
        }
    }
}

impl PitchConfig {
    /// Load a configuration file, TOML for `.toml` files and YAML otherwise
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        debug!("Loaded config file {:?}", path);
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&contents),
            _ => Self::from_yaml(&contents),
        }
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a configuration from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Check the settings that would otherwise be silently defaulted
    pub fn validate(&self) -> Result<()> {
        if let Mode::Named(name) = &self.mode {
            let name = name.to_lowercase();
            if mode_half_steps(&name).is_none() && lookup(MAQAM_KEY_OVERRIDES, &name).is_none() {
                bail!("Unknown mode: {}", name);
            }
        }
        if let Mode::HalfSteps(steps) = &self.mode {
            if steps.iter().sum::<usize>() == 0 {
                bail!("Half-step pattern must not be empty");
            }
        }
        if self.temperament.equal_steps.is_none()
            && !TEMPERAMENT_NAMES.contains(&self.temperament.name.to_lowercase().as_str())
        {
            bail!("Unknown temperament: {}", self.temperament.name);
        }
        if self.temperament.octaves == 0 {
            bail!("Temperament needs at least one octave");
        }
        if let Some(freq) = self.temperament.base_frequency {
            if freq <= 0.0 {
                bail!("Base frequency must be positive, got {}", freq);
            }
        }
        self.build_current_pitch().map(|_| ())
    }

    /// Build the configured temperament
    pub fn build_temperament(&self) -> StandardTemperament {
        let mut temperament = StandardTemperament::new(&self.temperament.name);
        temperament.set_number_of_octaves(self.temperament.octaves);
        if let Some(steps) = self.temperament.equal_steps {
            temperament.generate_equal_temperament(steps);
        }
        if let Some(freq) = self.temperament.base_frequency {
            temperament.set_base_frequency(freq);
        }
        temperament
    }

    /// Build the configured key signature for a temperament size
    pub fn build_key_signature(&self, number_of_semitones: usize) -> Result<KeySignature> {
        let mut key_signature =
            KeySignature::new(self.mode.clone(), &self.key, number_of_semitones);
        if key_signature.number_of_semitones() != number_of_semitones {
            warn!(
                "Mode spans {} semitones but the temperament has {}",
                key_signature.number_of_semitones(),
                number_of_semitones
            );
        }
        key_signature.set_fixed_solfege(self.fixed_solfege);
        if !self.custom_note_names.is_empty() {
            key_signature
                .set_custom_note_names(self.custom_note_names.clone())
                .context("Invalid custom note names")?;
        }
        Ok(key_signature)
    }

    /// Build the pitch cursor at the configured start
    pub fn build_current_pitch(&self) -> Result<CurrentPitch> {
        let temperament = self.build_temperament();
        let key_signature = self.build_key_signature(temperament.number_of_semitones_in_octave())?;
        Ok(CurrentPitch::new(
            key_signature,
            temperament,
            self.start.index,
            self.start.octave,
        ))
    }
}
