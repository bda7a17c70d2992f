//! Game settings and preferences
//!
//! Read once at startup from JSON (a file for the native demo, page config in
//! the browser). Never written back.

use serde::{Deserialize, Serialize};

use crate::tuning::{Tuning, TuningError, TuningPreset};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Named calibration to play with
    pub preset: TuningPreset,
    /// Full calibration replacing the preset, if it validates
    pub tuning_override: Option<Tuning>,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// Reduced motion (no popup bounce, no ball spin)
    pub reduced_motion: bool,

    // === Demo ===
    /// Let the autoplay batter take every swing
    pub autoplay: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preset: TuningPreset::Standard,
            tuning_override: None,
            show_fps: false,
            reduced_motion: false,
            autoplay: false,
        }
    }
}

impl Settings {
    /// Settings for a named preset, everything else default
    pub fn from_preset(preset: TuningPreset) -> Self {
        Self {
            preset,
            ..Self::default()
        }
    }

    /// Parse settings JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Active calibration: the override when it validates, else the preset
    pub fn tuning(&self) -> Tuning {
        match &self.tuning_override {
            Some(tuning) => match tuning.validate() {
                Ok(()) => {
                    log::info!("Using custom tuning");
                    *tuning
                }
                Err(e) => {
                    log::warn!(
                        "Ignoring tuning override ({}), using {} preset",
                        e,
                        self.preset.as_str()
                    );
                    self.preset.tuning()
                }
            },
            None => self.preset.tuning(),
        }
    }

    /// Apply a `?preset=` style value; unknown names leave the preset alone
    pub fn apply_preset_name(&mut self, name: &str) {
        match name.parse::<TuningPreset>() {
            Ok(preset) => {
                log::info!("Preset: {}", preset.as_str());
                self.preset = preset;
            }
            Err(e) => log::warn!("{}", e),
        }
    }
}
