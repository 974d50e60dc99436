//! Spin settings and preferences
//!
//! Stored as JSON next to the session, separate from the option list the
//! user is editing.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::options::{DEFAULT_OPTIONS, OptionList};
use crate::wheel::{Easing, Landing, SpinDirection};

/// Spin speed preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpinSpeed {
    Quick,
    #[default]
    Normal,
    Dramatic,
}

impl SpinSpeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpinSpeed::Quick => "Quick",
            SpinSpeed::Normal => "Normal",
            SpinSpeed::Dramatic => "Dramatic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quick" | "fast" => Some(SpinSpeed::Quick),
            "normal" => Some(SpinSpeed::Normal),
            "dramatic" | "slow" => Some(SpinSpeed::Dramatic),
            _ => None,
        }
    }

    /// Animation length for this preset
    pub fn duration_ms(&self) -> u32 {
        match self {
            SpinSpeed::Quick => 1500,
            SpinSpeed::Normal => DEFAULT_SPIN_DURATION_MS,
            SpinSpeed::Dramatic => 6000,
        }
    }

    /// Extra full turns for this preset
    pub fn full_turns(&self) -> u32 {
        match self {
            SpinSpeed::Quick => 3,
            SpinSpeed::Normal => DEFAULT_FULL_TURNS,
            SpinSpeed::Dramatic => 8,
        }
    }
}

/// Spin settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Speed preset the timing fields were last derived from
    pub speed: SpinSpeed,

    // === Spin ===
    /// Skip the animation and reveal immediately
    pub fast_spin: bool,
    /// Extra whole turns on an animated spin
    pub full_turns: u32,
    /// Animation length in milliseconds
    pub spin_duration_ms: u32,
    /// Frame rate used when sampling plans into frames
    pub frame_rate: u32,
    pub easing: Easing,
    pub direction: SpinDirection,
    pub landing: Landing,

    // === Admin ===
    /// Only honour overrides while fast spin is on
    pub override_requires_fast_spin: bool,

    // === Accessibility ===
    /// Reduced motion (always reveal without animating)
    pub reduced_motion: bool,

    /// Options a new session starts with
    pub options: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed: SpinSpeed::Normal,

            fast_spin: false,
            full_turns: DEFAULT_FULL_TURNS,
            spin_duration_ms: DEFAULT_SPIN_DURATION_MS,
            frame_rate: DEFAULT_FRAME_RATE,
            easing: Easing::CubicOut,
            direction: SpinDirection::Clockwise,
            landing: Landing::Center,

            override_requires_fast_spin: false,

            reduced_motion: false,

            options: DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Settings {
    /// Create settings from a speed preset (applies preset defaults)
    pub fn from_preset(preset: SpinSpeed) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a speed preset (updates timing fields)
    pub fn apply_preset(&mut self, preset: SpinSpeed) {
        self.speed = preset;
        self.spin_duration_ms = preset.duration_ms();
        self.full_turns = preset.full_turns();
    }

    /// Effective fast spin (respects reduced_motion)
    pub fn effective_fast_spin(&self) -> bool {
        self.fast_spin || self.reduced_motion
    }

    /// Full turns clamped to the supported range
    pub fn effective_full_turns(&self) -> u32 {
        self.full_turns.clamp(MIN_FULL_TURNS, MAX_FULL_TURNS)
    }

    /// Frame rate clamped to 1..=1000 so a frame is at least 1 ms
    pub fn effective_frame_rate(&self) -> u32 {
        self.frame_rate.clamp(1, MAX_FRAME_RATE)
    }

    /// Length of one frame in whole milliseconds, never zero
    pub fn frame_interval_ms(&self) -> u32 {
        (1000 / self.effective_frame_rate()).max(1)
    }

    /// Configured starter options as a list
    pub fn option_list(&self) -> OptionList {
        OptionList::new(&self.options)
    }

    /// Read settings from a JSON file
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load settings, falling back to defaults when the file is missing
    /// or unreadable
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("spin_wheel_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(!s.effective_fast_spin());
        assert_eq!(s.effective_full_turns(), DEFAULT_FULL_TURNS);
        assert_eq!(s.option_list().len(), 6);
    }

    #[test]
    fn test_reduced_motion_forces_fast_spin() {
        let s = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(s.effective_fast_spin());
    }

    #[test]
    fn test_presets() {
        let s = Settings::from_preset(SpinSpeed::Dramatic);
        assert_eq!(s.spin_duration_ms, 6000);
        assert_eq!(s.full_turns, 8);
        assert_eq!(SpinSpeed::from_str("QUICK"), Some(SpinSpeed::Quick));
        assert_eq!(SpinSpeed::from_str(SpinSpeed::Normal.as_str()), Some(SpinSpeed::Normal));
    }

    #[test]
    fn test_full_turns_clamped() {
        let s = Settings {
            full_turns: 0,
            ..Default::default()
        };
        assert_eq!(s.effective_full_turns(), MIN_FULL_TURNS);
        let s = Settings {
            full_turns: 1000,
            ..Default::default()
        };
        assert_eq!(s.effective_full_turns(), MAX_FULL_TURNS);
    }

    #[test]
    fn test_frame_rate_clamped() {
        let s = Settings {
            frame_rate: 2000,
            ..Default::default()
        };
        assert_eq!(s.effective_frame_rate(), MAX_FRAME_RATE);
        assert_eq!(s.frame_interval_ms(), 1);

        let s = Settings {
            frame_rate: 0,
            ..Default::default()
        };
        assert_eq!(s.effective_frame_rate(), 1);
        assert_eq!(s.frame_interval_ms(), 1000);
        assert_eq!(Settings::default().frame_interval_ms(), 16);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s: Settings = serde_json::from_str(r#"{ "fast_spin": true, "direction": "CounterClockwise" }"#).unwrap();
        assert!(s.fast_spin);
        assert_eq!(s.direction, SpinDirection::CounterClockwise);
        assert_eq!(s.spin_duration_ms, DEFAULT_SPIN_DURATION_MS);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save_load");
        let s = Settings {
            fast_spin: true,
            options: vec!["Red".into(), "Blue".into()],
            ..Default::default()
        };
        s.save(&path).unwrap();
        assert_eq!(Settings::load(&path), s);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_or_corrupt_file_falls_back() {
        let missing = temp_path("missing");
        assert_eq!(Settings::load(&missing), Settings::default());

        let corrupt = temp_path("corrupt");
        std::fs::write(&corrupt, "{ not json").unwrap();
        assert!(matches!(Settings::try_load(&corrupt), Err(SettingsError::Parse(_))));
        assert_eq!(Settings::load(&corrupt), Settings::default());
        let _ = std::fs::remove_file(&corrupt);
    }
}
