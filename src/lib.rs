//! Spin Wheel - a randomized option picker
//!
//! Core modules:
//! - `options`: The editable option list the wheel is built from
//! - `select`: Winner selection (uniform random or admin override)
//! - `wheel`: Slice geometry, easing curves and animation plans
//! - `controller`: Spin lifecycle state machine
//! - `settings`: Persisted spin preferences

pub mod controller;
pub mod error;
pub mod options;
pub mod select;
pub mod settings;
pub mod wheel;

pub use controller::{Prompt, SpinController, SpinEvent, SpinMode, SpinOutcome, SpinRequest, SpinState};
pub use error::{SettingsError, SpinError};
pub use options::OptionList;
pub use select::{Override, Selection, select};
pub use settings::Settings;

use glam::Vec2;

/// Wheel configuration constants
pub mod consts {
    /// Degrees in a full turn
    pub const FULL_TURN: f32 = 360.0;

    /// Extra full rotations added to an animated spin
    pub const DEFAULT_FULL_TURNS: u32 = 5;
    /// Bounds for the configurable number of extra turns
    pub const MIN_FULL_TURNS: u32 = 1;
    pub const MAX_FULL_TURNS: u32 = 12;

    /// Duration of the spin animation in milliseconds
    pub const DEFAULT_SPIN_DURATION_MS: u32 = 3000;
    /// Frame rate used when sampling a plan into discrete frames
    pub const DEFAULT_FRAME_RATE: u32 = 60;
    /// Highest frame rate that still gives a whole-millisecond frame
    pub const MAX_FRAME_RATE: u32 = 1000;

    /// Fraction of a slice kept clear on each side by jittered landings
    pub const JITTER_MARGIN: f32 = 0.1;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(consts::FULL_TURN);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= consts::FULL_TURN { 0.0 } else { a }
}

/// Convert a wheel angle (degrees, clockwise from the top) and radius to a
/// screen-space offset from the wheel center (y grows downward)
#[inline]
pub fn polar_to_screen(r: f32, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(r * theta.sin(), -r * theta.cos())
}

/// Convert a screen-space offset (y down) back to (radius, wheel angle in degrees)
#[inline]
pub fn screen_to_polar(pos: Vec2) -> (f32, f32) {
    let degrees = pos.x.atan2(-pos.y).to_degrees();
    (pos.length(), normalize_degrees(degrees))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(-225.0), 135.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert!(normalize_degrees(-1e-7) < consts::FULL_TURN);
    }

    #[test]
    fn test_polar_roundtrip_top_and_right() {
        let top = polar_to_screen(100.0, 0.0);
        assert!((top - Vec2::new(0.0, -100.0)).length() < 0.001);

        // 90 degrees clockwise from the top is the right-hand side
        let right = polar_to_screen(100.0, 90.0);
        assert!((right - Vec2::new(100.0, 0.0)).length() < 0.001);

        let (r, deg) = screen_to_polar(polar_to_screen(50.0, 225.0));
        assert!((r - 50.0).abs() < 0.001);
        assert!((deg - 225.0).abs() < 0.01);
    }
}
