//! Easing curves
//!
//! Every curve here maps t in [0, 1] to progress in [0, 1], is monotonic,
//! and has velocity falling to zero at t = 1 so the wheel coasts to a stop.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Easing {
    #[default]
    CubicOut,
    QuartOut,
    QuintOut,
    SineOut,
}

impl Easing {
    pub const ALL: [Easing; 4] = [Easing::CubicOut, Easing::QuartOut, Easing::QuintOut, Easing::SineOut];

    pub fn as_str(&self) -> &'static str {
        match self {
            Easing::CubicOut => "cubic-out",
            Easing::QuartOut => "quart-out",
            Easing::QuintOut => "quint-out",
            Easing::SineOut => "sine-out",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cubic-out" | "cubic" => Some(Easing::CubicOut),
            "quart-out" | "quart" => Some(Easing::QuartOut),
            "quint-out" | "quint" => Some(Easing::QuintOut),
            "sine-out" | "sine" => Some(Easing::SineOut),
            _ => None,
        }
    }

    /// Map normalized time to normalized progress
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            Easing::CubicOut => 1.0 - inv.powi(3),
            Easing::QuartOut => 1.0 - inv.powi(4),
            Easing::QuintOut => 1.0 - inv.powi(5),
            Easing::SineOut => (t * std::f32::consts::FRAC_PI_2).sin(),
        }
    }
}
