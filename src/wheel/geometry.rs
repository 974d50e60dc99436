//! Slice geometry
//!
//! Each of the `n` options owns a slice of `360 / n` degrees. Slice `i`
//! spans `[i * slice, (i + 1) * slice)` in wheel-frame degrees.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{FULL_TURN, JITTER_MARGIN};
use crate::error::SpinError;
use crate::options::OptionList;
use crate::{normalize_degrees, polar_to_screen};

/// Which way the wheel turns while spinning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpinDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl SpinDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpinDirection::Clockwise => "clockwise",
            SpinDirection::CounterClockwise => "counter-clockwise",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clockwise" | "cw" => Some(SpinDirection::Clockwise),
            "counter-clockwise" | "counterclockwise" | "ccw" => Some(SpinDirection::CounterClockwise),
            _ => None,
        }
    }

    /// +1 for clockwise, -1 for counter-clockwise
    pub fn sign(&self) -> f32 {
        match self {
            SpinDirection::Clockwise => 1.0,
            SpinDirection::CounterClockwise => -1.0,
        }
    }
}

/// Where inside the winning slice the marker comes to rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Landing {
    /// Exact slice center
    #[default]
    Center,
    /// Random point strictly inside the slice, clear of the edges
    Jittered,
}

/// Angular extent of one slice, in wheel-frame degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceSpan {
    /// Start angle, normalized to [0, 360)
    pub start: f32,
    /// End angle, normalized to [0, 360)
    pub end: f32,
}

impl SliceSpan {
    pub fn new(start: f32, end: f32) -> Self {
        Self {
            start: normalize_degrees(start),
            end: normalize_degrees(end),
        }
    }

    /// Angular width (handles wraparound; a full circle reports 360)
    pub fn angular_span(&self) -> f32 {
        let span = self.end - self.start;
        if span <= 0.0 { span + FULL_TURN } else { span }
    }

    /// Mid angle of the span
    pub fn center(&self) -> f32 {
        normalize_degrees(self.start + self.angular_span() / 2.0)
    }

    /// Inclusive containment check
    pub fn contains_angle(&self, angle: f32) -> bool {
        let offset = normalize_degrees(angle - self.start);
        offset <= self.angular_span()
    }

    /// Containment excluding both edges
    pub fn strictly_contains(&self, angle: f32) -> bool {
        let offset = normalize_degrees(angle - self.start);
        offset > 0.0 && offset < self.angular_span()
    }
}

/// Layout of a wheel with a fixed number of equal slices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelGeometry {
    slices: usize,
}

impl WheelGeometry {
    pub fn new(slices: usize) -> Result<Self, SpinError> {
        if slices == 0 {
            return Err(SpinError::EmptyOptionSet);
        }
        Ok(Self { slices })
    }

    pub fn for_options(options: &OptionList) -> Result<Self, SpinError> {
        Self::new(options.len())
    }

    pub fn slices(&self) -> usize {
        self.slices
    }

    /// Width of one slice in degrees
    #[inline]
    pub fn slice_angle(&self) -> f32 {
        FULL_TURN / self.slices as f32
    }

    pub fn slice_span(&self, index: usize) -> SliceSpan {
        let slice = self.slice_angle();
        let start = index as f32 * slice;
        SliceSpan::new(start, start + slice)
    }

    /// Wheel-frame angle of a slice's center
    pub fn slice_center(&self, index: usize) -> f32 {
        let slice = self.slice_angle();
        index as f32 * slice + slice / 2.0
    }

    /// Slice that owns a wheel-frame angle
    pub fn slice_at(&self, angle: f32) -> usize {
        let idx = (normalize_degrees(angle) / self.slice_angle()).floor() as usize;
        idx.min(self.slices - 1)
    }

    /// Rotation, normalized to [0, 360), that puts `stop_angle` under the marker
    #[inline]
    pub fn rotation_for_stop(&self, stop_angle: f32) -> f32 {
        normalize_degrees(-stop_angle)
    }

    /// Rotation that centers slice `index` under the marker:
    /// `-(i * slice + slice / 2)`, normalized
    pub fn target_angle(&self, index: usize) -> f32 {
        self.rotation_for_stop(self.slice_center(index))
    }

    /// Wheel-frame angle under the marker at a given rotation
    #[inline]
    pub fn pointer_angle(&self, rotation: f32) -> f32 {
        normalize_degrees(-rotation)
    }

    /// Slice under the marker at a given rotation
    pub fn slice_under_marker(&self, rotation: f32) -> usize {
        self.slice_at(self.pointer_angle(rotation))
    }

    /// Random stop angle strictly inside slice `index`, keeping a margin
    /// from both edges
    pub fn jittered_stop<R: Rng>(&self, index: usize, rng: &mut R) -> f32 {
        let slice = self.slice_angle();
        let u: f32 = rng.random();
        let fraction = JITTER_MARGIN + u * (1.0 - 2.0 * JITTER_MARGIN);
        normalize_degrees(index as f32 * slice + fraction * slice)
    }

    /// Wheel-frame stop angle for slice `index` under a landing mode
    pub fn stop_angle<R: Rng>(&self, index: usize, landing: Landing, rng: &mut R) -> f32 {
        match landing {
            Landing::Center => self.slice_center(index),
            Landing::Jittered => self.jittered_stop(index, rng),
        }
    }

    /// Screen-space anchor for a slice label at `radius`, with the wheel
    /// turned by `rotation`
    pub fn label_anchor(&self, index: usize, radius: f32, rotation: f32) -> Vec2 {
        polar_to_screen(radius, self.slice_center(index) + rotation)
    }
}
