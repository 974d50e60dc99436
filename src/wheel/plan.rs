//! Animation plans
//!
//! A plan is computed once per spin, after the winner is fixed, and is
//! never re-targeted. It carries rotation only: no label, no index.

use serde::{Deserialize, Serialize};

use super::easing::Easing;
use super::geometry::SpinDirection;
use crate::consts::FULL_TURN;
use crate::normalize_degrees;

/// A sampled rotation at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Milliseconds since the spin started
    pub at_ms: u32,
    /// Absolute wheel rotation in degrees (not normalized)
    pub rotation: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationPlan {
    /// Rotation the wheel rests at when the spin starts
    pub start_rotation: f32,
    /// Absolute rotation at the end of the spin
    pub final_rotation: f32,
    /// `final_rotation` normalized to [0, 360)
    pub target_angle: f32,
    /// Extra whole turns on top of the landing adjustment
    pub full_turns: u32,
    pub direction: SpinDirection,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl AnimationPlan {
    /// Plan a spin from `start_rotation` that comes to rest at `target_angle`
    /// after `full_turns` extra turns in `direction`
    pub fn new(
        start_rotation: f32,
        target_angle: f32,
        full_turns: u32,
        direction: SpinDirection,
        duration_ms: u32,
        easing: Easing,
    ) -> Self {
        let target_angle = normalize_degrees(target_angle);
        let adjustment = match direction {
            SpinDirection::Clockwise => normalize_degrees(target_angle - start_rotation),
            SpinDirection::CounterClockwise => normalize_degrees(start_rotation - target_angle),
        };
        let travel = full_turns as f32 * FULL_TURN + adjustment;
        let final_rotation = start_rotation + direction.sign() * travel;

        Self {
            start_rotation,
            final_rotation,
            target_angle,
            full_turns,
            direction,
            duration_ms,
            easing,
        }
    }

    /// Signed degrees traversed over the whole spin
    pub fn total_rotation(&self) -> f32 {
        self.final_rotation - self.start_rotation
    }

    /// Rotation at normalized time t in [0, 1]
    pub fn rotation_at(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return self.final_rotation;
        }
        self.start_rotation + self.total_rotation() * self.easing.apply(t)
    }

    /// Rotation after `elapsed_ms` of wall-clock time
    pub fn rotation_at_ms(&self, elapsed_ms: u32) -> f32 {
        if self.duration_ms == 0 {
            return self.final_rotation;
        }
        self.rotation_at(elapsed_ms as f32 / self.duration_ms as f32)
    }

    /// Wheel-frame angle that ends under the marker, for widgets that run
    /// their own spin-to-stop routine
    pub fn stop_angle(&self) -> f32 {
        normalize_degrees(-self.target_angle)
    }

    pub fn is_complete(&self, elapsed_ms: u32) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// Number of frame intervals at `frame_rate` frames per second
    pub fn frame_count(&self, frame_rate: u32) -> u32 {
        let frames = (self.duration_ms as u64 * frame_rate.max(1) as u64).div_ceil(1000);
        frames.max(1) as u32
    }

    /// Sample the plan into frames, first at t = 0, last exactly on
    /// `final_rotation`
    pub fn frames(&self, frame_rate: u32) -> Vec<Frame> {
        let count = self.frame_count(frame_rate);
        (0..=count)
            .map(|i| {
                let at_ms = (self.duration_ms as u64 * i as u64 / count as u64) as u32;
                let rotation = if i == count {
                    self.final_rotation
                } else {
                    self.rotation_at(i as f32 / count as f32)
                };
                Frame { at_ms, rotation }
            })
            .collect()
    }
}
