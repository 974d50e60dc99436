//! Wheel geometry and animation
//!
//! Angle convention used throughout: degrees, measured clockwise from the
//! top of the wheel. Slice 0 starts at 0 and slices follow clockwise. The
//! marker is fixed at the top. A wheel rotation of `r` degrees turns the
//! wheel clockwise, so the wheel-frame angle sitting under the marker is
//! `-r` (normalized).
//!
//! Nothing in here sleeps or keeps time: plans are data that a renderer
//! samples on its own clock.

pub mod easing;
pub mod geometry;
pub mod plan;

pub use easing::Easing;
pub use geometry::{Landing, SliceSpan, SpinDirection, WheelGeometry};
pub use plan::{AnimationPlan, Frame};
