//! Spin lifecycle
//!
//! `Idle -> Spinning -> Revealed`, or `Idle -> Revealed` in fast mode.
//! The outcome is fixed before any animation is planned, and it is not
//! readable through any public accessor until the reveal.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::SpinError;
use crate::normalize_degrees;
use crate::options::OptionList;
use crate::select::{Override, resolve_override, select};
use crate::settings::Settings;
use crate::wheel::{AnimationPlan, Frame, WheelGeometry};

/// Current phase of the spin lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpinState {
    /// No outcome held
    #[default]
    Idle,
    /// Outcome fixed, animation running, winner hidden
    Spinning,
    /// Winner visible
    Revealed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpinMode {
    #[default]
    Random,
    Forced(Override),
}

/// One press of the spin button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SpinRequest {
    pub mode: SpinMode,
}

impl SpinRequest {
    pub fn random() -> Self {
        Self { mode: SpinMode::Random }
    }

    pub fn forced(forced: Override) -> Self {
        Self {
            mode: SpinMode::Forced(forced),
        }
    }

    /// Force the 1-based slice `n`
    pub fn index(n: usize) -> Self {
        Self::forced(Override::Index(n))
    }

    /// Force the slice with this exact label
    pub fn label(label: impl Into<String>) -> Self {
        Self::forced(Override::Label(label.into()))
    }
}

/// The winner of one spin, by value plus the index it had when chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinOutcome {
    option: String,
    index: usize,
}

impl SpinOutcome {
    pub fn option(&self) -> &str {
        &self.option
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether this outcome still points at the same slice of `options`
    pub fn matches(&self, options: &OptionList) -> bool {
        options.get(self.index) == Some(self.option.as_str())
    }
}

/// Notable transitions, drained by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinEvent {
    OptionsChanged { count: usize },
    SpinStarted { animated: bool },
    OverrideRejected { reason: String },
    Revealed { option: String, index: usize },
    Aborted { reason: String },
}

/// What the presentation layer should tell the user right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    AddOptions,
    ReadyToSpin,
    Spinning,
    Winner(String),
}

impl Prompt {
    pub fn message(&self) -> String {
        match self {
            Prompt::AddOptions => "Add some options to spin the wheel.".to_string(),
            Prompt::ReadyToSpin => "Click the SPIN! button to start.".to_string(),
            Prompt::Spinning => "Spinning...".to_string(),
            Prompt::Winner(label) => format!("Winner: {}", label),
        }
    }
}

/// Owns one session's wheel: options, settings, RNG and spin state
pub struct SpinController<R: Rng = Pcg32> {
    options: OptionList,
    settings: Settings,
    /// Whether this session may force winners
    admin: bool,
    rng: R,
    state: SpinState,
    outcome: Option<SpinOutcome>,
    plan: Option<AnimationPlan>,
    /// Time into the current plan
    elapsed_ms: u32,
    /// Current wheel rotation in degrees, normalized while at rest
    rotation: f32,
    events: Vec<SpinEvent>,
}

impl SpinController<Pcg32> {
    /// Reproducible session
    pub fn with_seed(options: OptionList, settings: Settings, admin: bool, seed: u64) -> Self {
        Self::new(options, settings, admin, Pcg32::seed_from_u64(seed))
    }

    /// Session seeded from the thread RNG
    pub fn from_entropy(options: OptionList, settings: Settings, admin: bool) -> Self {
        Self::new(options, settings, admin, Pcg32::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> SpinController<R> {
    pub fn new(options: OptionList, settings: Settings, admin: bool, rng: R) -> Self {
        log::info!(
            "Wheel session started with {} options (admin: {})",
            options.len(),
            admin
        );
        Self {
            options,
            settings,
            admin,
            rng,
            state: SpinState::Idle,
            outcome: None,
            plan: None,
            elapsed_ms: 0,
            rotation: 0.0,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> SpinState {
        self.state
    }

    pub fn options(&self) -> &OptionList {
        &self.options
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    /// Toggle fast spin; takes effect on the next spin
    pub fn set_fast_spin(&mut self, fast: bool) {
        self.settings.fast_spin = fast;
    }

    /// Replace settings; an in-flight plan keeps the settings it was built with
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// The winner, only once revealed
    pub fn winner(&self) -> Option<&SpinOutcome> {
        match self.state {
            SpinState::Revealed => self.outcome.as_ref(),
            _ => None,
        }
    }

    /// The running animation, only while spinning
    pub fn plan(&self) -> Option<&AnimationPlan> {
        match self.state {
            SpinState::Spinning => self.plan.as_ref(),
            _ => None,
        }
    }

    /// The running animation sampled at the configured frame rate, for
    /// renderers that want the whole frame list up front
    pub fn frames(&self) -> Option<Vec<Frame>> {
        self.plan()
            .map(|plan| plan.frames(self.settings.effective_frame_rate()))
    }

    /// Current wheel rotation in degrees
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn prompt(&self) -> Prompt {
        match self.state {
            _ if self.options.is_empty() => Prompt::AddOptions,
            SpinState::Idle => Prompt::ReadyToSpin,
            SpinState::Spinning => Prompt::Spinning,
            SpinState::Revealed => match &self.outcome {
                Some(outcome) => Prompt::Winner(outcome.option.clone()),
                None => Prompt::ReadyToSpin,
            },
        }
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<SpinEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start a spin.
    ///
    /// Ignored while a spin is already running. From `Idle` or `Revealed`
    /// the previous outcome is discarded, a winner is selected, and the
    /// controller moves to `Revealed` (fast spin) or `Spinning`.
    pub fn spin(&mut self, request: SpinRequest) -> Result<SpinState, SpinError> {
        if self.state == SpinState::Spinning {
            log::debug!("Spin ignored: a spin is already running");
            return Ok(SpinState::Spinning);
        }

        self.outcome = None;
        self.plan = None;
        self.state = SpinState::Idle;

        if self.options.is_empty() {
            log::info!("Spin refused: no options");
            return Err(SpinError::EmptyOptionSet);
        }

        let forced = self.admissible_override(&request);
        let selection = select(&self.options, forced.as_ref(), &mut self.rng)?;
        let geometry = WheelGeometry::for_options(&self.options)?;
        let stop = geometry.stop_angle(selection.index, self.settings.landing, &mut self.rng);
        let target = geometry.rotation_for_stop(stop);

        self.outcome = Some(SpinOutcome {
            option: selection.option,
            index: selection.index,
        });

        if self.settings.effective_fast_spin() {
            self.events.push(SpinEvent::SpinStarted { animated: false });
            self.rotation = target;
            self.reveal();
            return Ok(self.state);
        }

        let plan = AnimationPlan::new(
            self.rotation,
            target,
            self.settings.effective_full_turns(),
            self.settings.direction,
            self.settings.spin_duration_ms,
            self.settings.easing,
        );
        log::debug!(
            "Spin planned: {:.1} degrees over {} ms",
            plan.total_rotation(),
            plan.duration_ms
        );
        self.plan = Some(plan);
        self.elapsed_ms = 0;
        self.state = SpinState::Spinning;
        self.events.push(SpinEvent::SpinStarted { animated: true });
        Ok(self.state)
    }

    /// Advance the animation clock by `delta_ms` and return the rotation to
    /// draw. Completes the spin once the plan's duration has elapsed.
    pub fn advance(&mut self, delta_ms: u32) -> f32 {
        if self.state != SpinState::Spinning {
            return self.rotation;
        }
        let Some(plan) = &self.plan else {
            return self.rotation;
        };

        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        let drawn = plan.rotation_at_ms(self.elapsed_ms);
        self.rotation = drawn;
        if plan.is_complete(self.elapsed_ms) {
            // The wheel rests at the normalized angle; the last frame drawn
            // is the unwrapped one so frame-to-frame motion stays smooth
            if let Err(e) = self.animation_complete() {
                log::warn!("Spin did not complete: {}", e);
            }
        }
        drawn
    }

    /// The presentation layer finished animating.
    ///
    /// Only acts while `Spinning`; repeated calls never reveal twice.
    pub fn animation_complete(&mut self) -> Result<SpinState, SpinError> {
        if self.state != SpinState::Spinning {
            return Ok(self.state);
        }

        let fresh = self
            .outcome
            .as_ref()
            .is_some_and(|outcome| outcome.matches(&self.options));
        if !fresh {
            self.abort(SpinError::StaleOutcome);
            return Err(SpinError::StaleOutcome);
        }

        if let Some(plan) = self.plan.take() {
            self.rotation = normalize_degrees(plan.final_rotation);
        }
        self.reveal();
        Ok(self.state)
    }

    /// Replace the option list. Always ends in `Idle` with no outcome; a
    /// spin that was running is discarded and reported as stale.
    pub fn set_options(&mut self, options: OptionList) -> Result<(), SpinError> {
        let was_spinning = self.state == SpinState::Spinning;
        self.options = options;
        self.events.push(SpinEvent::OptionsChanged {
            count: self.options.len(),
        });
        log::info!("Options updated ({} entries)", self.options.len());

        if was_spinning {
            self.abort(SpinError::StaleOutcome);
            return Err(SpinError::StaleOutcome);
        }
        self.clear();
        Ok(())
    }

    /// Drop any outcome and return to `Idle`. No-op when already idle.
    pub fn reset(&mut self) {
        match self.state {
            SpinState::Idle => {}
            SpinState::Spinning => self.abort(SpinError::StaleOutcome),
            SpinState::Revealed => {
                log::debug!("Reset to idle");
                self.clear();
            }
        }
    }

    fn admissible_override(&mut self, request: &SpinRequest) -> Option<Override> {
        let SpinMode::Forced(forced) = &request.mode else {
            return None;
        };

        let rejection = if !self.admin {
            Some("override needs admin mode".to_string())
        } else if self.settings.override_requires_fast_spin && !self.settings.effective_fast_spin() {
            Some("override needs fast spin".to_string())
        } else {
            resolve_override(&self.options, forced).err().map(|e| e.to_string())
        };

        match rejection {
            Some(reason) => {
                log::warn!("Override ignored ({}); spinning at random", reason);
                self.events.push(SpinEvent::OverrideRejected { reason });
                None
            }
            None => Some(forced.clone()),
        }
    }

    fn reveal(&mut self) {
        self.state = SpinState::Revealed;
        self.elapsed_ms = 0;
        if let Some(outcome) = &self.outcome {
            log::info!("Winner: {} (slice {})", outcome.option, outcome.index + 1);
            self.events.push(SpinEvent::Revealed {
                option: outcome.option.clone(),
                index: outcome.index,
            });
        }
    }

    fn abort(&mut self, reason: SpinError) {
        log::info!("Spin aborted: {}", reason);
        self.events.push(SpinEvent::Aborted {
            reason: reason.to_string(),
        });
        self.rotation = normalize_degrees(self.rotation);
        self.clear();
    }

    fn clear(&mut self) {
        self.state = SpinState::Idle;
        self.outcome = None;
        self.plan = None;
        self.elapsed_ms = 0;
    }
}

impl<R: Rng> fmt::Debug for SpinController<R> {
    // Leaves the outcome out: a Spinning controller must not show its winner
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpinController")
            .field("state", &self.state)
            .field("options", &self.options.len())
            .field("admin", &self.admin)
            .field("rotation", &self.rotation)
            .finish_non_exhaustive()
    }
}
