#![forbid(unsafe_code)]

//! Transition controller: the fade-out → swap → fade-in machine.
//!
//! Owns the single shared display surface. A swap request fades the old
//! image out, swaps the source after the settle delay, waits for the load
//! confirmation, and fades the new image in. The machine is an explicit
//! `Idle → FadingOut → Loading → FadingIn → Idle` cycle and advances only
//! on [`tick`](TransitionController::tick) and the load callbacks, never
//! on a wall clock.
//!
//! # Invariants
//!
//! 1. A transition starts only while `pending` is false.
//! 2. `displayed` changes at the swap midpoint, never at transition start,
//!    so a fade-out always shows the previous image.
//! 3. While `pending`, a request for a different key is queued (last
//!    requested wins) and starts immediately after the in-flight swap
//!    step. No two fade-outs ever run at once.
//! 4. A request repeating the displayed, in-flight, or queued key is a
//!    no-op.
//!
//! # Failure Modes
//!
//! - Source load failure: logged, then the fade-in proceeds anyway.
//!   Presentation degradation, not an error.
//! - Key with no asset (and no default mapping): the swap step emits no
//!   source change and skips the load wait, but the machine still
//!   completes so focus and display stay consistent.

use std::time::Duration;

use tracing::{debug, trace, warn};

use glide_core::assets::AssetMap;
use glide_core::key::ContentKey;

use crate::effects::Effect;

/// Phase of the display-surface machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Nothing in flight.
    Idle,
    /// Fade-out applied; counting down the settle delay to the swap step.
    FadingOut,
    /// Source swapped; awaiting the load confirmation.
    Loading,
    /// Fade-in applied; counting down its visual duration.
    FadingIn,
}

/// Externally observable transition state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionState {
    displayed: Option<ContentKey>,
    pending: bool,
}

impl TransitionState {
    /// Key of the image currently on the display surface.
    pub fn displayed(&self) -> Option<&ContentKey> {
        self.displayed.as_ref()
    }

    /// Whether a transition is between its start and its fade-in.
    pub fn pending(&self) -> bool {
        self.pending
    }
}

/// Drives the shared display surface through timed cross-fades.
#[derive(Debug, Clone)]
pub struct TransitionController {
    assets: AssetMap,
    fade_out: Duration,
    fade_in: Duration,
    state: TransitionState,
    phase: TransitionPhase,
    remaining: Duration,
    /// Key the in-flight transition is heading to.
    target: Option<ContentKey>,
    /// Superseding key, honored right after the in-flight swap step.
    queued: Option<ContentKey>,
}

impl TransitionController {
    /// Create a controller over `assets` with the given settle delay and
    /// fade-in duration.
    pub fn new(assets: AssetMap, fade_out: Duration, fade_in: Duration) -> Self {
        Self {
            assets,
            fade_out,
            fade_in,
            state: TransitionState::default(),
            phase: TransitionPhase::Idle,
            remaining: Duration::ZERO,
            target: None,
            queued: None,
        }
    }

    /// Read access to the transition state.
    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    /// Current machine phase.
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Request the display surface show `key`.
    ///
    /// Idempotent against the displayed, in-flight, and queued keys; a
    /// distinct key either starts a transition now or queues behind the
    /// one in flight.
    pub fn request_swap(&mut self, key: &ContentKey, out: &mut Vec<Effect>) {
        if self.state.pending {
            if self.queued.as_ref() == Some(key) {
                return;
            }
            if self.queued.is_none() && self.target.as_ref() == Some(key) {
                return;
            }
            // Last requested key wins, eventually.
            debug!(key = %key, "transition in flight, queueing swap");
            self.queued = Some(key.clone());
            return;
        }

        if self.state.displayed.as_ref() == Some(key) {
            trace!(key = %key, "swap request repeats displayed key");
            return;
        }

        self.begin(key.clone(), out);
    }

    /// Advance the machine's timers by `dt`.
    pub fn tick(&mut self, dt: Duration, out: &mut Vec<Effect>) {
        match self.phase {
            TransitionPhase::FadingOut => {
                if dt >= self.remaining {
                    self.swap_step(out);
                } else {
                    self.remaining -= dt;
                }
            }
            TransitionPhase::FadingIn => {
                if dt >= self.remaining {
                    self.remaining = Duration::ZERO;
                    self.phase = TransitionPhase::Idle;
                } else {
                    self.remaining -= dt;
                }
            }
            TransitionPhase::Idle | TransitionPhase::Loading => {}
        }
    }

    /// The host confirmed the swapped source finished loading.
    pub fn source_loaded(&mut self, out: &mut Vec<Effect>) {
        if self.phase != TransitionPhase::Loading {
            trace!("load confirmation outside Loading phase, ignored");
            return;
        }
        self.finish(out);
    }

    /// The host reported the swapped source failed to load. The fade-in
    /// proceeds regardless.
    pub fn source_failed(&mut self, out: &mut Vec<Effect>) {
        if self.phase != TransitionPhase::Loading {
            trace!("load failure outside Loading phase, ignored");
            return;
        }
        warn!(displayed = ?self.state.displayed, "source failed to load, fading in anyway");
        self.finish(out);
    }

    fn begin(&mut self, key: ContentKey, out: &mut Vec<Effect>) {
        debug!(key = %key, "transition start");
        self.state.pending = true;
        self.target = Some(key);
        self.remaining = self.fade_out;
        self.phase = TransitionPhase::FadingOut;
        out.push(Effect::FadeOut);
    }

    /// The midpoint: swap the source and hand over to the queued successor
    /// or the load wait.
    fn swap_step(&mut self, out: &mut Vec<Effect>) {
        let Some(key) = self.target.take() else {
            // Unreachable by construction; recover to a quiet state.
            self.state.pending = false;
            self.phase = TransitionPhase::Idle;
            return;
        };

        self.state.displayed = Some(key.clone());

        let awaiting_load = match self.assets.resolve(&key) {
            Some(asset) => {
                out.push(Effect::SetSource(asset.clone()));
                true
            }
            None => {
                debug!(key = %key, "no asset mapped, skipping source swap");
                false
            }
        };

        match self.queued.take() {
            Some(next) if next != key => {
                // The superseding request starts right after this swap
                // step; the superseded key never fades in.
                self.begin_queued(next, out);
            }
            _ => {
                if awaiting_load {
                    self.phase = TransitionPhase::Loading;
                } else {
                    self.finish(out);
                }
            }
        }
    }

    fn begin_queued(&mut self, key: ContentKey, out: &mut Vec<Effect>) {
        debug!(key = %key, "starting queued transition");
        self.target = Some(key);
        self.remaining = self.fade_out;
        self.phase = TransitionPhase::FadingOut;
        out.push(Effect::FadeOut);
    }

    fn finish(&mut self, out: &mut Vec<Effect>) {
        out.push(Effect::FadeIn);
        self.state.pending = false;
        self.remaining = self.fade_in;
        self.phase = TransitionPhase::FadingIn;

        // A request that arrived during the load wait starts now; the
        // fade-in it interrupts behaves like any other.
        if let Some(next) = self.queued.take()
            && self.state.displayed.as_ref() != Some(&next)
        {
            self.begin(next, out);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
