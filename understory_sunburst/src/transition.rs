// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancellable, frame-driven transitions.
//!
//! A [`TransitionSlot`] holds at most one running transition. Starting a new one
//! supersedes the previous; every start hands out a fresh [`TransitionToken`],
//! and a tick that carries a superseded token is simply not current anymore.
//!
//! ```
//! use understory_sunburst::{Easing, TransitionSlot};
//!
//! let mut slot = TransitionSlot::new();
//! let first = slot.start(1000.0, Easing::Linear);
//! let second = slot.start(1000.0, Easing::Linear);
//! assert!(!slot.is_current(first));
//! assert!(slot.is_current(second));
//!
//! // The first frame pins the start time.
//! let tick = slot.advance(5_000.0).unwrap();
//! assert_eq!(tick.t, 0.0);
//! let tick = slot.advance(5_500.0).unwrap();
//! assert_eq!(tick.t, 0.5);
//! let tick = slot.advance(6_000.0).unwrap();
//! assert!(tick.done);
//! ```

/// Easing curve applied to linear progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Identity.
    #[default]
    Linear,
    /// Cubic ease-in-out.
    CubicInOut,
}

impl Easing {
    /// Apply the curve to `t`, clamped into `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.max(0.0).min(1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// Identifies one started transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransitionToken(u32);

impl TransitionToken {
    /// Raw generation counter.
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Progress reported by [`TransitionSlot::advance`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tick {
    /// Transition the progress belongs to.
    pub token: TransitionToken,
    /// Eased progress in `[0, 1]`.
    pub t: f64,
    /// `true` once linear progress reached 1.
    pub done: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Running {
    token: TransitionToken,
    duration_ms: f64,
    easing: Easing,
    started_at: Option<f64>,
}

/// A slot holding at most one running transition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransitionSlot {
    generation: u32,
    active: Option<Running>,
}

impl TransitionSlot {
    /// Create an idle slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transition, cancelling any running one.
    ///
    /// The start time is pinned by the first [`advance`](Self::advance).
    pub fn start(&mut self, duration_ms: f64, easing: Easing) -> TransitionToken {
        self.generation = self.generation.wrapping_add(1);
        let token = TransitionToken(self.generation);
        self.active = Some(Running {
            token,
            duration_ms: duration_ms.max(0.0),
            easing,
            started_at: None,
        });
        token
    }

    /// Cancel the running transition, if any. Returns its token.
    pub fn cancel(&mut self) -> Option<TransitionToken> {
        self.active.take().map(|r| r.token)
    }

    /// Returns `true` if `token` names the running transition.
    pub fn is_current(&self, token: TransitionToken) -> bool {
        self.current() == Some(token)
    }

    /// Token of the running transition.
    pub fn current(&self) -> Option<TransitionToken> {
        self.active.map(|r| r.token)
    }

    /// Returns `true` while a transition is running.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Progress of the running transition at `now_ms`.
    ///
    /// The transition stays in the slot after reporting `done`; the owner calls
    /// [`complete`](Self::complete) once the final frame has been applied.
    pub fn advance(&mut self, now_ms: f64) -> Option<Tick> {
        let running = self.active.as_mut()?;
        let start = *running.started_at.get_or_insert(now_ms);
        let linear = if running.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - start) / running.duration_ms).max(0.0).min(1.0)
        };
        Some(Tick {
            token: running.token,
            t: running.easing.apply(linear),
            done: linear >= 1.0,
        })
    }

    /// Retire the transition named by `token`. Returns `false` if it was not current.
    pub fn complete(&mut self, token: TransitionToken) -> bool {
        if self.is_current(token) {
            self.active = None;
            true
        } else {
            false
        }
    }
}
