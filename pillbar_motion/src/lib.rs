// Copyright 2026 the Pillbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pillbar Motion: eased tween primitives for frame-driven UI motion.
//!
//! This crate provides the time side of an animated control: a pure easing
//! function and a [`Tween`] that interpolates one scalar value from a start
//! to a target over a fixed duration. It owns no clock and schedules no
//! callbacks; the host samples the tween once per frame with its own
//! timestamps and applies the returned value.
//!
//! ## Design Philosophy
//!
//! - **Sampled, not driven**: a [`Tween`] is inert data. Progress is computed
//!   from absolute elapsed time on each [`Tween::sample`] call, so a host that
//!   stops delivering frames (a backgrounded tab, a throttled timer) simply
//!   pauses and resumes without correctness loss.
//! - **Cancellation is ownership**: dropping a [`Tween`] cancels it. There is
//!   no registry of in-flight animations; whichever state machine owns the
//!   tween decides when it stops driving the value.
//! - **Exact arrival**: at or past the duration, [`Tween::sample`] returns
//!   exactly the target value, never an eased approximation, so repeated
//!   animations cannot accumulate float drift.
//!
//! ## Minimal example
//!
//! ```
//! use pillbar_motion::{Easing, Tween, SPRING_MS};
//!
//! // Slide from 0 to 200 starting at t=1000ms.
//! let tween = Tween::new(0.0, 200.0, 1000.0, SPRING_MS, Easing::CubicOut);
//!
//! let (mid, done) = tween.sample(1150.0);
//! assert!(!done);
//! assert!(mid > 0.0 && mid < 200.0);
//!
//! // Past the duration the tween lands exactly on its target.
//! let (end, done) = tween.sample(1400.0);
//! assert!(done);
//! assert_eq!(end, 200.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// Default duration for spring-style settles, in milliseconds.
pub const SPRING_MS: f64 = 300.0;

/// Default duration for direct (non-spring) transitions, in milliseconds.
pub const DIRECT_MS: f64 = 250.0;

/// Easing curves mapping linear progress to eased progress.
///
/// Both curves clamp their input: values at or past `1.0` map to exactly
/// `1.0`, and negative values map to `0.0`, so callers never overshoot the
/// target when a frame arrives late.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Cubic ease-out, `1 - (1 - t)^3`. Fast start, soft landing; the
    /// spring-like settle used after taps and drag releases.
    CubicOut,
    /// Smoothstep, `t^2 * (3 - 2t)`. A gentle ease-in-out for direct
    /// transitions that should read as a plain slide.
    Smoothstep,
}

impl Easing {
    /// Maps linear progress `t` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::CubicOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::Smoothstep => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// A single in-flight eased transition of one scalar value.
///
/// Construct with [`Tween::new`] and call [`Tween::sample`] once per frame
/// with the host's current timestamp. Timestamps use the same unit and epoch
/// as `start_ms`; milliseconds from an arbitrary monotonic origin are the
/// expected convention.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl Tween {
    /// Creates a tween from `from` to `to`, starting at `start_ms` and
    /// lasting `duration_ms`.
    ///
    /// A zero or negative duration produces a tween that is already complete;
    /// its first sample returns the target.
    #[must_use]
    pub fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// Samples the tween at `now_ms`, returning the interpolated value and
    /// whether the tween has completed.
    ///
    /// Before `start_ms` the value is pinned to `from`; at or past the
    /// duration it is exactly `to`. Progress is derived from elapsed time,
    /// so sampling frequency does not affect the trajectory.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> (f64, bool) {
        if self.duration_ms <= 0.0 {
            return (self.to, true);
        }
        let t = (now_ms - self.start_ms) / self.duration_ms;
        if t >= 1.0 {
            return (self.to, true);
        }
        let eased = self.easing.apply(t);
        (self.from + (self.to - self.from) * eased, false)
    }

    /// The value this tween settles on.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// The value this tween started from.
    #[must_use]
    pub fn origin(&self) -> f64 {
        self.from
    }
}
