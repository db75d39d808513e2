// Copyright 2026 the Pillbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide session: classify a pointer sequence as tap or swipe and track the
//! live offset of the dragged element.
//!
//! ## Usage
//!
//! 1) Open a session at pointer-down with [`SlideState::begin`], passing the
//!    pointer position and the element's offset at grab time.
//! 2) On each move event, call [`SlideState::update`] with the pointer
//!    position and the maximum allowed offset. `None` means the gesture is
//!    still within tap slop and nothing should move; `Some(offset)` is the
//!    clamped live offset to apply.
//! 3) At pointer-up, call [`SlideState::release`] with the release position.
//!    The returned [`SlideEnd`] says whether the sequence was a tap (resolve
//!    by hit position) or a swipe (resolve by where the element ended up).

use kurbo::Point;

/// Maximum pointer displacement, in pixels, still classified as a tap.
///
/// Displacement must strictly exceed this for the session to become a swipe.
pub const TAP_SLOP: f64 = 6.0;

/// Tracks one pointer-down → move → pointer-up sequence on a draggable
/// element.
///
/// The session records the grab position and the element's offset at grab
/// time; all live offsets are computed relative to those, not accumulated,
/// so dropped move events cannot skew the result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideState {
    start_x: f64,
    grabbed_offset: f64,
    live_offset: f64,
    moved: bool,
}

/// Verdict produced when a slide session is released.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlideEnd {
    /// The pointer never left tap slop. `x` is the release event's own
    /// coordinate; resolve the target from it, not from any earlier move.
    Tap {
        /// Pointer X at release.
        x: f64,
    },
    /// The pointer dragged the element. `offset` is the last clamped live
    /// offset; resolve the target from the element's position.
    Swipe {
        /// Element offset at release.
        offset: f64,
    },
}

impl SlideState {
    /// Opens a session at pointer-down.
    ///
    /// `grabbed_offset` is the element's offset at the moment of the grab;
    /// any in-flight animation should be cancelled and sampled before
    /// calling this so the grab point is exact.
    #[must_use]
    pub fn begin(pointer: Point, grabbed_offset: f64) -> Self {
        Self {
            start_x: pointer.x,
            grabbed_offset,
            live_offset: grabbed_offset,
            moved: false,
        }
    }

    /// Feeds a pointer-move event into the session.
    ///
    /// Returns `None` until total displacement exceeds [`TAP_SLOP`]. After
    /// that, returns the live offset `grabbed_offset + delta` clamped into
    /// `[0, max_offset]` on every call — the swipe classification is
    /// latched even if the pointer later returns near its start.
    pub fn update(&mut self, pointer: Point, max_offset: f64) -> Option<f64> {
        let delta = pointer.x - self.start_x;
        if delta.abs() > TAP_SLOP {
            self.moved = true;
        }
        if !self.moved {
            return None;
        }
        self.live_offset = (self.grabbed_offset + delta).clamp(0.0, max_offset.max(0.0));
        Some(self.live_offset)
    }

    /// Closes the session at pointer-up, consuming it.
    #[must_use]
    pub fn release(self, pointer: Point) -> SlideEnd {
        if self.moved {
            SlideEnd::Swipe {
                offset: self.live_offset,
            }
        } else {
            SlideEnd::Tap { x: pointer.x }
        }
    }

    /// Returns `true` once the session has been classified as a swipe.
    #[must_use]
    pub fn moved(&self) -> bool {
        self.moved
    }
}
