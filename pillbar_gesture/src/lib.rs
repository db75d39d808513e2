// Copyright 2026 the Pillbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pillbar Gesture: tap/drag disambiguation for one-dimensional slide gestures.
//!
//! This crate classifies a pointer-down → move → pointer-up sequence on a
//! horizontally draggable element as either a **tap** or a **swipe**, and
//! computes the element's live offset while a recognized swipe is in
//! progress. It is the pointer side of a sliding control; the animation side
//! lives in `pillbar_motion` and the coordination in `pillbar_toggle`.
//!
//! ## Design Philosophy
//!
//! - **Slop before commitment**: displacement at or under [`slide::TAP_SLOP`]
//!   produces no visual change, so pointer jitter during a tap never nudges
//!   the element. Once the slop is exceeded the session is latched as a
//!   swipe for its remaining lifetime.
//! - **The session is consumed at release**: [`slide::SlideState::release`]
//!   takes the session by value and returns a [`slide::SlideEnd`] verdict,
//!   so a finished gesture cannot keep driving state.
//! - **No event source assumed**: callers feed in `kurbo::Point` positions
//!   from whatever pointer events their host delivers.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use pillbar_gesture::slide::{SlideEnd, SlideState};
//!
//! // Grab at x=10 while the element sits at offset 0.
//! let mut slide = SlideState::begin(Point::new(10.0, 4.0), 0.0);
//!
//! // A 2px wiggle stays under the slop: no movement yet.
//! assert_eq!(slide.update(Point::new(12.0, 4.0), 200.0), None);
//!
//! // A 130px pull is a swipe; the live offset tracks the pointer.
//! assert_eq!(slide.update(Point::new(140.0, 4.0), 200.0), Some(130.0));
//!
//! match slide.release(Point::new(140.0, 4.0)) {
//!     SlideEnd::Swipe { offset } => assert_eq!(offset, 130.0),
//!     SlideEnd::Tap { .. } => unreachable!(),
//! }
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod slide;
