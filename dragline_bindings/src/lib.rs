// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dragline_bindings --heading-base-level=0

//! Dragline Bindings: component-lifecycle handles over a drag session.
//!
//! UI components have a lifecycle the core session does not know about:
//! they mount, get measured asynchronously, have their props refreshed, and
//! unmount. This crate packages that lifecycle into two small handles:
//!
//! - [`draggable::DraggableBinding`]: registers a draggable on mount,
//!   forwards gesture start/move/end events into the session, applies
//!   measurement results, and reports whether the rendered element should
//!   bounce back to its origin after release.
//! - [`droppable::DroppableBinding`]: registers a drop zone on mount and
//!   exposes the zone-side views — am I the active hover target, and how
//!   far away is the dragged element.
//!
//! Handles do not own the session. Every method takes `&mut DragSession`
//! (or `&DragSession` for reads) explicitly, so the session can live
//! wherever the application's root scope puts it; there is no ambient
//! global.
//!
//! ## Minimal example
//!
//! ```rust
//! use dragline_bindings::draggable::{DraggableBinding, DraggableOptions};
//! use dragline_bindings::droppable::{DroppableBinding, DroppableOptions};
//! use dragline_session::session::DragSession;
//! use kurbo::{Point, Rect};
//!
//! let mut session = DragSession::<u32>::new();
//!
//! let card = DraggableBinding::mount(
//!     &mut session,
//!     DraggableOptions {
//!         payload: Some(7),
//!         ..DraggableOptions::default()
//!     },
//! )
//! .unwrap();
//! let tray = DroppableBinding::mount(&mut session, DroppableOptions::default()).unwrap();
//!
//! // Layout measurements arrive.
//! card.on_layout(&mut session, Rect::new(0.0, 0.0, 50.0, 50.0));
//! tray.on_layout(&mut session, Rect::new(100.0, 100.0, 150.0, 150.0));
//!
//! // A gesture runs against the card.
//! card.on_gesture_start(&mut session, Point::new(25.0, 25.0));
//! card.on_gesture_move(&mut session, Point::new(110.0, 110.0));
//! assert!(tray.is_active(&session));
//!
//! // `bounce_back` defaults to true: the renderer should animate the card home.
//! assert!(card.on_gesture_end(&mut session, Point::new(110.0, 110.0)));
//!
//! card.unmount(&mut session);
//! tray.unmount(&mut session);
//! ```
//!
//! A measurement that lands after its component unmounted is harmless: the
//! registry treats updates for unknown ids as no-ops.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod draggable;
pub mod droppable;
