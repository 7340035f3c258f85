// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dragline_session --heading-base-level=0

//! Dragline Session: the drag-and-drop coordination core.
//!
//! This crate owns the _bookkeeping_ of a drag-and-drop interaction: which
//! draggables and droppables exist, where they are on screen, which entity is
//! currently being dragged, and which drop zone it is hovering over. It does
//! **not** capture gestures, measure views, or render anything; callers feed
//! it absolute pointer positions and rectangle measurements and it invokes
//! the per-entity callbacks exactly once per transition.
//!
//! The core type is [`session::DragSession`], which composes:
//!
//! - [`registry::Registry`]: an insertion-ordered store of
//!   [`entity::Draggable`] and [`entity::Droppable`] records, keyed by opaque
//!   [`id::DndId`] identifiers.
//! - [`hit`]: the inclusive point-in-rectangle containment test used to find
//!   the drop zone under an (offset-adjusted) pointer position.
//! - The gesture-to-event translator: `handle_drag_start`, `handle_drag_move`
//!   and `handle_drag_end` convert a raw pointer event stream into
//!   de-duplicated enter/leave/drop callbacks.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use dragline_session::entity::{DraggableInit, DraggablePatch, DroppableInit, DroppablePatch};
//! use dragline_session::session::DragSession;
//! use kurbo::{Point, Rect};
//!
//! // The payload type is anything the application wants handed to drop
//! // handlers; here a plain u32.
//! let mut session = DragSession::<u32>::new();
//! let card = session.registry_mut().mint_id();
//! let tray = session.registry_mut().mint_id();
//!
//! session
//!     .registry_mut()
//!     .register_draggable(
//!         card.clone(),
//!         DraggableInit {
//!             payload: Some(7),
//!             ..DraggableInit::default()
//!         },
//!     )
//!     .unwrap();
//!
//! let drops = Rc::new(Cell::new(0));
//! let counter = drops.clone();
//! session
//!     .registry_mut()
//!     .register_droppable(
//!         tray.clone(),
//!         DroppableInit {
//!             on_drop: Some(Box::new(move |_dragged, _position| {
//!                 counter.set(counter.get() + 1);
//!             })),
//!             ..DroppableInit::default()
//!         },
//!     )
//!     .unwrap();
//!
//! // Measurements arrive asynchronously; entities start with a zero rect.
//! let registry = session.registry_mut();
//! registry.update_draggable(&card, DraggablePatch::layout(Rect::new(0.0, 0.0, 50.0, 50.0)));
//! registry.update_droppable(&tray, DroppablePatch::layout(Rect::new(100.0, 100.0, 150.0, 150.0)));
//!
//! // Grab the card at its center, drag it over the tray, release.
//! session.handle_drag_start(&card, Point::new(25.0, 25.0));
//! assert!(session.is_dragging());
//! session.handle_drag_move(&card, Point::new(110.0, 110.0));
//! assert_eq!(session.current_hovering(), Some(&tray));
//! session.handle_drag_end(&card, Point::new(110.0, 110.0));
//!
//! assert_eq!(drops.get(), 1);
//! assert!(!session.is_dragging());
//! ```
//!
//! ## Event discipline
//!
//! The translator guarantees the transition semantics UI code relies on:
//!
//! - `on_enter` fires once when the drag first moves over a zone and is not
//!   repeated while the pointer stays inside it.
//! - `on_leave` fires once when the drag moves from a zone to a position
//!   outside every zone, addressed to the zone that was being hovered.
//! - `on_drop` fires when the drag ends inside a zone; the draggable's
//!   `on_drag_end` always fires afterwards with the target (or `None`).
//! - At most one drag is active at a time; a second `handle_drag_start`
//!   while a drag is in flight is ignored.
//!
//! Two behaviors of the reference implementation are kept for compatibility
//! and can be opted out of via [`session::SessionConfig`]: moving directly
//! from one zone into another does not fire the old zone's `on_leave`
//! (`leave_before_enter`), and the hover target is not cleared when a drag
//! ends (`clear_hover_on_end`).
//!
//! ## Concurrency model
//!
//! Everything here is synchronous and single-threaded: gesture events are
//! processed one at a time to completion, on whatever thread owns the
//! session. The only asynchronous boundary is rectangle measurement, which
//! is modeled as a plain [`registry::Registry::update_draggable`] /
//! [`registry::Registry::update_droppable`] call whenever a result arrives;
//! a measurement landing after its entity unregistered is silently dropped.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod entity;
pub mod hit;
pub mod id;
pub mod registry;
pub mod session;
