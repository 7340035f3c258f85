// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture-to-event translator: a state machine over the registry.
//!
//! ## Usage
//!
//! 1) Register entities through [`DragSession::registry_mut`] as they mount.
//! 2) Feed each gesture event for a draggable into
//!    [`DragSession::handle_drag_start`], [`DragSession::handle_drag_move`],
//!    and [`DragSession::handle_drag_end`].
//! 3) The session invokes the entities' callbacks exactly once per
//!    transition: one `on_enter` per zone entry, one `on_leave` per exit,
//!    `on_drop` and `on_drag_end` at release.
//!
//! All transitions are synchronous and run to completion before the next
//! event is processed.

use kurbo::{Point, Vec2};

use crate::entity::{Draggable, Droppable};
use crate::hit;
use crate::id::DndId;
use crate::registry::Registry;

/// Behavior switches for a [`DragSession`].
///
/// Both flags default to `false`, which reproduces the reference behavior
/// exactly. They exist because the reference behavior has two quirks that
/// downstream code may want fixed; flipping a flag is an explicit opt-in to
/// the corrected semantics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Fire the old zone's `on_leave` before the new zone's `on_enter` when
    /// a drag moves directly from one zone into another.
    ///
    /// The reference behavior (default, `false`) fires only the new zone's
    /// `on_enter` in that case; the old zone never learns the drag left it.
    pub leave_before_enter: bool,
    /// Clear the hover target when a drag ends.
    ///
    /// The reference behavior (default, `false`) leaves the hover target
    /// set, which suppresses the first `on_enter` of a subsequent drag that
    /// moves into the same zone.
    pub clear_hover_on_end: bool,
}

/// Drag-and-drop coordination state machine.
///
/// Owns the entity [`Registry`] together with the per-gesture state: the
/// drag offset, the currently dragging entity, and the currently hovered
/// drop zone. At most one drag is active at a time, and the hover target is
/// only ever a currently registered droppable.
///
/// See the [crate docs](crate) for a walkthrough.
#[derive(Debug)]
pub struct DragSession<P> {
    registry: Registry<P>,
    config: SessionConfig,
    /// Vector from the draggable's rectangle center to the pointer at drag
    /// start. Hit testing subtracts it so containment is checked against
    /// the element's visual location rather than the raw pointer.
    drag_offset: Vec2,
    current_dragging: Option<DndId>,
    current_hovering: Option<DndId>,
}

impl<P> Default for DragSession<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> DragSession<P> {
    /// Create a session with the compatible default configuration.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create a session with an explicit configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            registry: Registry::new(),
            config,
            drag_offset: Vec2::ZERO,
            current_dragging: None,
            current_hovering: None,
        }
    }

    /// The session's configuration.
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Shared access to the entity registry.
    pub fn registry(&self) -> &Registry<P> {
        &self.registry
    }

    /// Mutable access to the entity registry, for registration, measurement
    /// results, and prop updates.
    pub fn registry_mut(&mut self) -> &mut Registry<P> {
        &mut self.registry
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.current_dragging.is_some()
    }

    /// Id of the entity being dragged, if any.
    pub fn current_dragging(&self) -> Option<&DndId> {
        self.current_dragging.as_ref()
    }

    /// The entity being dragged, if any. Droppable-side consumers use this
    /// to inspect what is hovering over them.
    pub fn current_draggable(&self) -> Option<&Draggable<P>> {
        self.registry.get_draggable(self.current_dragging.as_ref()?)
    }

    /// Id of the drop zone currently under the drag, if any.
    pub fn current_hovering(&self) -> Option<&DndId> {
        self.current_hovering.as_ref()
    }

    /// The active drag offset; zero while idle.
    pub fn drag_offset(&self) -> Vec2 {
        self.drag_offset
    }

    /// The first registered droppable whose rectangle contains `position`
    /// after drag-offset adjustment.
    ///
    /// Zones are tested in registration order and the first match wins;
    /// overlap between zones is not otherwise resolved. Boundary points
    /// count as inside, see [`hit::contains_inclusive`].
    pub fn droppable_at(&self, position: Point) -> Option<&Droppable<P>> {
        self.droppable_index_at(position)
            .map(|idx| &self.registry.droppables()[idx])
    }

    fn droppable_index_at(&self, position: Point) -> Option<usize> {
        let adjusted = position - self.drag_offset;
        self.registry
            .droppables()
            .iter()
            .position(|d| hit::contains_inclusive(d.layout, adjusted))
    }

    /// Begin a drag on the draggable registered under `id`.
    ///
    /// Records the offset between `position` and the draggable's rectangle
    /// center, marks the entity dragging, and fires its `on_drag_start`.
    /// No-op if the id is unknown, or if another drag is already active:
    /// callers end the active drag explicitly before starting a new one.
    pub fn handle_drag_start(&mut self, id: &DndId, position: Point) {
        if self.current_dragging.is_some() {
            return;
        }
        let (draggables, _) = self.registry.parts_mut();
        let Some(draggable) = draggables.iter_mut().find(|d| d.id == *id) else {
            return;
        };

        self.drag_offset = position - draggable.layout.center();
        self.current_dragging = Some(draggable.id.clone());
        draggable.dragging = true;
        if let Some(on_drag_start) = draggable.on_drag_start.as_mut() {
            on_drag_start();
        }
    }

    /// Process a pointer move for the drag on `id`.
    ///
    /// Computes the drop zone under the adjusted position and fires hover
    /// transitions:
    ///
    /// - entering a zone fires its `on_enter` once; staying inside it fires
    ///   nothing further;
    /// - moving to a position outside every zone fires the previously
    ///   hovered zone's `on_leave` once (looked up by its old id, so a zone
    ///   that unregistered mid-drag is skipped silently);
    /// - moving directly between two zones fires only the new zone's
    ///   `on_enter` unless [`SessionConfig::leave_before_enter`] is set.
    ///
    /// No-op if the draggable is missing (it may have unregistered while
    /// the gesture was in flight).
    pub fn handle_drag_move(&mut self, id: &DndId, position: Point) {
        let target_idx = self.droppable_index_at(position);
        let prev_hover = self.current_hovering.clone();
        let leave_before_enter = self.config.leave_before_enter;

        let (draggables, droppables) = self.registry.parts_mut();
        let Some(drag_idx) = draggables.iter().position(|d| d.id == *id) else {
            return;
        };

        match target_idx {
            Some(idx) => {
                if prev_hover.as_ref() == Some(&droppables[idx].id) {
                    // Still inside the same zone.
                    return;
                }
                if leave_before_enter {
                    if let Some(prev_id) = &prev_hover {
                        if let Some(prev_idx) = droppables.iter().position(|d| d.id == *prev_id) {
                            if let Some(on_leave) = droppables[prev_idx].on_leave.as_mut() {
                                on_leave(&draggables[drag_idx], position);
                            }
                        }
                    }
                }
                self.current_hovering = Some(droppables[idx].id.clone());
                if let Some(on_enter) = droppables[idx].on_enter.as_mut() {
                    on_enter(&draggables[drag_idx], position);
                }
            }
            None => {
                if let Some(prev_id) = &prev_hover {
                    if let Some(prev_idx) = droppables.iter().position(|d| d.id == *prev_id) {
                        if let Some(on_leave) = droppables[prev_idx].on_leave.as_mut() {
                            on_leave(&draggables[drag_idx], position);
                        }
                    }
                    self.current_hovering = None;
                }
            }
        }
    }

    /// End the drag on `id` at `position`.
    ///
    /// If the adjusted position is inside a drop zone, that zone's `on_drop`
    /// fires with the draggable and the raw position; the draggable's
    /// `on_drag_end` then fires with the zone (or `None`). The session
    /// returns to idle regardless: the drag offset resets to zero and no
    /// entity is dragging. The hover target is kept unless
    /// [`SessionConfig::clear_hover_on_end`] is set.
    pub fn handle_drag_end(&mut self, id: &DndId, position: Point) {
        let target_idx = self.droppable_index_at(position);

        let (draggables, droppables) = self.registry.parts_mut();
        if let Some(drag_idx) = draggables.iter().position(|d| d.id == *id) {
            if let Some(target_idx) = target_idx {
                if let Some(on_drop) = droppables[target_idx].on_drop.as_mut() {
                    on_drop(&draggables[drag_idx], position);
                }
            }
            let draggable = &mut draggables[drag_idx];
            draggable.dragging = false;
            if let Some(on_drag_end) = draggable.on_drag_end.as_mut() {
                on_drag_end(target_idx.map(|idx| &droppables[idx]));
            }
        }

        self.current_dragging = None;
        self.drag_offset = Vec2::ZERO;
        if self.config.clear_hover_on_end {
            self.current_hovering = None;
        }
    }

    /// Euclidean distance between the top-left corners of the dragging
    /// draggable's rectangle and the given droppable's rectangle.
    ///
    /// Returns `None` while no drag is active or when either entity is not
    /// registered. Recomputed on every call.
    pub fn distance_to(&self, droppable: &DndId) -> Option<f64> {
        let draggable = self.current_draggable()?;
        let droppable = self.registry.get_droppable(droppable)?;
        Some((draggable.layout.origin() - droppable.layout.origin()).hypot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{DraggableInit, DraggablePatch, DroppableInit, DroppablePatch};
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use kurbo::Rect;

    fn session_with_card(layout: Rect) -> (DragSession<u32>, DndId) {
        let mut session = DragSession::new();
        let card = session.registry_mut().mint_id();
        session
            .registry_mut()
            .register_draggable(card.clone(), DraggableInit::default())
            .unwrap();
        session
            .registry_mut()
            .update_draggable(&card, DraggablePatch::layout(layout));
        (session, card)
    }

    #[test]
    fn start_records_offset_from_rect_center() {
        let (mut session, card) = session_with_card(Rect::new(0.0, 0.0, 50.0, 50.0));

        // Grab the card 5 points right and below its center (25, 25).
        session.handle_drag_start(&card, Point::new(30.0, 30.0));

        assert!(session.is_dragging());
        assert_eq!(session.drag_offset(), Vec2::new(5.0, 5.0));
        assert_eq!(session.current_dragging(), Some(&card));
        assert!(session.current_draggable().is_some_and(|d| d.dragging));
    }

    #[test]
    fn start_on_unknown_id_is_a_no_op() {
        let mut session = DragSession::<u32>::new();
        session.handle_drag_start(&DndId::from("ghost"), Point::new(0.0, 0.0));
        assert!(!session.is_dragging());
    }

    #[test]
    fn second_start_while_active_is_rejected() {
        let (mut session, card) = session_with_card(Rect::new(0.0, 0.0, 50.0, 50.0));
        let started = Rc::new(Cell::new(false));
        let flag = started.clone();
        let other = session.registry_mut().mint_id();
        session
            .registry_mut()
            .register_draggable(
                other.clone(),
                DraggableInit {
                    on_drag_start: Some(Box::new(move || flag.set(true))),
                    ..DraggableInit::default()
                },
            )
            .unwrap();

        session.handle_drag_start(&card, Point::new(25.0, 25.0));
        session.handle_drag_start(&other, Point::new(5.0, 5.0));

        // The first drag stays active; the second never started.
        assert_eq!(session.current_dragging(), Some(&card));
        assert!(!started.get());

        // After an explicit end, the other draggable can start.
        session.handle_drag_end(&card, Point::new(25.0, 25.0));
        session.handle_drag_start(&other, Point::new(5.0, 5.0));
        assert_eq!(session.current_dragging(), Some(&other));
        assert!(started.get());
    }

    #[test]
    fn end_returns_to_idle_and_zeroes_offset() {
        let (mut session, card) = session_with_card(Rect::new(0.0, 0.0, 50.0, 50.0));
        session.handle_drag_start(&card, Point::new(30.0, 30.0));
        session.handle_drag_end(&card, Point::new(200.0, 200.0));

        assert!(!session.is_dragging());
        assert_eq!(session.drag_offset(), Vec2::ZERO);
        assert!(
            session
                .registry()
                .get_draggable(&card)
                .is_some_and(|d| !d.dragging),
            "dragging flag must clear on end"
        );
    }

    #[test]
    fn droppable_at_picks_first_registered_match() {
        let mut session = DragSession::<u32>::new();
        for name in ["under", "over"] {
            session
                .registry_mut()
                .register_droppable(DndId::from(name), DroppableInit::default())
                .unwrap();
            session.registry_mut().update_droppable(
                &DndId::from(name),
                DroppablePatch::layout(Rect::new(0.0, 0.0, 100.0, 100.0)),
            );
        }

        let hit = session.droppable_at(Point::new(50.0, 50.0)).unwrap();
        assert_eq!(hit.id, DndId::from("under"));
    }

    #[test]
    fn distance_is_between_top_left_corners() {
        let (mut session, card) = session_with_card(Rect::new(0.0, 0.0, 50.0, 50.0));
        let tray = DndId::from("tray");
        session
            .registry_mut()
            .register_droppable(tray.clone(), DroppableInit::default())
            .unwrap();
        session
            .registry_mut()
            .update_droppable(&tray, DroppablePatch::layout(Rect::new(3.0, 4.0, 53.0, 54.0)));

        // Idle: no distance.
        assert_eq!(session.distance_to(&tray), None);

        session.handle_drag_start(&card, Point::new(25.0, 25.0));
        assert_eq!(session.distance_to(&tray), Some(5.0));

        // Unknown droppable: no distance even while dragging.
        assert_eq!(session.distance_to(&DndId::from("ghost")), None);

        session.handle_drag_end(&card, Point::new(25.0, 25.0));
        assert_eq!(session.distance_to(&tray), None);
    }
}
