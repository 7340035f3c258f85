// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mount handle for a draggable component.

use core::fmt;

use kurbo::{Point, Rect};

use dragline_session::entity::{DragEndHandler, DragStartHandler, DraggableInit, DraggablePatch};
use dragline_session::id::DndId;
use dragline_session::registry::RegistryError;
use dragline_session::session::DragSession;

/// Mount-time configuration for a [`DraggableBinding`].
pub struct DraggableOptions<P> {
    /// Stable identifier to register under; a fresh token is minted when
    /// absent.
    pub id: Option<DndId>,
    /// Whether the rendered element should animate back to its origin after
    /// the drag ends. Purely a presentation hint, surfaced by
    /// [`DraggableBinding::on_gesture_end`].
    pub bounce_back: bool,
    /// Invoked when a drag begins on this component.
    pub on_drag_start: Option<DragStartHandler>,
    /// Invoked when a drag of this component ends.
    pub on_drag_end: Option<DragEndHandler<P>>,
    /// Opaque value handed to drop-zone handlers.
    pub payload: Option<P>,
}

impl<P> Default for DraggableOptions<P> {
    fn default() -> Self {
        Self {
            id: None,
            bounce_back: true,
            on_drag_start: None,
            on_drag_end: None,
            payload: None,
        }
    }
}

impl<P> fmt::Debug for DraggableOptions<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraggableOptions")
            .field("id", &self.id)
            .field("bounce_back", &self.bounce_back)
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .field("payload", &self.payload.is_some())
            .finish()
    }
}

/// Handle for a mounted draggable component.
///
/// Created by [`DraggableBinding::mount`], which registers the entity; the
/// component forwards its gesture and layout events through the handle and
/// calls [`DraggableBinding::unmount`] when it goes away.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DraggableBinding {
    id: DndId,
    bounce_back: bool,
}

impl DraggableBinding {
    /// Register a draggable and return its handle.
    ///
    /// Fails if `options.id` names an already-registered draggable, which
    /// usually indicates an accidental double mount.
    pub fn mount<P>(
        session: &mut DragSession<P>,
        options: DraggableOptions<P>,
    ) -> Result<Self, RegistryError> {
        let id = options
            .id
            .unwrap_or_else(|| session.registry_mut().mint_id());
        session.registry_mut().register_draggable(
            id.clone(),
            DraggableInit {
                on_drag_start: options.on_drag_start,
                on_drag_end: options.on_drag_end,
                payload: options.payload,
            },
        )?;
        Ok(Self {
            id,
            bounce_back: options.bounce_back,
        })
    }

    /// Identifier this component is registered under.
    pub fn id(&self) -> &DndId {
        &self.id
    }

    /// Whether the element should animate back to its origin after release.
    pub fn bounce_back(&self) -> bool {
        self.bounce_back
    }

    /// Forward a gesture-start event at an absolute position.
    pub fn on_gesture_start<P>(&self, session: &mut DragSession<P>, position: Point) {
        session.handle_drag_start(&self.id, position);
    }

    /// Forward a gesture-move event at an absolute position.
    pub fn on_gesture_move<P>(&self, session: &mut DragSession<P>, position: Point) {
        session.handle_drag_move(&self.id, position);
    }

    /// Forward a gesture-end event at an absolute position.
    ///
    /// Returns `true` if the renderer should animate the element back to
    /// its origin (the `bounce_back` option).
    pub fn on_gesture_end<P>(&self, session: &mut DragSession<P>, position: Point) -> bool {
        session.handle_drag_end(&self.id, position);
        self.bounce_back
    }

    /// Apply an asynchronous measurement result.
    ///
    /// Called whenever the layout-measurement collaborator reports this
    /// component's on-screen rectangle (first layout and every relayout).
    pub fn on_layout<P>(&self, session: &mut DragSession<P>, frame: Rect) {
        session
            .registry_mut()
            .update_draggable(&self.id, DraggablePatch::layout(frame));
    }

    /// Refresh callbacks or payload after the component's props changed.
    pub fn update<P>(&self, session: &mut DragSession<P>, patch: DraggablePatch<P>) {
        session.registry_mut().update_draggable(&self.id, patch);
    }

    /// Unregister the component.
    ///
    /// A drag referencing it simply stops finding it; a measurement that
    /// arrives afterwards is discarded by the registry.
    pub fn unmount<P>(self, session: &mut DragSession<P>) {
        session.registry_mut().unregister_draggable(&self.id);
    }
}
