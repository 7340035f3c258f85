// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mount handle for a droppable (drop zone) component.

use core::fmt;

use kurbo::Rect;

use dragline_session::entity::{
    DropHandler, DroppableInit, DroppablePatch, EnterHandler, LeaveHandler,
};
use dragline_session::id::DndId;
use dragline_session::registry::RegistryError;
use dragline_session::session::DragSession;

/// Mount-time configuration for a [`DroppableBinding`].
pub struct DroppableOptions<P> {
    /// Stable identifier to register under; a fresh token is minted when
    /// absent.
    pub id: Option<DndId>,
    /// Invoked when a drag is released inside this zone.
    pub on_drop: Option<DropHandler<P>>,
    /// Invoked when a drag first moves over this zone.
    pub on_enter: Option<EnterHandler<P>>,
    /// Invoked when a drag moves off this zone.
    pub on_leave: Option<LeaveHandler<P>>,
}

impl<P> Default for DroppableOptions<P> {
    fn default() -> Self {
        Self {
            id: None,
            on_drop: None,
            on_enter: None,
            on_leave: None,
        }
    }
}

impl<P> fmt::Debug for DroppableOptions<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DroppableOptions")
            .field("id", &self.id)
            .field("on_drop", &self.on_drop.is_some())
            .field("on_enter", &self.on_enter.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .finish()
    }
}

/// Handle for a mounted drop-zone component.
///
/// Beyond the registration lifecycle, the handle exposes the zone-side
/// render views from the reference implementation: [`Self::is_active`]
/// ("is the drag hovering over me") and [`Self::distance`] ("how far away
/// is the dragged element").
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DroppableBinding {
    id: DndId,
}

impl DroppableBinding {
    /// Register a drop zone and return its handle.
    ///
    /// Fails if `options.id` names an already-registered droppable.
    pub fn mount<P>(
        session: &mut DragSession<P>,
        options: DroppableOptions<P>,
    ) -> Result<Self, RegistryError> {
        let id = options
            .id
            .unwrap_or_else(|| session.registry_mut().mint_id());
        session.registry_mut().register_droppable(
            id.clone(),
            DroppableInit {
                on_drop: options.on_drop,
                on_enter: options.on_enter,
                on_leave: options.on_leave,
            },
        )?;
        Ok(Self { id })
    }

    /// Identifier this component is registered under.
    pub fn id(&self) -> &DndId {
        &self.id
    }

    /// Returns `true` while this zone is the current hover target.
    pub fn is_active<P>(&self, session: &DragSession<P>) -> bool {
        session.current_hovering() == Some(&self.id)
    }

    /// Distance between the dragged element's top-left corner and this
    /// zone's, or `None` when no drag is active or either rectangle is
    /// unavailable.
    pub fn distance<P>(&self, session: &DragSession<P>) -> Option<f64> {
        session.distance_to(&self.id)
    }

    /// Apply an asynchronous measurement result.
    pub fn on_layout<P>(&self, session: &mut DragSession<P>, frame: Rect) {
        session
            .registry_mut()
            .update_droppable(&self.id, DroppablePatch::layout(frame));
    }

    /// Refresh callbacks after the component's props changed.
    pub fn update<P>(&self, session: &mut DragSession<P>, patch: DroppablePatch<P>) {
        session.registry_mut().update_droppable(&self.id, patch);
    }

    /// Unregister the zone. A drag hovering over it simply stops finding it.
    pub fn unmount<P>(self, session: &mut DragSession<P>) {
        session.registry_mut().unregister_droppable(&self.id);
    }
}
