// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity records for draggables and droppables, and their init/patch types.
//!
//! Both entity kinds carry their consumer callbacks as optional boxed
//! closures, invoked only when present. Handlers are `FnMut` so consumers
//! can capture and update their own state, and they receive a shared view of
//! the dragged entity plus the raw pointer position where relevant.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Rect};

use crate::id::DndId;

/// Handler invoked when a drag begins on a draggable.
pub type DragStartHandler = Box<dyn FnMut()>;

/// Handler invoked when a drag ends, with the drop zone it ended over, if any.
pub type DragEndHandler<P> = Box<dyn FnMut(Option<&Droppable<P>>)>;

/// Handler invoked when a drag is released inside a drop zone.
pub type DropHandler<P> = Box<dyn FnMut(&Draggable<P>, Point)>;

/// Handler invoked when a drag first moves over a drop zone.
pub type EnterHandler<P> = Box<dyn FnMut(&Draggable<P>, Point)>;

/// Handler invoked when a drag moves off a drop zone.
pub type LeaveHandler<P> = Box<dyn FnMut(&Draggable<P>, Point)>;

/// A registered draggable entity.
///
/// `P` is the application-defined payload type carried through to drop-zone
/// handlers; the registry does not interpret it.
pub struct Draggable<P> {
    /// Identifier this entity was registered under.
    pub id: DndId,
    /// Last measured on-screen rectangle, [`Rect::ZERO`] until the first
    /// measurement arrives.
    pub layout: Rect,
    /// Whether this entity is the active drag.
    pub dragging: bool,
    /// Invoked when a drag begins on this entity.
    pub on_drag_start: Option<DragStartHandler>,
    /// Invoked when a drag of this entity ends.
    pub on_drag_end: Option<DragEndHandler<P>>,
    /// Opaque value handed to drop/enter/leave handlers.
    pub payload: Option<P>,
}

impl<P> Draggable<P> {
    pub(crate) fn new(id: DndId, init: DraggableInit<P>) -> Self {
        Self {
            id,
            layout: Rect::ZERO,
            dragging: false,
            on_drag_start: init.on_drag_start,
            on_drag_end: init.on_drag_end,
            payload: init.payload,
        }
    }

    pub(crate) fn apply(&mut self, patch: DraggablePatch<P>) {
        if let Some(layout) = patch.layout {
            self.layout = layout;
        }
        if let Some(handler) = patch.on_drag_start {
            self.on_drag_start = Some(handler);
        }
        if let Some(handler) = patch.on_drag_end {
            self.on_drag_end = Some(handler);
        }
        if let Some(payload) = patch.payload {
            self.payload = Some(payload);
        }
    }
}

impl<P: fmt::Debug> fmt::Debug for Draggable<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Draggable")
            .field("id", &self.id)
            .field("layout", &self.layout)
            .field("dragging", &self.dragging)
            .field("payload", &self.payload)
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .finish()
    }
}

/// A registered droppable entity (a stationary drop zone).
pub struct Droppable<P> {
    /// Identifier this entity was registered under.
    pub id: DndId,
    /// Last measured on-screen rectangle, [`Rect::ZERO`] until the first
    /// measurement arrives.
    pub layout: Rect,
    /// Invoked when a drag is released inside this zone.
    pub on_drop: Option<DropHandler<P>>,
    /// Invoked when a drag first moves over this zone.
    pub on_enter: Option<EnterHandler<P>>,
    /// Invoked when a drag moves off this zone.
    pub on_leave: Option<LeaveHandler<P>>,
}

impl<P> Droppable<P> {
    pub(crate) fn new(id: DndId, init: DroppableInit<P>) -> Self {
        Self {
            id,
            layout: Rect::ZERO,
            on_drop: init.on_drop,
            on_enter: init.on_enter,
            on_leave: init.on_leave,
        }
    }

    pub(crate) fn apply(&mut self, patch: DroppablePatch<P>) {
        if let Some(layout) = patch.layout {
            self.layout = layout;
        }
        if let Some(handler) = patch.on_drop {
            self.on_drop = Some(handler);
        }
        if let Some(handler) = patch.on_enter {
            self.on_enter = Some(handler);
        }
        if let Some(handler) = patch.on_leave {
            self.on_leave = Some(handler);
        }
    }
}

impl<P: fmt::Debug> fmt::Debug for Droppable<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Droppable")
            .field("id", &self.id)
            .field("layout", &self.layout)
            .field("on_drop", &self.on_drop.is_some())
            .field("on_enter", &self.on_enter.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .finish()
    }
}

/// Registration data for a draggable.
///
/// The layout always starts at [`Rect::ZERO`]; measurements arrive later via
/// [`Registry::update_draggable`](crate::registry::Registry::update_draggable).
pub struct DraggableInit<P> {
    /// Invoked when a drag begins on the entity.
    pub on_drag_start: Option<DragStartHandler>,
    /// Invoked when a drag of the entity ends.
    pub on_drag_end: Option<DragEndHandler<P>>,
    /// Opaque value handed to drop-zone handlers.
    pub payload: Option<P>,
}

impl<P> Default for DraggableInit<P> {
    fn default() -> Self {
        Self {
            on_drag_start: None,
            on_drag_end: None,
            payload: None,
        }
    }
}

impl<P> fmt::Debug for DraggableInit<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraggableInit")
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .field("payload", &self.payload.is_some())
            .finish()
    }
}

/// Registration data for a droppable.
pub struct DroppableInit<P> {
    /// Invoked when a drag is released inside the zone.
    pub on_drop: Option<DropHandler<P>>,
    /// Invoked when a drag first moves over the zone.
    pub on_enter: Option<EnterHandler<P>>,
    /// Invoked when a drag moves off the zone.
    pub on_leave: Option<LeaveHandler<P>>,
}

impl<P> Default for DroppableInit<P> {
    fn default() -> Self {
        Self {
            on_drop: None,
            on_enter: None,
            on_leave: None,
        }
    }
}

impl<P> fmt::Debug for DroppableInit<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DroppableInit")
            .field("on_drop", &self.on_drop.is_some())
            .field("on_enter", &self.on_enter.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .finish()
    }
}

/// Shallow-merge update for a draggable.
///
/// `Some` fields replace the current value; `None` fields are left alone.
/// Un-setting a callback or payload is intentionally not expressible.
pub struct DraggablePatch<P> {
    /// New on-screen rectangle, typically a measurement result.
    pub layout: Option<Rect>,
    /// Replacement drag-start handler.
    pub on_drag_start: Option<DragStartHandler>,
    /// Replacement drag-end handler.
    pub on_drag_end: Option<DragEndHandler<P>>,
    /// Replacement payload.
    pub payload: Option<P>,
}

impl<P> DraggablePatch<P> {
    /// A patch that only updates the layout rectangle.
    pub fn layout(layout: Rect) -> Self {
        Self {
            layout: Some(layout),
            ..Self::default()
        }
    }
}

impl<P> Default for DraggablePatch<P> {
    fn default() -> Self {
        Self {
            layout: None,
            on_drag_start: None,
            on_drag_end: None,
            payload: None,
        }
    }
}

impl<P> fmt::Debug for DraggablePatch<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraggablePatch")
            .field("layout", &self.layout)
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .field("payload", &self.payload.is_some())
            .finish()
    }
}

/// Shallow-merge update for a droppable.
///
/// `Some` fields replace the current value; `None` fields are left alone.
pub struct DroppablePatch<P> {
    /// New on-screen rectangle, typically a measurement result.
    pub layout: Option<Rect>,
    /// Replacement drop handler.
    pub on_drop: Option<DropHandler<P>>,
    /// Replacement enter handler.
    pub on_enter: Option<EnterHandler<P>>,
    /// Replacement leave handler.
    pub on_leave: Option<LeaveHandler<P>>,
}

impl<P> DroppablePatch<P> {
    /// A patch that only updates the layout rectangle.
    pub fn layout(layout: Rect) -> Self {
        Self {
            layout: Some(layout),
            ..Self::default()
        }
    }
}

impl<P> Default for DroppablePatch<P> {
    fn default() -> Self {
        Self {
            layout: None,
            on_drop: None,
            on_enter: None,
            on_leave: None,
        }
    }
}

impl<P> fmt::Debug for DroppablePatch<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DroppablePatch")
            .field("layout", &self.layout)
            .field("on_drop", &self.on_drop.is_some())
            .field("on_enter", &self.on_enter.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_replaces_only_supplied_fields() {
        let mut draggable =
            Draggable::new(DndId::Token(1), DraggableInit::<u32> {
                payload: Some(3),
                ..DraggableInit::default()
            });
        assert_eq!(draggable.layout, Rect::ZERO);

        draggable.apply(DraggablePatch::layout(Rect::new(1.0, 2.0, 3.0, 4.0)));
        assert_eq!(draggable.layout, Rect::new(1.0, 2.0, 3.0, 4.0));
        // Payload untouched by a layout-only patch.
        assert_eq!(draggable.payload, Some(3));

        draggable.apply(DraggablePatch {
            payload: Some(9),
            ..DraggablePatch::default()
        });
        assert_eq!(draggable.payload, Some(9));
        assert_eq!(draggable.layout, Rect::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn patch_installs_handlers() {
        let mut droppable = Droppable::<()>::new(DndId::Token(2), DroppableInit::default());
        assert!(droppable.on_enter.is_none());

        droppable.apply(DroppablePatch {
            on_enter: Some(Box::new(|_, _| {})),
            ..DroppablePatch::default()
        });
        assert!(droppable.on_enter.is_some());
        assert!(droppable.on_drop.is_none());
    }

    #[test]
    fn debug_reports_handler_presence() {
        use alloc::format;

        let draggable = Draggable::new(DndId::from("card"), DraggableInit::<u32> {
            on_drag_start: Some(Box::new(|| {})),
            ..DraggableInit::default()
        });
        let rendered = format!("{draggable:?}");
        assert!(rendered.contains("on_drag_start: true"), "got {rendered}");
        assert!(rendered.contains("on_drag_end: false"), "got {rendered}");
    }
}
