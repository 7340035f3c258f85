// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion-ordered registry of draggable and droppable entities.
//!
//! The registry is the authoritative store consulted by hit testing and by
//! the gesture translator. Entities live in plain `Vec`s in registration
//! order; that order is load-bearing, because hit testing returns the first
//! matching drop zone, not the topmost. Lookups are linear, which is the
//! right trade for the handful of entities a screen registers.

use alloc::vec::Vec;
use core::fmt;

use crate::entity::{
    Draggable, DraggableInit, DraggablePatch, Droppable, DroppableInit, DroppablePatch,
};
use crate::id::DndId;

/// Error raised when registering an identifier that is already present.
///
/// Duplicate registration is a programmer error (typically an accidental
/// double mount) and fails loudly instead of silently overwriting the
/// existing entity. Everything else in the registry treats absence as a
/// benign no-op.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistryError {
    /// A draggable with this id is already registered.
    DuplicateDraggable(DndId),
    /// A droppable with this id is already registered.
    DuplicateDroppable(DndId),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDraggable(id) => {
                write!(f, "draggable `{id}` is already registered")
            }
            Self::DuplicateDroppable(id) => {
                write!(f, "droppable `{id}` is already registered")
            }
        }
    }
}

impl core::error::Error for RegistryError {}

/// Insertion-ordered store of drag-and-drop entities.
///
/// `P` is the application payload type carried on draggables. The registry
/// also mints [`DndId::Token`] identifiers for callers that do not supply
/// their own stable names.
pub struct Registry<P> {
    draggables: Vec<Draggable<P>>,
    droppables: Vec<Droppable<P>>,
    next_token: u64,
}

impl<P> Default for Registry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Registry<P> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            draggables: Vec::new(),
            droppables: Vec::new(),
            next_token: 0,
        }
    }

    /// Mint an identifier that is unique for this registry's lifetime.
    pub fn mint_id(&mut self) -> DndId {
        self.next_token += 1;
        DndId::Token(self.next_token)
    }

    /// Register a draggable under `id`.
    ///
    /// The entity becomes visible to lookups and hit testing immediately,
    /// with a zero layout rectangle until the first measurement arrives.
    /// Fails if a draggable with the same id is already registered.
    pub fn register_draggable(
        &mut self,
        id: DndId,
        init: DraggableInit<P>,
    ) -> Result<(), RegistryError> {
        if self.get_draggable(&id).is_some() {
            return Err(RegistryError::DuplicateDraggable(id));
        }
        self.draggables.push(Draggable::new(id, init));
        Ok(())
    }

    /// Register a droppable under `id`.
    ///
    /// Fails if a droppable with the same id is already registered.
    pub fn register_droppable(
        &mut self,
        id: DndId,
        init: DroppableInit<P>,
    ) -> Result<(), RegistryError> {
        if self.get_droppable(&id).is_some() {
            return Err(RegistryError::DuplicateDroppable(id));
        }
        self.droppables.push(Droppable::new(id, init));
        Ok(())
    }

    /// Shallow-merge `patch` into the draggable registered under `id`.
    ///
    /// No-op if the id is absent; a measurement arriving after its entity
    /// unregistered is discarded here.
    pub fn update_draggable(&mut self, id: &DndId, patch: DraggablePatch<P>) {
        if let Some(draggable) = self.draggables.iter_mut().find(|d| d.id == *id) {
            draggable.apply(patch);
        }
    }

    /// Shallow-merge `patch` into the droppable registered under `id`.
    ///
    /// No-op if the id is absent.
    pub fn update_droppable(&mut self, id: &DndId, patch: DroppablePatch<P>) {
        if let Some(droppable) = self.droppables.iter_mut().find(|d| d.id == *id) {
            droppable.apply(patch);
        }
    }

    /// Remove the draggable registered under `id`. No-op if absent.
    pub fn unregister_draggable(&mut self, id: &DndId) {
        self.draggables.retain(|d| d.id != *id);
    }

    /// Remove the droppable registered under `id`. No-op if absent.
    pub fn unregister_droppable(&mut self, id: &DndId) {
        self.droppables.retain(|d| d.id != *id);
    }

    /// Look up a draggable by id.
    pub fn get_draggable(&self, id: &DndId) -> Option<&Draggable<P>> {
        self.draggables.iter().find(|d| d.id == *id)
    }

    /// Look up a droppable by id.
    pub fn get_droppable(&self, id: &DndId) -> Option<&Droppable<P>> {
        self.droppables.iter().find(|d| d.id == *id)
    }

    /// All draggables, in registration order.
    pub fn draggables(&self) -> &[Draggable<P>] {
        &self.draggables
    }

    /// All droppables, in registration order.
    pub fn droppables(&self) -> &[Droppable<P>] {
        &self.droppables
    }

    /// Split mutable access to both entity lists, for callback dispatch that
    /// needs a shared draggable alongside a mutable droppable (or vice
    /// versa).
    pub(crate) fn parts_mut(&mut self) -> (&mut Vec<Draggable<P>>, &mut Vec<Droppable<P>>) {
        (&mut self.draggables, &mut self.droppables)
    }
}

impl<P: fmt::Debug> fmt::Debug for Registry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("draggables", &self.draggables)
            .field("droppables", &self.droppables)
            .field("next_token", &self.next_token)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use kurbo::Rect;

    #[test]
    fn minted_ids_are_unique() {
        let mut registry = Registry::<()>::new();
        let a = registry.mint_id();
        let b = registry.mint_id();
        assert_ne!(a, b);
    }

    #[test]
    fn duplicate_draggable_registration_fails() {
        let mut registry = Registry::<()>::new();
        registry
            .register_draggable(DndId::from("card"), DraggableInit::default())
            .unwrap();

        let err = registry
            .register_draggable(DndId::from("card"), DraggableInit::default())
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateDraggable(DndId::from("card")));
        assert_eq!(
            err.to_string(),
            "draggable `card` is already registered"
        );
        // The original registration is untouched.
        assert_eq!(registry.draggables().len(), 1);
    }

    #[test]
    fn duplicate_droppable_registration_fails() {
        let mut registry = Registry::<()>::new();
        registry
            .register_droppable(DndId::from("tray"), DroppableInit::default())
            .unwrap();
        let err = registry
            .register_droppable(DndId::from("tray"), DroppableInit::default())
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateDroppable(DndId::from("tray")));
    }

    #[test]
    fn same_id_may_name_one_draggable_and_one_droppable() {
        let mut registry = Registry::<()>::new();
        registry
            .register_draggable(DndId::from("chip"), DraggableInit::default())
            .unwrap();
        registry
            .register_droppable(DndId::from("chip"), DroppableInit::default())
            .unwrap();
        assert!(registry.get_draggable(&DndId::from("chip")).is_some());
        assert!(registry.get_droppable(&DndId::from("chip")).is_some());
    }

    #[test]
    fn update_of_unknown_id_is_a_no_op() {
        let mut registry = Registry::<()>::new();
        // A late measurement for an entity that unmounted mid-flight.
        registry.update_draggable(
            &DndId::from("gone"),
            DraggablePatch::layout(Rect::new(0.0, 0.0, 10.0, 10.0)),
        );
        registry.update_droppable(
            &DndId::from("gone"),
            DroppablePatch::layout(Rect::new(0.0, 0.0, 10.0, 10.0)),
        );
        assert!(registry.draggables().is_empty());
        assert!(registry.droppables().is_empty());
    }

    #[test]
    fn unregister_of_unknown_id_is_a_no_op() {
        let mut registry = Registry::<()>::new();
        registry
            .register_draggable(DndId::from("card"), DraggableInit::default())
            .unwrap();
        registry.unregister_draggable(&DndId::from("other"));
        assert_eq!(registry.draggables().len(), 1);
    }

    #[test]
    fn unregister_then_reregister_is_allowed() {
        let mut registry = Registry::<()>::new();
        let id = DndId::from("card");
        registry
            .register_draggable(id.clone(), DraggableInit::default())
            .unwrap();
        registry.unregister_draggable(&id);
        assert!(registry.get_draggable(&id).is_none());
        registry
            .register_draggable(id.clone(), DraggableInit::default())
            .unwrap();
        assert!(registry.get_draggable(&id).is_some());
    }

    #[test]
    fn registration_order_is_preserved() {
        let mut registry = Registry::<()>::new();
        for name in ["a", "b", "c"] {
            registry
                .register_droppable(DndId::from(name), DroppableInit::default())
                .unwrap();
        }
        let order: Vec<_> = registry.droppables().iter().map(|d| d.id.clone()).collect();
        assert_eq!(
            order,
            [DndId::from("a"), DndId::from("b"), DndId::from("c")]
        );
    }
}
