// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opaque identifiers for registered drag-and-drop entities.

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

/// Identifier for a registered draggable or droppable.
///
/// Identifiers are opaque and compared by equality. There are two flavors:
///
/// - [`DndId::Named`]: a caller-supplied stable name, useful when the
///   application wants to refer to an entity across mounts (for example a
///   persistent "trash" zone).
/// - [`DndId::Token`]: a token minted by
///   [`Registry::mint_id`](crate::registry::Registry::mint_id) when the
///   caller does not care about the concrete value. Tokens are unique for
///   the lifetime of the registry that minted them.
///
/// Registering an id that is already present for the same entity kind is a
/// loud failure; see [`RegistryError`](crate::registry::RegistryError).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum DndId {
    /// Caller-supplied stable name.
    Named(Cow<'static, str>),
    /// Registry-minted token.
    Token(u64),
}

impl From<&'static str> for DndId {
    fn from(name: &'static str) -> Self {
        Self::Named(Cow::Borrowed(name))
    }
}

impl From<String> for DndId {
    fn from(name: String) -> Self {
        Self::Named(Cow::Owned(name))
    }
}

impl fmt::Display for DndId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::Token(token) => write!(f, "#{token}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn named_ids_compare_by_name() {
        let a = DndId::from("trash");
        let b = DndId::from("trash".to_string());
        assert_eq!(a, b);
        assert_ne!(a, DndId::from("inbox"));
    }

    #[test]
    fn named_and_token_ids_never_collide() {
        assert_ne!(DndId::from("7"), DndId::Token(7));
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(format!("{}", DndId::from("inbox")), "inbox");
        assert_eq!(format!("{}", DndId::Token(17)), "#17");
    }
}
