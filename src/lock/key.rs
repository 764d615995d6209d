//! Lock identities.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a keyed lock: a Rust type or an integer constant.
#[derive(Debug, Clone, Copy)]
pub enum LockKey {
    /// Keyed by a type. The name is carried for messages only.
    Type { id: TypeId, name: &'static str },
    /// Keyed by an integer.
    Id(i64),
}

impl LockKey {
    /// Key for the type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        LockKey::Type {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Key for an integer constant.
    pub const fn id(n: i64) -> Self {
        LockKey::Id(n)
    }
}

impl PartialEq for LockKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LockKey::Type { id: a, .. }, LockKey::Type { id: b, .. }) => a == b,
            (LockKey::Id(a), LockKey::Id(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for LockKey {}

impl Hash for LockKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            LockKey::Type { id, .. } => {
                0u8.hash(state);
                id.hash(state);
            }
            LockKey::Id(n) => {
                1u8.hash(state);
                n.hash(state);
            }
        }
    }
}

impl fmt::Display for LockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockKey::Type { name, .. } => write!(f, "type {}", name),
            LockKey::Id(n) => write!(f, "id {}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Console;
    struct File;

    #[test]
    fn type_keys_compare_by_type() {
        assert_eq!(LockKey::of::<Console>(), LockKey::of::<Console>());
        assert_ne!(LockKey::of::<Console>(), LockKey::of::<File>());
    }

    #[test]
    fn id_and_type_keys_never_collide() {
        assert_ne!(LockKey::id(0), LockKey::of::<u8>());
        assert_eq!(LockKey::id(3), LockKey::Id(3));
    }

    #[test]
    fn display_names_the_key() {
        assert!(LockKey::of::<Console>().to_string().contains("Console"));
        assert_eq!(LockKey::id(42).to_string(), "id 42");
    }
}
