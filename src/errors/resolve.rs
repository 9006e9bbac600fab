use alloc::vec::Vec;
use core::{
    any::TypeId,
    fmt::{self, Display, Formatter},
};

use super::instantiate::InstantiateErrorKind;
use crate::{any::TypeInfo, name::Name};

/// Criterion used to select entries of one type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Name(Name),
    Filter,
}

impl Display for Selection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("any name"),
            Selection::Name(name) => write!(f, "name {name}"),
            Selection::Filter => f.write_str("filter"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ResolveErrorKind {
    #[error("No entry of type {type_info} registered with {selection}")]
    NoEntry { type_info: TypeInfo, selection: Selection },
    #[error(
        "Expected exactly one entry of type {type_info} registered with {selection}, found {}: {names:?}",
        .names.len()
    )]
    Ambiguous {
        type_info: TypeInfo,
        selection: Selection,
        names: Vec<Name>,
    },
    #[error("Incorrect entry provides type. Actual: {actual:?}, expected: {expected}")]
    IncorrectType { expected: TypeInfo, actual: TypeId },
    #[error(transparent)]
    Instantiate(InstantiateErrorKind),
}

impl ResolveErrorKind {
    /// Returns the innermost resolution error, following failures of nested factories
    #[must_use]
    pub fn root(&self) -> &ResolveErrorKind {
        match self {
            ResolveErrorKind::Instantiate(InstantiateErrorKind::Resolve(err)) => err.root(),
            err => err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ResolveErrorKind, Selection};
    use crate::{any::TypeInfo, errors::InstantiateErrorKind, name::Name};

    use alloc::{boxed::Box, string::ToString as _, vec};

    struct A;

    #[test]
    fn test_messages() {
        let err = ResolveErrorKind::NoEntry {
            type_info: TypeInfo::of::<u8>(),
            selection: Selection::Name(Name::from("A")),
        };
        assert_eq!(err.to_string(), "No entry of type u8 registered with name `A`");

        let err = ResolveErrorKind::Ambiguous {
            type_info: TypeInfo::of::<u8>(),
            selection: Selection::All,
            names: vec![Name::Unnamed, Name::from("A")],
        };
        assert!(err.to_string().starts_with("Expected exactly one entry of type u8 registered with any name, found 2"));
    }

    #[test]
    fn test_root() {
        let err = ResolveErrorKind::Instantiate(InstantiateErrorKind::Resolve(Box::new(ResolveErrorKind::Instantiate(
            InstantiateErrorKind::Resolve(Box::new(ResolveErrorKind::NoEntry {
                type_info: TypeInfo::of::<A>(),
                selection: Selection::All,
            })),
        ))));

        assert!(matches!(
            err.root(),
            ResolveErrorKind::NoEntry {
                selection: Selection::All,
                ..
            }
        ));
        // Transparent wrappers keep the message of the failed dependency
        assert_eq!(err.to_string(), err.root().to_string());
    }
}
