use alloc::string::{String, ToString as _};
use core::fmt::{self, Display, Formatter};

/// Name of an entry within the entries of one type.
///
/// [`Name::Unnamed`] is used for registrations without an explicit name.
/// It sorts before every [`Name::Named`] and is never equal to any string, including the empty one,
/// so unnamed entries are never returned by [`crate::Repository::resolve_by_name`].
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Name {
    #[default]
    Unnamed,
    Named(String),
}

impl Name {
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Name::Unnamed => None,
            Name::Named(name) => Some(name),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_unnamed(&self) -> bool {
        matches!(self, Name::Unnamed)
    }

    /// Returns `true` if the name is explicit and starts with `prefix`
    #[inline]
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.as_str().is_some_and(|name| name.starts_with(prefix))
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Name::Named(name.to_string())
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Name::Named(name)
    }
}

impl From<&String> for Name {
    fn from(name: &String) -> Self {
        Name::Named(name.clone())
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Name::Unnamed => f.write_str("<unnamed>"),
            Name::Named(name) => write!(f, "`{name}`"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Name;

    use alloc::{collections::BTreeSet, string::String, vec::Vec};

    #[test]
    fn test_unnamed_never_equals_str() {
        assert_ne!(Name::Unnamed, "");
        assert_ne!(Name::Unnamed, "<unnamed>");
        assert_ne!(Name::Unnamed, Name::from(""));
        assert_eq!(Name::from("A"), "A");
        assert_eq!(Name::from(String::from("A")), Name::from("A"));
    }

    #[test]
    fn test_order() {
        let names = BTreeSet::from([Name::from("b"), Name::from("Ab"), Name::Unnamed, Name::from("Aa"), Name::from("")]);

        assert_eq!(
            names.into_iter().collect::<Vec<_>>(),
            [Name::Unnamed, Name::from(""), Name::from("Aa"), Name::from("Ab"), Name::from("b")],
        );
    }

    #[test]
    fn test_starts_with() {
        assert!(Name::from("Aa").starts_with("A"));
        assert!(!Name::from("!A").starts_with("A"));
        assert!(!Name::Unnamed.starts_with(""));
    }
}
