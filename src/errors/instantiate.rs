use alloc::boxed::Box;

use super::resolve::ResolveErrorKind;

/// Error returned by a factory.
///
/// Resolution errors of dependencies are converted by `?` inside a factory,
/// any other failure can be passed as [`anyhow::Error`].
#[derive(thiserror::Error, Debug)]
pub enum InstantiateErrorKind {
    #[error(transparent)]
    Resolve(Box<ResolveErrorKind>),
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}

impl From<ResolveErrorKind> for InstantiateErrorKind {
    #[inline]
    fn from(err: ResolveErrorKind) -> Self {
        Self::Resolve(Box::new(err))
    }
}
