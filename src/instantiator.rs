use alloc::boxed::Box;
use tracing::debug;

use crate::{
    errors::InstantiateErrorKind,
    utils::thread_safety::{BoxAnyThreadSafety, RcThreadSafety, SendSafety, SyncSafety},
    Repository,
};

/// Result of a factory registered for `T`
pub type InstantiatorResult<T> = Result<RcThreadSafety<T>, InstantiateErrorKind>;

#[cfg(feature = "thread_safe")]
pub(crate) type BoxedInstantiator = Box<dyn Fn(&Repository) -> Result<BoxAnyThreadSafety, InstantiateErrorKind> + Send + Sync>;

#[cfg(not(feature = "thread_safe"))]
pub(crate) type BoxedInstantiator = Box<dyn Fn(&Repository) -> Result<BoxAnyThreadSafety, InstantiateErrorKind>>;

/// Erases the provided type of the factory.
/// The result of the boxed factory holds [`RcThreadSafety<T>`].
#[must_use]
pub(crate) fn boxed_instantiator<T, Inst>(instantiator: Inst) -> BoxedInstantiator
where
    T: ?Sized + SendSafety + SyncSafety + 'static,
    Inst: Fn(&Repository) -> InstantiatorResult<T> + SendSafety + SyncSafety + 'static,
{
    Box::new(move |repository: &Repository| -> Result<BoxAnyThreadSafety, InstantiateErrorKind> {
        let dependency = instantiator(repository)?;

        debug!("Instantiated");

        Ok(Box::new(dependency) as BoxAnyThreadSafety)
    })
}

/// Factory that builds `T` with its [`Default`] implementation
#[inline]
#[must_use]
pub fn default_instance<T>() -> impl Fn(&Repository) -> InstantiatorResult<T> + Clone
where
    T: Default + 'static,
{
    |_| Ok(RcThreadSafety::new(T::default()))
}

/// Factory that resolves the only entry of `Dep` and builds `T` from it.
///
/// The dependency is resolved when the factory is called, not when it's registered,
/// so `Dep` can be registered after `T`.
#[inline]
#[must_use]
pub fn from_resolved<T, Dep>() -> impl Fn(&Repository) -> InstantiatorResult<T> + Clone
where
    T: From<RcThreadSafety<Dep>> + 'static,
    Dep: ?Sized + 'static,
{
    |repository| Ok(RcThreadSafety::new(T::from(repository.resolve::<Dep>()?)))
}
