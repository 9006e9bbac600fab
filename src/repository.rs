use alloc::{collections::BTreeMap, vec::Vec};
use core::any::type_name;
use tracing::{debug, error, info_span};

use crate::{
    any::TypeInfo,
    config::Config,
    errors::{ResolveErrorKind, Selection},
    instantiator::{boxed_instantiator, InstantiatorResult},
    name::Name,
    registry::{Entry, Registry},
    utils::thread_safety::{RcThreadSafety, SendSafety, SyncSafety},
};

/// Type-indexed store of objects and factories.
///
/// Entries are registered under a type and a [`Name`] (unnamed by default) and resolved
/// by the type they were registered under, not the type of the object itself,
/// so a `dyn Trait` can be registered with a factory of any implementation.
///
/// Factories receive the repository and may resolve other entries.
/// They are called on resolution, so entries can be registered in any order,
/// a dependency only has to be registered by the time its dependent is resolved.
/// The dependency graph must be acyclic, cycles aren't detected.
///
/// Registering an entry with the type and name of an existing one replaces it.
#[derive(Default)]
pub struct Repository {
    registry: Registry,
}

impl Repository {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { registry: Registry::new() }
    }

    /// Registers an already built object.
    /// Every resolution returns this object, a factory is never called.
    #[inline]
    pub fn register_instance_object<T>(&mut self, object: RcThreadSafety<T>) -> &mut Self
    where
        T: ?Sized + SendSafety + SyncSafety + 'static,
    {
        self.register_instance_object_with_name(Name::Unnamed, object)
    }

    /// Registers an already built object with the name.
    /// See [`Self::register_instance_object`].
    pub fn register_instance_object_with_name<T>(&mut self, name: impl Into<Name>, object: RcThreadSafety<T>) -> &mut Self
    where
        T: ?Sized + SendSafety + SyncSafety + 'static,
    {
        self.insert(TypeInfo::of::<T>(), name.into(), Entry::instance(object))
    }

    /// Registers a singleton factory.
    /// It's called on the first resolution of the entry, the result is cached and returned by every next resolution.
    #[inline]
    pub fn register_instance<T>(
        &mut self,
        instantiator: impl Fn(&Repository) -> InstantiatorResult<T> + SendSafety + SyncSafety + 'static,
    ) -> &mut Self
    where
        T: ?Sized + SendSafety + SyncSafety + 'static,
    {
        self.register_with_config(Name::Unnamed, Config::singleton(), instantiator)
    }

    /// Registers a singleton factory with the name.
    /// See [`Self::register_instance`].
    #[inline]
    pub fn register_instance_with_name<T>(
        &mut self,
        name: impl Into<Name>,
        instantiator: impl Fn(&Repository) -> InstantiatorResult<T> + SendSafety + SyncSafety + 'static,
    ) -> &mut Self
    where
        T: ?Sized + SendSafety + SyncSafety + 'static,
    {
        self.register_with_config(name, Config::singleton(), instantiator)
    }

    /// Registers a transient factory.
    /// It's called on every resolution of the entry, so every resolution returns a new object.
    #[inline]
    pub fn register_type<T>(
        &mut self,
        instantiator: impl Fn(&Repository) -> InstantiatorResult<T> + SendSafety + SyncSafety + 'static,
    ) -> &mut Self
    where
        T: ?Sized + SendSafety + SyncSafety + 'static,
    {
        self.register_with_config(Name::Unnamed, Config::transient(), instantiator)
    }

    /// Registers a transient factory with the name.
    /// See [`Self::register_type`].
    #[inline]
    pub fn register_type_with_name<T>(
        &mut self,
        name: impl Into<Name>,
        instantiator: impl Fn(&Repository) -> InstantiatorResult<T> + SendSafety + SyncSafety + 'static,
    ) -> &mut Self
    where
        T: ?Sized + SendSafety + SyncSafety + 'static,
    {
        self.register_with_config(name, Config::transient(), instantiator)
    }

    pub fn register_with_config<T>(
        &mut self,
        name: impl Into<Name>,
        config: Config,
        instantiator: impl Fn(&Repository) -> InstantiatorResult<T> + SendSafety + SyncSafety + 'static,
    ) -> &mut Self
    where
        T: ?Sized + SendSafety + SyncSafety + 'static,
    {
        let type_info = TypeInfo::of::<T>();
        self.insert(
            type_info,
            name.into(),
            Entry::with_config(type_info, boxed_instantiator(instantiator), config),
        )
    }

    /// Resolves the only entry of the type, regardless of its name.
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::NoEntry`] if there are no entries of the type
    /// - Returns [`ResolveErrorKind::Ambiguous`] if there is more than one entry of the type
    /// - Returns [`ResolveErrorKind::Instantiate`] if the factory of the entry fails
    pub fn resolve<T>(&self) -> Result<RcThreadSafety<T>, ResolveErrorKind>
    where
        T: ?Sized + 'static,
    {
        let span = info_span!("resolve", dependency = type_name::<T>());
        let _guard = span.enter();

        self.get_unique(Selection::All, |_| true)
    }

    /// Resolves the entry of the type registered with exactly this name.
    /// Unnamed entries are returned only for [`Name::Unnamed`].
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::NoEntry`] if there is no entry of the type with the name
    /// - Returns [`ResolveErrorKind::Instantiate`] if the factory of the entry fails
    pub fn resolve_by_name<T>(&self, name: impl Into<Name>) -> Result<RcThreadSafety<T>, ResolveErrorKind>
    where
        T: ?Sized + 'static,
    {
        let name = name.into();

        let span = info_span!("resolve_by_name", dependency = type_name::<T>(), name = %name);
        let _guard = span.enter();

        let type_info = TypeInfo::of::<T>();
        let Some(entry) = self.registry.get(&type_info, &name) else {
            let err = ResolveErrorKind::NoEntry {
                type_info,
                selection: Selection::Name(name),
            };
            error!("{}", err);
            return Err(err);
        };

        self.get_entry(entry)
    }

    /// Resolves the only entry of the type whose name is accepted by the filter.
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::NoEntry`] if the filter accepts no entry of the type
    /// - Returns [`ResolveErrorKind::Ambiguous`] if the filter accepts more than one entry of the type
    /// - Returns [`ResolveErrorKind::Instantiate`] if the factory of the entry fails
    pub fn resolve_with<T>(&self, filter: impl FnMut(&Name) -> bool) -> Result<RcThreadSafety<T>, ResolveErrorKind>
    where
        T: ?Sized + 'static,
    {
        let span = info_span!("resolve_with", dependency = type_name::<T>());
        let _guard = span.enter();

        self.get_unique(Selection::Filter, filter)
    }

    /// Resolves every entry of the type, ordered by name.
    /// See [`Self::resolve_all_with`].
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::Instantiate`] if a factory of the entries fails
    #[inline]
    pub fn resolve_all<T>(&self) -> Result<BTreeMap<Name, RcThreadSafety<T>>, ResolveErrorKind>
    where
        T: ?Sized + 'static,
    {
        self.resolve_all_with(|_| true)
    }

    /// Resolves every entry of the type whose name is accepted by the filter, ordered by name.
    /// No matching entries isn't an error, the map is empty then.
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::Instantiate`] if a factory of the entries fails
    pub fn resolve_all_with<T>(&self, filter: impl FnMut(&Name) -> bool) -> Result<BTreeMap<Name, RcThreadSafety<T>>, ResolveErrorKind>
    where
        T: ?Sized + 'static,
    {
        let span = info_span!("resolve_all", dependency = type_name::<T>());
        let _guard = span.enter();

        let mut resolved = BTreeMap::new();
        for (name, entry) in self.registry.select(&TypeInfo::of::<T>(), filter) {
            resolved.insert(name.clone(), self.get_entry(entry)?);
        }
        debug!(count = resolved.len(), "Resolved");

        Ok(resolved)
    }

    /// Returns `true` if an entry of the type is registered with the name
    #[inline]
    #[must_use]
    pub fn contains<T>(&self, name: impl Into<Name>) -> bool
    where
        T: ?Sized + 'static,
    {
        self.registry.get(&TypeInfo::of::<T>(), &name.into()).is_some()
    }

    /// Returns names of the entries of the type, ordered
    #[inline]
    #[must_use]
    pub fn names<T>(&self) -> Vec<Name>
    where
        T: ?Sized + 'static,
    {
        self.registry.names(&TypeInfo::of::<T>())
    }

    /// Returns count of entries of all types
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Repository {
    fn insert(&mut self, type_info: TypeInfo, name: Name, entry: Entry) -> &mut Self {
        let lifetime = entry.lifetime();
        if self.registry.insert(type_info, name.clone(), entry).is_some() {
            debug!(dependency = type_info.name, name = %name, ?lifetime, "Replaced");
        } else {
            debug!(dependency = type_info.name, name = %name, ?lifetime, "Registered");
        }
        self
    }

    fn get_unique<T>(&self, selection: Selection, filter: impl FnMut(&Name) -> bool) -> Result<RcThreadSafety<T>, ResolveErrorKind>
    where
        T: ?Sized + 'static,
    {
        let type_info = TypeInfo::of::<T>();
        let mut matched = self.registry.select(&type_info, filter);

        if matched.len() > 1 {
            let err = ResolveErrorKind::Ambiguous {
                type_info,
                selection,
                names: matched.into_iter().map(|(name, _)| name.clone()).collect(),
            };
            error!("{}", err);
            return Err(err);
        }
        let Some((name, entry)) = matched.pop() else {
            let err = ResolveErrorKind::NoEntry { type_info, selection };
            error!("{}", err);
            return Err(err);
        };
        debug!(name = %name, "Selected");

        self.get_entry(entry)
    }

    #[inline]
    fn get_entry<T>(&self, entry: &Entry) -> Result<RcThreadSafety<T>, ResolveErrorKind>
    where
        T: ?Sized + 'static,
    {
        entry.get(self).inspect_err(|err| error!("{}", err))
    }
}
