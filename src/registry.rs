use alloc::{boxed::Box, collections::BTreeMap, vec::Vec};
use core::any::Any;
use parking_lot::Mutex;
use tracing::debug;

use crate::{
    any::TypeInfo,
    config::{Config, Lifetime},
    errors::ResolveErrorKind,
    instantiator::BoxedInstantiator,
    name::Name,
    utils::thread_safety::{BoxAnyThreadSafety, RcThreadSafety, SendSafety, SyncSafety},
    Repository,
};

pub(crate) enum Provider {
    Instance(BoxAnyThreadSafety),
    Singleton {
        instantiator: BoxedInstantiator,
        cache: Mutex<Option<BoxAnyThreadSafety>>,
    },
    Transient {
        instantiator: BoxedInstantiator,
    },
}

/// One registration.
/// The erased values always hold [`RcThreadSafety`] of the type the entry is registered under.
pub(crate) struct Entry {
    type_info: TypeInfo,
    provider: Provider,
}

impl Entry {
    #[inline]
    #[must_use]
    pub(crate) fn instance<T>(object: RcThreadSafety<T>) -> Self
    where
        T: ?Sized + SendSafety + SyncSafety + 'static,
    {
        Self {
            type_info: TypeInfo::of::<T>(),
            provider: Provider::Instance(Box::new(object)),
        }
    }

    #[inline]
    #[must_use]
    pub(crate) fn with_config(type_info: TypeInfo, instantiator: BoxedInstantiator, config: Config) -> Self {
        let provider = match config.lifetime {
            Lifetime::Singleton => Provider::Singleton {
                instantiator,
                cache: Mutex::new(None),
            },
            Lifetime::Transient => Provider::Transient { instantiator },
        };
        Self { type_info, provider }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn lifetime(&self) -> Lifetime {
        match self.provider {
            Provider::Instance(_) | Provider::Singleton { .. } => Lifetime::Singleton,
            Provider::Transient { .. } => Lifetime::Transient,
        }
    }

    #[inline]
    #[must_use]
    #[cfg(test)]
    pub(crate) fn is_cached(&self) -> bool {
        match &self.provider {
            Provider::Instance(_) => true,
            Provider::Singleton { cache, .. } => cache.lock().is_some(),
            Provider::Transient { .. } => false,
        }
    }

    /// Gets the object of the entry, calling the factory if the entry isn't cached.
    ///
    /// The cache lock isn't held while the factory runs, so the factory can resolve other entries.
    /// A failed factory leaves the entry uncached.
    pub(crate) fn get<T>(&self, repository: &Repository) -> Result<RcThreadSafety<T>, ResolveErrorKind>
    where
        T: ?Sized + 'static,
    {
        match &self.provider {
            Provider::Instance(object) => self.downcast_ref(object),
            Provider::Singleton { instantiator, cache } => {
                if let Some(object) = cache.lock().as_ref() {
                    debug!("Found in cache");
                    return self.downcast_ref(object);
                }
                debug!("Not found in cache");

                let object = instantiator(repository).map_err(ResolveErrorKind::Instantiate)?;

                let mut guard = cache.lock();
                let object = guard.get_or_insert(object);
                debug!("Cached");

                self.downcast_ref(object)
            }
            Provider::Transient { instantiator } => {
                let object = instantiator(repository).map_err(ResolveErrorKind::Instantiate)?;
                match object.downcast::<RcThreadSafety<T>>() {
                    Ok(object) => Ok(*object),
                    Err(incorrect_type) => Err(ResolveErrorKind::IncorrectType {
                        expected: self.type_info,
                        actual: (*incorrect_type).type_id(),
                    }),
                }
            }
        }
    }

    fn downcast_ref<T>(&self, object: &BoxAnyThreadSafety) -> Result<RcThreadSafety<T>, ResolveErrorKind>
    where
        T: ?Sized + 'static,
    {
        object
            .downcast_ref::<RcThreadSafety<T>>()
            .cloned()
            .ok_or_else(|| ResolveErrorKind::IncorrectType {
                expected: self.type_info,
                actual: Any::type_id(&**object),
            })
    }
}

/// Entries grouped by type, ordered by name within a type
#[derive(Default)]
pub(crate) struct Registry {
    entries: BTreeMap<TypeInfo, BTreeMap<Name, Entry>>,
}

impl Registry {
    #[inline]
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Adds the entry, returns the replaced one with the same type and name
    #[inline]
    pub(crate) fn insert(&mut self, type_info: TypeInfo, name: Name, entry: Entry) -> Option<Entry> {
        self.entries.entry(type_info).or_default().insert(name, entry)
    }

    #[inline]
    #[must_use]
    pub(crate) fn get(&self, type_info: &TypeInfo, name: &Name) -> Option<&Entry> {
        self.entries.get(type_info).and_then(|entries| entries.get(name))
    }

    /// Returns the entries of the type whose names are accepted by the filter, ordered by name
    #[must_use]
    pub(crate) fn select<F>(&self, type_info: &TypeInfo, mut filter: F) -> Vec<(&Name, &Entry)>
    where
        F: FnMut(&Name) -> bool,
    {
        self.entries
            .get(type_info)
            .into_iter()
            .flatten()
            .filter(|&(name, _)| filter(name))
            .collect()
    }

    #[inline]
    #[must_use]
    pub(crate) fn names(&self, type_info: &TypeInfo) -> Vec<Name> {
        self.entries
            .get(type_info)
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }
}
