/// How often the factory of an entry is called
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// The factory is called on the first resolution, its result is cached and reused.
    #[default]
    Singleton,
    /// The factory is called on every resolution, nothing is cached.
    Transient,
}

/// Config for a registration
/// ## Fields
/// - `lifetime`:
///   See [`Lifetime`]. Defaults to [`Lifetime::Singleton`].
///
///   This does **not** affect the dependencies resolved by the factory,
///   they follow the lifetime of their own entries.
#[derive(Debug, Default, Clone, Copy)]
pub struct Config {
    pub lifetime: Lifetime,
}

impl Config {
    #[inline]
    #[must_use]
    pub const fn singleton() -> Self {
        Self {
            lifetime: Lifetime::Singleton,
        }
    }

    #[inline]
    #[must_use]
    pub const fn transient() -> Self {
        Self {
            lifetime: Lifetime::Transient,
        }
    }
}
