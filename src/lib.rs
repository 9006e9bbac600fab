//! Type-indexed service repository.
//!
//! Objects and factories are registered under a type and an optional name,
//! and resolved by the type, by the name or by a filter over names.
//!
//! ```
//! use depinject::{default_instance, from_resolved, utils::thread_safety::RcThreadSafety, Repository};
//!
//! #[derive(Default)]
//! struct Config;
//!
//! struct Service(RcThreadSafety<Config>);
//!
//! impl From<RcThreadSafety<Config>> for Service {
//!     fn from(config: RcThreadSafety<Config>) -> Self {
//!         Self(config)
//!     }
//! }
//!
//! let mut repository = Repository::new();
//! // The dependency can be registered after its dependent
//! repository
//!     .register_instance(from_resolved::<Service, Config>())
//!     .register_instance(default_instance::<Config>());
//!
//! let service = repository.resolve::<Service>().unwrap();
//! assert!(RcThreadSafety::ptr_eq(&service.0, &repository.resolve::<Config>().unwrap()));
//! ```
#![no_std]

extern crate alloc;

pub(crate) mod any;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod instantiator;
pub(crate) mod name;
pub(crate) mod registry;
pub(crate) mod repository;

pub mod utils;

pub use any::TypeInfo;
pub use config::{Config, Lifetime};
pub use errors::{InstantiateErrorKind, ResolveErrorKind, Selection};
pub use instantiator::{default_instance, from_resolved, InstantiatorResult};
pub use name::Name;
pub use repository::Repository;
