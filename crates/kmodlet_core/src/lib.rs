//! Loadable-module lifecycle contract and host simulation for kmodlet.
//! This crate is the single source of truth for the load/unload invariants.

pub mod config;
pub mod host;
pub mod logging;
pub mod module;
pub mod sink;

pub use config::{ConfigError, HostConfig};
pub use host::{HostLoader, LoadError, LoadPolicy, LoadedModule};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use module::hello::HelloModule;
pub use module::lifecycle::{EntryError, ModuleLifecycle};
pub use module::metadata::{
    recognized_license_tags, LicenseClass, MetadataValidationError, ModuleMetadata,
};
pub use module::registration::ModuleRegistration;
pub use sink::{HostLogSink, LogSink, MemorySink, Severity, SinkRecord};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
