//! Host loader simulation.
//!
//! # Responsibility
//! - Play the host side of the lifecycle contract: gate on metadata, invoke
//!   the entry hook, track activation, invoke the exit hook on unload.
//! - Own the activation state machine (`Unloaded -> Active -> Unloaded`);
//!   module code never observes it.
//!
//! # Invariants
//! - The exit hook runs at most once per load, and never for a load whose
//!   entry hook was rejected: `unload` consumes the [`LoadedModule`] handle
//!   that only a successful `load` can produce.
//! - Dropping a [`LoadedModule`] without `unload` models abrupt host
//!   shutdown and must not invoke the exit hook; there is no `Drop` glue.

use crate::module::lifecycle::{EntryError, ModuleLifecycle};
use crate::module::metadata::{LicenseClass, MetadataValidationError, ModuleMetadata};
use crate::module::registration::ModuleRegistration;
use crate::sink::LogSink;
use log::{info, warn};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Host policy for modules carrying an unrecognized license tag.
///
/// Which variant a real host applies is its own configuration; the module
/// cannot observe the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Refuse the load outright.
    RejectUnrecognized,
    /// Load anyway, warn, and mark the host as tainted.
    #[default]
    TaintAndLoad,
}

/// Simulated host loader for one or more module load/unload cycles.
pub struct HostLoader {
    policy: LoadPolicy,
    extra_recognized: Vec<String>,
    sink: Arc<dyn LogSink>,
    tainted: bool,
    loads_accepted: u64,
    loads_rejected: u64,
}

impl HostLoader {
    /// Creates a loader with the default taint-and-load policy.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self::with_policy(sink, LoadPolicy::default())
    }

    pub fn with_policy(sink: Arc<dyn LogSink>, policy: LoadPolicy) -> Self {
        Self {
            policy,
            extra_recognized: Vec::new(),
            sink,
            tainted: false,
            loads_accepted: 0,
            loads_rejected: 0,
        }
    }

    /// Builds a loader from host configuration.
    pub fn from_config(sink: Arc<dyn LogSink>, config: &crate::config::HostConfig) -> Self {
        Self::with_policy(sink, config.load_policy)
            .with_extra_recognized_licenses(config.extra_recognized_licenses.clone())
    }

    /// Extends the recognized license set with host-vouched tags.
    pub fn with_extra_recognized_licenses(mut self, tags: Vec<String>) -> Self {
        self.extra_recognized = tags;
        self
    }

    /// Loads one module: metadata gate, then entry hook.
    ///
    /// On success the module is active and the returned handle is the only
    /// way to reach its exit hook. On failure the module is dropped without
    /// its exit hook ever running; a rejected entry must already have
    /// unwound its own acquisitions.
    pub fn load(&mut self, registration: ModuleRegistration) -> Result<LoadedModule, LoadError> {
        let metadata = registration.metadata().clone();
        if let Err(err) = metadata.validate() {
            self.loads_rejected += 1;
            warn!(
                "event=module_load module=host status=rejected reason=metadata error={err}"
            );
            return Err(LoadError::MetadataRejected(err));
        }

        if metadata.license_class(&self.extra_recognized) == LicenseClass::Unrecognized {
            match self.policy {
                LoadPolicy::RejectUnrecognized => {
                    self.loads_rejected += 1;
                    warn!(
                        "event=module_load module=host status=rejected reason=license tag={}",
                        metadata.license
                    );
                    return Err(LoadError::LicenseRejected {
                        tag: metadata.license,
                    });
                }
                LoadPolicy::TaintAndLoad => {
                    self.tainted = true;
                    warn!(
                        "event=host_tainted module=host status=warn tag={}",
                        metadata.license
                    );
                }
            }
        }

        let (metadata, mut module) = registration.into_parts();
        if let Err(cause) = module.entry(self.sink.as_ref()) {
            self.loads_rejected += 1;
            warn!(
                "event=module_load module=host status=rejected reason=entry code={} error={cause}",
                cause.code()
            );
            return Err(LoadError::EntryRejected {
                code: cause.code(),
                cause,
            });
        }

        self.loads_accepted += 1;
        info!(
            "event=module_load module=host status=active license={}",
            metadata.license
        );
        Ok(LoadedModule { metadata, module })
    }

    /// Unloads an active module, invoking its exit hook exactly once.
    ///
    /// Returns the metadata block for the caller's bookkeeping; the module
    /// itself is gone after this call.
    pub fn unload(&mut self, mut loaded: LoadedModule) -> ModuleMetadata {
        loaded.module.exit(self.sink.as_ref());
        info!(
            "event=module_unload module=host status=unloaded license={}",
            loaded.metadata.license
        );
        loaded.metadata
    }

    /// True once any tainting module was accepted under taint-and-load.
    pub fn tainted(&self) -> bool {
        self.tainted
    }

    pub fn loads_accepted(&self) -> u64 {
        self.loads_accepted
    }

    pub fn loads_rejected(&self) -> u64 {
        self.loads_rejected
    }
}

impl std::fmt::Debug for HostLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostLoader")
            .field("policy", &self.policy)
            .field("tainted", &self.tainted)
            .field("loads_accepted", &self.loads_accepted)
            .field("loads_rejected", &self.loads_rejected)
            .finish_non_exhaustive()
    }
}

/// Handle for one active module load.
///
/// Exists only between a successful entry hook and the matching unload.
/// Dropping it without [`HostLoader::unload`] models abrupt host shutdown:
/// the exit hook is skipped and nothing may rely on its side effects.
pub struct LoadedModule {
    metadata: ModuleMetadata,
    module: Box<dyn ModuleLifecycle>,
}

impl LoadedModule {
    pub fn metadata(&self) -> &ModuleMetadata {
        &self.metadata
    }
}

impl std::fmt::Debug for LoadedModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedModule")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

/// Host-side load failures.
#[derive(Debug)]
pub enum LoadError {
    /// Metadata failed declaration-level validation.
    MetadataRejected(MetadataValidationError),
    /// License tag unrecognized under [`LoadPolicy::RejectUnrecognized`].
    LicenseRejected { tag: String },
    /// Entry hook reported failure; `code` is its negative status code.
    EntryRejected { code: i32, cause: EntryError },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MetadataRejected(err) => write!(f, "load rejected: invalid metadata: {err}"),
            Self::LicenseRejected { tag } => {
                write!(f, "load rejected: unrecognized license tag: {tag}")
            }
            Self::EntryRejected { code, cause } => {
                write!(f, "load rejected: entry hook returned {code}: {cause}")
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MetadataRejected(err) => Some(err),
            Self::LicenseRejected { .. } => None,
            Self::EntryRejected { cause, .. } => Some(cause),
        }
    }
}
