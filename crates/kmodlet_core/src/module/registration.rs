//! Declarative binding between metadata and lifecycle hooks.
//!
//! # Responsibility
//! - Bind one metadata block to one pair of lifecycle hooks so the host
//!   loader can find them.
//!
//! # Invariants
//! - Evaluated once: built before load, consumed by the host at load time,
//!   never re-evaluated or changed afterwards.
//! - The module code holds no reference back to its own registration.

use crate::module::lifecycle::ModuleLifecycle;
use crate::module::metadata::ModuleMetadata;

/// Registration record the host reads to locate a module's hooks.
///
/// Has no behavior of its own beyond handing the metadata and the hook pair
/// to the host; the hooks are reachable only through the host loader.
pub struct ModuleRegistration {
    metadata: ModuleMetadata,
    module: Box<dyn ModuleLifecycle>,
}

impl ModuleRegistration {
    /// Binds a metadata block to a hook pair.
    ///
    /// Deliberately infallible: judging the metadata (validity, license
    /// recognition) is the host's call at load time, not the module's.
    pub fn new(metadata: ModuleMetadata, module: Box<dyn ModuleLifecycle>) -> Self {
        Self { metadata, module }
    }

    /// Metadata block the host consults before invoking any hook.
    pub fn metadata(&self) -> &ModuleMetadata {
        &self.metadata
    }

    pub(crate) fn into_parts(self) -> (ModuleMetadata, Box<dyn ModuleLifecycle>) {
        (self.metadata, self.module)
    }
}

impl std::fmt::Debug for ModuleRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleRegistration")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}
