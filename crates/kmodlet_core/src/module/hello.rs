//! Baseline hello module.
//!
//! # Responsibility
//! - Provide the minimal module used to verify the lifecycle path: one
//!   announcement line on entry, one on exit, no resources either way.

use crate::module::lifecycle::{EntryError, ModuleLifecycle};
use crate::module::metadata::{ModuleMetadata, LICENSE_GPL};
use crate::module::registration::ModuleRegistration;
use crate::sink::{LogSink, Severity};

/// Bracket tag prefixed to every diagnostic line this module appends.
pub const HELLO_LOG_TAG: &str = "[kmodlet]";

/// Minimal loadable module: announces activation and deactivation, acquires
/// nothing, always accepts the load.
#[derive(Debug, Default)]
pub struct HelloModule;

impl HelloModule {
    pub fn new() -> Self {
        Self
    }

    /// Metadata block declared by the baseline module.
    pub fn metadata() -> ModuleMetadata {
        ModuleMetadata::new(
            LICENSE_GPL,
            "kmodlet maintainers",
            "A simple hello world module",
        )
    }

    /// Registration record binding the baseline metadata to its hooks.
    pub fn registration() -> ModuleRegistration {
        ModuleRegistration::new(Self::metadata(), Box::new(Self::new()))
    }
}

impl ModuleLifecycle for HelloModule {
    fn entry(&mut self, sink: &dyn LogSink) -> Result<(), EntryError> {
        sink.append(
            Severity::Info,
            &format!("{HELLO_LOG_TAG} hello world: entering active state"),
        );
        Ok(())
    }

    fn exit(&mut self, sink: &dyn LogSink) {
        sink.append(
            Severity::Info,
            &format!("{HELLO_LOG_TAG} goodbye: leaving active state"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{HelloModule, HELLO_LOG_TAG};
    use crate::module::lifecycle::ModuleLifecycle;
    use crate::module::metadata::{recognized_license_tags, ModuleMetadata};
    use crate::sink::{MemorySink, Severity};

    #[test]
    fn baseline_license_tag_is_recognized() {
        // Static property: the tag must sit in the host-recognized set.
        let ModuleMetadata { license, .. } = HelloModule::metadata();
        assert!(!license.trim().is_empty());
        assert!(recognized_license_tags().contains(&license.as_str()));
    }

    #[test]
    fn entry_appends_one_info_announcement_and_succeeds() {
        let sink = MemorySink::new();
        let mut module = HelloModule::new();

        module.entry(&sink).expect("baseline entry always succeeds");

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].severity, Severity::Info);
        assert!(records[0].line.starts_with(HELLO_LOG_TAG));
        assert!(records[0].line.contains("entering"));
    }

    #[test]
    fn exit_appends_one_info_announcement() {
        let sink = MemorySink::new();
        let mut module = HelloModule::new();

        module.exit(&sink);

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].severity, Severity::Info);
        assert!(records[0].line.contains("leaving"));
    }
}
