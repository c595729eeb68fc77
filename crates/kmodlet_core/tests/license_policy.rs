use kmodlet_core::{
    recognized_license_tags, HelloModule, HostConfig, HostLoader, LoadError, LoadPolicy,
    MemorySink, ModuleMetadata, ModuleRegistration,
};
use std::sync::Arc;

fn proprietary_registration() -> ModuleRegistration {
    let metadata = ModuleMetadata::new("Proprietary", "vendor", "closed-source module");
    ModuleRegistration::new(metadata, Box::new(HelloModule::new()))
}

#[test]
fn baseline_module_license_is_in_the_recognized_set() {
    let metadata = HelloModule::metadata();
    assert!(!metadata.license.trim().is_empty());
    assert!(recognized_license_tags().contains(&metadata.license.as_str()));
}

#[test]
fn reject_policy_refuses_the_load_before_any_hook_runs() {
    let sink = Arc::new(MemorySink::new());
    let mut loader = HostLoader::with_policy(sink.clone(), LoadPolicy::RejectUnrecognized);

    let err = loader
        .load(proprietary_registration())
        .expect_err("unrecognized license must be refused");
    assert!(matches!(err, LoadError::LicenseRejected { .. }));
    assert!(sink.is_empty());
    assert!(!loader.tainted());
}

#[test]
fn taint_policy_accepts_the_load_and_marks_the_host() {
    let sink = Arc::new(MemorySink::new());
    let mut loader = HostLoader::with_policy(sink.clone(), LoadPolicy::TaintAndLoad);

    let loaded = loader
        .load(proprietary_registration())
        .expect("taint policy loads tainting modules");
    assert!(loader.tainted());
    assert_eq!(sink.count_containing("entering"), 1);

    loader.unload(loaded);
    assert!(loader.tainted(), "taint never clears within a host lifetime");
}

#[test]
fn recognized_module_never_taints_under_either_policy() {
    for policy in [LoadPolicy::RejectUnrecognized, LoadPolicy::TaintAndLoad] {
        let sink = Arc::new(MemorySink::new());
        let mut loader = HostLoader::with_policy(sink, policy);

        let loaded = loader
            .load(HelloModule::registration())
            .expect("recognized license loads under any policy");
        assert!(!loader.tainted());
        loader.unload(loaded);
    }
}

#[test]
fn config_vouched_license_loads_clean_under_reject_policy() {
    let config = HostConfig::from_toml_str(
        r#"
            load_policy = "reject_unrecognized"
            extra_recognized_licenses = ["Proprietary"]
        "#,
    )
    .expect("config parses");

    let sink = Arc::new(MemorySink::new());
    let mut loader = HostLoader::from_config(sink, &config);

    let loaded = loader
        .load(proprietary_registration())
        .expect("vouched license loads");
    assert!(!loader.tainted());
    loader.unload(loaded);
}
