//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive the baseline hello module through one load/unload cycle.
//! - Keep output deterministic for quick local sanity checks.

use std::sync::Arc;

use kmodlet_core::{HelloModule, HostLoader, MemorySink};

fn main() {
    // Capture the transcript instead of routing to a real logger so the
    // probe output stays deterministic.
    let sink = Arc::new(MemorySink::new());
    let mut loader = HostLoader::new(sink.clone());

    println!("kmodlet_core version={}", kmodlet_core::core_version());

    match loader.load(HelloModule::registration()) {
        Ok(loaded) => {
            println!("load status=active license={}", loaded.metadata().license);
            loader.unload(loaded);
            println!("unload status=unloaded tainted={}", loader.tainted());
        }
        Err(err) => {
            println!("load status=rejected error={err}");
        }
    }

    for record in sink.records() {
        println!("sink {} {}", record.severity.as_str(), record.line);
    }
}
