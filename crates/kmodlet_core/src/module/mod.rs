//! Loadable-module contract.
//!
//! This module defines everything a module declares towards the host: the
//! metadata block, the paired lifecycle hooks, and the registration record
//! binding the two. Actual loading lives in `crate::host`; a module never
//! invokes its own hooks.

pub mod hello;
pub mod lifecycle;
pub mod metadata;
pub mod registration;
