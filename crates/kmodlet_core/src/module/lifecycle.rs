//! Paired lifecycle hook contract.
//!
//! # Responsibility
//! - Define the entry/exit hooks the host invokes around activation.
//! - Fix the failure-cause to status-code mapping for rejected loads.
//!
//! # Invariants
//! - Each hook runs at most once per load, non-reentrant, host-scheduled.
//! - A failing entry hook must fully unwind its own acquisitions first; the
//!   host never calls the exit hook for a load it did not accept.
//! - The exit hook has no return channel: release errors are appended to the
//!   sink and absorbed, never propagated.

use crate::sink::LogSink;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Paired lifecycle hooks a loadable module exposes to the host.
///
/// The module never calls its own hooks; the host alone decides the
/// load/unload schedule. Neither hook may block on unbounded work: the host
/// chooses the execution context and it may not tolerate long waits.
pub trait ModuleLifecycle: Send {
    /// Entry hook, invoked exactly once when the host activates the module.
    ///
    /// `Ok(())` is the zero/success sentinel: the host accepts the load and
    /// the module transitions to active. On `Err`, the host unwinds the
    /// load and the exit hook is never invoked, so any resource acquired
    /// here must already be released before returning the error.
    fn entry(&mut self, sink: &dyn LogSink) -> Result<(), EntryError>;

    /// Exit hook, invoked exactly once when the host deactivates the module,
    /// and only after a successful entry.
    ///
    /// There is no failure channel back to the host. Anything this hook
    /// cannot release is a silent leak; log it into the sink and return.
    fn exit(&mut self, sink: &dyn LogSink);
}

/// Failure causes an entry hook can report to the host.
///
/// The numeric mapping follows the classic loader convention of negative
/// status codes; see [`EntryError::code`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// A resource the module needs could not be acquired (memory, handle).
    ResourceUnavailable,
    /// The module found the host environment in a state it cannot accept.
    InvalidState,
    /// The module declines the load for its own reasons.
    HostRefused,
}

impl EntryError {
    /// Negative status code reported to the host for this failure cause.
    ///
    /// - `ResourceUnavailable` -> `-12` (out of memory class)
    /// - `InvalidState` -> `-22` (invalid argument class)
    /// - `HostRefused` -> `-1` (generic refusal)
    pub fn code(&self) -> i32 {
        match self {
            Self::ResourceUnavailable => -12,
            Self::InvalidState => -22,
            Self::HostRefused => -1,
        }
    }
}

impl Display for EntryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResourceUnavailable => write!(f, "entry hook: required resource unavailable"),
            Self::InvalidState => write!(f, "entry hook: host environment state not acceptable"),
            Self::HostRefused => write!(f, "entry hook: module refused the load"),
        }
    }
}

impl Error for EntryError {}
