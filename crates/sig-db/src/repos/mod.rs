//! Repository modules implementing the signal registry and aspect state machine.
//!
//! Each module adds methods to `SignalService` via `impl SignalService` blocks.

pub mod aspect;
pub mod signal;
