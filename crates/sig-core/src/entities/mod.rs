//! Entity structs for the signal equipment domain.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` so the HTTP and CLI layers can
//! return them verbatim.

mod aspect;
mod signal;

pub use aspect::Aspect;
pub use signal::Signal;
