mod aspect;
mod signal;

pub use aspect::AspectCommands;
pub use signal::SignalCommands;
