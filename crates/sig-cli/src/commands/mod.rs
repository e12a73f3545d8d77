pub mod aspect;
pub mod dispatch;
pub mod serve;
pub mod shared;
pub mod signal;
