//! Math domain module.
//!
//! The operation library behind every advertised tool. Functions here take
//! already-typed inputs, perform no argument resolution or I/O, and hold no
//! shared state, so they can be called concurrently from any request.

mod error;
pub mod operations;

pub use error::{MathError, MathResult};
pub use operations::*;
