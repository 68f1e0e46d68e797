//! Domains module containing business logic organized by bounded contexts.
//!
//! - **math**: the operation library (pure arithmetic)
//! - **tools**: the tool catalogue and the dispatcher that maps loosely-typed
//!   calls onto math operations

pub mod math;
pub mod tools;
