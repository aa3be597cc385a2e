//! Command implementations.

pub mod check;
pub mod example;
pub mod highlight;
pub mod search;
