//! Command implementations.

pub mod evaluate;
pub mod info;
pub mod phrases;
