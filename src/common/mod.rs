//! Common error and enumeration types

pub mod errors;
pub mod types;
