//! Security helpers shared by slices.

pub mod digest;
