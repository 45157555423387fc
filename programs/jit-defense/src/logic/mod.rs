//! Core engine logic separated from instruction handlers

pub mod decision;
pub mod detection;

pub use decision::*;
pub use detection::*;
