//! Reference vocabularies
//!
//! Word sets that mark vocabulary as "not difficult".

pub mod common;

pub use common::CommonWords;
