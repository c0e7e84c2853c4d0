//! Data structures for check reports.

pub mod check;

pub use check::*;
