//! Utilities for working with vendor data

pub mod date;
