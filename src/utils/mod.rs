//! Shared helpers for hex and alpha handling.

pub mod validation;
