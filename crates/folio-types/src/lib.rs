//! Foundation types for the folio terminal.
//!
//! This crate contains the host-agnostic types shared by the terminal core
//! and its frontends: error types and key-input events.

pub mod error;
pub mod input;
