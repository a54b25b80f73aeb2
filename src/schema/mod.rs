//! Raw record schemas
//!
//! This module defines the lenient decode step that turns loosely-typed
//! provider rows into strict per-metric structs with optional fields.

mod raw_record;

pub use raw_record::*;
