//! Integration tests for the subset hierarchy engine
//!
//! Tests subset creation, cascading deletion, undo/reset, and properties.

mod cascade;
mod fixtures;
mod properties;
