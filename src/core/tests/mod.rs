//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Translation table invertibility
//! - Key-combo translation
//! - Line grammar and draft validation
//! - Config parsing
//! - Binding set editing

#[cfg(test)]
mod keys_tests;
