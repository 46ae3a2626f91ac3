//! Config module tests
//!
//! - Store loading/saving and backups
//! - Transactions
//! - Repair

mod repair_tests;
