//! Error types and error handling for the front end.
//!
//! This module defines the syntax errors the parser collects. It includes:
//!
//! - The `Error` record handed back to callers next to the tree
//! - Specific error variants with the expected and found token kinds
//! - Error names and tips used when reporting

pub mod errors;
