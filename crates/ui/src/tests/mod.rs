//! Behavioral tests for UI components
//!
//! BDD-style tests using given-when-then naming convention.
