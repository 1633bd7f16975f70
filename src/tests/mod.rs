//! Cross-module test suites.
//!
//! Unit tests for a single module live beside that module; the suites here
//! exercise construction, sharing and enumeration together.

mod sharing_tests;
