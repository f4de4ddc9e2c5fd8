//! Utilities shared by the wordgames binaries.

pub mod logger;
