//! Shared utilities for chat-status integration tests
//!
//! Every test runs the binary with its own throw-away config and cache homes, usually from
//! inside a fresh git repository.

pub mod assertions;
pub mod fixtures;
pub mod repository;
