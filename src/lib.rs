//! Chat Status - compose chat status messages from reusable templates.
//!
//! A template is free text with `{...}` placeholders that are evaluated on every render:
//! `{d+1,^upWord}` names a parent directory, `{g?branch}` the current git branch,
//! `{t~15m,=american}` the rounded local time.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Template splitting and modifier parsing
//! - Rendering against an injected environment
//! - Configuration, status history and bookmarks
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    convert_dynamic_template_value,
    parse_time_range,
    split_template_string,
    // Statuses and persistence
    Availability,
    // Environment
    Clock,
    DynamicValue,
    ErrorCode,
    ErrorScope,
    GitRepo,
    Renderer,
    Result,
    Segment,
    StatusConfig,
    // Error handling
    StatusError,
    StatusHistory,
    StoredStatus,
    Template,
    VersionControl,
    WorkingDirectory,
};
