//! Core functionality for chat-status.
//!
//! The template language (splitting, modifier parsing, rendering), the collaborators it reads
//! from, and the configuration and history the commands persist.

pub mod config;
pub mod dirs;
pub mod dynamic_value;
pub mod environment;
pub mod error;
pub mod escape;
pub mod git;
pub mod history;
pub mod modifiers;
pub mod output;
pub mod render;
pub mod splitter;
pub mod status;
pub mod time_range;

// === Error handling ===
pub use error::{ErrorCode, ErrorScope, Result, StatusError};

// === Template language ===
// Placeholder descriptors, the parsers that build them and the renderer that evaluates them
pub use dynamic_value::{
    DirectoryNameValue, DynamicValue, GitReferenceType, GitReferenceValue, InputValue,
    InputWordFormat, RoundDirection, TimeRound, TimeUnit, TimeValue, WordCasing,
};
pub use modifiers::convert_dynamic_template_value;
pub use render::{format_time, Renderer};
pub use splitter::{split_template_string, Segment};
pub use time_range::{parse_time_range, TimeRange};

// === Environment ===
// Injected working directory, version control and clock
pub use environment::{
    Clock, FixedClock, FixedDirectory, FixedVersionControl, ProcessDirectory, SystemClock,
    UnavailableVersionControl, VersionControl, WorkingDirectory,
};
pub use git::{discover_version_control, GitRepo};

// === Persistence ===
pub use config::StatusConfig;
pub use history::{HistoryEntry, StatusHistory};
pub use status::{Availability, StoredStatus, Template};

// === Output formatting ===
pub use output::{print_error, print_info, print_numbered, print_section_header, print_success};
