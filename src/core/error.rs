//! Error type shared by the template language, its collaborators and the CLI.
//!
//! Every failure is a [`StatusError`]: a single error kind tagged with a [`ErrorScope`]
//! (who can fix it), an optional [`ErrorCode`] from a closed set, a human readable message
//! and a flag telling the caller whether the failure should be surfaced prominently.
//!
//! # Public API
//! - [`StatusError`]: The error type, built with `thiserror`
//! - [`ErrorScope`]: `User`, `Internal` or `Debug`
//! - [`ErrorCode`]: Closed enumeration of failure codes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, StatusError>`
//!
//! # Propagation
//! - **Parse errors** (bad modifiers, conflicts, invalid enum values) are `User` scoped
//! - **Render errors** (git unavailable, unresolvable directory, unsafe numbers) are `Internal`
//! - **Foreign errors** (I/O, JSON, git2) are wrapped into an internal `UnknownError`

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Who is expected to act on an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorScope {
    /// Caller-correctable input error
    User,
    /// Programming or environment error
    Internal,
    /// Diagnostic-only
    Debug,
}

impl fmt::Display for ErrorScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorScope::User => "user",
            ErrorScope::Internal => "internal",
            ErrorScope::Debug => "debug",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    ConfigurationNotAccessible,
    GitExtensionError,
    GitExtensionNotAvailable,
    InvalidDynamicValue,
    InvalidTemplateString,
    NotConfigured,
    NotImplemented,
    ParseInvalidTimeRange,
    UnknownError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigurationNotAccessible => "ConfigurationNotAccessible",
            ErrorCode::GitExtensionError => "GitExtensionError",
            ErrorCode::GitExtensionNotAvailable => "GitExtensionNotAvailable",
            ErrorCode::InvalidDynamicValue => "InvalidDynamicValue",
            ErrorCode::InvalidTemplateString => "InvalidTemplateString",
            ErrorCode::NotConfigured => "NotConfigured",
            ErrorCode::NotImplemented => "NotImplemented",
            ErrorCode::ParseInvalidTimeRange => "ParseInvalidTimeRange",
            ErrorCode::UnknownError => "UnknownError",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The one error kind of chat-status
#[derive(Error, Debug)]
#[error("{message}")]
pub struct StatusError {
    scope: ErrorScope,
    code: Option<ErrorCode>,
    message: String,
    show_output: bool,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// Convenience type alias for Results using StatusError
pub type Result<T> = std::result::Result<T, StatusError>;

impl StatusError {
    /// Build an error the way every call site does: the message falls back to the code
    /// name, and `show_output` falls back to "is this an internal error".
    pub fn new(
        scope: ErrorScope,
        code: Option<ErrorCode>,
        message: Option<String>,
        show_output: Option<bool>,
    ) -> Self {
        let message = message
            .or_else(|| code.map(|c| c.as_str().to_string()))
            .unwrap_or_default();

        Self {
            scope,
            code,
            message,
            show_output: show_output.unwrap_or(scope == ErrorScope::Internal),
            source: None,
        }
    }

    /// User-scoped error that is always surfaced
    pub fn user(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(ErrorScope::User, Some(code), Some(message.into()), Some(true))
    }

    /// Internal error that is always surfaced
    pub fn internal(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(
            ErrorScope::Internal,
            Some(code),
            Some(message.into()),
            Some(true),
        )
    }

    /// Create a user-scoped invalid dynamic value error
    pub fn invalid_dynamic_value(message: impl Into<String>) -> Self {
        Self::user(ErrorCode::InvalidDynamicValue, message)
    }

    /// Create a "modifier already defined" error naming the identifier
    pub fn modifier_already_defined(identifier: &str) -> Self {
        Self::invalid_dynamic_value(format!("\"{identifier}\" modifier already defined"))
    }

    /// Create an "unknown modifier identifier" error
    pub fn invalid_modifier_identifier(identifier: &str) -> Self {
        Self::invalid_dynamic_value(format!("Invalid modifier identifier: {identifier}"))
    }

    /// Create an invalid modifier value error listing the accepted values
    pub fn invalid_modifier_value(modifier: &str, valid_values: &[&str]) -> Self {
        let valid = valid_values
            .iter()
            .map(|v| format!("\"{v}\""))
            .collect::<Vec<_>>()
            .join(",");
        Self::invalid_dynamic_value(format!(
            "Invalid modifier value: \"{modifier}\". Valid values: {valid}"
        ))
    }

    /// Create an invalid template string error
    pub fn invalid_template_string(template: &str, reason: impl fmt::Display) -> Self {
        Self::user(
            ErrorCode::InvalidTemplateString,
            format!("Template string \"{template}\" {reason}"),
        )
    }

    /// Create a "not configured" error for missing templates, history entries and the like
    pub fn not_configured(message: impl Into<String>) -> Self {
        Self::user(ErrorCode::NotConfigured, message)
    }

    /// Wrap an unanticipated error, keeping its message and source chain
    pub fn unknown<E>(context: &str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let mut err = Self::new(
            ErrorScope::Internal,
            Some(ErrorCode::UnknownError),
            Some(format!("{context}: {source}")),
            None,
        );
        err.source = Some(Box::new(source));
        err
    }

    /// Attach an underlying cause to an already built error
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn scope(&self) -> ErrorScope {
        self.scope
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the failure should be shown prominently to the end user
    pub fn show_output(&self) -> bool {
        self.show_output
    }

    pub fn is_code(&self, code: ErrorCode) -> bool {
        self.code == Some(code)
    }
}

impl From<std::io::Error> for StatusError {
    fn from(err: std::io::Error) -> Self {
        Self::unknown("IO error", err)
    }
}

impl From<serde_json::Error> for StatusError {
    fn from(err: serde_json::Error) -> Self {
        Self::unknown("JSON serialization error", err)
    }
}

impl From<git2::Error> for StatusError {
    fn from(err: git2::Error) -> Self {
        Self::unknown("Git repository error", err)
    }
}
