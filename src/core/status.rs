//! Status data shared by the configuration, the history and the commands.
//!
//! # Public API
//! - [`Availability`]: Presence shown next to a status message
//! - [`StoredStatus`]: An availability and an already rendered message
//! - [`Template`]: A labelled template message with the availability it sets

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[default]
    Online,
    Away,
    Busy,
    Hidden,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Online => "online",
            Availability::Away => "away",
            Availability::Busy => "busy",
            Availability::Hidden => "hidden",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredStatus {
    pub availability: Availability,
    pub message: String,
}

impl StoredStatus {
    pub fn new(availability: Availability, message: impl Into<String>) -> Self {
        Self {
            availability,
            message: message.into(),
        }
    }
}

impl fmt::Display for StoredStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.availability, self.message)
    }
}

/// A user authored template. `message` is in the template language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub label: String,
    pub message: String,
    #[serde(default)]
    pub availability: Availability,
}

impl AsRef<str> for Template {
    fn as_ref(&self) -> &str {
        &self.message
    }
}
