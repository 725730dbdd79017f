//! Per-OS locations of the configuration and cache directories.
//!
//! An explicitly set `XDG_CONFIG_HOME` / `XDG_CACHE_HOME` wins on every platform; otherwise the
//! platform convention is used.

use std::path::PathBuf;

use crate::core::error::{ErrorCode, Result, StatusError};

const APP_DIRECTORY: &str = "chat-status";

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| {
        StatusError::internal(
            ErrorCode::ConfigurationNotAccessible,
            "Could not determine the home directory",
        )
    })
}

fn xdg_override(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

pub fn get_config_directory() -> Result<PathBuf> {
    if let Some(base) = xdg_override("XDG_CONFIG_HOME") {
        return Ok(base.join(APP_DIRECTORY));
    }

    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => home_dir()?.join(".config"),
        "macos" => home_dir()?.join("Library/Application Support"),
        _ => dirs::config_dir().map_or_else(home_dir, Ok)?,
    };

    Ok(base.join(APP_DIRECTORY))
}

pub fn get_cache_directory() -> Result<PathBuf> {
    if let Some(base) = xdg_override("XDG_CACHE_HOME") {
        return Ok(base.join(APP_DIRECTORY));
    }

    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => home_dir()?.join(".cache"),
        "macos" => home_dir()?.join("Library/Caches"),
        _ => dirs::cache_dir().map_or_else(home_dir, Ok)?,
    };

    Ok(base.join(APP_DIRECTORY))
}
