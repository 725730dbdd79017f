use crate::core::{
    config::StatusConfig,
    error::{Result, StatusError},
    history::StatusHistory,
    output::{print_info, print_numbered, print_section_header, print_success},
};

pub fn execute_bookmarks() -> Result<()> {
    let config = StatusConfig::load()?;
    if config.bookmarked_statuses.is_empty() {
        return Err(StatusError::not_configured("No bookmarked statuses"));
    }

    print_section_header("Bookmarks");
    print_numbered(config.bookmarked_statuses.iter().map(ToString::to_string));
    Ok(())
}

/// Bookmark the most recently used status
pub fn execute_bookmark() -> Result<()> {
    let history = StatusHistory::load()?;
    let latest = history.latest().ok_or_else(|| {
        StatusError::not_configured("No status history recorded, use a template first")
    })?;

    let mut config = StatusConfig::load()?;
    if !config.bookmark(latest.status.clone()) {
        print_info(&format!("Already bookmarked: {}", latest.status));
        return Ok(());
    }
    config.save()?;

    print_success(&format!("Bookmarked: {}", latest.status));
    Ok(())
}
