use chrono::Utc;

use crate::commands::render::render_in_current_environment;
use crate::core::{
    config::StatusConfig,
    error::Result,
    history::StatusHistory,
    status::StoredStatus,
};

/// Render the template at a 1-based index, print the resulting status and record it
pub fn execute_use(index: usize) -> Result<()> {
    let config = StatusConfig::load()?;
    let template = config.template(index)?;

    let message = render_in_current_environment(&config, &template.message)?;
    let stored = StoredStatus::new(template.availability, message);
    println!("{stored}");

    if config.status_history_limit > 0 {
        record_history(stored, config.status_history_limit);
    }
    Ok(())
}

fn record_history(status: StoredStatus, limit: usize) {
    let result = StatusHistory::load().and_then(|mut history| {
        history.record(status, Utc::now(), limit);
        history.save()
    });

    if let Err(e) = result {
        log::warn!("Failed to save status history: {e}");
    }
}
