use crate::core::{
    error::{Result, StatusError},
    history::StatusHistory,
    output::{print_numbered, print_section_header, print_success},
};

pub fn execute_history(clear: bool) -> Result<()> {
    let mut history = StatusHistory::load()?;

    if clear {
        history.clear();
        history.save()?;
        print_success("History cleared");
        return Ok(());
    }

    if history.is_empty() {
        return Err(StatusError::not_configured("No status history recorded"));
    }

    print_section_header("History");
    print_numbered(history.entries.iter().map(|entry| {
        format!(
            "{}  {}",
            entry.status,
            entry.recorded_at.format("%Y-%m-%d %H:%M")
        )
    }));
    Ok(())
}
