use crate::core::{
    config::StatusConfig,
    error::{Result, StatusError},
    output::{print_numbered, print_section_header, print_success},
    splitter::split_template_string,
    status::{Availability, Template},
};

pub fn execute_templates_list() -> Result<()> {
    let config = StatusConfig::load()?;
    if config.status_message_templates.is_empty() {
        return Err(StatusError::not_configured(
            "No status message templates configured",
        ));
    }

    print_section_header("Templates");
    print_numbered(
        config
            .status_message_templates
            .iter()
            .map(|t| format!("{}  [{}] {}", t.label, t.availability, t.message)),
    );
    Ok(())
}

pub fn execute_templates_add(
    label: String,
    message: String,
    availability: Availability,
) -> Result<()> {
    // Reject templates that would fail on every use
    split_template_string(&message)?;

    let mut config = StatusConfig::load()?;
    config.status_message_templates.push(Template {
        label,
        message,
        availability,
    });
    config.save()?;

    print_success(&format!(
        "Template {} added",
        config.status_message_templates.len()
    ));
    Ok(())
}

pub fn execute_templates_remove(index: usize) -> Result<()> {
    let mut config = StatusConfig::load()?;
    let removed = config.remove_template(index)?;
    config.save()?;

    print_success(&format!("Template \"{}\" removed", removed.label));
    Ok(())
}
