use crate::core::{error::Result, splitter::split_template_string};

/// Print the segments of `template` as JSON
pub fn execute_parse(template: &str) -> Result<()> {
    let segments = split_template_string(template)?;
    println!("{}", serde_json::to_string_pretty(&segments)?);
    Ok(())
}
