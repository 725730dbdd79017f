use crate::core::{
    config::StatusConfig,
    environment::{ProcessDirectory, SystemClock, WorkingDirectory},
    error::Result,
    git::discover_version_control,
    render::Renderer,
};

/// Render `template` against the process working directory, its git repository and the
/// system clock
pub fn render_in_current_environment(config: &StatusConfig, template: &str) -> Result<String> {
    let directory = ProcessDirectory;
    let version_control =
        discover_version_control(&directory.current_dir()?, config.git_integration);
    let renderer = Renderer::new(&directory, &*version_control, &SystemClock);

    renderer.render_template_string(template)
}

pub fn execute_render(template: &str) -> Result<()> {
    let config = StatusConfig::load()?;
    let text = render_in_current_environment(&config, template)?;
    println!("{text}");
    Ok(())
}
