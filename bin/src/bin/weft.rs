use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use weft_bin::{cli::Cli, config::Config, render};
use weft_display_map::{BufferSnapshot, DisplayMap};
use weft_log::LogConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = match weft_log::init(LogConfig {
        log_file_path: cli.log_file.clone(),
    }) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: failed to initialize logging: {e}");
            None
        }
    };

    let config = Config::from_cli(&cli)?;
    let text = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;

    let mut display_map = DisplayMap::new(BufferSnapshot::from_text(text), config.wrap)
        .context("Failed to build display map")?;

    let decorations = cli
        .decorations
        .iter()
        .map(|arg| (arg.range, arg.options.clone()));
    let ids = display_map.delta_decorations(&[], decorations);
    info!(
        file = %cli.file.display(),
        view_lines = display_map.view_line_count(),
        decorations = ids.len(),
        "Laid out file"
    );

    let viewport = render::viewport(&display_map, cli.from, cli.to);
    if cli.to.is_some_and(|to| to < cli.from) {
        warn!(from = cli.from, to = ?cli.to, "Empty line range, showing one line");
    }

    let output = render::render(&display_map, viewport).context("Failed to render viewport")?;
    print!("{output}");
    Ok(())
}
