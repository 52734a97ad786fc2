//! kanban-md - prints kanban board documents for markdown notes.
//!
//! Builds the sample board and writes it to stdout as JSON, optionally
//! wrapped in ```` ```kanban ```` fences ready to paste into a note.

use anyhow::Context;
use kanban_md_config::{Config, OutputConfig, OutputFormat};
use kanban_md_protocol::sample::{sample_board, simple_tasks};
use kanban_md_protocol::{BoardDocument, KanbanJson, Task};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays pasteable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().context("failed to load configuration")?;
    debug!(?config, "configuration loaded");

    let output = render(&config.output, &sample_board(), &simple_tasks())?;
    println!("{output}");
    Ok(())
}

/// Renders the requested formats, in configured order, separated by a
/// heading line.
fn render(config: &OutputConfig, board: &BoardDocument, tasks: &[Task]) -> anyhow::Result<String> {
    let mut sections = Vec::with_capacity(config.formats.len());

    for (i, format) in config.formats.iter().enumerate() {
        let text = match format {
            OutputFormat::Board => encode(board, config),
            OutputFormat::Simple => encode(tasks, config),
        }
        .with_context(|| format!("failed to encode {} format", format.label()))?;

        if i == 0 {
            sections.push(text);
        } else {
            sections.push(format!("\n{}\n{text}", heading(*format)));
        }
    }

    Ok(sections.join("\n"))
}

fn encode<T: KanbanJson + ?Sized>(
    value: &T,
    config: &OutputConfig,
) -> kanban_md_protocol::Result<String> {
    if config.fence {
        value.to_kanban_block(config.indent)
    } else {
        value.to_json_text(config.indent)
    }
}

const fn heading(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Board => "--- Board format ---",
        OutputFormat::Simple => "--- Simple format (array only) ---",
    }
}
