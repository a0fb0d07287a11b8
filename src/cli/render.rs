//! Console rendering of a manifest.

use std::io::{self, Write};

use startmenu::{Manifest, MenuItem, StartCommand};

use super::terminal::{Colorize, is_narrow};

/// How the manifest is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Coloured, human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Prints the manifest to stdout.
pub fn print(manifest: &Manifest, format: OutputFormat) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => write_text(&mut stdout, manifest, is_narrow())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, manifest)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

/// Writes the manifest as text.
///
/// A narrow layout puts each command path on its own line.
pub fn write_text<W: Write>(out: &mut W, manifest: &Manifest, narrow: bool) -> io::Result<()> {
    writeln!(out, "{} {}", "Version".strong(), manifest.version().info())?;

    writeln!(out)?;
    writeln!(out, "{}", "Menu".strong())?;
    if manifest.menu().is_empty() {
        writeln!(out, "  {}", "(empty)".dim())?;
    }
    for item in manifest.menu() {
        out.write_all(menu_line(item).as_bytes())?;
    }

    writeln!(out)?;
    writeln!(out, "{}", "Start commands".strong())?;
    if manifest.start_commands().is_empty() {
        writeln!(out, "  {}", "(none)".dim())?;
    }
    let width = manifest
        .start_commands()
        .iter()
        .map(|command| command.name().len())
        .max()
        .unwrap_or(0);
    for command in manifest.start_commands() {
        out.write_all(command_line(command, width, narrow).as_bytes())?;
    }

    Ok(())
}

fn menu_line(item: &MenuItem) -> String {
    format!(
        "  [{}] {}\n",
        item.selector().to_string().info(),
        item.label()
    )
}

fn command_line(command: &StartCommand, width: usize, narrow: bool) -> String {
    let except = command
        .except()
        .map(|except| format!("  (except {})", except.warning()))
        .unwrap_or_default();

    if narrow {
        format!(
            "  {}\n    {}{except}\n",
            command.name().success(),
            command.path().dim()
        )
    } else {
        let name = format!("{:<width$}", command.name());
        format!("  {}  {}{except}\n", name.success(), command.path().dim())
    }
}
