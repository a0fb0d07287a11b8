use std::{path::PathBuf, process};

mod render;
mod terminal;

use anyhow::Context;
use clap::ArgAction;
use render::OutputFormat;
use startmenu::{ColorChoice, Config, Document, Manifest};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The manifest to print (defaults to the bundled demo manifest)
    manifest: Option<PathBuf>,

    /// Path to a TOML settings file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// When to colour output (overrides the settings file)
    #[arg(long, value_enum, value_name = "WHEN")]
    color: Option<ColorChoice>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = self.load_config()?;
        terminal::set_color_choice(self.color.unwrap_or(config.color));

        let document = self.load_document(&config)?;

        let Some(version) = Manifest::read_version(&document)? else {
            eprintln!("error: manifest has no 'version' field");
            process::exit(1);
        };

        let manifest = Manifest::with_version(&document, version)?;
        render::print(&manifest, self.output)
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        self.config.as_ref().map_or_else(
            || Ok(Config::default()),
            |path| {
                Config::load(path)
                    .with_context(|| format!("failed to load settings from {}", path.display()))
            },
        )
    }

    #[instrument(level = "debug", skip(self, config))]
    fn load_document(&self, config: &Config) -> anyhow::Result<Document> {
        let path = self
            .manifest
            .as_deref()
            .or_else(|| config.manifest());

        if let Some(path) = path {
            tracing::info!("Loading manifest from {}", path.display());
            Document::open(path)
                .with_context(|| format!("failed to load manifest {}", path.display()))
        } else {
            tracing::info!("No manifest given, using the bundled demo");
            Ok(Manifest::demo_document()?)
        }
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
