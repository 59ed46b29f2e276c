//! The `folio` application: logging setup and command dispatch.

use std::path::Path;
use std::sync::Arc;

use folio_api::AppState;
use folio_core::util::files::read_file;
use folio_core::{Error, Result};
use folio_search::SearchEngine;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command};
use crate::config::FolioConfig;
use crate::{commands, config_handlers};

/// CLI application bound to a loaded configuration.
pub struct FolioCli {
    name: String,
    config: Arc<FolioConfig>,
    version: String,
}

impl FolioCli {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = FolioConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }

    pub fn new(name: impl Into<String>, config: FolioConfig) -> Self {
        Self {
            name: name.into(),
            config: Arc::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// `RUST_LOG` wins when set; otherwise the verbosity flags pick the level.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // A subscriber may already be installed (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        let Some(command) = args.command else {
            println!("{} {}, use --help for usage", self.name, self.version);
            return Ok(());
        };

        if let Some(output) = self.execute(command, args.config.as_deref()).await? {
            println!("{}", output.trim_end());
        }
        Ok(())
    }

    /// Execute one command, returning the text to print.
    async fn execute(&self, command: Command, config_path: Option<&str>) -> Result<Option<String>> {
        let config = &self.config;
        let output = match command {
            Command::Serve { port } => {
                self.serve(port).await?;
                return Ok(None);
            }
            Command::List {
                collection,
                featured,
            } => commands::list(&config.repository(), collection, featured).await,
            Command::Show { collection, slug } => {
                commands::show(&config.repository(), collection, &slug).await?
            }
            Command::Search { query, limit } => {
                let engine = SearchEngine::new(config.search.clone());
                commands::search(&config.repository(), &engine, &query, limit).await
            }
            Command::Related { collection, slug } => {
                commands::related_items(&config.repository(), collection, &slug).await?
            }
            Command::Meta { collection, slug } => {
                commands::meta(&config.repository(), &config.site, collection, &slug).await?
            }
            Command::Sitemap { output } => {
                let xml = commands::sitemap(&config.repository(), &config.site).await;
                match output {
                    Some(path) => {
                        tokio::fs::write(&path, xml)
                            .await
                            .map_err(|e| Error::io_with_path(e, &path))?;
                        tracing::info!("Wrote sitemap to {path}");
                        return Ok(None);
                    }
                    None => xml,
                }
            }
            Command::ReadingTime { file, wpm } => {
                let raw = read_file(Path::new(&file)).await?;
                commands::reading_time(&raw, wpm.unwrap_or(config.content.words_per_minute))
            }
            Command::Version => format!("{} {}", self.name, self.version),
            Command::Config(config_cmd) => {
                config_handlers::handle_config_command(config_path, config_cmd.command)?;
                return Ok(None);
            }
        };
        Ok(Some(output))
    }

    async fn serve(&self, port: Option<u16>) -> Result<()> {
        let mut server = self.config.server.clone();
        if let Some(port) = port {
            server = server.with_port(port);
        }

        tracing::info!(
            "Serving content from {} as {}",
            self.config.content.root,
            self.config.site.url
        );
        let state = AppState::new(
            self.config.repository(),
            self.config.search.clone(),
            self.config.site.clone(),
        );
        folio_api::serve(state, &server).await
    }
}

// ============================================================================
// Tests
// ============================================================================
