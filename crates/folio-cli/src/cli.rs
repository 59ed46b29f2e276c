//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use folio_core::Collection;

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level arguments for the `folio` tool.
#[derive(Parser, Debug)]
#[command(name = "folio", author, about = "Markdown content pipeline for a portfolio site", long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "FOLIO_CONFIG", global = true)]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Commands understood by `folio`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server.
    Serve {
        /// Port to listen on (overrides `server.port`).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List the published items of a collection, newest first.
    List {
        /// Collection to list: `blog` or `project`.
        collection: Collection,

        /// Only the featured items shown on the home page.
        #[arg(long)]
        featured: bool,
    },

    /// Show one item with its derived metadata and body.
    Show {
        /// Collection the item belongs to.
        collection: Collection,

        /// Item slug.
        slug: String,
    },

    /// Search blog posts and projects.
    Search {
        /// Search query.
        query: String,

        /// Maximum number of results (defaults to `search.default_limit`).
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List items related to an item by shared labels.
    Related {
        /// Collection the item belongs to.
        collection: Collection,

        /// Item slug.
        slug: String,
    },

    /// Print meta tags and JSON-LD for an item.
    Meta {
        /// Collection the item belongs to.
        collection: Collection,

        /// Item slug.
        slug: String,
    },

    /// Render the sitemap.
    Sitemap {
        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Estimate the reading time of a markdown file.
    ReadingTime {
        /// Markdown file, with or without frontmatter.
        file: String,

        /// Reading speed in words per minute.
        #[arg(short, long)]
        wpm: Option<u32>,
    },

    /// Print version information.
    Version,

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "server.port").
        key: String,
    },

    /// Set a configuration value by dotted key.
    Set {
        /// Dotted key (e.g., "server.port").
        key: String,

        /// Value to set.
        value: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },

    /// Export configuration as environment variables.
    Export {
        /// Format as Docker --env flags.
        #[arg(long)]
        docker_env: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================
