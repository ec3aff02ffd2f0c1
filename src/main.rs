//! curricula: MCP server for Kuali curriculum course data.
//!
//! Usage:
//!   curricula --mcp                      # Start MCP server on stdin/stdout
//!   curricula search --title dynamics    # CLI search mode
//!   curricula details LE/MECH2100        # Single course lookup
//!   curricula stats                      # Catalog statistics
//!
//! Requires KUALI_TOKEN in the environment.

use clap::{Parser, Subcommand};
use curricula::server::CurriculaServer;
use curricula::services::CourseCatalog;
use curricula::tools;
use curricula::Config;
use rmcp::ServiceExt;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "curricula")]
#[command(about = "MCP server for Kuali curriculum course search and analysis")]
#[command(version)]
struct Cli {
    /// Run as MCP server (stdin/stdout JSON-RPC)
    #[arg(long)]
    mcp: bool,

    /// Override the upstream search endpoint URL
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search courses with optional filters
    Search {
        /// Subject code (e.g. "LE/MECH" or "MECH")
        #[arg(long)]
        subject_code: Option<String>,

        /// Substring to match in titles
        #[arg(long)]
        title: Option<String>,

        /// Substring to match in descriptions
        #[arg(long)]
        description: Option<String>,

        /// Course status (default: active)
        #[arg(long)]
        status: Option<String>,

        /// Only courses that do (or do not) have prerequisites
        #[arg(long)]
        has_prerequisites: Option<bool>,

        /// Only courses that do (or do not) have learning outcomes
        #[arg(long)]
        has_outcomes: Option<bool>,
    },

    /// Get the full record for a course code
    Details {
        /// Exact course code
        code: String,
    },

    /// Analyze field completeness for a course
    Completeness {
        /// Exact course code
        code: String,
    },

    /// Compare two courses side by side
    Compare {
        /// First course code
        code1: String,
        /// Second course code
        code2: String,
    },

    /// Get catalog-wide statistics
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // CRITICAL: Log to stderr only (stdout is JSON-RPC for MCP)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("curricula=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    let config = Arc::new(config);

    if cli.mcp {
        run_mcp_server(config).await
    } else if let Some(cmd) = cli.command {
        run_cli(config, cmd).await
    } else {
        eprintln!("Use --mcp to start the MCP server, or a subcommand for CLI mode.");
        eprintln!("Run with --help for more information.");
        std::process::exit(1);
    }
}

async fn run_mcp_server(config: Arc<Config>) -> anyhow::Result<()> {
    tracing::info!(base_url = %config.base_url, "Starting MCP server");

    let server = CurriculaServer::new(config)?;

    // Run the MCP server on stdin/stdout
    let service = server.serve(rmcp::transport::io::stdio()).await?;
    service.waiting().await?;

    Ok(())
}

async fn run_cli(config: Arc<Config>, cmd: Commands) -> anyhow::Result<()> {
    let catalog = CourseCatalog::new(config)?;

    match cmd {
        Commands::Search {
            subject_code,
            title,
            description,
            status,
            has_prerequisites,
            has_outcomes,
        } => {
            let input = tools::SearchInput {
                subject_code,
                title,
                description,
                status,
                has_prerequisites,
                has_outcomes,
            };
            let result = tools::execute_search(&catalog, input).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Details { code } => {
            let input = tools::DetailsInput { course_code: code };
            let result = tools::execute_details(&catalog, input).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Completeness { code } => {
            let input = tools::CompletenessInput { course_code: code };
            let result = tools::execute_completeness(&catalog, input).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Compare { code1, code2 } => {
            let input = tools::CompareInput {
                course_code1: code1,
                course_code2: code2,
            };
            let result = tools::execute_compare(&catalog, input).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Stats => {
            let result = tools::execute_stats(&catalog, tools::StatsInput::default()).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
