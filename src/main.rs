use anyhow::Result;
use clap::{Parser, Subcommand};
use resource_impact::app::dto::{PolicyKind, RenderFormat, SceneRequest};
use resource_impact::app::engine::ImpactEngine;
use resource_impact::cli;
use resource_impact::server::{http, mcp::ImpactMcpServer};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "impactool",
    version,
    about = "Resource impact analysis: what else is affected if a resource changes?"
)]
struct Cli {
    /// CSV file with resource_id_from,resource_id_to,integration_type,metadata columns
    csv: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print resource and integration counts, then every integration
    Summary,
    /// Compute the resources impacted by a change
    Impact {
        resource: String,
        #[arg(long, value_enum, default_value_t = PolicyKind::Transitive)]
        policy: PolicyKind,
    },
    /// Show direct upstream and downstream resources
    Neighbors { resource: String },
    /// Render the graph, or the impacted subgraph, as JSON or Graphviz DOT
    Render {
        /// Altered resource; nodes are annotated with their impact role
        #[arg(long)]
        resource: Option<String>,
        #[arg(long, value_enum, default_value_t = PolicyKind::Transitive)]
        policy: PolicyKind,
        /// Only render the impacted resources (requires --resource)
        #[arg(long, requires = "resource")]
        subgraph: bool,
        #[arg(long, value_enum, default_value_t = RenderFormat::Json)]
        format: RenderFormat,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Serve MCP tools over stdio
    Mcp,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr: stdout carries rendered output and the MCP transport.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("resource_impact=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Cli::parse();
    let engine = ImpactEngine::load_from_csv(&args.csv)?;

    match args.command {
        Command::Summary => cli::display_summary(&engine)?,
        Command::Impact { resource, policy } => cli::display_impact(&engine, &resource, policy)?,
        Command::Neighbors { resource } => cli::display_neighbors(&engine, &resource)?,
        Command::Render {
            resource,
            policy,
            subgraph,
            format,
            output,
        } => {
            let req = SceneRequest {
                resource,
                policy,
                subgraph,
            };
            cli::render_scene(&engine, req, format, output.as_deref())?;
        }
        Command::Serve { host, port } => {
            http::serve(engine, SocketAddr::new(host, port)).await?;
        }
        Command::Mcp => ImpactMcpServer::new(engine).serve_stdio().await?,
    }

    Ok(())
}
