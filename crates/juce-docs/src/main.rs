use crate::prelude::*;
use clap::Parser;

mod docs;
mod error;
mod mcp;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse the JUCE class reference from the terminal or over MCP"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the JUCE class reference
    #[clap(
        long,
        env = "JUCE_DOCS_BASE_URL",
        global = true,
        default_value = juce_docs_core::catalog::DEFAULT_BASE_URL
    )]
    base_url: String,

    /// HTTP request timeout in seconds
    #[clap(long, env = "JUCE_DOCS_TIMEOUT", global = true, default_value = "30")]
    timeout: u64,

    /// Whether to display additional information.
    #[clap(long, env = "JUCE_DOCS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// JUCE class reference lookups
    Docs(crate::docs::App),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Docs(sub_app) => crate::docs::run(sub_app, app.global).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
}
