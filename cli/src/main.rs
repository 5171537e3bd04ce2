//! # frederick CLI
//!
//! Command-line interface for Frederick - a tool-calling chat agent for
//! Azure OpenAI.
//!
//! ## Usage
//!
//! - `frederick chat "question"` - One-shot conversation with the weather skill
//! - `frederick pair "Gewürztraminer"` - Wine pairing prompt function
//! - `frederick serve` - Run the HTTP chat endpoint
//! - `frederick tools` - Show available tools
//!
//! Connection settings come from `AZURE_OPENAI_ENDPOINT`,
//! `AZURE_OPENAI_DEPLOYMENT` and `AZURE_OPENAI_API_KEY`; flags override.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;

use commands::{chat_command, pair_command, serve_command, tools_command};
use config::ConfigOverrides;

/// frederick - a tool-calling chat agent for Azure OpenAI
#[derive(Parser)]
#[command(name = "frederick")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A tool-calling chat agent for Azure OpenAI")]
#[command(long_about = None)]
struct Cli {
    /// Azure OpenAI endpoint URL override
    #[arg(long)]
    endpoint: Option<String>,

    /// Deployment (model) name override
    #[arg(long)]
    deployment: Option<String>,

    /// API key override
    #[arg(long)]
    api_key: Option<String>,

    /// API version override
    #[arg(long)]
    api_version: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one message and print the assistant's reply
    Chat {
        /// The message to send
        prompt: String,

        /// Custom system prompt
        #[arg(long)]
        system: Option<String>,
    },

    /// Suggest dishes for a wine (sommelier prompt function)
    Pair {
        /// Wine name or description
        wine: String,
    },

    /// Run the HTTP chat endpoint
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,

        /// Port to listen on
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },

    /// Show available tools
    Tools,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            endpoint: self.endpoint.clone(),
            deployment: self.deployment.clone(),
            api_key: self.api_key.clone(),
            api_version: self.api_version.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    frederick_core::init_tracing_with_debug(cli.verbose);

    match &cli.command {
        Commands::Chat { prompt, system } => {
            chat_command(cli.overrides(), prompt, system.as_deref()).await
        }
        Commands::Pair { wine } => pair_command(cli.overrides(), wine).await,
        Commands::Serve { bind, port } => serve_command(cli.overrides(), bind, *port).await,
        Commands::Tools => tools_command(),
    }
}
