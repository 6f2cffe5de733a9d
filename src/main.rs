//! Corechain network registry command line.
//!
//! Prints the registry's read-only data as JSON and verifies a node against the
//! configured network.
//!
//! # Commands
//! - `networks`: identifiers of every supported network
//! - `options`: network options advertised to API clients
//! - `describe <NAME>`: the full descriptor of one network
//! - `workflow <NAME>`: literals the scenario runner needs for one network
//! - `verify`: reads the configuration from the environment and checks the node

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use corechain_registry::{
	bootstrap::{initialize, load_configuration},
	registry::{NetworkRegistry, NetworkRegistryTrait},
	utils::logging::{error::TraceableError, parse_level, setup_logging, LogMode, LoggingConfig},
};

#[derive(Parser)]
#[command(
	name = "corechain-registry",
	about = "Network registry and node validation for Corechain networks.",
	version
)]
struct Cli {
	/// Write logs to file instead of stdout
	#[arg(long)]
	log_file: bool,

	/// Set log level (trace, debug, info, warn, error)
	#[arg(long, value_name = "LEVEL")]
	log_level: Option<String>,

	/// Path to store log files (default: logs/)
	#[arg(long, value_name = "PATH")]
	log_path: Option<String>,

	/// Maximum log file size in bytes before rolling
	#[arg(long, value_name = "BYTES")]
	log_max_size: Option<u64>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// List the supported networks
	Networks,
	/// Print the network options
	Options,
	/// Print the descriptor of a network
	Describe {
		/// Network name, e.g. Buffalo
		name: String,
	},
	/// Print the scenario runner defaults of a network
	Workflow {
		/// Network name, e.g. Buffalo
		name: String,
	},
	/// Verify the configured node against the configured network
	Verify,
}

impl Cli {
	/// Environment settings overridden by the command line flags
	fn logging_config(&self) -> LoggingConfig {
		self.override_logging(LoggingConfig::from_env())
	}

	fn override_logging(&self, mut config: LoggingConfig) -> LoggingConfig {
		if self.log_file {
			config.mode = LogMode::File;
		}
		if let Some(level) = &self.log_level {
			config.level = parse_level(level);
		}
		if let Some(path) = &self.log_path {
			config.data_dir = path.clone();
		}
		if let Some(max_size) = self.log_max_size {
			config.max_size = max_size;
		}

		config
	}
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
	serde_json::to_string_pretty(value).context("failed to serialize output")
}

/// Renders the commands answered from the registry alone; `None` for `verify`.
fn render(registry: &NetworkRegistry, command: &Command) -> anyhow::Result<Option<String>> {
	let output = match command {
		Command::Networks => to_json(&registry.network_identifiers())?,
		Command::Options => to_json(&registry.network_options())?,
		Command::Describe { name } => to_json(&registry.descriptor_for(name)?)?,
		Command::Workflow { name } => to_json(&registry.workflow_defaults(name)?)?,
		Command::Verify => return Ok(None),
	};
	Ok(Some(output))
}

async fn verify(registry: Arc<NetworkRegistry>) -> anyhow::Result<String> {
	let configuration = load_configuration(&*registry)?;
	let network = configuration.network.name;

	let context = match initialize(registry, configuration).await {
		Ok(context) => context,
		Err(e) => {
			error!(trace_id = %e.trace_id(), fatal = e.is_fatal(), "startup failed: {}", e);
			return Err(e.into());
		}
	};

	match context.node {
		Some(node) => to_json(&json!({
			"network": network,
			"genesis_block_identifier": node.genesis,
			"chain_id": node.chain_id,
		})),
		None => {
			info!("offline mode, node not verified");
			to_json(&json!({ "network": network, "mode": "OFFLINE" }))
		}
	}
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	dotenvy::dotenv().ok();
	let cli = Cli::parse();

	setup_logging(&cli.logging_config()).unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	let registry = Arc::new(NetworkRegistry::new());

	let output = match render(&registry, &cli.command)? {
		Some(output) => output,
		None => verify(registry).await?,
	};
	println!("{}", output);
	Ok(())
}
