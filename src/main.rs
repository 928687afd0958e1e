// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Allow println! in main.rs for CLI user-facing output (validate command)
#![allow(clippy::print_stdout)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use compendium_server::config::env_interpolation::referenced_variables;
use compendium_server::{
    load_config_file, save_config_file, CompendiumServer, CompendiumServerConfig,
};

#[derive(Parser)]
#[command(name = "compendium-server")]
#[command(about = "Drug interaction and BioC annotation service over the Documedis compendium")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nrustc: ",
    env!("COMPENDIUM_RUSTC_VERSION"),
    "\nhttp client: reqwest ",
    env!("COMPENDIUM_HTTP_CLIENT_VERSION"),
))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the configuration file
    #[arg(short, long, default_value = "config/server.yaml", global = true)]
    config: PathBuf,

    /// Override the server port
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server (default if no subcommand specified)
    Run {
        /// Path to the configuration file
        #[arg(short, long, default_value = "config/server.yaml")]
        config: PathBuf,

        /// Override the server port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate a configuration file without starting the server
    Validate {
        /// Path to the configuration file to validate
        #[arg(short, long, default_value = "config/server.yaml")]
        config: PathBuf,

        /// Show resolved configuration with environment variables expanded
        #[arg(long)]
        show_resolved: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { config, port }) => run_server(config, port).await,
        Some(Commands::Validate {
            config,
            show_resolved,
        }) => validate_config(config, show_resolved),
        None => run_server(cli.config, cli.port).await,
    }
}

/// Install the log subscriber. RUST_LOG wins over the configured level.
fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_lowercase()));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }
}

/// Load `.env` next to the config file, if present
fn load_env_file(config_path: &Path) -> bool {
    let Some(config_dir) = config_path.parent() else {
        return false;
    };
    let env_file = config_dir.join(".env");
    if !env_file.exists() {
        return false;
    }
    match dotenvy::from_path(&env_file) {
        Ok(_) => true,
        Err(e) => {
            eprintln!("Warning: Failed to load .env file: {e}");
            false
        }
    }
}

/// Run the Compendium Server
async fn run_server(config_path: PathBuf, port_override: Option<u16>) -> Result<()> {
    let env_file_loaded = load_env_file(&config_path);

    // Check if config file exists, create default if it doesn't
    let config = if !config_path.exists() {
        init_logging("info");

        warn!(
            "Config file '{}' not found. Creating default configuration.",
            config_path.display()
        );

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut default_config = CompendiumServerConfig::default();
        if let Some(port) = port_override {
            default_config.port = port;
            info!("Using command line port {port} in default configuration");
        }

        save_config_file(&default_config, &config_path)?;

        info!(
            "Default configuration created at: {}",
            config_path.display()
        );
        info!("Edit the configuration file to point at a term list under matcher.termsPath.");

        default_config
    } else {
        let config = load_config_file(&config_path)?;
        init_logging(&config.log_level);
        config
    };

    info!("Starting Compendium Server");
    debug!("Debug logging is enabled");

    if env_file_loaded {
        info!("Loaded environment variables from .env file");
    }

    info!("Config file: {}", config_path.display());

    let final_port = port_override.unwrap_or(config.port);
    info!("Port: {final_port}");
    debug!("Server configuration: {config:?}");

    let server = CompendiumServer::from_config(&config, final_port)?;
    server.run().await?;

    Ok(())
}

/// Validate a configuration file
fn validate_config(config_path: PathBuf, show_resolved: bool) -> Result<()> {
    println!("Validating configuration: {}", config_path.display());
    println!();

    if !config_path.exists() {
        println!(
            "[ERROR] Configuration file not found: {}",
            config_path.display()
        );
        std::process::exit(1);
    }

    load_env_file(&config_path);

    match load_config_file(&config_path) {
        Ok(config) => {
            println!("[OK] Configuration file is valid");
            println!();

            println!("Summary:");
            println!("  Upstream: {}", config.upstream.base_url);
            println!("  Default language: {}", config.upstream.default_language);
            match &config.matcher.terms_path {
                Some(path) => println!("  Terms: {}", path.display()),
                None => println!("  Terms: (none, annotations disabled)"),
            }

            if show_resolved {
                println!();
                println!("Resolved server settings:");
                println!("  Host: {}", config.host);
                println!("  Port: {}", config.port);
                println!("  Log Level: {}", config.log_level);
                println!("  IdType: {}", config.upstream.id_type);

                let raw = fs::read_to_string(&config_path)?;
                let variables = referenced_variables(&raw);
                if !variables.is_empty() {
                    println!();
                    println!("Environment variables referenced:");
                    for name in variables {
                        let state = if std::env::var(&name).is_ok() {
                            "set"
                        } else {
                            "default"
                        };
                        println!("  {name} ({state})");
                    }
                }
            }

            Ok(())
        }
        Err(e) => {
            println!("[ERROR] Configuration is invalid:");
            println!("  {e}");
            std::process::exit(1);
        }
    }
}
