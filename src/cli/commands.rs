use std::fs;
use std::io;

use serde::{Deserialize, Serialize};

use crate::cli::args::{Cli, Commands, KeyCommands};
use crate::outline::client::OutlineClient;
use crate::outline::keys::{AccessKeyList, CreateAccessKeyParams, UpdateAccessKeyParams};
use crate::utils::errors::{OutlineError, Result};
use crate::utils::output::OutputFormat;
use crate::utils::paths::OutlineCliPaths;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Optional settings read from ~/.config/outline-rs/config.yaml.
///
/// Command-line flags and environment variables take precedence over
/// everything in here.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CliConfig {
    pub api_url: Option<String>,
    pub cert_file: Option<String>,
    pub timeout: Option<u64>,
}

impl CliConfig {
    /// Load the config file if it exists; a missing file is an empty config.
    pub fn load() -> Result<Self> {
        let path = OutlineCliPaths::config_file()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

pub fn handle_command(cli: Cli) -> Result<()> {
    // Initialize logging - always to stderr
    if !cli.quiet {
        let log_level = match cli.verbose {
            0 => "outline_rs=warn",  // Default: warnings only
            1 => "outline_rs=info",  // -v: info level
            2 => "outline_rs=debug", // -vv: debug level
            _ => "outline_rs=trace", // -vvv+: trace level
        };

        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(log_level)
            .init();
    }

    let output = OutputFormat::new(cli.raw);
    let config = CliConfig::load()?;
    let client = build_client(&cli, &config)?;

    match cli.command {
        Commands::Keys { command } => handle_key_command(command, &client, &output),
    }
}

fn build_client(cli: &Cli, config: &CliConfig) -> Result<OutlineClient> {
    let api_url = cli
        .api_url
        .clone()
        .or_else(|| config.api_url.clone())
        .ok_or_else(|| {
            OutlineError::Config(
                "No API URL given. Use --api-url, OUTLINE_API_URL, or the config file".to_string(),
            )
        })?;

    let timeout = cli
        .timeout
        .or(config.timeout)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let cert_file = cli.cert_file.clone().or_else(|| config.cert_file.clone());

    if cli.insecure {
        if cert_file.is_some() {
            tracing::warn!("Certificate pinning is ignored while --insecure is set");
        }
        tracing::warn!("TLS certificate verification is disabled");
        return OutlineClient::insecure(&api_url, timeout);
    }

    let cert = match &cert_file {
        Some(path) => Some(fs::read_to_string(path)?),
        None => None,
    };

    OutlineClient::new(&api_url, cert.as_deref(), timeout)
}

fn handle_key_command(
    command: KeyCommands,
    client: &OutlineClient,
    output: &OutputFormat,
) -> Result<()> {
    match command {
        KeyCommands::List => {
            let json = client.get_access_keys()?;
            print_key_table(&json, output)
        }
        KeyCommands::Get { id } => {
            let json = client.get_access_key(&id)?;
            output.print_json(&json)
        }
        KeyCommands::Create {
            name,
            password,
            method,
            data_limit,
        } => {
            let params = CreateAccessKeyParams {
                name,
                password,
                method,
                data_limit_bytes: data_limit,
            };
            let json = client.create_access_key(&params)?;
            output.print_json(&json)
        }
        KeyCommands::Update {
            id,
            name,
            password,
            method,
            data_limit,
        } => {
            let params = UpdateAccessKeyParams {
                name,
                password,
                method,
                data_limit_bytes: data_limit,
            };
            let json = client.update_access_key(id, &params)?;
            output.print_json(&json)
        }
        KeyCommands::Delete { id } => {
            client.delete_access_key(&id)?;
            println!("Deleted access key {id}");
            Ok(())
        }
    }
}

fn print_key_table(json: &str, output: &OutputFormat) -> Result<()> {
    let list: AccessKeyList = serde_json::from_str(json)?;

    let mut data = vec![vec![
        "ID".to_string(),
        "NAME".to_string(),
        "METHOD".to_string(),
        "DATA LIMIT".to_string(),
    ]];
    for key in &list.access_keys {
        data.push(vec![
            key.id.clone(),
            key.name.clone(),
            key.method.clone().unwrap_or_default(),
            key.data_limit
                .map(|limit| limit.bytes.to_string())
                .unwrap_or_default(),
        ]);
    }

    output.print_table(&data);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_yaml_round_trips() {
        let yaml = "api_url: https://server.example.com:8081/SecretPath\ntimeout: 15\n";
        let config: CliConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.api_url.as_deref(),
            Some("https://server.example.com:8081/SecretPath")
        );
        assert!(config.cert_file.is_none());
        assert_eq!(config.timeout, Some(15));
    }

    #[test]
    fn insecure_takes_precedence_over_certificate_pinning() {
        use clap::Parser;

        // The pinned cert is not read (or required to exist) once
        // verification is disabled; the combination warns instead of
        // silently pretending to pin.
        let cli = Cli::parse_from([
            "outline-rs",
            "--api-url",
            "https://server.example.com:8081/SecretPath",
            "--insecure",
            "--cert-file",
            "/nonexistent/cert.pem",
            "keys",
            "list",
        ]);
        let client = build_client(&cli, &CliConfig::default()).unwrap();
        assert_eq!(
            client.api_url().as_str(),
            "https://server.example.com:8081/SecretPath"
        );
    }

    #[test]
    fn empty_config_is_all_none() {
        let config: CliConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.api_url.is_none());
        assert!(config.cert_file.is_none());
        assert!(config.timeout.is_none());
    }
}
