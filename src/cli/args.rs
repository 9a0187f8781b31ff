use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "outline-rs")]
#[command(version = "1.0.0")]
#[command(about = "A management CLI for the Outline VPN server access-key API")]
#[command(long_about = None)]
pub struct Cli {
    /// Outline management API URL (e.g. https://1.2.3.4:8081/SecretPath)
    #[arg(long, env = "OUTLINE_API_URL")]
    pub api_url: Option<String>,

    /// Path to the server's TLS certificate (PEM) used as the pinned trust anchor
    #[arg(long, env = "OUTLINE_CERT_FILE")]
    pub cert_file: Option<String>,

    /// Skip TLS certificate verification (legacy client behavior; avoid)
    #[arg(long)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Enable verbose logging (repeat for more verbosity: -v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output raw values (tab-separated tables, unformatted JSON)
    #[arg(short, long)]
    pub raw: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Access-key management
    Keys {
        #[command(subcommand)]
        command: KeyCommands,
    },
}

#[derive(Subcommand)]
pub enum KeyCommands {
    /// List all access keys
    List,
    /// Show one access key
    Get {
        /// Access-key identifier
        id: String,
    },
    /// Create a new access key
    Create {
        /// Key display name
        #[arg(long)]
        name: Option<String>,
        /// Key password/secret
        #[arg(long)]
        password: Option<String>,
        /// Cipher/auth method (e.g. aes-256-gcm)
        #[arg(long)]
        method: Option<String>,
        /// Data-transfer limit in bytes
        #[arg(long)]
        data_limit: Option<u64>,
    },
    /// Update an existing access key (only the given fields change)
    Update {
        /// Access-key identifier
        id: u64,
        /// Key display name
        #[arg(long)]
        name: Option<String>,
        /// Key password/secret
        #[arg(long)]
        password: Option<String>,
        /// Cipher/auth method (e.g. aes-256-gcm)
        #[arg(long)]
        method: Option<String>,
        /// Data-transfer limit in bytes
        #[arg(long)]
        data_limit: Option<u64>,
    },
    /// Delete an access key
    Delete {
        /// Access-key identifier
        id: String,
    },
}
