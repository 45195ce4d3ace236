use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "netinv")]
#[command(about = "Client for the netinv inventory web service")]
pub struct CliArgs {
    /// Path to a TOML configuration file; flags below override it.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
