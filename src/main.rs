use clap::Parser;
use netinv_client::config::{AuthConfig, ServiceConfig};
use netinv_client::utils::validation::{self, Validate};
use netinv_client::utils::logger;
use netinv_client::{CliArgs, ClientConfig, InventoryClient};
use std::time::Duration;
use url::Url;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting netinv client");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let mut config = match &args.config {
        Some(path) => ClientConfig::from_file(path)?,
        // Without a config file, the connection flags are mandatory.
        None => ClientConfig {
            service: ServiceConfig {
                endpoint: validation::validate_required_field("endpoint", &args.endpoint)?.clone(),
                timeout_seconds: Some(args.timeout_seconds),
            },
            auth: AuthConfig {
                username: validation::validate_required_field("username", &args.username)?.clone(),
                password: validation::validate_required_field("password", &args.password)?.clone(),
                session_type: None,
            },
        },
    };

    // Flags override file values.
    if let Some(endpoint) = args.endpoint {
        config.service.endpoint = endpoint;
    }
    if let Some(username) = args.username {
        config.auth.username = username;
    }
    if let Some(password) = args.password {
        config.auth.password = password;
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let endpoint = Url::parse(config.endpoint())?;
    let mut client =
        InventoryClient::new(endpoint, Duration::from_secs(config.timeout_seconds()))?;

    client
        .login(
            config.auth.username.clone(),
            config.auth.password.clone(),
            config.session_type(),
        )
        .await?;

    let classes = client.get_all_classes_light(false).await?;
    println!("Classes ({}):", classes.len());
    for class in &classes {
        println!("  {} [{}]", class.name, class.id);
    }

    let pools = client.get_root_pools("InventoryObject", 2, true).await?;
    println!("Root pools ({}):", pools.len());
    for pool in &pools {
        println!("  {} ({})", pool.name, pool.class_name);
    }

    let groups = client.get_synchronization_groups().await?;
    println!("Synchronization groups ({}):", groups.len());
    for group in &groups {
        let provider = group
            .provider
            .as_ref()
            .map(|p| p.display_name.as_str())
            .unwrap_or("no provider");
        println!("  {} [{}]", group.name, provider);
    }

    let jobs = client.get_current_jobs().await?;
    if !jobs.is_empty() {
        println!("Running jobs ({}):", jobs.len());
        for job in &jobs {
            let started = job
                .started_at()
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "not started".to_string());
            println!("  #{} {} {}% since {}", job.id, job.job_tag, job.progress, started);
        }
    }

    client.logout().await?;
    println!("✅ Done");

    Ok(())
}
