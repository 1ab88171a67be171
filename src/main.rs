use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use usercard::{ProfileClient, ProfileSession, ServiceConfig, UserId};

#[derive(Parser, Debug)]
#[command(
    name = "usercard",
    version,
    about = "Fetch a user profile and show it as a terminal card"
)]
struct Cli {
    /// User id to load at startup.
    #[arg(default_value_t = 1)]
    id: u64,

    /// Profile service base URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Overall request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Connect timeout in seconds.
    #[arg(long)]
    connect_timeout_secs: Option<u64>,

    /// Print the profile to stdout instead of opening the card screen.
    #[arg(long)]
    headless: bool,

    /// Write logs to this file. Falls back to the USERCARD_LOG env var;
    /// with neither, the card screen runs with logging off.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn service_config(&self) -> ServiceConfig {
        let mut config = ServiceConfig::default();
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            config.timeout_secs = timeout;
        }
        if let Some(timeout) = self.connect_timeout_secs {
            config.connect_timeout_secs = timeout;
        }
        config
    }
}

/// Initialize tracing with optional file output.
///
/// The card screen owns the terminal, so logs only ever go to a file
/// there; without one, logging stays off entirely. Headless runs fall
/// back to stderr instead.
fn init_tracing(log_file: Option<&PathBuf>, headless: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let log_file = log_file
        .cloned()
        .or_else(|| std::env::var("USERCARD_LOG").ok().map(PathBuf::from));

    match log_file {
        Some(path) => {
            let Ok(file) = std::fs::File::create(&path) else {
                eprintln!("Warning: Failed to create log file: {}", path.display());
                return;
            };
            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_level(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .init();
        }
        None if headless => {
            let stderr_layer = fmt::layer().with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
        }
        None => {}
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref(), cli.headless);

    let config = cli.service_config();
    config
        .validate()
        .context("invalid service configuration")?;
    let id = UserId::new(cli.id);

    if cli.headless {
        run_headless(config, id).await
    } else {
        let session = ProfileSession::new(config);
        usercard::ui::runtime::run(session, id).await?;
        Ok(())
    }
}

/// Fetch one profile and print it, without the card screen.
async fn run_headless(config: ServiceConfig, id: UserId) -> anyhow::Result<()> {
    let client = ProfileClient::new(config);
    let user = client.fetch_user(id).await?;
    println!("{}", user.name);

    match client.fetch_icon(&user.icon_url).await {
        Ok(icon) => println!("icon: {}x{} px", icon.width(), icon.height()),
        Err(error) => {
            tracing::warn!(url = %user.icon_url, error = %error, "Icon unavailable");
        }
    }
    Ok(())
}
