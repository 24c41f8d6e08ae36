use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use time::UtcOffset;

use slack_connect::api::ApiClient;
use slack_connect::config::{ClientConfig, ConfigOverrides};
use slack_connect::dispatch::Dispatcher;
use slack_connect::model::WorkspaceId;
use slack_connect::session::SessionContext;
use slack_connect::shell::Shell;

#[derive(Parser)]
#[command(name = "slack-connect")]
#[command(about = "Send and schedule Slack messages", long_about = None)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config)
    #[arg(long, global = true)]
    backend_url: Option<String>,

    /// Per-request timeout in seconds (overrides config)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Navigation URL carrying `?team_id=...` (as returned by the install flow)
    #[arg(long, conflicts_with = "team_id")]
    url: Option<String>,

    /// Workspace id, as a shorthand for `--url`
    #[arg(long)]
    team_id: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the URL that starts the workspace install flow
    InstallUrl,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Must be read before any other thread exists.
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);

    let cli = Cli::parse();
    let cfg = ClientConfig::load(
        cli.config.as_deref(),
        ConfigOverrides {
            backend_url: cli.backend_url.clone(),
            request_timeout_secs: cli.timeout_secs,
            log_file: cli.log_file.clone(),
        },
    )?;

    match cli.command {
        Some(Commands::InstallUrl) => {
            init_logging(&cfg, true)?;
            println!("{}", cfg.install_url());
            Ok(())
        }
        None => {
            init_logging(&cfg, false)?;
            run_interactive(&cli, &cfg, offset)
        }
    }
}

fn run_interactive(cli: &Cli, cfg: &ClientConfig, offset: UtcOffset) -> Result<()> {
    let session = match (&cli.url, &cli.team_id) {
        (Some(url), _) => SessionContext::resolve(url, cfg.install_url())?,
        (None, Some(team)) => SessionContext::new(WorkspaceId::new(team.clone()), cfg.install_url()),
        (None, None) => SessionContext::new(None, cfg.install_url()),
    };
    tracing::info!(
        backend = %cfg.backend_url,
        connected = session.is_connected(),
        "starting client"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("slack-connect-io")
        .build()
        .context("build tokio runtime")?;

    let client = ApiClient::new(cfg)?;
    let (dispatcher, completions) = Dispatcher::new(client, runtime.handle().clone());
    let shell = Shell::new(session, offset);

    let navigate_to = slack_connect::tui::run(shell, dispatcher, completions)?;
    if let Some(url) = navigate_to {
        println!("Open this URL to connect your Slack workspace:");
        println!("{}", url);
    }
    Ok(())
}

fn init_logging(cfg: &ClientConfig, stderr_fallback: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(path) = &cfg.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    } else if stderr_fallback {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
