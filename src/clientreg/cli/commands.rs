use super::args::{Cli, Commands, FieldArgs};
use super::print::{print_clients, print_full_clients, print_messages};
use clap::Parser;
use clientreg::api::{ClientRegApi, ConfigAction};
use clientreg::config::{ClientRegConfig, KEYS};
use clientreg::error::{ClientRegError, Result};
use clientreg::records::Latency;
use clientreg::records::fs::FileRecords;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Overrides the data dir, mostly for tests and scripting.
const DATA_DIR_ENV: &str = "CLIENTREG_DATA";

struct AppContext {
    api: ClientRegApi<FileRecords>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(dispatch(cli))
}

fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn dispatch(cli: Cli) -> Result<()> {
    let ctx = init_context().await?;

    match cli.command {
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Search { query }) => handle_list(&ctx, Some(query)),
        Some(Commands::View { targets }) => handle_view(&ctx, targets),
        Some(Commands::Add { fields }) => handle_add(&ctx, fields).await,
        Some(Commands::Edit { target, fields }) => handle_edit(&ctx, target, fields).await,
        Some(Commands::Delete { targets }) => handle_delete(&ctx, targets).await,
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "clientreg", "clientreg")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ClientRegError::Api("Could not determine data dir".into()))
}

async fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = match ClientRegConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "unreadable config, using defaults");
            ClientRegConfig::default()
        }
    };

    let latency = if config.simulate_latency {
        Latency::simulated()
    } else {
        Latency::none()
    };
    let records = FileRecords::new(config.data_path(&data_dir))
        .with_demo_seed(config.seed_demo)
        .with_latency(latency);
    tracing::debug!(path = %records.path().display(), "opening records");

    let api = ClientRegApi::start(records, data_dir).await;
    Ok(AppContext { api })
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let result = match search {
        Some(query) => ctx.api.search_clients(&query)?,
        None => ctx.api.list_clients()?,
    };
    print_clients(&result.listed_clients);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, targets: Vec<String>) -> Result<()> {
    let result = ctx.api.view_clients(&targets)?;
    print_full_clients(&result.listed_clients);
    print_messages(&result.messages);
    Ok(())
}

async fn handle_add(ctx: &AppContext, fields: FieldArgs) -> Result<()> {
    let result = ctx.api.create_client(&fields.values()).await?;
    print_messages(&result.messages);
    Ok(())
}

async fn handle_edit(ctx: &AppContext, target: String, fields: FieldArgs) -> Result<()> {
    let result = ctx.api.update_client(&target, &fields.values()).await?;
    print_messages(&result.messages);
    Ok(())
}

async fn handle_delete(ctx: &AppContext, targets: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_clients(&targets).await?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all && let Some(config) = &result.config {
        for key in KEYS {
            if let Some(value) = config.get(key) {
                println!("{} = {}", key, value);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
