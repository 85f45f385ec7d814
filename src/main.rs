use anyhow::Context;
use clap::Parser;
use formtable::adapters::health_handler::HealthHandler;
use formtable::adapters::sink::WriterSink;
use formtable::adapters::form_page::render_form_page;
use formtable::application::RendererSink;
use formtable::cli::{Cli, Command};
use formtable::config::{watcher::ConfigWatcher, Settings, FIELDS_DIR};
use formtable::render::render_table;
use std::io::Write;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `render` output stays clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    match cli.command() {
        Command::Render { output, fragment } => render(&settings, output, fragment),
        Command::Check => check(&settings),
        Command::Serve => serve(cli, settings).await,
    }
}

fn render(settings: &Settings, output: Option<PathBuf>, fragment: bool) -> anyhow::Result<()> {
    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };

    if fragment {
        WriterSink::new(writer).mount(&render_table(&settings.schema()))?;
    } else {
        let html = render_form_page(settings)?;
        let mut writer = writer;
        writer.write_all(html.as_bytes())?;
        writer.flush()?;
    }

    if let Some(path) = output {
        info!("Wrote {}", path.display());
    }
    Ok(())
}

fn check(settings: &Settings) -> anyhow::Result<()> {
    let schema = settings.schema();
    println!("Configuration OK: {} fields", schema.len());
    for field in schema.iter() {
        println!("  {}", field);
    }
    Ok(())
}

async fn serve(cli: Cli, settings: Settings) -> anyhow::Result<()> {
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting formtable on {}:{} ({} fields)", host, port, settings.fields.len());

    let settings = Arc::new(RwLock::new(settings));

    // Reload the whole settings value when the config file or field files change
    let settings_for_watcher = settings.clone();
    let cli_for_watcher = cli.clone();
    let root = cli
        .config
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let paths = vec![cli.config.clone(), root.join(FIELDS_DIR)];
    let _watcher = ConfigWatcher::new(paths, move || {
        match Settings::new_with_cli(&cli_for_watcher) {
            Ok(new_settings) => {
                let mut w = settings_for_watcher.blocking_write();
                *w = new_settings;
                info!("Configuration reloaded successfully");
            }
            Err(e) => error!("Failed to reload configuration: {:#}", e),
        }
    })?;

    let health_handler = Arc::new(HealthHandler::new(settings.clone()));
    let app = formtable::create_app(settings, health_handler);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
