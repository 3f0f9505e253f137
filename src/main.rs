use anyhow::{Context, Result};
use clap::Parser;
use rustyline::DefaultEditor;
use soulsync::cli_style;
use soulsync::config::{AppConfig, CliConfig, FileConfig};
use soulsync::console::ConsolePresenter;
use soulsync::llm::OpenAIProvider;
use soulsync::lyrics::GeniusClient;
use soulsync::menu::{run_menu, MenuExit};
use soulsync::{AnalysisContext, EventLog, Pipeline, PipelineSettings};
use std::path::PathBuf;
use tracing::{debug, info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
#[command(styles = cli_style::get_styles())]
struct CliArgs {
    /// Path to a TOML config file. Its values override the flags below.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Directory where analysis reports are written.
    #[clap(long)]
    pub output_dir: Option<PathBuf>,

    /// File the run log is appended to.
    #[clap(long)]
    pub log_file: Option<PathBuf>,

    /// Chat model used for the emotion analysis.
    #[clap(long)]
    pub model: Option<String>,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            output_dir: self.output_dir.clone(),
            log_file: self.log_file.clone(),
            llm_model: self.model.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from {:?}", path);
    }

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config, |var| {
        std::env::var(var).ok()
    })?;
    info!(
        output_dir = ?config.output_dir,
        model = %config.llm.model,
        "Configuration resolved"
    );

    // Ctrl-C at a prompt is handled by rustyline; this fires while a request blocks.
    ctrlc::set_handler(|| {
        cli_style::print_terminated();
        std::process::exit(130);
    })
    .context("Failed to install interrupt handler")?;

    let lyrics_provider = GeniusClient::new(
        config.genius.base_url.clone(),
        config.genius.api_key.clone(),
        config.genius.request_timeout,
    )?;
    let mut llm = OpenAIProvider::new(
        config.llm.base_url.clone(),
        config.llm.model.clone(),
        Some(config.llm.api_key.clone()),
    );
    if let Some(name) = &config.llm.provider_name {
        llm = llm.with_name(name.clone());
    }
    let event_log = EventLog::open(&config.log_file)
        .with_context(|| format!("Failed to open log file {:?}", config.log_file))?;

    let mut pipeline = Pipeline::new(AnalysisContext {
        lyrics_provider: Box::new(lyrics_provider),
        llm: Box::new(llm),
        presenter: Box::new(ConsolePresenter::new()),
        event_log,
        settings: PipelineSettings {
            output_dir: config.output_dir.clone(),
            max_lyrics_chars: config.llm.max_lyrics_chars,
            completion: config.llm.completion_options(),
        },
    });

    let mut editor = DefaultEditor::new()?;
    let _ = editor.clear_screen();
    cli_style::print_banner();

    match run_menu(&mut editor, &mut pipeline) {
        MenuExit::Interrupted => std::process::exit(130),
        MenuExit::Requested | MenuExit::EndOfInput => Ok(()),
    }
}
