use clap::{Parser, Subcommand};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use ppc_trends::config::{BotConfig, ConfigLoader};
use ppc_trends::output::export_metrics;
use ppc_trends::{
    BenchmarkSnapshot, BotSession, FaqResponder, GeminiProvider, HtmlFileSource,
    HttpSnapshotSource, MetricKind, MetricRegistry, SnapshotSource, TrendsReporter,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "ppc-trends")]
#[command(version = "0.1.0")]
#[command(about = "Marketing assistant with PPC industry benchmarks", long_about = None)]
struct Cli {
    /// Path to the configuration file (JSON/YAML/TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Read the benchmarks page from a saved HTML file instead of the network
    #[arg(long, global = true)]
    html: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session on stdin (default)
    Chat,
    /// Print CPC and CTC benchmarks for an industry
    Trends {
        #[arg(required = true)]
        industry: Vec<String>,
    },
    /// Ask a marketing question
    Faq {
        #[arg(required = true)]
        question: Vec<String>,
    },
    /// Export extracted benchmark tables through the configured output
    Dump {
        /// Only export this metric
        #[arg(short, long, value_enum)]
        kind: Option<MetricKind>,
    },
    /// Validate a configuration file
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        unsafe { std::env::set_var("RUST_LOG", "info"); }
    }
    let cli = Cli::parse();
    let logger = env_logger::Builder::from_default_env().build();
    let level = logger.filter();
    let multi = Arc::new(MultiProgress::new());
    indicatif_log_bridge::LogWrapper::new((*multi).clone(), logger).try_init()?;
    log::set_max_level(level);

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Check => check(cli.config.as_deref()),
        Commands::Faq { question } => {
            let config = load_config(cli.config.as_deref())?;
            let faq = build_faq(&config)?;
            println!("{}", faq.answer(&question.join(" ")).await);
        }
        Commands::Trends { industry } => {
            let config = load_config(cli.config.as_deref())?;
            let reporter = load_reporter(&config, cli.html.as_deref(), &multi).await?;
            println!("{}", reporter.report(&industry.join(" ")));
        }
        Commands::Dump { kind } => {
            let config = load_config(cli.config.as_deref())?;
            let reporter = load_reporter(&config, cli.html.as_deref(), &multi).await?;
            let Some(snapshot) = reporter.snapshot() else {
                anyhow::bail!("Benchmark snapshot is unavailable, nothing to export");
            };
            let kinds: Vec<MetricKind> = match kind {
                Some(kind) => vec![kind],
                None => MetricRegistry::KINDS.to_vec(),
            };
            let mut handler = ConfigLoader::create_output(&config, Some(multi.clone()))?;
            let written = export_metrics(snapshot, &kinds, handler.as_mut()).await?;
            print_summary(snapshot, written);
        }
        Commands::Chat => {
            let config = load_config(cli.config.as_deref())?;
            let reporter = load_reporter(&config, cli.html.as_deref(), &multi).await?;
            let faq = build_faq(&config)?;
            run_chat(BotSession::new(reporter, faq)).await?;
        }
    }

    Ok(())
}

fn check(path: Option<&Path>) {
    let Some(path) = path else {
        eprintln!("❌ No config file given, use --config <path>");
        std::process::exit(1);
    };
    match ConfigLoader::load(path) {
        Ok(cfg) => {
            println!("✅ Config is valid:");
            println!("   Name: {}", cfg.name);
            println!("   Source: {}", cfg.source_url);
            println!("   Table selector: {}", cfg.table_selector);
            println!("   LLM model: {}", cfg.llm.model);
        }
        Err(e) => {
            eprintln!("❌ Config error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<BotConfig> {
    if let Some(path) = path {
        log::info!("Loading config from {:?}", path);
    }
    let config = ConfigLoader::load_or_default(path)?;
    log::info!("Loaded config: {}", config.name);
    Ok(config)
}

/// Takes the one snapshot of this process. A failed fetch leaves the
/// reporter without data; trend queries then answer "unable to fetch".
async fn load_reporter(
    config: &BotConfig,
    html: Option<&Path>,
    multi: &MultiProgress,
) -> anyhow::Result<TrendsReporter> {
    let source: Box<dyn SnapshotSource> = match html {
        Some(path) => Box::new(HtmlFileSource::new(path, config.table_selector.clone())),
        None => Box::new(HttpSnapshotSource::from_config(config)?),
    };

    let pb = multi.add(ProgressBar::new_spinner());
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Fetching benchmarks from {}", source.describe()));

    let result = source.fetch().await;
    pb.finish_and_clear();

    Ok(match result {
        Ok(snapshot) => TrendsReporter::new(Arc::new(snapshot)),
        Err(e) => {
            log::error!("Could not load benchmarks from {}: {}", source.describe(), e);
            TrendsReporter::unavailable()
        }
    })
}

fn build_faq(config: &BotConfig) -> anyhow::Result<FaqResponder> {
    Ok(match GeminiProvider::from_env(&config.llm)? {
        Some(provider) => FaqResponder::new(Arc::new(provider)),
        None => {
            log::warn!("{} is not set, FAQ answers are disabled", config.llm.api_key_env);
            FaqResponder::disabled()
        }
    })
}

async fn run_chat(mut session: BotSession) -> anyhow::Result<()> {
    println!("Marketing bot ready. Type /help for commands, Ctrl-D to quit.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                log::info!("Shutting down...");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if let Some(reply) = session.handle(&line).await {
                    println!("{}\n", reply);
                }
            }
        }
    }
    Ok(())
}

fn print_summary(snapshot: &BenchmarkSnapshot, written: usize) {
    println!("\n✅ Export Completed:");
    println!("   Source: {}", snapshot.source);
    println!("   Fetched At: {}", snapshot.fetched_at.to_rfc3339());
    println!("   Tables: {}", snapshot.len());
    println!("   Records Written: {}", written);
}
