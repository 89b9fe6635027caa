use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::sync::Arc;
use textsim_api::RestApi;
use textsim_compare::{compare, compare_full_detailed, compare_tokenizations};
use textsim_core::DEFAULT_NGRAM_SIZE;
use textsim_semantic::{
    EmbeddingProvider, HashingProvider, OpenAiProvider, ProviderConfig, SemanticSimilarity,
    DEFAULT_BASE_URL, DEFAULT_MODEL,
};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Multi-method text similarity
#[derive(Parser, Debug)]
#[command(name = "textsim")]
#[command(about = "Compare strings by edit distance, token overlap and embeddings", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the REST API
    Serve {
        /// HTTP API port
        #[arg(long, default_value_t = 6340)]
        http_port: u16,

        #[command(flatten)]
        provider: ProviderArgs,
    },
    /// Compare two strings and print a JSON report
    Compare {
        a: String,
        b: String,

        /// Window size for n-gram Jaccard
        #[arg(long, default_value_t = DEFAULT_NGRAM_SIZE)]
        ngram: usize,

        /// Also compute embedding similarity
        #[arg(long)]
        semantic: bool,

        #[command(flatten)]
        provider: ProviderArgs,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ProviderKind {
    /// OpenAI when an API key is set, hashing otherwise
    Auto,
    Openai,
    Hashing,
}

#[derive(ClapArgs, Debug)]
struct ProviderArgs {
    /// Embedding provider
    #[arg(long, value_enum, default_value_t = ProviderKind::Auto)]
    provider: ProviderKind,

    /// Embedding model identifier
    #[arg(long, env = "TEXTSIM_EMBEDDING_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// API key for the embedding provider
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout for embedding calls
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

impl ProviderArgs {
    fn build(&self) -> anyhow::Result<SemanticSimilarity> {
        let mut config = ProviderConfig::default()
            .with_model(self.model.clone())
            .with_base_url(self.base_url.clone())
            .with_timeout_secs(self.timeout_secs);
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.is_empty()) {
            config = config.with_api_key(key);
        }

        let kind = match self.provider {
            ProviderKind::Auto if config.api_key.is_some() => ProviderKind::Openai,
            ProviderKind::Auto => {
                warn!("No API key configured, falling back to offline hashing embeddings");
                ProviderKind::Hashing
            }
            other => other,
        };

        let provider: Arc<dyn EmbeddingProvider> = match kind {
            ProviderKind::Openai => Arc::new(OpenAiProvider::new(config)?),
            _ => Arc::new(HashingProvider::default()),
        };
        info!("Embedding provider: {}", provider.model());
        Ok(SemanticSimilarity::new(provider))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so reports on stdout stay machine-readable
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Serve { http_port, provider } => serve(provider.build()?, http_port).await,
        Command::Compare {
            a,
            b,
            ngram,
            semantic,
            provider,
        } => {
            let mut report = serde_json::json!({
                "compare": compare(&a, &b),
                "tokenizations": compare_tokenizations(&a, &b, ngram)?,
            });
            if semantic {
                let adapter = provider.build()?;
                report["full"] = serde_json::to_value(compare_full_detailed(&adapter, &a, &b).await)?;
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}

async fn serve(semantic: SemanticSimilarity, http_port: u16) -> anyhow::Result<()> {
    info!("Starting textsim v{}", env!("CARGO_PKG_VERSION"));

    let semantic = Arc::new(semantic);
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(semantic, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://localhost:{}/", http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
