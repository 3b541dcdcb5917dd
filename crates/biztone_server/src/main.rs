use clap::Parser;
use groq_client::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Standalone BizTone Converter server.
#[derive(Parser, Debug)]
#[command(name = "biztone-server")]
#[command(about = "HTTP service converting text into audience-appropriate business tone", long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "APP_PORT", default_value_t = 5000)]
    port: u16,

    /// Serve deterministic mock conversions instead of calling Groq
    #[arg(long, env = "BIZTONE_MOCK_MODE", default_value_t = false)]
    mock: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(true)
                .with_file(false),
        )
        .init();

    let args = Args::parse();
    let config = Config::new();

    tracing::info!("Starting BizTone Converter server...");

    if let Err(e) = web_service::server::run(config, args.port, args.mock).await {
        tracing::error!("Failed to run web service: {}", e);
        std::process::exit(1);
    }
}
