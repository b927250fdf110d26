// main.rs only boots the router and server

use clap::Parser;

use osh_web::logging::init_logging;
use osh_web::router::app_router;
use osh_web::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "osh-web", about = "Production location profile server")]
struct Cli {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let state = AppState::new();
    let app = app_router(state);

    let bind_addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("profile server listening on {bind_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
