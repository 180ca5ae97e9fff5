use mystic_fortune::api::router;
use mystic_fortune::config::config;
use mystic_fortune::state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let conf = config();
    tracing::info!(port = conf.port, locale = %conf.default_locale, "Starting Mystic Fortune");

    let state = AppState::new(conf.default_locale);

    let app = router(state);
    let addr = format!("0.0.0.0:{}", conf.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server bound");

    axum::serve(listener, app).await?;

    Ok(())
}
