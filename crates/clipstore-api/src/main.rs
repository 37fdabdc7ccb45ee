use clipstore_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    clipstore_api::telemetry::init_tracing();

    let config = Config::from_env()?;

    let (router, _state) = clipstore_api::setup::initialize_app(config.clone()).await?;

    clipstore_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
