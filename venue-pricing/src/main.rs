use venue_pricing::{Server, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, config, logging)
    let config = setup_environment();

    print_banner();

    tracing::info!(
        environment = %config.environment,
        per_table = ?config.per_table_service_types,
        "Venue pricing service starting..."
    );

    // 2. Serve until ctrl-c
    let server = Server::new(config);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
