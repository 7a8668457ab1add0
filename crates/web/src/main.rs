use std::sync::Arc;

use agrisite_web::config::Config;
use agrisite_web::services::SiteServices;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    agrisite_observability::init();

    let config = Config::from_env()?;
    let services = Arc::new(SiteServices::build(config.catalog_source().as_ref())?);
    let app = agrisite_web::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
