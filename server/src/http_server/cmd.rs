use miette::Result;
use tracing::info;

use crate::{http_server::run_server, AppConfig, AppState};

pub(crate) async fn serve(port: u16) -> Result<()> {
    let config = AppConfig::from_env(port)?;
    info!(api = %config.api.base_url, bind = %config.bind, "Starting recipe web client");

    let app_state = AppState::new(config)?;

    run_server(app_state).await?;

    info!("Main Returning");

    Ok(())
}
