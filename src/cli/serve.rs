use poem::{Server, listener::TcpListener};

use crate::api::build_app;
use crate::app_data::AppData;
use crate::config::{BootstrapSettings, init_database, migrate_database};

/// Connect, migrate and serve until the process is stopped
pub async fn run_server(settings: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Application starting...");

    let db = init_database(settings).await?;
    migrate_database(&db).await?;

    let app_data = AppData::init(db);

    let server_url = format!("http://localhost:{}", settings.server_port());
    let app = build_app(&app_data, &server_url);

    tracing::info!("Application running on port {}", settings.server_port());
    tracing::info!("Swagger UI available at {}/api", server_url);

    Server::new(TcpListener::bind(settings.server_address()))
        .run(app)
        .await?;

    Ok(())
}
