use std::{io::Error, sync::Arc, time::Duration};

use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use users_api::{
    config::{BootstrapMode, Config},
    infrastructure::{database, repositories::postgres::PostgresUserRepository, schema},
    presentation::http::{app, endpoints::root::ApiState},
};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

#[main]
async fn main() -> Result<(), Error> {
    let config = Config::try_parse().map_err(Error::other)?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "users_api=info,poem=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = database::connect_lazy(&config.database).map_err(Error::other)?;

    match config.bootstrap {
        BootstrapMode::Blocking => schema::bootstrap(pool.clone()).await,
        BootstrapMode::Background => {
            warn!("schema bootstrap runs in background; early requests may fail");
            tokio::spawn(schema::bootstrap(pool.clone()));
        }
    }

    let state = Arc::new(ApiState::new(PostgresUserRepository::new(pool.clone())));

    let addr = config.listen_addr();
    info!(%addr, "starting server");

    let result = Server::new(TcpListener::bind(addr))
        .run_with_graceful_shutdown(app(state), shutdown_signal(), Some(SHUTDOWN_GRACE))
        .await;

    pool.close().await;
    info!("database pool closed");
    result
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
