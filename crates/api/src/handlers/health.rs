//! `GET /health`: database reachability and connection-pool utilisation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Snapshot of the connection pool at the time of the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolStatus {
    pub reachable: bool,
    /// Open connections, idle or in use.
    pub connections: u32,
    pub idle_connections: usize,
    /// Configured ceiling (`DB_MAX_CONNECTIONS`).
    pub max_connections: u32,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub database: PoolStatus,
}

impl HealthReport {
    pub fn new(database: PoolStatus) -> Self {
        let status = if database.reachable { "ok" } else { "unavailable" };
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }
    }

    /// 503 while the database is unreachable.
    pub fn status_code(&self) -> StatusCode {
        if self.database.reachable {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// GET /health
pub async fn report(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let reachable = match newsroom_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            false
        }
    };

    let report = HealthReport::new(PoolStatus {
        reachable,
        connections: state.pool.size(),
        idle_connections: state.pool.num_idle(),
        max_connections: state.config.db_max_connections,
    });
    (report.status_code(), Json(report))
}
