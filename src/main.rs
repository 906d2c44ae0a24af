use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use dispatch_backoffice::config::environment::EnvironmentConfig;
use dispatch_backoffice::database::DatabaseConnection;
use dispatch_backoffice::middleware::cors::cors_middleware;
use dispatch_backoffice::routes;
use dispatch_backoffice::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 Dispatch Back-office - API de despacho y nómina");
    info!("==================================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(e);
    }

    let pool = db_connection.pool().clone();
    let config = EnvironmentConfig::default();
    let port = config.port;
    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/operator", routes::operator_routes::create_operator_router())
        .nest("/api/truck", routes::truck_routes::create_truck_router())
        .nest("/api/order", routes::order_routes::create_order_router())
        .nest("/api/assignment", routes::assignment_routes::create_assignment_router())
        .nest("/api/payment", routes::payment_routes::create_payment_router())
        .nest("/api/cost", routes::cost_routes::create_cost_router())
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("👷 Operators:");
    info!("   POST /api/operator - Crear operario");
    info!("   GET  /api/operator - Listar operarios");
    info!("   GET  /api/operator/:id - Obtener operario");
    info!("   PUT  /api/operator/:id - Actualizar operario");
    info!("   DELETE /api/operator/:id - Eliminar operario");
    info!("🚛 Trucks:");
    info!("   POST /api/truck - Crear camión");
    info!("   GET  /api/truck - Listar camiones");
    info!("📦 Orders:");
    info!("   POST /api/order - Crear pedido");
    info!("   GET  /api/order/:id/summary - Resumen de costos");
    info!("   GET  /api/order/:id/summary/list - Desglose itemizado");
    info!("   GET  /api/order/:id/assignments - Assignments del pedido");
    info!("🔗 Assignments:");
    info!("   POST /api/assignment - Crear assignment");
    info!("   POST /api/assignment/bulk - Alta masiva");
    info!("   GET  /api/assignment/:id/audit - Historial de auditoría");
    info!("💰 Payments:");
    info!("   POST /api/payment/batch - Pagar lote de assignments");
    info!("   GET  /api/payment - Listar payments");
    info!("⛽ Costs:");
    info!("   POST /api/cost/fuel - Registrar combustible");
    info!("   POST /api/cost/work - Registrar costo de trabajo");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "dispatch-backoffice",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
