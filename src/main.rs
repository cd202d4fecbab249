use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use fleet_finance::config::environment::EnvironmentConfig;
use fleet_finance::routes::create_app_router;
use fleet_finance::state::AppState;
use fleet_finance::store::{FleetSnapshot, FleetStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 Fleet Finance - Reportes Financieros de Flota");
    info!("================================================");

    let config = EnvironmentConfig::default();

    // Snapshot inicial: desde archivo seed si está configurado
    let store = match config.snapshot_file.as_deref() {
        Some(path) => match FleetSnapshot::from_file(path) {
            Ok(snapshot) => {
                info!(
                    "✅ Snapshot inicial cargado desde {}: {} registros",
                    path,
                    snapshot.stats().total
                );
                FleetStore::from_snapshot(snapshot)
            }
            Err(e) => {
                error!("❌ Error cargando snapshot desde {}: {}", path, e);
                return Err(anyhow::anyhow!("Error de snapshot inicial: {}", e));
            }
        },
        None => {
            warn!("⚠️ SNAPSHOT_FILE no configurado; el store arranca vacío hasta la primera ingesta");
            FleetStore::new()
        }
    };

    // Crear router de la API
    let app_state = AppState::new(store, config.clone());
    let app = create_app_router(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("📊 Endpoints de Reportes:");
    info!("   GET  /api/report/vehicles - Desempeño por vehículo");
    info!("   GET  /api/report/activity/:user_id - Actividad por colaborador");
    info!("   GET  /api/report/consolidated - Libro consolidado");
    info!("   GET  /api/report/agregados - Fletes de agregados");
    info!("   GET  /api/report/dashboard - Resumen operativo");
    info!("💰 Endpoints de Edición Financiera:");
    info!("   PUT  /api/finance/daily-routes/:id - Editar rota diaria");
    info!("   PUT  /api/finance/routes/:id - Editar saída OC");
    info!("   PUT  /api/finance/fuelings/:id - Editar abastecimiento");
    info!("   PUT  /api/finance/maintenances/:id - Editar mantenimiento");
    info!("   PUT  /api/finance/activity/:id - Edición inline de actividad");
    info!("📥 Endpoints de Snapshot:");
    info!("   POST /api/snapshot - Reemplazar snapshot de registros");
    info!("   GET  /api/snapshot/stats - Conteo de registros");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                anyhow::Error::from(e)
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
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
