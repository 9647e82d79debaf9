// src/common/telemetry.rs

use tracing_subscriber::EnvFilter;

// Inicializa o logger. O shell que embute a crate chama isso uma vez;
// nos testes cada chamada extra vira um no-op graças ao `try_init`.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
