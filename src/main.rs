use driftfield::{Backdrop, BackdropConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = Backdrop::new(BackdropConfig::default()).run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
