use smart_delivery::utils::logger::init_logger;
use smart_delivery::{simulate_deliveries, DeliveryConfig};
use std::process::ExitCode;
use tracing::{debug, error};

fn main() -> ExitCode {
    init_logger();

    // Optional path to a JSON config; the built-in scenario otherwise
    let config = match std::env::args().nth(1) {
        Some(path) => match DeliveryConfig::from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("Error loading config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => DeliveryConfig::default(),
    };
    debug!("Using config: {:?}", config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match simulate_deliveries(&config, &mut out) {
        Ok(summary) => {
            debug!("Simulation finished: {:?}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error writing report: {}", e);
            ExitCode::FAILURE
        }
    }
}
