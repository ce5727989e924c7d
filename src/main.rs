use tagbench::backend::OllamaClient;
use tagbench::config::BenchConfig;
use tagbench::eval::run_validation;
use tagbench::report::write_report;
use tagbench::util::logging;
use tagbench::VERSION;

use tracing::{debug, warn};

#[tokio::main]
async fn main() {
    logging::init_from_env();

    debug!("tagbench v{} starting", VERSION);

    std::process::exit(run().await);
}

async fn run() -> i32 {
    let config = BenchConfig::default();

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return 1;
    }

    let client = OllamaClient::with_timeout(
        config.endpoint.clone(),
        config.model.clone(),
        config.timeout,
    );

    match client.health_check().await {
        Ok(true) => debug!("Ollama is reachable at {}", config.endpoint),
        Ok(false) => warn!(
            "Ollama is not responding at {}; expect per-entry failures",
            config.endpoint
        ),
        Err(e) => warn!("Ollama health check failed: {}", e),
    }

    let outcome = run_validation(&config, &client).await;

    match write_report(&outcome.report, &config.output_dir) {
        Ok(path) => {
            println!();
            println!("Detailed results saved to: {}", path.display());
            0
        }
        Err(e) => {
            eprintln!("Failed to save results: {:#}", e);
            1
        }
    }
}
