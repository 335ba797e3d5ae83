use sitecheck::app::{self, App};
use sitecheck::batch::BatchRunner;
use sitecheck::config::load_config;
use sitecheck::http_probe::prelude::*;
use tokio::io::BufReader;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let app_config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let prober = match SiteProber::new(&app_config.probe) {
        Ok(prober) => prober,
        Err(e) => {
            log::error!("Failed to create HTTP client: {e}");
            std::process::exit(1);
        }
    };
    log::info!("Using a probe timeout of {:?}", prober.timeout());

    let app = App::new(BatchRunner::new(prober));
    if let Err(e) = app::run(app, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await {
        log::error!("Terminal I/O failed: {e}");
        std::process::exit(1);
    }
}
