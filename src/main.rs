use serial_link::{link, port, LinkConfig};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = LinkConfig::default();
    let stream = match port::open(&config.device, config.baud_rate) {
        Ok(s) => s,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Could not listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    if let Err(e) = link::run(stream, tokio::io::stdout(), &config, shutdown).await {
        log::error!("Serial link stopped: {}", e);
        std::process::exit(1);
    }
}
