use serial_link::{link, port, LinkConfig, DEFAULT_BAUD_RATE};

use clap::Parser;

#[derive(Debug, Parser)]
struct Args {
    #[arg(short, long)]
    port: String,

    #[arg(short, long, default_value_t = DEFAULT_BAUD_RATE)]
    baud: u32,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    let args = Args::parse();

    let config = LinkConfig::default()
        .with_device(&args.port)
        .with_baud_rate(args.baud);

    let stream = match port::open(&config.device, config.baud_rate) {
        Ok(s) => s,
        Err(e) => {
            println!("Could not open port {}: {:?}", args.port, e);
            std::process::exit(-1);
        }
    };

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Could not listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    match link::run(stream, tokio::io::stdout(), &config, shutdown).await {
        Ok(()) => println!("Stopped"),
        Err(e) => println!("Error: {:?}", e),
    }
}
