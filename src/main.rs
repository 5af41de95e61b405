use clap::Parser;
use metro_route::app::MetroCliArguments;
use metro_route::config::AppConfig;

fn main() {
    let args = MetroCliArguments::parse();

    let config = match AppConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();
    log::debug!("configuration: {:?}", config);

    match args.op.run(&config) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("failed running metro-route: {e}");
            std::process::exit(1);
        }
    }
}
