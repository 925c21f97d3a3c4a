mod args;
mod output;

fn main() {
    init_tracing();

    if let Err(err) = real_main() {
        output::print_error(&err);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .try_init();
}

fn real_main() -> anyhow::Result<()> {
    use clap::Parser as _;

    let cli = args::Cli::parse();

    match cli.cmd {
        args::Command::Refresh => bingwall_infra::ipc::client::refresh(),
        args::Command::Daemon => bingwall_infra::ipc::server::run_daemon(),
        args::Command::Status => bingwall_infra::ipc::client::status(),
        args::Command::SetApi { url, clear } => set_api(url, clear),
    }
}

fn set_api(url: Option<String>, clear: bool) -> anyhow::Result<()> {
    use bingwall_infra::settings;

    let mut cfg = settings::load()?;
    match (url, clear) {
        (Some(url), _) => {
            // Not validated here; a bad URL surfaces at refresh time.
            cfg.custom_api = url;
            settings::store(&cfg)?;
            println!("custom API saved: {}", cfg.custom_api);
        }
        (None, true) => {
            cfg.custom_api.clear();
            settings::store(&cfg)?;
            println!("custom API cleared; using the built-in provider");
        }
        (None, false) => {
            if cfg.has_custom_api() {
                println!("custom API: {}", cfg.custom_api);
            } else {
                println!("custom API not set; using {}", cfg.endpoint());
            }
        }
    }
    Ok(())
}
