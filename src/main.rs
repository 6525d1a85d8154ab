use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use tracing_subscriber::EnvFilter;
use travel_tracker::application::{init::init, ConfigService, TrackerService};
use travel_tracker::cli::{Cli, Commands, Shell};
use travel_tracker::error::TrackerError;
use travel_tracker::infrastructure::{load_settings, FileSystemRepository};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), TrackerError> {
    match cli.command {
        None | Some(Commands::Shell) => {
            let (root, config) = load_settings()?;
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();

            let mut shell = Shell::new(TrackerService::new(config, root), io::stdout().lock());
            shell.run_interactive(stdin.lock(), prompt)
        }
        Some(Commands::Run { script }) => {
            let (root, config) = load_settings()?;
            let file = File::open(&script)?;

            let mut shell = Shell::new(TrackerService::new(config, root), io::stdout().lock());
            shell.run_script(BufReader::new(file))
        }
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("currency_symbol = {}", config.currency_symbol);
                println!("export_dir = {}", config.export_dir.display());
                println!("chart_width = {}", config.chart_width);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: travel config [--list | <key> [<value>]]");
                println!("Valid keys: currency_symbol, export_dir, chart_width");
                Ok(())
            }
        }
    }
}
