use clap::Parser;
use log::{error, info};
use privdict_core::cli::report::completion_line;
use privdict_core::cli::Cli;
use privdict_core::{PrivateDictGenerator, SummaryReport};
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = cli.to_config();
    info!(
        "Generating {} ({}) from {}",
        config.output_path.display(),
        config.format,
        config.input_path.display()
    );

    match PrivateDictGenerator::new(config).run() {
        Ok(summary) => {
            info!("\n{}", SummaryReport::new(&summary));
            println!("{}", completion_line(&summary));
        }
        Err(e) => {
            error!("Generation failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}
