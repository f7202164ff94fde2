//! prng-demo
//!
//! Samples every engine in the catalogue over a pixel grid and writes one
//! grayscale BMP heatmap per engine. Darker cells were hit more often.

mod args;
mod catalogue;
mod demo;
mod error;

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use crate::args::{Args, USAGE};
use crate::catalogue::Seeding;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let config = match args.sampling_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        log::info!("Effective config: {:?}", config);
    } else {
        println!("{}\n", demo::config_banner(&config));
    }

    if let Err(e) = config.validate() {
        eprintln!("{}", e);
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    }

    let names = match catalogue::select(&args.only) {
        Ok(names) => names,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let seeding = match args.seed {
        Some(seed) => Seeding::Fixed(seed),
        None => Seeding::Entropy,
    };

    match demo::run(&names, &seeding, &config, &args.out_dir) {
        Ok(reports) if args.json => match serde_json::to_string_pretty(&reports) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("Failed to serialize report: {}", e);
                ExitCode::FAILURE
            }
        },
        Ok(reports) => {
            for report in &reports {
                println!("{}", report.line());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
