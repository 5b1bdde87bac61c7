use anyhow::Result;
use clap::{App, Arg};
use std::{path::Path, str::FromStr};
use tracing::{subscriber::set_global_default, Level};

mod commands;
mod config;

use config::load_config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = App::new("tabcloak")
        .version("0.1.0")
        .about("Disclosure-control toolkit for tabular patient data")
        .arg(
            Arg::new("config")
                .short('c')
                .default_value("./tabcloak.toml")
                .help("Path to the config file to use"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .default_value("INFO")
                .help("Sets the level of verbosity"),
        )
        .subcommand(App::new("generate").about("Generate a synthetic patient dataset"))
        .subcommand(
            App::new("anonymize")
                .about("Evaluate the privacy metrics and anonymize the stored dataset"),
        )
        .get_matches();

    let tracing_level = Level::from_str(
        matches
            .value_of("verbosity")
            .expect("Missing value for 'verbosity' argument"),
    )?;

    let collector = tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .finish();

    set_global_default(collector)?;

    let config_file_path = Path::new(
        matches
            .value_of("config")
            .expect("Missing value for 'config' argument"),
    );

    let config = load_config(config_file_path)?;

    match matches.subcommand_name() {
        Some("generate") => commands::generate::run(&config).await,
        Some("anonymize") => commands::anonymize::run(&config).await,
        _ => anyhow::bail!("expected a subcommand: 'generate' or 'anonymize'"),
    }
}
