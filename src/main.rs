#[cfg(not(target_arch = "wasm32"))]
use clap::{Arg, Command}; // Command-line parsing for the terminal host

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use web_app_lab::config::{ConfigOverrides, HostConfig};
#[cfg(not(target_arch = "wasm32"))]
use web_app_lab::terminal::TerminalSession;
#[cfg(not(target_arch = "wasm32"))]
use web_app_lab::utils::logging::initialize_logging;

// Main function: parse arguments, set up logging and run the page in the terminal
#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("web-app-lab")
        .about("Counter and login form demo page, rendered in the terminal")
        .arg(
            Arg::new("store")
                .long("store")
                .help("File holding the saved credentials")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("JSON configuration file")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Where log lines are written")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("error, warn, info, debug or trace")
                .value_name("LEVEL"),
        )
        .get_matches();

    // Configuration file first, command-line values on top
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::default(),
    };
    let config = config.apply_overrides(ConfigOverrides {
        store_path: matches.get_one::<PathBuf>("store").cloned(),
        log_file: matches.get_one::<PathBuf>("log-file").cloned(),
        log_level: matches.get_one::<String>("log-level").cloned(),
    });

    initialize_logging(config.level_filter()?, &config.log_file)?;

    let mut session = TerminalSession::open(&config.store_path);
    session.run()?;
    Ok(())
}

// The browser build starts from `web::start` instead
#[cfg(target_arch = "wasm32")]
fn main() {}
