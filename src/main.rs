use anyhow::{Result, anyhow};
use dotenv::dotenv;
use std::env;

use fashionaire_config::{Config, EnvStore, KeySource, init_logger};

const USAGE: &str = "usage: fashionaire-config [show | set <key> | clear | check [key]]";

fn main() -> Result<()> {
    dotenv().ok();

    init_logger(Config::resolve_mode(&EnvStore::new()));
    let mut config = Config::from_env();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("show");

    match command {
        "show" => show(&config),
        "set" => {
            let key = args.get(1).ok_or_else(|| anyhow!("missing key\n{USAGE}"))?;
            if !config.has_storage() {
                log::warn!("No persistent store available, key will not survive this process");
            }
            config.set_api_key(key.as_str());
            if !config.has_valid_api_key() {
                log::warn!("Key looks too short to be a real API key");
            }
            show(&config);
        }
        "clear" => {
            config.clear_api_key();
            println!("api key cleared");
        }
        "check" => {
            let key = args.get(1).map(String::as_str).or(config.api_key());
            if config.is_valid_api_key(key) {
                println!("valid");
            } else {
                println!("invalid");
                std::process::exit(1);
            }
        }
        "-h" | "--help" | "help" => println!("{USAGE}"),
        other => return Err(anyhow!("unknown command {other:?}\n{USAGE}")),
    }

    Ok(())
}

fn show(config: &Config) {
    println!("mode: {}", config.mode());
    match config.api_key() {
        Some(key) => println!("api key: {} ({})", mask(key), source_label(config.source())),
        None => println!("api key: <none>"),
    }
}

fn source_label(source: KeySource) -> &'static str {
    match source {
        KeySource::Environment => "environment",
        KeySource::Storage => "storage",
        KeySource::Override => "override",
        KeySource::Missing => "missing",
    }
}

/// Keep the first and last four characters.
fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}{}{tail}", "*".repeat(chars.len() - 8))
}
