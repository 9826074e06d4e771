use std::{path::PathBuf, process};

use budget_insights::{
    config::{Config, ConfigManager},
    init,
    report::Formatter,
    sample_data::sample_month,
    FinanceStore, MonthKey,
};

const USAGE: &str = "Usage: budget_insights [YYYY-MM] [--config PATH] [--plain]";

struct Args {
    month: Option<MonthKey>,
    config_path: Option<PathBuf>,
    plain: bool,
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut args = Args {
        month: None,
        config_path: None,
        plain: false,
    };
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--plain" => args.plain = true,
            "--config" => {
                let path = raw.next().ok_or("--config requires a path")?;
                args.config_path = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            other => {
                let month = other.parse::<MonthKey>().map_err(|err| err.to_string())?;
                args.month = Some(month);
            }
        }
    }
    Ok(args)
}

fn load_config(path: Option<PathBuf>) -> Result<Config, String> {
    let manager = match path {
        Some(path) => ConfigManager::with_path(path),
        None => match ConfigManager::new() {
            Ok(manager) => manager,
            Err(err) => {
                tracing::warn!(error = %err, "falling back to default configuration");
                return Ok(Config::default());
            }
        },
    };
    manager.load().map_err(|err| err.to_string())
}

fn main() {
    init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };
    let config = match load_config(args.config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    let month = args.month.unwrap_or_else(sample_month);
    if month > MonthKey::current() {
        eprintln!("Error: {month} is in the future");
        process::exit(1);
    }
    let store = FinanceStore::with_sample_data(month).with_rules(config.insights.clone());
    print!("{}", Formatter::new(&config, args.plain).dashboard(&store));
}
