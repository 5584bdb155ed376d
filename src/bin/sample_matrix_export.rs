use std::fs;
use std::path::PathBuf;

use series_highlight::HighlightEngineConfig;
use series_highlight::core::{RngUnitSource, SeriesCatalog, generate};

const USAGE: &str = "usage: sample_matrix_export [--seed <u64>] [--config <path>] [--output <path>]";

#[derive(Debug, Default)]
struct CliArgs {
    seed: Option<u64>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            HighlightEngineConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => HighlightEngineConfig::default(),
    };

    let catalog = SeriesCatalog::build(&config.catalog).map_err(|err| err.to_string())?;
    let matrix = match args.seed {
        Some(seed) => generate(&catalog, &config.generator, &mut RngUnitSource::seeded(seed)),
        None => generate(&catalog, &config.generator, &mut RngUnitSource::thread()),
    }
    .map_err(|err| err.to_string())?;

    let payload = serde_json::to_string_pretty(&matrix)
        .map_err(|err| format!("failed to serialize json: {err}"))?;
    match &args.output {
        Some(path) => fs::write(path, payload)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{payload}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut parsed = CliArgs::default();

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --seed".to_owned())?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|err| format!("invalid --seed `{value}`: {err}"))?;
                parsed.seed = Some(seed);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                parsed.output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    Ok(parsed)
}
