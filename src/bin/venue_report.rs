use std::{env, fs, path::PathBuf, process};

use chrono::Local;
use venue_core::{
    config::ConfigManager, domain::Dataset, errors::Result, init, report::render_report, seed,
    utils::build_info,
};

fn run(dataset_path: Option<PathBuf>) -> Result<()> {
    let config = ConfigManager::new()?.load()?;
    let dataset = match dataset_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading dataset");
            Dataset::from_json_str(&fs::read_to_string(&path)?)?
        }
        None => seed::dataset(),
    };
    let reference = config.reference_date_or(Local::now().date_naive());
    print!("{}", render_report(&dataset, &config, reference)?);
    Ok(())
}

fn main() {
    init();

    let mut dataset_path = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--version" | "-V" => {
                println!("{}", build_info::current());
                return;
            }
            "--help" | "-h" => {
                println!("Usage: venue_report [--version] [DATASET.json]");
                return;
            }
            _ if dataset_path.is_none() => dataset_path = Some(PathBuf::from(&arg)),
            _ => {
                eprintln!("Error: unexpected argument `{arg}`");
                process::exit(2);
            }
        }
    }

    if let Err(err) = run(dataset_path) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
