use clap::Parser;
use count_syllables::args::Args;
use count_syllables::config::Config;
use count_syllables::{engine, output};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    let result = engine::run(&config);
    for (path, err) in &result.errors {
        eprintln!("Error processing {}: {err}", path.display());
    }

    if let Err(e) = output::print_results(&result.reports, &config) {
        eprintln!("Output Error: {e}");
        return ExitCode::FAILURE;
    }

    if result.reports.is_empty() && !result.errors.is_empty() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
