use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use cssdeps_analyzer::{Config, OutputFormat};
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cfg = Config::parse();
    debug!("Parsed CLI arguments: {:?}", cfg);

    let start = Instant::now();

    let num_threads = rayon::current_num_threads();
    info!("Running CSS dependency check (using {} threads)", num_threads);

    let result = cssdeps_analyzer::run_css_dependency_check(cfg.clone())?;
    debug!("Found {} components with missing imports", result.results.len());

    let elapsed_ms = start.elapsed().as_millis();

    match cfg.format {
        OutputFormat::Json => cssdeps_analyzer::print_report_json(&mut stdout, &result.results)?,
        OutputFormat::Tree if result.results.is_empty() => {
            cssdeps_analyzer::print_no_missing_imports_message(&mut stdout)?
        }
        OutputFormat::Tree => {
            cssdeps_analyzer::print_report_tree(&mut stdout, &result.results, &result.root)?
        }
    }

    writeln!(
        stdout,
        "\n{} Finished in {}ms on {} files (using {} threads).",
        "●".bright_blue(),
        elapsed_ms.to_string().cyan(),
        (result.components_analyzed + result.stylesheets_indexed).to_string().cyan(),
        num_threads.to_string().cyan()
    )?;
    stdout.flush()?;

    if cfg.check && !result.results.is_empty() {
        // Non-zero exit to fail CI
        std::process::exit(1);
    }

    Ok(())
}
