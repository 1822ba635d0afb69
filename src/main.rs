use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lakemetab::config::Config;
use lakemetab::runner::processor::sweep_output_path;
use lakemetab::runner::{BatchRunner, MetabolismProcessor};
use lakemetab::utils;

/// Lake mixed layer DO and phytoplankton simulation
#[derive(Parser, Debug)]
#[command(name = "lakemetab")]
#[command(about = "Simulate mixed layer dissolved oxygen and phytoplankton from sensor records")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single configuration
    Run {
        /// JSON run configuration
        #[arg(short, long, default_value = "./data/config/example_config.json")]
        config: PathBuf,

        /// Output table (.csv or .json), overrides the configured one
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run every configuration matching a glob pattern in parallel
    Batch {
        /// Glob pattern, e.g. "scenarios/*.json"
        #[arg(short, long)]
        pattern: String,
    },
}

fn run(config: PathBuf, output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::from_file(config)?;
    if let Some(output) = output {
        config = config.with_output(output);
    }

    let processor = MetabolismProcessor::new(config)?;
    println!("{}", processor);

    if let Some(sweep) = processor.config().sweep() {
        println!(
            "Sensitivity sweep of {} over {:?}",
            sweep.parameter, sweep.values
        );

        for run in processor.process_sweep()? {
            println!("\n{} = {}", run.parameter, run.value);
            match run.table {
                Ok(table) => {
                    utils::print_report_statistics(&table);
                    if let Some(output) = processor.config().output() {
                        let file = sweep_output_path(output, &run.parameter, run.value);
                        table.export(&file)?;
                        println!("✓ Saved to: {}", file.display());
                    }
                }
                Err(e) => println!("✗ Run failed: {}", e),
            }
        }

        return Ok(());
    }

    let table = processor.process()?;
    utils::print_report_statistics(&table);

    if let Some(output) = processor.config().output() {
        table.export(output)?;
        println!("✓ Saved to: {}", output.display());
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Run { config, output } => run(config, output)?,
        Command::Batch { pattern } => {
            let runner = BatchRunner::new(&pattern)?;
            let outcomes = runner.process();

            let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(files) => println!(
                        "✓ {} -> {} file(s)",
                        outcome.config_path.display(),
                        files.len()
                    ),
                    Err(e) => println!("✗ {}: {}", outcome.config_path.display(), e),
                }
            }

            if failed > 0 {
                return Err(format!("{} of {} scenarios failed", failed, outcomes.len()).into());
            }
        }
    }

    Ok(())
}
