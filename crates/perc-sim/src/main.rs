use std::process::ExitCode;
use std::time::Instant;

use clap::{Args as ClapArgs, Parser, Subcommand};
use serde_json::json;

use perc_core::{PercError, RngHandle};
use perc_mc::{estimate_threshold, run_trial, EstimatorConfig};

#[derive(Parser, Debug)]
#[command(name = "perc-sim", about = "Site percolation threshold estimator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate the percolation threshold over repeated randomized trials.
    Estimate(EstimateArgs),
    /// Run a single trial and print its threshold sample.
    Trial(TrialArgs),
}

#[derive(ClapArgs, Debug)]
struct EstimateArgs {
    /// Side length of the square grid.
    #[arg(long)]
    side: usize,
    /// Number of independent randomized trials.
    #[arg(long)]
    trials: usize,
    /// Master seed; trials derive per-trial substreams from it.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Emit the summary as a single JSON object instead of plain text.
    #[arg(long)]
    json: bool,
}

#[derive(ClapArgs, Debug)]
struct TrialArgs {
    /// Side length of the square grid.
    #[arg(long)]
    side: usize,
    /// Master seed for the trial's permutation.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Estimate(args) => run_estimate(&args),
        Command::Trial(args) => run_single_trial(&args),
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("perc-sim: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_estimate(args: &EstimateArgs) -> Result<(), PercError> {
    let config = EstimatorConfig::new(args.side, args.trials, args.seed);

    let started = Instant::now();
    let summary = estimate_threshold(&config)?;
    let elapsed = started.elapsed();

    if args.json {
        let payload = json!({
            "side": summary.side,
            "trials": summary.trials,
            "seed": summary.seed,
            "mean": summary.mean,
            "stdev": summary.stdev,
            "confidence_low": summary.confidence_low,
            "confidence_high": summary.confidence_high,
            "elapsed_seconds": elapsed.as_secs_f64(),
        });
        println!("{payload}");
    } else {
        println!(
            "Ran {} trials on a {}x{} grid in {:.3}s",
            summary.trials,
            summary.side,
            summary.side,
            elapsed.as_secs_f64()
        );
        println!("Mean:           {:.6}", summary.mean);
        println!("Stdev:          {:.6}", summary.stdev);
        println!("ConfidenceLow:  {:.6}", summary.confidence_low);
        println!("ConfidenceHigh: {:.6}", summary.confidence_high);
    }
    Ok(())
}

fn run_single_trial(args: &TrialArgs) -> Result<(), PercError> {
    let mut rng = RngHandle::for_substream(args.seed, 0);
    let threshold = run_trial(args.side, &mut rng)?;
    println!("{threshold:.6}");
    Ok(())
}
