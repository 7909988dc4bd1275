use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tacpuzzle::deal::check_deal;
use tacpuzzle::{load_catalogue_from_json, rng_for_deal, Catalogue, DealGenerator, Solver};

#[derive(Debug, Parser)]
#[command(name = "batch", about = "Generate many deals in parallel and verify each one")]
struct Args {
    /// Number of deals to generate
    #[arg(long, default_value_t = 1000)]
    count: u64,

    /// Base seed; deal i uses (seed, i)
    #[arg(long, default_value_t = 0x00C0FFEEu64)]
    seed: u64,

    /// Worker threads (0 = rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Alternate catalogue JSON
    #[arg(long)]
    catalogue: Option<PathBuf>,

    /// Never force a card substitution
    #[arg(long)]
    no_forced_swap: bool,

    /// Hide the progress bar
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut catalogue = match &args.catalogue {
        Some(path) => load_catalogue_from_json(path).map_err(|e| format!("Catalogue load error: {e}"))?,
        None => Catalogue::standard(),
    };
    if args.no_forced_swap {
        catalogue.rules.forced_swap = false;
    }
    let generator = DealGenerator::new(&catalogue)?;

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .map_err(|e| format!("Thread pool error: {e}"))?;
    }

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(args.count)
    };
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] deals {bar:40.cyan/blue} {pos}/{len}")
            .map_err(|e| format!("Progress style error: {e}"))?
            .progress_chars("=>-"),
    );

    let start = Instant::now();
    let results: Vec<(bool, Result<(), String>)> = (0..args.count)
        .into_par_iter()
        .map(|id| {
            let mut rng = rng_for_deal(args.seed, id);
            let deal = generator.generate(&mut rng);
            let mut solver = Solver::new();
            let checked = check_deal(&deal, &mut solver).map_err(|e| format!("deal {id}: {e}"));
            pb.inc(1);
            (deal.forced_swap.is_some(), checked)
        })
        .collect();
    pb.finish_and_clear();

    let forced = results.iter().filter(|(f, _)| *f).count();
    let failures: Vec<&String> = results.iter().filter_map(|(_, r)| r.as_ref().err()).collect();
    for f in &failures {
        eprintln!("[batch] {f}");
    }
    println!(
        "[batch] deals={} forced_swap={} violations={} elapsed_ms={}",
        results.len(),
        forced,
        failures.len(),
        start.elapsed().as_millis()
    );

    if failures.is_empty() {
        Ok(())
    } else {
        Err(format!("{} deal(s) violated the solvability contract", failures.len()).into())
    }
}
