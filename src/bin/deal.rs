use std::path::PathBuf;

use clap::Parser;
use tacpuzzle::{
    load_catalogue_from_json, rng_for_deal, Catalogue, Deal, DealGenerator, Piece, SolveStep, Solver,
};

#[derive(Debug, Parser)]
#[command(name = "deal", about = "Generate a TAC puzzle deal and optionally solve it")]
struct Args {
    /// Base seed for the deal RNG
    #[arg(long, default_value_t = 0x00C0FFEEu64)]
    seed: u64,

    /// Deal number under the base seed
    #[arg(long, default_value_t = 0)]
    id: u64,

    /// Alternate catalogue JSON (defaults to the standard 14-card deck)
    #[arg(long)]
    catalogue: Option<PathBuf>,

    /// Never force a card substitution
    #[arg(long)]
    no_forced_swap: bool,

    /// Only accept deals containing a Trickster
    #[arg(long)]
    require_trickster: bool,

    /// Print the solver's play-by-play solution
    #[arg(long)]
    solve: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

fn describe_step(step: &SolveStep, seat: u8) -> String {
    let mut s = format!("slot {}: {}", step.slot, step.card);
    if step.decisions.discard == Some(true) {
        s.push_str(" [discard]");
    }
    if step.decisions.enter_home == Some(true) {
        s.push_str(" [into home]");
    }
    if let Some((a, b)) = step.decisions.swap {
        s.push_str(&format!(
            " [swap {} <-> {}]",
            Piece::from_seat(a, seat),
            Piece::from_seat(b, seat)
        ));
    }
    format!("{s} => {}", step.state)
}

fn print_text(deal: &Deal, solution: Option<&[SolveStep]>) {
    println!("Board: {}", deal.board);
    println!("Hand:  {}", deal.hand());
    match deal.forced_swap {
        Some(fs) => println!("Swap:  put {} into slot {}", fs.card, fs.slot),
        None => println!("Swap:  none"),
    }
    if let Some(steps) = solution {
        println!("Solution:");
        for step in steps {
            println!("  {}", describe_step(step, deal.board.seat()));
        }
    }
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
    if args.require_trickster {
        catalogue.rules.require_trickster = true;
    }

    let generator = DealGenerator::new(&catalogue)?;
    let mut rng = rng_for_deal(args.seed, args.id);
    let deal = generator.generate(&mut rng);

    let solution = if args.solve {
        let mut solver = Solver::new();
        let steps = solver
            .solve(&deal.board, &deal.repaired_hand())
            .ok_or("generated deal has no solution")?;
        log::info!("[deal] solved in {} nodes", solver.nodes());
        Some(steps)
    } else {
        None
    };

    if args.json {
        let out = serde_json::json!({
            "deal": deal,
            "solution": solution,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_text(&deal, solution.as_deref());
    }
    Ok(())
}
