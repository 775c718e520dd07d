use std::{fs::File, path::PathBuf};

use stackfall_agent::{Agent, BeamAgent, FeatureWeights, GreedyAgent};
use stackfall_engine::{GameSession, PieceSource};

const DEFAULT_TURN_LIMIT: usize = 1000;
const PROGRESS_INTERVAL: usize = 100;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AutoPlayArg {
    /// Seed for the piece sequence; omit for a random one
    #[arg(long)]
    seed: Option<u64>,
    /// Maximum number of pieces to place
    #[arg(long, default_value_t = DEFAULT_TURN_LIMIT)]
    turn_limit: usize,
    /// Path to a JSON file with evaluator weights
    #[arg(long)]
    weights: Option<PathBuf>,
    /// Use the one-ply greedy agent instead of beam search
    #[arg(long)]
    greedy: bool,
    /// Print the final board
    #[arg(long)]
    show_board: bool,
}

impl Default for AutoPlayArg {
    fn default() -> Self {
        Self {
            seed: None,
            turn_limit: DEFAULT_TURN_LIMIT,
            weights: None,
            greedy: false,
            show_board: false,
        }
    }
}

pub(crate) fn run(arg: &AutoPlayArg) -> anyhow::Result<()> {
    let weights = match &arg.weights {
        Some(path) => serde_json::from_reader(File::open(path)?)?,
        None => FeatureWeights::default(),
    };
    let agent: Box<dyn Agent> = if arg.greedy {
        Box::new(GreedyAgent::new(weights))
    } else {
        Box::new(BeamAgent::new(weights))
    };
    let source = match arg.seed {
        Some(seed) => PieceSource::with_seed(seed),
        None => PieceSource::new(),
    };

    let mut session = GameSession::new(source);
    let mut topped_out = false;
    for turn in 0..arg.turn_limit {
        let Ok(chosen) = agent.select_best_move(session.board(), session.current(), session.next())
        else {
            topped_out = true;
            break;
        };
        session.lock_piece(chosen.rotation, chosen.x)?;

        if (turn + 1) % PROGRESS_INTERVAL == 0 {
            let stats = session.stats();
            eprintln!(
                "turn {}: score {}, lines {}",
                turn + 1,
                stats.score(),
                stats.total_cleared_lines()
            );
        }
    }

    let stats = session.stats();
    if topped_out {
        println!("topped out after {} pieces", stats.completed_pieces());
    } else {
        println!("turn limit reached ({} pieces)", stats.completed_pieces());
    }
    println!("score: {}", stats.score());
    println!("lines cleared: {}", stats.total_cleared_lines());
    let counter = stats.line_cleared_counter();
    println!(
        "clears: {} singles, {} doubles, {} triples, {} quads",
        counter[1], counter[2], counter[3], counter[4]
    );
    if arg.show_board {
        print!("{}", session.board());
    }
    Ok(())
}
