mod display;

use clap::{Args, Parser, Subcommand};
use cube_search::{
    compare,
    puzzle::{format_moves, parse_moves},
    scramble, scramble_with_thread_rng, Move, SearchConfig, State, Strategy, Variant,
};
use display::{print_comparison, print_report, Painter, RULE};
use rand::{rngs::StdRng, SeedableRng};

/// Scrambles and solves 2x2x2 and 3x3x3 cubes with A*, BFS or IDS
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Print facelets as plain letters instead of colored cells
    #[arg(long, global = true)]
    no_color: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a random scramble and the state it produces
    Scramble {
        /// Which cube: 2x2 or 3x3
        #[arg(long, default_value = "3x3")]
        variant: Variant,
        /// How many random moves to apply
        #[arg(long = "moves", default_value_t = 5)]
        count: usize,
        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Scramble a cube and solve it with one strategy
    Solve {
        #[command(flatten)]
        start: StartArgs,
        /// astar, bfs or ids
        #[arg(long, default_value = "astar")]
        strategy: Strategy,
        /// Deepest limit iterative deepening tries before giving up
        #[arg(long, default_value_t = SearchConfig::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
        /// Print every state along the solution
        #[arg(long)]
        steps: bool,
    },
    /// Scramble a cube and solve it with every strategy
    Compare {
        #[command(flatten)]
        start: StartArgs,
        /// Deepest limit iterative deepening tries before giving up
        #[arg(long, default_value_t = SearchConfig::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
}

#[derive(Args)]
struct StartArgs {
    /// Which cube: 2x2 or 3x3
    #[arg(long, default_value = "3x3")]
    variant: Variant,
    /// Length of the random scramble
    #[arg(long, default_value_t = 2)]
    scramble: usize,
    /// Seed for a reproducible scramble
    #[arg(long)]
    seed: Option<u64>,
    /// Scramble with these moves instead, e.g. "FR LD UL"
    #[arg(long, conflicts_with_all = ["scramble", "seed"])]
    sequence: Option<String>,
}

fn random_scramble(variant: Variant, count: usize, seed: Option<u64>) -> (State, Vec<Move>) {
    let def = variant.def();
    match seed {
        Some(seed) => scramble(def, count, &mut StdRng::seed_from_u64(seed)),
        None => scramble_with_thread_rng(def, count),
    }
}

impl StartArgs {
    fn start(&self, painter: &Painter) -> color_eyre::Result<State> {
        let def = self.variant.def();
        let (state, moves) = match &self.sequence {
            Some(sequence) => {
                let moves = parse_moves(sequence)?;
                (def.apply_moves(def.goal_state(), &moves), moves)
            }
            None => random_scramble(self.variant, self.scramble, self.seed),
        };

        println!("Scramble moves applied: {}", format_moves(&moves));
        println!("{RULE}");
        println!("Scrambled Cube:");
        painter.print_state(&state);
        println!("{RULE}");
        Ok(state)
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();
    let cli = Cli::parse();
    let painter = Painter {
        color: !cli.no_color,
    };

    match cli.command {
        Commands::Scramble {
            variant,
            count,
            seed,
        } => {
            let (state, moves) = random_scramble(variant, count, seed);
            println!("Scramble moves applied: {}", format_moves(&moves));
            painter.print_state(&state);
        }
        Commands::Solve {
            start,
            strategy,
            max_depth,
            steps,
        } => {
            let def = start.variant.def();
            let state = start.start(&painter)?;
            let config = SearchConfig::default().with_max_depth(max_depth);

            println!("\nSolving the cube using {strategy}...");
            let report = strategy.solve(def, &state, &config);
            print_report(&report);

            if steps {
                if let Some(moves) = &report.solution {
                    println!("\nShowing solution states step-by-step:");
                    painter.print_steps(def, &state, moves);
                }
            }
        }
        Commands::Compare { start, max_depth } => {
            let def = start.variant.def();
            let state = start.start(&painter)?;
            let config = SearchConfig::default().with_max_depth(max_depth);
            print_comparison(&compare(def, &state, &config));
        }
    }

    Ok(())
}
