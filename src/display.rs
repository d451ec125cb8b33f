use crossterm::style::{style, Color as TermColor, Stylize};
use cube_search::{
    puzzle::{format_moves, Color},
    Move, PuzzleDef, SolveReport, State,
};

pub const RULE: &str = "------------------------------";

/// Writes states to stdout, either as colored cells or as plain letters.
pub struct Painter {
    pub color: bool,
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Red => TermColor::DarkRed,
        Color::Orange => TermColor::Rgb {
            r: 0xfb,
            g: 0x8c,
            b: 0x00,
        },
        Color::Yellow => TermColor::Yellow,
        Color::White => TermColor::White,
        Color::Blue => TermColor::Blue,
        Color::Green => TermColor::DarkGreen,
    }
}

impl Painter {
    pub fn print_state(&self, state: &State) {
        if !self.color {
            print!("{state}");
            return;
        }
        for (face, block) in state.faces() {
            print!("{:<7}", format!("{}:", face.label()));
            for &color in block {
                let cell = style(format!(" {} ", color.symbol()))
                    .with(TermColor::Black)
                    .on(term_color(color));
                print!("{cell}");
            }
            println!();
        }
    }

    /// Replays `moves` from `start`, printing every intermediate state.
    pub fn print_steps(&self, def: &PuzzleDef, start: &State, moves: &[Move]) {
        let mut state = start.clone();
        for (i, &move_) in moves.iter().enumerate() {
            state = def.apply_move(&state, move_);
            println!("{RULE}");
            println!("Move {}: {move_}", i + 1);
            self.print_state(&state);
        }
        println!("{RULE}");
    }
}

pub fn print_report(report: &SolveReport) {
    match &report.solution {
        Some(moves) => {
            println!("Solution found!");
            println!("Moves to solve: {}", format_moves(moves));
            println!("Number of moves: {}", moves.len());
        }
        None => println!("No solution found."),
    }
    println!("Runtime: {:.4} seconds", report.elapsed.as_secs_f64());
}

pub fn print_comparison(reports: &[SolveReport]) {
    println!(
        "{:<9}{:>7}{:>12}{:>12}{:>12}",
        "Strategy", "Moves", "Runtime", "Expanded", "Peak"
    );
    for report in reports {
        let moves = report
            .solution
            .as_ref()
            .map_or_else(|| "-".to_owned(), |moves| moves.len().to_string());
        println!(
            "{:<9}{:>7}{:>11.4}s{:>12}{:>12}",
            report.strategy.to_string(),
            moves,
            report.elapsed.as_secs_f64(),
            report.stats.expanded,
            report.stats.peak_frontier,
        );
    }
    for report in reports {
        if let Some(moves) = &report.solution {
            println!("{}: {}", report.strategy, format_moves(moves));
        }
    }
}
