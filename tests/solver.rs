use cube_search::{
    compare,
    puzzle::parse_moves,
    scramble, Move, PuzzleDef, SearchConfig, State, Strategy, Variant,
};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

fn scrambled(def: &PuzzleDef, sequence: &str) -> State {
    def.apply_moves(def.goal_state(), &parse_moves(sequence).unwrap())
}

fn solution_len(def: &PuzzleDef, start: &State, strategy: Strategy) -> usize {
    let report = strategy.solve(def, start, &SearchConfig::default());
    assert!(report.verify(def, start), "{strategy} failed to solve");
    report.solution.unwrap().len()
}

#[test_log::test]
fn test_goal_is_solved_by_the_empty_sequence() {
    for variant in Variant::ALL {
        let def = variant.def();
        for strategy in Strategy::ALL {
            let report = strategy.solve(def, def.goal_state(), &SearchConfig::default());
            assert_eq!(report.solution, Some(vec![]), "{variant} {strategy}");
            assert_eq!(report.strategy, strategy);
        }
    }
}

#[test_log::test]
fn test_single_front_turn_is_undone_by_its_inverse() {
    let def = Variant::Cube3.def();
    let start = def.apply_move(def.goal_state(), "FR".parse().unwrap());
    let config = SearchConfig::default();

    for strategy in [Strategy::BreadthFirst, Strategy::IterativeDeepening] {
        let report = strategy.solve(def, &start, &config);
        assert_eq!(report.solution, Some(vec![Move::FrontLeft]), "{strategy}");
    }

    let report = Strategy::BestFirst.solve(def, &start, &config);
    assert!(report.verify(def, &start));
}

#[test_log::test]
fn test_breadth_first_can_beat_the_scramble_length() {
    // FR three times is FL.
    let def = Variant::Cube3.def();
    let start = scrambled(def, "FR FR FR UR");
    assert_eq!(solution_len(def, &start, Strategy::BreadthFirst), 2);
    assert_eq!(solution_len(def, &start, Strategy::IterativeDeepening), 2);
}

#[test_log::test]
fn test_known_distances() {
    let cases = [
        (Variant::Cube3, "DL FR RD DR", 4),
        (Variant::Cube3, "UL DL LD FL", 4),
        (Variant::Cube3, "LD RU", 2),
        (Variant::Cube2, "RU DL LD", 3),
        (Variant::Cube2, "UR UL FL UL UL RD", 4),
    ];
    for (variant, sequence, distance) in cases {
        let def = variant.def();
        let start = scrambled(def, sequence);
        let breadth_first = solution_len(def, &start, Strategy::BreadthFirst);
        let iterative = solution_len(def, &start, Strategy::IterativeDeepening);
        info!("{variant} [{sequence}]: BFS {breadth_first}, IDS {iterative}");
        assert_eq!(breadth_first, distance, "{variant} {sequence}");
        assert_eq!(iterative, distance, "{variant} {sequence}");
    }
}

#[test_log::test]
fn test_breadth_first_is_minimal() {
    let mut rng = StdRng::seed_from_u64(2024);
    for variant in Variant::ALL {
        let def = variant.def();
        for _ in 0..4 {
            let (start, moves) = scramble(def, 3, &mut rng);
            let length = solution_len(def, &start, Strategy::BreadthFirst);
            assert!(length <= moves.len());

            // Nothing shorter exists: a search capped one move short gives up.
            if length > 0 {
                let capped = SearchConfig::default().with_max_depth(length - 1);
                let report = Strategy::IterativeDeepening.solve(def, &start, &capped);
                assert_eq!(report.solution, None, "{variant} {moves:?}");
            }
        }
    }
}

#[test_log::test]
fn test_iterative_deepening_agrees_with_breadth_first() {
    let mut rng = StdRng::seed_from_u64(99);
    for variant in Variant::ALL {
        let def = variant.def();
        for length in [1, 2, 3, 3, 4] {
            let (start, _) = scramble(def, length, &mut rng);
            assert_eq!(
                solution_len(def, &start, Strategy::BreadthFirst),
                solution_len(def, &start, Strategy::IterativeDeepening),
            );
        }
    }
}

#[test_log::test]
fn test_every_strategy_solves_random_scrambles() {
    let mut rng = StdRng::seed_from_u64(1);
    for variant in Variant::ALL {
        let def = variant.def();
        for _ in 0..5 {
            let (start, moves) = scramble(def, 3, &mut rng);
            for strategy in Strategy::ALL {
                let report = strategy.solve(def, &start, &SearchConfig::default());
                assert!(report.verify(def, &start), "{variant} {strategy} {moves:?}");
            }
        }
    }
}

#[test_log::test]
fn test_best_first_is_never_shorter_than_breadth_first() {
    let mut rng = StdRng::seed_from_u64(7);
    for variant in Variant::ALL {
        let def = variant.def();
        for _ in 0..4 {
            let (start, _) = scramble(def, 3, &mut rng);
            let best_first = solution_len(def, &start, Strategy::BestFirst);
            let breadth_first = solution_len(def, &start, Strategy::BreadthFirst);
            assert!(best_first >= breadth_first);
        }
    }
}

#[test_log::test]
fn test_depth_ceiling_reports_no_solution() {
    let def = Variant::Cube2.def();
    let start = scrambled(def, "RU DL LD");
    let config = SearchConfig::default().with_max_depth(2);
    let report = Strategy::IterativeDeepening.solve(def, &start, &config);
    assert_eq!(report.solution, None);
    assert!(!report.verify(def, &start));
    assert_eq!(report.stats.deepest_limit, Some(2));
}

#[test_log::test]
fn test_huge_depth_ceiling_is_harmless() {
    let def = Variant::Cube2.def();
    let start = def.apply_move(def.goal_state(), Move::FrontRight);
    let config = SearchConfig::default().with_max_depth(usize::MAX);
    let report = Strategy::IterativeDeepening.solve(def, &start, &config);
    assert_eq!(report.solution, Some(vec![Move::FrontLeft]));
}

#[test_log::test]
fn test_stats_are_recorded() {
    let def = Variant::Cube3.def();
    let start = scrambled(def, "LD RU");
    for strategy in Strategy::ALL {
        let report = strategy.solve(def, &start, &SearchConfig::default());
        assert!(report.stats.expanded > 0, "{strategy}");
        assert!(report.stats.generated >= report.stats.expanded, "{strategy}");
        assert!(report.stats.peak_frontier > 0, "{strategy}");
        assert_eq!(
            report.stats.deepest_limit.is_some(),
            strategy == Strategy::IterativeDeepening
        );
    }
}

#[test_log::test]
fn test_compare_runs_every_strategy_in_order() {
    let def = Variant::Cube2.def();
    let start = scrambled(def, "FR LD");
    let reports = compare(def, &start, &SearchConfig::default());
    let strategies: Vec<Strategy> = reports.iter().map(|report| report.strategy).collect();
    assert_eq!(strategies, Strategy::ALL);
    for report in &reports {
        assert!(report.verify(def, &start), "{}", report.strategy);
    }
    assert_eq!(reports[1].solution.as_ref().map(Vec::len), Some(2));
    assert_eq!(reports[2].solution.as_ref().map(Vec::len), Some(2));
}
