//! End-to-end solving of randomly scrambled cubes.

use rubiks::{optimize, Cube, DefinedMove, Move, Puzzle, SolveError, Solver};

/// Shuffles, solves and drains the path move by move.
fn solve_and_drain(seed: u64, shuffle: usize, optimized: bool) -> Puzzle {
    let mut puzzle = Puzzle::new(3);
    puzzle.set_optimizer(optimized);
    puzzle.shuffle_with(&mut fastrand::Rng::with_seed(seed), shuffle);

    puzzle.solve().unwrap();
    while puzzle.move_to_next_position() {}
    puzzle
}

#[test_log::test]
fn test_shuffled_cubes_are_solved() {
    for seed in 0..120 {
        assert!(solve_and_drain(seed, 20, false).is_solved(), "seed {seed}");
    }
}

#[test_log::test]
fn test_shuffled_cubes_are_solved_with_optimizer() {
    for seed in 1000..1120 {
        assert!(solve_and_drain(seed, 20, true).is_solved(), "seed {seed}");
    }
}

#[test]
fn test_long_scrambles_are_solved() {
    for seed in 500..530 {
        assert!(solve_and_drain(seed, 100, false).is_solved(), "seed {seed}");
    }
}

#[test]
fn test_optimized_path_is_the_optimized_raw_path() {
    let mut rng = fastrand::Rng::with_seed(99);
    for _ in 0..20 {
        let mut cube = Cube::new(3);
        cube.shuffle_with(&mut rng, 20);

        let raw: Vec<DefinedMove> = Solver::new(&cube).solve().unwrap().collect();
        let optimized: Vec<DefinedMove> = Solver::new(&cube)
            .with_optimizer(true)
            .solve()
            .unwrap()
            .collect();
        assert_eq!(optimized, optimize(&raw));
        assert!(optimized.len() <= raw.len());

        for moves in [raw, optimized] {
            let mut replayed = cube.clone();
            replayed.apply_moves(moves);
            assert!(replayed.is_solved());
        }
    }
}

#[test]
fn test_solving_is_deterministic() {
    let mut cube = Cube::new(3);
    cube.shuffle_with(&mut fastrand::Rng::with_seed(4), 20);

    let first: Vec<DefinedMove> = Solver::new(&cube).solve().unwrap().collect();
    let second: Vec<DefinedMove> = Solver::new(&cube).solve().unwrap().collect();
    assert_eq!(first, second);
}

#[test]
fn test_solved_cube_has_empty_path() {
    let mut puzzle = Puzzle::new(3);
    assert_eq!(puzzle.solve(), Ok(0));
    assert!(!puzzle.move_to_next_position());
    assert!(puzzle.is_solved());
}

#[test_log::test]
fn test_other_sizes_are_left_unchanged() {
    for size in [2, 4] {
        let mut puzzle = Puzzle::new(size);
        puzzle.shuffle_with(&mut fastrand::Rng::with_seed(size as u64), 10);
        let before = puzzle.cube().clone();

        assert_eq!(puzzle.solve(), Err(SolveError::UnsupportedSize { size }));
        assert!(!puzzle.move_to_next_position());
        assert_eq!(puzzle.cube(), &before);
    }
}

#[test]
fn test_manual_move_mid_replay_forces_a_new_solve() {
    let mut puzzle = Puzzle::new(3);
    puzzle.shuffle_with(&mut fastrand::Rng::with_seed(77), 20);
    puzzle.solve().unwrap();
    for _ in 0..5 {
        assert!(puzzle.move_to_next_position());
    }

    puzzle.manual_move(DefinedMove::at(Move::Unroll, 1));
    assert!(puzzle.solving_path().is_none());

    // the next step solves again from the current state
    while puzzle.move_to_next_position() {}
    assert!(puzzle.is_solved());
}

#[test]
fn test_concrete_move_laws() {
    let solved = Cube::new(3);

    let mut cube = solved.clone();
    cube.apply_move(DefinedMove::at(Move::Roll, 1));
    cube.apply_move(DefinedMove::at(Move::Unroll, 1));
    assert_eq!(cube, solved);

    let mut three_pitches = solved.clone();
    three_pitches.apply_moves([DefinedMove::at(Move::Pitch, 1); 3]);
    let mut unpitch = solved.clone();
    unpitch.apply_move(DefinedMove::at(Move::Unpitch, 1));
    assert_eq!(three_pitches, unpitch);
}
