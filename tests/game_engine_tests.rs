use twenty48::{
    Board, BoardError, GameEngine, GameError, GameState, GameStatus, Grid, ScriptedSource,
    TileSpawn,
};

fn playing(grid: Grid, samples: &'static [f64]) -> GameEngine<ScriptedSource<'static>> {
    let state = GameState {
        board: Board::from_grid(grid).unwrap(),
        score: 0,
        status: GameStatus::Playing,
    };
    GameEngine::from_state(state, ScriptedSource::new(samples))
}

/// Full board where a left slide frees exactly one cell, at (0, 3).
const ONE_MERGE_LEFT: Grid = [
    [4, 4, 16, 4],
    [2, 4, 8, 16],
    [8, 16, 4, 2],
    [2, 4, 8, 16],
];

#[test]
fn test_new_engine_is_idle() {
    let engine = GameEngine::seeded(1);
    assert_eq!(engine.status(), GameStatus::Idle);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.grid(), [[0; 4]; 4]);
}

#[test]
fn test_idle_engine_rejects_moves_and_spawns() {
    let mut engine = GameEngine::seeded(1);
    assert_eq!(
        engine.slide_left().unwrap_err(),
        GameError::InvalidState {
            status: GameStatus::Idle
        }
    );
    assert_eq!(
        engine.add_random_tile().unwrap_err(),
        GameError::InvalidState {
            status: GameStatus::Idle
        }
    );
    assert_eq!(engine.grid(), [[0; 4]; 4]);
}

#[test]
fn test_with_grid_validates_and_stays_idle() {
    let engine = GameEngine::with_grid(ONE_MERGE_LEFT, ScriptedSource::new(&[])).unwrap();
    assert_eq!(engine.status(), GameStatus::Idle);
    assert_eq!(engine.grid(), ONE_MERGE_LEFT);

    let mut grid = ONE_MERGE_LEFT;
    grid[0][0] = 5;
    assert!(matches!(
        GameEngine::with_grid(grid, ScriptedSource::new(&[])),
        Err(BoardError::InvalidTile { row: 0, col: 0, value: 5 })
    ));
}

#[test]
fn test_start_places_two_tiles() {
    for seed in 0..50 {
        let mut engine = GameEngine::seeded(seed);
        engine.start().unwrap();
        let board = engine.board();
        assert_eq!(engine.status(), GameStatus::Playing);
        assert_eq!(engine.score(), 0);
        assert_eq!(board.tile_count(), 2, "seed {}", seed);
        for (r, c) in board.occupied_cells().cells() {
            let v = board.get(r, c).unwrap();
            assert!(v == 2 || v == 4, "seed {}: unexpected tile {}", seed, v);
        }
    }
}

#[test]
fn test_start_with_fixed_source_fills_first_cells() {
    let mut engine = GameEngine::new(ScriptedSource::new(&[0.0]));
    engine.start().unwrap();
    assert_eq!(
        engine.grid(),
        [
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]
    );
}

#[test]
fn test_spawn_uses_first_empty_cell_for_low_samples() {
    let mut engine = playing(
        [
            [2, 0, 4, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ],
        &[0.0],
    );
    let spawn = engine.add_random_tile().unwrap();
    assert_eq!(
        spawn,
        TileSpawn {
            row: 0,
            col: 1,
            value: 2
        }
    );
    assert_eq!(engine.grid()[0], [2, 2, 4, 0]);
}

#[test]
fn test_spawn_high_samples_pick_last_cell_and_four() {
    let mut engine = playing([[0; 4]; 4], &[0.99, 0.95]);
    let spawn = engine.add_random_tile().unwrap();
    assert_eq!(
        spawn,
        TileSpawn {
            row: 3,
            col: 3,
            value: 4
        }
    );
}

#[test]
fn test_spawn_probability_threshold() {
    let mut engine = playing([[0; 4]; 4], &[0.0, 0.9]);
    assert_eq!(engine.add_random_tile().unwrap().value, 4);

    let mut engine = playing([[0; 4]; 4], &[0.0, 0.8999]);
    assert_eq!(engine.add_random_tile().unwrap().value, 2);
}

#[test]
fn test_slide_accumulates_score() {
    let mut engine = playing(
        [
            [2, 2, 2, 2],
            [0, 0, 0, 0],
            [4, 0, 0, 4],
            [0, 0, 0, 0],
        ],
        &[0.0],
    );
    assert!(engine.slide_left().unwrap());
    assert_eq!(engine.score(), 16);
    assert_eq!(engine.grid()[0], [4, 4, 0, 0]);
    assert_eq!(engine.grid()[2], [8, 0, 0, 0]);

    let outcome = engine.slide(twenty48::Direction::Left).unwrap();
    assert!(outcome.moved);
    assert_eq!(outcome.gained, 8);
    assert_eq!(engine.score(), 24);
}

#[test]
fn test_unmoved_slide_keeps_board_and_score() {
    let grid = [
        [2, 4, 0, 0],
        [8, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ];
    let mut engine = playing(grid, &[0.0]);
    assert!(!engine.slide_left().unwrap());
    assert!(!engine.slide_up().unwrap());
    assert_eq!(engine.grid(), grid);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.status(), GameStatus::Playing);

    assert!(engine.slide_right().unwrap());
    assert!(engine.slide_down().unwrap());
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_reaching_2048_wins() {
    let mut engine = playing(
        [
            [1024, 1024, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ],
        &[0.0],
    );
    assert!(engine.slide_left().unwrap());
    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(engine.score(), 2048);

    assert_eq!(
        engine.slide_right().unwrap_err(),
        GameError::InvalidState {
            status: GameStatus::Won
        }
    );
    // The presentation layer may still spawn after the winning slide.
    engine.add_random_tile().unwrap();
    assert_eq!(engine.status(), GameStatus::Won);
}

#[test]
fn test_last_spawn_loses() {
    let mut engine = playing(ONE_MERGE_LEFT, &[0.0]);
    assert_eq!(engine.status(), GameStatus::Playing);

    assert!(engine.slide_left().unwrap());
    assert_eq!(engine.score(), 8);
    assert_eq!(engine.status(), GameStatus::Playing);

    let spawn = engine.add_random_tile().unwrap();
    assert_eq!((spawn.row, spawn.col, spawn.value), (0, 3, 2));
    assert_eq!(engine.grid()[0], [8, 16, 4, 2]);
    assert_eq!(engine.status(), GameStatus::Lost);

    assert_eq!(
        engine.slide_up().unwrap_err(),
        GameError::InvalidState {
            status: GameStatus::Lost
        }
    );
    assert_eq!(engine.add_random_tile().unwrap_err(), GameError::NoEmptyCell);
}

#[test]
fn test_restart_resets_score_and_board() {
    let mut engine = playing(ONE_MERGE_LEFT, &[0.0]);
    engine.slide_left().unwrap();
    engine.add_random_tile().unwrap();
    assert_eq!(engine.status(), GameStatus::Lost);

    engine.restart().unwrap();
    assert_eq!(engine.status(), GameStatus::Playing);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.board().tile_count(), 2);
}

#[test]
fn test_from_state_reclassifies() {
    let state = GameState {
        board: Board::from_grid(ONE_MERGE_LEFT).unwrap(),
        score: 40,
        status: GameStatus::Lost,
    };
    let engine = GameEngine::from_state(state, ScriptedSource::new(&[]));
    assert_eq!(engine.status(), GameStatus::Playing);
    assert_eq!(engine.score(), 40);

    let idle = GameState {
        status: GameStatus::Idle,
        ..state
    };
    let engine = GameEngine::from_state(idle, ScriptedSource::new(&[]));
    assert_eq!(engine.status(), GameStatus::Idle);
    assert_eq!(engine.state(), idle);
}

#[test]
fn test_accessors_return_copies() {
    let mut engine = GameEngine::seeded(9);
    engine.start().unwrap();
    let before = engine.grid();

    let mut grid = engine.grid();
    grid[0][0] = 1024;
    let mut board = engine.board();
    board.set(3, 3, 2048).unwrap();

    assert_eq!(engine.grid(), before);
    assert_eq!(engine.status(), GameStatus::Playing);
}

#[test]
fn test_engines_do_not_share_state() {
    let mut a = GameEngine::seeded(42);
    let mut b = GameEngine::seeded(42);
    a.start().unwrap();
    b.start().unwrap();
    assert_eq!(a.state(), b.state());

    let b_before = b.state();
    a.add_random_tile().unwrap();
    a.slide_left().unwrap();
    assert_ne!(a.state(), b_before);
    assert_eq!(b.board().tile_count(), 2);
    assert_eq!(b.state(), b_before);
}

#[test]
fn test_each_spawn_draws_two_samples() {
    let mut engine = GameEngine::new(ScriptedSource::new(&[0.0]));
    engine.start().unwrap();
    assert_eq!(engine.source_mut().drawn(), 4);

    assert!(engine.slide_right().unwrap());
    assert_eq!(engine.source_mut().drawn(), 4);

    engine.add_random_tile().unwrap();
    assert_eq!(engine.source_mut().drawn(), 6);
}
