use battle_command::{AttackOutcome, CellState, GameEngine, GameError, PlayerId};

/// Sink sequence on P1_Destroyer at [(0,1),(1,1),(2,1)], with Player 1
/// making throwaway misses in between because the turn alternates.
#[test]
fn sinking_a_ship_credits_each_hit_once() {
    let mut engine = GameEngine::new();

    // P1 misses on open water, handing the turn to P2
    assert_eq!(engine.attack(4, 0).unwrap().outcome, AttackOutcome::Miss);
    assert_eq!(engine.current_player(), PlayerId::Two);

    let report = engine.attack(0, 1).unwrap();
    assert_eq!(report.outcome, AttackOutcome::Hit("P1_Destroyer".into()));
    assert!(!report.game_over);
    assert_eq!(
        engine
            .fleet(PlayerId::One)
            .get("P1_Destroyer")
            .unwrap()
            .hits(),
        1
    );

    assert_eq!(engine.attack(4, 1).unwrap().outcome, AttackOutcome::Miss);
    assert_eq!(
        engine.attack(1, 1).unwrap().outcome,
        AttackOutcome::Hit("P1_Destroyer".into())
    );
    assert_eq!(engine.attack(4, 2).unwrap().outcome, AttackOutcome::Miss);

    let report = engine.attack(2, 1).unwrap();
    assert_eq!(report.outcome, AttackOutcome::Sunk("P1_Destroyer".into()));
    assert!(!report.game_over, "P1_Submarine is still afloat");
    assert_eq!(report.winner, None);

    let destroyer = engine.fleet(PlayerId::One).get("P1_Destroyer").unwrap();
    assert!(destroyer.is_sunk());
    assert_eq!(destroyer.hits(), 3);
    assert!(!engine.fleet(PlayerId::One).is_destroyed());
    assert_eq!(engine.current_player(), PlayerId::One);
}

#[test]
fn attacking_a_revealed_cell_is_rejected_without_state_change() {
    let mut engine = GameEngine::new();

    assert_eq!(engine.attack(4, 4).unwrap().outcome, AttackOutcome::Miss);
    // P2's reply puts P1 back on turn
    engine.attack(0, 4).unwrap();
    assert_eq!(engine.current_player(), PlayerId::One);

    let before = engine.state();
    assert_eq!(
        engine.attack(4, 4).unwrap_err(),
        GameError::AlreadyRevealed { row: 4, col: 4 }
    );
    assert_eq!(engine.state(), before);
    assert_eq!(engine.current_player(), PlayerId::One);
}

#[test]
fn attack_out_of_bounds_is_rejected() {
    let mut engine = GameEngine::new();
    let before = engine.state();
    assert_eq!(
        engine.attack(5, 0).unwrap_err(),
        GameError::OutOfBounds { row: 5, col: 0 }
    );
    assert_eq!(engine.state(), before);
}

/// Destroy P2's fleet entirely; the winner is reported exactly once and all
/// mutating calls after the terminal move are rejected.
#[test]
fn destroying_a_fleet_ends_the_game_with_the_attacker_as_winner() {
    let mut engine = GameEngine::new();
    let p2_cells = [(1, 3), (2, 3), (3, 3), (0, 0), (0, 1)];
    let p1_safe = [(0, 2), (0, 3), (0, 4), (3, 0)];

    let mut winner_reports = 0;
    for (i, &(r, c)) in p2_cells.iter().enumerate() {
        let report = engine.attack(r, c).unwrap();
        assert_eq!(report.attacker, PlayerId::One);
        if report.winner.is_some() {
            winner_reports += 1;
        }
        if i < p2_cells.len() - 1 {
            // P2 replies with a miss to give the turn back
            let (mr, mc) = p1_safe[i];
            assert_eq!(engine.attack(mr, mc).unwrap().outcome, AttackOutcome::Miss);
        }
    }

    assert_eq!(winner_reports, 1);
    assert!(engine.is_game_over());
    assert_eq!(engine.winner(), Some(PlayerId::One));
    assert!(engine.fleet(PlayerId::Two).is_destroyed());
    // the turn does not advance past the winning move
    assert_eq!(engine.current_player(), PlayerId::One);

    assert_eq!(engine.attack(4, 4).unwrap_err(), GameError::GameAlreadyOver);
    assert_eq!(engine.toggle_fortify().unwrap_err(), GameError::GameAlreadyOver);
    assert_eq!(
        engine.fortify_click(0, 1).unwrap_err(),
        GameError::GameAlreadyOver
    );
}

#[test]
fn reset_restores_the_initial_layout_exactly() {
    let mut engine = GameEngine::new();
    engine.attack(1, 3).unwrap();
    engine.attack(0, 1).unwrap();
    engine.toggle_fortify().unwrap();
    engine.fortify_click(4, 3).unwrap();

    engine.reset();
    assert_eq!(engine.state(), GameEngine::new().state());
    assert_eq!(engine.current_player(), PlayerId::One);
    assert!(!engine.is_game_over());
    assert!(!engine.fortify_mode());
}

#[test]
fn state_snapshot_round_trips() {
    let mut engine = GameEngine::new();
    engine.attack(1, 3).unwrap();
    engine.attack(4, 3).unwrap();

    let state = engine.state();
    let restored = GameEngine::from_state(state.clone());
    assert_eq!(restored.state(), state);
    assert_eq!(restored.current_player(), engine.current_player());
}

#[test]
fn miss_and_hit_are_recorded_on_the_defender_board() {
    let mut engine = GameEngine::new();
    engine.attack(4, 0).unwrap();
    assert_eq!(
        engine.board(PlayerId::Two).cell(4, 0).unwrap(),
        CellState::Miss
    );

    engine.attack(0, 1).unwrap();
    assert_eq!(
        engine.board(PlayerId::One).cell(0, 1).unwrap(),
        CellState::Hit
    );
}

#[test]
fn status_message_tracks_the_last_move() {
    let mut engine = GameEngine::new();
    assert!(engine.status_message().is_empty());
    engine.attack(4, 0).unwrap();
    assert!(engine.status_message().contains("missed"));
    engine.attack(0, 1).unwrap();
    assert!(engine.status_message().contains("P1_Destroyer"));
}
