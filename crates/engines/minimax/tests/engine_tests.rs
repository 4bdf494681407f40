use chess_core::{legal_moves, Board, Engine};
use minimax_engine::{Algorithm, EvalWeights, MinimaxEngine, SearchConfig, Strength, MATE};

#[test]
fn test_engine_reports_for_side_to_move() {
    let board = Board::from_fen("6k1/5ppp/8/8/7q/5N2/5PPP/4R1K1 w - - 0 1").unwrap();
    for algorithm in [Algorithm::Minimax, Algorithm::Negamax] {
        let mut engine = MinimaxEngine::new(SearchConfig {
            algorithm,
            ..SearchConfig::default()
        });
        let result = engine.search(&board, 2);
        assert_eq!(result.best_move.map(|m| m.to_string()).as_deref(), Some("e1e8"));
        assert_eq!(result.score, MATE - 1);
    }
}

#[test]
fn test_engine_self_play_stays_legal() {
    let mut engine = MinimaxEngine::default();
    let mut board = Board::startpos();
    for _ in 0..8 {
        let result = engine.search(&board, Strength::Weak.depth());
        let Some(mv) = result.best_move else {
            break;
        };
        assert!(legal_moves(&board).contains(&mv));
        board.apply(mv).unwrap();
    }
    assert!(board.fullmove_number() >= 4);
}

#[test]
fn test_engine_names() {
    let minimax = MinimaxEngine::new(SearchConfig {
        algorithm: Algorithm::Minimax,
        ..SearchConfig::default()
    });
    assert!(minimax.name().starts_with("Minimax"));
    assert!(MinimaxEngine::default().name().starts_with("Negamax"));
}

#[test]
fn test_strength_depths() {
    assert_eq!(Strength::Weak.depth(), 2);
    assert_eq!(Strength::Strong.depth(), 5);
    assert_eq!(Strength::Custom(3).depth(), 3);
    assert_eq!(Strength::Custom(0).depth(), 1);
}

#[test]
fn test_search_config_from_toml() {
    let config: SearchConfig = toml::from_str(
        r#"
        algorithm = "minimax"
        alpha_beta = false

        [weights]
        mobility = 0
        king_shield = 20
        "#,
    )
    .unwrap();
    assert_eq!(config.algorithm, Algorithm::Minimax);
    assert!(!config.alpha_beta);
    assert_eq!(
        config.weights,
        EvalWeights {
            mobility: 0,
            king_shield: 20
        }
    );

    let defaults: SearchConfig = toml::from_str("").unwrap();
    assert_eq!(defaults, SearchConfig::default());
}

#[test]
fn test_strength_from_toml() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        strength: Strength,
    }
    let weak: Wrapper = toml::from_str(r#"strength = "weak""#).unwrap();
    assert_eq!(weak.strength, Strength::Weak);
    let custom: Wrapper = toml::from_str("strength = { custom = 4 }").unwrap();
    assert_eq!(custom.strength, Strength::Custom(4));
}
