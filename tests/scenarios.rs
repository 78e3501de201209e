use std::rc::Rc;

use grid_snake::platform::{InputEvent, ManualClock};
use grid_snake::renderer::RecordingRenderer;
use grid_snake::sim::{Direction, Level, Phase};
use grid_snake::{GameConfig, GameEngine, GameLoop};

type Game = GameLoop<RecordingRenderer, ManualClock>;

fn new_game(seed: u64) -> (Game, Rc<ManualClock>, GameConfig) {
    let config = GameConfig::default();
    let clock = Rc::new(ManualClock::new());
    let engine = GameEngine::new(config.clone(), RecordingRenderer::new(), seed).unwrap();
    (GameLoop::new(engine, clock.clone()), clock, config)
}

#[test]
fn wall_collision_ends_run_and_stops_loop() {
    let (game, clock, config) = new_game(1);
    game.dispatch(InputEvent::Start);

    // Head starts in column 5 heading left: five moves reach column 0
    for _ in 0..5 {
        game.dispatch(InputEvent::MoveLeft);
        assert_eq!(game.engine().phase(), Phase::Running);
    }
    assert_eq!(game.engine().state().head().x, config.offset);

    game.dispatch(InputEvent::MoveLeft);
    assert_eq!(game.engine().phase(), Phase::GameOver);
    assert_eq!(game.engine().renderer().texts().last(), Some(&"Game Over!"));

    // The timer armed before the crash fires once and does not re-arm
    clock.advance(10_000.0);
    assert_eq!(clock.pending(), 0);
    assert!(!game.engine().is_armed());
}

#[test]
fn eating_food_grows_and_scores() {
    let (game, clock, config) = new_game(2);
    let food = config.cell_position(config.initial_column - 1, config.initial_row);
    game.engine_mut().state_mut().food = Some(food);

    game.dispatch(InputEvent::Start);
    clock.advance(600.0);

    let engine = game.engine();
    let state = engine.state();
    assert_eq!(state.len(), config.initial_length + 1);
    assert_eq!(state.head(), food);
    assert_eq!(state.score, config.points_per_food);

    let new_food = state.food.unwrap();
    assert_ne!(new_food, food);
    assert!(!state.occupies(new_food));
}

#[test]
fn level_two_interval_applies_to_next_tick() {
    let (game, clock, config) = new_game(3);
    {
        let mut engine = game.engine_mut();
        let state = engine.state_mut();
        state.score = 4;
        state.food = Some(config.cell_position(config.initial_column - 1, config.initial_row));
    }

    game.dispatch(InputEvent::Start);
    assert_eq!(clock.next_due(), Some(600.0));

    clock.advance(600.0);
    assert_eq!(game.engine().state().level, Level::new(2).unwrap());
    assert_eq!(game.engine().state().tick_interval_ms, 550);
    assert_eq!(clock.next_due(), Some(1150.0));
}

#[test]
fn pause_freezes_and_resumes() {
    let (game, clock, _config) = new_game(4);
    game.dispatch(InputEvent::Start);
    clock.advance(600.0);

    game.engine_mut().renderer_mut().clear_calls();
    game.dispatch(InputEvent::Pause);
    let paused = game.engine().state().clone();

    clock.advance(10_000.0);
    assert_eq!(clock.pending(), 0);
    assert_eq!(*game.engine().state(), paused);
    assert_eq!(game.engine().renderer().calls().len(), 1);
    assert_eq!(game.engine().renderer().texts(), vec!["Paused"]);

    game.dispatch(InputEvent::Pause);
    assert_eq!(game.engine().phase(), Phase::Running);
    assert_eq!(clock.pending(), 1);

    clock.advance(600.0);
    let state = game.engine().state().clone();
    assert_eq!(state.direction, paused.direction);
    assert_ne!(state.head(), paused.head());
}

#[test]
fn restart_after_game_over_resets_state() {
    let (game, clock, config) = new_game(5);
    game.dispatch(InputEvent::Start);
    game.dispatch(InputEvent::MoveUp);
    for _ in 0..3 {
        game.dispatch(InputEvent::MoveUp);
    }
    assert_eq!(game.engine().phase(), Phase::GameOver);
    clock.advance(10_000.0);
    assert_eq!(clock.pending(), 0);

    game.dispatch(InputEvent::Start);
    let engine = game.engine();
    let state = engine.state();
    assert_eq!(state.phase, Phase::Running);
    assert_eq!(state.len(), config.initial_length);
    assert_eq!(state.direction, Direction::Left);
    assert_eq!(state.score, 0);
    assert_eq!(state.level, Level::FIRST);
    assert_eq!(state.head(), config.cell_position(config.initial_column, config.initial_row));
    assert!(engine.is_armed());
    assert_eq!(clock.pending(), 1);
}

#[test]
fn directions_ignored_after_game_over() {
    let (game, _clock, _config) = new_game(6);
    game.dispatch(InputEvent::Start);
    game.engine_mut().state_mut().phase = Phase::GameOver;
    let before = game.engine().state().clone();

    for event in [
        InputEvent::MoveUp,
        InputEvent::MoveDown,
        InputEvent::MoveLeft,
        InputEvent::Pause,
    ] {
        game.dispatch(event);
    }
    assert_eq!(*game.engine().state(), before);
}
