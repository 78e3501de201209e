//! Game engine and timer-driven loop
//!
//! `GameEngine` owns the state, the RNG and the renderer and knows how to
//! tick and redraw. `GameLoop` shares the engine with the clock and input
//! callbacks and decides when ticks happen.
//!
//! Everything runs on one thread. Each callback borrows the engine, finishes
//! and releases it before handing anything to the clock, so a clock tick and
//! an input tick never interleave. At most one timer is armed at a time; a
//! timer that fires outside `Running` does nothing and does not re-arm, which
//! is how pausing and game over stop the loop.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::fps::FpsCounter;
use crate::platform::{FrameClock, InputEvent};
use crate::renderer::{Renderer, scene};
use crate::sim::{Direction, GameState, Phase, TickOutcome, tick};

/// Simulation plus presentation
pub struct GameEngine<R: Renderer> {
    config: GameConfig,
    state: GameState,
    rng: Pcg32,
    renderer: R,
    fps: FpsCounter,
    /// A timer callback is scheduled and has not fired yet
    armed: bool,
}

impl<R: Renderer> GameEngine<R> {
    /// Validate `config` and build a fresh game seeded with `seed`
    pub fn new(config: GameConfig, renderer: R, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(&config, &mut rng);
        log::info!(
            "Game created: {}x{} cells, seed {}",
            config.columns,
            config.rows,
            seed
        );

        Ok(Self {
            config,
            state,
            rng,
            renderer,
            fps: FpsCounter::new(),
            armed: false,
        })
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Test hook for setting up scenarios. Game code never mutates the
    /// state from outside the engine.
    #[doc(hidden)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// One tick followed by a redraw
    pub fn invalidate(&mut self, input: Option<Direction>, now_ms: f64) -> TickOutcome {
        let before = self.state.level;
        let outcome = tick(&mut self.state, input, &self.config, &mut self.rng);

        match outcome {
            TickOutcome::Crashed(collision) => {
                log::info!(
                    "Game over ({:?}): score {}, level {}",
                    collision,
                    self.state.score,
                    self.state.level.get()
                );
            }
            TickOutcome::BoardFull => {
                log::info!("Board full: score {}", self.state.score);
            }
            TickOutcome::Ate { leveled_up } => {
                log::debug!("Food eaten, score {}, next food {:?}", self.state.score, self.state.food);
                if leveled_up {
                    log::info!(
                        "Level {} -> {}, tick {}ms",
                        before.get(),
                        self.state.level.get(),
                        self.state.tick_interval_ms
                    );
                }
            }
            TickOutcome::Moved | TickOutcome::Idle => {}
        }

        self.fps.record(now_ms);
        self.redraw();
        outcome
    }

    /// Draw the screen for the current phase
    pub fn redraw(&mut self) {
        scene::draw(&mut self.renderer, &self.state, &self.config, self.fps.fps());
    }

    /// Start command. Resets the game after game over; refused while paused.
    /// Returns whether the loop should be (re)started.
    pub fn start(&mut self) -> bool {
        match self.state.phase {
            Phase::Paused => {
                log::trace!("Start ignored while paused");
                false
            }
            Phase::GameOver => {
                self.state = GameState::new(&self.config, &mut self.rng);
                log::info!("Game restarted");
                self.redraw();
                true
            }
            Phase::Running => {
                if !self.armed {
                    self.redraw();
                }
                true
            }
        }
    }

    /// Pause command. Returns whether the phase changed.
    pub fn toggle_pause(&mut self) -> bool {
        self.state.phase = match self.state.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::GameOver => return false,
        };
        log::info!("Phase -> {:?}", self.state.phase);
        if self.state.is_running() {
            // Replace the banner right away, the next tick may be a full interval off
            self.redraw();
        }
        true
    }

    /// Whether a move command would be acted on right now
    pub fn accepts(&self, dir: Direction) -> bool {
        self.state.is_running() && !dir.is_reverse_of(self.state.direction)
    }
}

/// Drives a `GameEngine` from a clock and an input stream
pub struct GameLoop<R: Renderer, C: FrameClock> {
    engine: Rc<RefCell<GameEngine<R>>>,
    clock: Rc<C>,
}

impl<R: Renderer, C: FrameClock> Clone for GameLoop<R, C> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            clock: self.clock.clone(),
        }
    }
}

impl<R: Renderer + 'static, C: FrameClock + 'static> GameLoop<R, C> {
    pub fn new(engine: GameEngine<R>, clock: Rc<C>) -> Self {
        Self {
            engine: Rc::new(RefCell::new(engine)),
            clock,
        }
    }

    pub fn engine(&self) -> Ref<'_, GameEngine<R>> {
        self.engine.borrow()
    }

    pub fn engine_mut(&self) -> RefMut<'_, GameEngine<R>> {
        self.engine.borrow_mut()
    }

    /// Loop driver. Outside `Running` this draws the static screen and
    /// returns; otherwise it arms a timer for the current tick interval,
    /// unless one is already armed.
    pub fn render(&self) {
        let delay = {
            let mut engine = self.engine.borrow_mut();
            if engine.phase() != Phase::Running {
                engine.redraw();
                return;
            }
            if engine.armed {
                return;
            }
            engine.armed = true;
            engine.state.tick_interval_ms
        };

        let handle = self.clone();
        self.clock
            .schedule_once(Box::new(move || handle.on_timer()), delay);
    }

    fn on_timer(&self) {
        let still_running = {
            let mut engine = self.engine.borrow_mut();
            engine.armed = false;
            if engine.phase() != Phase::Running {
                // Cancelled by pause or game over
                return;
            }
            engine.invalidate(None, self.clock.now_ms());
            engine.phase() == Phase::Running
        };

        if still_running {
            self.render();
        }
    }

    /// Handle one player command
    pub fn dispatch(&self, event: InputEvent) {
        match event {
            InputEvent::Start => {
                if self.engine.borrow_mut().start() {
                    self.render();
                }
            }
            InputEvent::Pause => {
                if self.engine.borrow_mut().toggle_pause() {
                    self.render();
                }
            }
            _ => {
                let Some(dir) = event.direction() else {
                    return;
                };
                let now = self.clock.now_ms();
                let mut engine = self.engine.borrow_mut();
                if !engine.accepts(dir) {
                    log::trace!("Ignored {:?} in {:?}", event, engine.phase());
                    return;
                }
                // Player input ticks immediately instead of waiting for the timer
                engine.invalidate(Some(dir), now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ManualClock;
    use crate::renderer::RecordingRenderer;

    fn game() -> (GameLoop<RecordingRenderer, ManualClock>, Rc<ManualClock>) {
        let clock = Rc::new(ManualClock::new());
        let engine = GameEngine::new(GameConfig::default(), RecordingRenderer::new(), 42).unwrap();
        (GameLoop::new(engine, clock.clone()), clock)
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = GameConfig {
            cell_size: -1,
            ..Default::default()
        };
        assert!(matches!(
            GameEngine::new(config, RecordingRenderer::new(), 1),
            Err(ConfigError::NonPositiveCellSize(-1))
        ));
    }

    #[test]
    fn test_start_arms_one_timer() {
        let (game, clock) = game();
        game.dispatch(InputEvent::Start);
        game.dispatch(InputEvent::Start);
        assert_eq!(clock.pending(), 1);
        assert!(game.engine().is_armed());

        let head = game.engine().state().head();
        clock.advance(600.0);
        assert_eq!(game.engine().state().head(), head - glam::IVec2::new(25, 0));
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn test_move_ticks_immediately() {
        let (game, clock) = game();
        game.dispatch(InputEvent::Start);
        let head = game.engine().state().head();

        game.dispatch(InputEvent::MoveUp);
        assert_eq!(game.engine().state().head(), head - glam::IVec2::new(0, 25));
        assert_eq!(game.engine().state().direction, Direction::Up);
        // The scheduled tick is unaffected
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn test_reverse_move_dropped() {
        let (game, _clock) = game();
        game.dispatch(InputEvent::Start);
        let before = game.engine().state().clone();

        game.dispatch(InputEvent::MoveRight);
        assert_eq!(*game.engine().state(), before);
    }

    #[test]
    fn test_start_while_running_keeps_game() {
        let (game, clock) = game();
        game.dispatch(InputEvent::Start);
        clock.advance(600.0);
        game.dispatch(InputEvent::MoveUp);
        let before = game.engine().state().clone();
        assert_eq!(before.phase, Phase::Running);

        game.dispatch(InputEvent::Start);
        let engine = game.engine();
        assert_eq!(engine.state().body, before.body);
        assert_eq!(engine.state().score, before.score);
        assert_eq!(engine.state().food, before.food);
        assert_eq!(*engine.state(), before);
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn test_unpause_redraws_immediately() {
        let (game, clock) = game();
        game.dispatch(InputEvent::Start);
        clock.advance(600.0);
        game.dispatch(InputEvent::Pause);
        clock.advance(5_000.0);

        game.engine_mut().renderer_mut().clear_calls();
        game.dispatch(InputEvent::Pause);

        let engine = game.engine();
        assert_eq!(engine.renderer().frame_count(), 1);
        assert!(!engine.renderer().texts().contains(&"Paused"));
        assert!(engine.renderer().texts().iter().any(|t| t.starts_with("Score:")));
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn test_fps_follows_tick_rate() {
        let (game, clock) = game();
        game.dispatch(InputEvent::Start);
        assert_eq!(game.engine().fps(), 0);

        // Two timer ticks 600ms apart
        clock.advance(1_200.0);
        assert_eq!(game.engine().fps(), 2);
    }

    #[test]
    fn test_moves_ignored_while_paused() {
        let (game, _clock) = game();
        game.dispatch(InputEvent::Start);
        game.dispatch(InputEvent::Pause);
        let before = game.engine().state().clone();

        game.dispatch(InputEvent::MoveUp);
        assert_eq!(*game.engine().state(), before);
        assert_eq!(game.engine().phase(), Phase::Paused);
    }

    #[test]
    fn test_start_refused_while_paused() {
        let (game, _clock) = game();
        game.dispatch(InputEvent::Start);
        game.dispatch(InputEvent::Pause);
        game.dispatch(InputEvent::Start);
        assert_eq!(game.engine().phase(), Phase::Paused);
    }

    #[test]
    fn test_quick_unpause_keeps_single_loop() {
        let (game, clock) = game();
        game.dispatch(InputEvent::Start);
        game.dispatch(InputEvent::Pause);
        game.dispatch(InputEvent::Pause);
        assert_eq!(clock.pending(), 1);

        clock.advance(600.0);
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn test_pause_ignored_after_game_over() {
        let (game, clock) = game();
        game.dispatch(InputEvent::Start);
        game.engine_mut().state.phase = Phase::GameOver;

        game.dispatch(InputEvent::Pause);
        assert_eq!(game.engine().phase(), Phase::GameOver);

        clock.advance(600.0);
        assert_eq!(clock.pending(), 0);
    }
}
