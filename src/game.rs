//! Game orchestration: one owned state per page load, driven through the
//! reducer by clicks, clock ticks and the name form.

use std::rc::Rc;
use yew::Reducible;

use crate::config::GameConfig;
use crate::model::{Coord, Grid, JsRandom, RandomSource};
use crate::records::{append_record, LocalScoreStore, ScoreRecord, ScoreStore, StorageError};
use crate::state::ScoreClock;
use crate::util::clog;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Not next to the empty cell, or the game is over. Nothing changed.
    Rejected,
    Moved,
    /// The move completed the puzzle.
    Solved,
}

#[derive(Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Shared with the board props; only a successful move clones it.
    pub grid: Rc<Grid>,
    pub clock: ScoreClock,
    /// Saved results, loaded when the game finishes.
    pub records: Vec<ScoreRecord>,
    /// Set once the player has stored this game's result.
    pub saved: bool,
    store: Rc<dyn ScoreStore>,
}

impl GameState {
    /// Builds the solved grid, shuffles it and applies the solvability fix.
    pub fn init<R: RandomSource + ?Sized>(
        config: GameConfig,
        rng: &mut R,
        store: Rc<dyn ScoreStore>,
    ) -> Self {
        let mut grid = Grid::new(config.length);
        grid.shuffle(rng);
        Self::from_grid(config, grid, store)
    }

    /// Starts a session on an already arranged grid.
    pub fn from_grid(mut config: GameConfig, grid: Grid, store: Rc<dyn ScoreStore>) -> Self {
        config.length = grid.length();
        let clock = ScoreClock::new(&config);
        Self {
            config,
            grid: Rc::new(grid),
            clock,
            records: Vec::new(),
            saved: false,
            store,
        }
    }

    /// `Math.random()` shuffle and `localStorage` records.
    pub fn browser(config: GameConfig) -> Self {
        let store = Rc::new(LocalScoreStore::new(&config.records_key));
        clog(&format!("new {0}x{0} puzzle", config.length));
        Self::init(config, &mut JsRandom, store)
    }

    pub fn apply_move(&mut self, at: Coord) -> MoveOutcome {
        if self.clock.is_finished() || !at.is_adjacent(self.grid.empty()) {
            return MoveOutcome::Rejected;
        }
        if !Rc::make_mut(&mut self.grid).slide(at) {
            return MoveOutcome::Rejected;
        }
        self.clock.record_move();
        if self.grid.is_solved() {
            self.finish();
            return MoveOutcome::Solved;
        }
        self.clock.start();
        MoveOutcome::Moved
    }

    pub fn tick(&mut self) -> bool {
        self.clock.tick()
    }

    fn finish(&mut self) {
        let final_score = self.clock.finish();
        self.records = self.store.load();
        clog(&format!(
            "solved in {} moves, {} ms, score {}/100",
            self.clock.moves, self.clock.elapsed_ms, final_score
        ));
    }

    /// Appends this game's result under `name`. Only a finished, not yet saved
    /// game with a non-blank name is stored; otherwise returns `Ok(false)`.
    pub fn save_score(&mut self, name: &str) -> Result<bool, StorageError> {
        let Some(final_score) = self.clock.final_score else {
            return Ok(false);
        };
        let name = name.trim();
        if self.saved || name.is_empty() {
            return Ok(false);
        }
        self.records = append_record(self.store.as_ref(), ScoreRecord::new(name, final_score))?;
        self.saved = true;
        Ok(true)
    }
}

#[derive(Clone, Debug)]
pub enum GameAction {
    Move(Coord),
    Tick,
    SaveScore(String),
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        let changed = match action {
            GameAction::Move(at) => new.apply_move(at) != MoveOutcome::Rejected,
            GameAction::Tick => new.tick(),
            GameAction::SaveScore(name) => match new.save_score(&name) {
                Ok(saved) => saved,
                Err(e) => {
                    clog(&format!("score not saved: {}", e));
                    false
                }
            },
        };
        if changed { Rc::new(new) } else { self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::MemoryScoreStore;
    use crate::state::Phase;

    fn state_from(ids: &[u32], store: Rc<MemoryScoreStore>) -> GameState {
        let grid = Grid::from_ids(3, ids).unwrap();
        GameState::from_grid(GameConfig::default(), grid, store)
    }

    #[test]
    fn rejected_moves_change_nothing() {
        let store = Rc::new(MemoryScoreStore::default());
        let mut game = state_from(&[1, 2, 3, 4, 5, 6, 7, 0, 8], store);
        let before = game.grid.clone();
        assert_eq!(game.apply_move(Coord::new(0, 0)), MoveOutcome::Rejected);
        assert_eq!(game.apply_move(Coord::new(2, 1)), MoveOutcome::Rejected);
        assert_eq!(game.grid, before);
        assert_eq!(game.clock.moves, 0);
        assert_eq!(game.clock.phase, Phase::NotStarted);
    }

    #[test]
    fn first_move_starts_the_clock() {
        let store = Rc::new(MemoryScoreStore::default());
        let mut game = state_from(&[1, 2, 3, 4, 5, 6, 7, 0, 8], store);
        assert!(!game.tick());
        assert_eq!(game.apply_move(Coord::new(0, 2)), MoveOutcome::Moved);
        assert_eq!(game.grid.empty(), Coord::new(0, 2));
        assert_eq!(game.clock.moves, 1);
        assert_eq!(game.clock.phase, Phase::Running);
        assert!(game.tick());
        assert_eq!(game.clock.elapsed_ms, 10);
    }

    #[test]
    fn solving_on_first_move_finishes_without_running() {
        let store = Rc::new(MemoryScoreStore::with_raw(r#"[{"name":"ana","score":"9/100"}]"#));
        let mut game = state_from(&[1, 2, 3, 4, 5, 6, 7, 0, 8], store);
        assert_eq!(game.apply_move(Coord::new(2, 2)), MoveOutcome::Solved);
        assert_eq!(game.clock.phase, Phase::Finished);
        assert_eq!(game.clock.final_score, Some(100));
        assert_eq!(game.records, vec![ScoreRecord::new("ana", 9)]);
        assert!(!game.tick());
        assert_eq!(game.apply_move(Coord::new(2, 1)), MoveOutcome::Rejected);
    }

    #[test]
    fn save_score_once_per_game() {
        let store = Rc::new(MemoryScoreStore::default());
        let mut game = state_from(&[1, 2, 3, 4, 5, 6, 7, 0, 8], store.clone());
        assert_eq!(game.save_score("early"), Ok(false));
        game.apply_move(Coord::new(2, 2));
        assert_eq!(game.save_score("   "), Ok(false));
        assert_eq!(game.save_score(" ana "), Ok(true));
        assert_eq!(game.save_score("again"), Ok(false));
        assert_eq!(game.records, vec![ScoreRecord::new("ana", 100)]);
        assert_eq!(store.load(), game.records);
    }

    #[test]
    fn reducer_keeps_the_same_rc_for_no_ops() {
        let store = Rc::new(MemoryScoreStore::default());
        let game = Rc::new(state_from(&[1, 2, 3, 4, 5, 6, 7, 0, 8], store));
        let same = game.clone().reduce(GameAction::Tick);
        assert!(Rc::ptr_eq(&game, &same));
        let moved = game.clone().reduce(GameAction::Move(Coord::new(0, 2)));
        assert!(!Rc::ptr_eq(&game, &moved));
        assert_eq!(moved.clock.moves, 1);
    }

    #[test]
    fn ticks_share_the_grid_and_hold_the_display() {
        let store = Rc::new(MemoryScoreStore::default());
        let mut game = Rc::new(state_from(&[1, 2, 3, 4, 5, 6, 7, 0, 8], store));
        game = game.reduce(GameAction::Move(Coord::new(0, 2)));
        let started = game.clone();
        for _ in 0..99 {
            game = game.reduce(GameAction::Tick);
        }
        assert!(Rc::ptr_eq(&started.grid, &game.grid));
        assert_eq!(game.clock.elapsed_ms, 990);
        assert_eq!(game.clock.display, started.clock.display);

        game = game.reduce(GameAction::Tick);
        assert_eq!(game.clock.display.time_ms, 1000);
        assert!(Rc::ptr_eq(&started.grid, &game.grid));

        // A rejected click keeps the grid allocation too.
        let rejected = game.clone().reduce(GameAction::Move(Coord::new(2, 0)));
        assert!(Rc::ptr_eq(&rejected, &game));
    }
}
