//! Game State
//!
//! Central state struct: the phase machine, the obstacle field, the player
//! and the two fixed-timestep cadences that drive them. The frame loop
//! feeds this exactly twice per frame, once with the polled key state and
//! once with the elapsed wall time; everything else happens in here.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::game::config::GameConfig;
use crate::game::levels::{Level, LevelConfig};
use crate::game::obstacles::ObstacleField;
use crate::game::player::Player;
use crate::game::scoring::{classify_exit, points_for};
use crate::input::KeyMap;

/// Clear color before any level is selected.
const MENU_CLEAR_COLOR: [f32; 3] = [0.02, 0.02, 0.05];

/// Top-level phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Title screen; the world is not simulated.
    Menu,
    /// Active play.
    Level,
    /// Terminal screen; nothing transitions into it yet.
    GameOver,
}

/// Central game state.
pub struct GameState {
    // === Phase ===
    /// Current phase; starts at the menu.
    pub phase: Phase,
    /// Active level tuning; `None` until the first selection.
    pub level: Option<LevelConfig>,

    // === World ===
    /// FIFO store of falling obstacles.
    pub obstacles: ObstacleField,
    /// The player craft.
    pub player: Player,

    // === Timing ===
    /// Seconds since construction; spins the rotor.
    pub elapsed: f32,
    /// Unspent time toward the next movement tick.
    pub move_accumulator: f32,
    /// Unspent time toward the next creation tick.
    pub spawn_accumulator: f32,

    // === Spawning ===
    /// Deterministic spawn-position source.
    rng: Pcg32,

    // === Tuning ===
    /// Snapshot of the game configuration.
    pub config: GameConfig,
}

impl GameState {
    /// Create a fresh game at the menu, with the craft centered in the
    /// field and the spawn sequence fixed by `seed`.
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let (center_x, center_y) = config.field.center();
        Self {
            phase: Phase::Menu,
            level: None,
            obstacles: ObstacleField::new(),
            player: Player::new(center_x, center_y),
            elapsed: 0.0,
            move_accumulator: 0.0,
            spawn_accumulator: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            config: config.clone(),
        }
    }

    /// Enter (or re-enter) play with the given level.
    ///
    /// Overwrites the fog range, the colors, the spawn interval and the
    /// fall step wholesale; obstacles already in flight keep falling under
    /// the new tuning.
    pub fn select_level(&mut self, level: Level) {
        let tuning = LevelConfig::for_level(level, self.config.field.depth);
        log::info!(
            "[Game] Level {} selected: fog {:.0}..{:.0}, spawn every {:.1}s, fall step {:.1}",
            level.number(),
            tuning.fog_start,
            tuning.fog_end,
            tuning.spawn_interval,
            tuning.fall_step
        );
        self.level = Some(tuning);
        self.phase = Phase::Level;
    }

    /// Per-frame input poll: translate the craft by one step per held
    /// axis and run the lean pass.
    ///
    /// This runs every rendered frame, independent of the movement-tick
    /// cadence, so craft speed scales with the frame rate.
    pub fn apply_input(&mut self, keys: &KeyMap) {
        let horizontal = keys.horizontal_axis();
        let vertical = keys.vertical_axis();

        if horizontal != 0 || vertical != 0 {
            let step = self.config.player.move_step;
            self.player
                .move_by(horizontal as f32 * step, vertical as f32 * step);
        }
        self.player.lean(vertical, horizontal, &self.config.player);
    }

    /// Advance both cadences by `dt` seconds, firing every tick whose
    /// boundary was crossed.
    ///
    /// The accumulators drain in every phase; outside [`Phase::Level`]
    /// the ticks fire but skip their work, so returning to play never
    /// replays banked time.
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;

        self.move_accumulator += dt;
        while self.move_accumulator >= self.config.cadence.move_interval {
            self.move_accumulator -= self.config.cadence.move_interval;
            self.movement_tick();
        }

        let spawn_interval = self.spawn_interval();
        self.spawn_accumulator += dt;
        while self.spawn_accumulator >= spawn_interval {
            self.spawn_accumulator -= spawn_interval;
            self.creation_tick();
        }
    }

    /// Seconds between creation ticks right now: the active level's
    /// interval, or the default cadence before any selection.
    pub fn spawn_interval(&self) -> f32 {
        self.level
            .as_ref()
            .map_or(self.config.cadence.default_spawn_interval, |l| {
                l.spawn_interval
            })
    }

    /// Clear/fog color for the current frame.
    pub fn fog_color(&self) -> [f32; 3] {
        self.level
            .as_ref()
            .map_or(MENU_CLEAR_COLOR, |l| l.fog_color)
    }

    /// One movement tick: advance all obstacles, then score the head if
    /// it crossed the exit threshold. At most one obstacle is removed per
    /// tick, matching the single head check.
    fn movement_tick(&mut self) {
        if self.phase != Phase::Level {
            return;
        }
        let Some(level) = self.level.as_ref() else {
            return;
        };

        self.obstacles.move_all(level.fall_step);

        if self.obstacles.is_empty() {
            return;
        }
        let crossed = self
            .obstacles
            .first()
            .is_some_and(|head| head.z <= self.config.field.exit_z);
        if !crossed {
            return;
        }

        if let Some(obstacle) = self.obstacles.remove() {
            let kind = classify_exit(&self.player, &obstacle, self.config.score.proximity_threshold);
            let points = points_for(kind, &self.config.score);
            self.player.add_points(points);
            log::debug!(
                "[Game] Obstacle out at ({:.1}, {:.1}): {:?}, +{} -> {}",
                obstacle.x,
                obstacle.y,
                kind,
                points,
                self.player.score
            );
        }
    }

    /// One creation tick: insert an obstacle at a random field position
    /// on the far fog wall.
    fn creation_tick(&mut self) {
        if self.phase != Phase::Level {
            return;
        }
        let x = self.rng.random_range(0.0..self.config.field.width);
        let y = self.rng.random_range(0.0..self.config.field.height);
        self.obstacles.insert(x, y, self.config.field.depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh(seed: u64) -> GameState {
        GameState::new(&GameConfig::default(), seed)
    }

    #[test]
    fn test_new_game_starts_at_menu() {
        let state = fresh(7);
        assert_eq!(state.phase, Phase::Menu);
        assert!(state.level.is_none());
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.x, 25.0);
        assert_eq!(state.player.y, 25.0);
        assert_eq!(state.player.score, 0);
    }

    #[test]
    fn test_select_level_overwrites_previous_tuning() {
        let mut state = fresh(7);
        state.select_level(Level::One);
        state.select_level(Level::Two);
        state.select_level(Level::Three);

        assert_eq!(state.phase, Phase::Level);
        let tuning = state.level.as_ref().unwrap();
        assert_eq!(tuning.fog_start, 25.0, "no residue from levels 1/2");
        assert_eq!(tuning.fog_end, 50.0);
        assert_eq!(tuning.spawn_interval, 1.0);
        assert_eq!(tuning.fall_step, 3.0);
    }

    #[test]
    fn test_menu_update_drains_time_without_mutation() {
        let mut state = fresh(7);
        state.update(5.0);

        assert!(state.obstacles.is_empty(), "menu ticks must not spawn");
        assert_eq!(state.player.score, 0);
        assert!((state.elapsed - 5.0).abs() < 1e-6);
        // The banked time is gone: both accumulators sit below one interval.
        assert!(state.move_accumulator < state.config.cadence.move_interval);
        assert!(state.spawn_accumulator < state.spawn_interval());
    }

    #[test]
    fn test_movement_ticks_fire_on_interval_boundaries() {
        let mut state = fresh(7);
        state.select_level(Level::One); // fall step 1.0
        state.obstacles.insert(10.0, 10.0, 100.0);

        // 0.25s = two full 0.1s ticks, the rest stays banked.
        state.update(0.25);
        assert_eq!(state.obstacles.first().map(|o| o.z), Some(98.0));

        // Another 0.1s completes exactly one more tick.
        state.update(0.1);
        assert_eq!(state.obstacles.first().map(|o| o.z), Some(97.0));
    }

    #[test]
    fn test_many_small_steps_match_one_large_step() {
        // Power-of-two intervals keep the accumulator arithmetic exact.
        let mut config = GameConfig::default();
        config.cadence.move_interval = 0.125;

        let mut fine = GameState::new(&config, 7);
        fine.select_level(Level::Two);
        fine.obstacles.insert(10.0, 10.0, 100.0);
        let mut coarse = GameState::new(&config, 7);
        coarse.select_level(Level::Two);
        coarse.obstacles.insert(10.0, 10.0, 100.0);

        for _ in 0..32 {
            fine.update(0.03125);
        }
        coarse.update(1.0);

        // 8 ticks either way, fall step 2.0: z = 100 - 16.
        assert_eq!(fine.obstacles.first().map(|o| o.z), Some(84.0));
        assert_eq!(
            fine.obstacles.first().map(|o| o.z),
            coarse.obstacles.first().map(|o| o.z),
            "tick count depends on elapsed time, not on frame slicing"
        );
    }

    #[test]
    fn test_creation_cadence_follows_level_interval() {
        let mut state = fresh(7);
        state.select_level(Level::Three); // spawn every 1.0s
        for _ in 0..8 {
            state.update(0.25); // 2.0s total
        }
        assert_eq!(state.obstacles.len(), 2);
    }

    #[test]
    fn test_spawns_land_within_the_field() {
        let mut state = fresh(42);
        state.select_level(Level::Three);
        state.update(6.0);

        assert!(!state.obstacles.is_empty());
        let field = &state.config.field;
        for obstacle in state.obstacles.iter() {
            assert!(obstacle.x >= 0.0 && obstacle.x < field.width);
            assert!(obstacle.y >= 0.0 && obstacle.y < field.height);
            assert!(
                obstacle.z <= field.depth,
                "spawned at the far wall, then only falls"
            );
        }
    }

    #[test]
    fn test_same_seed_yields_identical_spawns() {
        let mut a = fresh(0xD05E);
        let mut b = fresh(0xD05E);
        a.select_level(Level::Three);
        b.select_level(Level::Three);
        for _ in 0..20 {
            a.update(0.5);
            b.update(0.5);
        }

        let spawns_a: Vec<_> = a.obstacles.iter().map(|o| (o.x, o.y)).collect();
        let spawns_b: Vec<_> = b.obstacles.iter().map(|o| (o.x, o.y)).collect();
        assert!(!spawns_a.is_empty());
        assert_eq!(spawns_a, spawns_b);
    }

    #[test]
    fn test_close_exit_scores_hit_points() {
        let mut state = fresh(7);
        state.select_level(Level::One);
        state.player.x = 0.0;
        state.player.y = 0.0;
        // One fall step (1.0) puts this past the -25 exit threshold.
        state.obstacles.insert(10.0, 10.0, -24.5);

        state.update(0.1);

        assert!(state.obstacles.is_empty(), "scored obstacle is removed");
        assert_eq!(
            state.player.score, 10,
            "signed differences (-10, -10) sit below the threshold: a hit"
        );
    }

    #[test]
    fn test_wide_exit_scores_avoid_points() {
        let mut state = fresh(7);
        state.select_level(Level::One);
        state.player.x = 40.0;
        state.player.y = 40.0;
        state.obstacles.insert(10.0, 10.0, -24.5);

        state.update(0.1);

        assert_eq!(state.player.score, 5);
    }

    #[test]
    fn test_one_removal_per_movement_tick() {
        let mut state = fresh(7);
        state.select_level(Level::One);
        state.player.x = 0.0;
        state.player.y = 0.0;
        // Both will be past the threshold after one tick, but only the
        // head is checked.
        state.obstacles.insert(10.0, 10.0, -24.5);
        state.obstacles.insert(20.0, 20.0, -24.5);

        state.update(0.1);
        assert_eq!(state.obstacles.len(), 1);
        state.update(0.1);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.score, 20);
    }

    #[test]
    fn test_input_moves_and_leans_the_craft() {
        let mut state = fresh(7);
        let mut keys = KeyMap::new();
        keys.handle_key(crate::input::MoveKey::Up, true);
        keys.handle_key(crate::input::MoveKey::Right, true);

        state.apply_input(&keys);
        assert_eq!(state.player.x, 25.5);
        assert_eq!(state.player.y, 25.5);
        assert_eq!(state.player.pitch_lean, 3.0);
        assert_eq!(state.player.roll_lean, 3.0);

        // Released keys: position holds, lean decays.
        keys.reset();
        state.apply_input(&keys);
        assert_eq!(state.player.x, 25.5);
        assert_eq!(state.player.pitch_lean, 2.0);
        assert_eq!(state.player.roll_lean, 2.0);
    }

    #[test]
    fn test_fog_color_tracks_the_level() {
        let mut state = fresh(7);
        assert_eq!(state.fog_color(), MENU_CLEAR_COLOR);

        state.select_level(Level::Two);
        let expected = LevelConfig::for_level(Level::Two, state.config.field.depth).fog_color;
        assert_eq!(state.fog_color(), expected);
    }
}
