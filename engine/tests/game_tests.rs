//! Game Tests - Store Order, Cadences, Leans and Scoring
//!
//! End-to-end tests for the game module driven through the public API:
//! FIFO obstacle handling, the fixed-timestep cadences, lean clamping
//! and the exit classification.

use drop_zone_engine::game::{
    ExitKind, GameConfig, GameState, Level, Obstacle, ObstacleField, Phase, Player, classify_exit,
    points_for,
};
use drop_zone_engine::input::{KeyMap, MoveKey};

fn fresh(seed: u64) -> GameState {
    GameState::new(&GameConfig::default(), seed)
}

// ============================================================================
// Obstacle Store Tests
// ============================================================================

#[test]
fn test_insert_into_empty_store() {
    let mut store = ObstacleField::new();
    assert!(store.is_empty());

    store.insert(10.0, 20.0, 30.0);

    assert!(!store.is_empty());
    let head = store.first().unwrap();
    assert_eq!((head.x, head.y, head.z), (10.0, 20.0, 30.0));
}

#[test]
fn test_store_is_fifo_across_inserts_and_removes() {
    let mut store = ObstacleField::new();
    store.insert(1.0, 1.0, 100.0);
    store.insert(2.0, 2.0, 100.0);

    assert_eq!(store.first().unwrap().x, 1.0);
    let removed = store.remove().unwrap();
    assert_eq!(removed.x, 1.0);
    assert_eq!(store.first().unwrap().x, 2.0);
}

#[test]
fn test_move_all_only_ever_lowers_z() {
    let mut store = ObstacleField::new();
    store.insert(5.0, 5.0, 100.0);
    store.insert(15.0, 35.0, 100.0);
    store.insert(45.0, 10.0, 100.0);

    let mut previous: Vec<f32> = store.iter().map(|o| o.z).collect();
    for _ in 0..10 {
        store.move_all(2.0);
        let current: Vec<f32> = store.iter().map(|o| o.z).collect();
        for (before, after) in previous.iter().zip(current.iter()) {
            assert_eq!(after + 2.0, *before, "each tick drops z by exactly the step");
        }
        previous = current;
    }
}

// ============================================================================
// Cadence Tests
// ============================================================================

#[test]
fn test_menu_time_drains_without_world_mutation() {
    let mut state = fresh(3);
    state.update(10.0);

    assert_eq!(state.phase, Phase::Menu);
    assert!(state.obstacles.is_empty());
    assert_eq!(state.player.score, 0);
    // Time drained: nothing is banked for later
    assert!(state.move_accumulator < state.config.cadence.move_interval);
    assert!(state.spawn_accumulator < state.spawn_interval());
}

#[test]
fn test_movement_ticks_follow_elapsed_time() {
    let mut state = fresh(3);
    state.select_level(Level::One); // fall step 1.0
    state.obstacles.insert(10.0, 10.0, 100.0);

    // Two 100 ms boundaries inside 0.25 s
    state.update(0.25);
    assert_eq!(state.obstacles.first().map(|o| o.z), Some(98.0));
}

#[test]
fn test_spawn_interval_tracks_the_level() {
    let mut state = fresh(3);
    assert_eq!(state.spawn_interval(), 1.0, "default cadence before selection");

    state.select_level(Level::One);
    assert_eq!(state.spawn_interval(), 3.0);

    state.select_level(Level::Three);
    assert_eq!(state.spawn_interval(), 1.0);
}

#[test]
fn test_spawns_stay_inside_the_field() {
    let mut state = fresh(99);
    state.select_level(Level::Three);
    for _ in 0..40 {
        state.update(0.25);
    }

    assert!(!state.obstacles.is_empty());
    for obstacle in state.obstacles.iter() {
        assert!(obstacle.x >= 0.0 && obstacle.x < 50.0);
        assert!(obstacle.y >= 0.0 && obstacle.y < 50.0);
    }
}

#[test]
fn test_identical_seeds_replay_identical_spawns() {
    let mut a = fresh(0xACE);
    let mut b = fresh(0xACE);
    a.select_level(Level::Two);
    b.select_level(Level::Two);

    for _ in 0..30 {
        a.update(0.4);
        b.update(0.4);
    }

    let spawns_a: Vec<(f32, f32)> = a.obstacles.iter().map(|o| (o.x, o.y)).collect();
    let spawns_b: Vec<(f32, f32)> = b.obstacles.iter().map(|o| (o.x, o.y)).collect();
    assert!(!spawns_a.is_empty());
    assert_eq!(spawns_a, spawns_b);
}

// ============================================================================
// Level Selection Tests
// ============================================================================

#[test]
fn test_level_selection_leaves_no_residue() {
    let mut state = fresh(3);
    state.select_level(Level::One);
    state.select_level(Level::Two);
    state.select_level(Level::Three);

    let tuning = state.level.as_ref().unwrap();
    assert_eq!(tuning.fog_start, 25.0);
    assert_eq!(tuning.fog_end, 50.0);
    assert_eq!(tuning.spawn_interval, 1.0);
    assert_eq!(tuning.fall_step, 3.0);
}

// ============================================================================
// Lean Tests
// ============================================================================

#[test]
fn test_leans_saturate_under_held_keys() {
    let mut state = fresh(3);
    let mut keys = KeyMap::new();
    keys.handle_key(MoveKey::Up, true);
    keys.handle_key(MoveKey::Right, true);

    for _ in 0..100 {
        state.apply_input(&keys);
        assert!(state.player.pitch_lean <= 35.0);
        assert!(state.player.roll_lean <= 55.0);
    }
    assert_eq!(state.player.pitch_lean, 35.0);
    assert_eq!(state.player.roll_lean, 55.0);
}

#[test]
fn test_leans_clamp_in_the_negative_direction_too() {
    let mut state = fresh(3);
    let mut keys = KeyMap::new();
    keys.handle_key(MoveKey::Down, true);
    keys.handle_key(MoveKey::Left, true);

    for _ in 0..100 {
        state.apply_input(&keys);
        assert!(state.player.pitch_lean >= -35.0);
        assert!(state.player.roll_lean >= -55.0);
    }
    assert_eq!(state.player.pitch_lean, -35.0);
    assert_eq!(state.player.roll_lean, -55.0);
}

#[test]
fn test_released_keys_decay_leans_to_rest() {
    let mut state = fresh(3);
    let mut keys = KeyMap::new();
    keys.handle_key(MoveKey::Up, true);
    for _ in 0..4 {
        state.apply_input(&keys);
    }
    assert_eq!(state.player.pitch_lean, 12.0);

    keys.reset();
    for _ in 0..20 {
        state.apply_input(&keys);
    }
    assert_eq!(state.player.pitch_lean, 0.0, "decay stops exactly at rest");
}

// ============================================================================
// Scoring Tests
// ============================================================================

#[test]
fn test_signed_difference_classification() {
    let threshold = 5.0;
    let player = Player::new(0.0, 0.0);

    // Both signed differences are -10, below the threshold: a hit,
    // however far away the obstacle actually passed.
    let far_positive = Obstacle::new(10.0, 10.0, -25.0);
    assert_eq!(
        classify_exit(&player, &far_positive, threshold),
        ExitKind::Hit
    );

    // Mirrored to the negative side the same distance is an avoid.
    let far_negative = Obstacle::new(-10.0, -10.0, -25.0);
    assert_eq!(
        classify_exit(&player, &far_negative, threshold),
        ExitKind::Avoided
    );
}

#[test]
fn test_exit_points_per_kind() {
    let score = GameConfig::default().score;
    assert_eq!(points_for(ExitKind::Hit, &score), 10);
    assert_eq!(points_for(ExitKind::Avoided, &score), 5);
}

#[test]
fn test_score_never_decreases_over_a_run() {
    let mut state = fresh(0xBEEF);
    state.select_level(Level::Three);

    let mut last_score = 0;
    for _ in 0..120 {
        state.update(0.1);
        assert!(state.player.score >= last_score);
        last_score = state.player.score;
    }
    assert!(last_score > 0, "a 12 s run at level 3 must score some exits");
}

#[test]
fn test_exits_remove_exactly_the_head() {
    let mut state = fresh(3);
    state.select_level(Level::One);
    state.player.x = 40.0;
    state.player.y = 40.0;
    state.obstacles.insert(36.0, 36.0, -24.5); // diffs +4: hit
    state.obstacles.insert(10.0, 10.0, -24.5); // diffs +30: avoid

    state.update(0.1);
    assert_eq!(state.obstacles.len(), 1, "one removal per movement tick");
    assert_eq!(state.player.score, 10);

    state.update(0.1);
    assert!(state.obstacles.is_empty());
    assert_eq!(state.player.score, 15, "second head scored as an avoid");
}
