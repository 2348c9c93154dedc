//! Player State
//!
//! Position, lean angles, score and lives for the single player craft.
//! Movement is driven by the per-frame input poll; lean angles are a
//! cosmetic response to held keys and decay back to level flight.

use crate::game::config::PlayerConfig;

/// Lives the craft starts with. Nothing decrements them yet; the value is
/// displayed on the HUD and reserved for a damage rule.
pub const STARTING_LIVES: u32 = 3;

/// The player craft.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Forward/back tilt (degrees); positive when climbing.
    pub pitch_lean: f32,
    /// Left/right bank (degrees); positive when banking right.
    pub roll_lean: f32,
    /// Total points scored; monotonic.
    pub score: u32,
    pub lives: u32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            pitch_lean: 0.0,
            roll_lean: 0.0,
            score: 0,
            lives: STARTING_LIVES,
        }
    }

    /// Translate the craft. No explicit bound; the movement step keeps
    /// excursions small in practice.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// One lean pass per input poll.
    ///
    /// `pitch_input`/`roll_input` are -1, 0 or 1 from the held-key axes.
    /// A nonzero axis nudges its lean angle by `lean_step` toward the
    /// matching extreme, clamped so the limit is never exceeded even
    /// transiently. A zero axis decays toward level by `lean_decay`,
    /// stopping exactly at zero.
    pub fn lean(&mut self, pitch_input: i32, roll_input: i32, tuning: &PlayerConfig) {
        self.pitch_lean = if pitch_input != 0 {
            (self.pitch_lean + pitch_input as f32 * tuning.lean_step)
                .clamp(-tuning.pitch_lean_limit, tuning.pitch_lean_limit)
        } else {
            decay_toward_zero(self.pitch_lean, tuning.lean_decay)
        };

        self.roll_lean = if roll_input != 0 {
            (self.roll_lean + roll_input as f32 * tuning.lean_step)
                .clamp(-tuning.roll_lean_limit, tuning.roll_lean_limit)
        } else {
            decay_toward_zero(self.roll_lean, tuning.lean_decay)
        };
    }

    /// Award points; the score never decreases and never wraps.
    pub fn add_points(&mut self, delta: u32) {
        self.score = self.score.saturating_add(delta);
    }
}

/// Move `angle` toward zero by `step` without overshooting.
fn decay_toward_zero(angle: f32, step: f32) -> f32 {
    if angle > 0.0 {
        (angle - step).max(0.0)
    } else {
        (angle + step).min(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_level_and_unscored() {
        let player = Player::new(25.0, 25.0);
        assert_eq!(player.x, 25.0);
        assert_eq!(player.y, 25.0);
        assert_eq!(player.pitch_lean, 0.0);
        assert_eq!(player.roll_lean, 0.0);
        assert_eq!(player.score, 0);
        assert_eq!(player.lives, STARTING_LIVES);
    }

    #[test]
    fn test_move_by_accumulates() {
        let mut player = Player::new(0.0, 0.0);
        player.move_by(0.5, 0.0);
        player.move_by(0.5, -0.5);
        assert_eq!(player.x, 1.0);
        assert_eq!(player.y, -0.5);
    }

    #[test]
    fn test_pitch_lean_clamps_at_limit() {
        let tuning = PlayerConfig::default();
        let mut player = Player::new(0.0, 0.0);
        // Far more polls than needed to reach the extreme.
        for _ in 0..100 {
            player.lean(1, 0, &tuning);
            assert!(
                player.pitch_lean <= tuning.pitch_lean_limit,
                "pitch lean {} exceeded the clamp",
                player.pitch_lean
            );
        }
        assert_eq!(player.pitch_lean, tuning.pitch_lean_limit);
    }

    #[test]
    fn test_roll_lean_clamps_both_directions() {
        let tuning = PlayerConfig::default();
        let mut player = Player::new(0.0, 0.0);
        for _ in 0..100 {
            player.lean(0, -1, &tuning);
        }
        assert_eq!(player.roll_lean, -tuning.roll_lean_limit);
        for _ in 0..100 {
            player.lean(0, 1, &tuning);
        }
        assert_eq!(player.roll_lean, tuning.roll_lean_limit);
    }

    #[test]
    fn test_lean_decays_to_exactly_zero() {
        let tuning = PlayerConfig::default();
        let mut player = Player::new(0.0, 0.0);
        player.lean(1, 0, &tuning);
        assert_eq!(player.pitch_lean, tuning.lean_step);

        // 3.0 degrees decays in steps of 1.0: 2.0, 1.0, 0.0, then stays.
        for expected in [2.0, 1.0, 0.0, 0.0] {
            player.lean(0, 0, &tuning);
            assert_eq!(player.pitch_lean, expected);
        }
    }

    #[test]
    fn test_decay_never_overshoots() {
        let tuning = PlayerConfig {
            lean_decay: 10.0,
            ..PlayerConfig::default()
        };
        let mut player = Player::new(0.0, 0.0);
        player.lean(0, 1, &tuning);
        assert_eq!(player.roll_lean, tuning.lean_step);
        player.lean(0, 0, &tuning);
        assert_eq!(player.roll_lean, 0.0, "decay stops at zero, never crosses");
    }

    #[test]
    fn test_score_is_monotonic_and_saturating() {
        let mut player = Player::new(0.0, 0.0);
        player.add_points(10);
        player.add_points(5);
        assert_eq!(player.score, 15);

        player.score = u32::MAX - 3;
        player.add_points(10);
        assert_eq!(player.score, u32::MAX, "score saturates instead of wrapping");
    }
}
