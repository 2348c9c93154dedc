//! Exit Classification
//!
//! Pure scoring functions for obstacles leaving the field. Kept free of
//! state so the classification rule is pinned by unit tests.

use crate::game::config::ScoreConfig;
use crate::game::obstacles::Obstacle;
use crate::game::player::Player;

/// How an obstacle left the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitKind {
    /// The obstacle passed close enough to count as caught.
    Hit,
    /// The obstacle passed wide.
    Avoided,
}

/// Classify an obstacle that crossed the exit threshold.
///
/// Compares the signed per-axis differences `player - obstacle` against
/// the proximity threshold; an exit is a hit when either axis difference
/// is below it. The differences are signed, not absolute: an obstacle
/// passing on the positive side of the player satisfies the comparison at
/// any distance, so hits are generous toward that side.
pub fn classify_exit(player: &Player, obstacle: &Obstacle, threshold: f32) -> ExitKind {
    let x_diff = player.x - obstacle.x;
    let y_diff = player.y - obstacle.y;
    if x_diff < threshold || y_diff < threshold {
        ExitKind::Hit
    } else {
        ExitKind::Avoided
    }
}

/// Points awarded for an exit of the given kind.
pub fn points_for(kind: ExitKind, score: &ScoreConfig) -> u32 {
    match kind {
        ExitKind::Hit => score.hit_points,
        ExitKind::Avoided => score.avoid_points,
    }
}
