//! Obstacle Store
//!
//! Owns the collection of falling obstacles with zero GPU coupling.
//! Obstacles enter at the far fog wall and fall toward the camera; the
//! store keeps them in insertion order, so the head is always the one
//! that has traveled longest and is nearest the removal threshold.

use std::collections::VecDeque;

use glam::Vec3;

use crate::game::types::{Mesh, generate_box};

/// A single falling obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    /// Depth into the field; decreases toward (and past) the camera.
    pub z: f32,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// FIFO store of active obstacles.
///
/// Insertion appends at the tail, removal pops the head. There is no
/// capacity bound; if creation outpaces removal the store grows without
/// limit.
#[derive(Debug, Default)]
pub struct ObstacleField {
    obstacles: VecDeque<Obstacle>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            obstacles: VecDeque::new(),
        }
    }

    /// Append a new obstacle at the tail.
    pub fn insert(&mut self, x: f32, y: f32, z: f32) {
        self.obstacles.push_back(Obstacle::new(x, y, z));
    }

    /// Advance every obstacle toward the camera by `step`.
    pub fn move_all(&mut self, step: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.z -= step;
        }
    }

    /// Pop the head obstacle.
    ///
    /// Calling this on an empty store violates the caller contract:
    /// debug builds assert, release builds return `None`.
    pub fn remove(&mut self) -> Option<Obstacle> {
        debug_assert!(
            !self.obstacles.is_empty(),
            "remove() called on an empty obstacle store"
        );
        self.obstacles.pop_front()
    }

    /// Peek the head obstacle; same empty-store contract as [`remove`].
    ///
    /// [`remove`]: ObstacleField::remove
    pub fn first(&self) -> Option<&Obstacle> {
        debug_assert!(
            !self.obstacles.is_empty(),
            "first() called on an empty obstacle store"
        );
        self.obstacles.front()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// Iterate head to tail (nearest removal first).
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    /// Append one cube per obstacle to the frame's scene mesh.
    pub fn draw_all(&self, mesh: &mut Mesh, half_extent: f32, tint: [f32; 4]) {
        for obstacle in &self.obstacles {
            let cube = generate_box(
                Vec3::new(obstacle.x, obstacle.y, obstacle.z),
                Vec3::splat(half_extent),
                tint,
            );
            mesh.merge(&cube);
        }
    }
}
