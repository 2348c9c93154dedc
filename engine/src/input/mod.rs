//! Input Module
//!
//! Platform-agnostic input state for the game: a held-key map for the
//! steering keys and a pointer tracker that turns absolute cursor
//! positions into per-frame deltas. Decoupled from any specific
//! windowing system (like winit) so the state machines can be tested
//! without a window.
//!
//! # Example
//!
//! ```rust,ignore
//! use drop_zone_engine::input::{KeyMap, MoveKey, PointerTracker};
//!
//! let mut keys = KeyMap::new();
//! keys.handle_key(MoveKey::Up, true); // W pressed
//! if keys.any_pressed() {
//!     // Steer the craft
//! }
//!
//! let mut pointer = PointerTracker::new();
//! let (dx, dy) = pointer.motion(412.0, 297.0);
//! ```

pub mod keyboard;
pub mod mouse;

// Re-export commonly used types at module level
pub use keyboard::{KeyMap, MoveKey};
pub use mouse::{PointerTracker, Position};
