// extensions/mod.rs
//
// Optional extension modules.
// Decoupled from core Entity/Scene: games opt in by driving these systems.

pub mod easing;
pub mod timer;
pub mod tween;

pub use easing::{Easing, lerp, lerp_vec3, ease, ease_vec3};
pub use timer::{TimerState, TimerId};
pub use tween::{TweenState, Tween, TweenId, TweenTarget, TweenChannel};
