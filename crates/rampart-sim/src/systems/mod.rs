//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only)
//! plus whatever engine-owned state they touch, passed explicitly.

pub mod combat;
pub mod damage;
pub mod effects;
pub mod movement;
pub mod placement;
pub mod projectiles;
pub mod snapshot;
pub mod wave_director;
