//! dicetable - a physics-driven 3D dice tray
//!
//! A die is thrown from a random tray corner with an impulse aimed at the
//! center, simulated by Rapier, rendered by Bevy, and read off once it comes
//! to rest. This crate is the wiring between the two engines: scene setup,
//! asset loading, the roll state machine, and per-frame pose sync.

pub mod systems;
pub mod types;
