pub mod orb;
pub mod take;

pub use orb::{LoopOrb, LoopOrbState, OrbEffect, OrbError};
pub use take::Take;
