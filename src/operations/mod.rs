/// Operations offered by the seeder menu
///
/// Each operation takes the pool explicitly and reports what it did, so the
/// menu and the one-shot mode can both drive them.

mod seed;
mod clear;
mod count;

pub use seed::*;
pub use clear::*;
pub use count::*;
