pub mod ai;
pub mod clock;
pub mod collision;
pub mod movement;
pub mod scoring;

pub use ai::*;
pub use clock::*;
pub use collision::*;
pub use movement::*;
pub use scoring::*;
