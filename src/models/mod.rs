pub mod coordinates;
pub mod launch;

pub use coordinates::Coordinates;
pub use launch::Launch;
