pub mod core;
pub mod positions;
