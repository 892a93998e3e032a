pub mod core;
pub mod events;
pub mod interest;
pub mod liquidations;
pub mod payments;
pub mod positions;
