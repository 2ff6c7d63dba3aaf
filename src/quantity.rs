#[macro_use]
mod macros;

pub mod currency;
pub mod energy;
pub mod power;
pub mod rate;
pub mod time;
pub mod volume;
