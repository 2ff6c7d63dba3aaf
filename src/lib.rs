//! Appliance usage cost model: typed device calculators turning free-text metric inputs
//! into electricity, water, and gas consumption and cost.

pub mod device;
pub mod prelude;
pub mod quantity;
pub mod registry;
pub mod usage;
