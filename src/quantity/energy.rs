use crate::quantity::{currency::Cost, rate::KilowattHourRate};

quantity!(
    /// Electricity, or gas expressed as its energy equivalent.
    KilowattHours, via: f64, suffix: "kWh", precision: 3
);

implement_mul!(KilowattHours, KilowattHourRate, Cost);
