use crate::quantity::{energy::KilowattHours, time::Hours};

quantity!(
    /// Average draw, that is kilowatt-hours consumed per hour of usage.
    Kilowatts, via: f64, suffix: "kW", precision: 2
);

implement_mul!(Kilowatts, Hours, KilowattHours);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_energy_over_hours() {
        assert_abs_diff_eq!((Kilowatts(2.8) * Hours(2.0)).0, 5.6, epsilon = 1e-9);
        assert_abs_diff_eq!((Hours(0.5) * Kilowatts(1.2)).0, 0.6, epsilon = 1e-9);
    }
}
