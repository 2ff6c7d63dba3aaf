use std::ops::Mul;

use bon::bon;
use chrono::{DateTime, Local};
use serde::Serialize;

use crate::quantity::{currency::Cost, energy::KilowattHours, time::Hours, volume::Liters};

/// Consumed quantity of a single utility together with what it costs.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UtilityUsage<U> {
    pub usage: U,
    pub cost: Cost,
}

impl<U: Copy> UtilityUsage<U> {
    pub fn priced<R>(usage: U, rate: R) -> Self
    where
        U: Mul<R, Output = Cost>,
    {
        Self { usage, cost: usage * rate }
    }
}

/// Outcome of a single appliance usage session.
///
/// Utilities the device does not consume are absent. The total cost is always
/// the sum of the present utility costs.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UsageResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    electricity: Option<UtilityUsage<KilowattHours>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    water: Option<UtilityUsage<Liters>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    gas: Option<UtilityUsage<KilowattHours>>,

    total_cost: Cost,

    #[serde(skip_serializing_if = "Option::is_none")]
    usage_time: Option<Hours>,

    timestamp: DateTime<Local>,
}

#[bon]
impl UsageResult {
    #[builder]
    pub fn new(
        electricity: Option<UtilityUsage<KilowattHours>>,
        water: Option<UtilityUsage<Liters>>,
        gas: Option<UtilityUsage<KilowattHours>>,
        usage_time: Option<Hours>,
        timestamp: DateTime<Local>,
    ) -> Self {
        let total_cost = [
            electricity.map(|electricity| electricity.cost),
            water.map(|water| water.cost),
            gas.map(|gas| gas.cost),
        ]
        .into_iter()
        .flatten()
        .fold(Cost::ZERO, |total, cost| total + cost);
        Self { electricity, water, gas, total_cost, usage_time, timestamp }
    }

    /// Displayable result of a failed calculation: nothing consumed, nothing paid.
    pub fn zero(timestamp: DateTime<Local>) -> Self {
        Self::builder().timestamp(timestamp).build()
    }

    #[must_use]
    pub const fn electricity(&self) -> Option<UtilityUsage<KilowattHours>> {
        self.electricity
    }

    #[must_use]
    pub const fn water(&self) -> Option<UtilityUsage<Liters>> {
        self.water
    }

    #[must_use]
    pub const fn gas(&self) -> Option<UtilityUsage<KilowattHours>> {
        self.gas
    }

    #[must_use]
    pub const fn total_cost(&self) -> Cost {
        self.total_cost
    }

    #[must_use]
    pub const fn usage_time(&self) -> Option<Hours> {
        self.usage_time
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.electricity.is_none()
            && self.water.is_none()
            && self.gas.is_none()
            && self.usage_time.is_none()
            && self.total_cost == Cost::ZERO
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        device::tests::now,
        quantity::rate::{KilowattHourRate, LiterRate},
    };

    #[test]
    fn test_total_cost_sums_present_utilities() {
        let result = UsageResult::builder()
            .electricity(UtilityUsage::priced(KilowattHours(0.1), KilowattHourRate(0.2)))
            .water(UtilityUsage::priced(Liters(50.0), LiterRate(0.005)))
            .usage_time(Hours(1.0))
            .timestamp(now())
            .build();
        assert_abs_diff_eq!(result.total_cost().0, 0.02 + 0.25, epsilon = 1e-9);
        assert!(result.gas().is_none());
        assert!(!result.is_zero());
    }

    #[test]
    fn test_zero() {
        let result = UsageResult::zero(now());
        assert!(result.is_zero());
        assert_eq!(result.total_cost(), Cost::ZERO);
        assert_eq!(result.timestamp(), now());
    }

    #[test]
    fn test_zero_total_cost_is_positive_zero() {
        let result = UsageResult::zero(now());
        assert!(result.total_cost().0.is_sign_positive());
        assert_eq!(result.total_cost().to_string(), "0.000 $");
        let value = serde_json::to_value(&result).unwrap();
        assert!(value["total_cost"].as_f64().unwrap().is_sign_positive());
    }

    #[test]
    fn test_serialize_skips_absent_utilities() {
        let result = UsageResult::builder()
            .gas(UtilityUsage::priced(KilowattHours(5.6), KilowattHourRate(0.15)))
            .timestamp(now())
            .build();
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("electricity").is_none());
        assert!(value.get("water").is_none());
        assert!(value.get("gas").is_some());
        assert_abs_diff_eq!(value["total_cost"].as_f64().unwrap(), 0.84, epsilon = 1e-9);
    }
}
