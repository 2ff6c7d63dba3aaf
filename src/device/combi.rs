use chrono::{DateTime, Local};

use crate::{
    device::{
        Appliance,
        choice::ChoicePolicy,
        inputs::{RawInputs, ValidationError},
        metric::{ADJUSTED_TEMPERATURE, MetricDescriptor, NUMBER_OF_RADIATORS, USAGE_TIME},
    },
    quantity::{power::Kilowatts, rate::KilowattHourRate, time::Hours},
    usage::{UsageResult, UtilityUsage},
};

const RATE: KilowattHourRate = KilowattHourRate(0.15);
const BASE_DRAW: Kilowatts = Kilowatts(1.5);

/// Flow temperature above which every extra degree costs more gas.
const THRESHOLD_TEMPERATURE: i32 = 30;

/// Gas combi boiler. Unlike the other devices, usage time is entered in hours.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Combi {
    pub usage_time: Hours,
    pub temperature: i32,
    pub n_radiators: i32,
}

impl Combi {
    fn draw(&self) -> Kilowatts {
        let overheat = self.temperature.saturating_sub(THRESHOLD_TEMPERATURE).max(0);
        BASE_DRAW
            + Kilowatts(0.2) * f64::from(overheat)
            + Kilowatts(0.1) * f64::from(self.n_radiators)
    }
}

impl Appliance for Combi {
    const METRICS: &'static [MetricDescriptor] = &[
        MetricDescriptor::new(USAGE_TIME, "Input hours"),
        MetricDescriptor::new(ADJUSTED_TEMPERATURE, "Input an integer value"),
        MetricDescriptor::new(NUMBER_OF_RADIATORS, "Input an integer value"),
    ];

    fn parse(inputs: &RawInputs, _policy: ChoicePolicy) -> Result<Self, ValidationError> {
        let usage_time: f64 = inputs.number(USAGE_TIME)?;
        let [temperature, n_radiators] =
            inputs.require([ADJUSTED_TEMPERATURE, NUMBER_OF_RADIATORS])?;
        Ok(Self { usage_time: Hours(usage_time.max(0.0)), temperature, n_radiators })
    }

    fn usage(&self, timestamp: DateTime<Local>) -> UsageResult {
        UsageResult::builder()
            .gas(UtilityUsage::priced(self.draw() * self.usage_time, RATE))
            .usage_time(self.usage_time)
            .timestamp(timestamp)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::device::tests::now;

    #[test]
    fn test_hot_with_radiators() {
        let combi = Combi { usage_time: Hours(2.0), temperature: 35, n_radiators: 3 };
        assert_abs_diff_eq!(combi.draw().0, 2.8, epsilon = 1e-9);

        let inputs = RawInputs::from_iter([
            (USAGE_TIME, "2"),
            (ADJUSTED_TEMPERATURE, "35"),
            (NUMBER_OF_RADIATORS, "3"),
        ]);
        let result = Combi::calculate(&inputs, ChoicePolicy::Strict, now()).unwrap();
        let gas = result.gas().unwrap();
        assert_abs_diff_eq!(gas.usage.0, 5.6, epsilon = 1e-9);
        assert_abs_diff_eq!(gas.cost.0, 0.84, epsilon = 1e-9);
        assert_abs_diff_eq!(result.total_cost().0, 0.84, epsilon = 1e-9);
        assert_abs_diff_eq!(result.usage_time().unwrap().0, 2.0, epsilon = 1e-9);
        assert!(result.electricity().is_none());
    }

    #[test]
    fn test_below_threshold() {
        let combi = Combi { usage_time: Hours(1.0), temperature: 25, n_radiators: 0 };
        assert_abs_diff_eq!(combi.draw().0, 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_fractional_temperature_is_invalid() {
        let inputs = RawInputs::from_iter([
            (USAGE_TIME, "2"),
            (ADJUSTED_TEMPERATURE, "35.5"),
            (NUMBER_OF_RADIATORS, "3"),
        ]);
        assert_eq!(
            Combi::calculate(&inputs, ChoicePolicy::Strict, now()),
            Err(ValidationError::MissingOrInvalidField(ADJUSTED_TEMPERATURE.to_owned())),
        );
    }
}
