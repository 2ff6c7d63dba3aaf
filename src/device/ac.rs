use chrono::{DateTime, Local};

use crate::{
    device::{
        Appliance,
        choice::{ChoicePolicy, ModeType},
        inputs::{RawInputs, ValidationError},
        metric::{ADJUSTED_TEMPERATURE, MODE_TYPE, MetricDescriptor, USAGE_TIME},
    },
    quantity::{
        power::Kilowatts,
        rate::KilowattHourRate,
        time::{Hours, Minutes},
    },
    usage::{UsageResult, UtilityUsage},
};

const RATE: KilowattHourRate = KilowattHourRate(0.20);

/// Air conditioner, electricity only.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AirConditioner {
    pub usage_time: Minutes,
    pub temperature: f64,
    pub mode: ModeType,
}

impl AirConditioner {
    /// Cooling below 24 °C and heating above 22 °C run the compressor harder.
    fn draw(&self) -> Kilowatts {
        match self.mode {
            ModeType::Summer if self.temperature < 24.0 => Kilowatts(2.0),
            ModeType::Summer => Kilowatts(1.2),
            ModeType::Winter if self.temperature > 22.0 => Kilowatts(2.5),
            ModeType::Winter => Kilowatts(1.5),
        }
    }
}

impl Appliance for AirConditioner {
    const METRICS: &'static [MetricDescriptor] = &[
        MetricDescriptor::new(USAGE_TIME, "Input minutes"),
        MetricDescriptor::new(MODE_TYPE, "Summer/Winter mode"),
        MetricDescriptor::new(ADJUSTED_TEMPERATURE, "Input an integer value"),
    ];

    fn parse(inputs: &RawInputs, policy: ChoicePolicy) -> Result<Self, ValidationError> {
        let [usage_time, temperature]: [f64; 2] =
            inputs.require([USAGE_TIME, ADJUSTED_TEMPERATURE])?;
        Ok(Self {
            usage_time: Minutes(usage_time.max(0.0)),
            temperature,
            mode: inputs.choice(MODE_TYPE, policy)?,
        })
    }

    fn usage(&self, timestamp: DateTime<Local>) -> UsageResult {
        let hours = Hours::from(self.usage_time);
        UsageResult::builder()
            .electricity(UtilityUsage::priced(self.draw() * hours, RATE))
            .usage_time(hours)
            .timestamp(timestamp)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::device::tests::now;

    fn calculate(minutes: &str, temperature: &str, mode: &str) -> UsageResult {
        let inputs = RawInputs::from_iter([
            (USAGE_TIME, minutes),
            (ADJUSTED_TEMPERATURE, temperature),
            (MODE_TYPE, mode),
        ]);
        AirConditioner::calculate(&inputs, ChoicePolicy::Strict, now()).unwrap()
    }

    #[test]
    fn test_summer_cold() {
        let result = calculate("60", "20", "summer");
        let electricity = result.electricity().unwrap();
        assert_abs_diff_eq!(electricity.usage.0, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(electricity.cost.0, 0.40, epsilon = 1e-9);
        assert_abs_diff_eq!(result.total_cost().0, 0.40, epsilon = 1e-9);
        assert_abs_diff_eq!(result.usage_time().unwrap().0, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_summer_warm() {
        let electricity = calculate("60", "26", "Summer").electricity().unwrap();
        assert_abs_diff_eq!(electricity.usage.0, 1.2, epsilon = 1e-9);
        assert_abs_diff_eq!(electricity.cost.0, 0.24, epsilon = 1e-9);
    }

    #[test]
    fn test_winter_warm() {
        let electricity = calculate("120", "25", "WINTER").electricity().unwrap();
        assert_abs_diff_eq!(electricity.usage.0, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(electricity.cost.0, 1.00, epsilon = 1e-9);
    }

    #[test]
    fn test_winter_cool() {
        let electricity = calculate("60", "22", "winter").electricity().unwrap();
        assert_abs_diff_eq!(electricity.usage.0, 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_mode_defaults_to_summer() {
        let inputs = RawInputs::from_iter([(USAGE_TIME, "60"), (ADJUSTED_TEMPERATURE, "20")]);
        let result = AirConditioner::calculate(&inputs, ChoicePolicy::Strict, now()).unwrap();
        assert_abs_diff_eq!(result.electricity().unwrap().usage.0, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_electricity_only() {
        let result = calculate("30", "20", "summer");
        assert!(result.water().is_none());
        assert!(result.gas().is_none());
    }
}
