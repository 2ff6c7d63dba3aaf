use chrono::{DateTime, Local};

use crate::{
    device::{
        Appliance,
        choice::{ChoicePolicy, FanSpeed},
        inputs::{RawInputs, ValidationError},
        metric::{ADJUSTED_TEMPERATURE, FAN_SPEED, MetricDescriptor, USAGE_TIME},
    },
    quantity::{
        power::Kilowatts,
        rate::KilowattHourRate,
        time::{Hours, Minutes},
    },
    usage::{UsageResult, UtilityUsage},
};

const RATE: KilowattHourRate = KilowattHourRate(0.10);
const BASE_DRAW: Kilowatts = Kilowatts(1.0);
const THRESHOLD_TEMPERATURE: f64 = 120.0;

/// Gas oven.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Oven {
    pub usage_time: Minutes,
    pub temperature: f64,
    pub fan_speed: FanSpeed,
}

impl Oven {
    fn draw(&self) -> Kilowatts {
        let overheat = (self.temperature - THRESHOLD_TEMPERATURE).max(0.0);
        let fan = match self.fan_speed {
            FanSpeed::Low => Kilowatts::ZERO,
            FanSpeed::Medium => Kilowatts(0.2),
            FanSpeed::High => Kilowatts(0.4),
        };
        BASE_DRAW + Kilowatts(0.05) * overheat + fan
    }
}

impl Appliance for Oven {
    const METRICS: &'static [MetricDescriptor] = &[
        MetricDescriptor::new(USAGE_TIME, "Input minutes"),
        MetricDescriptor::new(ADJUSTED_TEMPERATURE, "Input an integer value"),
        MetricDescriptor::new(FAN_SPEED, "Low/Medium/High"),
    ];

    fn parse(inputs: &RawInputs, policy: ChoicePolicy) -> Result<Self, ValidationError> {
        let [usage_time, temperature]: [f64; 2] =
            inputs.require([USAGE_TIME, ADJUSTED_TEMPERATURE])?;
        Ok(Self {
            usage_time: Minutes(usage_time.max(0.0)),
            temperature,
            fan_speed: inputs.choice(FAN_SPEED, policy)?,
        })
    }

    fn usage(&self, timestamp: DateTime<Local>) -> UsageResult {
        let hours = Hours::from(self.usage_time);
        UsageResult::builder()
            .gas(UtilityUsage::priced(self.draw() * hours, RATE))
            .usage_time(hours)
            .timestamp(timestamp)
            .build()
    }
}
