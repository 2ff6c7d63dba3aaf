use chrono::{DateTime, Local};

use crate::{
    device::{
        Appliance,
        choice::{ChoicePolicy, FanSpeed, Toggle},
        inputs::{RawInputs, ValidationError},
        metric::{FAN_SPEED, MetricDescriptor, POLLEN_FILTER_CLEANING, USAGE_TIME},
    },
    quantity::{
        power::Kilowatts,
        rate::KilowattHourRate,
        time::{Hours, Minutes},
    },
    usage::{UsageResult, UtilityUsage},
};

const RATE: KilowattHourRate = KilowattHourRate(0.18);
const FILTER_CLEANING_DRAW: Kilowatts = Kilowatts(0.3);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AirHumidifier {
    pub usage_time: Minutes,
    pub fan_speed: FanSpeed,
    pub pollen_filter_cleaning: Toggle,
}

impl AirHumidifier {
    fn draw(&self) -> Kilowatts {
        let draw = match self.fan_speed {
            FanSpeed::Low => Kilowatts(0.5),
            FanSpeed::Medium => Kilowatts(0.8),
            FanSpeed::High => Kilowatts(1.2),
        };
        if self.pollen_filter_cleaning.is_on() { draw + FILTER_CLEANING_DRAW } else { draw }
    }
}

impl Appliance for AirHumidifier {
    const METRICS: &'static [MetricDescriptor] = &[
        MetricDescriptor::new(USAGE_TIME, "Input minutes"),
        MetricDescriptor::new(FAN_SPEED, "Low/Medium/High"),
        MetricDescriptor::new(POLLEN_FILTER_CLEANING, "Yes/No"),
    ];

    fn parse(inputs: &RawInputs, policy: ChoicePolicy) -> Result<Self, ValidationError> {
        let [usage_time]: [f64; 1] = inputs.require([USAGE_TIME])?;
        Ok(Self {
            usage_time: Minutes(usage_time.max(0.0)),
            fan_speed: inputs.choice(FAN_SPEED, policy)?,
            pollen_filter_cleaning: inputs.choice(POLLEN_FILTER_CLEANING, policy)?,
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
