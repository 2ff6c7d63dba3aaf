use chrono::{DateTime, Local};

use crate::{
    device::{
        Appliance,
        choice::{ChoicePolicy, ProgramType, Toggle},
        inputs::{RawInputs, ValidationError},
        metric::{EXTRA_WATER, MetricDescriptor, PROGRAM_TYPE, USAGE_TIME},
    },
    quantity::{
        power::Kilowatts,
        rate::{KilowattHourRate, LiterRate},
        time::{Hours, Minutes},
        volume::LitersPerHour,
    },
    usage::{UsageResult, UtilityUsage},
};

const ELECTRICITY_RATE: KilowattHourRate = KilowattHourRate(0.20);
const WATER_RATE: LiterRate = LiterRate(0.005);
const EXTRA_WATER_FLOW: LitersPerHour = LitersPerHour(10.0);

/// Washing machine or dishwasher: both consume water and electricity the same way.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Washing {
    pub usage_time: Minutes,
    pub program: ProgramType,
    pub extra_water: Toggle,
}

impl Washing {
    fn water_flow(&self) -> LitersPerHour {
        let flow = match self.program {
            ProgramType::Eco => LitersPerHour(30.0),
            ProgramType::Normal => LitersPerHour(50.0),
        };
        if self.extra_water.is_on() { flow + EXTRA_WATER_FLOW } else { flow }
    }

    const fn draw(&self) -> Kilowatts {
        match self.program {
            ProgramType::Eco => Kilowatts(0.085),
            ProgramType::Normal => Kilowatts(0.1),
        }
    }
}

impl Appliance for Washing {
    const METRICS: &'static [MetricDescriptor] = &[
        MetricDescriptor::new(USAGE_TIME, "Input minutes"),
        MetricDescriptor::new(PROGRAM_TYPE, "Eco/Normal"),
        MetricDescriptor::new(EXTRA_WATER, "Yes/No"),
    ];

    fn parse(inputs: &RawInputs, policy: ChoicePolicy) -> Result<Self, ValidationError> {
        let [usage_time]: [f64; 1] = inputs.require([USAGE_TIME])?;
        Ok(Self {
            usage_time: Minutes(usage_time.max(0.0)),
            program: inputs.choice(PROGRAM_TYPE, policy)?,
            extra_water: inputs.choice(EXTRA_WATER, policy)?,
        })
    }

    fn usage(&self, timestamp: DateTime<Local>) -> UsageResult {
        let hours = Hours::from(self.usage_time);
        UsageResult::builder()
            .electricity(UtilityUsage::priced(self.draw() * hours, ELECTRICITY_RATE))
            .water(UtilityUsage::priced(self.water_flow() * hours, WATER_RATE))
            .usage_time(hours)
            .timestamp(timestamp)
            .build()
    }
}
