pub mod ac;
pub mod choice;
pub mod combi;
pub mod humidifier;
pub mod inputs;
pub mod metric;
pub mod oven;
pub mod washing;

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Local};

use self::{
    ac::AirConditioner,
    choice::ChoicePolicy,
    combi::Combi,
    humidifier::AirHumidifier,
    inputs::{RawInputs, ValidationError},
    metric::MetricDescriptor,
    oven::Oven,
    washing::Washing,
};
use crate::{prelude::*, usage::UsageResult};

/// Typed appliance inputs together with the appliance's consumption formula.
pub trait Appliance: Sized {
    /// Input fields in the order they are presented to the user.
    const METRICS: &'static [MetricDescriptor];

    /// # Errors
    ///
    /// Fails on the first absent or malformed required field, or on an unknown choice in
    /// strict mode.
    fn parse(inputs: &RawInputs, policy: ChoicePolicy) -> Result<Self, ValidationError>;

    fn usage(&self, timestamp: DateTime<Local>) -> UsageResult;

    /// # Errors
    ///
    /// Same as [`Appliance::parse`].
    fn calculate(
        inputs: &RawInputs,
        policy: ChoicePolicy,
        timestamp: DateTime<Local>,
    ) -> Result<UsageResult, ValidationError> {
        Ok(Self::parse(inputs, policy)?.usage(timestamp))
    }
}

#[derive(Debug, Hash, enumset::EnumSetType)]
pub enum Device {
    Ac,
    Washer,
    Combi,
    AirHumidifier,
    Dishwasher,
    Oven,
}

impl Display for Device {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Device {
    /// Name shown to the user. Persisted records are grouped by it.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Washer => "Washer",
            Self::Combi => "Combi",
            Self::AirHumidifier => "Air Humidifier",
            Self::Dishwasher => "Dishwasher",
            Self::Oven => "Oven",
        }
    }

    #[must_use]
    pub const fn metrics(self) -> &'static [MetricDescriptor] {
        match self {
            Self::Ac => AirConditioner::METRICS,
            Self::Washer | Self::Dishwasher => Washing::METRICS,
            Self::Combi => Combi::METRICS,
            Self::AirHumidifier => AirHumidifier::METRICS,
            Self::Oven => Oven::METRICS,
        }
    }

    /// Resolve a device from any of the names historical records were stored under.
    #[must_use]
    pub fn from_alias(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "ac" | "air conditioning" | "air conditioner" => Some(Self::Ac),
            "washer" | "washing machine" => Some(Self::Washer),
            "combi" | "boiler" => Some(Self::Combi),
            "air humidifier" | "humidifier" | "ah" => Some(Self::AirHumidifier),
            "dishwasher" => Some(Self::Dishwasher),
            "oven" => Some(Self::Oven),
            _ => None,
        }
    }

    /// # Errors
    ///
    /// Fails when the inputs do not validate for this device.
    #[instrument(skip_all, fields(device = self.name()))]
    pub fn calculate(
        self,
        inputs: &RawInputs,
        policy: ChoicePolicy,
        timestamp: DateTime<Local>,
    ) -> Result<UsageResult, ValidationError> {
        let result = match self {
            Self::Ac => AirConditioner::calculate(inputs, policy, timestamp),
            Self::Washer | Self::Dishwasher => Washing::calculate(inputs, policy, timestamp),
            Self::Combi => Combi::calculate(inputs, policy, timestamp),
            Self::AirHumidifier => AirHumidifier::calculate(inputs, policy, timestamp),
            Self::Oven => Oven::calculate(inputs, policy, timestamp),
        }?;
        debug!(total_cost = %result.total_cost(), "calculated");
        Ok(result)
    }

    /// Same as [`Device::calculate`], but a validation error renders as a zeroed result.
    pub fn calculate_or_zero(
        self,
        inputs: &RawInputs,
        policy: ChoicePolicy,
        timestamp: DateTime<Local>,
    ) -> UsageResult {
        self.calculate(inputs, policy, timestamp).unwrap_or_else(|error| {
            warn!(device = self.name(), %error, "falling back to zero usage");
            UsageResult::zero(timestamp)
        })
    }
}
