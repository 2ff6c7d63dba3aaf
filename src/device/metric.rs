/// User input field a device asks for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MetricDescriptor {
    /// Unique within a device, doubles as the key in the raw inputs.
    pub name: &'static str,

    /// Hint shown in an empty input field.
    pub placeholder: &'static str,
}

impl MetricDescriptor {
    #[must_use]
    pub const fn new(name: &'static str, placeholder: &'static str) -> Self {
        Self { name, placeholder }
    }
}

pub const USAGE_TIME: &str = "Usage Time";
pub const ADJUSTED_TEMPERATURE: &str = "Adjusted Temperature";
pub const MODE_TYPE: &str = "Mode Type";
pub const PROGRAM_TYPE: &str = "Program Type";
pub const EXTRA_WATER: &str = "Extra Water";
pub const NUMBER_OF_RADIATORS: &str = "Number of Radiators";
pub const FAN_SPEED: &str = "Fan Speed";
pub const POLLEN_FILTER_CLEANING: &str = "Pollen Filter Cleaning";
