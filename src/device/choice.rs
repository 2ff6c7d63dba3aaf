/// How to treat an enumerated field holding an unknown token.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ChoicePolicy {
    /// Silently fall back to the field's default.
    #[default]
    Lenient,

    /// Fail the calculation with a validation error.
    Strict,
}

/// Enumerated field value, parsed from a lower-cased token.
pub trait Choice: Copy + Default {
    fn from_token(token: &str) -> Option<Self>;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ModeType {
    #[default]
    Summer,
    Winter,
}

impl Choice for ModeType {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "summer" => Some(Self::Summer),
            "winter" => Some(Self::Winter),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ProgramType {
    #[default]
    Normal,
    Eco,
}

impl Choice for ProgramType {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "normal" => Some(Self::Normal),
            "eco" => Some(Self::Eco),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FanSpeed {
    #[default]
    Low,
    Medium,
    High,
}

impl Choice for FanSpeed {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Yes/no answer, «no» unless stated otherwise.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Toggle {
    #[default]
    No,
    Yes,
}

impl Toggle {
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl Choice for Toggle {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }
}
