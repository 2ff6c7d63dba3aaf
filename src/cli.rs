use clap::{Parser, Subcommand};
use homepilot::{
    device::{Device, choice::ChoicePolicy, inputs::RawInputs},
    prelude::*,
    registry::Registry,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the available devices and the metrics they ask for.
    Devices,

    /// Calculate consumption and cost of a single usage session.
    Calculate(Box<CalculateArgs>),

    /// Print the display name a historical device name is grouped under.
    Normalize(NormalizeArgs),
}

#[derive(Parser)]
pub struct CalculateArgs {
    /// Device selection index or name, for example `0` or `washing machine`.
    pub device: String,

    /// Metric value, for example `-i "Usage Time=60"`.
    #[clap(short = 'i', long = "input", value_parser = parse_input)]
    pub inputs: Vec<(String, String)>,

    /// What to do with enumerated values the device does not recognize.
    #[clap(long = "choices", value_enum, default_value = "lenient", env = "HOMEPILOT_CHOICES")]
    pub choice_policy: ChoicePolicy,

    /// Exit with the validation error instead of showing a zeroed result.
    #[clap(long, env = "HOMEPILOT_FAIL_HARD")]
    pub fail_hard: bool,

    /// Print the result as JSON.
    #[clap(long)]
    pub json: bool,
}

impl CalculateArgs {
    pub fn resolve_device(&self, registry: &Registry) -> Result<Device> {
        let device = match self.device.trim().parse::<usize>() {
            Ok(index) => registry.get(index),
            Err(_) => registry.find_by_name(&self.device),
        };
        device.with_context(|| format!("unknown device `{}`", self.device))
    }

    pub fn raw_inputs(&self) -> RawInputs {
        self.inputs.iter().cloned().collect()
    }
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Device name as stored in a historical record.
    pub name: String,
}

fn parse_input(input: &str) -> Result<(String, String)> {
    let (name, value) = input.split_once('=').context("expected `name=value`")?;
    let name = name.trim();
    ensure!(!name.is_empty(), "metric name is empty");
    Ok((name.to_owned(), value.trim().to_owned()))
}
