#![doc = include_str!("../README.md")]

mod cli;
mod tables;

use chrono::Local;
use clap::{Parser, crate_version};
use homepilot::{device::Device, prelude::*, registry::Registry};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, CalculateArgs, Command},
    tables::{build_registry_table, build_usage_table},
};

/// Sentinel the charts group unrecognized historical records under.
const UNKNOWN_DEVICE: &str = "Unknown Device";

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    info!(version = crate_version!(), "starting…");

    let registry = Registry::default();

    match Args::parse().command {
        Command::Devices => {
            println!("{}", build_registry_table(&registry));
        }
        Command::Calculate(args) => {
            calculate(&args, &registry)?;
        }
        Command::Normalize(args) => {
            println!("{}", Device::from_alias(&args.name).map_or(UNKNOWN_DEVICE, Device::name));
        }
    }

    Ok(())
}

#[instrument(skip_all, fields(device = %args.device))]
fn calculate(args: &CalculateArgs, registry: &Registry) -> Result {
    let device = args.resolve_device(registry)?;
    let inputs = args.raw_inputs();
    let timestamp = Local::now();

    let result = if args.fail_hard {
        device
            .calculate(&inputs, args.choice_policy, timestamp)
            .with_context(|| format!("failed to calculate the `{device}` usage"))?
    } else {
        device.calculate_or_zero(&inputs, args.choice_policy, timestamp)
    };
    info!(%device, total_cost = %result.total_cost(), "done");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", build_usage_table(device, &result));
    }
    Ok(())
}
