use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use homepilot::{device::Device, registry::Registry, usage::UsageResult};
use itertools::Itertools;

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

#[must_use]
pub fn build_registry_table(registry: &Registry) -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Device", "Metric", "Hint"]);
    for (index, device) in registry.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index).add_attribute(Attribute::Dim),
            Cell::new(device).add_attribute(Attribute::Bold),
            Cell::new(device.metrics().iter().map(|metric| metric.name).join("\n")),
            Cell::new(device.metrics().iter().map(|metric| metric.placeholder).join("\n"))
                .add_attribute(Attribute::Dim),
        ]);
    }
    table
}

#[must_use]
pub fn build_usage_table(device: Device, result: &UsageResult) -> Table {
    let mut table = new_table();
    table.set_header(vec![Cell::new(device), Cell::new("Usage"), Cell::new("Cost")]);
    if let Some(electricity) = result.electricity() {
        table.add_row(vec![
            Cell::new("Electricity").fg(Color::DarkYellow),
            Cell::new(electricity.usage).set_alignment(CellAlignment::Right),
            Cell::new(electricity.cost).set_alignment(CellAlignment::Right),
        ]);
    }
    if let Some(water) = result.water() {
        table.add_row(vec![
            Cell::new("Water").fg(Color::Blue),
            Cell::new(water.usage).set_alignment(CellAlignment::Right),
            Cell::new(water.cost).set_alignment(CellAlignment::Right),
        ]);
    }
    if let Some(gas) = result.gas() {
        table.add_row(vec![
            Cell::new("Gas").fg(Color::Red),
            Cell::new(gas.usage).set_alignment(CellAlignment::Right),
            Cell::new(gas.cost).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(result.usage_time().map_or_else(String::new, |hours| hours.to_string()))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Dim),
        Cell::new(result.total_cost())
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold)
            .fg(if result.is_zero() { Color::DarkGrey } else { Color::Reset }),
    ]);
    table
}
