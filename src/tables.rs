use std::fmt::Display;

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use gridnet::{Device, SmartBridge};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_device_table(device: &Device) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Model", "Batch", "Firmware", "Hardware", "Manufacturer"]);
    table.add_row(vec![
        Cell::new(&device.id).add_attribute(Attribute::Bold),
        Cell::new(&device.model),
        optional_cell(device.batch.as_ref()),
        Cell::new(&device.firmware),
        optional_cell(device.hardware.as_ref()),
        Cell::new(&device.manufacturer),
    ]);
    table
}

pub fn build_smart_bridge_table(smart_bridge: &SmartBridge) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Power", "Consumption", "Production"]);
    table.add_row(vec![
        Cell::new(smart_bridge.power_flow)
            .set_alignment(CellAlignment::Right)
            .fg(if smart_bridge.power_flow.is_import() { Color::Red } else { Color::Green }),
        Cell::new(format!("{:.1}", smart_bridge.energy_consumption_total))
            .set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.1}", smart_bridge.energy_production_total))
            .set_alignment(CellAlignment::Right),
    ]);
    table
}

fn optional_cell<T: Display>(value: Option<&T>) -> Cell {
    value.map_or_else(|| Cell::new("-").add_attribute(Attribute::Dim), Cell::new)
}
