use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    prelude::*,
    quantity::{KilowattHours, WattHours, Watts},
};

/// Live reading of the meter, as reported by `/meter/now`.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct SmartBridge {
    /// Positive when consuming from the grid, negative when feeding in.
    pub power_flow: Watts,

    pub energy_consumption_total: KilowattHours,
    pub energy_production_total: KilowattHours,
}

/// Pure Energie and NET2GRID call the very same reading a smart meter.
pub type SmartMeter = SmartBridge;

impl SmartBridge {
    /// Map the decoded `/meter/now` response.
    ///
    /// The device reports the totals in watt-hours, they get converted into kilowatt-hours
    /// rounded to one decimal.
    pub fn from_value(value: &Value) -> Result<Self, MappingError> {
        let electricity = Response::deserialize(value).map_err(MappingError::Invalid)?.electricity;
        Ok(Self {
            power_flow: electricity.power.now.value,
            energy_consumption_total: KilowattHours::from(electricity.import.now.value)
                .round_to_tenths(),
            energy_production_total: KilowattHours::from(electricity.export.now.value)
                .round_to_tenths(),
        })
    }
}

#[derive(Deserialize)]
struct Response {
    #[serde(rename = "elec")]
    electricity: Electricity,
}

#[derive(Deserialize)]
struct Electricity {
    power: Register<Watts>,
    import: Register<WattHours>,
    export: Register<WattHours>,
}

#[derive(Deserialize)]
struct Register<T> {
    now: Reading<T>,
}

#[derive(Deserialize)]
struct Reading<T> {
    value: T,
}
