#[macro_use]
mod macros;

pub mod energy;
pub mod power;

pub use self::{
    energy::{KilowattHours, WattHours},
    power::Watts,
};
