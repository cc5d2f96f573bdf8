//! Records returned by the device API.

mod device;
mod smart_bridge;

pub use self::{
    device::{Device, Hardware},
    smart_bridge::{SmartBridge, SmartMeter},
};
