#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod client;
mod error;
pub mod models;
mod prelude;
pub mod quantity;
mod session;
mod variant;

pub use self::{
    client::{Client, DEFAULT_REQUEST_TIMEOUT},
    error::{ConnectionError, ConnectionErrorKind, Error, MappingError},
    models::{Device, Hardware, SmartBridge, SmartMeter},
    session::Ownership,
    variant::Variant,
};
