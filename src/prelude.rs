#![allow(unused_imports)]

pub use tracing::{Level, debug, info, instrument, warn};

pub use crate::error::{ConnectionError, Error, MappingError};

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
