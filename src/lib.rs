//! Generates the extension's PNG icons: a rounded blue plate with a white
//! lightning bolt, one file per size under `icons/`.

pub mod batch;
pub mod config;
pub mod error;
pub mod font;
pub mod icon;
pub mod logger;

pub use config::IconConfig;
pub use error::{FontError, IconError};
