//! iot2050-conf: configuration panels for IOT2050 extension modules
//!
//! The library holds the configuration records exchanged with the gateway,
//! the per-module converters between the device and UI formats, and the
//! terminal panels that present each module. The binary wraps them in a small
//! CLI (`default`, `to-ui`, `to-device`, `show`).

#[doc(hidden)]
pub mod cli;
pub mod config;
pub mod i18n;
pub mod modules;
#[doc(hidden)]
pub mod tui;

pub use config::{DeviceConfig, UiConfig};
pub use modules::{
    sm_sens_di, ConfigSink, ExtendedModule, ModuleInfoText, ModuleKind, SlotConfig, SmSensDi,
};
