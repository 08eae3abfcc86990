//! Extension modules that can be plugged into the gateway's extension slots.
//!
//! Every module panel offers the host the same surface: a default
//! configuration for freshly inserted modules, the converters between the
//! device and UI formats, and the static text shown by the module info box.

pub mod sm_sens_di;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::config::{DeviceConfig, UiConfig};

pub use sm_sens_di::SmSensDi;

/// Static descriptive text handed to the module info display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfoText {
    pub description: String,
    pub art_number: String,
    pub fw_version: String,
}

/// Supported extension module kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    #[strum(to_string = "SM SENS DI")]
    SmSensDi,
}

impl ModuleKind {
    /// Return the panel implementation for this kind.
    pub fn module(self) -> &'static dyn ExtendedModule {
        match self {
            ModuleKind::SmSensDi => &SmSensDi,
        }
    }

    /// Recognise a module from the article number stored in its configuration.
    pub fn from_mlfb(mlfb: &str) -> Option<Self> {
        ModuleKind::iter().find(|kind| kind.module().default_config().mlfb == mlfb)
    }
}

pub trait ExtendedModule {
    fn kind(&self) -> ModuleKind;

    /// Configuration used for a newly inserted module before any user edits.
    fn default_config(&self) -> UiConfig;

    fn to_ui_format(&self, device: &DeviceConfig) -> UiConfig;

    fn to_device_format(&self, ui: &UiConfig) -> DeviceConfig;

    fn info(&self) -> ModuleInfoText;
}

/// Callback through which a panel reports edited settings to its host.
pub trait ConfigSink {
    fn update_config(&mut self, slot_num: u32, config: UiConfig);
}

/// The host's record of a module sitting in an extension slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    pub slot_num: u32,
    pub config: DeviceConfig,
}

impl SlotConfig {
    pub fn new_default(slot_num: u32, kind: ModuleKind) -> Self {
        let module = kind.module();
        Self {
            slot_num,
            config: module.to_device_format(&module.default_config()),
        }
    }

    /// Kind of the module in this slot, if its article number is known.
    pub fn kind(&self) -> Option<ModuleKind> {
        ModuleKind::from_mlfb(&self.config.mlfb)
    }
}
