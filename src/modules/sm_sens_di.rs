//! SM SENS DI digital input module.
//!
//! The module has no user adjustable settings. Its configuration only carries
//! the article number, which travels unchanged between the two formats.

use crate::{
    config::{DeviceConfig, UiConfig},
    modules::{ExtendedModule, ModuleInfoText, ModuleKind},
};

pub const DEFAULT_MLFB: &str = "6ES7647-0CM00-1AA2";

/// Placeholder written to the device for the free text description.
pub const DEVICE_DESCRIPTION: &str = "TBD";

pub const INFO_DESCRIPTION: &str = "SM SENS DI";
pub const INFO_ART_NUMBER: &str = "6ES 7647-0CM00-1AA2";
pub const INFO_FW_VERSION: &str = "NA";

pub fn default_config() -> UiConfig {
    UiConfig {
        mlfb: DEFAULT_MLFB.to_string(),
    }
}

pub fn to_ui_format(device: &DeviceConfig) -> UiConfig {
    UiConfig {
        mlfb: device.mlfb.clone(),
    }
}

pub fn to_device_format(ui: &UiConfig) -> DeviceConfig {
    DeviceConfig {
        description: DEVICE_DESCRIPTION.to_string(),
        mlfb: ui.mlfb.clone(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SmSensDi;

impl ExtendedModule for SmSensDi {
    fn kind(&self) -> ModuleKind {
        ModuleKind::SmSensDi
    }

    fn default_config(&self) -> UiConfig {
        default_config()
    }

    fn to_ui_format(&self, device: &DeviceConfig) -> UiConfig {
        log::debug!("SM SENS DI: device -> UI, mlfb={}", device.mlfb);
        to_ui_format(device)
    }

    fn to_device_format(&self, ui: &UiConfig) -> DeviceConfig {
        log::debug!("SM SENS DI: UI -> device, mlfb={}", ui.mlfb);
        to_device_format(ui)
    }

    fn info(&self) -> ModuleInfoText {
        ModuleInfoText {
            description: INFO_DESCRIPTION.to_string(),
            art_number: INFO_ART_NUMBER.to_string(),
            fw_version: INFO_FW_VERSION.to_string(),
        }
    }
}
