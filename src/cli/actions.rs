use anyhow::{Context, Result};
use std::path::Path;

use crate::{
    config::{read_document, DeviceConfig, UiConfig},
    modules::{sm_sens_di, ExtendedModule, ModuleKind},
};

pub fn print_default(compact: bool) -> Result<()> {
    println!("{}", sm_sens_di::default_config().to_json(compact)?);
    Ok(())
}

/// Pick the module whose converters apply to a configuration, falling back to
/// SM SENS DI for article numbers outside the catalog.
fn module_for(mlfb: &str) -> &'static dyn ExtendedModule {
    match ModuleKind::from_mlfb(mlfb) {
        Some(kind) => kind.module(),
        None => {
            log::warn!("Unknown article number {mlfb:?}, using SM SENS DI converters");
            ModuleKind::SmSensDi.module()
        }
    }
}

pub fn device_to_ui(device: &DeviceConfig) -> UiConfig {
    module_for(&device.mlfb).to_ui_format(device)
}

pub fn ui_to_device(ui: &UiConfig) -> DeviceConfig {
    module_for(&ui.mlfb).to_device_format(ui)
}

pub fn convert_to_ui(input: &Path, compact: bool) -> Result<()> {
    let device: DeviceConfig = read_document(input)?;
    let ui = device_to_ui(&device);
    log::info!(
        "Converted device configuration for {} to UI format",
        ui.mlfb
    );
    println!("{}", ui.to_json(compact)?);
    Ok(())
}

pub fn convert_to_device(input: &Path, compact: bool) -> Result<()> {
    let ui: UiConfig = read_document(input)?;
    let device = ui_to_device(&ui);
    log::info!(
        "Converted UI configuration for {} to device format",
        device.mlfb
    );
    println!("{}", device.to_json(compact)?);
    Ok(())
}

pub fn show_panel(slot_num: u32, config: Option<&Path>) -> Result<()> {
    let ui = match config {
        Some(path) => {
            let device: DeviceConfig = read_document(path)
                .with_context(|| format!("Cannot load configuration for slot {slot_num}"))?;
            device_to_ui(&device)
        }
        None => sm_sens_di::default_config(),
    };
    crate::tui::start(slot_num, ui)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_mlfb_uses_sm_sens_di_converters() {
        let ui = UiConfig {
            mlfb: "6ES7000-0XX00-0XX0".to_string(),
        };
        let device = ui_to_device(&ui);
        assert_eq!(device.description, "TBD");
        assert_eq!(device_to_ui(&device), ui);
    }
}
