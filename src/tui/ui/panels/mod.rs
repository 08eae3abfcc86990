pub mod sm_sens_di;

use ratatui::prelude::*;

use crate::{config::UiConfig, modules::ModuleKind};

/// Dispatch to the configuration panel of `kind`.
pub fn render_panel(
    frame: &mut Frame,
    area: Rect,
    kind: ModuleKind,
    slot_num: u32,
    config: &UiConfig,
) {
    match kind {
        ModuleKind::SmSensDi => sm_sens_di::render(frame, area, slot_num, config),
    }
}
