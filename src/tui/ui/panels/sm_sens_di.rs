use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::*,
};

use crate::{
    config::UiConfig,
    modules::{ExtendedModule, SmSensDi},
    tui::ui::components::{render_module_info, MODULE_INFO_HEIGHT},
};

/// Render the SM SENS DI configuration panel.
///
/// The module has no editable settings, so the panel is a column holding
/// only the module info box. `slot_num` and `config` are accepted for parity
/// with the other panels and do not change the output.
pub fn render(frame: &mut Frame, area: Rect, _slot_num: u32, _config: &UiConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .spacing(2)
        .constraints([Constraint::Length(MODULE_INFO_HEIGHT), Constraint::Min(0)])
        .split(area);

    render_module_info(frame, chunks[0], &SmSensDi.info());
}
