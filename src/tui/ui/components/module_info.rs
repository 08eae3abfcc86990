use ratatui::{prelude::*, text::Line};

use crate::{
    i18n::lang,
    modules::ModuleInfoText,
    tui::ui::components::{boxed_paragraph::render_boxed_paragraph, kv_line::kv_pairs_to_lines},
};

/// Rows taken by the module info box: three fields plus the borders.
pub const MODULE_INFO_HEIGHT: u16 = 5;

pub fn module_info_lines(info: &ModuleInfoText) -> Vec<Line<'static>> {
    let pairs = vec![
        (lang().label_description.clone(), info.description.clone()),
        (lang().label_art_number.clone(), info.art_number.clone()),
        (lang().label_fw_version.clone(), info.fw_version.clone()),
    ];
    kv_pairs_to_lines(&pairs)
}

/// Render the read-only module information box (description, article number,
/// firmware version).
pub fn render_module_info(frame: &mut Frame, area: Rect, info: &ModuleInfoText) {
    render_boxed_paragraph(
        frame,
        area,
        module_info_lines(info),
        Some(lang().module_info_title.as_str()),
        false,
    );
}
