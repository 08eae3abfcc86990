// Render the terminal panels into an in-memory backend and inspect the text

use anyhow::{Context, Result};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use iot2050_conf::{
    i18n::lang,
    sm_sens_di,
    tui::{app::App, ui::panels, ui::render_ui},
    DeviceConfig, UiConfig,
};

fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

fn render_panel(slot_num: u32, config: &UiConfig) -> Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(80, 12))?;
    terminal.draw(|f| {
        let area = f.area();
        panels::sm_sens_di::render(f, area, slot_num, config);
    })?;
    Ok(buffer_lines(terminal.backend().buffer()).join("\n"))
}

#[test]
fn test_panel_shows_fixed_module_info() -> Result<()> {
    let text = render_panel(1, &sm_sens_di::default_config())?;
    assert!(text.contains("SM SENS DI"));
    assert!(text.contains("6ES 7647-0CM00-1AA2"));

    let fw_label = lang().label_fw_version.as_str();
    let fw_row = text
        .lines()
        .find(|line| line.contains(fw_label))
        .context("firmware version row not rendered")?;
    let value = fw_row.trim_end().trim_end_matches('│').trim_end();
    assert!(value.ends_with(" NA"), "unexpected row: {fw_row:?}");
    Ok(())
}

#[test]
fn test_panel_ignores_slot_and_config() -> Result<()> {
    let reference = render_panel(1, &sm_sens_di::default_config())?;
    let other_config = UiConfig {
        mlfb: "something else".to_string(),
    };
    for slot in [0, 2, 7, u32::MAX] {
        assert_eq!(render_panel(slot, &other_config)?, reference);
    }
    assert!(!reference.contains("something else"));
    Ok(())
}

#[test]
fn test_screen_shows_slot_and_module_name() -> Result<()> {
    let device = DeviceConfig {
        description: "TBD".to_string(),
        mlfb: "6ES7647-0CM00-1AA2".to_string(),
    };
    let app = App::new(4, sm_sens_di::to_ui_format(&device));

    let mut terminal = Terminal::new(TestBackend::new(80, 16))?;
    terminal.draw(|f| render_ui(f, &app))?;
    let text = buffer_lines(terminal.backend().buffer()).join("\n");

    assert!(text.contains("4 - SM SENS DI"));
    assert!(text.contains("6ES 7647-0CM00-1AA2"));
    Ok(())
}

#[test]
fn test_screen_reports_unknown_module() -> Result<()> {
    let app = App::new(
        2,
        UiConfig {
            mlfb: "6ES7000-UNKNOWN".to_string(),
        },
    );
    assert!(app.kind.is_none());

    let mut terminal = Terminal::new(TestBackend::new(80, 16))?;
    terminal.draw(|f| render_ui(f, &app))?;
    let text = buffer_lines(terminal.backend().buffer()).join("\n");

    assert!(text.contains("6ES7000-UNKNOWN"));
    assert!(!text.contains("6ES 7647-0CM00-1AA2"));
    Ok(())
}
