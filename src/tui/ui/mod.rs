pub mod components;
pub mod panels;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::{i18n::lang, tui::app::App, tui::ui::components::render_boxed_paragraph};

/// Render the whole screen: title bar, slot panel and bottom hint.
pub fn render_ui(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(0),
            Constraint::Length(1), // bottom help
        ])
        .split(area);

    let title = Paragraph::new(lang().title.as_str())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Rgb(0, 150, 0))
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, main_chunks[0]);

    let slot_title = match app.kind {
        Some(kind) => format!(" {} {} - {} ", lang().slot_label, app.slot_num, kind),
        None => format!(" {} {} ", lang().slot_label, app.slot_num),
    };
    let slot_block = Block::default().borders(Borders::ALL).title(slot_title);
    let inner = slot_block.inner(main_chunks[1]);
    frame.render_widget(slot_block, main_chunks[1]);

    match app.kind {
        Some(kind) => panels::render_panel(frame, inner, kind, app.slot_num, &app.config),
        None => render_boxed_paragraph(
            frame,
            inner,
            vec![Line::from(format!(
                "{}: {}",
                lang().unknown_module,
                app.config.mlfb
            ))],
            None,
            true,
        ),
    }

    let hint = Paragraph::new(lang().press_q_quit.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, main_chunks[2]);
}
