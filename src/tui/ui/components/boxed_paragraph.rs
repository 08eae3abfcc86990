use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

/// Render lines inside a bordered block.
///
/// - `title`: optional block title, rendered as ` title `
/// - `wrap`: whether long lines wrap instead of being clipped
pub fn render_boxed_paragraph(
    frame: &mut Frame,
    area: Rect,
    content: Vec<Line>,
    title: Option<&str>,
    wrap: bool,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .padding(Padding::left(1));
    if let Some(title_text) = title {
        block = block.title(format!(" {title_text} "));
    }

    let mut para = Paragraph::new(content).block(block);
    if wrap {
        para = para.wrap(Wrap { trim: true });
    }

    frame.render_widget(para, area);
}
