use ratatui::{prelude::*, style::Modifier, text::Line};
use unicode_width::UnicodeWidthStr;

pub(crate) const LABEL_PADDING_EXTRA: usize = 2;
pub(crate) const TARGET_LABEL_WIDTH: usize = 20;
pub(crate) const INDENT: &str = "  ";

/// Render a key/value line: indent, bold label padded to a common column,
/// then the value spans.
///
/// Label width is measured with `unicode-width` so CJK labels line up with
/// latin ones.
pub fn render_kv_line(label: impl ToString, value_spans: Vec<Span<'static>>) -> Line<'static> {
    let label_str = label.to_string();

    let label_width = label_str.width();
    let padding_needed = if label_width < TARGET_LABEL_WIDTH {
        TARGET_LABEL_WIDTH - label_width + LABEL_PADDING_EXTRA
    } else {
        LABEL_PADDING_EXTRA
    };

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::raw(INDENT));
    spans.push(Span::styled(
        label_str,
        Style::default().add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw(" ".repeat(padding_needed)));
    spans.extend(value_spans);

    Line::from(spans)
}

/// Convert label/value pairs into aligned lines with plain value text.
pub fn kv_pairs_to_lines(pairs: &[(String, String)]) -> Vec<Line<'static>> {
    pairs
        .iter()
        .map(|(label, value)| render_kv_line(label, vec![Span::raw(value.clone())]))
        .collect()
}
