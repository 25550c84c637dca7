//! Rendering of the console view into a ratatui frame.

use std::ops::Range;

use ratatui::{
    layout::{Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;
use crate::console::view::{ConsoleView, InputView, ToastView};
use crate::console::Rect as ConsoleRect;

/// Draw a full console frame: border, scrollback, input line, scrollbar and
/// copy toast.
pub fn render_console(frame: &mut Frame, view: &ConsoleView, theme: &Theme) {
    let area = frame.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style())
        .title(Line::from(Span::styled(" deskcon ", theme.prompt_style())))
        .title_bottom(Line::from(vec![
            Span::styled(" Ctrl+Q", theme.prompt_style()),
            Span::styled(" quit  ", theme.text_secondary_style()),
            Span::styled("Ctrl+C", theme.prompt_style()),
            Span::styled(" copy  ", theme.text_secondary_style()),
            Span::styled("Ctrl+V", theme.prompt_style()),
            Span::styled(" paste ", theme.text_secondary_style()),
        ]));
    frame.render_widget(block, area);

    render_scrollback(frame, view, theme);
    render_input(frame, &view.input, to_cells(view.input_area), theme);
    render_scrollbar(frame, view, area);
    if let Some(toast) = &view.toast {
        render_toast(frame, toast, theme);
    }
}

fn render_scrollback(frame: &mut Frame, view: &ConsoleView, theme: &Theme) {
    let area = to_cells(view.scroll_area);
    for line in &view.lines {
        let row = line.y.round();
        if row < f32::from(area.y) || row >= f32::from(area.bottom()) {
            continue;
        }
        let style = theme.line_style(line.tag);
        let spans = styled_spans(&line.text, line.selection.clone(), style, theme.selection_style());
        let row_area = Rect::new(area.x, row as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

fn render_input(frame: &mut Frame, input: &InputView, area: Rect, theme: &Theme) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let mut spans = vec![Span::styled(input.prompt.clone(), theme.prompt_style())];
    spans.extend(styled_spans(
        &input.text,
        input.selection.clone(),
        theme.line_style(crate::console::LineTag::Output),
        theme.selection_style(),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if input.focused {
        let before: String = input.text.chars().take(input.cursor).collect();
        let x = area.x as usize + input.prompt.width() + before.width();
        let x = x.min(area.right().saturating_sub(1) as usize) as u16;
        frame.set_cursor_position((x, area.y));
    }
}

fn render_scrollbar(frame: &mut Frame, view: &ConsoleView, area: Rect) {
    let metrics = view.scroll;
    if metrics.content_height <= metrics.viewport_height {
        return;
    }
    let content = metrics.content_height.ceil() as usize;
    let viewport = metrics.viewport_height.max(0.0) as usize;
    let max_offset = content.saturating_sub(viewport);
    let mut state = ScrollbarState::new(max_offset)
        .position(metrics.offset.round() as usize)
        .viewport_content_length(viewport);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None);
    frame.render_stateful_widget(
        scrollbar,
        area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut state,
    );
}

fn render_toast(frame: &mut Frame, toast: &ToastView, theme: &Theme) {
    let frame_area = frame.area();
    let label = format!(" {} ", toast.text);
    let width = (label.width() as u16).min(frame_area.width);
    let x = (toast.x.max(0.0) as u16).min(frame_area.right().saturating_sub(width));
    let y = (toast.y.max(0.0) as u16).min(frame_area.bottom().saturating_sub(1));
    let area = Rect::new(x, y, width, 1);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(Span::styled(label, theme.toast_style(toast.opacity))),
        area,
    );
}

/// Split `text` into plain and selected spans.
fn styled_spans(text: &str, selection: Option<Range<usize>>, base: Style, selected: Style) -> Vec<Span<'static>> {
    let Some(range) = selection else {
        return vec![Span::styled(text.to_string(), base)];
    };
    let before: String = text.chars().take(range.start).collect();
    let inside: String = text.chars().skip(range.start).take(range.len()).collect();
    let after: String = text.chars().skip(range.end).collect();
    [(before, base), (inside, selected), (after, base)]
        .into_iter()
        .filter(|(s, _)| !s.is_empty())
        .map(|(s, style)| Span::styled(s, style))
        .collect()
}

/// Console rectangles are in cells for the terminal host.
fn to_cells(rect: ConsoleRect) -> Rect {
    Rect::new(
        rect.x.max(0.0) as u16,
        rect.y.max(0.0) as u16,
        rect.width.max(0.0) as u16,
        rect.height.max(0.0) as u16,
    )
}
