//! Header bar widget
//!
//! Shows the app title, the configured base currency, the feed indicator,
//! and keybinding hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use ratewatch_app::state::FeedPhase;

use crate::theme::{palette, styles};

/// Main header showing app title, base currency, and keybindings
pub struct MainHeader<'a> {
    base_currency: &'a str,
    phase: FeedPhase,
}

impl<'a> MainHeader<'a> {
    pub fn new(base_currency: &'a str, phase: FeedPhase) -> Self {
        Self {
            base_currency,
            phase,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (status_icon, status_label, status_style) = styles::feed_indicator(&self.phase);

        // Left section: feed dot + "Ratewatch" + "/" + base currency
        let left_spans = vec![
            Span::raw(" "),
            Span::styled(status_icon, status_style),
            Span::raw(" "),
            Span::styled("Ratewatch", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.base_currency.to_string(), styles::text_secondary()),
            Span::raw("  "),
            Span::styled(status_label, status_style),
        ];
        let left_line = Line::from(left_spans);
        let left_width = left_line.width() as u16;

        // Keybinding hints
        let shortcuts = vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("r", styles::keybinding()),
            Span::styled("] Refresh  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("q", styles::keybinding()),
            Span::styled("] Quit", styles::text_muted()),
        ];
        let shortcuts_line = Line::from(shortcuts);
        let shortcuts_width = shortcuts_line.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-align the shortcuts when they fit next to the left section
        if left_width + shortcuts_width + 3 <= inner.width {
            let shortcuts_x = inner.x + inner.width - shortcuts_width - 1;
            buf.set_line(shortcuts_x, inner.y, &shortcuts_line, shortcuts_width);
        }
    }
}
