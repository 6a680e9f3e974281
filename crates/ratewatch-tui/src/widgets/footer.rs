//! Page footer widget
//!
//! Three stacked text lines: the hourly-update disclaimer, the last-updated
//! stamp when one is known, and the copyright notice. The stamp line is
//! omitted entirely when no update has been seen; nothing is rendered in its
//! place.

use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use ratewatch_core::{format_local, Clock, LastUpdated, SystemClock};

use crate::theme::styles;

/// Fixed disclaimer shown as the first footer line
pub const DISCLAIMER: &str = "Exchange rates are updated hourly";

/// Page footer with disclaimer, optional last-updated stamp, and copyright
pub struct PageFooter<'a> {
    last_updated: LastUpdated,
    clock: &'a dyn Clock,
}

impl<'a> PageFooter<'a> {
    pub fn new(last_updated: LastUpdated) -> Self {
        Self {
            last_updated,
            clock: &SystemClock,
        }
    }

    /// Override the time source (tests pin the year with a [`FixedClock`])
    ///
    /// [`FixedClock`]: ratewatch_core::FixedClock
    pub fn with_clock(mut self, clock: &'a dyn Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Copyright notice for the year the clock reports right now.
    /// The year is read on every call, never cached.
    fn copyright_notice(&self) -> String {
        let year = self.clock.now().year();
        format!("© {year} Godel Technologies. All rights reserved.")
    }

    /// Footer lines in display order
    fn build_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::styled(DISCLAIMER, styles::text_secondary())];

        if let LastUpdated::At(at) = self.last_updated {
            lines.push(Line::from(vec![
                Span::styled("Last updated: ", styles::text_muted()),
                Span::styled(format_local(&at), styles::text_primary()),
            ]));
        }

        lines.push(Line::styled(self.copyright_notice(), styles::text_muted()));
        lines
    }
}

impl Widget for PageFooter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Top border doubles as the separator from the rate table
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles::border_inactive());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Paragraph::new(self.build_lines()).render(inner, buf);
    }
}
