//! Rate board table widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Cell, Paragraph, Row, Table, Widget},
};

use ratewatch_core::RateBoard;

use crate::theme::{palette, styles};

/// Table of quoted pairs, or a placeholder until the first snapshot lands
pub struct RateTable<'a> {
    board: &'a RateBoard,
}

impl<'a> RateTable<'a> {
    pub fn new(board: &'a RateBoard) -> Self {
        Self { board }
    }
}

impl Widget for RateTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Line::styled(" Rates ", styles::text_secondary()))
            .style(Style::default().bg(palette::CARD_BG));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.board.is_empty() {
            Paragraph::new(Line::styled(
                "Waiting for the first rate update",
                styles::text_muted(),
            ))
            .alignment(Alignment::Center)
            .render(inner, buf);
            return;
        }

        let header = Row::new(vec![
            Cell::from("Pair").style(styles::accent_bold()),
            Cell::from("Rate").style(styles::accent_bold()),
        ]);

        let rows: Vec<Row> = self
            .board
            .rates
            .iter()
            .map(|rate| {
                Row::new(vec![
                    Cell::from(rate.pair.to_string()).style(styles::text_primary()),
                    Cell::from(format!("{:.4}", rate.value)).style(styles::text_secondary()),
                ])
            })
            .collect();

        let widths = [Constraint::Length(12), Constraint::Min(10)];
        Table::new(rows, widths)
            .header(header)
            .column_spacing(2)
            .render(inner, buf);
    }
}
