//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use ratewatch_app::state::AppState;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, &state.board.last_updated);

    let header = widgets::MainHeader::new(&state.settings.ui.base_currency, state.phase);
    frame.render_widget(header, areas.header);

    frame.render_widget(widgets::RateTable::new(&state.board), areas.rates);

    frame.render_widget(
        widgets::PageFooter::new(state.board.last_updated),
        areas.footer,
    );
}
