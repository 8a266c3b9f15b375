//! Search results screen rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, ListItem, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, SearchState, UiState};
use super::utils::{release_year, render_scrollable_list, truncate_string};

pub fn render_search(frame: &mut Frame, area: Rect, search_state: &SearchState, ui_state: &UiState) {
    let focused = ui_state.active_section == ActiveSection::Content;
    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search Results (Esc to go back) ")
        .border_style(border_style);

    if search_state.loading {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::Yellow))
            .block(block);
        frame.render_widget(loading, area);
        return;
    }

    if let Some(error) = &search_state.error {
        let message = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    // Zero matches is a valid outcome, rendered as an empty-state message
    if search_state.results.is_empty() {
        let message = Paragraph::new(format!("No results found for \"{}\"", search_state.term))
            .style(Style::default().fg(Color::DarkGray))
            .block(block.padding(Padding::horizontal(1)));
        frame.render_widget(message, area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = search_state
        .results
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let style = if focused && i == ui_state.search_selected {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let label = format!("{} ({})", title.title, release_year(&title.release_date));
            ListItem::new(truncate_string(&label, width)).style(style)
        })
        .collect();

    render_scrollable_list(frame, area, items, ui_state.search_selected, block);
}
