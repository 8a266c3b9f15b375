//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by screen:
//!
//! - `utils`: Shared utility functions (truncation, scrollable lists)
//! - `home`: Home screen (hero + category rails)
//! - `search`: Search results screen
//! - `detail`: Title detail screen (synopsis, reviews, similar)

mod utils;
mod home;
mod search;
mod detail;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, DetailState, HomeState, SearchState, UiState, ViewMode};

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        home_state: &HomeState,
        search_state: &SearchState,
        detail_state: &DetailState,
        view: ViewMode,
        ui_state: &UiState,
    ) {
        // The initial aggregation blocks the whole screen: there is no
        // meaningful partial home view without any category loaded.
        if home_state.loading {
            render_fullscreen_message(frame, "Loading...", Color::Yellow);
            return;
        }
        if let Some(error) = &home_state.error {
            render_fullscreen_message(frame, error, Color::Red);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(0),    // Active screen
            ])
            .split(frame.area());

        render_search_bar(frame, chunks[0], ui_state);

        match view {
            ViewMode::Home => home::render_home(frame, chunks[1], home_state, ui_state),
            ViewMode::Search => search::render_search(frame, chunks[1], search_state, ui_state),
            ViewMode::Detail => detail::render_detail(frame, chunks[1], detail_state, ui_state),
        }
    }
}

fn render_fullscreen_message(frame: &mut Frame, message: &str, color: Color) {
    let paragraph = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL).title(" Movies "));
    frame.render_widget(paragraph, frame.area());
}

fn render_search_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let focused = ui_state.active_section == ActiveSection::SearchBar;

    let search_text = if ui_state.search_input.is_empty() {
        "Search movies..."
    } else {
        &ui_state.search_input
    };

    let search = Paragraph::new(search_text)
        .style(if focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search (Enter to submit, empty input returns home) ")
                .padding(Padding::horizontal(1))
                .border_style(if focused {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                }),
        );
    frame.render_widget(search, area);
}
