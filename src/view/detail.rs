//! Title detail screen rendering (synopsis, reviews, similar titles)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{ActiveSection, DetailState, TitleDetail, UiState};
use super::utils::{release_year, render_scrollable_list, truncate_string};

pub fn render_detail(frame: &mut Frame, area: Rect, detail_state: &DetailState, ui_state: &UiState) {
    let Some(movie) = &detail_state.movie else {
        // Detail-with-error without a movie only happens before the view
        // ever transitioned; render the error standalone just in case.
        let message = detail_state
            .error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "Loading...".to_string());
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Red))
            .block(Block::default().borders(Borders::ALL).title(" Detail "));
        frame.render_widget(paragraph, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Header: title, date, overview
            Constraint::Min(6),    // Reviews
            Constraint::Length(9), // Similar titles
        ])
        .split(area);

    render_header(frame, chunks[0], movie, detail_state);
    render_reviews(frame, chunks[1], detail_state);
    render_similar(frame, chunks[2], detail_state, ui_state);
}

fn render_header(frame: &mut Frame, area: Rect, movie: &TitleDetail, detail_state: &DetailState) {
    let mut lines = vec![
        Line::styled(
            movie.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("Release date: {}", movie.release_date),
            Style::default().fg(Color::Cyan),
        ),
        Line::raw(""),
        Line::raw(movie.overview.clone()),
    ];

    if let Some(error) = detail_state.error {
        lines.push(Line::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        ));
    }

    let header = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Detail (Esc to go back) ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(header, area);
}

fn render_reviews(frame: &mut Frame, area: Rect, detail_state: &DetailState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Reviews ")
        .padding(Padding::horizontal(1));

    if detail_state.loading {
        let loading = Paragraph::new("Loading reviews...")
            .style(Style::default().fg(Color::Yellow))
            .block(block);
        frame.render_widget(loading, area);
        return;
    }

    if detail_state.reviews.is_empty() {
        let message = Paragraph::new("No reviews available.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    let mut lines = Vec::new();
    for review in &detail_state.reviews {
        lines.push(Line::styled(
            review.author.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::raw(review.display_content()));
        lines.push(Line::raw(""));
    }

    let reviews = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(reviews, area);
}

fn render_similar(frame: &mut Frame, area: Rect, detail_state: &DetailState, ui_state: &UiState) {
    let focused = ui_state.active_section == ActiveSection::Content;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Similar Movies (Enter to open) ")
        .border_style(if focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        });

    if detail_state.loading {
        let loading = Paragraph::new("Loading similar movies...")
            .style(Style::default().fg(Color::Yellow))
            .block(block);
        frame.render_widget(loading, area);
        return;
    }

    if detail_state.similar.is_empty() {
        let message = Paragraph::new("No similar movies found.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block.padding(Padding::horizontal(1)));
        frame.render_widget(message, area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = detail_state
        .similar
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let style = if focused && i == ui_state.similar_selected {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let label = format!("{} ({})", title.title, release_year(&title.release_date));
            ListItem::new(truncate_string(&label, width)).style(style)
        })
        .collect();

    render_scrollable_list(frame, area, items, ui_state.similar_selected, block);
}
