//! Home screen rendering (hero section + category rails)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{ActiveSection, HomeSection, HomeState, Title, UiState};
use super::utils::{release_year, render_scrollable_list, truncate_string};

pub fn render_home(frame: &mut Frame, area: Rect, home_state: &HomeState, ui_state: &UiState) {
    let Some(snapshot) = &home_state.snapshot else {
        // Aggregation neither loading nor failed means it hasn't started;
        // nothing to draw yet.
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Hero
            Constraint::Min(0),    // Category rails
        ])
        .split(area);

    render_hero(frame, chunks[0], snapshot.latest.as_ref(), home_state.backdrops.len());

    let rails = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(chunks[1]);

    let focused = ui_state.active_section == ActiveSection::Content;
    render_rail(
        frame,
        rails[0],
        HomeSection::Upcoming,
        &snapshot.upcoming,
        ui_state.upcoming_selected,
        focused && ui_state.home_section == HomeSection::Upcoming,
    );
    render_rail(
        frame,
        rails[1],
        HomeSection::TopRated,
        &snapshot.top_rated,
        ui_state.top_rated_selected,
        focused && ui_state.home_section == HomeSection::TopRated,
    );
    render_rail(
        frame,
        rails[2],
        HomeSection::Popular,
        &snapshot.popular,
        ui_state.popular_selected,
        focused && ui_state.home_section == HomeSection::Popular,
    );
}

fn render_hero(frame: &mut Frame, area: Rect, latest: Option<&Title>, backdrop_count: usize) {
    let mut lines = vec![Line::styled(
        "Explore blockbusters, cult classics & trending shows",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];

    if let Some(latest) = latest {
        lines.push(Line::styled(
            format!("Just added: {} ({})", latest.title, release_year(&latest.release_date)),
            Style::default().fg(Color::Cyan),
        ));
    }
    lines.push(Line::styled(
        format!("{} posters in rotation", backdrop_count),
        Style::default().fg(Color::DarkGray),
    ));

    let hero = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Now Showing ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(hero, area);
}

fn render_rail(
    frame: &mut Frame,
    area: Rect,
    section: HomeSection,
    titles: &[Title],
    selected: usize,
    is_active: bool,
) {
    let width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = if titles.is_empty() {
        vec![ListItem::new("No movies found.").style(Style::default().fg(Color::DarkGray))]
    } else {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                let style = if is_active && i == selected {
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                let label = format!(
                    "{} ({})",
                    title.title,
                    release_year(&title.release_date)
                );
                ListItem::new(truncate_string(&label, width)).style(style)
            })
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", section.title()))
        .border_style(if is_active {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        });

    render_scrollable_list(frame, area, items, selected, block);
}
