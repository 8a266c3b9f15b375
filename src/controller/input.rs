//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{ActiveSection, ViewMode};

use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        // Only handle key press events, not release or repeat
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;
        let ui_state = model.get_ui_state().await;

        // Handle search input when the search bar is focused
        if ui_state.active_section == ActiveSection::SearchBar {
            match key.code {
                KeyCode::Tab | KeyCode::BackTab => {
                    model.toggle_active_section().await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    // Submit the search. An empty input is a valid
                    // submission: it navigates back home.
                    let term = ui_state.search_input.clone();
                    drop(model);
                    let controller = self.clone();
                    tokio::spawn(async move {
                        controller.search(&term).await;
                    });
                    return Ok(());
                }
                KeyCode::Esc => {
                    model.clear_search_input().await;
                    return Ok(());
                }
                KeyCode::Backspace => {
                    model.backspace_search_input().await;
                    return Ok(());
                }
                KeyCode::Char(c) => {
                    // Ctrl+Q still quits while typing
                    if (c == 'q' || c == 'Q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        model.set_should_quit(true).await;
                        return Ok(());
                    }
                    model.append_to_search_input(c).await;
                    return Ok(());
                }
                _ => return Ok(()),
            }
        }

        // Content section navigation
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                model.toggle_active_section().await;
            }
            KeyCode::Up => {
                model.move_selection_up().await;
            }
            KeyCode::Down => {
                model.move_selection_down().await;
            }
            KeyCode::Left => {
                if model.get_view().await == ViewMode::Home {
                    model.cycle_home_section(false).await;
                }
            }
            KeyCode::Right => {
                if model.get_view().await == ViewMode::Home {
                    model.cycle_home_section(true).await;
                }
            }
            KeyCode::Enter => {
                drop(model);
                self.open_selected().await;
            }
            KeyCode::Esc | KeyCode::Backspace => {
                if model.get_view().await != ViewMode::Home {
                    drop(model);
                    self.go_back().await;
                }
            }
            _ => {}
        }
        Ok(())
    }
}
