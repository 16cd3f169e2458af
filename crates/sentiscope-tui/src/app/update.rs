use super::{App, InputMode, Screen};
use crate::action::Action;
use crate::model::report::ResultsState;

impl App {
    /// Process a user action and update state. Returns true if the app
    /// should quit.
    pub fn update(&mut self, action: Action) -> bool {
        // Quit confirmation modal — q confirms, Esc cancels
        if self.confirm_quit {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::NavigateBack => {
                    self.confirm_quit = false;
                }
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                }
                _ => {}
            }
            return false;
        }

        // Help overlay
        if self.show_help {
            match action {
                Action::Quit => {
                    self.confirm_quit = true;
                }
                Action::ToggleHelp | Action::NavigateBack => {
                    self.show_help = false;
                }
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                }
                _ => {}
            }
            return false;
        }

        // Sector-info popup intercepts input; Esc or Enter dismisses it.
        if self.popup.is_some() {
            match action {
                Action::Quit => {
                    self.confirm_quit = true;
                }
                Action::NavigateBack | Action::DrillIn => {
                    self.popup = None;
                }
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                }
                _ => {}
            }
            return false;
        }

        match action {
            Action::Quit => {
                self.confirm_quit = true;
            }
            Action::ToggleHelp => {
                self.show_help = true;
            }
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
            }
            Action::Resize(..) => {}
            other => match self.screen {
                Screen::Sectors => self.update_sectors(other),
                Screen::ArticleInput => self.update_article_input(other),
                Screen::Results => self.update_results(other),
            },
        }
        false
    }

    fn update_sectors(&mut self, action: Action) {
        match action {
            Action::MoveDown | Action::ScrollDown => {
                if self.sector_cursor + 1 < self.catalog.len() {
                    self.sector_cursor += 1;
                }
            }
            Action::MoveUp | Action::ScrollUp => {
                self.sector_cursor = self.sector_cursor.saturating_sub(1);
            }
            Action::GoTop => self.sector_cursor = 0,
            Action::GoBottom => {
                self.sector_cursor = self.catalog.len().saturating_sub(1);
            }
            Action::DrillIn => {
                if let Some(choice) = self.selected_choice() {
                    if choice == sentiscope_core::MANUAL_ENTRY {
                        self.screen = Screen::ArticleInput;
                        self.input_mode = InputMode::TextInput;
                    } else {
                        self.submit_sector(&choice);
                    }
                }
            }
            Action::ShowSectorInfo => {
                if let Some(choice) = self.selected_choice() {
                    self.show_sector_info(&choice);
                }
            }
            Action::NavigateBack => {
                // Back to the live report, if there is one.
                if !matches!(self.results, ResultsState::Idle) {
                    self.screen = Screen::Results;
                }
            }
            _ => {}
        }
    }

    fn update_article_input(&mut self, action: Action) {
        match action {
            Action::Input(c) => {
                if c == '\x08' {
                    self.article_buffer.pop();
                } else {
                    self.article_buffer.push(c);
                }
            }
            Action::InputSubmit => {
                self.submit_article();
            }
            Action::InputCancel => {
                self.input_mode = InputMode::Normal;
                self.screen = Screen::Sectors;
            }
            _ => {}
        }
    }

    fn update_results(&mut self, action: Action) {
        match action {
            Action::MoveDown => {
                let visible = self.results.visible_indices().len();
                if self.card_cursor + 1 < visible {
                    self.card_cursor += 1;
                }
            }
            Action::MoveUp => {
                self.card_cursor = self.card_cursor.saturating_sub(1);
            }
            Action::GoTop => {
                self.card_cursor = 0;
                self.results_scroll = 0;
            }
            Action::GoBottom => {
                self.card_cursor = self.results.visible_indices().len().saturating_sub(1);
            }
            Action::NextPage => self.page_next(),
            Action::PrevPage => self.page_prev(),
            Action::ToggleDetails | Action::DrillIn => self.toggle_selected_details(),
            Action::ScrollDown => {
                self.results_scroll = self.results_scroll.saturating_add(1);
            }
            Action::ScrollUp => {
                self.results_scroll = self.results_scroll.saturating_sub(1);
            }
            Action::NavigateBack => {
                self.screen = Screen::Sectors;
            }
            _ => {}
        }
    }
}
