//! Gallery screen with tag bar, card list, edit form and delete confirmation.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};
use strum::{EnumCount, IntoEnumIterator};
use tracing::{debug, info, instrument, warn};

use super::form::WebsiteForm;
use super::screen::{Screen, ScreenTransition};
use crate::{ALL_TAG, GalleryStore, Locale, WebsiteField};

/// What the gallery is currently asking of the user.
#[derive(Debug, Clone)]
enum Mode {
    Browse,
    Form(WebsiteForm),
    ConfirmDelete { id: i64, title: String },
}

/// Full-screen view over a [`GalleryStore`].
#[derive(Debug)]
pub struct GalleryScreen {
    store: GalleryStore,
    locale: Locale,
    selected: usize,
    mode: Mode,
}

impl GalleryScreen {
    /// Creates a gallery screen over `store`, labelled in `locale`.
    #[instrument(skip(store), fields(count = store.len()))]
    pub fn new(store: GalleryStore, locale: Locale) -> Self {
        debug!("Initializing GalleryScreen");
        Self {
            store,
            locale,
            selected: 0,
            mode: Mode::Browse,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &GalleryStore {
        &self.store
    }

    /// Index of the highlighted card within the visible list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The open form, if any.
    pub fn form(&self) -> Option<&WebsiteForm> {
        match &self.mode {
            Mode::Form(form) => Some(form),
            _ => None,
        }
    }

    /// Returns true while the delete confirmation is shown.
    pub fn is_confirming_delete(&self) -> bool {
        matches!(self.mode, Mode::ConfirmDelete { .. })
    }

    fn selected_id(&self) -> Option<i64> {
        self.store.visible().get(self.selected).map(|w| *w.id())
    }

    fn clamp_selection(&mut self) {
        let count = self.store.visible().len();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }

    #[instrument(skip(self))]
    fn cycle_tag(&mut self, forward: bool) {
        let tags = self.store.available_tags();
        let current = tags
            .iter()
            .position(|t| t == self.store.active_tag())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % tags.len()
        } else {
            (current + tags.len() - 1) % tags.len()
        };
        self.store.select_tag(&tags[next]);
        self.selected = 0;
        debug!(tag = %self.store.active_tag(), "Tag filter changed");
    }

    fn select_previous(&mut self) {
        let count = self.store.visible().len();
        if count == 0 {
            return;
        }
        self.selected = if self.selected > 0 {
            self.selected - 1
        } else {
            count - 1
        };
    }

    fn select_next(&mut self) {
        let count = self.store.visible().len();
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1) % count;
    }

    #[instrument(skip(self, key))]
    fn handle_browse_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Left => self.cycle_tag(false),
            KeyCode::Right => self.cycle_tag(true),
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Char('a') | KeyCode::Char('A') => {
                info!("Opening add form");
                self.mode = Mode::Form(WebsiteForm::blank());
            }
            KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => {
                if let Some(website) = self.selected_id().and_then(|id| self.store.get(id)) {
                    info!(id = website.id(), "Opening edit form");
                    self.mode = Mode::Form(WebsiteForm::edit(website));
                }
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
                if let Some(website) = self.selected_id().and_then(|id| self.store.get(id)) {
                    self.mode = Mode::ConfirmDelete {
                        id: *website.id(),
                        title: website.title().clone(),
                    };
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("Gallery quitting");
                return ScreenTransition::Quit;
            }
            _ => {}
        }
        ScreenTransition::Stay
    }

    #[instrument(skip(self, form, key))]
    fn handle_form_key(&mut self, mut form: WebsiteForm, key: KeyEvent) -> Mode {
        match key.code {
            KeyCode::Esc => return Mode::Browse,
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
            KeyCode::Backspace => form.pop_char(),
            KeyCode::Char(c) => form.push_char(c),
            KeyCode::Enter => {
                let draft = form.to_draft();
                if let Err(e) = draft.validate() {
                    warn!(error = %e, "Form rejected");
                    form.set_error(self.locale.field_required(e.field));
                    return Mode::Form(form);
                }
                match self.store.save(form.editing(), draft) {
                    Some(id) => {
                        info!(id, "Form saved");
                        if form.editing().is_none() {
                            self.selected = 0;
                        }
                    }
                    None => debug!("Edited card no longer exists"),
                }
                self.clamp_selection();
                return Mode::Browse;
            }
            _ => {}
        }
        Mode::Form(form)
    }

    #[instrument(skip(self, key))]
    fn handle_confirm_key(&mut self, id: i64, title: String, key: KeyEvent) -> Mode {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                if self.store.remove(id).is_some() {
                    info!(id, title = %title, "Card deleted");
                }
                self.clamp_selection();
                Mode::Browse
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Mode::Browse,
            _ => Mode::ConfirmDelete { id, title },
        }
    }

    fn render_browse(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(7),
                Constraint::Length(3),
            ])
            .split(area);

        let tags = self.store.available_tags();
        let active = tags
            .iter()
            .position(|t| t == self.store.active_tag())
            .unwrap_or(0);
        let labels: Vec<String> = tags
            .into_iter()
            .map(|tag| {
                if tag == ALL_TAG {
                    self.locale.all_tags_label().to_string()
                } else {
                    tag
                }
            })
            .collect();
        let tabs = Tabs::new(labels)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.locale.gallery_title()),
            )
            .select(active)
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, chunks[0]);

        let visible = self.store.visible();
        let items: Vec<ListItem> = visible
            .iter()
            .map(|w| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        w.title().as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(w.tags().join(" · "), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.locale.projects_heading()),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = ListState::default();
        if !visible.is_empty() {
            list_state.select(Some(self.selected));
        }
        frame.render_stateful_widget(list, chunks[1], &mut list_state);

        let detail = match visible.get(self.selected) {
            Some(w) => Paragraph::new(vec![
                Line::from(w.description().as_str()),
                Line::from(""),
                Line::from(Span::styled(
                    self.locale.visit_site(w.url()),
                    Style::default().fg(Color::Cyan),
                )),
                Line::from(Span::styled(
                    self.locale.image_line(w.image_url()),
                    Style::default().fg(Color::DarkGray),
                )),
            ]),
            None => Paragraph::new(self.locale.no_projects()),
        };
        frame.render_widget(
            detail.wrap(Wrap { trim: true }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.locale.details_heading()),
            ),
            chunks[2],
        );

        let help = Paragraph::new(self.locale.gallery_help())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    fn render_form(&self, frame: &mut Frame, form: &WebsiteForm) {
        let area = centered_rect(70, 80, frame.area());
        frame.render_widget(Clear, area);

        let title = self.locale.form_title(form.editing().is_some());
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints: Vec<Constraint> =
            WebsiteField::iter().map(|_| Constraint::Length(3)).collect();
        constraints.push(Constraint::Length(3));
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (i, field) in WebsiteField::iter().enumerate() {
            let focused = field == form.focus();
            let style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            let input = Paragraph::new(form.value(field))
                .style(style)
                .block(Block::default().borders(Borders::ALL).title(self.locale.field_label(field)));
            frame.render_widget(input, rows[i]);
        }

        let footer = match form.error() {
            Some(error) => Paragraph::new(error).style(Style::default().fg(Color::Red)),
            None => Paragraph::new(self.locale.form_help())
                .style(Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(
            footer.alignment(Alignment::Center),
            rows[WebsiteField::COUNT],
        );
    }

    fn render_confirm(&self, frame: &mut Frame, title: &str) {
        let area = centered_rect(50, 30, frame.area());
        frame.render_widget(Clear, area);
        let body = Paragraph::new(vec![
            Line::from(Span::styled(
                self.locale.confirm_delete_title(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(self.locale.confirm_delete_body(title)),
            Line::from(""),
            Line::from(self.locale.confirm_delete_help()),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(body, area);
    }
}

impl Screen for GalleryScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        self.render_browse(frame, area);
        match &self.mode {
            Mode::Browse => {}
            Mode::Form(form) => self.render_form(frame, form),
            Mode::ConfirmDelete { title, .. } => self.render_confirm(frame, title),
        }
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        let mode = std::mem::replace(&mut self.mode, Mode::Browse);
        match mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Form(form) => {
                self.mode = self.handle_form_key(form, key);
                ScreenTransition::Stay
            }
            Mode::ConfirmDelete { id, title } => {
                self.mode = self.handle_confirm_key(id, title, key);
                ScreenTransition::Stay
            }
        }
    }
}

/// Rectangle of the given percentage size centred in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
