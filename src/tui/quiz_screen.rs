//! Quiz screen. Renders the [`GameController`] and maps keys onto it.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::{debug, info, instrument};

use super::screen::{Screen, ScreenTransition};
use crate::{FeedbackKind, GameController, GameState, Locale};

/// Full-screen view of one quiz session.
#[derive(Debug)]
pub struct QuizScreen {
    controller: GameController,
}

impl QuizScreen {
    /// Creates a quiz screen on the start page.
    #[instrument]
    pub fn new(locale: Locale) -> Self {
        debug!("Initializing QuizScreen");
        Self {
            controller: GameController::new(locale),
        }
    }

    /// The session state.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Mutable session state, used by the event loop to deliver fetch results.
    pub fn controller_mut(&mut self) -> &mut GameController {
        &mut self.controller
    }

    fn locale(&self) -> Locale {
        *self.controller.locale()
    }

    fn render_initial(&self, frame: &mut Frame, area: Rect) {
        let locale = self.locale();
        let mut lines = vec![
            Line::from(Span::styled(
                locale.title(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(locale.intro()),
            Line::from(""),
        ];
        if let Some(error) = self.controller.error() {
            lines.push(Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            format!("[Enter] {}", locale.start_label()),
            Style::default().fg(Color::Yellow),
        )));

        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(body, area);
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let body = Paragraph::new(self.locale().loading())
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(body, area);
    }

    fn render_playing(&self, frame: &mut Frame, area: Rect) {
        let locale = self.locale();
        let Some(question) = self.controller.current_question() else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let progress = Line::from(vec![
            Span::raw(locale.progress(
                self.controller.question_number(),
                self.controller.question_count(),
            )),
            Span::raw("    "),
            Span::styled(
                locale.score(*self.controller.score()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(progress)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[0],
        );

        let clue = Paragraph::new(vec![
            Line::from(Span::styled(
                locale.question_prompt(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                question.definition.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(clue, chunks[1]);

        let (answer_text, answer_style) = if self.controller.answer().is_empty() {
            (
                locale.answer_placeholder(),
                Style::default().fg(Color::DarkGray),
            )
        } else if self.controller.can_submit() {
            (self.controller.answer().as_str(), Style::default().fg(Color::White))
        } else {
            (
                self.controller.answer().as_str(),
                Style::default().fg(Color::DarkGray),
            )
        };
        let action_label = if self.controller.can_submit() {
            locale.submit_label()
        } else {
            locale.next_label(self.controller.is_last_question())
        };
        let answer = Paragraph::new(answer_text).style(answer_style).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("[Enter] {}", action_label)),
        );
        frame.render_widget(answer, chunks[2]);

        let feedback = self.controller.feedback();
        let feedback_color = match feedback.kind {
            FeedbackKind::Correct => Color::Green,
            FeedbackKind::Incorrect => Color::Red,
            FeedbackKind::None => Color::DarkGray,
        };
        frame.render_widget(
            Paragraph::new(feedback.message.as_str())
                .style(
                    Style::default()
                        .fg(feedback_color)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[3],
        );
    }

    fn render_finished(&self, frame: &mut Frame, area: Rect) {
        let locale = self.locale();
        let lines = vec![
            Line::from(Span::styled(
                locale.finished_title(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(locale.final_score(
                *self.controller.score(),
                self.controller.question_count(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("[Enter] {}", locale.restart_label()),
                Style::default().fg(Color::Yellow),
            )),
        ];
        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(body, area);
    }
}

impl Screen for QuizScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(frame.area());

        match self.controller.state() {
            GameState::Initial => self.render_initial(frame, chunks[0]),
            GameState::Loading => self.render_loading(frame, chunks[0]),
            GameState::Playing => self.render_playing(frame, chunks[0]),
            GameState::Finished => self.render_finished(frame, chunks[0]),
        }

        let help = Paragraph::new(self.locale().quiz_help())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[1]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Esc => {
                info!("Quiz quitting");
                ScreenTransition::Quit
            }
            KeyCode::Enter => {
                if self.controller.can_start() {
                    if self.controller.start_game().is_applied() {
                        return ScreenTransition::Fetch;
                    }
                } else if self.controller.can_advance() {
                    self.controller.advance();
                } else {
                    self.controller.submit_answer();
                }
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.controller.pop_char();
                ScreenTransition::Stay
            }
            KeyCode::Char(c) if self.controller.can_submit() => {
                self.controller.push_char(c);
                ScreenTransition::Stay
            }
            KeyCode::Char('q') | KeyCode::Char('Q')
                if *self.controller.state() != GameState::Loading =>
            {
                ScreenTransition::Quit
            }
            _ => ScreenTransition::Stay,
        }
    }
}
