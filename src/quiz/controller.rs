//! Quiz session controller, the state machine behind the quiz screen.

use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

use super::{Feedback, FeedbackKind, GameState, QuizError, QuizQuestion, evaluate};
use crate::Locale;
use crate::provider::QuizSource;

/// Input to the quiz state machine.
#[derive(Debug, Clone)]
pub enum QuizEvent {
    /// The player asked for a new quiz.
    Start,
    /// The fetch started by [`QuizEvent::Start`] succeeded.
    Loaded(Vec<QuizQuestion>),
    /// The fetch started by [`QuizEvent::Start`] failed.
    LoadFailed(QuizError),
    /// The player submitted the current answer text.
    Submit,
    /// The player moved past the feedback for the current question.
    Advance,
}

/// What the state machine did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The event was accepted; the controller is now in this state.
    Applied(GameState),
    /// The event is not legal in the current state and changed nothing.
    Ignored,
}

impl Transition {
    /// Returns true if the event was accepted.
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Single owner of all quiz session state.
///
/// Every mutation goes through [`GameController::handle`]; the named
/// operations are thin wrappers that build the matching [`QuizEvent`].
#[derive(Debug, Clone, Getters)]
pub struct GameController {
    locale: Locale,
    state: GameState,
    questions: Vec<QuizQuestion>,
    current_question_index: usize,
    score: usize,
    answer: String,
    feedback: Feedback,
    error: Option<String>,
}

impl GameController {
    /// Creates a controller in [`GameState::Initial`].
    #[instrument]
    pub fn new(locale: Locale) -> Self {
        info!("Creating GameController");
        Self {
            locale,
            state: GameState::Initial,
            questions: Vec::new(),
            current_question_index: 0,
            score: 0,
            answer: String::new(),
            feedback: Feedback::none(),
            error: None,
        }
    }

    /// Applies one event. Illegal events for the current state are ignored.
    #[instrument(skip(self, event), fields(state = %self.state))]
    pub fn handle(&mut self, event: QuizEvent) -> Transition {
        debug!(event = ?event, "Handling quiz event");
        match (self.state, event) {
            (GameState::Initial | GameState::Finished, QuizEvent::Start) => {
                self.error = None;
                self.feedback = Feedback::none();
                self.enter(GameState::Loading)
            }

            (GameState::Loading, QuizEvent::Loaded(questions)) => {
                if questions.is_empty() {
                    warn!("Fetch returned no questions");
                    self.error = Some(self.locale.load_failed().to_string());
                    return self.enter(GameState::Initial);
                }
                info!(count = questions.len(), "Questions loaded");
                self.questions = questions;
                self.current_question_index = 0;
                self.score = 0;
                self.answer.clear();
                self.enter(GameState::Playing)
            }

            (GameState::Loading, QuizEvent::LoadFailed(err)) => {
                warn!(kind = %err.kind(), error = %err, "Quiz fetch failed");
                self.error = Some(self.locale.load_failed().to_string());
                self.enter(GameState::Initial)
            }

            (GameState::Playing, QuizEvent::Submit) => {
                if self.feedback.is_set() {
                    debug!("Answer already submitted; waiting for advance");
                    return Transition::Ignored;
                }
                let word = self.questions[self.current_question_index].word.clone();
                let kind = evaluate(&self.answer, &word);
                let message = match kind {
                    FeedbackKind::Correct => {
                        self.score += 1;
                        self.locale.correct().to_string()
                    }
                    _ => self.locale.incorrect(&word),
                };
                info!(kind = %kind, score = self.score, "Answer submitted");
                self.feedback = Feedback { kind, message };
                Transition::Applied(self.state)
            }

            (GameState::Playing, QuizEvent::Advance) => {
                if !self.feedback.is_set() {
                    debug!("Advance before submit ignored");
                    return Transition::Ignored;
                }
                if self.is_last_question() {
                    info!(score = self.score, total = self.questions.len(), "Quiz finished");
                    return self.enter(GameState::Finished);
                }
                self.current_question_index += 1;
                self.feedback = Feedback::none();
                self.answer.clear();
                Transition::Applied(self.state)
            }

            (state, event) => {
                debug!(state = %state, event = ?event, "Event ignored in current state");
                Transition::Ignored
            }
        }
    }

    fn enter(&mut self, next: GameState) -> Transition {
        debug!(from = %self.state, to = %next, "State transition");
        self.state = next;
        Transition::Applied(next)
    }

    /// Requests a new quiz. On success the caller must fetch and report back
    /// through [`GameController::finish_loading`].
    #[instrument(skip(self))]
    pub fn start_game(&mut self) -> Transition {
        self.handle(QuizEvent::Start)
    }

    /// Reports the outcome of the fetch started by [`GameController::start_game`].
    #[instrument(skip(self, result))]
    pub fn finish_loading(&mut self, result: Result<Vec<QuizQuestion>, QuizError>) -> Transition {
        match result {
            Ok(questions) => self.handle(QuizEvent::Loaded(questions)),
            Err(err) => self.handle(QuizEvent::LoadFailed(err)),
        }
    }

    /// Starts a quiz and waits for `source` to deliver the questions.
    #[instrument(skip(self, source))]
    pub async fn run_start(&mut self, source: &dyn QuizSource) -> Transition {
        if !self.start_game().is_applied() {
            return Transition::Ignored;
        }
        let result = source.fetch().await;
        self.finish_loading(result)
    }

    /// Checks the current answer text against the current question.
    #[instrument(skip(self))]
    pub fn submit_answer(&mut self) -> Transition {
        self.handle(QuizEvent::Submit)
    }

    /// Moves to the next question, or to the results after the last one.
    #[instrument(skip(self))]
    pub fn advance(&mut self) -> Transition {
        self.handle(QuizEvent::Advance)
    }

    /// Replaces the answer text. Ignored unless an answer can be submitted.
    #[instrument(skip(self, text))]
    pub fn set_answer(&mut self, text: impl Into<String>) {
        if self.can_submit() {
            self.answer = text.into();
        }
    }

    /// Appends a typed character to the answer text.
    pub fn push_char(&mut self, c: char) {
        if self.can_submit() {
            self.answer.push(c);
        }
    }

    /// Deletes the last character of the answer text.
    pub fn pop_char(&mut self) {
        if self.can_submit() {
            self.answer.pop();
        }
    }

    /// The question currently being asked, if playing.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state {
            GameState::Playing => self.questions.get(self.current_question_index),
            _ => None,
        }
    }

    /// Number of questions in this session.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// 1-based number of the current question.
    pub fn question_number(&self) -> usize {
        self.current_question_index + 1
    }

    /// Returns true when the current question is the final one.
    pub fn is_last_question(&self) -> bool {
        self.current_question_index + 1 >= self.questions.len()
    }

    /// Submit is offered only while playing and before feedback is shown.
    pub fn can_submit(&self) -> bool {
        self.state == GameState::Playing && !self.feedback.is_set()
    }

    /// Advance is offered only while playing and after feedback is shown.
    pub fn can_advance(&self) -> bool {
        self.state == GameState::Playing && self.feedback.is_set()
    }

    /// Start is offered from the start screen and the results screen.
    pub fn can_start(&self) -> bool {
        matches!(self.state, GameState::Initial | GameState::Finished)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
