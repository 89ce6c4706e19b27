//! Tests for the terminal screens, driven through key events and a test backend.

use crossterm::event::{KeyCode, KeyEvent};
use quizfolio::tui::{GalleryScreen, QuizScreen, Screen, ScreenTransition};
use quizfolio::{GalleryStore, GameState, Locale, QuizError, QuizQuestion, WebsiteField};
use ratatui::{Terminal, backend::TestBackend};

fn press(screen: &mut impl Screen, code: KeyCode) -> ScreenTransition {
    screen.handle_key(KeyEvent::from(code))
}

fn type_text(screen: &mut impl Screen, text: &str) {
    for c in text.chars() {
        press(screen, KeyCode::Char(c));
    }
}

fn rendered(screen: &impl Screen) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| screen.render(f)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

/// Rendered text with the padding cells behind wide glyphs removed.
fn compact(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn gallery(locale: Locale) -> GalleryScreen {
    GalleryScreen::new(GalleryStore::seeded(), locale)
}

fn loaded_quiz() -> QuizScreen {
    let mut screen = QuizScreen::new(Locale::English);
    assert_eq!(press(&mut screen, KeyCode::Enter), ScreenTransition::Fetch);
    screen.controller_mut().finish_loading(Ok(vec![
        QuizQuestion::new("cat", "A small furry pet"),
        QuizQuestion::new("sun", "The star at the centre of our solar system"),
    ]));
    screen
}

#[test]
fn test_quiz_start_screen() {
    let screen = QuizScreen::new(Locale::English);
    let text = rendered(&screen);
    assert!(text.contains("Gemini Word Quiz"));
    assert!(text.contains("Start quiz"));
}

#[test]
fn test_quiz_enter_requests_fetch_once() {
    let mut screen = QuizScreen::new(Locale::English);
    assert_eq!(press(&mut screen, KeyCode::Enter), ScreenTransition::Fetch);
    assert_eq!(*screen.controller().state(), GameState::Loading);
    assert!(rendered(&screen).contains("Generating your quiz"));

    assert_eq!(press(&mut screen, KeyCode::Enter), ScreenTransition::Stay);
    assert_eq!(press(&mut screen, KeyCode::Char('q')), ScreenTransition::Stay);
}

#[test]
fn test_quiz_failed_fetch_shows_error() {
    let mut screen = QuizScreen::new(Locale::English);
    press(&mut screen, KeyCode::Enter);
    screen
        .controller_mut()
        .finish_loading(Err(QuizError::service("boom")));
    assert!(rendered(&screen).contains("Failed to fetch quiz data"));
}

#[test]
fn test_quiz_play_through() {
    let mut screen = loaded_quiz();
    let text = rendered(&screen);
    assert!(text.contains("A small furry pet"));
    assert!(text.contains("Submit"));

    type_text(&mut screen, "Cat");
    press(&mut screen, KeyCode::Enter);
    assert_eq!(*screen.controller().score(), 1);
    assert!(rendered(&screen).contains("Correct!"));

    press(&mut screen, KeyCode::Enter);
    assert_eq!(*screen.controller().current_question_index(), 1);

    type_text(&mut screen, "moon");
    press(&mut screen, KeyCode::Enter);
    assert!(rendered(&screen).contains("sun"));

    press(&mut screen, KeyCode::Enter);
    assert_eq!(*screen.controller().state(), GameState::Finished);
    assert!(rendered(&screen).contains("Start a new quiz"));

    assert_eq!(press(&mut screen, KeyCode::Enter), ScreenTransition::Fetch);
}

#[test]
fn test_quiz_typing_q_enters_answer() {
    let mut screen = loaded_quiz();
    assert_eq!(press(&mut screen, KeyCode::Char('q')), ScreenTransition::Stay);
    assert_eq!(screen.controller().answer(), "q");
    assert_eq!(press(&mut screen, KeyCode::Esc), ScreenTransition::Quit);
}

#[test]
fn test_gallery_lists_seed_projects() {
    let screen = gallery(Locale::English);
    let text = rendered(&screen);
    assert!(text.contains("Project Oblivion"));
    assert!(text.contains("All"));
}

#[test]
fn test_gallery_tag_cycling_filters() {
    let mut screen = gallery(Locale::English);
    press(&mut screen, KeyCode::Right);
    assert_eq!(screen.store().active_tag(), "RPG");
    assert_eq!(screen.store().visible().len(), 1);
    press(&mut screen, KeyCode::Left);
    press(&mut screen, KeyCode::Left);
    assert_eq!(
        screen.store().active_tag(),
        screen.store().available_tags().last().unwrap()
    );
}

#[test]
fn test_gallery_add_through_form() {
    let mut screen = gallery(Locale::English);
    press(&mut screen, KeyCode::Char('a'));
    assert_eq!(screen.form().unwrap().focus(), WebsiteField::Title);

    for value in [
        "Neon Drift",
        "Arcade racer",
        "https://img",
        "https://neon",
        "Racing, Arcade",
    ] {
        type_text(&mut screen, value);
        press(&mut screen, KeyCode::Tab);
    }
    press(&mut screen, KeyCode::Enter);

    assert!(screen.form().is_none());
    assert_eq!(screen.store().len(), 7);
    let first = &screen.store().websites()[0];
    assert_eq!(first.title(), "Neon Drift");
    assert_eq!(first.tags(), &vec!["Racing".to_string(), "Arcade".to_string()]);
    assert_eq!(screen.selected(), 0);
}

#[test]
fn test_gallery_form_rejects_missing_fields() {
    let mut screen = gallery(Locale::English);
    press(&mut screen, KeyCode::Char('a'));
    type_text(&mut screen, "Only a title");
    press(&mut screen, KeyCode::Enter);

    let form = screen.form().expect("Form stays open");
    assert_eq!(form.error(), Some("Description is required."));
    assert_eq!(screen.store().len(), 6);

    press(&mut screen, KeyCode::Esc);
    assert!(screen.form().is_none());
    assert_eq!(screen.store().len(), 6);
}

#[test]
fn test_gallery_edit_keeps_id() {
    let mut screen = gallery(Locale::English);
    press(&mut screen, KeyCode::Down);
    press(&mut screen, KeyCode::Char('e'));
    assert_eq!(screen.form().unwrap().editing(), Some(2));

    type_text(&mut screen, " II");
    press(&mut screen, KeyCode::Enter);

    assert_eq!(screen.store().get(2).unwrap().title(), "Pixel Jumper II");
    assert_eq!(screen.store().len(), 6);
}

#[test]
fn test_gallery_delete_needs_confirmation() {
    let mut screen = gallery(Locale::English);
    press(&mut screen, KeyCode::Char('d'));
    assert!(screen.is_confirming_delete());
    press(&mut screen, KeyCode::Char('n'));
    assert_eq!(screen.store().len(), 6);

    press(&mut screen, KeyCode::Char('d'));
    press(&mut screen, KeyCode::Char('y'));
    assert!(!screen.is_confirming_delete());
    assert_eq!(screen.store().len(), 5);
    assert!(screen.store().get(1).is_none());
}

#[test]
fn test_gallery_delete_last_in_filter_resets_view() {
    let mut screen = gallery(Locale::English);
    let vr = screen
        .store()
        .available_tags()
        .iter()
        .position(|t| t == "VR")
        .unwrap();
    for _ in 0..vr {
        press(&mut screen, KeyCode::Right);
    }
    assert_eq!(screen.store().active_tag(), "VR");

    press(&mut screen, KeyCode::Char('d'));
    press(&mut screen, KeyCode::Enter);

    assert_eq!(screen.store().active_tag(), "All");
    assert_eq!(screen.store().visible().len(), 5);
    assert_eq!(screen.selected(), 0);
}

#[test]
fn test_gallery_quit() {
    let mut screen = gallery(Locale::English);
    assert_eq!(press(&mut screen, KeyCode::Char('q')), ScreenTransition::Quit);
}

#[test]
fn test_gallery_labels_follow_korean_locale() {
    let mut screen = gallery(Locale::Korean);
    let text = compact(&rendered(&screen));
    assert!(text.contains("게임포트폴리오"));
    assert!(text.contains("전체"));
    assert!(text.contains("사이트방문하기"));

    press(&mut screen, KeyCode::Char('a'));
    let text = compact(&rendered(&screen));
    assert!(text.contains("새프로젝트추가"));
    assert!(text.contains("웹사이트URL"));

    press(&mut screen, KeyCode::Enter);
    assert_eq!(
        screen.form().and_then(|f| f.error()),
        Some(Locale::Korean.field_required(WebsiteField::Title).as_str())
    );

    press(&mut screen, KeyCode::Esc);
    press(&mut screen, KeyCode::Char('d'));
    let text = compact(&rendered(&screen));
    assert!(text.contains("프로젝트삭제확인"));
}

#[test]
fn test_gallery_edit_form_title() {
    let mut screen = gallery(Locale::Korean);
    press(&mut screen, KeyCode::Char('e'));
    assert!(compact(&rendered(&screen)).contains("프로젝트편집"));
}

#[test]
fn test_quiz_help_follows_locale() {
    let screen = QuizScreen::new(Locale::Korean);
    assert!(compact(&rendered(&screen)).contains("Enter:확인"));
}
