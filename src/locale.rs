//! User-facing strings for the quiz in each supported language.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::WebsiteField;

/// Language used for the generation prompt and every quiz message.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Locale {
    /// Korean words and messages.
    #[default]
    #[serde(rename = "ko")]
    #[strum(serialize = "ko")]
    Korean,
    /// English words and messages.
    #[serde(rename = "en")]
    #[strum(serialize = "en")]
    English,
}

impl Locale {
    /// Instruction sent to the model when the config does not override it.
    pub fn default_prompt(self, count: usize) -> String {
        match self {
            Self::Korean => format!(
                "일상생활에서 자주 쓰이는 한국어 단어 {count}개와 그에 대한 간단한 설명을 JSON 형식으로 제공해줘. 각 객체는 'word'와 'definition' 키를 가져야 해."
            ),
            Self::English => format!(
                "Give me {count} common everyday English words with a short definition for each, as JSON. Every object must have the keys 'word' and 'definition'."
            ),
        }
    }

    /// Feedback for a correct answer.
    pub fn correct(self) -> &'static str {
        match self {
            Self::Korean => "정답입니다!",
            Self::English => "Correct!",
        }
    }

    /// Feedback for a wrong answer; always carries the expected word verbatim.
    pub fn incorrect(self, word: &str) -> String {
        match self {
            Self::Korean => format!("오답입니다. 정답: {word}"),
            Self::English => format!("Wrong. The answer was: {word}"),
        }
    }

    /// The single message every failed fetch collapses into.
    pub fn load_failed(self) -> &'static str {
        match self {
            Self::Korean => {
                "퀴즈 데이터를 가져오는 데 실패했습니다. API 키를 확인하거나 나중에 다시 시도해주세요."
            }
            Self::English => {
                "Failed to fetch quiz data. Check your API key or try again later."
            }
        }
    }

    /// Title on the start screen.
    pub fn title(self) -> &'static str {
        match self {
            Self::Korean => "Gemini 단어 퀴즈",
            Self::English => "Gemini Word Quiz",
        }
    }

    /// Blurb under the title.
    pub fn intro(self) -> &'static str {
        match self {
            Self::Korean => {
                "Gemini AI가 실시간으로 생성하는 단어 퀴즈에 도전해보세요! 정의를 읽고 어떤 단어인지 맞춰보세요."
            }
            Self::English => {
                "Take on a word quiz generated live by Gemini! Read each definition and guess the word."
            }
        }
    }

    /// Start button.
    pub fn start_label(self) -> &'static str {
        match self {
            Self::Korean => "퀴즈 시작하기",
            Self::English => "Start quiz",
        }
    }

    /// Restart button on the results screen.
    pub fn restart_label(self) -> &'static str {
        match self {
            Self::Korean => "새로운 퀴즈 시작하기",
            Self::English => "Start a new quiz",
        }
    }

    /// Shown while the questions are being generated.
    pub fn loading(self) -> &'static str {
        match self {
            Self::Korean => "퀴즈를 생성 중입니다...",
            Self::English => "Generating your quiz...",
        }
    }

    /// Heading above each definition.
    pub fn question_prompt(self) -> &'static str {
        match self {
            Self::Korean => "다음이 설명하는 단어는 무엇일까요?",
            Self::English => "Which word does this describe?",
        }
    }

    /// Placeholder for the empty answer field.
    pub fn answer_placeholder(self) -> &'static str {
        match self {
            Self::Korean => "정답을 입력하세요",
            Self::English => "Type your answer",
        }
    }

    /// Submit button.
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Korean => "제출",
            Self::English => "Submit",
        }
    }

    /// Advance button; the last question leads to the results instead.
    pub fn next_label(self, is_last: bool) -> &'static str {
        match (self, is_last) {
            (Self::Korean, false) => "다음 문제",
            (Self::Korean, true) => "결과 보기",
            (Self::English, false) => "Next question",
            (Self::English, true) => "See results",
        }
    }

    /// "Question n / total" counter.
    pub fn progress(self, number: usize, total: usize) -> String {
        match self {
            Self::Korean => format!("문제 {number} / {total}"),
            Self::English => format!("Question {number} / {total}"),
        }
    }

    /// Running score.
    pub fn score(self, score: usize) -> String {
        match self {
            Self::Korean => format!("점수: {score}"),
            Self::English => format!("Score: {score}"),
        }
    }

    /// Heading on the results screen.
    pub fn finished_title(self) -> &'static str {
        match self {
            Self::Korean => "퀴즈 완료!",
            Self::English => "Quiz complete!",
        }
    }

    /// Final score line.
    pub fn final_score(self, score: usize, total: usize) -> String {
        match self {
            Self::Korean => format!("최종 점수는 {score} / {total} 점입니다."),
            Self::English => format!("Your final score is {score} / {total}."),
        }
    }

    /// Key hints under the quiz.
    pub fn quiz_help(self) -> &'static str {
        match self {
            Self::Korean => "Enter: 확인 | Esc: 종료 | Powered by Google Gemini",
            Self::English => "Enter: Confirm | Esc: Quit | Powered by Google Gemini",
        }
    }

    /// Title of the gallery's tag bar.
    pub fn gallery_title(self) -> &'static str {
        match self {
            Self::Korean => "게임 포트폴리오",
            Self::English => "Game Portfolio",
        }
    }

    /// Tab label for the filter that shows every card.
    pub fn all_tags_label(self) -> &'static str {
        match self {
            Self::Korean => "전체",
            Self::English => "All",
        }
    }

    /// Title of the card list.
    pub fn projects_heading(self) -> &'static str {
        match self {
            Self::Korean => "프로젝트",
            Self::English => "Projects",
        }
    }

    /// Title of the details pane.
    pub fn details_heading(self) -> &'static str {
        match self {
            Self::Korean => "상세 정보",
            Self::English => "Details",
        }
    }

    /// Link line in the details pane.
    pub fn visit_site(self, url: &str) -> String {
        match self {
            Self::Korean => format!("사이트 방문하기: {url}"),
            Self::English => format!("Visit site: {url}"),
        }
    }

    /// Thumbnail line in the details pane.
    pub fn image_line(self, url: &str) -> String {
        match self {
            Self::Korean => format!("이미지: {url}"),
            Self::English => format!("Image: {url}"),
        }
    }

    /// Shown when the filter matches nothing.
    pub fn no_projects(self) -> &'static str {
        match self {
            Self::Korean => "프로젝트가 없습니다.",
            Self::English => "No projects.",
        }
    }

    /// Key hints under the gallery.
    pub fn gallery_help(self) -> &'static str {
        match self {
            Self::Korean => "←→: 태그 | ↑↓: 선택 | a: 추가 | e: 편집 | d: 삭제 | q: 종료",
            Self::English => "←→: Tag | ↑↓: Select | a: Add | e: Edit | d: Delete | q: Quit",
        }
    }

    /// Form title; editing an existing card or adding a new one.
    pub fn form_title(self, editing: bool) -> &'static str {
        match (self, editing) {
            (Self::Korean, true) => "프로젝트 편집",
            (Self::Korean, false) => "새 프로젝트 추가",
            (Self::English, true) => "Edit Project",
            (Self::English, false) => "Add New Project",
        }
    }

    /// Label of a form field.
    pub fn field_label(self, field: WebsiteField) -> &'static str {
        match (self, field) {
            (Self::Korean, WebsiteField::Title) => "제목",
            (Self::Korean, WebsiteField::Description) => "설명",
            (Self::Korean, WebsiteField::ImageUrl) => "이미지 URL",
            (Self::Korean, WebsiteField::Url) => "웹사이트 URL",
            (Self::Korean, WebsiteField::Tags) => "태그 (쉼표로 구분)",
            (Self::English, WebsiteField::Title) => "Title",
            (Self::English, WebsiteField::Description) => "Description",
            (Self::English, WebsiteField::ImageUrl) => "Image URL",
            (Self::English, WebsiteField::Url) => "Website URL",
            (Self::English, WebsiteField::Tags) => "Tags (comma separated)",
        }
    }

    /// Validation message for a blank required field.
    pub fn field_required(self, field: WebsiteField) -> String {
        let label = self.field_label(field);
        match self {
            Self::Korean => format!("{label} 항목은 필수입니다."),
            Self::English => format!("{label} is required."),
        }
    }

    /// Key hints under the form.
    pub fn form_help(self) -> &'static str {
        match self {
            Self::Korean => "Tab: 다음 항목 | Enter: 저장 | Esc: 취소",
            Self::English => "Tab: Next field | Enter: Save | Esc: Cancel",
        }
    }

    /// Heading of the delete confirmation.
    pub fn confirm_delete_title(self) -> &'static str {
        match self {
            Self::Korean => "프로젝트 삭제 확인",
            Self::English => "Confirm Delete",
        }
    }

    /// Body of the delete confirmation.
    pub fn confirm_delete_body(self, title: &str) -> String {
        match self {
            Self::Korean => format!(
                "정말로 '{title}' 프로젝트를 삭제하시겠습니까? 이 작업은 되돌릴 수 없습니다."
            ),
            Self::English => format!("Really delete '{title}'? This cannot be undone."),
        }
    }

    /// Key hints in the delete confirmation.
    pub fn confirm_delete_help(self) -> &'static str {
        match self {
            Self::Korean => "y: 삭제 확인 | n: 취소",
            Self::English => "y: Delete | n: Cancel",
        }
    }
}
