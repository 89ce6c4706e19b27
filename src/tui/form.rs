//! Add/edit form for gallery cards.

use strum::{EnumCount, IntoEnumIterator};

use crate::{Website, WebsiteDraft, WebsiteField, parse_tags};

fn slot(field: WebsiteField) -> usize {
    field as usize
}

/// Editable text of every field plus which card (if any) is being edited.
#[derive(Debug, Clone)]
pub struct WebsiteForm {
    editing: Option<i64>,
    values: [String; WebsiteField::COUNT],
    focus: WebsiteField,
    error: Option<String>,
}

impl WebsiteForm {
    /// Empty form for a new card.
    pub fn blank() -> Self {
        Self {
            editing: None,
            values: Default::default(),
            focus: WebsiteField::Title,
            error: None,
        }
    }

    /// Form pre-filled from an existing card.
    pub fn edit(website: &Website) -> Self {
        let draft = WebsiteDraft::from_website(website);
        Self {
            editing: Some(*website.id()),
            values: [
                draft.title,
                draft.description,
                draft.image_url,
                draft.url,
                draft.tags.join(", "),
            ],
            focus: WebsiteField::Title,
            error: None,
        }
    }

    /// Id of the card being edited, or `None` when adding.
    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    /// The focused field.
    pub fn focus(&self) -> WebsiteField {
        self.focus
    }

    /// Text of `field`.
    pub fn value(&self, field: WebsiteField) -> &str {
        &self.values[slot(field)]
    }

    /// Last validation message.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Records a validation message.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        let next = (slot(self.focus) + 1) % WebsiteField::COUNT;
        self.focus = WebsiteField::iter().nth(next).unwrap_or(WebsiteField::Title);
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_previous(&mut self) {
        let prev = (slot(self.focus) + WebsiteField::COUNT - 1) % WebsiteField::COUNT;
        self.focus = WebsiteField::iter().nth(prev).unwrap_or(WebsiteField::Title);
    }

    /// Types a character into the focused field.
    pub fn push_char(&mut self, c: char) {
        self.values[slot(self.focus)].push(c);
    }

    /// Deletes the last character of the focused field.
    pub fn pop_char(&mut self) {
        self.values[slot(self.focus)].pop();
    }

    /// Converts the form into a draft; tags are split on commas.
    pub fn to_draft(&self) -> WebsiteDraft {
        WebsiteDraft::new(
            self.value(WebsiteField::Title).trim().to_string(),
            self.value(WebsiteField::Description).trim().to_string(),
            self.value(WebsiteField::ImageUrl).trim().to_string(),
            self.value(WebsiteField::Url).trim().to_string(),
            parse_tags(self.value(WebsiteField::Tags)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut form = WebsiteForm::blank();
        form.focus_previous();
        assert_eq!(form.focus(), WebsiteField::Tags);
        form.focus_next();
        assert_eq!(form.focus(), WebsiteField::Title);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = WebsiteForm::blank();
        form.focus_next();
        form.push_char('h');
        form.push_char('i');
        form.pop_char();
        assert_eq!(form.value(WebsiteField::Description), "h");
        assert_eq!(form.value(WebsiteField::Title), "");
    }

    #[test]
    fn test_draft_splits_tags() {
        let mut form = WebsiteForm::blank();
        for _ in 0..4 {
            form.focus_next();
        }
        for c in " Unity, ,Mobile ".chars() {
            form.push_char(c);
        }
        assert_eq!(form.to_draft().tags, vec!["Unity", "Mobile"]);
    }
}
