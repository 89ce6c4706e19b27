//! Gallery entities and form drafts.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use strum::{EnumCount, EnumIter};
use tracing::instrument;

/// One portfolio project card.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Website {
    id: i64,
    title: String,
    description: String,
    image_url: String,
    url: String,
    tags: Vec<String>,
}

impl Website {
    /// Builds an entity from a draft and an already-assigned id.
    pub(crate) fn from_draft(id: i64, draft: WebsiteDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            image_url: draft.image_url,
            url: draft.url,
            tags: draft.tags,
        }
    }

    /// Replaces every field except the id.
    pub(crate) fn replace(&mut self, draft: WebsiteDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.image_url = draft.image_url;
        self.url = draft.url;
        self.tags = draft.tags;
    }

    /// Returns true if this card carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Editable fields of a card, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum WebsiteField {
    /// Project title.
    #[display("title")]
    Title,
    /// Short description.
    #[display("description")]
    Description,
    /// Thumbnail URL.
    #[display("image URL")]
    ImageUrl,
    /// Link to the project.
    #[display("URL")]
    Url,
    /// Comma-separated tags.
    #[display("tags")]
    Tags,
}

/// Editable fields of a [`Website`], as produced by the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct WebsiteDraft {
    /// Project title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Thumbnail URL.
    pub image_url: String,
    /// Link to the project.
    pub url: String,
    /// Category tags, in display order.
    pub tags: Vec<String>,
}

impl WebsiteDraft {
    /// Pre-fills a draft from an existing card.
    pub fn from_website(website: &Website) -> Self {
        Self {
            title: website.title.clone(),
            description: website.description.clone(),
            image_url: website.image_url.clone(),
            url: website.url.clone(),
            tags: website.tags.clone(),
        }
    }

    /// Checks the required fields. Tags may be empty.
    #[instrument(skip(self), fields(title = %self.title))]
    pub fn validate(&self) -> Result<(), GalleryError> {
        let required = [
            (WebsiteField::Title, &self.title),
            (WebsiteField::Description, &self.description),
            (WebsiteField::ImageUrl, &self.image_url),
            (WebsiteField::Url, &self.url),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(GalleryError::missing(*field)),
            None => Ok(()),
        }
    }
}

/// Splits a comma-separated tag list, trimming and dropping empty entries.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Gallery form error.
#[derive(Debug, Clone, Display, Error)]
#[display("Gallery error: {} at {}:{}", message, file, line)]
pub struct GalleryError {
    /// The required field that was left blank.
    pub field: WebsiteField,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GalleryError {
    /// Creates an error for a blank required field.
    #[track_caller]
    #[instrument]
    pub fn missing(field: WebsiteField) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            field,
            message: format!("{} is required", field),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
