//! In-memory gallery store with tag filtering.

use tracing::{debug, info, instrument, warn};

use super::{Website, WebsiteDraft, seed_websites};

/// Filter value that matches every card.
pub const ALL_TAG: &str = "All";

/// Ordered collection of portfolio cards plus the active tag filter.
///
/// Lookups by id that miss are silent no-ops; the view only offers edit and
/// delete on cards it is currently showing.
///
/// Tags are kept in the order they were first seen. A tag keeps its place for
/// as long as any card carries it; new tags are appended.
#[derive(Debug, Clone)]
pub struct GalleryStore {
    websites: Vec<Website>,
    tags: Vec<String>,
    active_tag: String,
    last_issued_id: i64,
}

impl GalleryStore {
    /// Creates a store over `websites`, shown in the given order.
    #[instrument(skip(websites), fields(count = websites.len()))]
    pub fn new(websites: Vec<Website>) -> Self {
        info!("Creating GalleryStore");
        let mut store = Self {
            websites,
            tags: Vec::new(),
            active_tag: ALL_TAG.to_string(),
            last_issued_id: 0,
        };
        for index in 0..store.websites.len() {
            store.register_tags(index);
        }
        store
    }

    /// Creates a store holding the built-in seed projects.
    #[instrument]
    pub fn seeded() -> Self {
        Self::new(seed_websites())
    }

    /// All cards in display order.
    pub fn websites(&self) -> &[Website] {
        &self.websites
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.websites.len()
    }

    /// Returns true if the gallery is empty.
    pub fn is_empty(&self) -> bool {
        self.websites.is_empty()
    }

    /// Looks up a card by id.
    pub fn get(&self, id: i64) -> Option<&Website> {
        self.websites.iter().find(|w| *w.id() == id)
    }

    /// Issues an id from the clock, bumped past every id seen so far.
    ///
    /// Once the id space is exhausted the lowest free positive id is reused.
    fn next_id(&mut self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let highest = self
            .websites
            .iter()
            .map(|w| *w.id())
            .max()
            .unwrap_or(0)
            .max(self.last_issued_id);
        let id = match highest.checked_add(1) {
            Some(floor) => now.max(floor),
            None => {
                warn!("Id space exhausted, reusing the lowest free id");
                (1..)
                    .find(|candidate| self.get(*candidate).is_none())
                    .unwrap_or(highest)
            }
        };
        self.last_issued_id = self.last_issued_id.max(id);
        id
    }

    /// Appends the unseen tags of the card at `index` to the registry.
    fn register_tags(&mut self, index: usize) {
        let Some(website) = self.websites.get(index) else {
            return;
        };
        for tag in website.tags() {
            if !self.tags.contains(tag) {
                debug!(tag = %tag, "Registering tag");
                self.tags.push(tag.clone());
            }
        }
    }

    /// Drops tags no card carries any more.
    fn prune_tags(&mut self) {
        let websites = &self.websites;
        self.tags.retain(|tag| websites.iter().any(|w| w.has_tag(tag)));
    }

    /// Adds a card at the front and returns its new id.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub fn add(&mut self, draft: WebsiteDraft) -> i64 {
        let id = self.next_id();
        self.websites.insert(0, Website::from_draft(id, draft));
        self.register_tags(0);
        info!(id, count = self.websites.len(), "Website added");
        self.reconcile_filter();
        id
    }

    /// Replaces the fields of card `id`. Returns false if there is no such card.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub fn update(&mut self, id: i64, draft: WebsiteDraft) -> bool {
        let Some(index) = self.websites.iter().position(|w| *w.id() == id) else {
            debug!(id, "Update target not found");
            return false;
        };
        self.websites[index].replace(draft);
        self.register_tags(index);
        self.prune_tags();
        info!(id, "Website updated");
        self.reconcile_filter();
        true
    }

    /// Removes card `id`, returning it if it existed.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: i64) -> Option<Website> {
        let Some(pos) = self.websites.iter().position(|w| *w.id() == id) else {
            debug!(id, "Remove target not found");
            return None;
        };
        let removed = self.websites.remove(pos);
        self.prune_tags();
        info!(id, count = self.websites.len(), "Website removed");
        self.reconcile_filter();
        Some(removed)
    }

    /// Form save: updates when editing an existing card, adds otherwise.
    #[instrument(skip(self, draft))]
    pub fn save(&mut self, id: Option<i64>, draft: WebsiteDraft) -> Option<i64> {
        match id {
            Some(id) => self.update(id, draft).then_some(id),
            None => Some(self.add(draft)),
        }
    }

    /// Cards carrying `tag`, or every card for [`ALL_TAG`].
    #[instrument(skip(self))]
    pub fn filter_by_tag(&self, tag: &str) -> Vec<&Website> {
        if tag == ALL_TAG {
            return self.websites.iter().collect();
        }
        self.websites.iter().filter(|w| w.has_tag(tag)).collect()
    }

    /// [`ALL_TAG`] followed by every tag in use, in first-seen order.
    #[instrument(skip(self))]
    pub fn available_tags(&self) -> Vec<String> {
        std::iter::once(ALL_TAG.to_string())
            .chain(self.tags.iter().cloned())
            .collect()
    }

    /// The tag currently filtering the view.
    pub fn active_tag(&self) -> &str {
        &self.active_tag
    }

    /// Switches the filter. Tags no card carries are ignored.
    #[instrument(skip(self))]
    pub fn select_tag(&mut self, tag: &str) -> bool {
        if !self.available_tags().iter().any(|t| t == tag) {
            debug!(tag, "Ignoring unknown tag");
            return false;
        }
        self.active_tag = tag.to_string();
        true
    }

    /// Cards matching the active filter.
    pub fn visible(&self) -> Vec<&Website> {
        self.filter_by_tag(&self.active_tag)
    }

    /// Falls back to [`ALL_TAG`] once no card carries the active tag.
    fn reconcile_filter(&mut self) {
        if self.active_tag == ALL_TAG {
            return;
        }
        if !self.tags.contains(&self.active_tag) {
            info!(tag = %self.active_tag, "Active tag vanished, resetting filter");
            self.active_tag = ALL_TAG.to_string();
        }
    }
}

impl Default for GalleryStore {
    fn default() -> Self {
        Self::seeded()
    }
}
