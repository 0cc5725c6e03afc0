use std::{collections::HashMap, fmt};

use portfolio_entities::{comment::Comment, id::CommentId, language::LanguageCode, query::CommentQuery};

use crate::{
    fragment::render_with_state, CommentFragment, Error, LikeAction, LikeState, Settlement, Ticket,
    TicketCounter, TranslationState, Viewer,
};

type Result<T> = std::result::Result<T, Error>;

/// Displayed instead of the list if there are no comments.
pub const NOTHING_TO_SEE: &str = "Nothing to see here.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub ticket: Ticket,
    pub query: CommentQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeRequest {
    pub ticket: Ticket,
    pub id: CommentId,
    pub action: LikeAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteRequest {
    pub id: CommentId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    pub ticket: Ticket,
    pub id: CommentId,
    pub message: String,
    pub language: LanguageCode,
}

#[derive(Debug, Clone)]
struct Entry {
    comment: Comment,
    like: LikeState,
    translation: TranslationState,
}

impl Entry {
    fn new(comment: Comment) -> Self {
        let like = LikeState::new(comment.liked, comment.likes);
        Self {
            comment,
            like,
            translation: TranslationState::default(),
        }
    }
}

/// A comment hidden while its delete request is in flight.
///
/// Reloads replace the entry with the fresh copy, or with `None` if the
/// comment is no longer part of the list.
#[derive(Debug, Clone)]
struct RemovedEntry {
    index: usize,
    entry: Option<Entry>,
}

/// The comment section of a single page.
///
/// Operations that talk to the server are split in two: the first
/// call updates the displayed state and returns the request to send,
/// the second one feeds back the response.
#[derive(Debug)]
pub struct CommentListView {
    viewer: Viewer,
    state: LoadState,
    latest_load: Option<Ticket>,
    entries: Vec<Entry>,
    deleting: HashMap<CommentId, RemovedEntry>,
    tickets: TicketCounter,
}

impl CommentListView {
    #[must_use]
    pub fn new(viewer: Viewer) -> Self {
        Self {
            viewer,
            state: LoadState::default(),
            latest_load: None,
            entries: Vec::new(),
            deleting: HashMap::new(),
            tickets: TicketCounter::default(),
        }
    }

    pub const fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// The text to display instead of an empty list.
    pub fn placeholder(&self) -> Option<&'static str> {
        (self.state == LoadState::Loaded && self.entries.is_empty()).then_some(NOTHING_TO_SEE)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> Vec<CommentId> {
        self.entries.iter().map(|e| e.comment.id).collect()
    }

    pub fn fragments(&self) -> Vec<CommentFragment> {
        self.entries.iter().map(|e| self.render_entry(e)).collect()
    }

    pub fn fragment(&self, id: CommentId) -> Option<CommentFragment> {
        self.find(id).map(|e| self.render_entry(e))
    }

    fn render_entry(&self, entry: &Entry) -> CommentFragment {
        render_with_state(&entry.comment, &self.viewer, &entry.like, &entry.translation)
    }

    fn find(&self, id: CommentId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.comment.id == id)
    }

    fn find_mut(&mut self, id: CommentId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.comment.id == id)
    }

    // -- load -- //

    pub fn begin_load(&mut self, query: CommentQuery) -> LoadRequest {
        let ticket = self.tickets.next();
        log::debug!("Loading comments: {query:?}");
        self.latest_load = Some(ticket);
        self.state = LoadState::Loading;
        LoadRequest { ticket, query }
    }

    /// Replaces all displayed comments.
    ///
    /// Returns `false` if the response belongs to an outdated request
    /// and has been discarded.
    pub fn finish_load<E>(&mut self, ticket: Ticket, result: std::result::Result<Vec<Comment>, E>) -> bool
    where
        E: fmt::Display,
    {
        if self.latest_load != Some(ticket) {
            log::debug!("Discarding outdated comment list");
            return false;
        }
        match result {
            Ok(comments) => {
                log::debug!("Loaded {} comments", comments.len());
                self.forget_removed_entries();
                let mut entries = Vec::with_capacity(comments.len());
                for comment in comments {
                    if let Some(removed) = self.deleting.get_mut(&comment.id) {
                        removed.index = entries.len();
                        removed.entry = Some(Entry::new(comment));
                    } else {
                        entries.push(Entry::new(comment));
                    }
                }
                self.entries = entries;
                self.state = LoadState::Loaded;
            }
            Err(err) => {
                log::warn!("Unable to load comments: {err}");
                self.forget_removed_entries();
                self.entries.clear();
                self.state = LoadState::Failed(format!("Unable to load comments: {err}"));
            }
        }
        true
    }

    fn forget_removed_entries(&mut self) {
        for removed in self.deleting.values_mut() {
            removed.entry = None;
        }
    }

    // -- like -- //

    pub fn toggle_like(&mut self, id: CommentId) -> Result<LikeRequest> {
        let ticket = self.tickets.next();
        let entry = self.find_mut(id).ok_or(Error::CommentNotFound(id))?;
        let action = entry.like.toggle(ticket);
        log::debug!("{action:?} comment {id} ({} likes)", entry.like.count());
        Ok(LikeRequest { ticket, id, action })
    }

    pub fn settle_like<E>(&mut self, request: &LikeRequest, result: std::result::Result<(), E>) -> Option<Settlement>
    where
        E: fmt::Display,
    {
        let LikeRequest { ticket, id, action } = *request;
        let succeeded = match result {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Unable to {action:?} comment {id}: {err}");
                false
            }
        };
        let settlement = self.find_mut(id)?.like.settle(ticket, succeeded);
        if settlement.is_none() {
            log::debug!("Ignoring outdated {action:?} response for comment {id}");
        }
        settlement
    }

    // -- delete -- //

    /// Removes the comment from the list until the server has
    /// answered the returned request.
    pub fn delete(&mut self, id: CommentId) -> Result<DeleteRequest> {
        let index = self
            .entries
            .iter()
            .position(|e| e.comment.id == id)
            .ok_or(Error::CommentNotFound(id))?;
        if !self.entries[index].comment.is_author {
            return Err(Error::Forbidden);
        }
        let entry = self.entries.remove(index);
        self.deleting.insert(
            id,
            RemovedEntry {
                index,
                entry: Some(entry),
            },
        );
        log::debug!("Deleting comment {id}");
        Ok(DeleteRequest { id })
    }

    /// Restores the comment if the request failed.
    pub fn settle_delete<E>(&mut self, request: &DeleteRequest, result: std::result::Result<(), E>) -> Option<Settlement>
    where
        E: fmt::Display,
    {
        let DeleteRequest { id } = *request;
        let RemovedEntry { index, entry } = self.deleting.remove(&id)?;
        match result {
            Ok(()) => Some(Settlement::Committed),
            Err(err) => {
                log::warn!("Unable to delete comment {id}: {err}");
                match entry {
                    Some(entry) if self.find(id).is_none() => {
                        let index = index.min(self.entries.len());
                        self.entries.insert(index, entry);
                    }
                    _ => log::debug!("Comment {id} is gone after a reload"),
                }
                Some(Settlement::RolledBack)
            }
        }
    }

    // -- translate -- //

    /// Switches between the original and the translated message.
    ///
    /// Only switching to the translation needs the server. Clicks
    /// while a translation is pending are ignored.
    pub fn translate(&mut self, id: CommentId) -> Result<Option<TranslateRequest>> {
        let ticket = self.tickets.next();
        let language = self.viewer.language.clone();
        let entry = self.find_mut(id).ok_or(Error::CommentNotFound(id))?;
        if entry.comment.language == language {
            return Err(Error::NotTranslatable(id));
        }
        match entry.translation {
            TranslationState::Original => {
                entry.translation = TranslationState::Pending(ticket);
                Ok(Some(TranslateRequest {
                    ticket,
                    id,
                    message: entry.comment.message.clone(),
                    language,
                }))
            }
            TranslationState::Pending(_) => {
                log::debug!("Translation of comment {id} is already pending");
                Ok(None)
            }
            TranslationState::Translated(_) => {
                entry.translation = TranslationState::Original;
                Ok(None)
            }
        }
    }

    pub fn settle_translation<E>(
        &mut self,
        request: &TranslateRequest,
        result: std::result::Result<String, E>,
    ) -> Option<Settlement>
    where
        E: fmt::Display,
    {
        let entry = self.find_mut(request.id)?;
        if entry.translation != TranslationState::Pending(request.ticket) {
            log::debug!("Ignoring outdated translation of comment {}", request.id);
            return None;
        }
        match result {
            Ok(text) => {
                entry.translation = TranslationState::Translated(text.trim().to_owned());
                Some(Settlement::Committed)
            }
            Err(err) => {
                log::warn!("Unable to translate comment {}: {err}", request.id);
                entry.translation = TranslationState::Original;
                Some(Settlement::RolledBack)
            }
        }
    }
}

impl Default for CommentListView {
    fn default() -> Self {
        Self::new(Viewer::default())
    }
}
