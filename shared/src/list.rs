//! Collection state for list views.
//!
//! `Loading -> Ready | Failed`, with retry going back to `Loading`. Every
//! fetch is tagged with a `Generation`; a response is only applied when its
//! generation is the latest one begun, so a slow response for an old filter
//! cannot overwrite the rows of a newer one.

use tracing::debug;

use crate::resource::Resource;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Hands out generations for one list instance.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: Generation,
}

impl RequestTracker {
    pub fn next(&mut self) -> Generation {
        self.latest = Generation(self.latest.0 + 1);
        self.latest
    }

    pub fn latest(&self) -> Generation {
        self.latest
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.latest
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListStatus<T> {
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction<R: Resource> {
    Begin(Generation),
    Loaded(Generation, Vec<R::Entity>),
    Failed(Generation, String),
    /// Drop one row locally after a confirmed delete.
    Remove(i64),
}

#[derive(Debug, PartialEq)]
pub struct ListState<R: Resource> {
    current: Generation,
    status: ListStatus<R::Entity>,
}

impl<R: Resource> Default for ListState<R> {
    fn default() -> Self {
        Self {
            current: Generation::default(),
            status: ListStatus::Loading,
        }
    }
}

impl<R: Resource> Clone for ListState<R> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            status: self.status.clone(),
        }
    }
}

impl<R: Resource> ListState<R> {
    pub fn status(&self) -> &ListStatus<R::Entity> {
        &self.status
    }

    pub fn generation(&self) -> Generation {
        self.current
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, ListStatus::Loading)
    }

    /// Rows of the last applied fetch; empty unless ready.
    pub fn rows(&self) -> &[R::Entity] {
        match &self.status {
            ListStatus::Ready(rows) => rows,
            _ => &[],
        }
    }

    /// Whether `action` would change this state, without applying it.
    pub fn admits(&self, action: &ListAction<R>) -> bool {
        match action {
            ListAction::Begin(generation) => *generation >= self.current,
            ListAction::Loaded(generation, _) | ListAction::Failed(generation, _) => {
                self.accepts(*generation)
            }
            ListAction::Remove(id) => self.rows().iter().any(|row| R::id(row) == *id),
        }
    }

    /// Apply an action, returning whether the state changed.
    pub fn apply(&mut self, action: ListAction<R>) -> bool {
        if !self.admits(&action) {
            return false;
        }
        match action {
            ListAction::Begin(generation) => {
                self.current = generation;
                self.status = ListStatus::Loading;
            }
            ListAction::Loaded(generation, rows) => {
                debug!(kind = %R::KIND, generation = generation.value(), rows = rows.len(), "list loaded");
                self.status = ListStatus::Ready(rows);
            }
            ListAction::Failed(_, message) => {
                self.status = ListStatus::Failed(message);
            }
            ListAction::Remove(id) => {
                if let ListStatus::Ready(rows) = &mut self.status {
                    rows.retain(|row| R::id(row) != id);
                }
            }
        }
        true
    }

    fn accepts(&self, generation: Generation) -> bool {
        if generation == self.current && self.is_loading() {
            return true;
        }
        debug!(
            kind = %R::KIND,
            generation = generation.value(),
            current = self.current.value(),
            "discarding superseded response"
        );
        false
    }
}
