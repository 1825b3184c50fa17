//! View-state lifecycle for the single study session.
//!
//! `idle → loading → {success, error}`, `error → loading` on retry, and any
//! state `→ loading` when a different topic is selected. Every transition into
//! `loading` hands out a `Ticket`; a completion only lands if its ticket is
//! still the newest one, which makes late responses for abandoned topics
//! harmless.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::generation::GenerationError;
use crate::models::course::Course;
use crate::models::topic::TopicDef;

mod controller;
pub mod handlers;

pub use controller::SessionController;

/// Message shown for every generation failure; details go to the log only.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate content. Please try again or check your API Key.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Identifies one in-flight generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub sequence: u64,
    pub topic: TopicDef,
}

#[derive(Debug, Default)]
pub struct SessionState {
    current_topic: Option<TopicDef>,
    course: Option<Arc<Course>>,
    loading: LoadingState,
    error: Option<String>,
    sequence: u64,
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub state: LoadingState,
    pub topic: Option<TopicDef>,
    pub error: Option<String>,
    pub course: Option<Arc<Course>>,
    pub sequence: u64,
    pub updated_at: Option<DateTime<Utc>>,
}

impl SessionState {
    #[cfg(test)]
    pub fn loading_state(&self) -> LoadingState {
        self.loading
    }

    #[cfg(test)]
    pub fn current_topic(&self) -> Option<&TopicDef> {
        self.current_topic.as_ref()
    }

    /// Starts loading `topic`. Returns `None` when it is already the current
    /// topic, in which case nothing changes.
    pub fn select(&mut self, topic: &TopicDef) -> Option<Ticket> {
        if self.current_topic.as_ref().is_some_and(|t| t.id == topic.id) {
            return None;
        }
        self.current_topic = Some(topic.clone());
        Some(self.begin_loading(topic.clone()))
    }

    /// Re-issues the request for the current topic. Only valid from `error`.
    pub fn retry(&mut self) -> Option<Ticket> {
        if self.loading != LoadingState::Error {
            return None;
        }
        let topic = self.current_topic.clone()?;
        Some(self.begin_loading(topic))
    }

    fn begin_loading(&mut self, topic: TopicDef) -> Ticket {
        self.sequence += 1;
        self.loading = LoadingState::Loading;
        self.course = None;
        self.error = None;
        self.updated_at = Some(Utc::now());
        Ticket {
            sequence: self.sequence,
            topic,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.sequence == self.sequence
            && self.loading == LoadingState::Loading
            && self
                .current_topic
                .as_ref()
                .is_some_and(|t| t.id == ticket.topic.id)
    }

    /// Applies a generation outcome. Returns `false` (and changes nothing)
    /// when the ticket has been superseded.
    pub fn complete(&mut self, ticket: &Ticket, result: Result<Course, GenerationError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match result {
            Ok(course) => {
                self.course = Some(Arc::new(course));
                self.loading = LoadingState::Success;
                self.error = None;
            }
            Err(_) => {
                self.course = None;
                self.loading = LoadingState::Error;
                self.error = Some(GENERATION_FAILED_MESSAGE.to_string());
            }
        }
        self.updated_at = Some(Utc::now());
        true
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.loading,
            topic: self.current_topic.clone(),
            error: self.error.clone(),
            course: self.course.clone(),
            sequence: self.sequence,
            updated_at: self.updated_at,
        }
    }
}
