//! Task comment threads and channel messages

use crate::error::DashboardError;
use crate::types::{Channel, ChannelId, ChannelKind, Comment, Message, MessageId, TaskId};
use indexmap::IndexMap;

/// Per-task comment threads
#[derive(Debug, Clone, Default)]
pub struct CommentThreads {
    seed: Vec<Comment>,
    threads: IndexMap<TaskId, Vec<Comment>>,
}

impl CommentThreads {
    /// Every thread starts out as a copy of `seed`
    #[inline]
    #[must_use]
    pub fn new(seed: Vec<Comment>) -> Self {
        Self {
            seed,
            threads: IndexMap::new(),
        }
    }

    /// Comments on a task, oldest first
    #[must_use]
    pub fn thread(&self, task_id: &TaskId) -> &[Comment] {
        self.threads.get(task_id).map_or(self.seed.as_slice(), Vec::as_slice)
    }

    /// Append a comment; caller has already checked the task exists
    ///
    /// # Errors
    /// `DashboardError::EmptyComment` if `text` is blank.
    pub fn add(&mut self, task_id: &TaskId, author: &str, text: &str) -> Result<Comment, DashboardError> {
        if text.trim().is_empty() {
            return Err(DashboardError::EmptyComment);
        }

        let comment = Comment {
            id: MessageId::generate(),
            user: author.to_string(),
            text: text.to_string(),
            time: "just now".to_string(),
            is_new: true,
        };

        let seed = &self.seed;
        self.threads
            .entry(task_id.clone())
            .or_insert_with(|| seed.clone())
            .push(comment.clone());
        Ok(comment)
    }
}

/// Channels, direct conversations and their message history
#[derive(Debug, Clone, Default)]
pub struct ChannelStore {
    channels: Vec<Channel>,
    messages: IndexMap<ChannelId, Vec<Message>>,
}

impl ChannelStore {
    /// Create store from channel headers and seeded history
    #[must_use]
    pub fn new(channels: Vec<Channel>, history: Vec<(ChannelId, Vec<Message>)>) -> Self {
        Self {
            channels,
            messages: history.into_iter().collect(),
        }
    }

    /// Append a message sent by the current user
    ///
    /// # Errors
    /// - `DashboardError::EmptyMessage` if `text` is blank
    /// - `DashboardError::ChannelNotFound` if no such channel
    pub fn send(
        &mut self,
        channel_id: &ChannelId,
        sender: &str,
        text: &str,
        time: String,
    ) -> Result<Message, DashboardError> {
        if text.trim().is_empty() {
            return Err(DashboardError::EmptyMessage);
        }
        if self.channel(channel_id).is_none() {
            return Err(DashboardError::ChannelNotFound(channel_id.clone()));
        }

        let message = Message {
            id: MessageId::generate(),
            sender: sender.to_string(),
            text: text.to_string(),
            time,
            is_self: true,
            is_new: true,
        };
        self.messages
            .entry(channel_id.clone())
            .or_default()
            .push(message.clone());
        Ok(message)
    }

    /// Look up a channel header
    #[must_use]
    pub fn channel(&self, channel_id: &ChannelId) -> Option<&Channel> {
        self.channels.iter().find(|c| &c.id == channel_id)
    }

    /// Message history, oldest first; empty for channels with no history
    #[must_use]
    pub fn messages(&self, channel_id: &ChannelId) -> &[Message] {
        self.messages.get(channel_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Headers of one kind, fixture order
    pub fn of_kind(&self, kind: ChannelKind) -> impl Iterator<Item = &Channel> + '_ {
        self.channels.iter().filter(move |c| c.kind == kind)
    }

    /// Headers whose name contains `query`, case-insensitive
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Channel> {
        let needle = query.to_lowercase();
        self.channels
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// All headers
    #[inline]
    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }
}
