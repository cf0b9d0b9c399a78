//! Core types for TeamSync
//!
//! Defines the entities held by the dashboard stores:
//! - Tasks and their board status
//! - Activity entries rendered in the live feed
//! - Notifications for the current user
//! - Team members, comments, channels and messages

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Generate a fresh identifier (ULID text)
            #[inline]
            #[must_use]
            pub fn generate() -> Self {
                Self(Ulid::new().to_string())
            }

            /// Borrow the identifier text
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Task identifier, stable for the lifetime of the task
    TaskId
);
string_id!(
    /// Activity entry identifier
    ActivityId
);
string_id!(
    /// Notification identifier
    NotificationId
);
string_id!(
    /// Team member identifier
    MemberId
);
string_id!(
    /// Channel or direct conversation identifier
    ChannelId
);
string_id!(
    /// Comment or message identifier
    MessageId
);

/// Board column a task sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Not started
    Todo,
    /// Being worked on
    #[serde(rename = "inprogress")]
    InProgress,
    /// Finished
    Done,
}

impl TaskStatus {
    /// All statuses in board column order
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    /// Human-readable column label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Wire name used by the board view
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "inprogress",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = crate::error::DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "inprogress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => Err(crate::error::DashboardError::UnknownStatus(other.to_string())),
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority
    Low,
    /// Medium priority
    Medium,
    /// High priority
    High,
}

/// A unit of work on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task ID
    pub id: TaskId,
    /// Short title
    pub title: String,
    /// Longer description
    pub description: String,
    /// Free-text assignee name (not checked against the roster)
    pub assignee: String,
    /// Priority
    pub priority: Priority,
    /// Display-only due date
    pub due_date: String,
    /// Current board column
    pub status: TaskStatus,
}

impl Task {
    /// Create new task in the `todo` column
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            assignee: String::new(),
            priority: Priority::Medium,
            due_date: String::new(),
            status: TaskStatus::Todo,
        }
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With assignee
    #[inline]
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = assignee.into();
        self
    }

    /// With priority
    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// With due date
    #[inline]
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = due_date.into();
        self
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

/// Kind of activity entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// Task created, moved or completed
    Task,
    /// Comment posted
    Comment,
    /// Member joined
    Member,
    /// File uploaded
    File,
}

/// A record in the live feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Entry ID
    pub id: ActivityId,
    /// Entry kind
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    /// Acting user
    pub user: String,
    /// Verb phrase
    pub action: String,
    /// Object of the action
    pub target: String,
    /// Display-only time text
    pub time: String,
    /// Entry animation hint, not part of the persisted model
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_new: bool,
}

impl Activity {
    /// Create a fresh entry stamped "just now"
    #[inline]
    #[must_use]
    pub fn just_now(
        kind: ActivityKind,
        user: impl Into<String>,
        action: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: ActivityId::generate(),
            kind,
            user: user.into(),
            action: action.into(),
            target: target.into(),
            time: "just now".to_string(),
            is_new: true,
        }
    }

    /// `"<user> <action> <target>"`
    #[must_use]
    pub fn headline(&self) -> String {
        format!("{} {} {}", self.user, self.action, self.target)
    }
}

/// Notification tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Informational
    Info,
    /// Something finished well
    Success,
    /// Needs attention
    Warning,
}

/// An alert shown to the current user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Notification ID
    pub id: NotificationId,
    /// Title
    pub title: String,
    /// Body
    pub message: String,
    /// Display-only time text
    pub time: String,
    /// Read flag, only ever goes false -> true
    pub read: bool,
    /// Tone
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

/// Presence state of a team member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    /// Online
    Online,
    /// Away
    Away,
    /// Offline
    Offline,
}

/// Read-only roster entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub status: MemberStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_task: Option<String>,
    pub phone: String,
    pub location: String,
    pub join_date: String,
    pub tasks_completed: u32,
    pub tasks_in_progress: u32,
    /// Percentage, 0-100
    pub completion_rate: u8,
    pub skills: Vec<String>,
}

/// Comment on a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: MessageId,
    pub user: String,
    pub text: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_new: bool,
}

/// Channel or direct conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    /// Named group channel
    Channel,
    /// One-to-one conversation
    Direct,
}

/// Conversation header shown in the messages sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChannelKind,
    pub unread: u32,
    pub last_message: String,
    pub last_message_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<u32>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_online: Option<bool>,
}

/// Message in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub sender: String,
    pub text: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_self: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_new: bool,
}
