//! Dashboard
//!
//! Owns every store and exposes the command and read surfaces the view
//! layer talks to. All mutation goes through `&mut self`, so commands are
//! applied strictly in the order they are issued.

use crate::activity_log::ActivityLog;
use crate::clock::{Clock, SystemClock};
use crate::config::DashboardConfig;
use crate::conversations::{ChannelStore, CommentThreads};
use crate::error::DashboardError;
use crate::fixtures;
use crate::notifications::NotificationStore;
use crate::task_store::{TaskMove, TaskStore};
use crate::team::Roster;
use crate::toast::{Toast, ToastChannel};
use crate::types::{
    Activity, ActivityKind, Channel, ChannelId, ChannelKind, Comment, MemberId, MemberStatus,
    Message, Notification, NotificationId, Task, TaskId, TaskStatus, TeamMember,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Initial contents of every store
#[derive(Debug, Clone, Default)]
pub struct DashboardSeed {
    pub tasks: Vec<Task>,
    pub members: Vec<TeamMember>,
    pub activities: Vec<Activity>,
    pub notifications: Vec<Notification>,
    pub comments: Vec<Comment>,
    pub channels: Vec<Channel>,
    pub messages: Vec<(ChannelId, Vec<Message>)>,
}

impl DashboardSeed {
    /// The built-in fixture data
    #[must_use]
    pub fn fixtures(display_name: &str) -> Self {
        Self {
            tasks: fixtures::tasks(),
            members: fixtures::team_members(),
            activities: fixtures::activities(),
            notifications: fixtures::notifications(),
            comments: fixtures::seed_comments(),
            channels: fixtures::channels(),
            messages: fixtures::channel_messages(display_name),
        }
    }
}

/// Header counters for the dashboard view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStats {
    pub tasks_completed: usize,
    pub in_progress: usize,
    pub todo: usize,
    pub members_online: usize,
}

/// Serializable copy of the read surface
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub tasks: Vec<Task>,
    pub activities: Vec<Activity>,
    pub notifications: Vec<Notification>,
    pub team: Vec<TeamMember>,
    pub stats: QuickStats,
}

/// The task and activity state store
#[derive(Debug)]
pub struct Dashboard {
    config: DashboardConfig,
    clock: Arc<dyn Clock>,
    tasks: TaskStore,
    activities: ActivityLog,
    notifications: NotificationStore,
    comments: CommentThreads,
    channels: ChannelStore,
    roster: Roster,
    toasts: ToastChannel,
}

impl Dashboard {
    /// Create dashboard seeded with fixtures, using the system clock
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        let seed = DashboardSeed::fixtures(&config.display_name);
        Self::from_seed(config, seed, Arc::new(SystemClock))
    }

    /// Create dashboard from explicit seed data and clock
    #[must_use]
    pub fn from_seed(config: DashboardConfig, seed: DashboardSeed, clock: Arc<dyn Clock>) -> Self {
        tracing::debug!(
            "Dashboard seeded with {} tasks, {} members, {} activities",
            seed.tasks.len(),
            seed.members.len(),
            seed.activities.len()
        );

        Self {
            activities: ActivityLog::seeded(config.activity_capacity, seed.activities),
            tasks: TaskStore::new(seed.tasks),
            notifications: NotificationStore::new(seed.notifications),
            comments: CommentThreads::new(seed.comments),
            channels: ChannelStore::new(seed.channels, seed.messages),
            roster: Roster::new(seed.members),
            toasts: ToastChannel::default(),
            clock,
            config,
        }
    }

    // ----- commands -----

    /// Move a task to another board column
    ///
    /// On success the feed gains a `"<title> → <label>"` entry and a
    /// `"Task moved to <label>"` toast is published.
    ///
    /// # Errors
    /// `DashboardError::TaskNotFound`; nothing is recorded.
    pub fn move_task(&mut self, task_id: &TaskId, status: TaskStatus) -> Result<TaskMove, DashboardError> {
        let moved = self.tasks.move_task(task_id, status)?;
        tracing::info!("Task moved to {}: {}", status.label(), moved.title);

        self.toasts
            .publish(Toast::success(format!("Task moved to {}", status.label())));
        self.activities.append(Activity::just_now(
            ActivityKind::Task,
            self.config.activity_actor.clone(),
            "moved task to",
            moved.describe(),
        ));
        Ok(moved)
    }

    /// Post a comment on a task as the current user
    ///
    /// # Errors
    /// - `DashboardError::TaskNotFound`
    /// - `DashboardError::EmptyComment`
    pub fn add_comment(&mut self, task_id: &TaskId, text: &str) -> Result<Comment, DashboardError> {
        if !self.tasks.contains(task_id) {
            return Err(DashboardError::TaskNotFound(task_id.clone()));
        }
        let comment = self.comments.add(task_id, &self.config.display_name, text)?;
        tracing::info!("Comment posted on task {}", task_id);
        self.toasts.publish(Toast::success("Comment posted"));
        Ok(comment)
    }

    /// Mark one notification read; `Ok(false)` if it already was
    ///
    /// # Errors
    /// `DashboardError::NotificationNotFound`
    pub fn mark_notification_read(&mut self, id: &NotificationId) -> Result<bool, DashboardError> {
        self.notifications.mark_read(id)
    }

    /// Remove a notification
    ///
    /// # Errors
    /// `DashboardError::NotificationNotFound`; the collection is unchanged.
    pub fn dismiss_notification(&mut self, id: &NotificationId) -> Result<Notification, DashboardError> {
        let removed = self.notifications.dismiss(id)?;
        tracing::debug!("Dismissed notification {}", id);
        Ok(removed)
    }

    /// Mark every notification read; returns how many changed
    pub fn mark_all_notifications_read(&mut self) -> usize {
        self.notifications.mark_all_read()
    }

    /// Send a message to a channel as the current user
    ///
    /// # Errors
    /// - `DashboardError::ChannelNotFound`
    /// - `DashboardError::EmptyMessage`
    pub fn send_message(&mut self, channel_id: &ChannelId, text: &str) -> Result<Message, DashboardError> {
        let time = self.clock.time_of_day();
        let message = self
            .channels
            .send(channel_id, &self.config.display_name, text, time)?;
        tracing::info!("Message sent to channel {}", channel_id);
        Ok(message)
    }

    /// Open a chat with a team member
    ///
    /// Publishes `"Opening chat..."` and returns the member's direct
    /// conversation, if one exists.
    pub fn message_member(&mut self, member_id: &MemberId) -> Option<ChannelId> {
        self.toasts.publish(Toast::success("Opening chat..."));
        let name = &self.roster.get(member_id)?.name;
        self.channels
            .of_kind(ChannelKind::Direct)
            .find(|c| &c.name == name)
            .map(|c| c.id.clone())
    }

    /// Acknowledge a profile save; profile edits stay with the view
    pub fn save_profile(&self) {
        self.toasts.publish(Toast::success("Profile updated successfully"));
    }

    /// Acknowledge a data export request
    pub fn export_data(&self) {
        tracing::info!("Data export requested");
        self.toasts.publish(Toast::success(
            "Your data export has been initiated. You'll receive an email when it's ready.",
        ));
    }

    /// Account deletion is refused pending admin confirmation
    pub fn delete_account(&self) {
        tracing::warn!("Account deletion refused without admin confirmation");
        self.toasts
            .publish(Toast::error("Account deletion requires admin confirmation"));
    }

    /// Append an externally generated entry and announce it
    pub fn ingest_activity(&mut self, activity: Activity) {
        let headline = activity.headline();
        tracing::info!("Live activity: {}", headline);
        self.activities.append(activity);
        self.toasts.publish(Toast::success(headline));
    }

    // ----- read surface -----

    #[inline]
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    #[inline]
    #[must_use]
    pub fn task_store(&self) -> &TaskStore {
        &self.tasks
    }

    #[inline]
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    #[inline]
    #[must_use]
    pub fn activity_log(&self) -> &ActivityLog {
        &self.activities
    }

    /// Feed entries, most recent first
    #[inline]
    #[must_use]
    pub fn activities(&self) -> Vec<Activity> {
        self.activities.snapshot()
    }

    #[inline]
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        self.notifications.items()
    }

    #[inline]
    #[must_use]
    pub fn unread_notifications(&self) -> usize {
        self.notifications.unread_count()
    }

    #[inline]
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[inline]
    #[must_use]
    pub fn comments(&self, task_id: &TaskId) -> &[Comment] {
        self.comments.thread(task_id)
    }

    #[inline]
    #[must_use]
    pub fn channels(&self) -> &ChannelStore {
        &self.channels
    }

    #[inline]
    #[must_use]
    pub fn messages(&self, channel_id: &ChannelId) -> &[Message] {
        self.channels.messages(channel_id)
    }

    #[must_use]
    pub fn quick_stats(&self) -> QuickStats {
        QuickStats {
            tasks_completed: self.tasks.count_by_status(TaskStatus::Done),
            in_progress: self.tasks.count_by_status(TaskStatus::InProgress),
            todo: self.tasks.count_by_status(TaskStatus::Todo),
            members_online: self.roster.with_status(MemberStatus::Online).count(),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            tasks: self.tasks.tasks().to_vec(),
            activities: self.activities.snapshot(),
            notifications: self.notifications.items().to_vec(),
            team: self.roster.members().to_vec(),
            stats: self.quick_stats(),
        }
    }

    /// Subscribe to toasts published from now on
    #[must_use]
    pub fn subscribe_toasts(&self) -> broadcast::Receiver<Toast> {
        self.toasts.subscribe()
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastKind;

    #[test]
    fn move_records_activity_and_toast() {
        let mut dashboard = Dashboard::default();
        let mut toasts = dashboard.subscribe_toasts();

        dashboard.move_task(&TaskId::from("4"), TaskStatus::Done).unwrap();

        let head = dashboard.activity_log().latest().unwrap();
        assert_eq!(head.target, "Database Migration → Done");
        assert_eq!(head.user, "You");
        assert_eq!(head.action, "moved task to");
        assert_eq!(toasts.try_recv().unwrap(), Toast::success("Task moved to Done"));
    }

    #[test]
    fn failed_move_records_nothing() {
        let mut dashboard = Dashboard::default();
        let mut toasts = dashboard.subscribe_toasts();
        let before = dashboard.activities();

        assert!(dashboard.move_task(&TaskId::from("nope"), TaskStatus::Done).is_err());
        assert_eq!(dashboard.activities(), before);
        assert!(toasts.try_recv().is_err());
    }

    #[test]
    fn comment_on_unknown_task() {
        let mut dashboard = Dashboard::default();
        assert!(dashboard.add_comment(&TaskId::from("77"), "hello").unwrap_err().is_not_found());
    }

    #[test]
    fn comment_authored_by_display_name() {
        let mut dashboard = Dashboard::new(DashboardConfig::default().with_display_name("Ada"));
        let comment = dashboard.add_comment(&TaskId::from("2"), "Looks good").unwrap();
        assert_eq!(comment.user, "Ada");
        assert_eq!(dashboard.comments(&TaskId::from("2")).len(), 3);
    }

    #[test]
    fn comment_posted_toast() {
        let mut dashboard = Dashboard::default();
        let mut toasts = dashboard.subscribe_toasts();

        dashboard.add_comment(&TaskId::from("1"), "Ship it").unwrap();
        assert_eq!(toasts.try_recv().unwrap(), Toast::success("Comment posted"));
        assert!(toasts.try_recv().is_err());
    }

    #[test]
    fn failed_commands_publish_no_toast() {
        let mut dashboard = Dashboard::default();
        let mut toasts = dashboard.subscribe_toasts();

        assert!(dashboard.add_comment(&TaskId::from("1"), "  ").is_err());
        assert!(dashboard.add_comment(&TaskId::from("77"), "hello").is_err());
        assert!(dashboard.dismiss_notification(&NotificationId::from("9")).is_err());
        assert!(dashboard.mark_notification_read(&NotificationId::from("9")).is_err());
        assert!(dashboard.send_message(&ChannelId::from("nope"), "hi").is_err());
        assert!(dashboard.send_message(&ChannelId::from("1"), "").is_err());

        assert!(toasts.try_recv().is_err());
        assert_eq!(dashboard.comments(&TaskId::from("1")).len(), 2);
        assert_eq!(dashboard.notifications().len(), 3);
        assert_eq!(dashboard.messages(&ChannelId::from("1")).len(), 4);
    }

    #[test]
    fn opening_chat_toast_even_for_unknown_member() {
        let mut dashboard = Dashboard::default();
        let mut toasts = dashboard.subscribe_toasts();

        assert_eq!(dashboard.message_member(&MemberId::from("nobody")), None);
        assert_eq!(toasts.try_recv().unwrap(), Toast::success("Opening chat..."));

        dashboard.message_member(&MemberId::from("2"));
        assert_eq!(toasts.try_recv().unwrap(), Toast::success("Opening chat..."));
    }

    #[test]
    fn settings_acknowledgments() {
        let dashboard = Dashboard::default();
        let mut toasts = dashboard.subscribe_toasts();

        dashboard.save_profile();
        dashboard.export_data();
        dashboard.delete_account();

        assert_eq!(toasts.try_recv().unwrap(), Toast::success("Profile updated successfully"));
        assert_eq!(toasts.try_recv().unwrap().kind, ToastKind::Success);
        assert_eq!(
            toasts.try_recv().unwrap(),
            Toast::error("Account deletion requires admin confirmation")
        );
        assert_eq!(dashboard.activity_log().len(), 5);
    }

    #[test]
    fn quick_stats_follow_moves() {
        let mut dashboard = Dashboard::default();
        assert_eq!(
            dashboard.quick_stats(),
            QuickStats {
                tasks_completed: 2,
                in_progress: 2,
                todo: 2,
                members_online: 4,
            }
        );

        dashboard.move_task(&TaskId::from("3"), TaskStatus::Done).unwrap();
        let stats = dashboard.quick_stats();
        assert_eq!(stats.tasks_completed, 3);
        assert_eq!(stats.todo, 1);
    }

    #[test]
    fn message_member_finds_direct_conversation() {
        let mut dashboard = Dashboard::default();
        assert_eq!(
            dashboard.message_member(&MemberId::from("1")),
            Some(ChannelId::from("dm1"))
        );
        assert_eq!(dashboard.message_member(&MemberId::from("6")), None);
    }

    #[test]
    fn ingest_announces_headline() {
        let mut dashboard = Dashboard::default();
        let mut toasts = dashboard.subscribe_toasts();

        dashboard.ingest_activity(Activity::just_now(
            ActivityKind::File,
            "Mike Torres",
            "updated",
            "Security Audit",
        ));
        assert_eq!(dashboard.activity_log().len(), 6);
        assert_eq!(
            toasts.try_recv().unwrap(),
            Toast::success("Mike Torres updated Security Audit")
        );
    }
}
