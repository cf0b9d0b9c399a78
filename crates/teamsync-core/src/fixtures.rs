//! Seed data the dashboard starts from

use crate::types::{
    Activity, ActivityId, ActivityKind, Channel, ChannelId, ChannelKind, Comment, MemberId,
    MemberStatus, Message, MessageId, Notification, NotificationId, NotificationKind, Priority,
    Task, TaskStatus, TeamMember,
};

/// The six board tasks
#[must_use]
pub fn tasks() -> Vec<Task> {
    vec![
        Task::new("1", "Homepage Hero Redesign")
            .with_description("Update the landing page hero section with new branding guidelines")
            .with_assignee("Alex Chen")
            .with_priority(Priority::High)
            .with_due_date("Dec 22")
            .with_status(TaskStatus::InProgress),
        Task::new("2", "API Documentation")
            .with_description("Write comprehensive API documentation for v2.0 endpoints")
            .with_assignee("Sarah Johnson")
            .with_priority(Priority::Medium)
            .with_due_date("Dec 24")
            .with_status(TaskStatus::InProgress),
        Task::new("3", "Mobile App Testing")
            .with_description("Complete QA testing for iOS and Android apps")
            .with_assignee("Mike Torres")
            .with_priority(Priority::High)
            .with_due_date("Dec 20")
            .with_status(TaskStatus::Todo),
        Task::new("4", "Database Migration")
            .with_description("Migrate legacy database to new PostgreSQL cluster")
            .with_assignee("Emily White")
            .with_priority(Priority::Low)
            .with_due_date("Dec 28")
            .with_status(TaskStatus::Todo),
        Task::new("5", "User Feedback Analysis")
            .with_description("Analyze Q4 user feedback and create summary report")
            .with_assignee("David Kim")
            .with_priority(Priority::Medium)
            .with_due_date("Dec 19")
            .with_status(TaskStatus::Done),
        Task::new("6", "Security Audit")
            .with_description("Conduct security audit of authentication system")
            .with_assignee("Lisa Anderson")
            .with_priority(Priority::High)
            .with_due_date("Dec 21")
            .with_status(TaskStatus::Done),
    ]
}

#[allow(clippy::too_many_arguments)]
fn member(
    id: &str,
    name: &str,
    email: &str,
    role: &str,
    department: &str,
    status: MemberStatus,
    current_task: Option<&str>,
    phone: &str,
    location: &str,
    join_date: &str,
    counters: (u32, u32, u8),
    skills: &[&str],
) -> TeamMember {
    TeamMember {
        id: MemberId::from(id),
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        department: department.to_string(),
        status,
        current_task: current_task.map(str::to_string),
        phone: phone.to_string(),
        location: location.to_string(),
        join_date: join_date.to_string(),
        tasks_completed: counters.0,
        tasks_in_progress: counters.1,
        completion_rate: counters.2,
        skills: skills.iter().map(|s| (*s).to_string()).collect(),
    }
}

/// The team roster
#[must_use]
pub fn team_members() -> Vec<TeamMember> {
    vec![
        member(
            "1",
            "Alex Chen",
            "alex@team.com",
            "Senior Frontend Developer",
            "Engineering",
            MemberStatus::Online,
            Some("Working on Homepage Hero Redesign"),
            "+1 (555) 123-4567",
            "San Francisco, CA",
            "Jan 2023",
            (45, 3, 92),
            &["React", "TypeScript", "UI/UX", "Figma"],
        ),
        member(
            "2",
            "Sarah Johnson",
            "sarah@team.com",
            "Technical Writer",
            "Documentation",
            MemberStatus::Online,
            Some("Writing API docs"),
            "+1 (555) 234-5678",
            "New York, NY",
            "Mar 2023",
            (38, 2, 88),
            &["Technical Writing", "Documentation", "Markdown"],
        ),
        member(
            "3",
            "Mike Torres",
            "mike@team.com",
            "QA Engineer",
            "Quality Assurance",
            MemberStatus::Away,
            None,
            "+1 (555) 345-6789",
            "Austin, TX",
            "Feb 2023",
            (52, 4, 95),
            &["Testing", "Automation", "Selenium", "Jest"],
        ),
        member(
            "4",
            "Emily White",
            "emily@team.com",
            "Backend Developer",
            "Engineering",
            MemberStatus::Online,
            Some("Planning DB migration"),
            "+1 (555) 456-7890",
            "Seattle, WA",
            "Dec 2022",
            (61, 2, 94),
            &["Node.js", "PostgreSQL", "API Design", "Docker"],
        ),
        member(
            "5",
            "David Kim",
            "david@team.com",
            "Product Manager",
            "Product",
            MemberStatus::Offline,
            None,
            "+1 (555) 567-8901",
            "Los Angeles, CA",
            "Nov 2022",
            (29, 5, 85),
            &["Product Strategy", "Roadmapping", "User Research"],
        ),
        member(
            "6",
            "Lisa Anderson",
            "lisa@team.com",
            "Security Engineer",
            "Security",
            MemberStatus::Online,
            Some("Security review"),
            "+1 (555) 678-9012",
            "Boston, MA",
            "Apr 2023",
            (34, 3, 90),
            &["Security Auditing", "Penetration Testing", "Compliance"],
        ),
    ]
}

fn activity(id: &str, kind: ActivityKind, user: &str, action: &str, target: &str, time: &str) -> Activity {
    Activity {
        id: ActivityId::from(id),
        kind,
        user: user.to_string(),
        action: action.to_string(),
        target: target.to_string(),
        time: time.to_string(),
        is_new: false,
    }
}

/// The five entries the feed opens with, most recent first
#[must_use]
pub fn activities() -> Vec<Activity> {
    vec![
        activity("1", ActivityKind::Task, "David Kim", "completed task", "User Feedback Analysis", "2 minutes ago"),
        activity("2", ActivityKind::Comment, "Sarah Johnson", "commented on", "API Documentation", "5 minutes ago"),
        activity("3", ActivityKind::Member, "Lisa Anderson", "joined the team", "TeamSync", "15 minutes ago"),
        activity("4", ActivityKind::File, "Alex Chen", "uploaded file to", "Homepage Hero Redesign", "23 minutes ago"),
        activity("5", ActivityKind::Task, "Emily White", "created task", "Database Migration", "1 hour ago"),
    ]
}

fn notification(
    id: &str,
    title: &str,
    message: &str,
    time: &str,
    read: bool,
    kind: NotificationKind,
) -> Notification {
    Notification {
        id: NotificationId::from(id),
        title: title.to_string(),
        message: message.to_string(),
        time: time.to_string(),
        read,
        kind,
    }
}

/// Notifications for the current user
#[must_use]
pub fn notifications() -> Vec<Notification> {
    vec![
        notification(
            "1",
            "Task Assigned",
            "You've been assigned to 'Mobile App Testing'",
            "5 minutes ago",
            false,
            NotificationKind::Info,
        ),
        notification(
            "2",
            "Deadline Approaching",
            "Task 'User Feedback Analysis' is due today",
            "1 hour ago",
            false,
            NotificationKind::Warning,
        ),
        notification(
            "3",
            "Task Completed",
            "Lisa Anderson completed 'Security Audit'",
            "2 hours ago",
            true,
            NotificationKind::Success,
        ),
    ]
}

/// Thread every task's comment panel opens with
#[must_use]
pub fn seed_comments() -> Vec<Comment> {
    vec![
        Comment {
            id: MessageId::from("1"),
            user: "Sarah Johnson".to_string(),
            text: "I've reviewed the requirements and they look good. Let's proceed!".to_string(),
            time: "2 hours ago".to_string(),
            is_new: false,
        },
        Comment {
            id: MessageId::from("2"),
            user: "Alex Chen".to_string(),
            text: "Great! I'll start working on the wireframes today.".to_string(),
            time: "1 hour ago".to_string(),
            is_new: false,
        },
    ]
}

fn group_channel(id: &str, name: &str, unread: u32, last: &str, when: &str, members: u32, private: bool) -> Channel {
    Channel {
        id: ChannelId::from(id),
        name: name.to_string(),
        kind: ChannelKind::Channel,
        unread,
        last_message: last.to_string(),
        last_message_time: when.to_string(),
        members: Some(members),
        is_private: private,
        is_online: None,
    }
}

fn direct(id: &str, name: &str, unread: u32, last: &str, when: &str, online: bool) -> Channel {
    Channel {
        id: ChannelId::from(id),
        name: name.to_string(),
        kind: ChannelKind::Direct,
        unread,
        last_message: last.to_string(),
        last_message_time: when.to_string(),
        members: None,
        is_private: false,
        is_online: Some(online),
    }
}

/// Group channels followed by direct conversations
#[must_use]
pub fn channels() -> Vec<Channel> {
    vec![
        group_channel("1", "general", 3, "Alex: Let's sync up this afternoon", "2m ago", 12, false),
        group_channel("2", "project-alpha", 0, "Sarah: Design files are ready", "1h ago", 5, true),
        group_channel("3", "developers", 7, "Mike: PR needs review", "5m ago", 8, false),
        direct("dm1", "Alex Chen", 2, "Can you review my code?", "3m ago", true),
        direct("dm2", "Sarah Johnson", 0, "Thanks for the feedback!", "30m ago", true),
        direct("dm3", "Mike Torres", 0, "See you tomorrow!", "2h ago", false),
        direct("dm4", "Emily White", 1, "Quick question about the DB", "1h ago", true),
    ]
}

fn message(id: &str, sender: &str, text: &str, time: &str, is_self: bool) -> Message {
    Message {
        id: MessageId::from(id),
        sender: sender.to_string(),
        text: text.to_string(),
        time: time.to_string(),
        is_self,
        is_new: false,
    }
}

/// Seeded conversation history, keyed by channel id
///
/// `display_name` is the sender recorded on the current user's own messages.
#[must_use]
pub fn channel_messages(display_name: &str) -> Vec<(ChannelId, Vec<Message>)> {
    vec![
        (
            ChannelId::from("1"),
            vec![
                message("1", "Sarah Johnson", "Hey team! Just finished the new design mockups 🎨", "10:30 AM", false),
                message("2", "Alex Chen", "Awesome! Can you share them in the project channel?", "10:32 AM", false),
                message("3", "Mike Torres", "Looking forward to seeing them. Are they mobile-responsive?", "10:35 AM", false),
                message(
                    "4",
                    "Sarah Johnson",
                    "Yes! I've designed for mobile, tablet, and desktop views. Will upload shortly.",
                    "10:36 AM",
                    false,
                ),
            ],
        ),
        (
            ChannelId::from("dm1"),
            vec![
                message("1", "Alex Chen", "Hey! I just pushed some changes to the auth module.", "2:15 PM", false),
                message("2", display_name, "Great! I'll take a look in a few minutes.", "2:16 PM", true),
                message("3", "Alex Chen", "Can you review my code? It's in PR #234", "2:18 PM", false),
                message("4", "Alex Chen", "Thanks in advance! 🙏", "2:18 PM", false),
            ],
        ),
    ]
}
