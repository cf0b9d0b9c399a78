//! Read-only team roster queries

use crate::types::{MemberId, MemberStatus, TeamMember};
use serde::Serialize;

/// Aggregate figures for the team page header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub total: usize,
    pub online: usize,
    pub departments: usize,
    /// Rounded mean of member completion rates
    pub avg_completion: u32,
}

/// Fixed team roster
#[derive(Debug, Clone, Default)]
pub struct Roster {
    members: Vec<TeamMember>,
}

impl Roster {
    #[inline]
    #[must_use]
    pub fn new(members: Vec<TeamMember>) -> Self {
        Self { members }
    }

    #[inline]
    #[must_use]
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: &MemberId) -> Option<&TeamMember> {
        self.members.iter().find(|m| &m.id == id)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members with a given presence
    pub fn with_status(&self, status: MemberStatus) -> impl Iterator<Item = &TeamMember> + '_ {
        self.members.iter().filter(move |m| m.status == status)
    }

    /// Distinct departments, first-seen order
    #[must_use]
    pub fn departments(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for m in &self.members {
            if !seen.contains(&m.department.as_str()) {
                seen.push(&m.department);
            }
        }
        seen
    }

    /// Members matching `query` on name, email or role, optionally within a
    /// department. Both comparisons of `query` are case-insensitive.
    #[must_use]
    pub fn search(&self, query: &str, department: Option<&str>) -> Vec<&TeamMember> {
        let needle = query.to_lowercase();
        self.members
            .iter()
            .filter(|m| {
                m.name.to_lowercase().contains(&needle)
                    || m.email.to_lowercase().contains(&needle)
                    || m.role.to_lowercase().contains(&needle)
            })
            .filter(|m| department.map_or(true, |d| m.department == d))
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> TeamStats {
        let total = self.members.len();
        let avg_completion = if total == 0 {
            0
        } else {
            let sum: u32 = self.members.iter().map(|m| u32::from(m.completion_rate)).sum();
            #[allow(clippy::cast_possible_truncation)]
            let total_u32 = total as u32;
            (sum + total_u32 / 2) / total_u32
        };

        TeamStats {
            total,
            online: self.with_status(MemberStatus::Online).count(),
            departments: self.departments().len(),
            avg_completion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn presence_groups() {
        let roster = Roster::new(fixtures::team_members());
        assert_eq!(roster.with_status(MemberStatus::Online).count(), 4);
        assert_eq!(roster.with_status(MemberStatus::Away).count(), 1);
        assert_eq!(roster.with_status(MemberStatus::Offline).count(), 1);
    }

    #[test]
    fn stats() {
        let stats = Roster::new(fixtures::team_members()).stats();
        // (92 + 88 + 95 + 94 + 85 + 90) / 6 = 90.67
        assert_eq!(
            stats,
            TeamStats {
                total: 6,
                online: 4,
                departments: 5,
                avg_completion: 91,
            }
        );
    }

    #[test]
    fn search_with_department() {
        let roster = Roster::new(fixtures::team_members());
        let names: Vec<_> = roster
            .search("developer", Some("Engineering"))
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alex Chen", "Emily White"]);

        assert_eq!(roster.search("team.com", None).len(), 6);
        assert!(roster.search("developer", Some("Security")).is_empty());
    }

    #[test]
    fn empty_roster_stats() {
        assert_eq!(Roster::default().stats().avg_completion, 0);
    }
}
