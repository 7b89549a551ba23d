use serde::Serialize;

use crate::{
    consts::report_const::{GOAL_TARGET, GOAL_YEAR},
    models::invitation::{Invitation, InvitationStatus},
};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GoalMetrics {
    pub confirmed: usize,
    pub invited: usize,
    pub to_contact: usize,
    pub goal: u32,
    // ! not clamped, goes past 100 once the goal is beaten
    pub percent_complete: f64,
}

impl GoalMetrics {
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.percent_complete)
    }
}

pub fn goal_metrics(invitations: &[Invitation]) -> GoalMetrics {
    let count = |status: InvitationStatus| {
        invitations
            .iter()
            .filter(|inv| inv.status == status && inv.in_year(GOAL_YEAR))
            .count()
    };
    let confirmed = count(InvitationStatus::Confirmed);

    GoalMetrics {
        confirmed,
        invited: count(InvitationStatus::Invited),
        to_contact: count(InvitationStatus::ToBeContacted),
        goal: GOAL_TARGET,
        percent_complete: confirmed as f64 / GOAL_TARGET as f64 * 100.0,
    }
}
