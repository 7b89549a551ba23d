use serde::{Deserialize, Serialize};

use crate::models::{
    cohort::Cohort,
    invitation::{Invitation, InvitationStatus},
};

/// AND of every non-empty field; an empty field does not constrain.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct InvitationFilter {
    #[serde(default)]
    pub sales_rep: String,
    #[serde(default)]
    pub status: Option<InvitationStatus>,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub cohort_date: String,
}

impl InvitationFilter {
    pub fn is_empty(&self) -> bool {
        self.sales_rep.is_empty()
            && self.status.is_none()
            && self.course.is_empty()
            && self.cohort_date.is_empty()
    }

    pub fn matches(&self, invitation: &Invitation) -> bool {
        (self.sales_rep.is_empty() || invitation.sales_rep == self.sales_rep)
            && self.status.is_none_or(|status| invitation.status == status)
            && (self.course.is_empty() || invitation.course() == self.course)
            && (self.cohort_date.is_empty() || invitation.cohort_date() == self.cohort_date)
    }

    pub fn apply<'a>(&self, invitations: &'a [Invitation]) -> Vec<&'a Invitation> {
        invitations.iter().filter(|inv| self.matches(inv)).collect()
    }
}

/// Distinct course ids across all cohorts, first-seen order.
pub fn course_options(cohorts: &[Cohort]) -> Vec<String> {
    let mut courses: Vec<String> = Vec::new();
    for cohort in cohorts {
        if !courses.contains(&cohort.course) {
            courses.push(cohort.course.clone());
        }
    }
    courses
}

/// Name of the first cohort on `date`, or the date itself.
pub fn cohort_label<'a>(cohorts: &'a [Cohort], date: &'a str) -> &'a str {
    cohorts
        .iter()
        .find(|c| c.date == date)
        .map(|c| c.name.as_str())
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::{cohort, invitation};

    #[test]
    fn filters_are_conjunctive() {
        let invitations = vec![
            invitation("1", "A", InvitationStatus::Confirmed, "2026-01-01"),
            invitation("2", "A", InvitationStatus::Invited, "2026-01-01"),
            invitation("3", "B", InvitationStatus::Confirmed, "2026-01-01"),
        ];
        let filter = InvitationFilter {
            sales_rep: "A".into(),
            status: Some(InvitationStatus::Confirmed),
            ..Default::default()
        };

        let hits = filter.apply(&invitations);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let invitations = vec![
            invitation("1", "A", InvitationStatus::Confirmed, "2026-01-01"),
            invitation("2", "B", InvitationStatus::Invited, "2027-01-01"),
        ];
        let filter = InvitationFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&invitations).len(), 2);
    }

    #[test]
    fn cohort_date_and_course_filters() {
        let invitations = vec![
            invitation("1", "A", InvitationStatus::Confirmed, "2026-01-01"),
            invitation("2", "A", InvitationStatus::Confirmed, "2026-02-01"),
        ];
        let filter = InvitationFilter {
            cohort_date: "2026-02-01".into(),
            course: "LEAD".into(),
            ..Default::default()
        };
        let hits = filter.apply(&invitations);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");

        let filter = InvitationFilter {
            course: "SALES".into(),
            ..Default::default()
        };
        assert!(filter.apply(&invitations).is_empty());
    }

    #[test]
    fn course_options_are_distinct_in_order() {
        let cohorts = vec![
            cohort("1", "LEAD", "EMEA", "2026-01-01", 10),
            cohort("2", "SALES", "EMEA", "2026-02-01", 10),
            cohort("3", "LEAD", "NAMER", "2026-03-01", 10),
        ];
        assert_eq!(course_options(&cohorts), ["LEAD", "SALES"]);
    }

    #[test]
    fn cohort_label_falls_back_to_date() {
        let cohorts = vec![cohort("1", "LEAD", "EMEA", "2026-01-01", 10)];
        assert_eq!(cohort_label(&cohorts, "2026-01-01"), "cohort 1");
        assert_eq!(cohort_label(&cohorts, "2026-05-05"), "2026-05-05");
    }
}
