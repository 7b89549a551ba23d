use serde::Serialize;

use crate::{
    consts::report_const::{GOOD_FILL, WARN_FILL},
    models::{
        cohort::Cohort,
        invitation::{Invitation, InvitationStatus},
    },
};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FillTier {
    Good,
    Warn,
    Low,
}

impl FillTier {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= GOOD_FILL {
            FillTier::Good
        } else if percent >= WARN_FILL {
            FillTier::Warn
        } else {
            FillTier::Low
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CohortStats {
    pub id: String,
    pub name: String,
    pub course: String,
    pub region: String,
    pub date: String,
    pub seats: u32,
    pub confirmed: usize,
    pub invited: usize,
    pub to_contact: usize,
    pub fill_percent: f64,
    pub fill_tier: FillTier,
    pub gauge_percent: f64,
    pub gauge_tier: FillTier,
}

impl CohortStats {
    pub fn fill_label(&self) -> String {
        format!("{:.0}%", self.fill_percent)
    }
}

/// Confirmed share of seats, 0 for a cohort without seats.
pub fn fill_percent(confirmed: usize, seats: u32) -> f64 {
    if seats == 0 {
        return 0.0;
    }
    confirmed as f64 / seats as f64 * 100.0
}

/// Display-only percentage for gauges, clamped to `0..=100`.
pub fn gauge_percent(value: usize, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (value as f64 / max as f64 * 100.0).clamp(0.0, 100.0)
}

pub fn active_cohorts<'a>(cohorts: &'a [Cohort], today: &str) -> Vec<&'a Cohort> {
    cohorts.iter().filter(|c| c.is_active(today)).collect()
}

pub fn cohort_stats(cohort: &Cohort, invitations: &[Invitation]) -> CohortStats {
    let members: Vec<&Invitation> = invitations.iter().filter(|i| cohort.includes(i)).collect();
    let count = |status: InvitationStatus| members.iter().filter(|i| i.status == status).count();

    let confirmed = count(InvitationStatus::Confirmed);
    let fill = fill_percent(confirmed, cohort.seats);
    let gauge = gauge_percent(confirmed, cohort.seats);

    CohortStats {
        id: cohort.id.clone(),
        name: cohort.name.clone(),
        course: cohort.course.clone(),
        region: cohort.region.clone(),
        date: cohort.date.clone(),
        seats: cohort.seats,
        confirmed,
        invited: count(InvitationStatus::Invited),
        to_contact: count(InvitationStatus::ToBeContacted),
        fill_percent: fill,
        fill_tier: FillTier::from_percent(fill),
        gauge_percent: gauge,
        gauge_tier: FillTier::from_percent(gauge),
    }
}

/// Stats for every upcoming cohort, in store order.
pub fn upcoming_cohort_stats(
    cohorts: &[Cohort],
    invitations: &[Invitation],
    today: &str,
) -> Vec<CohortStats> {
    active_cohorts(cohorts, today)
        .into_iter()
        .map(|cohort| cohort_stats(cohort, invitations))
        .collect()
}
