//! Pure aggregation over the loaded collections. Nothing here is cached:
//! every render recomputes from the raw vectors.

use serde::Serialize;

use crate::{
    models::Collections,
    report::{
        cohort::{CohortStats, upcoming_cohort_stats},
        goal::{GoalMetrics, goal_metrics},
    },
};

pub mod cohort;
pub mod filter;
pub mod goal;
pub mod leaderboard;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Overview {
    pub goal: GoalMetrics,
    pub cohorts: Vec<CohortStats>,
}

pub fn overview(collections: &Collections, today: &str) -> Overview {
    Overview {
        goal: goal_metrics(&collections.invitations),
        cohorts: upcoming_cohort_stats(&collections.cohorts, &collections.invitations, today),
    }
}
