use serde::{Deserialize, Serialize};

use crate::models::{cohort::Cohort, invitation::Invitation, sales_rep::SalesRep};

pub mod cohort;
pub mod invitation;
pub mod region;
pub mod sales_rep;

/// Local copy of the three store collections, replaced wholesale on every load.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Collections {
    pub invitations: Vec<Invitation>,
    pub sales_reps: Vec<SalesRep>,
    pub cohorts: Vec<Cohort>,
}
