use serde::{Deserialize, Serialize};

use crate::models::invitation::Invitation;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Cohort {
    pub id: String,
    pub name: String,
    pub course: String,
    pub region: String,
    pub date: String, // ! ISO `YYYY-MM-DD`
    pub seats: u32,
}

impl Cohort {
    /// Upcoming or running today. Plain string comparison, both sides ISO dates.
    pub fn is_active(&self, today: &str) -> bool {
        self.date.as_str() >= today
    }

    /// An invitation belongs to a cohort when course, region and date all match.
    pub fn includes(&self, invitation: &Invitation) -> bool {
        invitation.course() == self.course
            && invitation.region() == self.region
            && invitation.cohort_date() == self.date
    }
}
