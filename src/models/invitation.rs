use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::Error;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InvitationStatus {
    #[default]
    #[serde(rename = "To be contacted")]
    ToBeContacted,
    Invited,
    Confirmed,
    #[serde(rename = "Can't attend")]
    CantAttend,
    Rescheduled,
}

impl InvitationStatus {
    pub const ALL: [InvitationStatus; 5] = [
        InvitationStatus::ToBeContacted,
        InvitationStatus::Invited,
        InvitationStatus::Confirmed,
        InvitationStatus::CantAttend,
        InvitationStatus::Rescheduled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvitationStatus::ToBeContacted => "To be contacted",
            InvitationStatus::Invited => "Invited",
            InvitationStatus::Confirmed => "Confirmed",
            InvitationStatus::CantAttend => "Can't attend",
            InvitationStatus::Rescheduled => "Rescheduled",
        }
    }
}

impl fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvitationStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InvitationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::UnknownStatus(s.to_string()))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Invitation {
    pub id: String,
    pub company: String,
    pub name: String, // ! contact person
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    pub sales_rep: String, // ! matches SalesRep.name

    // ? cohort join triple
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub cohort_date: Option<String>,

    pub status: InvitationStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Invitation {
    pub fn course(&self) -> &str {
        self.course.as_deref().unwrap_or_default()
    }

    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or_default()
    }

    pub fn cohort_date(&self) -> &str {
        self.cohort_date.as_deref().unwrap_or_default()
    }

    pub fn in_year(&self, year: &str) -> bool {
        self.cohort_date
            .as_deref()
            .is_some_and(|date| date.starts_with(year))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CreateInvitation {
    pub company: String,
    pub name: String,
    pub role: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub sales_rep: String,
    pub course: Option<String>,
    pub region: Option<String>,
    pub cohort_date: Option<String>,
    pub status: InvitationStatus,
    pub notes: Option<String>,
    pub created_at: String,
}
