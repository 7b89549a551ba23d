use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    consts::report_const::{GOAL_YEAR, LEADERBOARD_SIZE},
    errors::Error,
    models::{
        invitation::{Invitation, InvitationStatus},
        region::Region,
        sales_rep::SalesRep,
    },
};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaderboardKind {
    Year,
    AllTime,
    EmeaYear,
    NamerYear,
}

/// Which invitations a leaderboard counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    pub region: Option<Region>,
    pub year: Option<&'static str>,
}

impl Scope {
    pub fn admits(&self, invitation: &Invitation) -> bool {
        self.region
            .is_none_or(|region| invitation.region() == region.as_str())
            && self.year.is_none_or(|year| invitation.in_year(year))
    }
}

impl LeaderboardKind {
    // ! page order
    pub const ALL: [LeaderboardKind; 4] = [
        LeaderboardKind::Year,
        LeaderboardKind::AllTime,
        LeaderboardKind::EmeaYear,
        LeaderboardKind::NamerYear,
    ];

    pub fn index(&self) -> usize {
        match self {
            LeaderboardKind::Year => 0,
            LeaderboardKind::AllTime => 1,
            LeaderboardKind::EmeaYear => 2,
            LeaderboardKind::NamerYear => 3,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            LeaderboardKind::Year => "year",
            LeaderboardKind::AllTime => "all-time",
            LeaderboardKind::EmeaYear => "emea-year",
            LeaderboardKind::NamerYear => "namer-year",
        }
    }

    pub fn title(&self) -> String {
        match self {
            LeaderboardKind::Year => format!("{GOAL_YEAR} Performance"),
            LeaderboardKind::AllTime => "Global - All Time".to_string(),
            LeaderboardKind::EmeaYear => format!("EMEA {GOAL_YEAR}"),
            LeaderboardKind::NamerYear => format!("NAMER {GOAL_YEAR}"),
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            LeaderboardKind::Year => "#22c55e",
            LeaderboardKind::AllTime => "#8b5cf6",
            LeaderboardKind::EmeaYear => "#3b82f6",
            LeaderboardKind::NamerYear => "#f97316",
        }
    }

    pub fn scope(&self) -> Scope {
        match self {
            LeaderboardKind::Year => Scope {
                region: None,
                year: Some(GOAL_YEAR),
            },
            LeaderboardKind::AllTime => Scope {
                region: None,
                year: None,
            },
            LeaderboardKind::EmeaYear => Scope {
                region: Some(Region::Emea),
                year: Some(GOAL_YEAR),
            },
            LeaderboardKind::NamerYear => Scope {
                region: Some(Region::Namer),
                year: Some(GOAL_YEAR),
            },
        }
    }
}

impl FromStr for LeaderboardKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeaderboardKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| Error::UnknownLeaderboard(s.to_string()))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Confirmed,
    Total,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Desc,
    Asc,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeaderboardSort {
    #[serde(default)]
    pub key: SortKey,
    #[serde(default)]
    pub order: SortOrder,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub name: String,
    pub confirmed: usize,
    pub total: usize,
}

impl LeaderboardRow {
    fn key(&self, key: SortKey) -> usize {
        match key {
            SortKey::Confirmed => self.confirmed,
            SortKey::Total => self.total,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Leaderboard {
    pub kind: LeaderboardKind,
    pub title: String,
    pub sort: LeaderboardSort,
    pub rows: Vec<LeaderboardRow>,
}

/// One row per sales rep, in rep order, counting only invitations in `scope`.
pub fn leaderboard_rows(
    scope: Scope,
    sales_reps: &[SalesRep],
    invitations: &[Invitation],
) -> Vec<LeaderboardRow> {
    sales_reps
        .iter()
        .map(|rep| {
            let mine: Vec<&Invitation> = invitations
                .iter()
                .filter(|inv| inv.sales_rep == rep.name && scope.admits(inv))
                .collect();
            LeaderboardRow {
                name: rep.name.clone(),
                confirmed: mine
                    .iter()
                    .filter(|inv| inv.status == InvitationStatus::Confirmed)
                    .count(),
                total: mine.len(),
            }
        })
        .collect()
}

/// Stable sort on the chosen key, then keep the top entries. Ties keep rep order.
pub fn rank(mut rows: Vec<LeaderboardRow>, sort: LeaderboardSort) -> Vec<LeaderboardRow> {
    match sort.order {
        SortOrder::Desc => rows.sort_by(|a, b| b.key(sort.key).cmp(&a.key(sort.key))),
        SortOrder::Asc => rows.sort_by_key(|row| row.key(sort.key)),
    }
    rows.truncate(LEADERBOARD_SIZE);
    rows
}

pub fn leaderboard(
    kind: LeaderboardKind,
    sort: LeaderboardSort,
    sales_reps: &[SalesRep],
    invitations: &[Invitation],
) -> Leaderboard {
    Leaderboard {
        kind,
        title: kind.title(),
        sort,
        rows: rank(leaderboard_rows(kind.scope(), sales_reps, invitations), sort),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::{invitation, invitation_in, rep};

    #[test]
    fn fifteen_reps_truncate_to_ten_descending() {
        let reps: Vec<SalesRep> = (0..15).map(|i| rep(&format!("rep{i:02}"))).collect();
        let mut invitations = Vec::new();
        for (i, r) in reps.iter().enumerate() {
            for n in 0..i {
                invitations.push(invitation(
                    &format!("{}-{n}", r.name),
                    &r.name,
                    InvitationStatus::Confirmed,
                    "2026-03-01",
                ));
            }
        }

        let board = leaderboard(
            LeaderboardKind::Year,
            LeaderboardSort::default(),
            &reps,
            &invitations,
        );
        assert_eq!(board.rows.len(), 10);
        assert!(board.rows.windows(2).all(|w| w[0].confirmed > w[1].confirmed));
        assert_eq!(board.rows[0].name, "rep14");
    }

    #[test]
    fn ties_keep_rep_order() {
        let reps = vec![rep("Adam"), rep("Bea"), rep("Cy")];
        let invitations = vec![
            invitation("1", "Cy", InvitationStatus::Invited, "2026-01-01"),
            invitation("2", "Adam", InvitationStatus::Invited, "2026-01-01"),
        ];

        let rows = rank(
            leaderboard_rows(LeaderboardKind::AllTime.scope(), &reps, &invitations),
            LeaderboardSort::default(),
        );
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Adam", "Bea", "Cy"]);

        let rows = rank(
            rows,
            LeaderboardSort {
                key: SortKey::Total,
                order: SortOrder::Desc,
            },
        );
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Adam", "Cy", "Bea"]);
    }

    #[test]
    fn ascending_sort_puts_smallest_first() {
        let reps = vec![rep("Adam"), rep("Bea")];
        let invitations = vec![
            invitation("1", "Adam", InvitationStatus::Confirmed, "2026-01-01"),
            invitation("2", "Adam", InvitationStatus::Confirmed, "2026-01-01"),
            invitation("3", "Bea", InvitationStatus::Confirmed, "2026-01-01"),
        ];
        let board = leaderboard(
            LeaderboardKind::Year,
            LeaderboardSort {
                key: SortKey::Confirmed,
                order: SortOrder::Asc,
            },
            &reps,
            &invitations,
        );
        assert_eq!(board.rows[0].name, "Bea");
    }

    #[test]
    fn scopes_filter_by_region_and_year() {
        let reps = vec![rep("Jane")];
        let invitations = vec![
            invitation_in("1", InvitationStatus::Confirmed, "LEAD", "EMEA", "2026-03-01"),
            invitation_in("2", InvitationStatus::Invited, "LEAD", "NAMER", "2026-03-01"),
            invitation_in("3", InvitationStatus::Confirmed, "LEAD", "EMEA", "2025-03-01"),
        ];

        let count = |kind: LeaderboardKind| {
            let row = &leaderboard_rows(kind.scope(), &reps, &invitations)[0];
            (row.confirmed, row.total)
        };
        assert_eq!(count(LeaderboardKind::AllTime), (2, 3));
        assert_eq!(count(LeaderboardKind::Year), (1, 2));
        assert_eq!(count(LeaderboardKind::EmeaYear), (1, 1));
        assert_eq!(count(LeaderboardKind::NamerYear), (0, 1));
    }

    #[test]
    fn rep_match_is_exact() {
        let reps = vec![rep("Jane")];
        let invitations = vec![invitation("1", "jane", InvitationStatus::Confirmed, "2026-01-01")];
        let rows = leaderboard_rows(LeaderboardKind::AllTime.scope(), &reps, &invitations);
        assert_eq!(rows[0].total, 0);
    }

    #[test]
    fn slugs_round_trip() {
        for kind in LeaderboardKind::ALL {
            assert_eq!(kind.slug().parse::<LeaderboardKind>().unwrap(), kind);
        }
        assert!("apac".parse::<LeaderboardKind>().is_err());
    }
}
