use serde::Serialize;

use crate::{
    models::cohort::Cohort,
    report::{
        filter::InvitationFilter,
        leaderboard::{LeaderboardKind, LeaderboardSort},
    },
    session::draft::InvitationDraft,
};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Dashboard,
    Invitations,
    Leaderboards,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Dashboard, Tab::Invitations, Tab::Leaderboards];

    pub fn path(&self) -> &'static str {
        match self {
            Tab::Dashboard => "/dashboard",
            Tab::Invitations => "/invitations",
            Tab::Leaderboards => "/leaderboards",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "📊 Dashboard",
            Tab::Invitations => "📋 Invitations",
            Tab::Leaderboards => "🏆 Leaderboards",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeaderboardSorts([LeaderboardSort; 4]);

impl LeaderboardSorts {
    pub fn get(&self, kind: LeaderboardKind) -> LeaderboardSort {
        self.0[kind.index()]
    }

    fn set(&mut self, kind: LeaderboardKind, sort: LeaderboardSort) {
        self.0[kind.index()] = sort;
    }
}

/// Everything the screens need besides the collections themselves.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UiState {
    pub tab: Tab,
    pub loading: bool,
    pub filters: InvitationFilter,
    pub form_open: bool,
    pub draft: InvitationDraft,
    pub sorts: LeaderboardSorts,
    pub pending_delete: Option<String>,
    pub notice: Option<Notice>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            tab: Tab::default(),
            // ! nothing is fetched until the first load finishes
            loading: true,
            filters: InvitationFilter::default(),
            form_open: false,
            draft: InvitationDraft::default(),
            sorts: LeaderboardSorts::default(),
            pending_delete: None,
            notice: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectTab(Tab),
    SetFilters(InvitationFilter),
    ClearFilters,
    OpenForm,
    CancelForm,
    EditDraft(InvitationDraft),
    SelectCohort {
        date: String,
        cohort: Option<Cohort>,
    },
    SortLeaderboard(LeaderboardKind, LeaderboardSort),
    RequestDelete(String),
    CancelDelete,
    DeleteFinished,
    DismissNotice,
    LoadStarted,
    LoadFinished,
    SubmitRejected(String),
    SubmitFailed(String),
    SubmitSucceeded,
}

pub fn reduce(mut state: UiState, action: Action) -> UiState {
    match action {
        Action::SelectTab(tab) => state.tab = tab,
        Action::SetFilters(filters) => state.filters = filters,
        Action::ClearFilters => state.filters = InvitationFilter::default(),
        Action::OpenForm => state.form_open = true,
        Action::CancelForm => state.form_open = false,
        Action::EditDraft(mut draft) => {
            draft.autofill = std::mem::take(&mut state.draft.autofill);
            state.draft = draft;
        }
        Action::SelectCohort { date, cohort } => {
            state.draft.cohort_date = date;
            state.draft.apply_cohort(cohort.as_ref());
        }
        Action::SortLeaderboard(kind, sort) => state.sorts.set(kind, sort),
        Action::RequestDelete(id) => state.pending_delete = Some(id),
        Action::CancelDelete | Action::DeleteFinished => state.pending_delete = None,
        Action::DismissNotice => state.notice = None,
        Action::LoadStarted => state.loading = true,
        Action::LoadFinished => state.loading = false,
        Action::SubmitRejected(message) => state.notice = Some(Notice { message }),
        Action::SubmitFailed(message) => {
            state.notice = Some(Notice {
                message: format!("Error adding invitation: {message}"),
            })
        }
        Action::SubmitSucceeded => {
            state.form_open = false;
            state.draft = InvitationDraft::default();
            state.notice = None;
        }
    }
    state
}
