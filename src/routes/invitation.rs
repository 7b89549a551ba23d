use axum::{
    extract::{Form, Path, State, rejection::FormRejection},
    response::{Html, Redirect},
};
use serde::Deserialize;
use tracing::info;

use crate::{
    errors::{Error, Result},
    models::invitation::InvitationStatus,
    report::filter::InvitationFilter,
    session::{
        draft::InvitationDraft,
        submit_draft,
        ui::{Action, Tab},
    },
    state::AppState,
    utils::time::today,
    views,
};

type FormInput<T> = std::result::Result<Form<T>, FormRejection>;

/// Filter bar as posted. Every select has an empty "All ..." option, so the
/// status arrives as text and is parsed here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterForm {
    #[serde(default)]
    pub sales_rep: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub cohort_date: String,
}

impl FilterForm {
    pub fn into_filter(self) -> Result<InvitationFilter> {
        let status = match self.status.as_str() {
            "" => None,
            raw => Some(raw.parse::<InvitationStatus>()?),
        };
        Ok(InvitationFilter {
            sales_rep: self.sales_rep,
            status,
            course: self.course,
            cohort_date: self.cohort_date,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

fn back_to_invitations() -> Redirect {
    Redirect::to(Tab::Invitations.path())
}

pub async fn set_filters(
    State(state): State<AppState>,
    input: FormInput<FilterForm>,
) -> Result<Redirect> {
    let Form(input) = input?;
    let filter = input.into_filter()?;

    state.session.lock().await.dispatch(Action::SetFilters(filter));
    Ok(back_to_invitations())
}

pub async fn clear_filters(State(state): State<AppState>) -> Redirect {
    state.session.lock().await.dispatch(Action::ClearFilters);
    back_to_invitations()
}

pub async fn open_form(State(state): State<AppState>) -> Redirect {
    state.session.lock().await.dispatch(Action::OpenForm);
    back_to_invitations()
}

/// Closes the modal. Whatever was typed is kept for the next open.
pub async fn cancel_form(
    State(state): State<AppState>,
    input: FormInput<InvitationDraft>,
) -> Redirect {
    let mut session = state.session.lock().await;
    if let Ok(Form(draft)) = input {
        session.edit_draft(draft);
    }
    session.dispatch(Action::CancelForm);
    back_to_invitations()
}

pub async fn edit_draft(
    State(state): State<AppState>,
    input: FormInput<InvitationDraft>,
) -> Result<Redirect> {
    let Form(draft) = input?;
    state.session.lock().await.edit_draft(draft);
    Ok(back_to_invitations())
}

pub async fn submit_invitation(
    State(state): State<AppState>,
    input: FormInput<InvitationDraft>,
) -> Result<Redirect> {
    let Form(draft) = input?;

    state.session.lock().await.edit_draft(draft);
    submit_draft(&state.session, &state.tables).await;
    Ok(back_to_invitations())
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    input: FormInput<StatusForm>,
) -> Result<Redirect> {
    let Form(input) = input?;
    let status: InvitationStatus = input.status.parse()?;

    info!("status of {} -> {}", id, status);
    let mut session = state.session.lock().await;
    session.change_status(&state.tables, &id, status).await;
    Ok(back_to_invitations())
}

/// Shows the confirmation prompt; nothing is deleted yet.
pub async fn request_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let mut session = state.session.lock().await;
    if !session.collections.invitations.iter().any(|inv| inv.id == id) {
        return Err(Error::NotFound);
    }
    session.dispatch(Action::SelectTab(Tab::Invitations));
    session.dispatch(Action::RequestDelete(id));
    Ok(Html(views::render(&session, &today())))
}

pub async fn confirm_delete(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    let mut session = state.session.lock().await;
    session.confirm_delete(&state.tables, &id).await;
    back_to_invitations()
}

pub async fn cancel_delete(State(state): State<AppState>) -> Redirect {
    state.session.lock().await.dispatch(Action::CancelDelete);
    back_to_invitations()
}
