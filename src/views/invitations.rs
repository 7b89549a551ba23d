use crate::{
    models::{
        cohort::Cohort,
        invitation::{Invitation, InvitationStatus},
        region::Region,
        sales_rep::SalesRep,
    },
    report::filter::{InvitationFilter, cohort_label},
    session::{Session, draft::InvitationDraft},
    utils::html::{escape, options},
};

pub struct StatusStyle {
    pub bg: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

pub fn status_style(status: InvitationStatus) -> StatusStyle {
    match status {
        InvitationStatus::Confirmed => StatusStyle {
            bg: "#dcfce7",
            text: "#166534",
            border: "#86efac",
        },
        InvitationStatus::Invited => StatusStyle {
            bg: "#fef9c3",
            text: "#854d0e",
            border: "#fde047",
        },
        InvitationStatus::ToBeContacted => StatusStyle {
            bg: "#dbeafe",
            text: "#1e40af",
            border: "#93c5fd",
        },
        InvitationStatus::CantAttend => StatusStyle {
            bg: "#fee2e2",
            text: "#991b1b",
            border: "#fca5a5",
        },
        InvitationStatus::Rescheduled => StatusStyle {
            bg: "#f3f4f6",
            text: "#374151",
            border: "#d1d5db",
        },
    }
}

fn status_options(selected: &str) -> String {
    options(
        InvitationStatus::ALL.iter().map(|s| (s.as_str(), s.as_str())),
        selected,
    )
}

fn rep_options(reps: &[SalesRep], blank: &'static str, selected: &str) -> String {
    options(
        std::iter::once(("", blank)).chain(reps.iter().map(|r| (r.name.as_str(), r.name.as_str()))),
        selected,
    )
}

fn course_options(courses: &[String], blank: &'static str, selected: &str) -> String {
    options(
        std::iter::once(("", blank)).chain(courses.iter().map(|c| (c.as_str(), c.as_str()))),
        selected,
    )
}

fn filters_bar(session: &Session, courses: &[String]) -> String {
    let filters: &InvitationFilter = &session.ui.filters;
    let status = filters.status.map(|s| s.as_str()).unwrap_or_default();
    let cohorts: Vec<(&str, &str)> = session
        .collections
        .cohorts
        .iter()
        .map(|c| (c.date.as_str(), c.name.as_str()))
        .collect();

    let clear = if filters.is_empty() {
        String::new()
    } else {
        r#"<form method="post" action="/invitations/filters/clear"><button class="btn btn-clear">✕ Clear Filters</button></form>"#
            .to_string()
    };

    format!(
        r#"<div class="filters-bar card">
<form method="post" action="/invitations/filters" class="filters">
<label>Sales Rep <select name="sales_rep">{reps}</select></label>
<label>Status <select name="status"><option value="">All Statuses</option>{statuses}</select></label>
<label>Course <select name="course">{courses}</select></label>
<label>Cohort <select name="cohort_date">{cohorts}</select></label>
<button class="btn">Apply</button>
</form>
{clear}
</div>"#,
        reps = rep_options(&session.collections.sales_reps, "All Sales Reps", &filters.sales_rep),
        statuses = status_options(status),
        courses = course_options(courses, "All Courses", &filters.course),
        cohorts = options(
            std::iter::once(("", "All Cohorts")).chain(cohorts.iter().copied()),
            &filters.cohort_date
        ),
    )
}

fn add_form(
    draft: &InvitationDraft,
    reps: &[SalesRep],
    courses: &[String],
    cohorts: &[Cohort],
) -> String {
    let cohort_labels: Vec<(String, String)> = cohorts
        .iter()
        .map(|c| (c.date.clone(), format!("{} ({})", c.name, c.date)))
        .collect();
    let regions = std::iter::once(("", "Select..."))
        .chain(Region::ALL.iter().map(|r| (r.as_str(), r.as_str())));

    format!(
        r#"<div class="modal-overlay"><div class="modal">
<h2>➕ Add New Invitation</h2>
<form method="post" action="/invitations">
<div class="form-grid">
<label>Company * <input type="text" name="company" value="{company}" placeholder="e.g., Siemens"></label>
<label>Name * <input type="text" name="name" value="{name}" placeholder="e.g., John Smith"></label>
<label>Role <input type="text" name="role" value="{role}" placeholder="e.g., VP Operations"></label>
<label>Email <input type="email" name="email" value="{email}" placeholder="e.g., john@company.com"></label>
<label>LinkedIn <input type="text" name="linkedin" value="{linkedin}"></label>
<label>Sales Rep * <select name="sales_rep">{reps}</select></label>
<label>Course <select name="course">{courses}</select></label>
<label>Region <select name="region">{regions}</select></label>
<label>Cohort <select name="cohort_date">{cohorts}</select></label>
<label>Status <select name="status">{statuses}</select></label>
<label>Notes <input type="text" name="notes" value="{notes}" placeholder="Optional notes..."></label>
</div>
<div class="modal-actions">
<button class="btn" formaction="/invitations/form">Apply Cohort</button>
<button class="btn" formaction="/invitations/form/cancel">Cancel</button>
<button class="btn btn-primary">Add Invitation</button>
</div>
</form>
</div></div>"#,
        company = escape(&draft.company),
        name = escape(&draft.name),
        role = escape(&draft.role),
        email = escape(&draft.email),
        linkedin = escape(&draft.linkedin),
        notes = escape(&draft.notes),
        reps = rep_options(reps, "Select...", &draft.sales_rep),
        courses = course_options(courses, "Select...", &draft.course),
        regions = options(regions, &draft.region),
        cohorts = options(
            std::iter::once(("", "Select..."))
                .chain(cohort_labels.iter().map(|(d, l)| (d.as_str(), l.as_str()))),
            &draft.cohort_date
        ),
        statuses = status_options(draft.status.as_str()),
    )
}

fn delete_prompt(invitation: &Invitation) -> String {
    format!(
        r#"<div class="modal-overlay"><div class="modal">
<h2>Are you sure you want to delete this invitation?</h2>
<p>{name} ({company})</p>
<div class="modal-actions">
<form method="post" action="/invitations/delete/cancel" style="display:inline"><button class="btn">Cancel</button></form>
<form method="post" action="/invitations/{id}/delete" style="display:inline"><button class="btn btn-danger">Delete</button></form>
</div>
</div></div>"#,
        name = escape(&invitation.name),
        company = escape(&invitation.company),
        id = escape(&invitation.id),
    )
}

fn invitation_row(invitation: &Invitation, cohorts: &[Cohort]) -> String {
    let style = status_style(invitation.status);
    format!(
        r#"<tr style="background-color: {bg}">
<td class="font-medium">{company}</td><td>{name}</td><td>{rep}</td><td>{course}</td><td>{cohort}</td>
<td><span class="region-badge {region_class}">{region}</span></td>
<td><form method="post" action="/invitations/{id}/status"><select name="status" onchange="this.form.submit()" style="background-color: {bg}; color: {text}; border-color: {border}">{statuses}</select><noscript><button>Save</button></noscript></form></td>
<td><a class="btn-delete" href="/invitations/{id}/delete">🗑️</a></td>
</tr>"#,
        bg = style.bg,
        text = style.text,
        border = style.border,
        company = escape(&invitation.company),
        name = escape(&invitation.name),
        rep = escape(&invitation.sales_rep),
        course = escape(invitation.course()),
        cohort = escape(cohort_label(cohorts, invitation.cohort_date())),
        region_class = escape(&invitation.region().to_lowercase()),
        region = escape(invitation.region()),
        id = escape(&invitation.id),
        statuses = status_options(invitation.status.as_str()),
    )
}

pub fn render(session: &Session) -> String {
    let courses = session.courses();
    let cohorts = &session.collections.cohorts;
    let shown = session.filtered_invitations();

    let mut html = String::from(
        r#"<div class="add-invitation-cta"><form method="post" action="/invitations/form/open"><button class="btn btn-primary btn-large">➕ Add New Invitation</button></form></div>"#,
    );
    html.push_str(&filters_bar(session, &courses));

    if session.ui.form_open {
        html.push_str(&add_form(
            &session.ui.draft,
            &session.collections.sales_reps,
            &courses,
            cohorts,
        ));
    }
    if let Some(invitation) = session.pending_delete() {
        html.push_str(&delete_prompt(invitation));
    }

    html.push_str(
        "<div class=\"card\"><table class=\"table\"><thead><tr><th>Company</th><th>Name</th><th>Sales Rep</th>\
         <th>Course</th><th>Cohort</th><th>Region</th><th>Status</th><th>Actions</th></tr></thead><tbody>",
    );
    if shown.is_empty() {
        html.push_str(
            r#"<tr><td colspan="8" class="empty">No invitations found. Click "Add New Invitation" to get started!</td></tr>"#,
        );
    }
    for invitation in &shown {
        html.push_str(&invitation_row(invitation, cohorts));
    }
    html.push_str(&format!(
        r#"</tbody></table><div class="table-footer">Showing {} of {} invitations</div></div>"#,
        shown.len(),
        session.collections.invitations.len()
    ));
    html
}
