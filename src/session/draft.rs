use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::models::{
    cohort::Cohort,
    invitation::{CreateInvitation, InvitationStatus},
};

pub const MISSING_REQUIRED: &str = "Please fill in Company, Name, and Sales Rep";
pub const UNKNOWN_REGION: &str = "Region must be EMEA or NAMER";

/// Contents of the add-invitation form. Survives cancel; reset after a
/// successful insert.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Validate)]
pub struct InvitationDraft {
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator::validate_not_blank"))]
    pub company: String,
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator::validate_not_blank"))]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator::validate_not_blank"))]
    pub sales_rep: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator::validate_region"))]
    pub region: String,
    #[serde(default)]
    pub cohort_date: String,
    #[serde(default)]
    pub status: InvitationStatus,
    #[serde(default)]
    pub notes: String,
    // ! never posted by the form, carried across edits by the reducer
    #[serde(skip)]
    pub autofill: Autofill,
}

/// Course and region values written by the last cohort selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Autofill {
    pub course: Option<String>,
    pub region: Option<String>,
}

/// Take the cohort's value unless the user picked something of their own.
fn fill_from_cohort(field: &mut String, filled: &mut Option<String>, value: &str) {
    let user_set = !field.is_empty() && filled.as_deref() != Some(field.as_str());
    if user_set {
        return;
    }
    *field = value.to_string();
    *filled = Some(value.to_string());
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl InvitationDraft {
    /// Fill course and region from the picked cohort. Values the user chose
    /// are kept; values an earlier cohort filled in are replaced.
    pub fn apply_cohort(&mut self, cohort: Option<&Cohort>) {
        let Some(cohort) = cohort else {
            return;
        };
        fill_from_cohort(&mut self.course, &mut self.autofill.course, &cohort.course);
        fill_from_cohort(&mut self.region, &mut self.autofill.region, &cohort.region);
    }

    pub fn into_create(self, created_at: String) -> CreateInvitation {
        CreateInvitation {
            company: self.company.trim().to_string(),
            name: self.name.trim().to_string(),
            role: non_empty(self.role),
            email: non_empty(self.email),
            linkedin: non_empty(self.linkedin),
            sales_rep: self.sales_rep.trim().to_string(),
            course: non_empty(self.course),
            region: non_empty(self.region),
            cohort_date: non_empty(self.cohort_date),
            status: self.status,
            notes: non_empty(self.notes),
            created_at,
        }
    }
}

/// The notice shown for a draft that failed validation.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    let mut messages = Vec::new();
    if ["company", "name", "sales_rep"]
        .iter()
        .any(|field| fields.contains_key(*field))
    {
        messages.push(MISSING_REQUIRED);
    }
    if fields.contains_key("region") {
        messages.push(UNKNOWN_REGION);
    }
    messages.join(". ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> InvitationDraft {
        InvitationDraft {
            company: "Acme".into(),
            name: "Ada Lovelace".into(),
            sales_rep: "Jane".into(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_name_fails_validation() {
        let draft = InvitationDraft {
            name: String::new(),
            ..filled()
        };
        let errors = draft.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert_eq!(validation_message(&errors), MISSING_REQUIRED);
    }

    #[test]
    fn complete_draft_passes() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn bad_region_has_its_own_message() {
        let draft = InvitationDraft {
            region: "APAC".into(),
            ..filled()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(validation_message(&errors), UNKNOWN_REGION);
    }

    fn cohort(course: &str, region: &str, date: &str) -> Cohort {
        Cohort {
            id: date.into(),
            name: format!("{course} {region}"),
            course: course.into(),
            region: region.into(),
            date: date.into(),
            seats: 10,
        }
    }

    #[test]
    fn cohort_only_fills_unset_fields() {
        let leadership = cohort("LEAD", "NAMER", "2026-03-01");

        let mut draft = filled();
        draft.apply_cohort(Some(&leadership));
        assert_eq!((draft.course.as_str(), draft.region.as_str()), ("LEAD", "NAMER"));

        let mut draft = InvitationDraft {
            region: "EMEA".into(),
            ..filled()
        };
        draft.apply_cohort(Some(&leadership));
        assert_eq!((draft.course.as_str(), draft.region.as_str()), ("LEAD", "EMEA"));

        let mut draft = filled();
        draft.apply_cohort(None);
        assert!(draft.course.is_empty());
    }

    #[test]
    fn switching_cohorts_replaces_filled_values() {
        let mut draft = filled();
        draft.apply_cohort(Some(&cohort("LEAD", "EMEA", "2099-01-01")));
        draft.apply_cohort(Some(&cohort("SALES", "NAMER", "2099-02-01")));
        assert_eq!((draft.course.as_str(), draft.region.as_str()), ("SALES", "NAMER"));

        // a course picked by hand after the fill stays
        draft.course = "OPS".into();
        draft.apply_cohort(Some(&cohort("LEAD", "EMEA", "2099-03-01")));
        assert_eq!((draft.course.as_str(), draft.region.as_str()), ("OPS", "EMEA"));
    }

    #[test]
    fn required_fields_are_stored_trimmed() {
        let create = InvitationDraft {
            company: " Acme ".into(),
            sales_rep: " Jane".into(),
            ..filled()
        }
        .into_create("2026-01-01T00:00:00Z".into());

        assert_eq!(create.company, "Acme");
        assert_eq!(create.sales_rep, "Jane");
    }

    #[test]
    fn blank_optionals_become_none() {
        let create = InvitationDraft {
            role: "  ".into(),
            email: "ada@acme.test".into(),
            ..filled()
        }
        .into_create("2026-01-01T00:00:00Z".into());

        assert_eq!(create.role, None);
        assert_eq!(create.email.as_deref(), Some("ada@acme.test"));
        assert_eq!(create.cohort_date, None);
        assert_eq!(create.status, InvitationStatus::ToBeContacted);
    }
}
