//! Request-side validation for resume payloads. Runs before persistence and
//! scoring so the scorer never sees a document missing its required fields.

use crate::errors::AtsError;
use crate::models::resume::NewResume;

const TITLE_MAX: usize = 100;
const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;

/// Validates the user-editable payload, collecting every failure into one
/// `Validation` error (`"field: why"` segments joined with `", "`).
pub fn validate_resume(payload: &NewResume) -> Result<(), AtsError> {
    let mut details = Vec::new();

    let title = payload.title.trim();
    if title.is_empty() || title.chars().count() > TITLE_MAX {
        details.push(format!(
            "title: Title is required and must be less than {TITLE_MAX} characters"
        ));
    }

    let name = payload.personal_info.full_name.trim();
    let name_len = name.chars().count();
    if name_len < NAME_MIN || name_len > NAME_MAX {
        details.push(format!(
            "personalInfo.fullName: Full name is required and must be between {NAME_MIN} and {NAME_MAX} characters"
        ));
    }

    if !is_well_formed_email(payload.personal_info.email.trim()) {
        details.push("personalInfo.email: Please provide a valid email".to_string());
    }

    if details.is_empty() {
        Ok(())
    } else {
        Err(AtsError::Validation(details.join(", ")))
    }
}

/// Structural email check: one `@`, non-empty local part, domain with a dot
/// and non-empty labels. Not an RFC 5322 parser.
fn is_well_formed_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}
