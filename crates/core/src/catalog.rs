//! Well-known status and category values.
//!
//! Status and category columns are free text. These sets are the values the
//! admin UI and the list pages know how to label, and the source of the
//! column defaults applied on insert.

// ---------------------------------------------------------------------------
// Project status
// ---------------------------------------------------------------------------

pub const PROJECT_STATUS_PLANNING: &str = "planning";
pub const PROJECT_STATUS_IN_PROGRESS: &str = "in_progress";
pub const PROJECT_STATUS_COMPLETED: &str = "completed";
pub const PROJECT_STATUS_ON_HOLD: &str = "on_hold";

pub const PROJECT_STATUSES: &[&str] = &[
    PROJECT_STATUS_PLANNING,
    PROJECT_STATUS_IN_PROGRESS,
    PROJECT_STATUS_COMPLETED,
    PROJECT_STATUS_ON_HOLD,
];

/// Status assigned to a project created without one.
pub const DEFAULT_PROJECT_STATUS: &str = PROJECT_STATUS_PLANNING;

// ---------------------------------------------------------------------------
// Favour category
// ---------------------------------------------------------------------------

pub const FAVOUR_CATEGORY_DESIGN: &str = "design";
pub const FAVOUR_CATEGORY_PROGRAMMING: &str = "programming";
pub const FAVOUR_CATEGORY_MARKETING: &str = "marketing";
pub const FAVOUR_CATEGORY_PROMOTION: &str = "promotion";

pub const FAVOUR_CATEGORIES: &[&str] = &[
    FAVOUR_CATEGORY_DESIGN,
    FAVOUR_CATEGORY_PROGRAMMING,
    FAVOUR_CATEGORY_MARKETING,
    FAVOUR_CATEGORY_PROMOTION,
];

// ---------------------------------------------------------------------------
// Project-service (assignment) status
// ---------------------------------------------------------------------------

pub const ASSIGNMENT_STATUS_IN_PROGRESS: &str = "in_progress";
pub const ASSIGNMENT_STATUS_APPROVAL: &str = "approval";
pub const ASSIGNMENT_STATUS_REVIEW: &str = "review";
pub const ASSIGNMENT_STATUS_REVISION: &str = "revision";
pub const ASSIGNMENT_STATUS_COMPLETED: &str = "completed";

pub const ASSIGNMENT_STATUSES: &[&str] = &[
    ASSIGNMENT_STATUS_IN_PROGRESS,
    ASSIGNMENT_STATUS_APPROVAL,
    ASSIGNMENT_STATUS_REVIEW,
    ASSIGNMENT_STATUS_REVISION,
    ASSIGNMENT_STATUS_COMPLETED,
];

/// Status assigned to a project service created without one.
pub const DEFAULT_ASSIGNMENT_STATUS: &str = ASSIGNMENT_STATUS_IN_PROGRESS;

/// Human-readable label for a project status, falling back to the raw value
/// for free-text statuses outside the known set.
pub fn project_status_label(status: &str) -> &str {
    match status {
        PROJECT_STATUS_PLANNING => "Planning",
        PROJECT_STATUS_IN_PROGRESS => "In progress",
        PROJECT_STATUS_COMPLETED => "Completed",
        PROJECT_STATUS_ON_HOLD => "On hold",
        other => other,
    }
}

/// Whether `status` is one of the historical project statuses.
pub fn is_known_project_status(status: &str) -> bool {
    PROJECT_STATUSES.contains(&status)
}
