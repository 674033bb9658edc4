//! Option vocabularies offered by the contact and contribute forms.
//!
//! The remote columns are free text; these lists only drive what the forms
//! suggest.

/// Service types a prospective client can pick on the contact form.
pub const PROJECT_TYPES: &[&str] = &[
    "UI/UX Design",
    "Full-Stack Development",
    "Database Engineering",
    "Technical Consulting",
    "Maintenance & Scaling",
    "Complete Product",
    "Other",
];

/// Budget ranges on the contact form, as stored (value, label).
pub const BUDGET_RANGES: &[(&str, &str)] = &[
    ("< $5,000", "Less than $5,000"),
    ("$5,000 - $10,000", "$5,000 - $10,000"),
    ("$10,000 - $25,000", "$10,000 - $25,000"),
    ("$25,000 - $50,000", "$25,000 - $50,000"),
    ("$50,000+", "$50,000+"),
];

/// Expertise areas on the contribute form.
pub const EXPERTISE_AREAS: &[&str] = &[
    "Full-Stack Development",
    "Frontend Development",
    "Backend Development",
    "UI/UX Design",
    "DevOps",
    "Database Architecture",
    "Other",
];

/// Whether `value` is one of the stored budget range values.
#[must_use]
pub fn is_known_budget_range(value: &str) -> bool {
    BUDGET_RANGES.iter().any(|(stored, _)| *stored == value)
}
