// src/client/department.rs

/// Department codes offered at intake, with their display labels.
pub const DEPARTMENTS: &[(&str, &str)] = &[
    ("HR", "Human Resources"),
    ("IT", "Information Technology"),
    ("FIN", "Finance"),
    ("OPS", "Operations"),
    ("LEG", "Legal"),
];

/// Visit purposes offered at intake.
pub const PURPOSES: &[&str] = &[
    "Consultation",
    "Billing",
    "Meeting",
    "Delivery",
    "Complaint",
    "Other",
];

/// Canonical form of a department code. Intake and the dashboards both go
/// through here, so filtering matches no matter how the code was typed.
pub fn canonical_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Display label for a department code. Unknown codes label as themselves.
pub fn department_label(code: &str) -> String {
    DEPARTMENTS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| code.to_string())
}
