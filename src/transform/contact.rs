use crate::constants::tokens;

/// Format a phone number as `(XXX) XXX-XXXX` when it holds exactly ten digits.
///
/// Anything else comes back unchanged, so formatting its own output is a no-op.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        phone.to_string()
    }
}

/// `yes` → `TRUE`, `no` → `FALSE` (any case); anything else → empty.
pub fn yes_no_token(value: &str) -> &'static str {
    match value.to_lowercase().as_str() {
        "yes" => tokens::TRUE,
        "no" => tokens::FALSE,
        _ => "",
    }
}

/// `(status, membership)` for a member-status answer.
///
/// Empty or `no` means an inactive non-member.
pub fn status_and_membership(member_status: &str) -> (&'static str, &'static str) {
    if member_status.is_empty() || member_status.eq_ignore_ascii_case("no") {
        ("Inactive", "")
    } else {
        ("Active", "Member")
    }
}

/// Lowercased allergy text, with a bare `no` treated as nothing to note.
pub fn medical_notes(allergy: &str) -> String {
    let notes = allergy.to_lowercase();
    if notes == "no" {
        String::new()
    } else {
        notes
    }
}

/// `TRUE` for the head of household or a row flagged as primary contact.
pub fn household_primary_contact(relationship: &str, primary_contact: &str) -> &'static str {
    if relationship == "Head of Household" || primary_contact.eq_ignore_ascii_case("yes") {
        tokens::TRUE
    } else {
        ""
    }
}

/// Pick an emergency contact for a person.
///
/// An explicit contact wins. Otherwise the primary contact is used unless its
/// first name is the person's own, in which case the secondary contact is.
pub fn emergency_contact(explicit: &str, primary: &str, secondary: &str, first_name: &str) -> String {
    if !explicit.is_empty() {
        return explicit.to_string();
    }
    if primary.is_empty() {
        return secondary.to_string();
    }

    let primary_first = primary
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();
    if primary_first == first_name.to_lowercase() {
        secondary.to_string()
    } else {
        primary.to_string()
    }
}
