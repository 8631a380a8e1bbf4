use crate::constants::tokens::MISSING_CONTACT;

/// Names in a comma-separated pickup list, with blank entries dropped.
pub fn split_pickup_names(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

/// `name;email;phone`, with `0` standing in for whatever enrichment did not find.
pub fn format_pickup_member(name: &str, email: Option<&str>, phone: Option<&str>) -> String {
    format!(
        "{};{};{}",
        name,
        email.unwrap_or(MISSING_CONTACT),
        phone.unwrap_or(MISSING_CONTACT)
    )
}

/// Join enriched members with `|`.
///
/// The result always contains a `|`; a single member gets a trailing one.
pub fn join_pickup_members(members: &[String]) -> String {
    let mut joined = members.join("|");
    if !joined.contains('|') {
        joined.push('|');
    }
    joined
}

/// Join the non-empty numbered pickup columns of an import row with `|`.
pub fn join_authorized_pickups<'a>(columns: impl IntoIterator<Item = &'a str>) -> String {
    columns
        .into_iter()
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join("|")
}
