//! Membership export to People import CSV.
//!
//! Reads a membership export keyed by its header row and writes one import
//! row per input row with the fixed People import column set.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::transform::{
    emergency_contact, format_anniversary, format_birthdate, format_phone, household_primary_contact,
    join_authorized_pickups, map_grade, medical_notes, status_and_membership, yes_no_token,
    HouseholdAssigner,
};

/// Default export file read from the working directory.
pub const DEFAULT_INPUT: &str = "input.csv";
/// Default import file written to the working directory.
pub const DEFAULT_OUTPUT: &str = "output.csv";

/// Numbered pickup columns in the export (`Authorized Pick up 1` … `8`).
const PICKUP_COLUMNS: usize = 8;

/// Output header row, in column order.
pub const IMPORT_COLUMNS: [&str; 33] = [
    "remote_id", "First Name", "Middle Name", "Last Name",
    "Birthdate", "Anniversary", "Gender", "Grade", "Medical Notes", "Marital Status", "Status", "Membership",
    "Home Address Street Line 1", "Home Address City", "Home Address State", "Home Address Zip Code",
    "Mobile Phone Number", "Home Phone Number", "Work Phone Number",
    "Home Email", "Household ID", "Household Name", "Household Primary Contact",
    "Baptized", "Baptism Date", "Member By", "Membership Date", "Sunday School", "Small Group",
    "Emergency Contact", "Emergency Phone", "Allergies", "Authorized Pickup",
];

/// One row of the People import file; fields serialize in [`IMPORT_COLUMNS`] order.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportRow {
    #[serde(rename = "remote_id")]
    pub remote_id: String,
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Middle Name")]
    pub middle_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "Birthdate")]
    pub birthdate: String,
    #[serde(rename = "Anniversary")]
    pub anniversary: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Grade")]
    pub grade: String,
    #[serde(rename = "Medical Notes")]
    pub medical_notes: String,
    #[serde(rename = "Marital Status")]
    pub marital_status: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Membership")]
    pub membership: String,
    #[serde(rename = "Home Address Street Line 1")]
    pub street: String,
    #[serde(rename = "Home Address City")]
    pub city: String,
    #[serde(rename = "Home Address State")]
    pub state: String,
    #[serde(rename = "Home Address Zip Code")]
    pub zip: String,
    #[serde(rename = "Mobile Phone Number")]
    pub mobile_phone: String,
    #[serde(rename = "Home Phone Number")]
    pub home_phone: String,
    #[serde(rename = "Work Phone Number")]
    pub work_phone: String,
    #[serde(rename = "Home Email")]
    pub email: String,
    #[serde(rename = "Household ID")]
    pub household_id: String,
    #[serde(rename = "Household Name")]
    pub household_name: String,
    #[serde(rename = "Household Primary Contact")]
    pub household_primary_contact: String,
    #[serde(rename = "Baptized")]
    pub baptized: String,
    #[serde(rename = "Baptism Date")]
    pub baptism_date: String,
    #[serde(rename = "Member By")]
    pub member_by: String,
    #[serde(rename = "Membership Date")]
    pub membership_date: String,
    #[serde(rename = "Sunday School")]
    pub sunday_school: String,
    #[serde(rename = "Small Group")]
    pub small_group: String,
    #[serde(rename = "Emergency Contact")]
    pub emergency_contact: String,
    #[serde(rename = "Emergency Phone")]
    pub emergency_phone: String,
    #[serde(rename = "Allergies")]
    pub allergies: String,
    #[serde(rename = "Authorized Pickup")]
    pub authorized_pickup: String,
}

/// One export row, looked up by header name.
#[derive(Debug, Default)]
pub struct ExportRow {
    fields: HashMap<String, String>,
}

impl ExportRow {
    /// Pair a record's values with the header row.
    pub fn new(headers: &csv::StringRecord, record: &csv::StringRecord) -> Self {
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect();
        Self { fields }
    }

    /// Value of `column`, empty when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map_or("", String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ExportRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Build the import row for one export row.
pub fn transform_row(row: &ExportRow, remote_id: usize, household_id: String, reference_year: i32) -> ImportRow {
    let last_name = row.get("Last Name");
    let (status, membership) = status_and_membership(row.get("Member Status"));
    let pickup_columns: Vec<String> = (1..=PICKUP_COLUMNS)
        .map(|i| format!("Authorized Pick up {i}"))
        .collect();

    ImportRow {
        remote_id: remote_id.to_string(),
        first_name: row.get("First Name").to_string(),
        middle_name: row.get("Middle Name").to_string(),
        last_name: last_name.to_string(),
        birthdate: format_birthdate(row.get("Birth Month and Day"), row.get("Age"), reference_year),
        anniversary: format_anniversary(row.get("Wedding Month and Day")),
        gender: row.get("Gender").to_string(),
        grade: map_grade(row.get("School Grade")).map(|g| g.to_string()).unwrap_or_default(),
        medical_notes: medical_notes(row.get("Allergy")),
        marital_status: row.get("Marital Status").to_string(),
        status: status.to_string(),
        membership: membership.to_string(),
        street: row.get("Address").to_string(),
        city: row.get("City").to_string(),
        state: row.get("State").to_string(),
        zip: row.get("Zip Code").to_string(),
        mobile_phone: format_phone(row.get("Cell Phone")),
        home_phone: format_phone(row.get("Home Phone")),
        work_phone: format_phone(row.get("Work Phone")),
        email: row.get("E-Mail").to_string(),
        household_id,
        household_name: if last_name.is_empty() {
            String::new()
        } else {
            format!("{last_name} Household")
        },
        household_primary_contact: household_primary_contact(row.get("Relationship"), row.get("Primary Contact"))
            .to_string(),
        baptized: yes_no_token(row.get("Baptized")).to_string(),
        baptism_date: row.get("Baptized Date").to_string(),
        member_by: row.get("How Joined").to_string(),
        membership_date: row.get("Date Joined").to_string(),
        sunday_school: row.get("Sunday School").to_string(),
        small_group: row.get("Activities").to_string(),
        emergency_contact: emergency_contact(
            row.get("Emergency Contact"),
            row.get("Primary Contact"),
            row.get("Secondary Contact"),
            row.get("First Name"),
        ),
        emergency_phone: format_phone(row.get("Emergency Phone")),
        allergies: row.get("Allergy").to_string(),
        authorized_pickup: join_authorized_pickups(pickup_columns.iter().map(|c| row.get(c))),
    }
}

/// Transform an export stream into an import stream; returns rows written.
///
/// The header row is always written, even for an empty export.
pub fn transform_csv<R: Read, W: Write>(input: R, output: W, reference_year: i32) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(output);
    writer.write_record(IMPORT_COLUMNS)?;

    let headers = reader.headers()?.clone();
    let mut households = HouseholdAssigner::new();
    let mut written = 0;

    for record in reader.records() {
        let row = ExportRow::new(&headers, &record?);
        let household_id = households.assign(row.get("Last Name"));
        writer.serialize(transform_row(&row, written + 1, household_id, reference_year))?;
        written += 1;
    }

    writer.flush()?;
    Ok(written)
}

/// Transform the export at `input` into the import file at `output`.
pub fn run(input: &Path, output: &Path, reference_year: i32) -> Result<usize> {
    let reader = fs_err::File::open(input).map_err(|e| Error::io(e, input.to_path_buf()))?;
    let writer = fs_err::File::create(output).map_err(|e| Error::io(e, output.to_path_buf()))?;

    let rows = transform_csv(reader, writer, reference_year)?;
    tracing::info!("Wrote {} rows from {} to {}", rows, input.display(), output.display());
    Ok(rows)
}
