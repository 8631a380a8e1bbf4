//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Planning Center API constants.
pub mod api {
    /// Default base URL of the People API.
    pub const PEOPLE_BASE_URL: &str = "https://api.planningcenteronline.com/people/v2";

    /// Default base URL of the Publishing API.
    pub const PUBLISHING_BASE_URL: &str = "https://api.planningcenteronline.com/publishing/v2";

    /// Largest page size the API accepts.
    pub const MAX_PER_PAGE: u32 = 100;

    /// Fixed pause after every paginated request and every mutation, in milliseconds.
    /// Keeps a run under roughly five requests per second.
    pub const REQUEST_DELAY_MS: u64 = 200;
}

/// Field definitions used by the bundled jobs.
pub mod fields {
    /// Free-text list of people allowed to pick up a child.
    pub const AUTHORIZED_PICKUPS: &str = "Authorized Pickups";

    /// Enriched `name;email;phone|...` version of [`AUTHORIZED_PICKUPS`].
    pub const AUTHORIZED_PICKUPS_PARSED: &str = "Authorized Pickups Parsed";
}

/// Fixed tokens written by transforms.
pub mod tokens {
    /// Written for a "yes" answer.
    pub const TRUE: &str = "TRUE";

    /// Written for a "no" answer.
    pub const FALSE: &str = "FALSE";

    /// Stands in for an email or phone that enrichment could not find.
    pub const MISSING_CONTACT: &str = "0";

    /// Household id given to every row without a last name.
    pub const NO_HOUSEHOLD: &str = "1";

    /// Year used when a date carries no year of its own.
    pub const PLACEHOLDER_YEAR: i32 = 1885;
}

/// Confirmation gate constants.
pub mod confirm {
    /// The only answer that lets a destructive job proceed.
    pub const CONFIRMATION: &str = "yes";
}
