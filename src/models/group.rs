//! Group contact information types.

use serde::{Deserialize, Serialize};

/// A titled external link shown on the group info view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoLink {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// Static information card for the group: headline facts, contacts and
/// useful links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInfo {
    /// Group identifier, e.g. "ИКБО-31-25".
    pub name: String,
    pub course: String,
    pub faculty: String,
    /// Headcount of the group.
    pub students: u32,
    pub curator: String,
    pub contacts: Vec<InfoLink>,
    pub links: Vec<InfoLink>,
}
