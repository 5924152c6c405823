// Closed set of project categories cross-tabulated in the annex table.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AnnexCategory {
    #[serde(rename = "EFET")]
    Efet,
    #[serde(rename = "MSPA")]
    Mspa,
}

impl AnnexCategory {
    pub const ALL: [AnnexCategory; 2] = [AnnexCategory::Efet, AnnexCategory::Mspa];

    /// Project code the category is stored under.
    pub fn tag(&self) -> &'static str {
        match self {
            AnnexCategory::Efet => "EFET",
            AnnexCategory::Mspa => "MSPA",
        }
    }
}
