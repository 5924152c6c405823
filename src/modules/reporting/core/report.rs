// Aggregated report data, before presentation.
//
// Group vectors keep the order in which the aggregator discovered the groups.

use crate::modules::reporting::core::annex::AnnexCategory;
use crate::modules::time_entries::core::entry::TimeEntry;
use crate::shared::core::duration::DurationTotal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatReport {
    pub entries: Vec<TimeEntry>,
    pub total: DurationTotal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentGroup {
    pub department: String,
    pub entries: Vec<TimeEntry>,
    pub total: DurationTotal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentReport {
    pub departments: Vec<DepartmentGroup>,
    pub total: DurationTotal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectGroup {
    pub project: String,
    pub entries: Vec<TimeEntry>,
    pub total: DurationTotal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentProjects {
    pub department: String,
    pub projects: Vec<ProjectGroup>,
    /// Direct filtered sum over the department, not a re-aggregation of `projects`.
    pub total: DurationTotal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentProjectReport {
    pub departments: Vec<DepartmentProjects>,
    pub total: DurationTotal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnexRow {
    pub project: String,
    pub counterparty: Option<String>,
    pub total: DurationTotal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnexReport {
    pub categories: Vec<(AnnexCategory, Vec<AnnexRow>)>,
}
