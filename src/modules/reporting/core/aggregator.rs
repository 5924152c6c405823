// Hierarchical aggregation of logged time for one client over a time window.
//
// Purpose
// - Discover departments and projects, then sum elapsed time per project, per department,
//   per client, and per (project, counterparty) for the annex categories.
//
// Responsibilities
// - Keep every group vector in discovery order, whatever the fan-out.
// - Abort on the first failing group. Partial reports are never returned.
// - Fold empty groups into zero totals.
//
// Notes
// - Department discovery is filtered by client only. A department with activity outside the
//   window still appears, with no entries and a zero total.
// - Every report re-reads the store. Concurrent writes may skew totals across groups.

use std::future::Future;
use std::sync::Arc;

use futures::{StreamExt, TryStreamExt, stream};
use tracing::debug;

use crate::modules::reporting::core::annex::AnnexCategory;
use crate::modules::reporting::core::report::{
    AnnexReport, AnnexRow, DepartmentGroup, DepartmentProjectReport, DepartmentProjects,
    DepartmentReport, FlatReport, ProjectGroup,
};
use crate::shared::core::duration::{DurationError, DurationTotal};
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::time_entry_store::{
    CounterpartySum, DistinctOrder, EntryField, EntryFilter, EntryOrder, TimeEntryStore, TimeWindow,
};

pub struct ReportAggregator {
    store: Arc<dyn TimeEntryStore>,
    concurrency: usize,
}

fn annex_row(sum: CounterpartySum) -> Result<AnnexRow, DurationError> {
    Ok(AnnexRow {
        total: DurationTotal::new(sum.seconds)?,
        project: sum.project,
        counterparty: sum.counterparty,
    })
}

impl ReportAggregator {
    /// `concurrency` bounds how many groups are queried at once. `1` queries them one by one.
    pub fn new(store: Arc<dyn TimeEntryStore>, concurrency: usize) -> Self {
        Self {
            store,
            concurrency: concurrency.max(1),
        }
    }

    async fn in_discovery_order<T, R, F, Fut>(
        &self,
        groups: Vec<T>,
        compute: F,
    ) -> Result<Vec<R>, ApplicationError>
    where
        F: FnMut(T) -> Fut,
        Fut: Future<Output = Result<R, ApplicationError>>,
    {
        stream::iter(groups)
            .map(compute)
            .buffered(self.concurrency)
            .try_collect()
            .await
    }

    async fn total(&self, filter: &EntryFilter) -> Result<DurationTotal, ApplicationError> {
        let sum = self.store.sum_duration(filter).await?;
        Ok(DurationTotal::from_sum(sum)?)
    }

    async fn discover_departments(&self, client: &str) -> Result<Vec<String>, ApplicationError> {
        Ok(self
            .store
            .list_distinct(
                EntryField::Department,
                &EntryFilter::client(client),
                DistinctOrder::FirstSeen,
            )
            .await?)
    }

    pub async fn compute_flat(
        &self,
        client: &str,
        window: TimeWindow,
    ) -> Result<FlatReport, ApplicationError> {
        debug!(client, ?window, "computing flat report");
        let filter = EntryFilter::client(client).within(window);
        let entries = self
            .store
            .list_by_filter(&filter, EntryOrder::StartTimeAsc)
            .await?;
        let total = self.total(&filter).await?;
        Ok(FlatReport { entries, total })
    }

    pub async fn compute_by_department(
        &self,
        client: &str,
        window: TimeWindow,
    ) -> Result<DepartmentReport, ApplicationError> {
        debug!(client, ?window, "computing department report");
        let departments = self.discover_departments(client).await?;
        let departments = self
            .in_discovery_order(departments, |department| async move {
                let filter = EntryFilter::client(client)
                    .department(department.clone())
                    .within(window);
                let entries = self
                    .store
                    .list_by_filter(&filter, EntryOrder::StartTimeAsc)
                    .await?;
                let total = self.total(&filter).await?;
                Ok::<_, ApplicationError>(DepartmentGroup {
                    department,
                    entries,
                    total,
                })
            })
            .await?;
        let total = self.total(&EntryFilter::client(client).within(window)).await?;
        Ok(DepartmentReport { departments, total })
    }

    pub async fn compute_by_department_and_project(
        &self,
        client: &str,
        window: TimeWindow,
    ) -> Result<DepartmentProjectReport, ApplicationError> {
        debug!(client, ?window, "computing department and project report");
        let departments = self.discover_departments(client).await?;
        let departments = self
            .in_discovery_order(departments, |department| async move {
                let department_filter = EntryFilter::client(client)
                    .department(department.clone())
                    .within(window);
                let projects = self
                    .store
                    .list_distinct(
                        EntryField::Project,
                        &department_filter,
                        DistinctOrder::Ascending,
                    )
                    .await?;
                let projects = self
                    .in_discovery_order(projects, |project| {
                        let filter = department_filter.clone().project(project.clone());
                        async move {
                            let entries = self
                                .store
                                .list_by_filter(&filter, EntryOrder::CounterpartyThenStartTime)
                                .await?;
                            let total = self.total(&filter).await?;
                            Ok::<_, ApplicationError>(ProjectGroup {
                                project,
                                entries,
                                total,
                            })
                        }
                    })
                    .await?;
                let total = self.total(&department_filter).await?;
                Ok::<_, ApplicationError>(DepartmentProjects {
                    department,
                    projects,
                    total,
                })
            })
            .await?;
        let total = self.total(&EntryFilter::client(client).within(window)).await?;
        Ok(DepartmentProjectReport { departments, total })
    }

    pub async fn compute_annex(
        &self,
        client: &str,
        window: TimeWindow,
    ) -> Result<AnnexReport, ApplicationError> {
        debug!(client, ?window, "computing annex table");
        let categories = self
            .in_discovery_order(AnnexCategory::ALL.to_vec(), |category| async move {
                let filter = EntryFilter::client(client)
                    .project(category.tag())
                    .within(window);
                let rows = self
                    .store
                    .sum_duration_by_counterparty(&filter)
                    .await?
                    .into_iter()
                    .map(annex_row)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok::<_, ApplicationError>((category, rows))
            })
            .await?;
        Ok(AnnexReport { categories })
    }
}
