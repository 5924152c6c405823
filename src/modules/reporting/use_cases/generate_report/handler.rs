// Report use case: resolve the request window, aggregate, then assemble the payload.
//
// The raw `DepartmentReport` is exposed as well, for adapters that need department names
// next to the totals.

use std::sync::Arc;

use tracing::error;

use crate::modules::reporting::core::aggregator::ReportAggregator;
use crate::modules::reporting::core::assembler::{
    AnnexReportResponse, DepartmentProjectReportResponse, DepartmentReportResponse,
    FlatReportResponse, ReportAssembler,
};
use crate::modules::reporting::core::report::{DepartmentReport, FlatReport};
use crate::modules::reporting::core::request::ReportRequest;
use crate::shared::core::errors::ApplicationError;

pub struct GenerateReportHandler {
    aggregator: Arc<ReportAggregator>,
    assembler: Arc<ReportAssembler>,
}

fn logged<T>(
    kind: &'static str,
    request: &ReportRequest,
    result: Result<T, ApplicationError>,
) -> Result<T, ApplicationError> {
    result.inspect_err(|e| error!(error = %e, kind, client = %request.client, "report failed"))
}

impl GenerateReportHandler {
    pub fn new(aggregator: Arc<ReportAggregator>, assembler: Arc<ReportAssembler>) -> Self {
        Self {
            aggregator,
            assembler,
        }
    }

    pub fn assembler(&self) -> &ReportAssembler {
        &self.assembler
    }

    pub async fn flat_report(&self, request: &ReportRequest) -> Result<FlatReport, ApplicationError> {
        let window = request.window()?;
        logged("flat", request, self.aggregator.compute_flat(&request.client, window).await)
    }

    pub async fn department_report(
        &self,
        request: &ReportRequest,
    ) -> Result<DepartmentReport, ApplicationError> {
        let window = request.window()?;
        logged(
            "department",
            request,
            self.aggregator
                .compute_by_department(&request.client, window)
                .await,
        )
    }

    pub async fn flat(&self, request: &ReportRequest) -> Result<FlatReportResponse, ApplicationError> {
        let report = self.flat_report(request).await?;
        Ok(self.assembler.flat(report)?)
    }

    pub async fn by_department(
        &self,
        request: &ReportRequest,
    ) -> Result<DepartmentReportResponse, ApplicationError> {
        let report = self.department_report(request).await?;
        Ok(self.assembler.by_department(&request.client, report)?)
    }

    pub async fn by_department_and_project(
        &self,
        request: &ReportRequest,
    ) -> Result<DepartmentProjectReportResponse, ApplicationError> {
        let window = request.window()?;
        let report = logged(
            "department_project",
            request,
            self.aggregator
                .compute_by_department_and_project(&request.client, window)
                .await,
        )?;
        Ok(self
            .assembler
            .by_department_and_project(&request.client, report)?)
    }

    pub async fn annex(&self, request: &ReportRequest) -> Result<AnnexReportResponse, ApplicationError> {
        let window = request.window()?;
        let report = logged(
            "annex",
            request,
            self.aggregator.compute_annex(&request.client, window).await,
        )?;
        Ok(self.assembler.annex(request, report))
    }
}
