//! Report output port trait.

use std::path::Path;

use crate::domain::error::ForesightError;
use crate::domain::series::NamedSeries;

/// Title and axis labels for a rendered chart. Rendering itself is external;
/// adapters only need to persist the data alongside these labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
}

pub trait ReportPort {
    fn write_chart(
        &self,
        spec: &ChartSpec,
        series: &[NamedSeries],
        output_path: &Path,
    ) -> Result<(), ForesightError>;
}
