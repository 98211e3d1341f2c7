use std::path::PathBuf;

use clap::Args;
use suncycle_analysis::pipeline::{self, AnalysisConfig};

use crate::{
    data::{self, ColumnSpec},
    report,
};

const DEFAULT_INPUT: &str = "Data.xlsx";
const DEFAULT_SHEET: &str = "Data";
const DEFAULT_EXPECTED_EVENTS: usize = 26;
const DEFAULT_DATE_COLUMN: &str = "Date";
const DEFAULT_METRIC_COLUMN: &str =
    "Sunspot Count (Normalized Value 7-day Trailing Moving Average)";
const DEFAULT_START_COLUMN: &str = "Start_Flag";
const DEFAULT_END_COLUMN: &str = "End_Flag";

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeArg {
    /// Path to the input spreadsheet (.xlsx) or CSV file
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Worksheet name (xlsx input only)
    #[arg(long, default_value = DEFAULT_SHEET)]
    pub sheet: String,

    /// Expected number of start and end markers; mismatches warn but do not
    /// abort the run
    #[arg(long, default_value_t = DEFAULT_EXPECTED_EVENTS)]
    pub expected_events: usize,

    /// Header of the date column
    #[arg(long, default_value = DEFAULT_DATE_COLUMN)]
    pub date_column: String,

    /// Header of the sunspot metric column
    #[arg(long, default_value = DEFAULT_METRIC_COLUMN)]
    pub metric_column: String,

    /// Header of the event start flag column
    #[arg(long, default_value = DEFAULT_START_COLUMN)]
    pub start_column: String,

    /// Header of the event end flag column
    #[arg(long, default_value = DEFAULT_END_COLUMN)]
    pub end_column: String,
}

impl Default for AnalyzeArg {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.into(),
            sheet: DEFAULT_SHEET.into(),
            expected_events: DEFAULT_EXPECTED_EVENTS,
            date_column: DEFAULT_DATE_COLUMN.into(),
            metric_column: DEFAULT_METRIC_COLUMN.into(),
            start_column: DEFAULT_START_COLUMN.into(),
            end_column: DEFAULT_END_COLUMN.into(),
        }
    }
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let columns = ColumnSpec {
        date: arg.date_column.clone(),
        metric: arg.metric_column.clone(),
        start: arg.start_column.clone(),
        end: arg.end_column.clone(),
    };
    eprintln!("Loading observations from {}...", arg.input.display());
    let table = data::load_table(&arg.input, &arg.sheet, &columns)?;
    eprintln!("Loaded {} observations", table.len());

    let config = AnalysisConfig {
        expected_events: Some(arg.expected_events),
    };
    let analysis = pipeline::run(&table, &config)?;

    for diagnostic in &analysis.diagnostics {
        eprintln!("warning: {diagnostic}");
    }
    report::print(&analysis);
    Ok(())
}
