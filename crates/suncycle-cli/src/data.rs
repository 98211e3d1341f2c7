//! Input table loading from xlsx and CSV sources.
//!
//! Column resolution is by header text; the loader is strict about the
//! required columns and about unparsable cells (each error names the sheet
//! row that triggered it) but treats empty metric cells as missing data.

use std::{fs::File, io::Read, path::Path};

use anyhow::{Context, anyhow, bail};
use calamine::{Data, DataType, Reader};
use chrono::NaiveDate;
use suncycle_analysis::table::{Observation, Table};

/// Header names of the four required columns.
#[derive(Debug, Clone)]
pub(crate) struct ColumnSpec {
    pub date: String,
    pub metric: String,
    pub start: String,
    pub end: String,
}

/// Resolved zero-based positions of the required columns in a header row.
struct ColumnIndices {
    date: usize,
    metric: usize,
    start: usize,
    end: usize,
}

impl ColumnIndices {
    fn resolve<'a, I>(headers: I, columns: &ColumnSpec) -> anyhow::Result<Self>
    where
        I: Iterator<Item = Option<&'a str>> + Clone,
    {
        let position = |name: &str| {
            headers
                .clone()
                .position(|header| header == Some(name))
                .ok_or_else(|| anyhow!("required column '{name}' not found"))
        };
        Ok(Self {
            date: position(&columns.date)?,
            metric: position(&columns.metric)?,
            start: position(&columns.start)?,
            end: position(&columns.end)?,
        })
    }
}

/// Loads the observation table from `path`, dispatching on the extension:
/// `.csv` is read as CSV, anything else is opened as a spreadsheet and
/// `sheet` is read from it.
pub(crate) fn load_table(path: &Path, sheet: &str, columns: &ColumnSpec) -> anyhow::Result<Table> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        read_csv_table(file, columns)
            .with_context(|| format!("failed to load {}", path.display()))
    } else {
        load_spreadsheet(path, sheet, columns)
            .with_context(|| format!("failed to load {}", path.display()))
    }
}

fn load_spreadsheet(path: &Path, sheet: &str, columns: &ColumnSpec) -> anyhow::Result<Table> {
    let mut workbook = calamine::open_workbook_auto(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let range = workbook
        .worksheet_range(sheet)
        .with_context(|| format!("worksheet '{sheet}' not found"))?;

    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| anyhow!("worksheet is empty"))?;
    let indices = ColumnIndices::resolve(header.iter().map(Data::get_string), columns)?;

    let observations = rows
        .enumerate()
        .map(|(i, row)| {
            // Sheet row number: 1-based, after the header row.
            let row_num = i + 2;
            Ok(Observation {
                date: parse_date_cell(&row[indices.date])
                    .with_context(|| format!("row {row_num}: bad date"))?,
                metric: parse_metric_cell(&row[indices.metric])
                    .with_context(|| format!("row {row_num}: bad metric value"))?,
                start_flag: parse_flag_cell(&row[indices.start])
                    .with_context(|| format!("row {row_num}: bad start flag"))?,
                end_flag: parse_flag_cell(&row[indices.end])
                    .with_context(|| format!("row {row_num}: bad end flag"))?,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(Table::new(observations)?)
}

/// Reads the table from CSV bytes. Factored out of [`load_table`] so tests
/// can feed in-memory input.
pub(crate) fn read_csv_table<R: Read>(reader: R, columns: &ColumnSpec) -> anyhow::Result<Table> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers().context("failed to read CSV header")?;
    let indices = ColumnIndices::resolve(headers.iter().map(Some), columns)?;

    let mut observations = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let row_num = i + 2;
        let record = record.with_context(|| format!("row {row_num}: malformed CSV record"))?;
        let field = |idx: usize| {
            record
                .get(idx)
                .ok_or_else(|| anyhow!("row {row_num}: record is too short"))
        };
        observations.push(Observation {
            date: parse_date_str(field(indices.date)?)
                .with_context(|| format!("row {row_num}: bad date"))?,
            metric: parse_metric_str(field(indices.metric)?)
                .with_context(|| format!("row {row_num}: bad metric value"))?,
            start_flag: parse_flag_str(field(indices.start)?)
                .with_context(|| format!("row {row_num}: bad start flag"))?,
            end_flag: parse_flag_str(field(indices.end)?)
                .with_context(|| format!("row {row_num}: bad end flag"))?,
        });
    }

    Ok(Table::new(observations)?)
}

fn parse_date_cell(cell: &Data) -> anyhow::Result<NaiveDate> {
    if let Some(date) = cell.as_date() {
        return Ok(date);
    }
    if let Some(s) = cell.get_string() {
        return parse_date_str(s);
    }
    bail!("cannot interpret cell {cell:?} as a date")
}

fn parse_metric_cell(cell: &Data) -> anyhow::Result<Option<f64>> {
    if cell.is_empty() {
        return Ok(None);
    }
    if let Some(value) = cell.as_f64() {
        return Ok(nan_as_missing(value));
    }
    if let Some(s) = cell.get_string() {
        return parse_metric_str(s);
    }
    bail!("cannot interpret cell {cell:?} as a number")
}

fn parse_flag_cell(cell: &Data) -> anyhow::Result<bool> {
    if cell.is_empty() {
        return Ok(false);
    }
    if let Some(b) = cell.get_bool() {
        return Ok(b);
    }
    if let Some(value) = cell.as_f64() {
        return Ok(value != 0.0);
    }
    if let Some(s) = cell.get_string() {
        return parse_flag_str(s);
    }
    bail!("cannot interpret cell {cell:?} as a flag")
}

fn parse_date_str(s: &str) -> anyhow::Result<NaiveDate> {
    let s = s.trim();
    // Accept bare dates and datetime strings from spreadsheet exports.
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .with_context(|| format!("cannot parse '{s}' as a date"))
}

fn parse_metric_str(s: &str) -> anyhow::Result<Option<f64>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    let value: f64 = s
        .parse()
        .with_context(|| format!("cannot parse '{s}' as a number"))?;
    Ok(nan_as_missing(value))
}

fn parse_flag_str(s: &str) -> anyhow::Result<bool> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(false);
    }
    let value: f64 = s
        .parse()
        .with_context(|| format!("cannot parse '{s}' as a flag"))?;
    Ok(value != 0.0)
}

/// The pipeline models missing data as `None`; a NaN from the source means
/// the same thing.
fn nan_as_missing(value: f64) -> Option<f64> {
    if value.is_nan() { None } else { Some(value) }
}
