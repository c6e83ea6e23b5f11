use std::io::Read;

use chrono::NaiveDate;
use csv::StringRecord;
use thiserror::Error;

use crate::domain::attributes::AttributeProfile;
use crate::domain::transaction::{CostCategory, TransactionRecord};

#[derive(Error, Debug)]
pub enum TableImportError {
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("column '{0}' is missing in the data file")]
    MissingColumn(&'static str),
    #[error("row {row}: invalid date '{value}'")]
    InvalidDate { row: usize, value: String },
    #[error("row {row}: invalid number '{value}' in column '{column}'")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Loads the time-phased cost table. Expected columns:
/// `Date`, `Cost`, `Item Number`, `Type`.
pub fn load_cost_table(path: &str) -> Result<Vec<TransactionRecord>, TableImportError> {
    let file = std::fs::File::open(path)?;
    read_cost_table(file)
}

pub fn read_cost_table<R: Read>(reader: R) -> Result<Vec<TransactionRecord>, TableImportError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let date_column = column_index(&headers, "Date")?;
    let cost_column = column_index(&headers, "Cost")?;
    let item_column = column_index(&headers, "Item Number")?;
    let type_column = column_index(&headers, "Type")?;

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row = row?;
        let line = index + 2; // line 1 is the header
        records.push(TransactionRecord {
            date: parse_date(&row, date_column, line)?,
            cost: parse_number(&row, cost_column, "Cost", line)?,
            item_id: field(&row, item_column).to_string(),
            category: CostCategory::from_label(field(&row, type_column)),
        });
    }
    Ok(records)
}

/// Loads the per-item attributes table. Expected columns:
/// `Item Number`, `Cost`, `Lead Time`, `Yield`, `Hours`.
/// `Yield` is a percentage in the file and is converted to a fraction.
pub fn load_attributes_table(path: &str) -> Result<Vec<AttributeProfile>, TableImportError> {
    let file = std::fs::File::open(path)?;
    read_attributes_table(file)
}

pub fn read_attributes_table<R: Read>(
    reader: R,
) -> Result<Vec<AttributeProfile>, TableImportError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let item_column = column_index(&headers, "Item Number")?;
    let cost_column = column_index(&headers, "Cost")?;
    let lead_time_column = column_index(&headers, "Lead Time")?;
    let yield_column = column_index(&headers, "Yield")?;
    let hours_column = column_index(&headers, "Hours")?;

    let mut profiles = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row = row?;
        let line = index + 2;
        profiles.push(AttributeProfile {
            item_id: field(&row, item_column).to_string(),
            unit_cost: parse_number(&row, cost_column, "Cost", line)?,
            lead_time_days: parse_number(&row, lead_time_column, "Lead Time", line)?,
            yield_fraction: parse_number(&row, yield_column, "Yield", line)? / 100.0,
            labor_hours: parse_number(&row, hours_column, "Hours", line)?,
        });
    }
    Ok(profiles)
}

fn column_index(headers: &StringRecord, name: &'static str) -> Result<usize, TableImportError> {
    headers
        .iter()
        .position(|header| header.trim() == name)
        .ok_or(TableImportError::MissingColumn(name))
}

fn field<'a>(row: &'a StringRecord, index: usize) -> &'a str {
    row.get(index).unwrap_or("").trim()
}

fn parse_date(row: &StringRecord, index: usize, line: usize) -> Result<NaiveDate, TableImportError> {
    let value = field(row, index);
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"))
        .map_err(|_| TableImportError::InvalidDate {
            row: line,
            value: value.to_string(),
        })
}

fn parse_number(
    row: &StringRecord,
    index: usize,
    column: &'static str,
    line: usize,
) -> Result<f64, TableImportError> {
    let value = field(row, index);
    value
        .parse::<f64>()
        .map_err(|_| TableImportError::InvalidNumber {
            row: line,
            column,
            value: value.to_string(),
        })
}
