//! Transaction loading from JSON and CSV files
//!
//! This is the validation boundary: every record leaving this module has a
//! real calendar date, a numeric amount and a known type. When a record has
//! no `type`, the sign of the amount decides (negative = expense).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, NaiveDate};
use csv::ReaderBuilder;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Transaction, TransactionType};

/// Supported transaction file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Csv,
}

impl FileFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Load transactions from a `.json` or `.csv` file
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let format = FileFormat::from_path(path)?;
    let reader = BufReader::new(File::open(path)?);

    let transactions = match format {
        FileFormat::Json => parse_json(reader)?,
        FileFormat::Csv => parse_csv(reader)?,
    };

    debug!(
        path = %path.display(),
        count = transactions.len(),
        "Loaded transactions"
    );
    Ok(transactions)
}

/// Either a bare array or an API-style `{ "transactions": [...] }` object
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPayload {
    List(Vec<RawJsonTransaction>),
    Wrapped { transactions: Vec<RawJsonTransaction> },
}

/// Loosely typed record; ids may be numbers and amounts may be strings
#[derive(Deserialize)]
struct RawJsonTransaction {
    id: Option<Value>,
    date: String,
    #[serde(default)]
    description: String,
    amount: Value,
    #[serde(default)]
    category: String,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Parse a JSON transaction list
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let payload: JsonPayload = serde_json::from_reader(reader)?;
    let raw = match payload {
        JsonPayload::List(list) => list,
        JsonPayload::Wrapped { transactions } => transactions,
    };

    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            let row = index + 1;
            let id = match record.id {
                Some(Value::String(s)) if !s.is_empty() => s,
                Some(Value::Number(n)) => n.to_string(),
                _ => row.to_string(),
            };
            let amount = match &record.amount {
                Value::Number(n) => n.as_f64().ok_or_else(|| {
                    Error::InvalidData(format!("Transaction {}: amount out of range", id))
                })?,
                Value::String(s) => parse_amount(s).map_err(|e| with_id(&id, e))?,
                other => {
                    return Err(Error::InvalidData(format!(
                        "Transaction {}: amount must be a number, got {}",
                        id, other
                    )))
                }
            };

            build_transaction(
                id,
                &record.date,
                record.description,
                amount,
                record.category,
                record.kind.as_deref(),
            )
        })
        .collect()
}

#[derive(Deserialize)]
struct RawCsvTransaction {
    #[serde(default)]
    id: String,
    date: String,
    #[serde(default)]
    description: String,
    amount: String,
    #[serde(default)]
    category: String,
    #[serde(rename = "type", default)]
    kind: String,
}

/// Parse CSV with header `id,date,description,amount,category,type`
///
/// `id` and `type` columns are optional; missing ids become the row number.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut transactions = Vec::new();

    for (index, result) in rdr.deserialize::<RawCsvTransaction>().enumerate() {
        let record = result?;
        let id = if record.id.is_empty() {
            (index + 1).to_string()
        } else {
            record.id
        };
        let amount = parse_amount(&record.amount).map_err(|e| with_id(&id, e))?;
        let kind = Some(record.kind.as_str()).filter(|k| !k.is_empty());

        transactions.push(build_transaction(
            id,
            &record.date,
            record.description,
            amount,
            record.category,
            kind,
        )?);
    }

    debug!("Parsed {} CSV transactions", transactions.len());
    Ok(transactions)
}

fn build_transaction(
    id: String,
    date: &str,
    description: String,
    amount: f64,
    category: String,
    kind: Option<&str>,
) -> Result<Transaction> {
    let date = parse_date(date).map_err(|e| with_id(&id, e))?;
    let kind = match kind {
        Some(k) => k
            .parse::<TransactionType>()
            .map_err(|e| with_id(&id, Error::InvalidData(e)))?,
        None if amount < 0.0 => TransactionType::Expense,
        None => TransactionType::Income,
    };

    Ok(Transaction {
        id,
        date,
        description,
        amount,
        category,
        kind,
    })
}

fn with_id(id: &str, err: Error) -> Error {
    match err {
        Error::InvalidData(message) => {
            Error::InvalidData(format!("Transaction {}: {}", id, message))
        }
        other => Error::InvalidData(format!("Transaction {}: {}", id, other)),
    }
}

/// Parse a date, accepting ISO dates, RFC 3339 timestamps and US formats
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d", // 2025-04-15
        "%m/%d/%Y", // 04/15/2025
        "%m/%d/%y", // 04/15/25
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(s) {
        return Ok(timestamp.date_naive());
    }

    Err(Error::InvalidData(format!("Unable to parse date: {}", s)))
}

/// Parse an amount string, handling currency symbols and commas
pub fn parse_amount(s: &str) -> Result<f64> {
    let cleaned: String = s
        .trim()
        .replace(['$', ',', ' '], "")
        .replace('(', "-")
        .replace(')', "");

    cleaned
        .parse::<f64>()
        .map_err(|_| Error::InvalidData(format!("Unable to parse amount: {}", s)))
}
