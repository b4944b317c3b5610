use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::model::{Dataset, SaleRecord};
use crate::error::DataLoadError;

/// Layout of `saledate`, e.g. `11/16/2006 0:00`.
pub const SALE_DATE_FORMAT: &str = "%m/%d/%Y %H:%M";

const REQUIRED_COLUMNS: [&str; 4] = ["saledate", "SalePrice", "ProductGroupDesc", "state"];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the auction CSV at `path`.
///
/// The file needs a header row naming at least `saledate`, `SalePrice`,
/// `ProductGroupDesc` and `state`; any other columns are ignored. One bad
/// row fails the whole load.
pub fn load(path: &Path) -> Result<Dataset, DataLoadError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| DataLoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    read_sales(reader)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// One CSV row as it appears on disk, before dates and prices are parsed.
#[derive(Debug, Deserialize)]
struct RawSale {
    #[serde(rename = "saledate")]
    sale_date: String,
    #[serde(rename = "SalePrice")]
    sale_price: String,
    #[serde(rename = "ProductGroupDesc")]
    product_group: String,
    state: String,
}

fn read_sales<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Dataset, DataLoadError> {
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataLoadError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawSale>().enumerate() {
        let raw = result?;
        records.push(parse_sale(raw, i + 1)?);
    }

    Ok(Dataset::from_records(records))
}

fn parse_sale(raw: RawSale, row: usize) -> Result<SaleRecord, DataLoadError> {
    let sale_date = NaiveDateTime::parse_from_str(&raw.sale_date, SALE_DATE_FORMAT)
        .map_err(|_| DataLoadError::InvalidDate {
            row,
            value: raw.sale_date.clone(),
        })?;

    let sale_price = parse_price(&raw.sale_price).ok_or_else(|| DataLoadError::InvalidPrice {
        row,
        value: raw.sale_price.clone(),
    })?;

    Ok(SaleRecord {
        sale_date,
        sale_price,
        product_group: raw.product_group,
        state: raw.state,
    })
}

/// Prices are usually plain integers (`66000`) but exports sometimes carry
/// a fractional part or scientific notation (`6.6e4`).
fn parse_price(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}
