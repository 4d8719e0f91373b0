//! Per-domain facades over the request pipeline.
//!
//! Each operation resolves its logical parameters against the catalog,
//! executes one request, decodes the body and normalizes the records.
//! Failures keep their kind; facades only add which call failed.

mod company;
mod finance;
mod listing;
mod quote;
mod trading;

pub use company::CompanyService;
pub use finance::FinanceService;
pub use listing::ListingService;
pub use quote::QuoteService;
pub use trading::TradingService;

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::decode::{decode, decode_list, list_from_value};
use crate::executor::RequestExecutor;
use crate::request::RequestDescriptor;
use crate::{ApiError, DecodeError, ValidationError};

/// Fetches a single object. `None` when upstream sent no data.
async fn fetch_one<R, T>(
    executor: &RequestExecutor,
    descriptor: &RequestDescriptor,
    normalize: impl FnOnce(R) -> Result<T, DecodeError>,
) -> Result<Option<T>, ApiError>
where
    R: DeserializeOwned,
{
    let body = executor.execute(descriptor).await?;
    match decode::<R>(&body)? {
        Some(raw) => Ok(Some(normalize(raw)?)),
        None => Ok(None),
    }
}

/// Fetches a top-level array of records.
async fn fetch_many<R, T>(
    executor: &RequestExecutor,
    descriptor: &RequestDescriptor,
    normalize: impl FnMut(R) -> Result<T, DecodeError>,
) -> Result<Vec<T>, ApiError>
where
    R: DeserializeOwned,
{
    let body = executor.execute(descriptor).await?;
    let records = decode_list::<R>(&body)?
        .into_iter()
        .map(normalize)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Fetches an object and returns the records listed under `key`. A missing
/// body or key yields an empty list.
async fn fetch_keyed<R, T>(
    executor: &RequestExecutor,
    descriptor: &RequestDescriptor,
    key: &str,
    normalize: impl FnMut(R) -> Result<T, DecodeError>,
) -> Result<Vec<T>, ApiError>
where
    R: DeserializeOwned,
{
    let body = executor.execute(descriptor).await?;
    let Some(mut object) = decode::<BTreeMap<String, Value>>(&body)? else {
        return Ok(Vec::new());
    };
    let Some(section) = object.remove(key) else {
        return Ok(Vec::new());
    };
    let records = list_from_value::<R>(section)?
        .into_iter()
        .map(normalize)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

fn require_positive(field: &'static str, value: u32) -> Result<u32, ValidationError> {
    if value == 0 {
        return Err(ValidationError::NonPositive { field });
    }
    Ok(value)
}
