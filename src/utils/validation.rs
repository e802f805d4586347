use crate::utils::error::{MenuError, Result};
use chrono::NaiveDate;
use std::net::SocketAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    addr.parse::<SocketAddr>()
        .map_err(|e| MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

/// Parses a calendar date in ISO-8601 `YYYY-MM-DD` form.
/// Only the canonical spelling is accepted: zero-padded, no sign.
pub fn parse_iso_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    let invalid = || {
        MenuError::invalid_argument(
            field_name,
            format!("'{}' is not an ISO-8601 date (YYYY-MM-DD)", value),
        )
    };

    let parsed = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())?;

    // chrono 會接受 2023-1-1 與 +2023-01-01
    if parsed.format("%Y-%m-%d").to_string() != value {
        return Err(invalid());
    }

    Ok(parsed)
}

/// Parses both bounds of an inclusive range and rejects `start > end`.
pub fn parse_date_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate)> {
    let start_date = parse_iso_date("start", start)?;
    let end_date = parse_iso_date("end", end)?;

    if start_date > end_date {
        return Err(MenuError::invalid_argument(
            "start",
            format!("start date {} is after end date {}", start_date, end_date),
        ));
    }

    Ok((start_date, end_date))
}

pub fn validate_item_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(MenuError::ValidationError {
            message: "Item id cannot be empty".to_string(),
        });
    }

    if id.contains('.') || id.contains('/') {
        return Err(MenuError::ValidationError {
            message: format!("Item id '{}' must not contain '.' or '/'", id),
        });
    }

    Ok(())
}
