//! Booking Handlers

pub(crate) mod availability;
pub(crate) mod dates;

use jiff::civil::Date;
use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use crate::extensions::*;

/// Read an optional `YYYY-MM-DD` query parameter.
fn parse_date(param: QueryParam<String, false>, name: &str) -> Result<Option<Date>, StatusError> {
    param
        .into_inner()
        .map(|value| value.trim().parse::<Date>())
        .transpose()
        .or_400(&format!("could not parse \"{name}\" query parameter"))
}
