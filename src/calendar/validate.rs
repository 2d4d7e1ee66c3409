//! Shape validation for imported event data.

use log::{debug, warn};
use serde_json::Value;

use crate::error::{AppError, AppResult, REQUIRED_FIELDS};
use crate::models::EventRecord;

/// Returns true if `data` is an array whose elements are all objects carrying
/// every required field as a string.
///
/// Structural only: extra keys are ignored and values are neither trimmed nor
/// checked for format, so empty titles or non-hex colors pass.
pub fn is_valid_event_array(data: &Value) -> bool {
    match data {
        Value::Array(items) => items.iter().all(is_event_object),
        _ => false,
    }
}

fn is_event_object(item: &Value) -> bool {
    match item {
        Value::Object(map) => REQUIRED_FIELDS
            .iter()
            .all(|field| matches!(map.get(*field), Some(Value::String(_)))),
        _ => false,
    }
}

/// Parse file text into events, all or nothing.
///
/// Text that is not JSON fails with [`AppError::Syntax`]; JSON of the wrong
/// shape fails with [`AppError::ShapeValidation`].
pub fn parse_event_json(text: &str) -> AppResult<Vec<EventRecord>> {
    let data: Value = serde_json::from_str(text)?;

    if !is_valid_event_array(&data) {
        warn!("Rejected import: data does not match the event shape");
        return Err(AppError::shape_validation());
    }

    let events: Vec<EventRecord> =
        serde_json::from_value(data).map_err(|_| AppError::shape_validation())?;
    debug!("Validated {} events", events.len());
    Ok(events)
}
