//! Request/response adapter for the HTTP API.
//!
//! Turns raw JSON bodies into validated [`ScheduleRequest`]s, runs the
//! registry, and renders JSON responses. No I/O happens here; the
//! `server` module only moves bytes in and out.
//!
//! # Request body
//!
//! ```json
//! { "tracks": [98, "183", 37], "head": 53, "algorithm": "scan",
//!   "diskSize": 200, "direction": "increasing" }
//! ```
//!
//! `tracks` and `head` accept integers or integer strings. `algorithm`
//! absent means "run all six". `diskSize` and `direction` are optional.
//! At most [`MAX_TRACKS`] requests are accepted per call.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::ScheduleError;
use crate::models::{Direction, DiskGeometry, ScheduleRequest};
use crate::registry::{self, Comparison, Policy};
use crate::stats::SeekStats;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Error text for an unrecognized algorithm identifier.
pub const INVALID_ALGORITHM: &str = "Invalid algorithm";

/// Largest queue accepted in one call. SSTF is quadratic in the queue length.
pub const MAX_TRACKS: usize = 10_000;

/// A rendered API response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// JSON body.
    pub body: Value,
}

impl ApiResponse {
    /// 200 with the given body.
    pub fn ok(body: impl Serialize) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self { status: 200, body },
            Err(e) => Self::error(500, format!("Serialization failed: {e}")),
        }
    }

    /// Error response with `{ "error": message }`.
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<ScheduleError> for ApiResponse {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::UnknownPolicy(_) => Self::error(400, INVALID_ALGORITHM),
            ScheduleError::InvalidInput(_) => Self::error(400, err.to_string()),
        }
    }
}

/// A parsed API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// The scheduling input.
    pub request: ScheduleRequest,
    /// Requested policy identifier, if any.
    pub algorithm: Option<String>,
}

/// Parses a JSON body into an [`ApiRequest`].
///
/// Coerces `tracks`/`head` and applies defaults. Range checks are left to
/// the registry.
pub fn parse_request(body: &Value, default_disk_size: u32) -> Result<ApiRequest, ScheduleError> {
    let object = body.as_object().ok_or_else(|| {
        ScheduleError::invalid(ValidationError::new(
            ValidationErrorKind::MissingField,
            "Request body must be a JSON object",
        ))
    })?;

    let tracks = match object.get("tracks") {
        Some(Value::Array(items)) if items.len() > MAX_TRACKS => {
            return Err(ScheduleError::invalid(ValidationError::new(
                ValidationErrorKind::TooManyTracks,
                format!("{} tracks exceeds the limit of {MAX_TRACKS}", items.len()),
            )))
        }
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                coerce_u32(item).ok_or_else(|| {
                    ValidationError::new(
                        ValidationErrorKind::NonIntegerTrack,
                        format!("Track at position {index} is not a non-negative integer: {item}"),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(ScheduleError::invalid)?,
        Some(other) => {
            return Err(ScheduleError::invalid(ValidationError::new(
                ValidationErrorKind::NonIntegerTrack,
                format!("'tracks' must be an array of integers, got {other}"),
            )))
        }
        None => return Err(missing("tracks")),
    };

    let head = match object.get("head") {
        Some(value) => coerce_u32(value).ok_or_else(|| {
            ScheduleError::invalid(ValidationError::new(
                ValidationErrorKind::NonIntegerHead,
                format!("'head' is not a non-negative integer: {value}"),
            ))
        })?,
        None => return Err(missing("head")),
    };

    let disk_size = match object.get("diskSize") {
        None | Some(Value::Null) => default_disk_size,
        Some(value) => coerce_u32(value).filter(|&n| n > 0).ok_or_else(|| {
            ScheduleError::invalid(ValidationError::new(
                ValidationErrorKind::InvalidDiskSize,
                format!("'diskSize' must be a positive integer: {value}"),
            ))
        })?,
    };

    let direction = match object.get("direction") {
        None | Some(Value::Null) => Direction::default(),
        Some(Value::String(s)) => s.parse::<Direction>().map_err(|e| {
            ScheduleError::invalid(ValidationError::new(ValidationErrorKind::InvalidDirection, e))
        })?,
        Some(other) => {
            return Err(ScheduleError::invalid(ValidationError::new(
                ValidationErrorKind::InvalidDirection,
                format!("'direction' must be a string, got {other}"),
            )))
        }
    };

    let algorithm = match object.get("algorithm") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    };

    Ok(ApiRequest {
        request: ScheduleRequest::new(tracks, head)
            .with_geometry(DiskGeometry::new(disk_size))
            .with_direction(direction),
        algorithm,
    })
}

/// Handles a calculate call: one policy, or all six if `algorithm` is absent.
pub fn calculate(body: &[u8], default_disk_size: u32) -> ApiResponse {
    let parsed = match parse_body(body, default_disk_size) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    let outcome = match parsed.algorithm.as_deref() {
        Some(name) => registry::run_named(name, &parsed.request).map(ApiResponse::ok),
        None => registry::run_all(&parsed.request).map(|c| ApiResponse::ok(comparison_body(&c))),
    };
    outcome.unwrap_or_else(ApiResponse::from)
}

/// Handles a compare call: all six policies, ignoring `algorithm`.
pub fn compare(body: &[u8], default_disk_size: u32) -> ApiResponse {
    let parsed = match parse_body(body, default_disk_size) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    registry::run_all(&parsed.request)
        .map(|c| ApiResponse::ok(comparison_body(&c)))
        .unwrap_or_else(ApiResponse::from)
}

/// Handles a stats call: seek statistics for all six policies and the
/// policy with the lowest total seek time.
pub fn stats(body: &[u8], default_disk_size: u32) -> ApiResponse {
    let parsed = match parse_body(body, default_disk_size) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    registry::run_all(&parsed.request)
        .map(|c| ApiResponse::ok(stats_body(&c)))
        .unwrap_or_else(ApiResponse::from)
}

/// Renders `{ best, ranking: [names], policies: { name: SeekStats } }`.
pub fn stats_body(comparison: &Comparison) -> Value {
    let mut policies = Map::new();
    for (policy, result) in comparison.iter() {
        policies.insert(
            policy.display_name().to_string(),
            serde_json::to_value(SeekStats::calculate(result)).unwrap_or(Value::Null),
        );
    }
    let ranking: Vec<&str> = comparison
        .ranking()
        .iter()
        .map(|(policy, _)| policy.display_name())
        .collect();

    json!({
        "best": comparison.best().0.display_name(),
        "ranking": ranking,
        "policies": policies,
    })
}

/// Renders a comparison as `{ display name: { sequence, totalSeekTime } }`.
pub fn comparison_body(comparison: &Comparison) -> Value {
    let mut map = Map::new();
    for (policy, result) in comparison.iter() {
        map.insert(
            policy.display_name().to_string(),
            serde_json::to_value(result).unwrap_or(Value::Null),
        );
    }
    Value::Object(map)
}

/// Lists the supported policies as `{ id, name, description, usesDirection }`.
pub fn policies_body() -> Value {
    Value::Array(
        Policy::ALL
            .iter()
            .map(|p| {
                let imp = p.implementation();
                json!({
                    "id": p.id(),
                    "name": p.display_name(),
                    "description": imp.description(),
                    "usesDirection": imp.uses_direction(),
                })
            })
            .collect(),
    )
}

fn parse_body(body: &[u8], default_disk_size: u32) -> Result<ApiRequest, ApiResponse> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiResponse::error(400, format!("Invalid JSON: {e}")))?;
    parse_request(&value, default_disk_size).map_err(ApiResponse::from)
}

fn missing(field: &str) -> ScheduleError {
    ScheduleError::invalid(ValidationError::new(
        ValidationErrorKind::MissingField,
        format!("Missing field '{field}'"),
    ))
}

/// Integer or integer string that fits in `u32`. Integral floats pass.
fn coerce_u32(value: &Value) -> Option<u32> {
    let wide = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    u32::try_from(wide).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn test_calculate_single_policy() {
        let resp = calculate(
            &body(json!({ "tracks": [98, 183, 37, 122, 14, 124, 65, 67], "head": 53, "algorithm": "sstf" })),
            200,
        );
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body["totalSeekTime"], 236);
        assert_eq!(resp.body["sequence"][0], 53);
    }

    #[test]
    fn test_calculate_without_algorithm_runs_all() {
        let resp = calculate(&body(json!({ "tracks": [10, 20], "head": 15 })), 200);
        assert_eq!(resp.status, 200);
        let map = resp.body.as_object().unwrap();
        assert_eq!(map.len(), 6);
        assert!(map.contains_key("SCAN (Elevator)"));
        assert!(map.contains_key("First Come First Serve (FCFS)"));
    }

    #[test]
    fn test_unknown_algorithm() {
        let resp = calculate(
            &body(json!({ "tracks": [1], "head": 0, "algorithm": "elevator" })),
            200,
        );
        assert_eq!(resp.status, 400);
        assert_eq!(resp.body, json!({ "error": "Invalid algorithm" }));
    }

    #[test]
    fn test_string_tracks_are_coerced() {
        let parsed =
            parse_request(&json!({ "tracks": ["98", " 37 ", 5.0], "head": "53" }), 200).unwrap();
        assert_eq!(parsed.request.requests, vec![98, 37, 5]);
        assert_eq!(parsed.request.head, 53);
        assert_eq!(parsed.algorithm, None);
    }

    #[test]
    fn test_non_integer_track_rejected() {
        for bad in [json!("abc"), json!(-4), json!(1.5), json!(null), json!([1])] {
            let err = parse_request(&json!({ "tracks": [1, bad], "head": 0 }), 200).unwrap_err();
            match err {
                ScheduleError::InvalidInput(errors) => {
                    assert_eq!(errors[0].kind, ValidationErrorKind::NonIntegerTrack)
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_tracks_must_be_array() {
        let resp = compare(&body(json!({ "tracks": "1,2,3", "head": 0 })), 200);
        assert_eq!(resp.status, 400);
    }

    #[test]
    fn test_missing_head() {
        let resp = compare(&body(json!({ "tracks": [1, 2] })), 200);
        assert_eq!(resp.status, 400);
        assert!(resp.body["error"].as_str().unwrap().contains("head"));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let resp = calculate(
            &body(json!({ "tracks": [10, 250], "head": 53, "algorithm": "fcfs" })),
            200,
        );
        assert_eq!(resp.status, 400);
        assert!(resp.body["error"].as_str().unwrap().contains("250"));
    }

    #[test]
    fn test_disk_size_and_direction() {
        let resp = calculate(
            &body(json!({
                "tracks": [60, 20], "head": 50, "algorithm": "scan",
                "diskSize": 100, "direction": "left"
            })),
            200,
        );
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body["sequence"], json!([50, 20, 0, 60]));
    }

    #[test]
    fn test_default_disk_size_applies() {
        let parsed = parse_request(&json!({ "tracks": [], "head": 0 }), 500).unwrap();
        assert_eq!(parsed.request.geometry.size, 500);
    }

    #[test]
    fn test_invalid_disk_size_and_direction() {
        assert!(parse_request(&json!({ "tracks": [], "head": 0, "diskSize": 0 }), 200).is_err());
        assert!(
            parse_request(&json!({ "tracks": [], "head": 0, "direction": "sideways" }), 200)
                .is_err()
        );
    }

    #[test]
    fn test_invalid_json() {
        let resp = calculate(b"{not json", 200);
        assert_eq!(resp.status, 400);
        assert!(resp.body["error"].as_str().unwrap().starts_with("Invalid JSON"));
    }

    #[test]
    fn test_empty_tracks() {
        let resp = calculate(&body(json!({ "tracks": [], "head": 7, "algorithm": "cscan" })), 200);
        assert_eq!(resp.body, json!({ "sequence": [7], "totalSeekTime": 0 }));
    }

    #[test]
    fn test_stats_reports_best_and_averages() {
        let resp = stats(
            &body(json!({ "tracks": [98, 183, 37, 122, 14, 124, 65, 67], "head": 53 })),
            200,
        );
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body["best"], "Shortest Seek Time First (SSTF)");
        assert_eq!(resp.body["ranking"][0], "Shortest Seek Time First (SSTF)");
        assert_eq!(resp.body["ranking"][5], "First Come First Serve (FCFS)");

        let look = &resp.body["policies"]["LOOK"];
        assert_eq!(look["totalSeekTime"], 299);
        assert_eq!(look["visits"], 8);
        assert_eq!(look["longestSeek"], 146);
        assert_eq!(look["reversals"], 1);
        assert!((look["averageSeekTime"].as_f64().unwrap() - 299.0 / 8.0).abs() < 1e-10);
        assert_eq!(resp.body["policies"].as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_stats_rejects_bad_input() {
        let resp = stats(&body(json!({ "tracks": [500], "head": 0 })), 200);
        assert_eq!(resp.status, 400);
    }

    #[test]
    fn test_queue_length_is_capped() {
        let tracks = vec![1; MAX_TRACKS + 1];
        let err = parse_request(&json!({ "tracks": tracks, "head": 0 }), 200).unwrap_err();
        match err {
            ScheduleError::InvalidInput(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::TooManyTracks)
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let at_limit = vec![1; MAX_TRACKS];
        assert!(parse_request(&json!({ "tracks": at_limit, "head": 0 }), 200).is_ok());
    }

    #[test]
    fn test_policies_body_lists_six() {
        let list = policies_body();
        assert_eq!(list.as_array().unwrap().len(), 6);
        assert_eq!(list[0]["id"], "fcfs");
        assert_eq!(list[2]["usesDirection"], true);
    }
}
