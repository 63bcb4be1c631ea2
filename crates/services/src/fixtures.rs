use std::path::Path;

use nav_core::model::{Route, RouteProgress};

use crate::error::FixtureError;

/// Parses a route document and places the user at `(leg_index, step_index)`.
///
/// # Errors
///
/// Returns `FixtureError::Json` for malformed documents, `EmptyRoute` when the
/// route has no legs and `PositionOutOfRange` when the position is not a step.
pub fn parse_route_progress(
    raw: &str,
    leg_index: usize,
    step_index: usize,
) -> Result<RouteProgress, FixtureError> {
    let route: Route = serde_json::from_str(raw)?;
    if route.legs.is_empty() {
        return Err(FixtureError::EmptyRoute);
    }
    if !route.contains_step(leg_index, step_index) {
        return Err(FixtureError::PositionOutOfRange {
            leg_index,
            step_index,
        });
    }
    Ok(RouteProgress::new(route, leg_index, step_index))
}

/// # Errors
///
/// Returns `FixtureError::Io` when the file cannot be read, otherwise the
/// errors of [`parse_route_progress`].
pub fn load_route_progress(
    path: &Path,
    leg_index: usize,
    step_index: usize,
) -> Result<RouteProgress, FixtureError> {
    let raw = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let progress = parse_route_progress(&raw, leg_index, step_index)?;
    log::info!(
        "loaded route with {} legs from {}",
        progress.route.legs.len(),
        path.display()
    );
    Ok(progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_LEGS: &str = r#"{
        "legs": [
            { "name": "A St, B St", "steps": [
                { "instructions": "Head north", "distance": 120.0 },
                { "instructions": "Arrive", "distance": 0.0 }
            ] },
            { "name": "C St", "steps": [
                { "instructions": "Head south", "distance": 80.0 }
            ] }
        ]
    }"#;

    #[test]
    fn parses_position_inside_route() {
        let progress = parse_route_progress(TWO_LEGS, 0, 1).unwrap();
        assert_eq!(progress.position(), (0, 1));
        assert_eq!(progress.route.legs.len(), 2);
    }

    #[test]
    fn rejects_position_outside_route() {
        let err = parse_route_progress(TWO_LEGS, 1, 1).unwrap_err();
        assert!(matches!(
            err,
            FixtureError::PositionOutOfRange {
                leg_index: 1,
                step_index: 1
            }
        ));
    }

    #[test]
    fn rejects_empty_route() {
        let err = parse_route_progress(r#"{ "legs": [] }"#, 0, 0).unwrap_err();
        assert!(matches!(err, FixtureError::EmptyRoute));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_route_progress(&dir.path().join("route.json"), 0, 0).unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
    }
}
