use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use super::error::ApiError;
use super::AppState;
use crate::catalog::Catalog;
use crate::models::*;

// ============================================================
// Service Info
// ============================================================

pub async fn index() -> Json<ServiceInfo> {
    let endpoint = |path, method, description| EndpointInfo {
        path,
        method,
        description,
    };

    Json(ServiceInfo {
        service: "Developer Roadmap API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: vec![
            endpoint("/roadmaps", "POST", "Create a new roadmap"),
            endpoint("/roadmaps/{id}", "GET", "Retrieve a specific roadmap"),
            endpoint(
                "/roadmaps/{id}/milestones/{index}",
                "PUT",
                "Mark a milestone as completed or not",
            ),
            endpoint("/quote", "GET", "Get a random inspirational quote"),
            endpoint("/paths", "GET", "List available development paths"),
            endpoint("/catalog", "GET", "Show every development path in full"),
        ],
        usage: "Send a POST request to /roadmaps with name, interests (array), and timeframe (months)",
    })
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Catalog
// ============================================================

pub async fn random_quote(State(state): State<AppState>) -> Json<Quote> {
    Json(state.generator.random_quote())
}

pub async fn list_paths(State(state): State<AppState>) -> Json<PathsResponse> {
    Json(PathsResponse {
        available_paths: available_paths(state.generator.catalog()),
        description: "These paths can be used in the 'interests' field when creating a roadmap"
            .to_string(),
    })
}

pub async fn get_catalog(State(state): State<AppState>) -> Json<&'static [InterestPath]> {
    Json(state.generator.catalog().paths())
}

// ============================================================
// Roadmaps
// ============================================================

pub async fn create_roadmap(
    State(state): State<AppState>,
    payload: Result<Json<CreateRoadmapInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateRoadmapResponse>), ApiError> {
    let Json(input) = payload.map_err(|e| ApiError::MalformedRequest(e.body_text()))?;
    let request = validate_create_input(input, state.generator.catalog())?;

    let roadmap = state.generator.generate(&request)?;
    let response = CreateRoadmapResponse {
        message: "Roadmap created successfully".to_string(),
        roadmap_id: roadmap.id,
        summary: RoadmapSummary {
            name: roadmap.name.clone(),
            timeframe: format!("{} months", roadmap.timeframe),
            paths: roadmap.interests.clone(),
            milestones_count: roadmap.milestones.len(),
        },
    };

    let id = roadmap.id;
    state.store.create(roadmap)?;
    tracing::info!(
        roadmap_id = %id,
        milestones = response.summary.milestones_count,
        "Roadmap created"
    );

    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_roadmap(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Roadmap>, ApiError> {
    let id = parse_roadmap_id(&id)?;
    state.store.get(id).map(Json).map_err(Into::into)
}

pub async fn update_milestone(
    State(state): State<AppState>,
    path: Result<Path<(String, i64)>, PathRejection>,
    payload: Result<Json<UpdateMilestoneInput>, JsonRejection>,
) -> Result<Json<MilestoneUpdateResponse>, ApiError> {
    let Path((id, index)) = path.map_err(|e| ApiError::MalformedRequest(e.body_text()))?;
    let Json(input) = payload.map_err(|e| ApiError::MalformedRequest(e.body_text()))?;
    let completed = input.completed().ok_or(ApiError::MissingCompleted)?;
    let id = parse_roadmap_id(&id)?;

    let update = state.store.set_milestone_completed(id, index, completed)?;
    Ok(Json(MilestoneUpdateResponse {
        message: "Milestone updated successfully".to_string(),
        update,
    }))
}

// ============================================================
// Input Validation
// ============================================================

/// Check the shape of a creation request and turn it into a generator request.
///
/// Checks run in a fixed order: required fields, interests, then timeframe.
pub fn validate_create_input(
    input: CreateRoadmapInput,
    catalog: &Catalog,
) -> Result<RoadmapRequest, ApiError> {
    let (Some(name), Some(interests), Some(timeframe)) =
        (input.name, input.interests, input.timeframe)
    else {
        return Err(ApiError::MissingFields);
    };

    if interests.is_empty() || !interests.iter().all(|i| catalog.contains(i)) {
        return Err(ApiError::InvalidInterests {
            available: available_paths(catalog),
        });
    }

    let months = timeframe.months().ok_or(ApiError::TimeframeNotNumeric)?;
    let timeframe = u32::try_from(months)
        .ok()
        .filter(|m| (MIN_TIMEFRAME_MONTHS..=MAX_TIMEFRAME_MONTHS).contains(m))
        .ok_or(ApiError::TimeframeOutOfRange)?;

    Ok(RoadmapRequest {
        name,
        email: input.email,
        interests,
        timeframe,
    })
}

fn available_paths(catalog: &Catalog) -> Vec<String> {
    catalog.ids().into_iter().map(String::from).collect()
}

/// Ids that are not UUIDs can never match a roadmap.
fn parse_roadmap_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::RoadmapNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(
        name: Option<&str>,
        interests: Option<&[&str]>,
        timeframe: Option<TimeframeInput>,
    ) -> CreateRoadmapInput {
        CreateRoadmapInput {
            name: name.map(String::from),
            email: None,
            interests: interests.map(|i| i.iter().map(|s| s.to_string()).collect()),
            timeframe,
        }
    }

    #[test]
    fn accepts_numeric_string_timeframe() {
        let request = validate_create_input(
            input(
                Some("Ada"),
                Some(&["frontend"]),
                Some(TimeframeInput::Text("6".to_string())),
            ),
            Catalog::builtin(),
        )
        .unwrap();
        assert_eq!(request.timeframe, 6);
    }

    #[test]
    fn missing_fields_win_over_other_problems() {
        let err = validate_create_input(
            input(Some("Ada"), Some(&["nope"]), None),
            Catalog::builtin(),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::MissingFields));
    }

    #[test]
    fn rejects_empty_interest_list() {
        let err = validate_create_input(
            input(Some("Ada"), Some(&[]), Some(TimeframeInput::Months(6))),
            Catalog::builtin(),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInterests { .. }));
    }

    #[test]
    fn rejects_out_of_range_and_non_numeric_timeframes() {
        let check = |timeframe| {
            validate_create_input(
                input(Some("Ada"), Some(&["backend"]), Some(timeframe)),
                Catalog::builtin(),
            )
            .unwrap_err()
        };

        assert!(matches!(check(TimeframeInput::Months(-1)), ApiError::TimeframeOutOfRange));
        assert!(matches!(check(TimeframeInput::Months(0)), ApiError::TimeframeOutOfRange));
        assert!(matches!(check(TimeframeInput::Months(30)), ApiError::TimeframeOutOfRange));
        assert!(matches!(
            check(TimeframeInput::Text("six".to_string())),
            ApiError::TimeframeNotNumeric
        ));
    }

    #[test]
    fn non_uuid_ids_are_not_found() {
        assert!(matches!(
            parse_roadmap_id("nonexistent-id"),
            Err(ApiError::RoadmapNotFound)
        ));
    }
}
