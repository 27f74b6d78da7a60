use serde_json::{Map, Value};

use crate::error::AppError;

/// Optional constraints supplied with a recommendation request
///
/// Any field may be absent, empty or the literal "any", all of which mean
/// the dimension is unconstrained. `region` may list several regions
/// separated by commas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TravelFilters {
    pub climate: Option<String>,
    pub budget: Option<String>,
    pub region: Option<String>,
}

/// Request-scoped traveller profile fed to the recommendation pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user_id: String,
    /// Free-text past trips, conventionally "City, Country"
    pub past_vacations: Vec<String>,
    pub filters: TravelFilters,
}

/// A validated body of `POST /api/recommendations`
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub profile: UserProfile,
    /// The filters object exactly as supplied, echoed back on success
    pub raw_filters: Map<String, Value>,
}

fn invalid(details: impl Into<String>, user_id: Value) -> AppError {
    AppError::InvalidInput {
        details: details.into(),
        user_id,
    }
}

fn filter_field(
    filters: &Map<String, Value>,
    field: &str,
    user_id: &Value,
) -> Result<Option<String>, AppError> {
    match filters.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(invalid(
            format!("filters.{field} must be a string"),
            user_id.clone(),
        )),
    }
}

impl TryFrom<Value> for RecommendationRequest {
    type Error = AppError;

    /// Checks fields in order: userId, pastVacations, then filters
    fn try_from(body: Value) -> Result<Self, Self::Error> {
        let user_id = match body.get("userId") {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            other => {
                return Err(invalid(
                    "userId is required and must be a string",
                    match other {
                        Some(Value::String(_)) | None => Value::Null,
                        Some(value) => value.clone(),
                    },
                ))
            }
        };
        let echoed_id = Value::String(user_id.clone());

        let past_vacations = match body.get("pastVacations") {
            Some(Value::Array(entries)) if !entries.is_empty() => entries
                .iter()
                .map(|entry| entry.as_str().map(str::to_string))
                .collect::<Option<Vec<String>>>()
                .ok_or_else(|| {
                    invalid("pastVacations must contain only strings", echoed_id.clone())
                })?,
            _ => {
                return Err(invalid(
                    "pastVacations must be a non-empty array",
                    echoed_id,
                ))
            }
        };

        let raw_filters = match body.get("filters") {
            Some(Value::Object(map)) => map.clone(),
            _ => return Err(invalid("filters must be an object", echoed_id)),
        };

        let filters = TravelFilters {
            climate: filter_field(&raw_filters, "climate", &echoed_id)?,
            budget: filter_field(&raw_filters, "budget", &echoed_id)?,
            region: filter_field(&raw_filters, "region", &echoed_id)?,
        };

        Ok(Self {
            profile: UserProfile {
                user_id,
                past_vacations,
                filters,
            },
            raw_filters,
        })
    }
}
