// ABOUTME: Workout generation service that parses the HTTP body into a validated request
// ABOUTME: Wraps the planner's generator and builds the success payload with text and structured plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use swim_core::errors::{AppError, AppResult};
use swim_core::models::{DistanceUnit, PoolLength, ThresholdPace, WorkoutPlan, WorkoutRequest};
use swim_planner::{GeneratorPolicy, WorkoutGenerator};
use tracing::{debug, info};

/// A JSON value that may arrive as a number or as a string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    /// Plain JSON number
    Number(f64),
    /// String such as `"2000"`, `"25yd"` or `"1:45"`
    Text(String),
}

/// Raw body of `POST /generate-workout`
///
/// Every field is optional here so that absence is reported as a
/// `MISSING_REQUIRED_FIELD` error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateWorkoutBody {
    /// Target distance
    pub distance: Option<NumberOrText>,
    /// Pool length with unit suffix, e.g. `"25m"`
    pub pool_length: Option<NumberOrText>,
    /// Seconds per 100 or `"m:ss"`
    pub threshold_pace: Option<NumberOrText>,
    /// Unit of `distance`; defaults to the pool's unit
    pub distance_unit: Option<String>,
    /// Seed for varied cue wording
    pub seed: Option<u64>,
}

impl GenerateWorkoutBody {
    /// Parse a raw request body
    ///
    /// # Errors
    ///
    /// Returns `INVALID_FORMAT` when the body is empty or not a JSON object
    /// of the expected shape.
    pub fn from_slice(bytes: &[u8]) -> AppResult<Self> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::invalid_format("Request body is empty"));
        }
        serde_json::from_slice(bytes)
            .map_err(|e| AppError::invalid_format(format!("Request body is not valid JSON: {e}")))
    }

    /// Validate the body into a [`WorkoutRequest`]
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` for an absent `distance` or
    /// `poolLength`, `INVALID_FORMAT` for unparsable values, and
    /// `VALUE_OUT_OF_RANGE` for values outside accepted limits.
    pub fn into_request(self) -> AppResult<WorkoutRequest> {
        let distance = parse_distance(self.distance)?;
        let pool = parse_pool_length(self.pool_length)?;
        let threshold_pace = parse_pace(self.threshold_pace)?;
        let distance_unit = self
            .distance_unit
            .as_deref()
            .map(str::trim)
            .filter(|unit| !unit.is_empty())
            .map(|unit| {
                unit.parse::<DistanceUnit>().map_err(|_| {
                    AppError::invalid_format(format!(
                        "distanceUnit '{unit}' is not supported (use 'm' or 'yd')"
                    ))
                })
            })
            .transpose()?;

        WorkoutRequest::new(distance, distance_unit, pool, threshold_pace, self.seed)
    }
}

fn parse_distance(value: Option<NumberOrText>) -> AppResult<f64> {
    match value {
        None => Err(AppError::missing_field("distance")),
        Some(NumberOrText::Number(distance)) => Ok(distance),
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => {
            Err(AppError::missing_field("distance"))
        }
        Some(NumberOrText::Text(text)) => text.trim().parse().map_err(|_| {
            AppError::invalid_format(format!("distance '{}' is not a number", text.trim()))
        }),
    }
}

fn parse_pool_length(value: Option<NumberOrText>) -> AppResult<PoolLength> {
    match value {
        None => Err(AppError::missing_field("poolLength")),
        Some(NumberOrText::Number(number)) => Err(AppError::invalid_format(format!(
            "poolLength {number} needs a unit suffix such as '25m' or '25yd'"
        ))),
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => {
            Err(AppError::missing_field("poolLength"))
        }
        Some(NumberOrText::Text(text)) => Ok(text.parse::<PoolLength>()?),
    }
}

fn parse_pace(value: Option<NumberOrText>) -> AppResult<Option<ThresholdPace>> {
    match value {
        None => Ok(None),
        Some(NumberOrText::Number(seconds)) => Ok(Some(ThresholdPace::from_seconds(seconds)?)),
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(text)) => Ok(Some(text.parse::<ThresholdPace>()?)),
    }
}

/// Success payload of `POST /generate-workout`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateWorkoutResponse {
    /// Always `true`
    pub ok: bool,
    /// Rendered multi-line workout
    pub workout_text: String,
    /// Total planned distance in pool units
    pub total_distance: f64,
    /// Estimated duration when a pace was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_seconds: Option<f64>,
    /// Structured plan the text was rendered from
    pub plan: WorkoutPlan,
}

/// Stateless workout service shared by all requests
#[derive(Debug, Clone, Default)]
pub struct WorkoutService {
    generator: WorkoutGenerator,
}

impl WorkoutService {
    /// Create the service with a generation policy
    #[must_use]
    pub const fn new(policy: GeneratorPolicy) -> Self {
        Self {
            generator: WorkoutGenerator::new(policy),
        }
    }

    /// Generate a workout from a raw JSON body
    ///
    /// # Errors
    ///
    /// Returns a 4xx-class [`AppError`] when the body cannot be parsed or
    /// validated.
    pub fn generate_from_slice(&self, bytes: &[u8]) -> AppResult<GenerateWorkoutResponse> {
        self.generate(GenerateWorkoutBody::from_slice(bytes)?)
    }

    /// Generate a workout from a parsed body
    ///
    /// # Errors
    ///
    /// Same as [`GenerateWorkoutBody::into_request`].
    pub fn generate(&self, body: GenerateWorkoutBody) -> AppResult<GenerateWorkoutResponse> {
        let request = body.into_request()?;
        debug!(
            distance = request.distance(),
            distance_unit = %request.distance_unit(),
            pool = %request.pool(),
            paced = request.threshold_pace().is_some(),
            seed = ?request.seed(),
            "generating workout"
        );

        let (plan, workout_text) = self.generator.generate_text(&request);
        let total_distance = plan.total_distance();
        let estimated_seconds = plan.estimated_seconds();

        info!(
            pool = %plan.pool,
            total_distance,
            sections = plan.sections.len(),
            "workout generated"
        );

        Ok(GenerateWorkoutResponse {
            ok: true,
            workout_text,
            total_distance,
            estimated_seconds,
            plan,
        })
    }
}
