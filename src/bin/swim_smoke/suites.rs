// ABOUTME: Smoke suites and their pure response checks for the swim workout server
// ABOUTME: Suite A counts transport and shape failures, B counts over-cap reps, D flags yards conversion slips
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::fmt;
use std::time::Duration;
use swim_planner::render::{main_section_lines, parse_set_line};
use tracing::{debug, warn};

/// Rep counts that betray a metres target laid over a yards pool
const YARDS_MISMATCH_REPS: [u32; 2] = [22, 26];
/// Rep distance the mismatch and cap checks look at
const WATCHED_REP_DISTANCE: f64 = 50.0;

/// Thin wrapper over the generate endpoint
pub struct SmokeClient {
    client: Client,
    endpoint: String,
}

impl SmokeClient {
    /// Build a client for the server at `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized
    pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/generate-workout", base_url.trim_end_matches('/')),
        })
    }

    async fn generate(&self, distance: u32, pool_length: &str) -> Outcome {
        let body = json!({ "distance": distance, "poolLength": pool_length });
        let response = match self.client.post(&self.endpoint).json(&body).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "request failed");
                return Outcome::Transport(e.to_string());
            }
        };

        let status = response.status();
        match response.json::<Value>().await {
            Ok(payload) => classify(status, &payload),
            Err(e) => Outcome::Malformed(format!("HTTP {status}, unreadable body: {e}")),
        }
    }
}

/// What one request produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 200 with `ok: true` and non-empty `workoutText`
    Workout(String),
    /// No HTTP response, or a non-200 status with a well-formed error payload
    Transport(String),
    /// `ok` or `workoutText` missing or of the wrong type
    Malformed(String),
    /// Server answered `ok: false`
    ErrorPayload(String),
}

/// Sort a response into an [`Outcome`]
#[must_use]
pub fn classify(status: StatusCode, payload: &Value) -> Outcome {
    let ok = payload.get("ok").and_then(Value::as_bool);
    let text = payload.get("workoutText").and_then(Value::as_str);

    match (ok, text) {
        (Some(false), _) => Outcome::ErrorPayload(
            payload
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("no error message")
                .to_owned(),
        ),
        _ if status != StatusCode::OK => Outcome::Transport(format!("HTTP {status}")),
        (Some(true), Some(text)) if !text.trim().is_empty() => Outcome::Workout(text.to_owned()),
        _ => Outcome::Malformed("response lacks ok/workoutText".to_owned()),
    }
}

/// MAIN-section `N x 50` lines whose N exceeds `cap`
#[must_use]
pub fn over_cap_lines(text: &str, cap: u32) -> Vec<String> {
    main_section_lines(text)
        .into_iter()
        .filter(|line| {
            parse_set_line(line).is_some_and(|(reps, distance)| {
                (distance - WATCHED_REP_DISTANCE).abs() < f64::EPSILON && reps > cap
            })
        })
        .map(str::to_owned)
        .collect()
}

/// MAIN-section lines such as `22 x 50` that signal an unconverted target
#[must_use]
pub fn yards_mismatch_lines(text: &str) -> Vec<String> {
    main_section_lines(text)
        .into_iter()
        .filter(|line| {
            parse_set_line(line).is_some_and(|(reps, distance)| {
                (distance - WATCHED_REP_DISTANCE).abs() < f64::EPSILON
                    && YARDS_MISMATCH_REPS.contains(&reps)
            })
        })
        .map(str::to_owned)
        .collect()
}

/// Tally for one suite
#[derive(Debug, Default)]
pub struct SuiteReport {
    /// Suite label
    pub name: String,
    /// Requests sent
    pub trials: u32,
    /// Transport errors and non-200 statuses
    pub http_failures: u32,
    /// Responses missing `ok` or `workoutText`
    pub missing_fields: u32,
    /// Responses with `ok: false`
    pub error_payloads: u32,
    /// Lines that fail the suite
    pub violations: Vec<String>,
    /// Lines worth a look but not a failure
    pub informational: Vec<String>,
}

impl SuiteReport {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Count an outcome, returning the text when it was a workout
    fn record(&mut self, outcome: Outcome) -> Option<String> {
        self.trials += 1;
        match outcome {
            Outcome::Workout(text) => return Some(text),
            Outcome::Transport(detail) => {
                self.http_failures += 1;
                debug!(suite = %self.name, %detail, "http failure");
            }
            Outcome::Malformed(detail) => {
                self.missing_fields += 1;
                debug!(suite = %self.name, %detail, "malformed response");
            }
            Outcome::ErrorPayload(detail) => {
                self.error_payloads += 1;
                debug!(suite = %self.name, %detail, "error payload");
            }
        }
        None
    }

    /// Whether anything counted against the suite
    #[must_use]
    pub fn has_hard_failure(&self) -> bool {
        self.http_failures > 0
            || self.missing_fields > 0
            || self.error_payloads > 0
            || !self.violations.is_empty()
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.has_hard_failure() { "FAIL" } else { "PASS" };
        writeln!(f, "[{verdict}] {}", self.name)?;
        writeln!(
            f,
            "  trials={} http_failures={} missing_fields={} error_payloads={}",
            self.trials, self.http_failures, self.missing_fields, self.error_payloads
        )?;
        if !self.violations.is_empty() {
            writeln!(f, "  violations ({}):", self.violations.len())?;
            for line in &self.violations {
                writeln!(f, "    {line}")?;
            }
        }
        if !self.informational.is_empty() {
            writeln!(f, "  informational ({}):", self.informational.len())?;
            for line in &self.informational {
                writeln!(f, "    {line}")?;
            }
        }
        Ok(())
    }
}

/// Suite A: repeated identical requests must all succeed with a full payload
pub async fn reliability(client: &SmokeClient, trials: u32) -> SuiteReport {
    let mut report = SuiteReport::new("A: repeated 2000 @ 25m");
    for _ in 0..trials {
        let outcome = client.generate(2000, "25m").await;
        report.record(outcome);
    }
    report
}

/// Suite B: MAIN `N x 50` lines above `cap` are counted, not failed
///
/// `cap` must match the server's `SWIM_MAX_REPS_PER_SET`.
pub async fn rep_cap(client: &SmokeClient, trials: u32, cap: u32) -> SuiteReport {
    let mut report = SuiteReport::new(format!("B: main-set rep cap {cap}, 2000 @ 25m"));
    for _ in 0..trials {
        let outcome = client.generate(2000, "25m").await;
        if let Some(text) = report.record(outcome) {
            report
                .informational
                .extend(over_cap_lines(&text, cap));
        }
    }
    report
}

/// Suite D: a yards pool must not show metre-derived rep counts
pub async fn yards_conversion(client: &SmokeClient, trials: u32) -> SuiteReport {
    let mut report = SuiteReport::new("D: yards conversion, 2000 @ 25yd");
    for _ in 0..trials {
        let outcome = client.generate(2000, "25yd").await;
        if let Some(text) = report.record(outcome) {
            report.violations.extend(yards_mismatch_lines(&text));
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "2000yd swim workout (25yd pool)\n\n\
        WARM\n1 x 200 easy\n\n\
        MAIN\n22 x 50 fast\n24 x 50 hold\n4 x 100 smooth\n\n\
        COOL\n26 x 50 easy\n\n\
        Total: 2000yd\n";

    #[test]
    fn test_classify() {
        let ok = json!({ "ok": true, "workoutText": "MAIN\n1 x 50\n" });
        assert!(matches!(classify(StatusCode::OK, &ok), Outcome::Workout(_)));

        let rejected = json!({ "ok": false, "error": "distance is required" });
        assert_eq!(
            classify(StatusCode::BAD_REQUEST, &rejected),
            Outcome::ErrorPayload("distance is required".to_owned())
        );

        let empty = json!({ "ok": true, "workoutText": "  " });
        assert!(matches!(classify(StatusCode::OK, &empty), Outcome::Malformed(_)));
        assert!(matches!(
            classify(StatusCode::BAD_GATEWAY, &json!({})),
            Outcome::Transport(_)
        ));
    }

    #[test]
    fn test_over_cap_only_reads_main() {
        assert_eq!(over_cap_lines(SAMPLE, 20), vec!["22 x 50 fast", "24 x 50 hold"]);
        assert!(over_cap_lines(SAMPLE, 30).is_empty());
    }

    #[test]
    fn test_yards_mismatch_only_reads_main() {
        assert_eq!(yards_mismatch_lines(SAMPLE), vec!["22 x 50 fast"]);
    }

    #[test]
    fn test_report_verdict() {
        let mut report = SuiteReport::new("test");
        assert_eq!(report.record(Outcome::Workout("x".to_owned())), Some("x".to_owned()));
        assert!(!report.has_hard_failure());

        report.informational.push("21 x 50".to_owned());
        assert!(!report.has_hard_failure());

        report.record(Outcome::Transport("refused".to_owned()));
        assert!(report.has_hard_failure());
        assert!(report.to_string().starts_with("[FAIL] test"));
    }
}
