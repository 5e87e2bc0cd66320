//! JSON API for ideal team generation
//!
//! String-in / string-out entry points for UI layers that cannot call the
//! Rust API directly. Output is byte-identical for identical requests.

use crate::error::{Result, RosterError};
use crate::generator::{generate_ideal_team, IdealTeamSlot};
use crate::models::{validate_roster, CardId, Formation, FormationSlot, Player};
use crate::SCHEMA_VERSION;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Ideal team request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct IdealTeamRequest {
    pub schema_version: u8,
    pub players: Vec<Player>,
    pub formation: FormationRequest,
    #[serde(default)]
    pub discarded_card_ids: Vec<CardId>,
}

/// Formation as sent by the caller; validated into a [`Formation`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FormationRequest {
    pub name: String,
    pub slots: Vec<FormationSlot>,
}

/// Ideal team response
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct IdealTeamResponse {
    pub schema_version: u8,
    pub formation_name: String,
    pub slots: Vec<IdealTeamSlot>,
    pub vacancies: usize,
    /// SHA-256 of the serialized slots, hex encoded.
    pub digest: String,
}

/// Structured API error with a stable code
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl From<&RosterError> for ApiError {
    fn from(err: &RosterError) -> Self {
        Self { code: err.code().to_string(), message: err.to_string() }
    }
}

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// Parses, validates and answers an ideal team request.
pub fn generate_ideal_team_json(request_json: &str) -> Result<String> {
    let response = answer(request_json)?;
    Ok(serde_json::to_string(&response)?)
}

/// Like [`generate_ideal_team_json`] but never fails: errors are reported
/// inside an [`ApiResponse`] envelope.
pub fn handle_ideal_team_json(request_json: &str) -> String {
    let envelope = match answer(request_json) {
        Ok(response) => ApiResponse { success: true, data: Some(response), error: None },
        Err(err) => ApiResponse { success: false, data: None, error: Some(ApiError::from(&err)) },
    };

    serde_json::to_string(&envelope).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"data":null,"error":{{"code":"SERIALIZATION_ERROR","message":"{}"}}}}"#,
            e
        )
    })
}

/// JSON schema of [`IdealTeamRequest`].
pub fn ideal_team_request_schema() -> Result<serde_json::Value> {
    let schema = schemars::schema_for!(IdealTeamRequest);
    Ok(serde_json::to_value(schema)?)
}

fn answer(request_json: &str) -> Result<IdealTeamResponse> {
    let request: IdealTeamRequest = serde_json::from_str(request_json).map_err(|e| {
        warn!(error = %e, "rejected malformed ideal team request");
        RosterError::from(e)
    })?;

    if request.schema_version != SCHEMA_VERSION {
        warn!(found = request.schema_version, expected = SCHEMA_VERSION, "unsupported schema version");
        return Err(RosterError::UnsupportedSchema {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    validate_roster(&request.players).inspect_err(|e| warn!(error = %e, "rejected roster"))?;

    let formation = Formation::new(request.formation.name, request.formation.slots)
        .inspect_err(|e| warn!(error = %e, "rejected formation"))?;

    let discarded: HashSet<CardId> = request.discarded_card_ids.into_iter().collect();
    let team = generate_ideal_team(&request.players, &formation, &discarded);

    let slots_json = serde_json::to_string(&team.slots)?;
    let digest = sha256_hex(slots_json.as_bytes());
    debug!(digest = %digest, "ideal team digest");

    Ok(IdealTeamResponse {
        schema_version: SCHEMA_VERSION,
        formation_name: formation.name.clone(),
        vacancies: team.vacancy_count(),
        slots: team.slots,
        digest,
    })
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
