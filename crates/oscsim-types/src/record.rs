//! Record exchanged with the external persistence store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::params::{Parameters, SimulationVariant};

/// Saved simulation configuration.
///
/// Serialized as `{id, title, type, parameters, createdAt}`. The engine only
/// relies on `parameters` surviving a round trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub variant: SimulationVariant,
    pub parameters: Parameters,
    pub created_at: DateTime<Utc>,
}

impl SimulationRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        parameters: Parameters,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            variant: parameters.variant(),
            parameters,
            created_at,
        }
    }

    /// Whether the `type` field agrees with the parameter set
    pub fn is_consistent(&self) -> bool {
        self.variant == self.parameters.variant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_json_shape() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let record = SimulationRecord::new(
            "rec-1",
            "My pendulum",
            Parameters::pendulum(2.0, 2.0, 0.5),
            created,
        );
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], "rec-1");
        assert_eq!(json["type"], "pendulum");
        assert_eq!(json["parameters"]["type"], "pendulum");
        assert_eq!(json["createdAt"], "2024-03-01T12:00:00Z");
    }

    #[test]
    fn test_parameters_round_trip_losslessly() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let params = Parameters::spring(0.1 + 0.2, 1.0 / 3.0, std::f64::consts::PI)
            .with_damping(1e-7)
            .with_simulation_speed(0.75);
        let record = SimulationRecord::new("rec-2", "odd values", params, created);

        let text = serde_json::to_string(&record).unwrap();
        let back: SimulationRecord = serde_json::from_str(&text).unwrap();

        assert_eq!(back, record);
        assert_eq!(back.parameters, params);
        assert!(back.is_consistent());
    }
}
