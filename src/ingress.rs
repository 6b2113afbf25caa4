//! MQTT ingress: topic routing and JSON payload decode.
//!
//! Three topics feed the dial. Senders publish whatever subset of fields
//! they currently know, so every payload field is an `Option` and only the
//! fields present in a message overwrite the store; everything else keeps
//! its previous value. A payload that does not parse at all is dropped
//! whole, never applied half-way.

use log::warn;
use serde::Deserialize;

use crate::readings::ReadingStore;

// =============================================================================
// Topics
// =============================================================================

/// Day-ahead PV production forecast.
pub const TOPIC_FORECAST: &str = "energy/irradiance-forecast";

/// Live inverter power readings.
pub const TOPIC_INVERTER: &str = "energy/inverter-telemetry";

/// Battery management system readings.
pub const TOPIC_BATTERY: &str = "energy/battery-telemetry";

/// Wildcard subscription covering all of the above.
pub const SUBSCRIBE_PATTERN: &str = "energy/#";

// =============================================================================
// Payload Models
// =============================================================================

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    pred_pv_power: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct InverterPayload {
    pv_power: Option<u32>,
    ac_power: Option<u32>,
    grid_power: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct BatteryPayload {
    batt_soc: Option<i32>,
    batt_current: Option<f32>,
    batt_temp: Option<f32>,
}

// =============================================================================
// Decoder
// =============================================================================

/// What became of one received publish.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeOutcome {
    /// Parsed; present fields were written to the store.
    Applied,
    /// Topic is not one of ours (the wildcard also matches future topics).
    UnknownTopic,
    /// Payload failed to parse; the store is untouched.
    Malformed,
}

/// Route a publish to its payload model and fold present fields into the
/// store.
pub fn apply_message(store: &mut ReadingStore, topic: &str, payload: &[u8]) -> DecodeOutcome {
    match topic {
        TOPIC_FORECAST => match serde_json::from_slice::<ForecastPayload>(payload) {
            Ok(decoded) => {
                if let Some(watts) = decoded.pred_pv_power {
                    store.set_pred_pv_power(watts);
                }
                DecodeOutcome::Applied
            }
            Err(err) => {
                warn!("dropping malformed forecast payload: {err}");
                DecodeOutcome::Malformed
            }
        },
        TOPIC_INVERTER => match serde_json::from_slice::<InverterPayload>(payload) {
            Ok(decoded) => {
                if let Some(watts) = decoded.pv_power {
                    store.set_pv_power(watts);
                }
                if let Some(watts) = decoded.ac_power {
                    store.set_ac_power(watts);
                }
                if let Some(watts) = decoded.grid_power {
                    store.set_grid_power(watts);
                }
                DecodeOutcome::Applied
            }
            Err(err) => {
                warn!("dropping malformed inverter payload: {err}");
                DecodeOutcome::Malformed
            }
        },
        TOPIC_BATTERY => match serde_json::from_slice::<BatteryPayload>(payload) {
            Ok(decoded) => {
                if let Some(percent) = decoded.batt_soc {
                    store.set_battery_soc(percent);
                }
                if let Some(amps) = decoded.batt_current {
                    store.set_battery_current(amps);
                }
                if let Some(celsius) = decoded.batt_temp {
                    store.set_battery_temp(celsius);
                }
                DecodeOutcome::Applied
            }
            Err(err) => {
                warn!("dropping malformed battery payload: {err}");
                DecodeOutcome::Malformed
            }
        },
        _ => DecodeOutcome::UnknownTopic,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_payload_applies() {
        let mut store = ReadingStore::new();
        let outcome = apply_message(&mut store, TOPIC_FORECAST, b"{\"pred_pv_power\": 6200}");
        assert_eq!(outcome, DecodeOutcome::Applied);
        assert_eq!(store.pred_pv_power(), 6_200);
    }

    #[test]
    fn test_inverter_payload_applies_all_fields() {
        let mut store = ReadingStore::new();
        let outcome = apply_message(
            &mut store,
            TOPIC_INVERTER,
            b"{\"pv_power\": 4300, \"ac_power\": 1250, \"grid_power\": -2100}",
        );
        assert_eq!(outcome, DecodeOutcome::Applied);
        assert_eq!(store.pv_power(), 4_300);
        assert_eq!(store.ac_power(), 1_250);
        assert_eq!(store.grid_power(), -2_100);
    }

    #[test]
    fn test_battery_payload_applies_all_fields() {
        let mut store = ReadingStore::new();
        let outcome = apply_message(
            &mut store,
            TOPIC_BATTERY,
            b"{\"batt_soc\": 81, \"batt_current\": -4.5, \"batt_temp\": 23.8}",
        );
        assert_eq!(outcome, DecodeOutcome::Applied);
        assert_eq!(store.battery_soc(), 81);
        assert_eq!(store.battery_current(), -4.5);
        assert_eq!(store.battery_temp(), 23.8);
    }

    #[test]
    fn test_missing_fields_keep_previous_values() {
        let mut store = ReadingStore::new();
        apply_message(
            &mut store,
            TOPIC_INVERTER,
            b"{\"pv_power\": 4300, \"ac_power\": 1250, \"grid_power\": -2100}",
        );

        // Partial update: only pv_power present.
        let outcome = apply_message(&mut store, TOPIC_INVERTER, b"{\"pv_power\": 4000}");
        assert_eq!(outcome, DecodeOutcome::Applied);
        assert_eq!(store.pv_power(), 4_000);
        assert_eq!(store.ac_power(), 1_250, "absent field must keep its value");
        assert_eq!(store.grid_power(), -2_100, "absent field must keep its value");
    }

    #[test]
    fn test_empty_object_changes_nothing() {
        let mut store = ReadingStore::new();
        apply_message(&mut store, TOPIC_BATTERY, b"{\"batt_soc\": 55}");
        let outcome = apply_message(&mut store, TOPIC_BATTERY, b"{}");
        assert_eq!(outcome, DecodeOutcome::Applied);
        assert_eq!(store.battery_soc(), 55);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut store = ReadingStore::new();
        let outcome = apply_message(
            &mut store,
            TOPIC_FORECAST,
            b"{\"pred_pv_power\": 3100, \"model\": \"icon-d2\", \"run\": 6}",
        );
        assert_eq!(outcome, DecodeOutcome::Applied);
        assert_eq!(store.pred_pv_power(), 3_100);
    }

    #[test]
    fn test_malformed_json_is_dropped_whole() {
        let mut store = ReadingStore::new();
        apply_message(&mut store, TOPIC_INVERTER, b"{\"pv_power\": 4300, \"ac_power\": 1250}");

        let outcome = apply_message(&mut store, TOPIC_INVERTER, b"{\"pv_power\": 99");
        assert_eq!(outcome, DecodeOutcome::Malformed);
        assert_eq!(store.pv_power(), 4_300, "truncated payload must not apply");
        assert_eq!(store.ac_power(), 1_250);
    }

    #[test]
    fn test_wrong_field_type_is_malformed() {
        let mut store = ReadingStore::new();
        store.set_battery_soc(42);
        let outcome = apply_message(&mut store, TOPIC_BATTERY, b"{\"batt_soc\": \"eighty\"}");
        assert_eq!(outcome, DecodeOutcome::Malformed);
        assert_eq!(store.battery_soc(), 42);
    }

    #[test]
    fn test_unknown_topic_is_ignored() {
        let mut store = ReadingStore::new();
        let outcome = apply_message(&mut store, "energy/heatpump-telemetry", b"{\"power\": 900}");
        assert_eq!(outcome, DecodeOutcome::UnknownTopic);
        assert_eq!(store.ac_power(), 0, "foreign topic must not touch the store");
    }

    #[test]
    fn test_negative_grid_power_is_export() {
        let mut store = ReadingStore::new();
        let outcome = apply_message(&mut store, TOPIC_INVERTER, b"{\"grid_power\": -5000}");
        assert_eq!(outcome, DecodeOutcome::Applied);
        assert_eq!(store.grid_power(), -5_000);
    }

    #[test]
    fn test_topics_share_the_wildcard_prefix() {
        let prefix = SUBSCRIBE_PATTERN.trim_end_matches('#');
        for topic in [TOPIC_FORECAST, TOPIC_INVERTER, TOPIC_BATTERY] {
            assert!(topic.starts_with(prefix), "{topic} outside {SUBSCRIBE_PATTERN}");
        }
    }
}
