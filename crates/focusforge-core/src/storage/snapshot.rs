//! Snapshot codec for the persisted `AppState`.
//!
//! The snapshot is one JSON object carrying the `AppState` fields plus a
//! `schemaVersion` marker. Snapshots written before the marker existed are
//! version 0 and share the current field layout.
//!
//! Decoding is a field-by-field migration onto `AppState::default()`:
//! a missing field keeps its default, a present field must have the right
//! shape or the whole snapshot is rejected, and unknown keys are dropped.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::SnapshotError;
use crate::model::{AppState, Settings};

/// Current on-disk layout.
pub const SCHEMA_VERSION: u32 = 1;

/// Fixed key the snapshot lives under in the key-value medium.
pub const SNAPSHOT_KEY: &str = "focusforge-data";

const VERSION_FIELD: &str = "schemaVersion";

/// Serialize the full snapshot.
pub fn encode(state: &AppState) -> Result<String, SnapshotError> {
    let mut value = serde_json::to_value(state)?;
    if let Value::Object(map) = &mut value {
        map.insert(VERSION_FIELD.to_string(), Value::from(SCHEMA_VERSION));
    }
    Ok(serde_json::to_string(&value)?)
}

/// Parse and migrate a persisted snapshot.
///
/// # Errors
///
/// Fails closed: malformed JSON, a non-object root, a newer schema version
/// or any known field with the wrong shape rejects the snapshot.
pub fn decode(raw: &str) -> Result<AppState, SnapshotError> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Object(mut map) = value else {
        return Err(SnapshotError::NotAnObject);
    };

    let version = match map.remove(VERSION_FIELD) {
        None => 0,
        Some(v) => v.as_u64().ok_or_else(|| SnapshotError::ShapeMismatch {
            field: VERSION_FIELD,
            source: serde::de::Error::custom("expected an unsigned integer"),
        })?,
    };
    if version > u64::from(SCHEMA_VERSION) {
        return Err(SnapshotError::UnsupportedVersion {
            found: version,
            supported: SCHEMA_VERSION,
        });
    }

    let defaults = AppState::default();
    let settings = field::<Settings>(&mut map, "settings")?
        .map(Settings::clamped)
        .unwrap_or(defaults.settings);

    let state = AppState {
        timer_mode: field(&mut map, "timerMode")?.unwrap_or(defaults.timer_mode),
        is_running: field(&mut map, "isRunning")?.unwrap_or(defaults.is_running),
        remaining_seconds: field(&mut map, "remainingSeconds")?
            .unwrap_or(defaults.remaining_seconds),
        settings,
        tasks: field(&mut map, "tasks")?.unwrap_or_default(),
        notes: field(&mut map, "notes")?.unwrap_or_default(),
        sessions: field(&mut map, "sessions")?.unwrap_or_default(),
        distractions: field(&mut map, "distractions")?.unwrap_or_default(),
        reviews: field(&mut map, "reviews")?.unwrap_or_default(),
        stats: field(&mut map, "stats")?.unwrap_or_default(),
        theme: field(&mut map, "theme")?.unwrap_or(defaults.theme),
        task_priority_filter: field(&mut map, "taskPriorityFilter")?
            .unwrap_or(defaults.task_priority_filter),
    };

    for key in map.keys() {
        tracing::debug!(key = %key, version, "dropping unknown snapshot field");
    }

    Ok(state)
}

/// Take `name` out of the object. `null` counts as absent.
fn field<T: DeserializeOwned>(
    map: &mut Map<String, Value>,
    name: &'static str,
) -> Result<Option<T>, SnapshotError> {
    match map.remove(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|source| SnapshotError::ShapeMismatch {
                field: name,
                source,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BackgroundMusic, Priority, Task, Theme, TimerMode};
    use chrono::{TimeZone, Utc};

    fn sample() -> AppState {
        let mut state = AppState {
            timer_mode: TimerMode::ShortBreak,
            remaining_seconds: 42,
            theme: Theme::Dark,
            ..AppState::default()
        };
        state.settings.background_music = BackgroundMusic::Rainfall;
        state.tasks.push(Task {
            id: "t1".into(),
            title: "Write report".into(),
            priority: Priority::High,
            is_completed: true,
            created_at: Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap(),
        });
        state
    }

    #[test]
    fn encoded_snapshot_carries_version_and_camel_case_fields() {
        let raw = encode(&sample()).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["schemaVersion"], 1);
        assert_eq!(value["timerMode"], "short_break");
        assert_eq!(value["tasks"][0]["isCompleted"], true);
        assert_eq!(decode(&raw).unwrap(), sample());
    }

    #[test]
    fn legacy_snapshot_without_version_fills_defaults() {
        let state = decode(r#"{"theme":"dark","isRunning":true}"#).unwrap();
        assert_eq!(state.theme, Theme::Dark);
        assert!(state.is_running);
        assert_eq!(state.remaining_seconds, 25 * 60);
        assert!(state.tasks.is_empty());
    }

    #[test]
    fn unknown_keys_are_dropped() {
        let state = decode(r#"{"schemaVersion":1,"leaderboard":[1,2,3]}"#).unwrap();
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn out_of_range_settings_are_clamped() {
        let state = decode(r#"{"settings":{"focusDuration":500,"musicVolume":100}}"#).unwrap();
        assert_eq!(state.settings.focus_duration, 120);
        assert_eq!(state.settings.short_break_duration, 5);
    }

    #[test]
    fn wrong_shape_fails_closed() {
        let err = decode(r#"{"tasks":"not a list"}"#).unwrap_err();
        assert!(matches!(err, SnapshotError::ShapeMismatch { field: "tasks", .. }));

        let err = decode(r#"{"timerMode":"nap"}"#).unwrap_err();
        assert!(matches!(err, SnapshotError::ShapeMismatch { field: "timerMode", .. }));
    }

    #[test]
    fn rejects_non_objects_and_future_versions() {
        assert!(matches!(decode("[]"), Err(SnapshotError::NotAnObject)));
        assert!(matches!(decode("{"), Err(SnapshotError::Malformed(_))));
        assert!(matches!(
            decode(r#"{"schemaVersion":7}"#),
            Err(SnapshotError::UnsupportedVersion { found: 7, .. })
        ));
    }
}
