//! JSON roster snapshots.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use heroforge_domain::Hero;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A timestamped list of heroes, as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSnapshot {
    pub saved_at: DateTime<Utc>,
    pub heroes: Vec<Hero>,
}

impl RosterSnapshot {
    pub fn new(heroes: Vec<Hero>) -> Self {
        Self {
            saved_at: Utc::now(),
            heroes,
        }
    }

    /// Write the snapshot as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), EngineError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| EngineError::roster_io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| EngineError::roster_io(path, e))
    }

    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let json = fs::read_to_string(path).map_err(|e| EngineError::roster_io(path, e))?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heroforge_domain::HeroProfile;

    fn heroes() -> Vec<Hero> {
        let mut flyer = Hero::aerial(
            HeroProfile::new("Carol Danvers", 35, "Female", "Captain Marvel")
                .with_power("Photon Blasts"),
            100_000,
        )
        .unwrap();
        flyer.aerial_mut().unwrap().take_off().unwrap();

        let tech = Hero::technical(
            HeroProfile::new("Bruce Wayne", 40, "Male", "Batman").with_weakness("No Powers"),
            90,
        )
        .unwrap();
        vec![flyer, tech]
    }

    #[test]
    fn save_then_load_in_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshots").join("roster.json");

        let snapshot = RosterSnapshot::new(heroes());
        snapshot.save(&path).unwrap();

        let loaded = RosterSnapshot::load(&path).unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn wire_uses_saved_at_key() {
        let snapshot = RosterSnapshot::new(Vec::new());
        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("savedAt").is_some());
        assert_eq!(json["heroes"], serde_json::json!([]));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RosterSnapshot::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, EngineError::RosterIo { .. }));
    }

    #[test]
    fn corrupt_file_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(&path, r#"{"savedAt": "2024-01-01T00:00:00Z", "heroes": [{"name": ""}]}"#)
            .unwrap();
        let err = RosterSnapshot::load(&path).unwrap_err();
        assert!(matches!(err, EngineError::RosterFormat(_)));
    }
}
