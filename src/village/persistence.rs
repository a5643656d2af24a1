//! JSON save/load for the village roster
//!
//! The on-disk format is a single JSON array of flat records. Each record
//! carries the common fields plus a `role` discriminator; variant-specific
//! fields are written only when the role defines them and default to zero
//! when absent on read, so older or hand-edited files still load.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, VillageError};
use crate::inhabitant::{Inhabitant, Role};
use crate::village::Village;

/// Flat on-disk shape of one inhabitant.
#[derive(Debug, Serialize, Deserialize)]
struct InhabitantRecord {
    name: String,
    level: i32,
    health: i32,
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    houses: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mob_kills: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    boss_kills: Option<i32>,
}

impl From<&Inhabitant> for InhabitantRecord {
    fn from(inhabitant: &Inhabitant) -> Self {
        let (houses, mob_kills, boss_kills) = match *inhabitant.role() {
            Role::Builder { houses } => (Some(houses), None, None),
            Role::Warrior {
                mob_kills,
                boss_kills,
            } => (None, Some(mob_kills), Some(boss_kills)),
            Role::Worker | Role::Mage => (None, None, None),
        };
        Self {
            name: inhabitant.name.clone(),
            level: inhabitant.level,
            health: inhabitant.health,
            role: inhabitant.role().name().to_string(),
            houses,
            mob_kills,
            boss_kills,
        }
    }
}

impl InhabitantRecord {
    /// Rebuild the concrete variant from the discriminator, defaulting any
    /// variant field the record does not carry.
    fn into_inhabitant(self) -> Result<Inhabitant> {
        let inhabitant = match self.role.as_str() {
            "Worker" => Inhabitant::worker(self.name, self.level, self.health),
            "Builder" => Inhabitant::builder(
                self.name,
                self.level,
                self.health,
                self.houses.unwrap_or(0),
            ),
            "Warrior" => Inhabitant::warrior(
                self.name,
                self.level,
                self.health,
                self.mob_kills.unwrap_or(0),
                self.boss_kills.unwrap_or(0),
            ),
            "Mage" => Inhabitant::mage(self.name, self.level, self.health),
            other => return Err(VillageError::UnknownRole(other.to_string())),
        };
        Ok(inhabitant)
    }
}

/// Serialize the whole roster to a pretty-printed JSON array.
pub fn to_json(village: &Village) -> Result<String> {
    let records: Vec<InhabitantRecord> = village.iter().map(InhabitantRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Parse a JSON array into inhabitants, dispatching on each record's role.
pub fn from_json(json: &str) -> Result<Vec<Inhabitant>> {
    let records: Vec<InhabitantRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .map(InhabitantRecord::into_inhabitant)
        .collect()
}

/// Write the roster to `path`, replacing any existing file.
pub fn save_to_file(village: &Village, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, to_json(village)?)?;
    tracing::info!(path = %path.display(), count = village.len(), "village saved");
    Ok(())
}

/// Reload the roster from `path`, replacing the registry's contents.
///
/// A missing file leaves the registry untouched. Any IO or parse failure
/// also leaves prior contents intact, since records are fully decoded
/// before the swap.
pub fn load_from_file(village: &mut Village, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!(path = %path.display(), "no saved village, keeping current roster");
        return Ok(());
    }
    let json = std::fs::read_to_string(path)?;
    let inhabitants = from_json(&json)?;
    let count = inhabitants.len();
    village.replace_all(inhabitants);
    tracing::info!(path = %path.display(), count, "village loaded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_village() -> Village {
        let mut village = Village::new();
        village
            .add(Inhabitant::warrior("Martin", 12, 20, 5, 1))
            .unwrap();
        village
            .add(Inhabitant::builder("Sonya", 18, 25, 12))
            .unwrap();
        village.add(Inhabitant::mage("Pedro", 25, 20)).unwrap();
        village.add(Inhabitant::worker("Vojgrc", 10, 15)).unwrap();
        village
    }

    #[test]
    fn json_round_trip_preserves_order_and_fields() {
        let village = sample_village();
        let json = to_json(&village).unwrap();

        let reloaded = from_json(&json).unwrap();
        let original: Vec<Inhabitant> = village.iter().cloned().collect();
        assert_eq!(reloaded, original);
    }

    #[test]
    fn variant_fields_are_omitted_when_the_role_lacks_them() {
        let mut village = Village::new();
        village.add(Inhabitant::mage("Pedro", 25, 20)).unwrap();
        let json = to_json(&village).unwrap();
        assert!(!json.contains("houses"));
        assert!(!json.contains("mob_kills"));
        assert!(json.contains("\"role\": \"Mage\""));
    }

    #[test]
    fn missing_boss_kills_defaults_to_zero() {
        let json = r#"[
            { "name": "Martin", "level": 12, "health": 20,
              "role": "Warrior", "mob_kills": 5 }
        ]"#;
        let inhabitants = from_json(json).unwrap();
        assert_eq!(inhabitants.len(), 1);
        assert_eq!(
            *inhabitants[0].role(),
            Role::Warrior {
                mob_kills: 5,
                boss_kills: 0
            }
        );
    }

    #[test]
    fn missing_houses_defaults_to_zero() {
        let json = r#"[
            { "name": "Johny", "level": 14, "health": 20, "role": "Builder" }
        ]"#;
        let inhabitants = from_json(json).unwrap();
        assert_eq!(*inhabitants[0].role(), Role::Builder { houses: 0 });
    }

    #[test]
    fn unknown_role_is_a_parse_error() {
        let json = r#"[
            { "name": "Steve", "level": 1, "health": 1, "role": "Alchemist" }
        ]"#;
        let result = from_json(json);
        assert!(matches!(
            result,
            Err(VillageError::UnknownRole(ref role)) if role == "Alchemist"
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = from_json("{ not json ]");
        assert!(matches!(result, Err(VillageError::SerdeError(_))));
    }

    #[test]
    fn load_from_missing_file_keeps_the_current_roster() {
        let mut village = sample_village();
        let before = village.len();
        load_from_file(&mut village, "definitely/not/a/real/path.json").unwrap();
        assert_eq!(village.len(), before);
    }
}
