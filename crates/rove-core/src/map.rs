//! JSON map loading.
//!
//! Two layouts are accepted. The legacy layout is a bare array of rooms that
//! starts the player in the first room:
//!
//! ```json
//! [
//!   { "name": "Hall", "desc": "A hall.", "exits": { "east": 1 }, "items": ["key"] },
//!   { "name": "Study", "desc": "A study.", "exits": { "west": 0 }, "pointstoenter": 2 }
//! ]
//! ```
//!
//! The object layout wraps the rooms and can name the start room. Exits may
//! point at a room by index or by name:
//!
//! ```json
//! {
//!   "start": "Hall",
//!   "rooms": [
//!     { "name": "Hall", "desc": "A hall.", "exits": { "east": "Study" } },
//!     { "name": "Study", "desc": "A study.", "exits": { "west": "Hall" }, "lock": { "item": "key" } }
//!   ]
//! }
//! ```

use std::path::Path;

use indexmap::IndexMap;
use log::{debug, info};
use serde::{Deserialize, Deserializer};

use crate::error::{CoreError, CoreResult};
use crate::room::{Lock, Room};
use crate::world::World;

/// Where an exit leads, as written in the map file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExitTarget {
    Index(usize),
    Name(String),
}

#[derive(Debug, Deserialize)]
struct RoomSpec {
    name: String,
    #[serde(alias = "description")]
    desc: String,
    #[serde(default)]
    exits: IndexMap<String, ExitTarget>,
    #[serde(default)]
    items: Vec<String>,
    #[serde(default)]
    lock: Option<Lock>,
    #[serde(default, deserialize_with = "legacy_points")]
    pointstoenter: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct MapDocument {
    #[serde(default)]
    start: Option<String>,
    rooms: Vec<RoomSpec>,
}

/// Older maps store `pointstoenter` either as a number or a numeric string.
fn legacy_points<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Points {
        Number(u32),
        Text(String),
    }

    match Points::deserialize(deserializer)? {
        Points::Number(n) => Ok(Some(n)),
        Points::Text(s) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid pointstoenter value \"{s}\""))),
    }
}

/// Read and validate a map file.
pub fn load_map(path: &Path) -> CoreResult<World> {
    let source = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let world = parse_map(&source)?;
    info!(
        "loaded {} rooms from {}",
        world.room_count(),
        path.display()
    );
    Ok(world)
}

/// Parse and validate a map from JSON text.
pub fn parse_map(source: &str) -> CoreResult<World> {
    let value: serde_json::Value = serde_json::from_str(source)?;
    let (specs, start) = match value {
        serde_json::Value::Array(_) => (Vec::<RoomSpec>::deserialize(value)?, None),
        serde_json::Value::Object(_) => {
            let doc = MapDocument::deserialize(value)?;
            (doc.rooms, doc.start)
        }
        _ => return Err(CoreError::UnexpectedShape),
    };

    if specs.is_empty() {
        return Err(CoreError::EmptyMap);
    }

    let names: Vec<String> = specs.iter().map(|s| s.name.clone()).collect();
    let start = start.unwrap_or_else(|| names[0].clone());

    let rooms = specs
        .into_iter()
        .map(|spec| build_room(spec, &names))
        .collect::<CoreResult<Vec<_>>>()?;

    debug!("parsed {} room specs, start room \"{start}\"", rooms.len());
    World::new(rooms, &start)
}

fn build_room(spec: RoomSpec, names: &[String]) -> CoreResult<Room> {
    let lock = match (spec.lock, spec.pointstoenter) {
        (Some(_), Some(_)) => return Err(CoreError::ConflictingLocks(spec.name)),
        (Some(lock), None) => Some(lock),
        (None, Some(points)) => Some(Lock::RequiresScore(points)),
        (None, None) => None,
    };

    let mut exits = IndexMap::with_capacity(spec.exits.len());
    for (direction, target) in spec.exits {
        let resolved = match target {
            ExitTarget::Index(i) => names.get(i).cloned().ok_or_else(|| CoreError::DanglingExit {
                room: spec.name.clone(),
                direction: direction.clone(),
                target: format!("#{i}"),
            })?,
            ExitTarget::Name(name) => {
                if !names.contains(&name) {
                    return Err(CoreError::DanglingExit {
                        room: spec.name.clone(),
                        direction,
                        target: format!("\"{name}\""),
                    });
                }
                name
            }
        };
        exits.insert(direction, resolved);
    }

    Ok(Room {
        name: spec.name,
        description: spec.desc,
        exits,
        items: spec.items,
        lock,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Distinct exit names in a random order.
    fn shuffled_directions() -> impl Strategy<Value = Vec<String>> {
        prop::collection::btree_set("[a-z]{1,8}", 1..8)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
    }

    proptest! {
        #[test]
        fn exit_order_survives_loading(directions in shuffled_directions()) {
            let exits = directions
                .iter()
                .map(|d| format!("\"{d}\": 0"))
                .collect::<Vec<_>>()
                .join(", ");
            let source = format!(r#"[{{ "name": "Hub", "desc": "", "exits": {{ {exits} }} }}]"#);

            let world = parse_map(&source).unwrap();
            let loaded = world.room("Hub").unwrap().directions();
            prop_assert_eq!(loaded, directions.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
