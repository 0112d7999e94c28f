//! Applying resolved actions to the world.
//!
//! Resolution has already checked that exits and items exist, so the only
//! failure a player can run into here is a locked room. Anything else that
//! goes wrong is an [`EngineError`] and leaves the world untouched.

use log::{info, warn};
use rove_core::{Lock, PlayerState, Room, World};

use crate::action::{Action, BlockReason, Outcome, RoomView};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};

/// Apply one action and report what happened.
pub fn apply(world: &mut World, action: Action, config: &EngineConfig) -> EngineResult<Outcome> {
    match action {
        Action::Move(direction) => do_move(world, direction, config),
        Action::Take(item) => do_take(world, item),
        Action::Drop(item) => do_drop(world, item),
        Action::Inspect => Ok(Outcome::RoomView(RoomView::from(current_room(world)?))),
        Action::ShowInventory => Ok(Outcome::Inventory(world.player().inventory.clone())),
        Action::Help => Ok(Outcome::Help),
        Action::Quit => Ok(Outcome::Quit),
    }
}

fn current_room(world: &World) -> EngineResult<&Room> {
    world
        .current_room()
        .ok_or_else(|| EngineError::unknown_room(&world.player().current_room))
}

fn current_room_mut(world: &mut World) -> EngineResult<&mut Room> {
    let name = world.player().current_room.clone();
    world
        .current_room_mut()
        .ok_or_else(|| EngineError::unknown_room(&name))
}

/// The unmet requirement of `lock`, if any.
fn check_lock(lock: Option<&Lock>, player: &PlayerState) -> Option<BlockReason> {
    match lock? {
        Lock::RequiresItem(item) => {
            let wanted = item.to_lowercase();
            let held = player
                .inventory
                .iter()
                .any(|i| i.to_lowercase() == wanted);
            (!held).then(|| BlockReason::MissingItem(item.clone()))
        }
        Lock::RequiresScore(required) => {
            (player.score() < *required).then(|| BlockReason::InsufficientScore {
                required: *required,
                current: player.score(),
            })
        }
    }
}

fn do_move(world: &mut World, direction: String, config: &EngineConfig) -> EngineResult<Outcome> {
    let here = current_room(world)?;
    let target_name = here
        .exit(&direction)
        .ok_or_else(|| {
            EngineError::NotApplicable(format!(
                "room \"{}\" has no exit \"{direction}\"",
                here.name
            ))
        })?
        .to_string();
    let target = world.room(&target_name).ok_or_else(|| {
        let fault = format!(
            "exit \"{direction}\" of room \"{}\" leads to unknown room \"{target_name}\"",
            here.name
        );
        warn!("{fault}");
        EngineError::IntegrityFault(fault)
    })?;

    if let Some(reason) = check_lock(target.lock.as_ref(), world.player()) {
        warn!("blocked from entering \"{target_name}\": {reason}");
        return Ok(Outcome::Blocked { direction, reason });
    }

    let view = RoomView::from(target);
    let gated = world.is_score_gated();
    let player = world.player_mut();
    player.current_room = target_name;
    if gated {
        player.award(config.score_per_entry);
    }
    info!(
        "moved {direction} to \"{}\" (score {})",
        view.name,
        player.score()
    );

    Ok(Outcome::Moved {
        direction,
        room: view,
    })
}

fn do_take(world: &mut World, item: String) -> EngineResult<Outcome> {
    let room = current_room_mut(world)?;
    if !room.remove_item(&item) {
        return Err(EngineError::NotApplicable(format!(
            "there is no {item} in \"{}\"",
            room.name
        )));
    }
    world.player_mut().add_item(item.clone());
    info!("took {item}");
    Ok(Outcome::Took(item))
}

fn do_drop(world: &mut World, item: String) -> EngineResult<Outcome> {
    if !world.player().has_item(&item) {
        return Err(EngineError::NotApplicable(format!("not carrying {item}")));
    }
    current_room_mut(world)?.add_item(item.clone());
    world.player_mut().remove_item(&item);
    info!("dropped {item}");
    Ok(Outcome::Dropped(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_world() -> World {
        let rooms = vec![
            Room::new("Hall", "A cold hall.")
                .with_exit("east", "Vault")
                .with_exit("north", "Garden")
                .with_item("key")
                .with_item("lamp"),
            Room::new("Vault", "Gold glitters.")
                .with_exit("west", "Hall")
                .with_lock(Lock::RequiresItem("key".into())),
            Room::new("Garden", "Roses."),
        ];
        World::new(rooms, "Hall").unwrap()
    }

    fn score_world() -> World {
        let rooms = vec![
            Room::new("Gate", "")
                .with_exit("north", "Yard")
                .with_exit("east", "Keep"),
            Room::new("Yard", "").with_exit("south", "Gate"),
            Room::new("Keep", "").with_lock(Lock::RequiresScore(3)),
        ];
        let mut world = World::new(rooms, "Gate").unwrap();
        world.player_mut().award(1);
        world
    }

    fn cfg() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn move_into_open_room() {
        let mut world = test_world();
        let outcome = apply(&mut world, Action::Move("north".into()), &cfg()).unwrap();
        match outcome {
            Outcome::Moved { direction, room } => {
                assert_eq!(direction, "north");
                assert_eq!(room.name, "Garden");
            }
            other => panic!("expected Moved, got {other:?}"),
        }
        assert_eq!(world.player().current_room, "Garden");
        // No score gating in this world.
        assert_eq!(world.player().score(), 0);
    }

    #[test]
    fn locked_move_changes_nothing() {
        let mut world = test_world();
        let before = world.clone();
        let outcome = apply(&mut world, Action::Move("east".into()), &cfg()).unwrap();
        assert_eq!(
            outcome,
            Outcome::Blocked {
                direction: "east".into(),
                reason: BlockReason::MissingItem("key".into()),
            }
        );
        assert_eq!(world, before);
    }

    #[test]
    fn key_opens_locked_room() {
        let mut world = test_world();
        apply(&mut world, Action::Take("key".into()), &cfg()).unwrap();
        let outcome = apply(&mut world, Action::Move("east".into()), &cfg()).unwrap();
        assert!(matches!(outcome, Outcome::Moved { ref room, .. } if room.name == "Vault"));
        assert_eq!(world.player().current_room, "Vault");
    }

    #[test]
    fn item_lock_ignores_case() {
        let rooms = vec![
            Room::new("Forest", "Snow everywhere.")
                .with_exit("east", "Lodge")
                .with_item("ёлка"),
            Room::new("Lodge", "Warm.").with_lock(Lock::RequiresItem("Ёлка".into())),
        ];
        let mut world = World::new(rooms, "Forest").unwrap();

        apply(&mut world, Action::Take("ёлка".into()), &cfg()).unwrap();
        let outcome = apply(&mut world, Action::Move("east".into()), &cfg()).unwrap();
        assert!(matches!(outcome, Outcome::Moved { ref room, .. } if room.name == "Lodge"));
        assert_eq!(world.player().current_room, "Lodge");
    }

    #[test]
    fn score_gate_blocks_then_opens() {
        let mut world = score_world();
        let outcome = apply(&mut world, Action::Move("east".into()), &cfg()).unwrap();
        assert_eq!(
            outcome,
            Outcome::Blocked {
                direction: "east".into(),
                reason: BlockReason::InsufficientScore {
                    required: 3,
                    current: 1,
                },
            }
        );
        assert_eq!(world.player().score(), 1);

        // Each room entered earns a point.
        apply(&mut world, Action::Move("north".into()), &cfg()).unwrap();
        apply(&mut world, Action::Move("south".into()), &cfg()).unwrap();
        assert_eq!(world.player().score(), 3);

        let outcome = apply(&mut world, Action::Move("east".into()), &cfg()).unwrap();
        assert!(matches!(outcome, Outcome::Moved { .. }));
        assert_eq!(world.player().score(), 4);
    }

    #[test]
    fn score_per_entry_is_configurable() {
        let mut world = score_world();
        let config = EngineConfig::default().with_score_per_entry(5);
        apply(&mut world, Action::Move("north".into()), &config).unwrap();
        assert_eq!(world.player().score(), 6);
    }

    #[test]
    fn take_moves_item_to_inventory() {
        let mut world = test_world();
        let outcome = apply(&mut world, Action::Take("lamp".into()), &cfg()).unwrap();
        assert_eq!(outcome, Outcome::Took("lamp".into()));
        assert_eq!(world.player().inventory, vec!["lamp"]);
        assert_eq!(world.current_room().unwrap().items, vec!["key"]);
    }

    #[test]
    fn take_missing_item_changes_nothing() {
        let mut world = test_world();
        let before = world.clone();
        let err = apply(&mut world, Action::Take("sword".into()), &cfg()).unwrap_err();
        assert!(matches!(err, EngineError::NotApplicable(_)));
        assert_eq!(world, before);
    }

    #[test]
    fn drop_moves_item_to_room() {
        let mut world = test_world();
        apply(&mut world, Action::Take("key".into()), &cfg()).unwrap();
        apply(&mut world, Action::Move("north".into()), &cfg()).unwrap();
        let outcome = apply(&mut world, Action::Drop("key".into()), &cfg()).unwrap();
        assert_eq!(outcome, Outcome::Dropped("key".into()));
        assert!(world.player().inventory.is_empty());
        assert_eq!(world.room("Garden").unwrap().items, vec!["key"]);
    }

    #[test]
    fn drop_unheld_item_changes_nothing() {
        let mut world = test_world();
        let before = world.clone();
        let err = apply(&mut world, Action::Drop("key".into()), &cfg()).unwrap_err();
        assert!(matches!(err, EngineError::NotApplicable(_)));
        assert_eq!(world, before);
    }

    #[test]
    fn inspect_and_inventory_are_read_only() {
        let mut world = test_world();
        let before = world.clone();
        let outcome = apply(&mut world, Action::Inspect, &cfg()).unwrap();
        match outcome {
            Outcome::RoomView(view) => {
                assert_eq!(view.name, "Hall");
                assert_eq!(view.items, vec!["key", "lamp"]);
                assert_eq!(view.exits, vec!["east", "north"]);
            }
            other => panic!("expected RoomView, got {other:?}"),
        }
        assert_eq!(
            apply(&mut world, Action::ShowInventory, &cfg()).unwrap(),
            Outcome::Inventory(vec![])
        );
        assert_eq!(apply(&mut world, Action::Help, &cfg()).unwrap(), Outcome::Help);
        assert_eq!(apply(&mut world, Action::Quit, &cfg()).unwrap(), Outcome::Quit);
        assert_eq!(world, before);
    }

    #[test]
    fn dangling_exit_is_integrity_fault() {
        let mut world = test_world();
        world
            .room_mut("Hall")
            .unwrap()
            .exits
            .insert("down".into(), "Crypt".into());
        let err = apply(&mut world, Action::Move("down".into()), &cfg()).unwrap_err();
        assert!(matches!(err, EngineError::IntegrityFault(_)));
        assert_eq!(world.player().current_room, "Hall");
    }

    #[test]
    fn unknown_current_room_is_integrity_fault() {
        let mut world = test_world();
        world.player_mut().current_room = "Void".into();
        let err = apply(&mut world, Action::Inspect, &cfg()).unwrap_err();
        assert!(matches!(err, EngineError::IntegrityFault(_)));
    }

    #[test]
    fn drop_in_unknown_room_keeps_inventory() {
        let mut world = test_world();
        apply(&mut world, Action::Take("key".into()), &cfg()).unwrap();
        world.player_mut().current_room = "Void".into();
        let err = apply(&mut world, Action::Drop("key".into()), &cfg()).unwrap_err();
        assert!(matches!(err, EngineError::IntegrityFault(_)));
        assert_eq!(world.player().inventory, vec!["key"]);
    }
}
