//! Weapon resolvers: `punch`, `axe_attack`, `knife_attack`.

use super::{Participant, ResolveCx};
use crate::GameConfig;
use crate::env::shuffle;
use crate::replay::{ActionEvent, PlayerEvent, ReplayEvent, TargetEntry};
use crate::targeting::{TargetOptions, collect_targets};

pub fn resolve_punch(
    cx: &mut ResolveCx<'_>,
    participants: &[Participant],
    events: &mut Vec<ReplayEvent>,
) {
    resolve_weapon(cx, participants, GameConfig::PUNCH_DAMAGE, events);
}

pub fn resolve_axe(
    cx: &mut ResolveCx<'_>,
    participants: &[Participant],
    events: &mut Vec<ReplayEvent>,
) {
    resolve_weapon(cx, participants, GameConfig::AXE_DAMAGE, events);
}

pub fn resolve_knife(
    cx: &mut ResolveCx<'_>,
    participants: &[Participant],
    events: &mut Vec<ReplayEvent>,
) {
    resolve_weapon(cx, participants, GameConfig::KNIFE_DAMAGE, events);
}

/// Shared weapon semantics.
///
/// Attackers resolve in a uniformly shuffled order so simultaneous attacks
/// never favor a roster position. Damage against a protected target is
/// reduced by `ceil(base / 3)`, floored at the target's remaining health;
/// the elimination flag is set only on the killing blow.
fn resolve_weapon(
    cx: &mut ResolveCx<'_>,
    participants: &[Participant],
    base_damage: u32,
    events: &mut Vec<ReplayEvent>,
) {
    let mut order: Vec<&Participant> = participants.iter().collect();
    shuffle(cx.rng, &mut order);

    for participant in order {
        let Some(origin) = cx
            .state
            .character(&participant.player)
            .and_then(|c| c.position.clone())
        else {
            continue;
        };
        let targets = collect_targets(
            cx.state,
            &participant.player,
            cx.def,
            &participant.plan,
            &TargetOptions::single(),
            cx.rng,
        );
        let Some(target_id) = targets.into_iter().next() else {
            continue;
        };
        let Some(target) = cx.state.character_mut(&target_id) else {
            continue;
        };

        let damage = if target.is_protected() {
            base_damage.saturating_sub(base_damage.div_ceil(GameConfig::PROTECT_DIVISOR))
        } else {
            base_damage
        };
        let target_position = target.position.clone();
        let (taken, eliminated) = target.apply_damage(damage);

        let mut entry = TargetEntry::new(target_id);
        entry.damage_taken = Some(taken);
        if eliminated {
            entry.eliminated = Some(true);
        }

        let mut action = ActionEvent::new(cx.def.kind);
        action.origin_location = Some(origin);
        action.target_location = target_position;
        action.damage_dealt = Some(taken);
        events.push(ReplayEvent::Player(PlayerEvent {
            actor_id: participant.player.clone(),
            action,
            targets: vec![entry],
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::dispatch_action;
    use crate::env::{
        ActionCatalog, ActionCategory, ActionDefinition, ActionKind, ActionTag, LocationCatalog,
        SplitMixRng,
    };
    use crate::state::{
        AxialCoord, Condition, EnergyMeter, ItemKind, LocationType, MapSnapshot, MatchId,
        MatchSettings, MatchState, Meter, PlannedAction, PlayerCharacter, PlayerId, Position,
        TileId, TileSnapshot,
    };

    fn definition(kind: ActionKind) -> ActionDefinition {
        ActionDefinition {
            kind,
            energy_cost: 0,
            cooldown: 0,
            range: vec![0, 1],
            category: ActionCategory::Combat,
            tags: vec![ActionTag::Attack],
            order: 0,
            sub_order: 0,
            developed: true,
        }
    }

    fn arena(characters: Vec<PlayerCharacter>) -> MatchState {
        let map = MapSnapshot {
            tiles: vec![TileSnapshot {
                id: TileId::from("t0"),
                coord: AxialCoord::new(0, 0),
                location: LocationType::Meadow,
                walkable: true,
                item_ids: Vec::new(),
            }],
        };
        let mut state = MatchState::new(MatchId::from("m1"), map, MatchSettings::default());
        for c in characters {
            state.join(c);
        }
        state
    }

    fn fighter(id: &str, health: Meter) -> PlayerCharacter {
        let mut c = PlayerCharacter::new(
            PlayerId::from(id),
            health,
            EnergyMeter::new(20, 30),
            Meter::new(0, 50),
        );
        c.position = Some(Position {
            tile_id: TileId::from("t0"),
            coord: AxialCoord::new(0, 0),
        });
        c
    }

    fn run(state: &mut MatchState, kind: ActionKind) -> Vec<ReplayEvent> {
        let def = definition(kind);
        let catalog = ActionCatalog::new([def.clone()]);
        let locations = LocationCatalog::default();
        let mut rng = SplitMixRng::new(9);
        let mut cx = ResolveCx {
            state,
            catalog: &catalog,
            locations: &locations,
            rng: &mut rng,
            turn: 0,
            def: &def,
        };
        dispatch_action(&mut cx, kind)
    }

    #[test]
    fn punch_against_protected_target_deals_one() {
        let mut attacker = fighter("alice", Meter::full(12));
        attacker.plan.main =
            Some(PlannedAction::new(ActionKind::Punch).against(PlayerId::from("bob")));
        let mut victim = fighter("bob", Meter::full(12));
        victim.conditions.insert(Condition::PROTECTED);
        let mut state = arena(vec![attacker, victim]);

        let events = run(&mut state, ActionKind::Punch);

        // 2 - ceil(2/3) = 1.
        let entry = &events[0].as_player().unwrap().targets[0];
        assert_eq!(entry.damage_taken, Some(1));
        assert_eq!(
            state
                .character(&PlayerId::from("bob"))
                .unwrap()
                .health
                .current,
            11
        );
    }

    #[test]
    fn axe_hits_for_eight_and_eliminates_exactly_once() {
        let mut attacker = fighter("alice", Meter::full(12));
        attacker.inventory.add(ItemKind::Axe, 3);
        attacker.plan.main =
            Some(PlannedAction::new(ActionKind::AxeAttack).against(PlayerId::from("bob")));
        let victim = fighter("bob", Meter::new(10, 12));
        let mut state = arena(vec![attacker, victim]);

        let events = run(&mut state, ActionKind::AxeAttack);
        let entry = &events[0].as_player().unwrap().targets[0];
        assert_eq!(entry.damage_taken, Some(8));
        assert_eq!(entry.eliminated, None);
        assert_eq!(
            state
                .character(&PlayerId::from("bob"))
                .unwrap()
                .health
                .current,
            2
        );

        // Second swing: only 2 health left, damage floors there and the
        // elimination flag fires on this transition.
        let mut state = {
            let attacker = {
                let mut a = fighter("alice", Meter::full(12));
                a.inventory.add(ItemKind::Axe, 1);
                a.plan.main =
                    Some(PlannedAction::new(ActionKind::AxeAttack).against(PlayerId::from("bob")));
                a
            };
            let victim = fighter("bob", Meter::new(2, 12));
            arena(vec![attacker, victim])
        };
        let events = run(&mut state, ActionKind::AxeAttack);
        let entry = &events[0].as_player().unwrap().targets[0];
        assert_eq!(entry.damage_taken, Some(2));
        assert_eq!(entry.eliminated, Some(true));
        assert!(state.character(&PlayerId::from("bob")).unwrap().is_dead());
    }

    #[test]
    fn attack_without_any_target_emits_nothing() {
        let mut attacker = fighter("alice", Meter::full(12));
        attacker.plan.main = Some(PlannedAction::new(ActionKind::Punch));
        let mut state = arena(vec![attacker]);

        let events = run(&mut state, ActionKind::Punch);
        assert!(events.is_empty());
    }
}
