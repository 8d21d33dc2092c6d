//! End-to-end turn resolution through the service layer.

mod common;

use common::{character_at, match_with};

use longnight_content::load_default_catalogs;
use longnight_core::{
    ActionKind, Condition, MatchId, MatchState, PlanKey, PlannedAction, PlayerId,
};
use longnight_runtime::{
    InMemoryMatchRepo, InMemoryReplayRepo, SeededRng, SubmissionError, TurnService,
    TurnServiceError,
};

fn service() -> TurnService<InMemoryMatchRepo, InMemoryReplayRepo> {
    common::init_tracing();
    let (catalog, locations) = load_default_catalogs().expect("content parses");
    TurnService::new(
        InMemoryMatchRepo::new(),
        InMemoryReplayRepo::new(),
        catalog,
        locations,
    )
}

fn brawl_match(id: &str) -> MatchState {
    // Alice and Bob share t0; Dave is far out of view on t4.
    let mut alice = character_at("alice", "t0", 0);
    alice.plan.main = Some(PlannedAction::new(ActionKind::Punch).against(PlayerId::from("bob")));
    let mut bob = character_at("bob", "t0", 0);
    bob.plan.main = Some(PlannedAction::new(ActionKind::Protect));
    let dave = character_at("dave", "t4", 4);
    match_with(id, vec![alice, bob, dave])
}

#[test]
fn guard_raised_this_turn_blunts_this_turns_punch() {
    let service = service();
    let match_id = MatchId::from("m1");
    service.create_match(brawl_match("m1"));

    let mut rng = SeededRng::new(42);
    let outcome = service.resolve_current_turn(&match_id, &mut rng).unwrap();
    assert!(outcome.advanced);
    assert_eq!(outcome.resolved_turn, Some(0));

    let (state, _) = service.read_match(&match_id).unwrap();
    let bob = state.character(&PlayerId::from("bob")).unwrap();
    assert!(bob.conditions.contains(Condition::PROTECTED));
    // Protect dispatches before punch: 2 - ceil(2/3) = 1 damage.
    assert_eq!(bob.health.current, 9);

    let punch = outcome
        .events
        .iter()
        .filter_map(|e| e.as_player())
        .find(|e| e.action.action_id == ActionKind::Punch)
        .expect("punch event");
    assert_eq!(punch.targets[0].damage_taken, Some(1));
}

#[test]
fn identical_seeds_resolve_identically() {
    let run = |seed: u64| {
        let service = service();
        let match_id = MatchId::from("m1");
        let mut state = brawl_match("m1");
        // A bot in the mix exercises the decision engine's draws too.
        state.join(character_at("bot0", "t0", 0));
        service.create_match(state);

        let mut rng = SeededRng::new(seed);
        let outcome = service.resolve_current_turn(&match_id, &mut rng).unwrap();
        let (state, _) = service.read_match(&match_id).unwrap();
        (outcome.events, state.digest())
    };

    let (events_a, digest_a) = run(7);
    let (events_b, digest_b) = run(7);
    assert_eq!(events_a, events_b);
    assert_eq!(hex::encode(digest_a), hex::encode(digest_b));
}

#[test]
fn replay_is_persisted_and_tailored_per_viewer() {
    let service = service();
    let match_id = MatchId::from("m1");
    service.create_match(brawl_match("m1"));

    let mut rng = SeededRng::new(42);
    service.resolve_current_turn(&match_id, &mut rng).unwrap();

    // Bob stood next to the action: sees the punch.
    let bob_view = service
        .replay_for_viewer(&match_id, 0, &PlayerId::from("bob"))
        .unwrap();
    assert!(
        bob_view
            .iter()
            .filter_map(|e| e.as_player())
            .any(|e| e.action.action_id == ActionKind::Punch)
    );

    // Dave is four hexes away with view distance two: sees nothing.
    let dave_view = service
        .replay_for_viewer(&match_id, 0, &PlayerId::from("dave"))
        .unwrap();
    assert!(dave_view.is_empty());
}

#[test]
fn undiscovered_items_are_invisible_in_tailored_snapshots() {
    let service = service();
    let match_id = MatchId::from("m1");

    let mut seeker = character_at("alice", "t0", 0);
    seeker.plan.main = Some(PlannedAction::new(ActionKind::Search));
    let bystander = character_at("bob", "t0", 0);
    service.create_match(match_with("m1", vec![seeker, bystander]));

    let mut rng = SeededRng::new(3);
    service.resolve_current_turn(&match_id, &mut rng).unwrap();

    let alice_view = service
        .match_for_player(&match_id, &PlayerId::from("alice"))
        .unwrap();
    // Three items on the tile, base search yield five: all discovered.
    assert_eq!(alice_view.items.len(), 3);

    let bob_view = service
        .match_for_player(&match_id, &PlayerId::from("bob"))
        .unwrap();
    assert!(bob_view.items.is_empty());
    assert!(bob_view.map.tiles[0].item_ids.is_empty());
}

#[test]
fn submission_validation_rejects_bad_plans_up_front() {
    let service = service();
    let match_id = MatchId::from("m1");
    service.create_match(match_with("m1", vec![character_at("alice", "t0", 0)]));

    // Combat in the secondary slot is refused.
    let err = service
        .submit_plan(
            &match_id,
            &PlayerId::from("alice"),
            PlanKey::Secondary,
            PlannedAction::new(ActionKind::Punch),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        TurnServiceError::Submission(SubmissionError::WrongSlot(ActionKind::Punch))
    ));

    // Unknown player.
    let err = service
        .submit_plan(
            &match_id,
            &PlayerId::from("ghost"),
            PlanKey::Main,
            PlannedAction::new(ActionKind::Sleep),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        TurnServiceError::Submission(SubmissionError::UnknownPlayer(_))
    ));

    // A valid submission lands in the slot and marks the player ready.
    service
        .submit_plan(
            &match_id,
            &PlayerId::from("alice"),
            PlanKey::Main,
            PlannedAction::new(ActionKind::Sleep),
        )
        .unwrap();
    let (state, _) = service.read_match(&match_id).unwrap();
    assert_eq!(state.ready.get(&PlayerId::from("alice")), Some(&true));
    assert_eq!(
        state
            .character(&PlayerId::from("alice"))
            .unwrap()
            .plan
            .main
            .as_ref()
            .map(|p| p.action),
        Some(ActionKind::Sleep)
    );
}

#[test]
fn cooldown_submissions_are_rejected_until_expiry() {
    let service = service();
    let match_id = MatchId::from("m1");

    let mut scarer = character_at("alice", "t0", 0);
    scarer.plan.main = Some(
        PlannedAction::new(ActionKind::Scare)
            .against(PlayerId::from("bob"))
            .at(longnight_core::TileId::from("t1")),
    );
    let bob = character_at("bob", "t0", 0);
    service.create_match(match_with("m1", vec![scarer, bob]));

    let mut rng = SeededRng::new(5);
    service.resolve_current_turn(&match_id, &mut rng).unwrap();

    // Scare carries a two-turn cooldown; re-submitting right away fails.
    let err = service
        .submit_plan(
            &match_id,
            &PlayerId::from("alice"),
            PlanKey::Main,
            PlannedAction::new(ActionKind::Scare),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        TurnServiceError::Submission(SubmissionError::OnCooldown { .. })
    ));
}

#[test]
fn joining_drops_the_character_onto_walkable_ground() {
    let service = service();
    let match_id = MatchId::from("m1");
    service.create_match(match_with("m1", vec![]));

    let mut joiner = character_at("erin", "t0", 0);
    joiner.position = None;
    let mut rng = SeededRng::new(11);
    service.join_match(&match_id, joiner, &mut rng).unwrap();

    let (state, _) = service.read_match(&match_id).unwrap();
    let erin = state.character(&PlayerId::from("erin")).unwrap();
    let position = erin.position.as_ref().expect("spawned");
    assert!(
        state
            .map
            .tile(&position.tile_id)
            .is_some_and(|t| t.walkable)
    );
}

#[test]
fn resolving_a_removed_match_changes_nothing() {
    let service = service();
    let match_id = MatchId::from("m1");
    let mut state = match_with("m1", vec![character_at("alice", "t0", 0)]);
    state.removed = true;
    service.create_match(state);

    let mut rng = SeededRng::new(1);
    let outcome = service.resolve_current_turn(&match_id, &mut rng).unwrap();
    assert!(!outcome.advanced);
    assert!(outcome.events.is_empty());
    assert!(
        service
            .replay_for_viewer(&match_id, 0, &PlayerId::from("alice"))
            .is_none()
    );
}
