//! Movement domain: tests for the ability state machine and integrator math.

use super::systems::movement::{dash_momentum, drag_toward_rest, horizontal_cap};
use super::{AbilityState, CoyotePhase, MovementTuning};

// -----------------------------------------------------------------------------
// Jump eligibility
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_jump_then_immediate_retry_is_rejected() {
    let mut state = AbilityState::default();

    assert!(state.can_jump());
    assert!(state.commit_jump());
    assert!(!state.commit_jump());
}

#[test]
fn test_airborne_jump_within_coyote_window() {
    let mut state = AbilityState::default();
    state.set_grounded(false);

    assert_eq!(state.coyote_phase(), CoyotePhase::Armed);
    assert!(state.can_jump());
    assert!(state.commit_jump());
    assert!(!state.can_jump());
}

#[test]
fn test_expired_coyote_blocks_jump_despite_zero_tally() {
    let mut state = AbilityState::default();
    state.set_grounded(false);
    state.expire_coyote_time();

    assert_eq!(state.coyote_phase(), CoyotePhase::Expired);
    assert!(!state.can_jump());
}

#[test]
fn test_leaving_ground_after_jumping_does_not_arm_coyote() {
    let mut state = AbilityState::default();
    assert!(state.commit_jump());
    state.set_grounded(false);

    assert_eq!(state.coyote_phase(), CoyotePhase::Idle);
    assert!(!state.can_jump());
}

#[test]
fn test_rejected_jump_mutates_nothing() {
    let mut state = AbilityState::default();
    state.set_grounded(false);
    state.expire_coyote_time();

    let before = state.clone();
    assert!(!state.commit_jump());
    assert_eq!(state, before);
}

#[test]
fn test_force_jump_bypasses_predicate_but_reports_legality() {
    let mut state = AbilityState::default();
    state.set_grounded(false);
    state.expire_coyote_time();
    assert!(state.commit_fast_fall());

    assert!(!state.can_jump());
    assert!(!state.force_jump());
    // Effect matches a legal jump: fast-fall eligibility is restored.
    assert!(state.can_fast_fall());
}

#[test]
fn test_force_jump_still_consumes_the_airborne_period() {
    let mut state = AbilityState::default();
    assert!(state.force_jump());
    assert!(!state.can_jump());
}

// -----------------------------------------------------------------------------
// Grounding transitions
// -----------------------------------------------------------------------------

#[test]
fn test_landing_edge_resets_all_tallies() {
    let mut state = AbilityState::default();
    assert!(state.commit_jump());
    state.set_grounded(false);
    assert!(state.commit_air_dash());
    state.finish_air_dash();
    assert!(state.commit_fast_fall());

    state.set_grounded(true);

    assert!(state.can_jump());
    assert!(state.can_fast_fall());
    state.set_grounded(false);
    assert!(state.can_air_dash());
}

#[test]
fn test_unchanged_grounding_is_a_no_op() {
    let mut state = AbilityState::default();
    assert!(state.commit_jump());

    // Re-reporting grounded must not count as a fresh landing.
    state.set_grounded(true);
    assert!(!state.can_jump());
}

#[test]
fn test_coyote_rearms_after_full_ground_cycle() {
    let mut state = AbilityState::default();
    state.set_grounded(false);
    state.expire_coyote_time();

    state.set_grounded(true);
    state.set_grounded(false);

    assert_eq!(state.coyote_phase(), CoyotePhase::Armed);
    assert!(state.can_jump());
}

// -----------------------------------------------------------------------------
// Air dash
// -----------------------------------------------------------------------------

#[test]
fn test_air_dash_is_never_legal_on_the_ground() {
    let mut state = AbilityState::default();
    assert!(!state.can_air_dash());

    state.set_grounded(false);
    state.set_grounded(true);
    assert!(!state.can_air_dash());
}

#[test]
fn test_air_dash_once_per_airborne_period() {
    let mut state = AbilityState::default();
    state.set_grounded(false);

    assert!(state.commit_air_dash());
    assert!(state.is_air_dash_active());
    assert!(!state.commit_air_dash());

    assert!(state.finish_air_dash());
    assert!(!state.is_air_dash_active());
    // Finishing the dash does not refund the airborne-period use.
    assert!(!state.can_air_dash());
}

#[test]
fn test_finish_air_dash_is_idempotent() {
    let mut state = AbilityState::default();
    state.set_grounded(false);
    assert!(state.commit_air_dash());

    assert!(state.finish_air_dash());
    assert!(!state.finish_air_dash());
}

#[test]
fn test_landing_clears_an_active_dash() {
    let mut state = AbilityState::default();
    state.set_grounded(false);
    assert!(state.commit_air_dash());

    state.set_grounded(true);

    assert!(!state.is_air_dash_active());
}

// -----------------------------------------------------------------------------
// Fast fall
// -----------------------------------------------------------------------------

#[test]
fn test_fast_fall_once_per_airborne_period() {
    let mut state = AbilityState::default();
    state.set_grounded(false);

    assert!(state.commit_fast_fall());
    assert!(!state.commit_fast_fall());
}

#[test]
fn test_jump_restores_fast_fall_eligibility() {
    let mut state = AbilityState::default();
    state.set_grounded(false);
    assert!(state.commit_fast_fall());
    assert!(!state.can_fast_fall());

    assert!(state.commit_jump());

    assert!(state.can_fast_fall());
}

// -----------------------------------------------------------------------------
// Death
// -----------------------------------------------------------------------------

#[test]
fn test_mark_dead_reports_the_edge_exactly_once() {
    let mut state = AbilityState::default();
    assert!(state.mark_dead());
    assert!(!state.mark_dead());
    assert!(state.is_dead());
}

#[test]
fn test_death_blocks_every_commit_and_mutates_nothing() {
    let mut state = AbilityState::default();
    state.set_grounded(false);
    state.mark_dead();

    let before = state.clone();
    assert!(!state.commit_jump());
    assert!(!state.force_jump());
    assert!(!state.commit_air_dash());
    assert!(!state.commit_fast_fall());
    assert!(!state.finish_air_dash());
    state.set_grounded(true);
    state.expire_coyote_time();
    assert_eq!(state, before);
}

// -----------------------------------------------------------------------------
// Integrator math
// -----------------------------------------------------------------------------

#[test]
fn test_friction_decay_is_monotonic_and_never_overshoots() {
    let tuning = MovementTuning {
        max_speed: 96.0,
        friction: 16.0,
        ..Default::default()
    };
    let dt = 1.0 / 60.0;

    let mut v: f32 = 50.0;
    for _ in 0..10 {
        let next = drag_toward_rest(v, tuning.friction * dt);
        assert!(next < v, "decay must be strictly decreasing, got {next} from {v}");
        assert!(next >= 0.0, "decay must never overshoot past rest");
        v = next;
    }
}

#[test]
fn test_drag_factor_is_clamped_to_unit_interval() {
    // An enormous tick decays straight to rest instead of inverting the sign.
    assert_eq!(drag_toward_rest(50.0, 3.0), 0.0);
    assert_eq!(drag_toward_rest(-50.0, 3.0), 0.0);
    assert_eq!(drag_toward_rest(50.0, -1.0), 50.0);
}

#[test]
fn test_dash_momentum_is_clamped_to_twice_the_boost() {
    let tuning = MovementTuning::default();

    assert_eq!(dash_momentum(0.0, &tuning), tuning.dash_boost);
    assert_eq!(dash_momentum(10_000.0, &tuning), 2.0 * tuning.dash_boost);

    // Inclusive upper bound: exactly at the cap is kept as-is.
    let at_cap = 2.0 * tuning.dash_boost;
    let speed_for_cap = (at_cap - tuning.dash_boost) / tuning.dash_carry;
    assert_eq!(dash_momentum(speed_for_cap, &tuning), at_cap);
}

#[test]
fn test_horizontal_cap_is_boosted_while_dashing() {
    let tuning = MovementTuning::default();
    let mut state = AbilityState::default();

    assert_eq!(horizontal_cap(&state, &tuning), tuning.max_speed);

    state.set_grounded(false);
    assert!(state.commit_air_dash());
    assert_eq!(
        horizontal_cap(&state, &tuning),
        tuning.max_speed * tuning.dash_speed_factor
    );
}

// -----------------------------------------------------------------------------
// Snapshot / replay determinism
// -----------------------------------------------------------------------------

/// One step of a scripted state tape for the replay test.
#[derive(Clone, Copy)]
enum Op {
    Ground(bool),
    Jump,
    AirDash,
    FinishDash,
    FastFall,
    ExpireCoyote,
}

fn apply(state: &mut AbilityState, op: Op) {
    match op {
        Op::Ground(g) => state.set_grounded(g),
        Op::Jump => {
            state.commit_jump();
        }
        Op::AirDash => {
            state.commit_air_dash();
        }
        Op::FinishDash => {
            state.finish_air_dash();
        }
        Op::FastFall => {
            state.commit_fast_fall();
        }
        Op::ExpireCoyote => state.expire_coyote_time(),
    }
}

#[test]
fn test_snapshot_restore_and_replay_reproduce_identical_states() {
    // Drive a character mid-flight, snapshot it, then replay the same tape
    // against the live state and the restored copy in lockstep.
    let mut live = AbilityState::default();
    for op in [Op::Jump, Op::Ground(false), Op::FastFall] {
        apply(&mut live, op);
    }

    let snapshot = ron::ser::to_string(&live).expect("ability state serializes");
    let mut restored: AbilityState = ron::de::from_str(&snapshot).expect("snapshot restores");
    assert_eq!(live, restored);

    let tape = [
        Op::Ground(true),
        Op::Ground(false),
        Op::AirDash,
        Op::FinishDash,
        Op::Jump,
        Op::ExpireCoyote,
        Op::FastFall,
        Op::Ground(true),
        Op::Ground(false),
        Op::Jump,
    ];
    for op in tape {
        apply(&mut live, op);
        apply(&mut restored, op);
        assert_eq!(live, restored);
    }
}
