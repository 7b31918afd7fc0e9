use super::*;

// =============================================================
// Phase transitions
// =============================================================

#[test]
fn default_phase_is_idle() {
    let state = DeploymentState::default();
    assert_eq!(state.phase, DeployPhase::Idle);
    assert!(!state.deploying());
    assert!(!state.deployed());
}

#[test]
fn start_enters_deploying() {
    let mut state = DeploymentState::default();
    state.start();
    assert!(state.deploying());
    assert!(!state.deployed());
}

#[test]
fn finish_enters_deployed_and_lifts_suspension() {
    let mut state = DeploymentState::default();
    state.start();

    assert!(state.finish());
    assert!(state.deployed());
    assert!(!state.deploying());
}

// =============================================================
// One-shot celebration
// =============================================================

#[test]
fn finish_reports_transition_only_once() {
    let mut state = DeploymentState::default();
    state.start();

    assert!(state.finish());
    assert!(!state.finish());
}

#[test]
fn deploying_is_only_reentered_by_a_fresh_start() {
    let mut state = DeploymentState::default();
    state.start();
    state.finish();
    assert!(!state.deploying());

    state.start();
    assert!(state.deploying());
    assert!(state.finish());
}
