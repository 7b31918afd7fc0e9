#[cfg(test)]
#[path = "deployment_test.rs"]
mod deployment_test;

/// Deployment lifecycle phase for the whole editing session.
///
/// `Deploying → Idle` is not a defined transition: a deployment either
/// completes or the page is abandoned. `Deployed` is purely informational;
/// the temporary restriction on editing producers ends when it is entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeployPhase {
    #[default]
    Idle,
    Deploying,
    Deployed,
}

/// Deployment lifecycle gate.
///
/// While deploying, the gate acts as a capability mask: editing-surface
/// producers (code tab, undo/redo, save, domain) are hidden rather than
/// blocked, while the chat surface and read-only preview stay active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeploymentState {
    pub phase: DeployPhase,
}

impl DeploymentState {
    /// True while the editing surface must be suspended.
    #[must_use]
    pub fn deploying(self) -> bool {
        self.phase == DeployPhase::Deploying
    }

    /// True once a deployment has completed during this session.
    #[must_use]
    pub fn deployed(self) -> bool {
        self.phase == DeployPhase::Deployed
    }

    /// Enter `Deploying`. Requires a fresh orchestrator event each time.
    pub fn start(&mut self) {
        self.phase = DeployPhase::Deploying;
    }

    /// Enter `Deployed`, re-enabling the suspended editing surface.
    ///
    /// Returns true on the transition into `Deployed` so the caller can fire
    /// the one-shot celebratory signal exactly once.
    pub fn finish(&mut self) -> bool {
        let entered = self.phase != DeployPhase::Deployed;
        self.phase = DeployPhase::Deployed;
        entered
    }
}
