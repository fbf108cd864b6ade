use crate::core::Action;
use crate::games::gwent::GwentLite;

use super::Agent;

/// A policy that sees only the mover's observation vector.
///
/// Returns a raw action index: `0` passes, `i` plays hand slot `i - 1`.
/// Indices past the end of the hand are read as a pass.
pub trait PolicyAgent {
    fn act(&mut self, observation: &[f32]) -> usize;
}

impl<F> PolicyAgent for F
where
    F: FnMut(&[f32]) -> usize,
{
    fn act(&mut self, observation: &[f32]) -> usize {
        self(observation)
    }
}

/// Runs a `PolicyAgent` as an `Agent`.
#[derive(Clone, Debug)]
pub struct ObservationAgent<P> {
    name: String,
    policy: P,
}

impl<P: PolicyAgent> ObservationAgent<P> {
    pub fn new(name: impl Into<String>, policy: P) -> Self {
        Self {
            name: name.into(),
            policy,
        }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn into_policy(self) -> P {
        self.policy
    }
}

impl<P: PolicyAgent> Agent for ObservationAgent<P> {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_action(&mut self, game: &GwentLite) -> Action {
        let mover = game.current_mover();
        let index = self.policy.act(&game.observe(mover));
        Action::from_index(index, game.hand(mover).len())
    }
}
