//! Action representation.
//!
//! On the wire an action is a small integer: `0` passes, `i` in
//! `1..=hand_size` plays the card in hand slot `i - 1`. Inside the crate it is
//! the tagged `Action` enum. Any index past the end of the mover's hand is
//! read as a pass, never rejected; external agents rely on that.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A move for the current mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Leave the round.
    Pass,
    /// Play the card at this 0-based hand slot.
    Play(usize),
}

impl Action {
    /// Decode a raw action index against the mover's hand size.
    ///
    /// ```
    /// use gwent_lite::core::Action;
    ///
    /// assert_eq!(Action::from_index(0, 4), Action::Pass);
    /// assert_eq!(Action::from_index(2, 4), Action::Play(1));
    /// // Past the end of the hand: treated as a pass.
    /// assert_eq!(Action::from_index(7, 4), Action::Pass);
    /// ```
    #[must_use]
    pub fn from_index(index: usize, hand_size: usize) -> Self {
        if index == 0 || index > hand_size {
            Action::Pass
        } else {
            Action::Play(index - 1)
        }
    }

    /// Normalize against the mover's hand size: a slot past the end
    /// becomes `Pass`.
    #[must_use]
    pub fn normalized(self, hand_size: usize) -> Self {
        match self {
            Action::Play(slot) if slot < hand_size => self,
            _ => Action::Pass,
        }
    }

    /// The raw action index (`0` for pass).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Action::Pass => 0,
            Action::Play(slot) => slot + 1,
        }
    }

    /// Check if this is a pass.
    #[must_use]
    pub fn is_pass(self) -> bool {
        matches!(self, Action::Pass)
    }

    /// Every legal action for a hand of `hand_size` cards, in increasing
    /// index order: pass first, then each slot.
    pub fn all(hand_size: usize) -> impl Iterator<Item = Action> {
        std::iter::once(Action::Pass).chain((0..hand_size).map(Action::Play))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Pass => write!(f, "Pass"),
            Action::Play(slot) => write!(f, "Play({})", slot + 1),
        }
    }
}

/// A recorded action with the context it was applied in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action as applied (after normalization).
    pub action: Action,

    /// Power of the card played, if any.
    pub card: Option<u32>,

    /// Round number when the action was taken.
    pub round: u32,

    /// Sequence number within the game.
    pub sequence: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index() {
        assert_eq!(Action::from_index(0, 3), Action::Pass);
        assert_eq!(Action::from_index(1, 3), Action::Play(0));
        assert_eq!(Action::from_index(3, 3), Action::Play(2));
        assert_eq!(Action::from_index(4, 3), Action::Pass);
        assert_eq!(Action::from_index(1, 0), Action::Pass);
    }

    #[test]
    fn test_index_round_trip() {
        for action in Action::all(5) {
            assert_eq!(Action::from_index(action.index(), 5), action);
        }
    }

    #[test]
    fn test_normalized() {
        assert_eq!(Action::Play(2).normalized(3), Action::Play(2));
        assert_eq!(Action::Play(3).normalized(3), Action::Pass);
        assert_eq!(Action::Pass.normalized(3), Action::Pass);
    }

    #[test]
    fn test_all_order() {
        let actions: Vec<_> = Action::all(2).collect();
        assert_eq!(actions, vec![Action::Pass, Action::Play(0), Action::Play(1)]);
        assert_eq!(Action::all(0).count(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::Pass.to_string(), "Pass");
        assert_eq!(Action::Play(0).to_string(), "Play(1)");
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord {
            player: PlayerId::ONE,
            action: Action::Play(4),
            card: Some(9),
            round: 2,
            sequence: 17,
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
