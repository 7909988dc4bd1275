use serde::{Deserialize, Serialize};

/// Toggles for how deals are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DealRules {
    /// With probability 1/2, break the dealt hand so that exactly one card
    /// must be swapped back in before play.
    pub forced_swap: bool,
    /// Reject deals without a Trickster in the hand or as the swap card.
    pub require_trickster: bool,
}

impl Default for DealRules {
    fn default() -> Self {
        Self {
            forced_swap: true,
            require_trickster: false,
        }
    }
}

impl DealRules {
    #[inline]
    pub const fn new(forced_swap: bool, require_trickster: bool) -> Self {
        Self {
            forced_swap,
            require_trickster,
        }
    }

    /// Always-solvable deals, no substitution step.
    #[inline]
    pub const fn plain() -> Self {
        Self {
            forced_swap: false,
            require_trickster: false,
        }
    }
}
