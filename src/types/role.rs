#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Speaker tag of a transcript message, matching the composer's wire names
/// (`"user"` / `"other"`).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    User,
    Other,
}

impl Role {
    /// The opposite speaker. Used as the fallback when a segment can't be
    /// matched to a previously stored message: speakers are assumed to take
    /// turns.
    #[must_use]
    pub fn alternate(self) -> Self {
        match self {
            Role::User => Role::Other,
            Role::Other => Role::User,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternate() {
        assert_eq!(Role::User.alternate(), Role::Other);
        assert_eq!(Role::Other.alternate(), Role::User);
        assert_eq!(Role::default(), Role::User);
    }
}
