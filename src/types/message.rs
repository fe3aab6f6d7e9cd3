#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::role::Role;

/// Identity of a message that stays stable while boundaries shift around it.
///
/// Ids are minted sequentially above the highest id already present in the
/// composer's message list, so they are deterministic within a session and
/// never depend on a clock or randomness. Id `0` is the unassigned sentinel
/// used by drafts that were serialized before ids existed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MessageId(u64);

impl MessageId {
    pub const UNASSIGNED: MessageId = MessageId(0);

    #[must_use]
    pub fn new(value: u64) -> Self { Self(value) }

    #[must_use]
    pub fn value(self) -> u64 { self.0 }

    #[must_use]
    pub fn is_unassigned(self) -> bool { self.0 == 0 }

    pub(crate) fn successor(self) -> Self { Self(self.0 + 1) }
}

/// A single chat-style message carved out of the pasted transcript.
///
/// `content` is the trimmed text body. `order` is 1-based and always matches
/// the message's position in the list it was emitted with; it is reassigned
/// after every structural change.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub order: usize,
}

impl Message {
    #[must_use]
    pub fn new(id: MessageId, role: Role, content: impl Into<String>, order: usize) -> Self {
        Self {
            id,
            role,
            content: content.into(),
            order,
        }
    }

    /// Replace unassigned ids with fresh ones minted above the highest id
    /// already present. Deserialized drafts from before ids existed come
    /// through with every id at the sentinel value.
    #[must_use]
    pub fn assign_missing_ids(mut messages: Vec<Message>) -> Vec<Message> {
        let mut next = messages
            .iter()
            .map(|message| message.id)
            .max()
            .unwrap_or_default()
            .successor();

        for message in &mut messages {
            if message.id.is_unassigned() {
                message.id = next;
                next = next.successor();
            }
        }

        messages
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_assign_missing_ids_fills_sentinels_above_existing_maximum() {
        let messages = vec![
            Message::new(MessageId::new(4), Role::User, "a", 1),
            Message::new(MessageId::UNASSIGNED, Role::Other, "b", 2),
            Message::new(MessageId::UNASSIGNED, Role::User, "c", 3),
        ];

        let assigned = Message::assign_missing_ids(messages);

        assert_eq!(
            assigned
                .iter()
                .map(|message| message.id.value())
                .collect::<Vec<_>>(),
            vec![4, 5, 6]
        );
    }

    #[test]
    fn test_assign_missing_ids_leaves_assigned_ids_untouched() {
        let messages = vec![
            Message::new(MessageId::new(2), Role::User, "a", 1),
            Message::new(MessageId::new(1), Role::Other, "b", 2),
        ];

        assert_eq!(Message::assign_missing_ids(messages.clone()), messages);
    }
}
