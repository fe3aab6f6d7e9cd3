mod carry_over;
mod content_slice;
mod slice_error;

use carry_over::resolve_carry_over;

use crate::{
    segmentation::build_segments,
    types::{
        message::Message, reconciled_message::ReconciledMessage, role::Role, segment::Segment,
    },
};

/// Given the composer's current lines and boundaries, emit the ordered,
/// role-tagged message list, reusing role and content edits from
/// `existing_messages` wherever a segment still corresponds to the same
/// underlying line range.
///
/// `previous_boundaries` are the boundaries in effect when
/// `existing_messages` was produced; without them (or with an empty message
/// list) every segment is treated as new. Segments that match a previous
/// segment exactly keep their message; segments carved out of a previously
/// larger one keep its content piecewise, with role and identity staying on
/// the head piece. Everything else gets freshly parsed content and a role
/// alternating from the previously emitted message, starting with
/// [`Role::User`].
///
/// The result always holds one message per non-empty segment, with `order`
/// running `1..=N` and ids unique.
///
/// ```
/// use chat_segmenter::{Role, build_messages, split_into_lines};
///
/// let lines = split_into_lines("hey, how are you?\ngood, you?\nsame");
///
/// let messages = build_messages(&lines, &[1, 2], &[], None);
///
/// assert_eq!(messages.len(), 3);
/// assert_eq!(messages[0].content, "hey, how are you?");
/// assert_eq!(messages[0].role, Role::User);
/// assert_eq!(messages[1].role, Role::Other);
/// assert_eq!(messages[2].role, Role::User);
/// assert_eq!(
///     messages.iter().map(|message| message.order).collect::<Vec<_>>(),
///     vec![1, 2, 3]
/// );
/// ```
#[must_use]
pub fn build_messages<S: AsRef<str>>(
    lines: &[S],
    boundaries: &[usize],
    existing_messages: &[Message],
    previous_boundaries: Option<&[usize]>,
) -> Vec<Message> {
    build_messages_with_outcomes(lines, boundaries, existing_messages, previous_boundaries)
        .into_iter()
        .map(ReconciledMessage::into_message)
        .collect()
}

/// Same computation as [`build_messages`], additionally reporting for each
/// emitted message how it was produced, so callers can tell recovered edits
/// apart from regenerated text.
#[must_use]
pub fn build_messages_with_outcomes<S: AsRef<str>>(
    lines: &[S],
    boundaries: &[usize],
    existing_messages: &[Message],
    previous_boundaries: Option<&[usize]>,
) -> Vec<ReconciledMessage> {
    if lines.is_empty() {
        return Vec::new();
    }

    let next_segments = build_segments(lines, boundaries);
    if next_segments.is_empty() {
        return Vec::new();
    }

    let previous: Vec<(Segment, &Message)> = match previous_boundaries {
        Some(previous_boundaries) if !existing_messages.is_empty() => {
            build_segments(lines, previous_boundaries)
                .into_iter()
                .zip(existing_messages.iter())
                .collect()
        }
        _ => Vec::new(),
    };

    let mut next_id = existing_messages
        .iter()
        .map(|message| message.id)
        .max()
        .unwrap_or_default()
        .successor();

    let mut result: Vec<ReconciledMessage> = Vec::with_capacity(next_segments.len());
    let mut previous_role: Option<Role> = None;

    for (index, segment) in next_segments.into_iter().enumerate() {
        let carry = resolve_carry_over(&segment, &previous);

        let role = carry
            .role
            .unwrap_or_else(|| previous_role.map_or(Role::User, Role::alternate));
        let content = carry.content.unwrap_or(segment.content);
        let id = carry.id.unwrap_or_else(|| {
            let minted = next_id;
            next_id = next_id.successor();
            minted
        });

        previous_role = Some(role);
        result.push(ReconciledMessage::new(
            Message::new(id, role, content, index + 1),
            carry.outcome,
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        split_into_lines,
        types::{message::MessageId, outcome::ReconciliationOutcome},
    };

    fn message(id: u64, role: Role, content: &str, order: usize) -> Message {
        Message::new(MessageId::new(id), role, content, order)
    }

    fn roles_and_contents(messages: &[Message]) -> Vec<(Role, &str)> {
        messages
            .iter()
            .map(|message| (message.role, message.content.as_str()))
            .collect()
    }

    #[test]
    fn test_empty_input_produces_no_messages() {
        assert_eq!(build_messages::<String>(&[], &[], &[], None), vec![]);
        assert_eq!(
            build_messages(&split_into_lines("  \n \t"), &[], &[], None),
            vec![]
        );
    }

    #[test]
    fn test_first_parse_alternates_roles_from_user() {
        let lines = split_into_lines("one\ntwo\nthree");

        let messages = build_messages(&lines, &[1, 2], &[], None);

        assert_eq!(
            roles_and_contents(&messages),
            vec![
                (Role::User, "one"),
                (Role::Other, "two"),
                (Role::User, "three"),
            ]
        );
        assert_eq!(
            messages.iter().map(|m| m.order).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            messages.iter().map(|m| m.id.value()).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_unchanged_boundaries_keep_every_message_intact() {
        let lines = split_into_lines("A\nB\nC");
        let existing = vec![
            message(1, Role::Other, "A (edited)", 1),
            message(2, Role::Other, "B\nC, also edited", 2),
        ];

        let reconciled =
            build_messages_with_outcomes(&lines, &[1], &existing, Some(&[1]));

        assert_eq!(
            reconciled
                .iter()
                .map(ReconciledMessage::outcome)
                .collect::<Vec<_>>(),
            vec![
                ReconciliationOutcome::ExactMatch,
                ReconciliationOutcome::ExactMatch,
            ]
        );
        assert_eq!(
            reconciled
                .iter()
                .map(|r| r.message().clone())
                .collect::<Vec<_>>(),
            existing
        );
    }

    #[test]
    fn test_boundary_insertion_preserves_the_head() {
        let lines = split_into_lines("A\nB\nC");
        let existing = vec![message(1, Role::Other, "A\nB\nC", 1)];

        let messages = build_messages(&lines, &[1], &existing, Some(&[]));

        assert_eq!(
            roles_and_contents(&messages),
            vec![(Role::Other, "A"), (Role::User, "B\nC")]
        );
        // The head keeps its identity, the tail is a new message.
        assert_eq!(messages[0].id, MessageId::new(1));
        assert_eq!(messages[1].id, MessageId::new(2));
    }

    #[test]
    fn test_boundary_removal_regenerates_the_merged_segment() {
        let lines = split_into_lines("A\nB\nC");
        let existing = vec![
            message(1, Role::Other, "A (edited)", 1),
            message(2, Role::User, "B\nC", 2),
        ];

        let reconciled = build_messages_with_outcomes(&lines, &[], &existing, Some(&[1]));

        assert_eq!(reconciled.len(), 1);
        assert_eq!(reconciled[0].outcome(), ReconciliationOutcome::NoMatch);
        assert_eq!(reconciled[0].message().role, Role::User);
        assert_eq!(reconciled[0].message().content, "A\nB\nC");
    }

    #[test]
    fn test_fallback_role_ignores_prior_list_head() {
        // When nothing matches, the first emitted message is always `User`,
        // even though the prior list started with `Other`.
        let lines = split_into_lines("A\nB");
        let existing = vec![
            message(1, Role::Other, "A", 1),
            message(2, Role::User, "B", 2),
        ];

        let messages = build_messages(&lines, &[], &existing, Some(&[1]));

        assert_eq!(roles_and_contents(&messages), vec![(Role::User, "A\nB")]);
    }

    #[test]
    fn test_toggle_round_trip_restores_the_original_message() {
        let lines = split_into_lines("A\nB\nC");
        let original = vec![message(1, Role::User, "A\nB\nC", 1)];

        let split = build_messages(&lines, &[1], &original, Some(&[]));
        let rejoined = build_messages(&lines, &[], &split, Some(&[1]));

        // Role, content and order are restored; the merged segment is a new
        // message, so its id is freshly minted.
        assert_eq!(roles_and_contents(&rejoined), roles_and_contents(&original));
        assert_eq!(rejoined[0].order, 1);
    }

    #[test]
    fn test_collapsed_edit_falls_back_to_fresh_content() {
        // The stored body merged "A" and "B" onto one line, so slicing is
        // rejected and both pieces are regenerated from the source lines.
        let lines = split_into_lines("A\nB\nC");
        let existing = vec![message(1, Role::Other, "A B\nC", 1)];

        let reconciled = build_messages_with_outcomes(&lines, &[1], &existing, Some(&[]));

        assert_eq!(
            reconciled
                .iter()
                .map(ReconciledMessage::outcome)
                .collect::<Vec<_>>(),
            vec![
                ReconciliationOutcome::SliceRejected,
                ReconciliationOutcome::SliceRejected,
            ]
        );
        assert_eq!(
            reconciled
                .iter()
                .map(|r| (r.message().role, r.message().content.as_str()))
                .collect::<Vec<_>>(),
            vec![(Role::Other, "A"), (Role::User, "B\nC")]
        );
    }

    #[test]
    fn test_reconciliation_is_skipped_without_previous_boundaries() {
        let lines = split_into_lines("A\nB");
        let existing = vec![
            message(1, Role::Other, "A (edited)", 1),
            message(2, Role::User, "B (edited)", 2),
        ];

        let messages = build_messages(&lines, &[1], &existing, None);

        assert_eq!(
            roles_and_contents(&messages),
            vec![(Role::User, "A"), (Role::Other, "B")]
        );
    }

    #[test]
    fn test_truncated_message_list_rejects_unpaired_segments() {
        // Two previous segments but only one surviving message: the second
        // segment has no pair and must be treated as new.
        let lines = split_into_lines("A\nB");
        let existing = vec![message(1, Role::Other, "A (edited)", 1)];

        let messages = build_messages(&lines, &[1], &existing, Some(&[1]));

        assert_eq!(
            roles_and_contents(&messages),
            vec![(Role::Other, "A (edited)"), (Role::User, "B")]
        );
    }

    #[test]
    fn test_orders_are_sequential_for_every_input() {
        let lines = split_into_lines("A\n\nB\nC\n\nD");

        for boundaries in [vec![], vec![2], vec![1, 2, 3], vec![5, 3, 5, 0, 99]] {
            let messages = build_messages(&lines, &boundaries, &[], None);
            assert_eq!(
                messages.iter().map(|m| m.order).collect::<Vec<_>>(),
                (1..=messages.len()).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_emitted_ids_are_unique() {
        let lines = split_into_lines("A\nB\nC\nD");
        let existing = vec![message(5, Role::User, "A\nB\nC\nD", 1)];

        let messages = build_messages(&lines, &[1, 2, 3], &existing, Some(&[]));

        let mut ids: Vec<u64> = messages.iter().map(|m| m.id.value()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), messages.len());
        // The head of the split keeps id 5; the three tails mint 6, 7, 8.
        assert_eq!(
            messages.iter().map(|m| m.id.value()).collect::<Vec<_>>(),
            vec![5, 6, 7, 8]
        );
    }

    #[test]
    fn test_blank_regions_are_absorbed_between_messages() {
        let lines = split_into_lines("A\n\n\nB");
        let existing = vec![message(1, Role::Other, "A\n\n\nB", 1)];

        let messages = build_messages(&lines, &[1, 3], &existing, Some(&[]));

        assert_eq!(
            roles_and_contents(&messages),
            vec![(Role::Other, "A"), (Role::User, "B")]
        );
    }
}
