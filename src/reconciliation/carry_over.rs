use crate::{
    reconciliation::content_slice::slice_by_line_offsets,
    types::{
        message::{Message, MessageId},
        outcome::ReconciliationOutcome,
        role::Role,
        segment::Segment,
    },
};

/// What reconciliation recovered for a single new segment. A `None` field
/// means nothing usable survived the boundary change; the caller falls back
/// to the freshly parsed content and the alternating-role policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CarryOver {
    pub role: Option<Role>,
    pub content: Option<String>,
    pub id: Option<MessageId>,
    pub outcome: ReconciliationOutcome,
}

impl CarryOver {
    fn none() -> Self {
        Self {
            role: None,
            content: None,
            id: None,
            outcome: ReconciliationOutcome::NoMatch,
        }
    }
}

/// Decides whether a previously entered role/content edit survives the
/// boundary change that produced `next`.
///
/// `previous` pairs the segments derived from the boundaries in effect
/// before the change with the messages the composer was holding, in order. A
/// previous segment beyond the end of the message list has no pair and can
/// never match.
///
/// Resolution order, first match wins:
/// 1. a previous segment covering exactly `next`'s line range carries its
///    message wholesale (content only when the stored body doesn't trim to
///    empty);
/// 2. a previous segment fully containing `next`'s range means a boundary
///    was inserted inside it: the stored content is sliced by line offsets,
///    and role plus identity stay with the head piece only, so a split-off
///    tail doesn't silently inherit the head's speaker;
/// 3. otherwise nothing is carried.
pub(crate) fn resolve_carry_over(next: &Segment, previous: &[(Segment, &Message)]) -> CarryOver {
    if let Some((_, message)) = previous
        .iter()
        .find(|(candidate, _)| candidate.start == next.start && candidate.end == next.end)
    {
        let trimmed = message.content.trim();

        return CarryOver {
            role: Some(message.role),
            content: (!trimmed.is_empty()).then(|| trimmed.to_owned()),
            id: Some(message.id),
            outcome: ReconciliationOutcome::ExactMatch,
        };
    }

    if let Some((container, message)) = previous
        .iter()
        .find(|(candidate, _)| candidate.contains(next))
    {
        let start_offset = next.start - container.start;
        let end_offset = next.end - container.start;
        let is_head = start_offset == 0;

        let (content, outcome) = match slice_by_line_offsets(
            &message.content,
            start_offset,
            end_offset,
            container.line_span(),
        ) {
            Ok(fragment) => (Some(fragment), ReconciliationOutcome::ContainedSplit),
            Err(_) => (None, ReconciliationOutcome::SliceRejected),
        };

        return CarryOver {
            role: is_head.then_some(message.role),
            content,
            id: is_head.then_some(message.id),
            outcome,
        };
    }

    CarryOver::none()
}
