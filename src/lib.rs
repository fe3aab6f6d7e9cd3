mod lines;
mod reconciliation;
mod segmentation;
mod types;
mod utils;

pub use lines::split_into_lines;
pub use reconciliation::{build_messages, build_messages_with_outcomes};
pub use segmentation::build_segments;
pub use types::{
    message::{Message, MessageId},
    outcome::ReconciliationOutcome,
    reconciled_message::ReconciledMessage,
    role::Role,
    segment::Segment,
};

#[cfg(feature = "wasm")]
pub mod wasm;
