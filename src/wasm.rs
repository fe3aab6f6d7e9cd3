//! Expose the `chat-segmenter` crate's functionality to WebAssembly.
use wasm_bindgen::prelude::*;

use crate::Message;

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::build_messages` for the transcript composer.
///
/// `existing_messages` is the JSON-serialized message list the composer was
/// holding before the boundary change; anything unparseable is treated as an
/// empty list so a corrupted draft can never wedge the editor. Drafts saved
/// before message ids existed get ids backfilled. The emitted message list
/// is returned as JSON.
///
/// # Panics
///
/// If serialization to JSON fails which should not happen
#[wasm_bindgen(js_name = buildMessages)]
#[must_use]
pub fn build_messages(
    raw_text: &str,
    boundaries: Vec<usize>,
    existing_messages: &str,
    previous_boundaries: Option<Vec<usize>>,
) -> String {
    set_panic_hook();

    let lines = crate::split_into_lines(raw_text);
    let existing: Vec<Message> = serde_json::from_str(existing_messages).unwrap_or_default();
    let existing = Message::assign_missing_ids(existing);

    let messages = crate::build_messages(
        &lines,
        &boundaries,
        &existing,
        previous_boundaries.as_deref(),
    );

    serde_json::to_string(&messages).expect("Failed to serialize messages")
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
