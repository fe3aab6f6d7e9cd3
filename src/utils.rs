pub mod normalize_newlines;
