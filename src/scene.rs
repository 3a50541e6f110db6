//! Scene builders for the slide deck and the vertical short.

/// Landscape slideshow composer and its frame table.
pub mod deck;
/// Retro-TV short scenes.
pub mod short;
/// Shared per-run drawing state.
pub mod studio;
