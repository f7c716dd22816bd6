//! Pure string utilities shared by captioning and app plugins.

pub mod title;

pub use title::{last_segment, split_segments, truncate_preview};
