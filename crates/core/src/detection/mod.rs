//! Action-to-step detection pipeline
//!
//! Raw actions are scored ([`confidence`]), debounced and captioned
//! ([`StepDetector`]), and sequenced across threads ([`ActionBuffer`]).

pub mod buffer;
pub mod caption;
pub mod confidence;
pub mod detector;

pub use buffer::{ActionBuffer, StepCallback};
pub use caption::generate_caption;
pub use confidence::{confidence, is_interactive_role};
pub use detector::StepDetector;
