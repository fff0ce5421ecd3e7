//! Extraction pipeline
//!
//! [`DifficultWordExtractor`] runs the whole text-to-word-list pipeline;
//! [`observer`] hooks into it for progress bars and filter statistics.

pub mod extractor;
pub mod observer;

pub use extractor::DifficultWordExtractor;
pub use observer::{Decision, ExtractionObserver, FilterStats, NoopObserver, ProgressObserver};
