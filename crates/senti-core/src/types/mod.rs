pub mod example;
pub mod kind;

pub use example::{tokenize, Label, SentimentExample};
pub use kind::{FeatureKind, ModelKind};
