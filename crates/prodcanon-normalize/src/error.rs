use prodcanon_core::VariantGroup;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("{group}[{index}] is {found}, not an object")]
    NotAnObject {
        group: VariantGroup,
        index: usize,
        found: &'static str,
    },

    #[error("{group}[{index}] has no text key")]
    MissingText { group: VariantGroup, index: usize },

    #[error("document is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
