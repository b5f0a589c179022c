pub mod coerce;
pub mod error;
pub mod heuristics;
pub mod normalize;
pub mod variant;

pub use error::NormalizeError;
pub use normalize::{normalize_batch, normalize_json_str, normalize_product, normalize_product_with};
pub use variant::normalize_variant;
