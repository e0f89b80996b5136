pub mod anchor;
pub mod fill;
pub mod layer;

pub use anchor::resolve;
pub use fill::{fill, is_skippable, FillStats};
pub use layer::{bordered, composite};
