//! Connected-component analysis on land/water grids
//!
//! Islands are maximal groups of land cells joined through up/down/left/right
//! neighbors; diagonal contact does not join two islands.
//!
//! - **Count**: destructive flood-fill count (consumes the grid)
//! - **Preserving count**: same result using a visited bitset, grid untouched
//! - **Labeling**: per-cell island ids and island sizes

mod count;
mod frontier;
mod label;
mod preserving;

pub use count::{count_components, count_components_with, flood_fill, ComponentCount, ComponentParams};
pub use frontier::FloodOrder;
pub use label::{label_components, ComponentLabeling, ComponentLabels};
pub use preserving::count_components_preserving;
