//! # Skerry Algorithms
//!
//! Island (connected-component) analysis for Skerry grids.
//!
//! ## Available Algorithms
//!
//! - **components**: island count, non-destructive count, island labeling

pub mod components;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::components::{
        count_components, count_components_preserving, count_components_with, flood_fill,
        label_components, ComponentCount, ComponentLabeling, ComponentLabels, ComponentParams,
        FloodOrder,
    };
    pub use skerry_core::prelude::*;
}
