//! Rasterizing vector layers onto labeled-array grids.
//!
//! [`GridVectors`] derives a [`GridDefinition`] from two coordinates of a
//! [`LabeledDataset`](crate::labeled::LabeledDataset), keeps a raster buffer of
//! that shape, and burns vector sources into it.

mod definition;
mod options;
mod raster;
mod vectors;

pub use crate::raster::Burn;
pub use definition::GridDefinition;
pub use options::{BufferPolicy, GridOptions, LayerSelector};
pub use raster::{MemRaster, Rasterizer};
pub use vectors::GridVectors;
