//! GDAL Vector Data
//!
//! Only what is needed to hand a layer to the rasterizer: open a source with
//! [`Dataset::open_vector`](crate::Dataset::open_vector), pick a [`Layer`].

mod layer;

pub use layer::Layer;
