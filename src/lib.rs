//! Rasterize vector data onto the grid of a labeled array dataset.
//!
//! A [`LabeledDataset`](labeled::LabeledDataset) with two coordinate axes
//! defines a north-up raster grid. [`GridVectors`](grid::GridVectors) burns
//! any vector source GDAL can open into that grid and returns the band as a
//! plain [`ndarray::Array2`], as a [`LabeledArray`](labeled::LabeledArray), or
//! attached to a copy of the dataset as a coordinate or a data variable.
//!
//! ## Use
//!
//! ```no_run
//! use gridvectors::grid::GridVectors;
//! use gridvectors::labeled::{attrs, AttrValue, LabeledDataset, Variable};
//!
//! # fn main() -> gridvectors::errors::Result<()> {
//! let ds = LabeledDataset::new()
//!     .with_coord("x", Variable::coordinate("x", vec![0.0, 2.5, 5.0, 7.5, 10.0]))?
//!     .with_coord("y", Variable::coordinate("y", vec![10.0, 7.5, 5.0, 2.5, 0.0]))?;
//!
//! let mut grid = GridVectors::new(&ds, "x", "y")?;
//! println!("{:?}", grid.grid().geo_transform());
//!
//! // Constant burn: 1 inside the parcels, 0 (no-data) elsewhere.
//! let mask = grid.as_array("fixtures/parcels.geojson", 1)?;
//! assert_eq!(mask.dim(), (5, 5));
//!
//! // Attribute burn, kept as a coordinate of a new dataset.
//! let labeled = grid.as_dataset_coord(
//!     "fixtures/parcels.geojson",
//!     "class",
//!     "landuse",
//!     Some(attrs([("source", AttrValue::from("parcels"))])),
//! )?;
//! assert!(labeled.coord("landuse").is_some());
//! # Ok(())
//! # }
//! ```

#![crate_name = "gridvectors"]
#![crate_type = "lib"]

pub mod config;
pub mod cpl;
mod dataset;
mod driver;
pub mod errors;
mod geo_transform;
pub mod grid;
pub mod labeled;
pub mod raster;
mod utils;
pub mod vector;

pub use dataset::{Dataset, GdalOpenFlags};
pub use driver::Driver;
pub use geo_transform::{GeoTransform, GeoTransformEx};

#[cfg(test)]
pub(crate) mod test_utils;
