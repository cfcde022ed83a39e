//! GDAL Raster Data

mod rasterband;
mod rasterize;
mod types;

pub use rasterband::RasterBand;
pub use rasterize::{rasterize_layer, Burn, MergeAlgorithm, OptimizeMode, RasterizeOptions};
pub use types::{GDALDataType, GdalType};

#[cfg(test)]
mod tests;
