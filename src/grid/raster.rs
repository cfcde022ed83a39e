use std::path::Path;

use ndarray::Array2;

use crate::dataset::Dataset;
use crate::driver::Driver;
use crate::errors::{GridError, Result};
use crate::grid::{GridDefinition, LayerSelector};
use crate::raster::{rasterize_layer, Burn, RasterizeOptions};

/// Burns vector layers into a grid-shaped buffer.
///
/// [`GridVectors`](crate::grid::GridVectors) only talks to its buffer through
/// this trait; [`MemRaster`] is the GDAL implementation.
pub trait Rasterizer {
    /// Burn `source` into the buffer and return the whole band as (rows, cols).
    fn rasterize(&mut self, source: &Path, burn: &Burn) -> Result<Array2<u8>>;

    /// Set every cell back to the no-data value.
    fn reset(&mut self) -> Result<()>;
}

/// A single-band Byte raster held by GDAL's `MEM` driver.
///
/// All cells start at 0, which is also the band's no-data value. Constant
/// burns outside `1..=255` fail with [`GridError::BurnOutOfRange`].
pub struct MemRaster {
    dataset: Dataset,
    layer: LayerSelector,
    options: RasterizeOptions,
}

impl MemRaster {
    pub const NO_DATA: u8 = 0;
    pub const MIN_BURN: i64 = 1;
    pub const MAX_BURN: i64 = u8::MAX as i64;

    pub fn new(grid: &GridDefinition, layer: LayerSelector, options: RasterizeOptions) -> Result<Self> {
        let driver = Driver::get_by_name("MEM")?;
        let (cols, rows) = grid.size();
        tracing::debug!(driver = %driver.short_name(), cols, rows, "allocating raster buffer");
        let mut dataset = driver.create_with_band_type::<u8>("", cols, rows, 1)?;
        {
            let mut band = dataset.rasterband(1)?;
            band.fill(f64::from(Self::NO_DATA))?;
            band.set_no_data_value(Some(f64::from(Self::NO_DATA)))?;
        }
        dataset.set_geo_transform(&grid.geo_transform())?;

        Ok(MemRaster {
            dataset,
            layer,
            options,
        })
    }

    /// The GDAL dataset backing the buffer.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

impl Rasterizer for MemRaster {
    fn rasterize(&mut self, source: &Path, burn: &Burn) -> Result<Array2<u8>> {
        if let Burn::Value(value) = *burn {
            if !(Self::MIN_BURN..=Self::MAX_BURN).contains(&value) {
                return Err(GridError::BurnOutOfRange {
                    value,
                    min: Self::MIN_BURN,
                    max: Self::MAX_BURN,
                });
            }
        }
        let vector = Dataset::open_vector(source)?;
        let layer = match &self.layer {
            LayerSelector::Index(idx) => vector.layer(*idx)?,
            LayerSelector::Name(name) => vector.layer_by_name(name)?,
        };
        let field_index = match burn {
            Burn::Attribute(field) => layer.field_index(field)?,
            Burn::Value(_) => None,
        };
        tracing::debug!(
            source = %source.display(),
            layers = vector.layer_count(),
            layer = %layer.name(),
            %burn,
            ?field_index,
            "rasterizing layer"
        );
        rasterize_layer(&mut self.dataset, &[1], &layer, burn, self.options)?;

        Ok(self.dataset.rasterband(1)?.read_band_as_array::<u8>()?)
    }

    fn reset(&mut self) -> Result<()> {
        tracing::trace!("zeroing raster buffer");
        self.dataset
            .rasterband(1)?
            .fill(f64::from(Self::NO_DATA))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_transform::GeoTransform;
    use crate::labeled::Variable;
    use crate::raster::GDALDataType;
    use crate::test_utils::fixture;

    fn grid() -> GridDefinition {
        let x = Variable::coordinate("x", vec![0.0, 2.5, 5.0, 7.5, 10.0]);
        let y = Variable::coordinate("y", vec![10.0, 6.0, 3.0, 0.0]);
        GridDefinition::from_axes("x", &x, "y", &y).unwrap()
    }

    #[test]
    fn test_buffer_matches_grid() {
        let raster = MemRaster::new(&grid(), LayerSelector::default(), Default::default()).unwrap();
        let dataset = raster.dataset();
        assert_eq!(dataset.raster_size(), (5, 4));
        assert_eq!(dataset.raster_count(), 1);
        let expected: GeoTransform = [0.0, 2.0, 0.0, 10.0, 0.0, -2.5];
        assert_eq!(dataset.geo_transform().unwrap(), expected);

        let band = dataset.rasterband(1).unwrap();
        assert_eq!(band.band_type(), GDALDataType::GDT_Byte);
        assert_eq!(band.no_data_value(), Some(0.0));
        let values = band.read_band_as_array::<u8>().unwrap();
        assert_eq!(values.dim(), (4, 5));
        assert!(values.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_reset_zeroes_buffer() {
        let mut raster =
            MemRaster::new(&grid(), LayerSelector::default(), Default::default()).unwrap();
        raster.dataset.rasterband(1).unwrap().fill(5.0).unwrap();
        raster.reset().unwrap();
        let values = raster
            .dataset()
            .rasterband(1)
            .unwrap()
            .read_band_as_array::<u8>()
            .unwrap();
        assert!(values.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_burn_value_must_fit_byte_band() {
        let mut raster =
            MemRaster::new(&grid(), LayerSelector::default(), Default::default()).unwrap();
        let source = fixture("parcels.geojson");
        for value in [-1, 0, 256, 300] {
            assert!(matches!(
                raster.rasterize(&source, &Burn::Value(value)),
                Err(GridError::BurnOutOfRange { value: v, min: 1, max: 255 }) if v == value
            ));
        }
        let values = raster.rasterize(&source, &Burn::Value(255)).unwrap();
        assert!(values.iter().all(|&v| v == 0 || v == 255));
        assert!(values.iter().any(|&v| v == 255));
    }
}
