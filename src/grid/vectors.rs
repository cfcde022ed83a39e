use std::path::Path;
use std::sync::Arc;

use ndarray::Array2;

use crate::errors::Result;
use crate::grid::definition::resolve_axis;
use crate::grid::{BufferPolicy, GridDefinition, GridOptions, MemRaster, Rasterizer};
use crate::labeled::{Attrs, LabeledArray, LabeledDataset, Variable};
use crate::raster::Burn;

/// Rasterizes vector sources onto the grid spanned by two coordinates of a
/// [`LabeledDataset`], and hands the result back as a plain array, a labeled
/// array, or a copy of the dataset with the band attached.
///
/// The grid is fixed at construction. All calls share one raster buffer; by
/// default it is zeroed before every burn (see [`BufferPolicy`]).
///
/// ```no_run
/// use gridvectors::grid::GridVectors;
/// use gridvectors::labeled::{LabeledDataset, Variable};
///
/// # fn main() -> gridvectors::errors::Result<()> {
/// let ds = LabeledDataset::new()
///     .with_coord("lon", Variable::coordinate("lon", vec![0.0, 2.5, 5.0, 7.5, 10.0]))?
///     .with_coord("lat", Variable::coordinate("lat", vec![10.0, 7.5, 5.0, 2.5, 0.0]))?;
///
/// let mut grid = GridVectors::new(&ds, "lon", "lat")?;
/// let _mask = grid.as_array("fixtures/parcels.geojson", 1)?;
/// let classes = grid.as_dataset_var("fixtures/parcels.geojson", "class", "landuse", None)?;
/// assert!(classes.contains("landuse"));
/// assert!(!ds.contains("landuse"));
/// # Ok(())
/// # }
/// ```
pub struct GridVectors<R = MemRaster> {
    dataset: LabeledDataset,
    x_dim: String,
    y_dim: String,
    x_coord: Arc<Variable>,
    y_coord: Arc<Variable>,
    grid: GridDefinition,
    options: GridOptions,
    rasterizer: R,
}

impl GridVectors<MemRaster> {
    /// Build the adapter with default [`GridOptions`].
    pub fn new(dataset: &LabeledDataset, x_dim: &str, y_dim: &str) -> Result<Self> {
        Self::with_options(dataset, x_dim, y_dim, GridOptions::default())
    }

    pub fn with_options(
        dataset: &LabeledDataset,
        x_dim: &str,
        y_dim: &str,
        options: GridOptions,
    ) -> Result<Self> {
        Self::with_rasterizer(dataset, x_dim, y_dim, options, |grid, options| {
            MemRaster::new(grid, options.layer.clone(), options.rasterize)
        })
    }
}

impl<R: Rasterizer> GridVectors<R> {
    /// Build the adapter around a custom [`Rasterizer`], created by `make`
    /// once the grid is known.
    pub fn with_rasterizer<F>(
        dataset: &LabeledDataset,
        x_dim: &str,
        y_dim: &str,
        options: GridOptions,
        make: F,
    ) -> Result<Self>
    where
        F: FnOnce(&GridDefinition, &GridOptions) -> Result<R>,
    {
        let x_coord = resolve_axis(dataset, x_dim)?;
        let y_coord = resolve_axis(dataset, y_dim)?;
        let grid = GridDefinition::from_axes(x_dim, &x_coord, y_dim, &y_coord)?;
        tracing::debug!(
            x_dim,
            y_dim,
            cols = grid.cols(),
            rows = grid.rows(),
            x_res = grid.x_res(),
            y_res = grid.y_res(),
            "derived raster grid"
        );
        let rasterizer = make(&grid, &options)?;

        Ok(GridVectors {
            dataset: dataset.clone(),
            x_dim: x_dim.to_string(),
            y_dim: y_dim.to_string(),
            x_coord,
            y_coord,
            grid,
            options,
            rasterizer,
        })
    }

    pub fn grid(&self) -> &GridDefinition {
        &self.grid
    }

    /// The dataset the grid was derived from.
    pub fn dataset(&self) -> &LabeledDataset {
        &self.dataset
    }

    pub fn x_dim(&self) -> &str {
        &self.x_dim
    }

    pub fn y_dim(&self) -> &str {
        &self.y_dim
    }

    pub fn x_coord(&self) -> &Arc<Variable> {
        &self.x_coord
    }

    pub fn y_coord(&self) -> &Arc<Variable> {
        &self.y_coord
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Zero the raster buffer now, whatever the [`BufferPolicy`].
    pub fn reset(&mut self) -> Result<()> {
        self.rasterizer.reset()
    }

    fn burn(&mut self, source: &Path, burn: &Burn) -> Result<Array2<u8>> {
        tracing::debug!(policy = ?self.options.buffer, "burning into grid buffer");
        if self.options.buffer == BufferPolicy::Reset {
            self.rasterizer.reset()?;
        }
        self.rasterizer.rasterize(source, burn)
    }

    fn labeled(&mut self, source: &Path, burn: &Burn) -> Result<LabeledArray> {
        let band = self.burn(source, burn)?;
        let array = LabeledArray::from_axes(
            band,
            &[
                (self.y_dim.as_str(), &self.y_coord),
                (self.x_dim.as_str(), &self.x_coord),
            ],
        )?;
        Ok(array)
    }

    /// The band as a bare (rows, cols) array.
    pub fn as_array(&mut self, source: impl AsRef<Path>, burn: impl Into<Burn>) -> Result<Array2<u8>> {
        self.burn(source.as_ref(), &burn.into())
    }

    /// The band with its axes labeled by the y and x coordinates.
    pub fn as_labeled_array(
        &mut self,
        source: impl AsRef<Path>,
        burn: impl Into<Burn>,
    ) -> Result<LabeledArray> {
        self.labeled(source.as_ref(), &burn.into())
    }

    /// A copy of the dataset with the band attached as coordinate `name`.
    ///
    /// `attrs` defaults to empty.
    pub fn as_dataset_coord(
        &mut self,
        source: impl AsRef<Path>,
        burn: impl Into<Burn>,
        name: &str,
        attrs: Option<Attrs>,
    ) -> Result<LabeledDataset> {
        let array = self
            .labeled(source.as_ref(), &burn.into())?
            .with_attrs(attrs.unwrap_or_default());
        Ok(self.dataset.assign_coord(name, array)?)
    }

    /// A copy of the dataset with the band attached as data variable `name`.
    ///
    /// `attrs` defaults to empty.
    pub fn as_dataset_var(
        &mut self,
        source: impl AsRef<Path>,
        burn: impl Into<Burn>,
        name: &str,
        attrs: Option<Attrs>,
    ) -> Result<LabeledDataset> {
        let array = self
            .labeled(source.as_ref(), &burn.into())?
            .with_attrs(attrs.unwrap_or_default());
        Ok(self.dataset.assign_data_var(name, array)?)
    }
}
