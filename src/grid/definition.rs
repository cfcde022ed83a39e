use std::sync::Arc;

use geo_types::{coord, Rect};

use crate::errors::{GdalResult, GridError, Result};
use crate::geo_transform::{GeoTransform, GeoTransformEx};
use crate::labeled::{LabeledDataset, Variable};

/// Resolve `name` to the dimension coordinate of `dataset` with that name.
///
/// The variable must be one-dimensional and lie along the dimension `name`
/// itself. A 1-D variable on some other dimension is not an axis of the grid.
pub(crate) fn resolve_axis(dataset: &LabeledDataset, name: &str) -> Result<Arc<Variable>> {
    let variable = dataset
        .get(name)
        .ok_or_else(|| GridError::MissingDimension(name.to_string()))?;
    if variable.ndim() != 1 {
        return Err(GridError::NotAnAxis {
            name: name.to_string(),
            ndim: variable.ndim(),
        });
    }
    if variable.dims()[0] != name {
        return Err(GridError::MissingDimension(name.to_string()));
    }
    Ok(Arc::clone(variable))
}

fn axis_extent(name: &str, axis: &Variable) -> Result<(f64, f64)> {
    match axis.min_max() {
        Some((min, max)) if min.is_finite() && max.is_finite() && max > min => Ok((min, max)),
        Some((min, max)) => Err(GridError::DegenerateAxis {
            name: name.to_string(),
            min,
            max,
        }),
        None => Err(GridError::DegenerateAxis {
            name: name.to_string(),
            min: f64::NAN,
            max: f64::NAN,
        }),
    }
}

/// A north-up raster grid spanning the extent of two coordinate axes.
///
/// The grid has one column per x value and one row per y value. Cells are
/// `(max - min) / count` wide along each axis, and row 0 sits at `y_max`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridDefinition {
    cols: usize,
    rows: usize,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    x_res: f64,
    y_res: f64,
}

impl GridDefinition {
    /// Derive the grid from the x and y coordinate variables.
    ///
    /// `x_name` and `y_name` only feed error messages.
    pub fn from_axes(x_name: &str, x: &Variable, y_name: &str, y: &Variable) -> Result<Self> {
        let (x_min, x_max) = axis_extent(x_name, x)?;
        let (y_min, y_max) = axis_extent(y_name, y)?;
        let cols = x.len();
        let rows = y.len();

        Ok(GridDefinition {
            cols,
            rows,
            x_min,
            x_max,
            y_min,
            y_max,
            x_res: (x_max - x_min) / cols as f64,
            y_res: (y_max - y_min) / rows as f64,
        })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Raster size as `(columns, rows)`, the order GDAL uses.
    pub fn size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Cell width.
    pub fn x_res(&self) -> f64 {
        self.x_res
    }

    /// Cell height, always positive.
    pub fn y_res(&self) -> f64 {
        self.y_res
    }

    /// `(x_min, x_res, 0, y_max, 0, -y_res)`
    pub fn geo_transform(&self) -> GeoTransform {
        [self.x_min, self.x_res, 0.0, self.y_max, 0.0, -self.y_res]
    }

    /// World extent covered by the coordinate axes.
    pub fn extent(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.x_min, y: self.y_min },
            coord! { x: self.x_max, y: self.y_max },
        )
    }

    /// World position of a (fractional) column/row.
    pub fn pixel_to_world(&self, col: f64, row: f64) -> (f64, f64) {
        self.geo_transform().apply(col, row)
    }

    /// Fractional column/row of a world position.
    pub fn world_to_pixel(&self, x: f64, y: f64) -> GdalResult<(f64, f64)> {
        Ok(self.geo_transform().invert()?.apply(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labeled::Variable;
    use ndarray::Array2;

    fn axes() -> (Variable, Variable) {
        (
            Variable::coordinate("x", vec![0.0, 2.5, 5.0, 7.5, 10.0]),
            Variable::coordinate("y", vec![10.0, 7.5, 5.0, 2.5, 0.0]),
        )
    }

    #[test]
    fn test_counts_and_resolution() {
        let (x, y) = axes();
        let grid = GridDefinition::from_axes("x", &x, "y", &y).unwrap();
        assert_eq!(grid.size(), (5, 5));
        assert_eq!(grid.x_res(), 2.0);
        assert_eq!(grid.y_res(), 2.0);
        assert_eq!(grid.x_res(), (grid.x_max() - grid.x_min()) / grid.cols() as f64);
    }

    #[test]
    fn test_uneven_axes() {
        let x = Variable::coordinate("lon", vec![-180.0, -60.0, 60.0]);
        let y = Variable::coordinate("lat", vec![-45.0, 45.0]);
        let grid = GridDefinition::from_axes("lon", &x, "lat", &y).unwrap();
        assert_eq!(grid.size(), (3, 2));
        assert_eq!(grid.x_res(), 80.0);
        assert_eq!(grid.y_res(), 45.0);
        assert_eq!(grid.geo_transform(), [-180.0, 80.0, 0.0, 45.0, 0.0, -45.0]);
    }

    #[test]
    fn test_transform_components() {
        let (x, y) = axes();
        let grid = GridDefinition::from_axes("x", &x, "y", &y).unwrap();
        let gt = grid.geo_transform();
        assert_eq!(gt[0], grid.x_min());
        assert_eq!(gt[3], grid.y_max());
        assert_eq!(gt[5], -grid.y_res());
        assert_eq!(gt[2], 0.0);
        assert_eq!(gt[4], 0.0);
    }

    #[test]
    fn test_extent_and_pixel_mapping() {
        let (x, y) = axes();
        let grid = GridDefinition::from_axes("x", &x, "y", &y).unwrap();
        let extent = grid.extent();
        assert_eq!(extent.min(), coord! { x: 0.0, y: 0.0 });
        assert_eq!(extent.max(), coord! { x: 10.0, y: 10.0 });
        assert_eq!(grid.pixel_to_world(0.5, 0.5), (1.0, 9.0));
        assert_eq!(grid.world_to_pixel(7.0, 3.0).unwrap(), (3.5, 3.5));
    }

    #[test]
    fn test_degenerate_axis() {
        let x = Variable::coordinate("x", vec![4.0]);
        let (_, y) = axes();
        let err = GridDefinition::from_axes("x", &x, "y", &y).unwrap_err();
        assert!(matches!(err, GridError::DegenerateAxis { name, .. } if name == "x"));

        let empty = Variable::coordinate("y", Vec::<f64>::new());
        let (x, _) = axes();
        assert!(GridDefinition::from_axes("x", &x, "y", &empty).is_err());
    }

    #[test]
    fn test_resolve_axis() {
        let ds = LabeledDataset::new()
            .with_coord("x", Variable::coordinate("x", vec![0.0, 1.0]))
            .unwrap()
            .with_data_var(
                "field",
                Variable::new(["x", "z"], Array2::<f64>::zeros((2, 2))).unwrap(),
            )
            .unwrap();
        assert!(resolve_axis(&ds, "x").is_ok());
        assert!(matches!(
            resolve_axis(&ds, "y"),
            Err(GridError::MissingDimension(name)) if name == "y"
        ));
        assert!(matches!(
            resolve_axis(&ds, "field"),
            Err(GridError::NotAnAxis { ndim: 2, .. })
        ));
    }

    #[test]
    fn test_resolve_axis_rejects_variable_on_other_dimension() {
        let ds = LabeledDataset::new()
            .with_coord("x", Variable::coordinate("x", vec![0.0, 1.0, 2.0]))
            .unwrap()
            .with_data_var("profile", Variable::coordinate("x", vec![5.0, 6.0, 7.0]))
            .unwrap()
            .with_coord("station", Variable::coordinate("x", vec![1.0, 2.0, 3.0]))
            .unwrap();
        assert!(matches!(
            resolve_axis(&ds, "profile"),
            Err(GridError::MissingDimension(name)) if name == "profile"
        ));
        assert!(matches!(
            resolve_axis(&ds, "station"),
            Err(GridError::MissingDimension(name)) if name == "station"
        ));
        assert!(resolve_axis(&ds, "x").is_ok());
    }
}
