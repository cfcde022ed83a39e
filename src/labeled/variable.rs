use ndarray::{Array, Array1, ArrayD, Dimension};

use crate::errors::LabelError;
use crate::labeled::Attrs;

/// The values of a [`Variable`].
///
/// Rasterized bands are bytes; coordinates and most science variables are floats.
#[derive(Clone, Debug, PartialEq)]
pub enum VariableData {
    Byte(ArrayD<u8>),
    Float(ArrayD<f64>),
}

impl VariableData {
    pub fn shape(&self) -> &[usize] {
        match self {
            VariableData::Byte(a) => a.shape(),
            VariableData::Float(a) => a.shape(),
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    pub fn len(&self) -> usize {
        self.shape().iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_byte(&self) -> Option<&ArrayD<u8>> {
        match self {
            VariableData::Byte(a) => Some(a),
            VariableData::Float(_) => None,
        }
    }

    pub fn as_float(&self) -> Option<&ArrayD<f64>> {
        match self {
            VariableData::Float(a) => Some(a),
            VariableData::Byte(_) => None,
        }
    }

    /// Values widened to `f64`, in logical order.
    pub fn to_f64(&self) -> ArrayD<f64> {
        match self {
            VariableData::Byte(a) => a.mapv(f64::from),
            VariableData::Float(a) => a.clone(),
        }
    }
}

impl<D: Dimension> From<Array<u8, D>> for VariableData {
    fn from(array: Array<u8, D>) -> Self {
        VariableData::Byte(array.into_dyn())
    }
}

impl<D: Dimension> From<Array<f64, D>> for VariableData {
    fn from(array: Array<f64, D>) -> Self {
        VariableData::Float(array.into_dyn())
    }
}

/// Named dimensions, values and attributes; the building block of
/// [`LabeledArray`](crate::labeled::LabeledArray) and
/// [`LabeledDataset`](crate::labeled::LabeledDataset).
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    dims: Vec<String>,
    data: VariableData,
    attrs: Attrs,
}

impl Variable {
    /// Label `data` with one dimension name per axis.
    pub fn new<S: Into<String>>(
        dims: impl IntoIterator<Item = S>,
        data: impl Into<VariableData>,
    ) -> Result<Self, LabelError> {
        let dims: Vec<String> = dims.into_iter().map(Into::into).collect();
        let data = data.into();
        if dims.len() != data.ndim() {
            return Err(LabelError::DimensionCount {
                ndim: data.ndim(),
                names: dims.len(),
            });
        }
        Ok(Variable {
            dims,
            data,
            attrs: Attrs::new(),
        })
    }

    /// A one-dimensional coordinate along `dim`.
    pub fn coordinate(dim: &str, values: impl Into<Vec<f64>>) -> Self {
        Variable {
            dims: vec![dim.to_string()],
            data: VariableData::Float(Array1::from(values.into()).into_dyn()),
            attrs: Attrs::new(),
        }
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    pub fn data(&self) -> &VariableData {
        &self.data
    }

    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Length of the axis labeled `dim`.
    pub fn dim_size(&self, dim: &str) -> Option<usize> {
        self.dims
            .iter()
            .position(|d| d == dim)
            .map(|axis| self.shape()[axis])
    }

    /// Smallest and largest value, ignoring NaN. `None` when there is nothing to compare.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let values = self.data.to_f64();
        values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labeled::{attrs, AttrValue};
    use ndarray::{arr2, Array2};

    #[test]
    fn test_new_checks_dimension_count() {
        let err = Variable::new(["y"], Array2::<u8>::zeros((2, 3))).unwrap_err();
        assert_eq!(err, LabelError::DimensionCount { ndim: 2, names: 1 });
    }

    #[test]
    fn test_dim_size() {
        let var = Variable::new(["y", "x"], Array2::<f64>::zeros((2, 3))).unwrap();
        assert_eq!(var.dim_size("y"), Some(2));
        assert_eq!(var.dim_size("x"), Some(3));
        assert_eq!(var.dim_size("time"), None);
        assert_eq!(var.len(), 6);
    }

    #[test]
    fn test_coordinate_min_max() {
        let coord = Variable::coordinate("lon", vec![3.0, -1.0, f64::NAN, 8.5]);
        assert_eq!(coord.ndim(), 1);
        assert_eq!(coord.min_max(), Some((-1.0, 8.5)));
        assert_eq!(Variable::coordinate("lon", Vec::<f64>::new()).min_max(), None);
    }

    #[test]
    fn test_byte_data_widens() {
        let var = Variable::new(["y", "x"], arr2(&[[1u8, 2], [3, 4]])).unwrap();
        assert!(var.data().as_float().is_none());
        assert_eq!(var.data().to_f64(), arr2(&[[1.0, 2.0], [3.0, 4.0]]).into_dyn());
        assert_eq!(var.min_max(), Some((1.0, 4.0)));
    }

    #[test]
    fn test_with_attrs() {
        let var = Variable::coordinate("x", vec![0.0, 1.0])
            .with_attrs(attrs([("units", AttrValue::from("m"))]));
        assert_eq!(var.attrs()["units"], AttrValue::Text("m".to_string()));
    }
}
