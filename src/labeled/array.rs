use std::collections::BTreeMap;
use std::sync::Arc;

use crate::errors::LabelError;
use crate::labeled::{Attrs, Variable, VariableData};

/// An n-d array whose axes carry dimension names and coordinate values.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledArray {
    variable: Variable,
    coords: BTreeMap<String, Arc<Variable>>,
}

impl LabeledArray {
    /// Label each axis of `data` with `(dimension name, coordinate)` in axis order.
    ///
    /// Every coordinate must be one-dimensional and as long as its axis.
    pub fn from_axes(
        data: impl Into<VariableData>,
        axes: &[(&str, &Arc<Variable>)],
    ) -> Result<Self, LabelError> {
        let data = data.into();
        let variable = Variable::new(axes.iter().map(|(dim, _)| *dim), data)?;

        let mut coords = BTreeMap::new();
        for (axis, (dim, coord)) in axes.iter().enumerate() {
            if coord.ndim() != 1 {
                return Err(LabelError::NotOneDimensional(dim.to_string()));
            }
            let expected = variable.shape()[axis];
            if coord.len() != expected {
                return Err(LabelError::ShapeMismatch {
                    coord: dim.to_string(),
                    dim: dim.to_string(),
                    expected,
                    found: coord.len(),
                });
            }
            coords.insert(dim.to_string(), Arc::clone(coord));
        }

        Ok(LabeledArray {
            variable,
            coords,
        })
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.variable = self.variable.with_attrs(attrs);
        self
    }

    pub fn dims(&self) -> &[String] {
        self.variable.dims()
    }

    pub fn shape(&self) -> &[usize] {
        self.variable.shape()
    }

    pub fn data(&self) -> &VariableData {
        self.variable.data()
    }

    pub fn attrs(&self) -> &Attrs {
        self.variable.attrs()
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    pub fn coord(&self, dim: &str) -> Option<&Arc<Variable>> {
        self.coords.get(dim)
    }

    pub fn coords(&self) -> impl Iterator<Item = (&str, &Arc<Variable>)> {
        self.coords.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_parts(self) -> (Variable, BTreeMap<String, Arc<Variable>>) {
        (self.variable, self.coords)
    }
}
