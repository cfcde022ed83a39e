use std::collections::BTreeMap;
use std::sync::Arc;

use crate::errors::LabelError;
use crate::labeled::{Attrs, LabeledArray, Variable};

/// A collection of coordinates and data variables sharing named dimensions.
///
/// Variables are reference counted, so `clone` is shallow: the copy shares
/// every variable with the original until one of them replaces it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabeledDataset {
    dims: BTreeMap<String, usize>,
    coords: BTreeMap<String, Arc<Variable>>,
    data_vars: BTreeMap<String, Arc<Variable>>,
    attrs: Attrs,
}

impl LabeledDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coord(
        mut self,
        name: impl Into<String>,
        variable: impl Into<Arc<Variable>>,
    ) -> Result<Self, LabelError> {
        self.insert_coord(name, variable)?;
        Ok(self)
    }

    pub fn with_data_var(
        mut self,
        name: impl Into<String>,
        variable: impl Into<Arc<Variable>>,
    ) -> Result<Self, LabelError> {
        self.insert_data_var(name, variable)?;
        Ok(self)
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Add or replace a coordinate. Its dimension sizes must agree with the dataset.
    pub fn insert_coord(
        &mut self,
        name: impl Into<String>,
        variable: impl Into<Arc<Variable>>,
    ) -> Result<(), LabelError> {
        let name = name.into();
        let variable = variable.into();
        self.register_dims(&variable)?;
        self.data_vars.remove(&name);
        self.coords.insert(name, variable);
        Ok(())
    }

    /// Add or replace a data variable. Its dimension sizes must agree with the dataset.
    pub fn insert_data_var(
        &mut self,
        name: impl Into<String>,
        variable: impl Into<Arc<Variable>>,
    ) -> Result<(), LabelError> {
        let name = name.into();
        let variable = variable.into();
        self.register_dims(&variable)?;
        self.coords.remove(&name);
        self.data_vars.insert(name, variable);
        Ok(())
    }

    fn check_dims(&self, variable: &Variable) -> Result<(), LabelError> {
        for (dim, &found) in variable.dims().iter().zip(variable.shape()) {
            if let Some(&expected) = self.dims.get(dim) {
                if expected != found {
                    return Err(LabelError::DimensionSize {
                        dim: dim.clone(),
                        expected,
                        found,
                    });
                }
            }
        }
        Ok(())
    }

    fn register_dims(&mut self, variable: &Variable) -> Result<(), LabelError> {
        self.check_dims(variable)?;
        for (dim, &size) in variable.dims().iter().zip(variable.shape()) {
            self.dims.insert(dim.clone(), size);
        }
        Ok(())
    }

    /// Copy of `self` with `array` attached as the coordinate `name`.
    pub fn assign_coord(
        &self,
        name: impl Into<String>,
        array: LabeledArray,
    ) -> Result<LabeledDataset, LabelError> {
        let (mut copy, variable) = self.merge_axes(array)?;
        copy.insert_coord(name, variable)?;
        Ok(copy)
    }

    /// Copy of `self` with `array` attached as the data variable `name`.
    pub fn assign_data_var(
        &self,
        name: impl Into<String>,
        array: LabeledArray,
    ) -> Result<LabeledDataset, LabelError> {
        let (mut copy, variable) = self.merge_axes(array)?;
        copy.insert_data_var(name, variable)?;
        Ok(copy)
    }

    /// Shallow copy of `self` extended with the axis coordinates of `array`.
    fn merge_axes(&self, array: LabeledArray) -> Result<(LabeledDataset, Variable), LabelError> {
        let mut copy = self.clone();
        let (variable, coords) = array.into_parts();
        copy.check_dims(&variable)?;
        for (name, coord) in coords {
            match copy.coords.get(&name) {
                Some(existing) if Arc::ptr_eq(existing, &coord) || **existing == *coord => {}
                Some(_) => return Err(LabelError::CoordinateConflict(name)),
                None => copy.insert_coord(name, coord)?,
            }
        }
        Ok((copy, variable))
    }

    /// Look up a coordinate, then a data variable, by name.
    pub fn get(&self, name: &str) -> Option<&Arc<Variable>> {
        self.coords.get(name).or_else(|| self.data_vars.get(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn coord(&self, name: &str) -> Option<&Arc<Variable>> {
        self.coords.get(name)
    }

    pub fn data_var(&self, name: &str) -> Option<&Arc<Variable>> {
        self.data_vars.get(name)
    }

    pub fn dims(&self) -> &BTreeMap<String, usize> {
        &self.dims
    }

    pub fn dim_size(&self, dim: &str) -> Option<usize> {
        self.dims.get(dim).copied()
    }

    pub fn coords(&self) -> impl Iterator<Item = (&str, &Arc<Variable>)> {
        self.coords.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn data_vars(&self) -> impl Iterator<Item = (&str, &Arc<Variable>)> {
        self.data_vars.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }
}
