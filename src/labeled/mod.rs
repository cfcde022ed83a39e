//! Labeled arrays on top of `ndarray`.
//!
//! A small data model for gridded science data: [`Variable`]s with named
//! dimensions, [`LabeledArray`]s whose axes carry coordinates, and
//! [`LabeledDataset`]s that gather coordinates and data variables over shared
//! dimensions.

mod array;
mod attrs;
mod dataset;
mod variable;

pub use array::LabeledArray;
pub use attrs::{attrs, AttrValue, Attrs};
pub use dataset::LabeledDataset;
pub use variable::{Variable, VariableData};
