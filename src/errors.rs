use std::ffi::{c_int, NulError};
use std::str::Utf8Error;

use gdal_sys::CPLErr;
use ndarray::ShapeError;
use thiserror::Error;

/// Failures raised by GDAL itself or by the thin wrappers around it.
///
/// These are surfaced to callers unmodified; the grid adapter never retries
/// or reinterprets them.
#[derive(Clone, Debug, Error)]
pub enum GdalError {
    #[error("FfiNulError")]
    FfiNulError(#[from] NulError),
    #[error("StrUtf8Error")]
    StrUtf8Error(#[from] Utf8Error),
    #[error("NdarrayShapeError")]
    NdarrayShapeError(#[from] ShapeError),
    #[error("CPL error class: '{class:?}', error number: '{number}', error msg: '{msg}'")]
    CplError {
        class: CplErrType,
        number: c_int,
        msg: String,
    },
    #[error("GDAL method '{method_name}' returned a NULL pointer. Error msg: '{msg}'")]
    NullPointer {
        method_name: &'static str,
        msg: String,
    },
    #[error("Bad argument: {0}")]
    BadArgument(String),
}

/// Failures of the labeled-array model.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("data has {ndim} dimension(s) but {names} dimension name(s) were given")]
    DimensionCount { ndim: usize, names: usize },
    #[error("coordinate '{coord}' has length {found}, axis '{dim}' has length {expected}")]
    ShapeMismatch {
        coord: String,
        dim: String,
        expected: usize,
        found: usize,
    },
    #[error("dimension '{dim}' has size {expected} in the dataset, got {found}")]
    DimensionSize {
        dim: String,
        expected: usize,
        found: usize,
    },
    #[error("coordinate '{0}' conflicts with the dataset's existing coordinate")]
    CoordinateConflict(String),
    #[error("a coordinate must be one-dimensional along its own axis, '{0}' is not")]
    NotOneDimensional(String),
}

/// Errors returned by the grid adapter.
#[derive(Clone, Debug, Error)]
pub enum GridError {
    #[error("dimension '{0}' is not present in the dataset")]
    MissingDimension(String),
    #[error("'{name}' is not a one-dimensional axis (found {ndim} dimensions)")]
    NotAnAxis { name: String, ndim: usize },
    #[error("axis '{name}' spans [{min}, {max}] and cannot define a positive resolution")]
    DegenerateAxis { name: String, min: f64, max: f64 },
    #[error("burn value {value} is outside {min}..={max}")]
    BurnOutOfRange { value: i64, min: i64, max: i64 },
    #[error(transparent)]
    Gdal(#[from] GdalError),
    #[error(transparent)]
    Label(#[from] LabelError),
}

pub type GdalResult<T> = std::result::Result<T, GdalError>;
pub type Result<T> = std::result::Result<T, GridError>;

/// Type-safe mirror of [`CPLErr::Type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CplErrType {
    None = 0,
    Debug = 1,
    Warning = 2,
    Failure = 3,
    Fatal = 4,
}

impl From<CPLErr::Type> for CplErrType {
    fn from(error_type: CPLErr::Type) -> Self {
        match error_type {
            CPLErr::CE_Debug => Self::Debug,
            CPLErr::CE_Warning => Self::Warning,
            CPLErr::CE_Failure => Self::Failure,
            CPLErr::CE_Fatal => Self::Fatal,
            // fallback type, should not happen
            _ => Self::None,
        }
    }
}
