use std::ffi::c_void;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use ndarray::Array2;

use crate::labeled::{LabeledDataset, Variable};

/// Returns the fully qualified path to `filename` in `${CARGO_MANIFEST_DIR}/fixtures`.
pub fn fixture(filename: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(filename)
}

/// A 5x5 north-up dataset over `[0, 10] x [0, 10]`, with 2-unit cells.
///
/// It has the `x` and `y` coordinates plus a `temperature` variable on `(y, x)`.
pub fn sample_dataset() -> LabeledDataset {
    LabeledDataset::new()
        .with_coord("x", Variable::coordinate("x", vec![0.0, 2.5, 5.0, 7.5, 10.0]))
        .unwrap()
        .with_coord("y", Variable::coordinate("y", vec![10.0, 7.5, 5.0, 2.5, 0.0]))
        .unwrap()
        .with_data_var(
            "temperature",
            Variable::new(["y", "x"], Array2::<f64>::from_elem((5, 5), 12.5)).unwrap(),
        )
        .unwrap()
}

/// Scoped value for temporarily suppressing thread-local GDAL log messages.
///
/// Useful for tests that expect GDAL errors and want to keep the output log clean
/// of distracting yet expected error messages.
pub(crate) struct SuppressGDALErrorLog {
    // Make !Sync and !Send, and force use of `new`.
    _private: PhantomData<*mut c_void>,
}

impl SuppressGDALErrorLog {
    pub(crate) fn new() -> Self {
        unsafe { gdal_sys::CPLPushErrorHandler(Some(gdal_sys::CPLQuietErrorHandler)) };
        SuppressGDALErrorLog {
            _private: PhantomData,
        }
    }
}

impl Drop for SuppressGDALErrorLog {
    fn drop(&mut self) {
        unsafe { gdal_sys::CPLPopErrorHandler() };
    }
}
