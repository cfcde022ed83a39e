use std::ffi::{c_int, CString};
use std::ptr;
use std::sync::Once;

use gdal_sys::{self, GDALDriverH};

use crate::dataset::Dataset;
use crate::errors::GdalResult;
use crate::raster::GdalType;
use crate::utils::{_last_null_pointer_err, _string};

static START: Once = Once::new();

pub fn _register_drivers() {
    START.call_once(|| unsafe {
        gdal_sys::GDALAllRegister();
    });
}

/// A GDAL format driver.
#[allow(missing_copy_implementations)]
pub struct Driver {
    c_driver: GDALDriverH,
}

impl Driver {
    /// Look up a registered driver by its short name, e.g. `"MEM"` or `"GeoJSON"`.
    pub fn get_by_name(name: &str) -> GdalResult<Driver> {
        _register_drivers();
        let c_name = CString::new(name)?;
        let c_driver = unsafe { gdal_sys::GDALGetDriverByName(c_name.as_ptr()) };
        if c_driver.is_null() {
            return Err(_last_null_pointer_err("GDALGetDriverByName"));
        };
        Ok(Driver { c_driver })
    }

    /// Returns the wrapped C pointer
    ///
    /// # Safety
    /// This method returns a raw C pointer
    pub unsafe fn c_driver(&self) -> GDALDriverH {
        self.c_driver
    }

    pub fn short_name(&self) -> String {
        let rv = unsafe { gdal_sys::GDALGetDriverShortName(self.c_driver) };
        _string(rv)
    }

    /// Create a raster dataset with `bands` bands of type `T`.
    ///
    /// `filename` may be empty for drivers that live in memory.
    pub fn create_with_band_type<T: GdalType>(
        &self,
        filename: &str,
        size_x: usize,
        size_y: usize,
        bands: usize,
    ) -> GdalResult<Dataset> {
        let c_filename = CString::new(filename)?;
        let c_dataset = unsafe {
            gdal_sys::GDALCreate(
                self.c_driver,
                c_filename.as_ptr(),
                size_x as c_int,
                size_y as c_int,
                bands as c_int,
                T::gdal_type(),
                ptr::null_mut(),
            )
        };

        if c_dataset.is_null() {
            return Err(_last_null_pointer_err("GDALCreate"));
        };

        Ok(unsafe { Dataset::from_c_dataset(c_dataset) })
    }
}
