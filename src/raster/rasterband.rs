use std::ffi::{c_int, c_void};
use std::marker::PhantomData;

use gdal_sys::{self, CPLErr, GDALRWFlag, GDALRasterBandH};
use ndarray::Array2;

use crate::dataset::Dataset;
use crate::errors::GdalResult;
use crate::raster::{GDALDataType, GdalType};
use crate::utils::_last_cpl_err;

/// Represents a single band of a dataset.
///
/// This object carries the lifetime of the dataset that
/// contains it. This is necessary to prevent the dataset
/// from being dropped before the band.
pub struct RasterBand<'a> {
    c_rasterband: GDALRasterBandH,
    phantom: PhantomData<&'a Dataset>,
}

impl<'a> RasterBand<'a> {
    /// Returns the wrapped C pointer
    ///
    /// # Safety
    /// This method returns a raw C pointer
    pub unsafe fn c_rasterband(&self) -> GDALRasterBandH {
        self.c_rasterband
    }

    /// Create a RasterBand from a wrapped C pointer
    ///
    /// # Safety
    /// This method operates on a raw C pointer
    pub unsafe fn from_c_rasterband(_: &'a Dataset, c_rasterband: GDALRasterBandH) -> Self {
        RasterBand {
            c_rasterband,
            phantom: PhantomData,
        }
    }

    /// Get x-size of the band
    pub fn x_size(&self) -> usize {
        let out = unsafe { gdal_sys::GDALGetRasterBandXSize(self.c_rasterband) };
        out as usize
    }

    /// Get y-size of the band
    pub fn y_size(&self) -> usize {
        let out = unsafe { gdal_sys::GDALGetRasterBandYSize(self.c_rasterband) };
        out as usize
    }

    /// Get dimensions of the band as `(columns, rows)`.
    pub fn size(&self) -> (usize, usize) {
        (self.x_size(), self.y_size())
    }

    pub fn band_type(&self) -> GDALDataType::Type {
        unsafe { gdal_sys::GDALGetRasterDataType(self.c_rasterband) }
    }

    /// Fill every pixel of the band with `value`.
    pub fn fill(&mut self, value: f64) -> GdalResult<()> {
        let rv = unsafe { gdal_sys::GDALFillRaster(self.c_rasterband, value, 0.0) };
        if rv != CPLErr::CE_None {
            return Err(_last_cpl_err(rv));
        }
        Ok(())
    }

    pub fn no_data_value(&self) -> Option<f64> {
        let mut pb_success = 1;
        let no_data =
            unsafe { gdal_sys::GDALGetRasterNoDataValue(self.c_rasterband, &mut pb_success) };
        if pb_success == 1 {
            return Some(no_data);
        }
        None
    }

    /// Set the no-data value, or remove it with `None`.
    pub fn set_no_data_value(&mut self, no_data: Option<f64>) -> GdalResult<()> {
        let rv = if let Some(no_data) = no_data {
            unsafe { gdal_sys::GDALSetRasterNoDataValue(self.c_rasterband, no_data) }
        } else {
            unsafe { gdal_sys::GDALDeleteRasterNoDataValue(self.c_rasterband) }
        };

        if rv != CPLErr::CE_None {
            Err(_last_cpl_err(rv))
        } else {
            Ok(())
        }
    }

    /// Read data from this band into a slice. T implements 'GdalType'
    ///
    /// # Arguments
    /// * window - the window position from top left
    /// * window_size - the window size (GDAL will interpolate data if window_size != size)
    /// * size - the desired size to read
    /// * buffer - a slice to hold the data (length must equal product of size parameter)
    pub fn read_into_slice<T: GdalType>(
        &self,
        window: (isize, isize),
        window_size: (usize, usize),
        size: (usize, usize),
        buffer: &mut [T],
    ) -> GdalResult<()> {
        let pixels = size.0 * size.1;
        assert_eq!(buffer.len(), pixels);

        let rv = unsafe {
            gdal_sys::GDALRasterIO(
                self.c_rasterband,
                GDALRWFlag::GF_Read,
                window.0 as c_int,
                window.1 as c_int,
                window_size.0 as c_int,
                window_size.1 as c_int,
                buffer.as_mut_ptr() as *mut c_void,
                size.0 as c_int,
                size.1 as c_int,
                T::gdal_type(),
                0,
                0,
            )
        };
        if rv != CPLErr::CE_None {
            return Err(_last_cpl_err(rv));
        }

        Ok(())
    }

    /// Read a 'Array2<T>' from this band. T implements 'GdalType'.
    ///
    /// The array shape is (rows, cols) while raster sizes are (cols in x-axis, rows in y-axis).
    pub fn read_as_array<T: GdalType>(
        &self,
        window: (isize, isize),
        window_size: (usize, usize),
        array_size: (usize, usize),
    ) -> GdalResult<Array2<T>> {
        let mut data = vec![T::default(); array_size.0 * array_size.1];
        self.read_into_slice(window, window_size, array_size, &mut data)?;

        Ok(Array2::from_shape_vec(
            (array_size.1, array_size.0),
            data,
        )?)
    }

    /// Read the full band as an `Array2<T>` of shape (rows, cols).
    pub fn read_band_as_array<T: GdalType>(&self) -> GdalResult<Array2<T>> {
        let size = self.size();
        self.read_as_array::<T>((0, 0), size, size)
    }
}
