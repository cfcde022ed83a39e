use std::ffi::{c_int, c_uint, CString};
use std::path::Path;
use std::ptr;

use bitflags::bitflags;
use gdal_sys::{self, CPLErr, GDALDatasetH};

use crate::driver::_register_drivers;
use crate::errors::GdalResult;
use crate::geo_transform::GeoTransform;
use crate::raster::RasterBand;
use crate::utils::{_last_cpl_err, _last_null_pointer_err, _path_to_c_string};
use crate::vector::Layer;

bitflags! {
    /// GDal extended open flags used by [`Dataset::open_ex`].
    ///
    /// Used in the `nOpenFlags` argument to [`GDALOpenEx`](https://gdal.org/api/raster_c_api.html#_CPPv410GDALOpenExPKcjPPCKcPPCKcPPCKc).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GdalOpenFlags: c_uint {
        /// Open in read-only mode (default).
        const GDAL_OF_READONLY = 0x00;
        /// Open in update mode.
        const GDAL_OF_UPDATE = 0x01;
        /// Allow raster drivers to be used.
        const GDAL_OF_RASTER = 0x02;
        /// Allow vector drivers to be used.
        const GDAL_OF_VECTOR = 0x04;
        /// Emit error message in case of failed open.
        const GDAL_OF_VERBOSE_ERROR = 0x40;
    }
}

impl Default for GdalOpenFlags {
    fn default() -> GdalOpenFlags {
        GdalOpenFlags::GDAL_OF_READONLY
    }
}

/// Wrapper around a [`GDALDataset`][GDALDataset] object.
///
/// Holds either an in-memory raster built by [`Driver::create_with_band_type`](crate::Driver::create_with_band_type)
/// or a vector source opened with [`Dataset::open_vector`]. The handle is closed on drop.
///
/// [GDALDataset]: https://gdal.org/api/gdaldataset_cpp.html#_CPPv411GDALDataset
#[derive(Debug)]
pub struct Dataset {
    c_dataset: GDALDatasetH,
}

impl Dataset {
    /// Returns the wrapped C pointer
    ///
    /// # Safety
    /// This method returns a raw C pointer
    pub unsafe fn c_dataset(&self) -> GDALDatasetH {
        self.c_dataset
    }

    /// Creates a new Dataset by wrapping a C pointer
    ///
    /// # Safety
    /// This method operates on a raw C pointer
    pub unsafe fn from_c_dataset(c_dataset: GDALDatasetH) -> Dataset {
        Dataset { c_dataset }
    }

    /// Open a dataset at `path` with the given open flags.
    pub fn open_ex(path: &Path, open_flags: GdalOpenFlags) -> GdalResult<Dataset> {
        _register_drivers();
        let c_filename = _path_to_c_string(path)?;
        let c_dataset = unsafe {
            gdal_sys::GDALOpenEx(
                c_filename.as_ptr(),
                open_flags.bits(),
                ptr::null(),
                ptr::null(),
                ptr::null(),
            )
        };
        if c_dataset.is_null() {
            return Err(_last_null_pointer_err("GDALOpenEx"));
        }
        Ok(Dataset { c_dataset })
    }

    /// Open any vector source GDAL understands (Shapefile, GeoJSON, GeoPackage, ...).
    pub fn open_vector(path: &Path) -> GdalResult<Dataset> {
        Self::open_ex(
            path,
            GdalOpenFlags::GDAL_OF_VECTOR | GdalOpenFlags::GDAL_OF_VERBOSE_ERROR,
        )
    }

    /// Raster size as `(columns, rows)`.
    pub fn raster_size(&self) -> (usize, usize) {
        let size_x = unsafe { gdal_sys::GDALGetRasterXSize(self.c_dataset) } as usize;
        let size_y = unsafe { gdal_sys::GDALGetRasterYSize(self.c_dataset) } as usize;
        (size_x, size_y)
    }

    pub fn raster_count(&self) -> usize {
        (unsafe { gdal_sys::GDALGetRasterCount(self.c_dataset) }) as usize
    }

    /// Fetch a band. Band indices start at 1.
    pub fn rasterband(&self, band_index: usize) -> GdalResult<RasterBand<'_>> {
        unsafe {
            let c_band = gdal_sys::GDALGetRasterBand(self.c_dataset, band_index as c_int);
            if c_band.is_null() {
                return Err(_last_null_pointer_err("GDALGetRasterBand"));
            }
            Ok(RasterBand::from_c_rasterband(self, c_band))
        }
    }

    /// Set the affine transformation coefficients.
    ///
    /// See [`GeoTransform`] for the meaning of each coefficient.
    pub fn set_geo_transform(&mut self, transformation: &GeoTransform) -> GdalResult<()> {
        let rv = unsafe {
            gdal_sys::GDALSetGeoTransform(self.c_dataset, transformation.as_ptr() as *mut f64)
        };
        if rv != CPLErr::CE_None {
            return Err(_last_cpl_err(rv));
        }
        Ok(())
    }

    /// Get the affine transformation coefficients.
    pub fn geo_transform(&self) -> GdalResult<GeoTransform> {
        let mut transformation = GeoTransform::default();
        let rv =
            unsafe { gdal_sys::GDALGetGeoTransform(self.c_dataset, transformation.as_mut_ptr()) };

        // check if the dataset has a GeoTransform
        if rv != CPLErr::CE_None {
            return Err(_last_cpl_err(rv));
        }
        Ok(transformation)
    }

    pub fn layer_count(&self) -> usize {
        (unsafe { gdal_sys::GDALDatasetGetLayerCount(self.c_dataset) }) as usize
    }

    /// Get the layer at `idx`, counting from 0.
    pub fn layer(&self, idx: usize) -> GdalResult<Layer<'_>> {
        let c_layer = unsafe { gdal_sys::GDALDatasetGetLayer(self.c_dataset, idx as c_int) };
        if c_layer.is_null() {
            return Err(_last_null_pointer_err("GDALDatasetGetLayer"));
        }
        Ok(unsafe { Layer::from_c_layer(self, c_layer) })
    }

    pub fn layer_by_name(&self, name: &str) -> GdalResult<Layer<'_>> {
        let c_name = CString::new(name)?;
        let c_layer =
            unsafe { gdal_sys::GDALDatasetGetLayerByName(self.c_dataset, c_name.as_ptr()) };
        if c_layer.is_null() {
            return Err(_last_null_pointer_err("GDALDatasetGetLayerByName"));
        }
        Ok(unsafe { Layer::from_c_layer(self, c_layer) })
    }
}

impl Drop for Dataset {
    fn drop(&mut self) {
        unsafe {
            gdal_sys::GDALClose(self.c_dataset);
        }
    }
}
