use std::ffi::CString;
use std::marker::PhantomData;

use gdal_sys::{self, OGRLayerH};

use crate::dataset::Dataset;
use crate::errors::GdalResult;
use crate::utils::_string;

/// Layer in a vector dataset
///
/// ```no_run
/// use std::path::Path;
/// use gridvectors::Dataset;
///
/// let dataset = Dataset::open_vector(Path::new("fixtures/parcels.geojson")).unwrap();
/// let layer = dataset.layer(0).unwrap();
/// println!("{} has {} features", layer.name(), layer.feature_count());
/// ```
pub struct Layer<'a> {
    c_layer: OGRLayerH,
    phantom: PhantomData<&'a Dataset>,
}

impl<'a> Layer<'a> {
    /// Returns the C wrapped pointer
    ///
    /// # Safety
    /// This method returns a raw C pointer
    pub unsafe fn c_layer(&self) -> OGRLayerH {
        self.c_layer
    }

    /// Creates a new Layer from a GDAL layer pointer
    ///
    /// # Safety
    /// This method operates on a raw C pointer
    pub(crate) unsafe fn from_c_layer(_: &'a Dataset, c_layer: OGRLayerH) -> Self {
        Layer {
            c_layer,
            phantom: PhantomData,
        }
    }

    pub fn name(&self) -> String {
        let rv = unsafe { gdal_sys::OGR_L_GetName(self.c_layer) };
        _string(rv)
    }

    /// Number of features, scanning the source if the driver can't tell cheaply.
    pub fn feature_count(&self) -> u64 {
        (unsafe { gdal_sys::OGR_L_GetFeatureCount(self.c_layer, 1) }) as u64
    }

    /// Index of the attribute field called `name`, if the layer has one.
    pub fn field_index(&self, name: &str) -> GdalResult<Option<usize>> {
        let c_name = CString::new(name)?;
        let idx = unsafe {
            let c_defn = gdal_sys::OGR_L_GetLayerDefn(self.c_layer);
            gdal_sys::OGR_FD_GetFieldIndex(c_defn, c_name.as_ptr())
        };
        Ok((idx >= 0).then_some(idx as usize))
    }
}
