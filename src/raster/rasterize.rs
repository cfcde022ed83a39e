use std::ffi::{c_char, c_int};
use std::fmt;
use std::ptr;

use gdal_sys::{self, CPLErr};

use crate::cpl::CslStringList;
use crate::dataset::Dataset;
use crate::errors::{GdalError, GdalResult};
use crate::utils::_last_cpl_err;
use crate::vector::Layer;

/// What gets written into the cells a feature covers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Burn {
    /// Burn the same constant into every covered cell.
    Value(i64),
    /// Burn each feature's value of the named attribute field.
    Attribute(String),
}

impl From<i64> for Burn {
    fn from(value: i64) -> Self {
        Burn::Value(value)
    }
}

impl From<i32> for Burn {
    fn from(value: i32) -> Self {
        Burn::Value(value.into())
    }
}

impl From<&str> for Burn {
    fn from(field: &str) -> Self {
        Burn::Attribute(field.to_string())
    }
}

impl From<String> for Burn {
    fn from(field: String) -> Self {
        Burn::Attribute(field)
    }
}

impl fmt::Display for Burn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Burn::Value(value) => write!(f, "value {value}"),
            Burn::Attribute(field) => write!(f, "attribute '{field}'"),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MergeAlgorithm {
    #[default]
    Replace,
    Add,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OptimizeMode {
    #[default]
    Automatic,
    Raster,
    Vector,
}

/// Options that specify how to rasterize a layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RasterizeOptions {
    /// Set to `true` to set all pixels touched by the line or
    /// polygons, not just those whose center is within the polygon or
    /// that are selected by brezenhams line algorithm. Defaults to
    /// `false`.
    pub all_touched: bool,

    /// May be `MergeAlgorithm::Replace` (the default) or
    /// `MergeAlgorithm::Add`. `Replace` results in overwriting of
    /// value, while `Add` adds the new value to the existing raster,
    /// suitable for heatmaps for instance.
    pub merge_algorithm: MergeAlgorithm,

    /// The height in lines of the chunk to operate on. Zero lets GDAL
    /// derive it from its block cache size. Not used in `OPTIM=RASTER`
    /// mode.
    pub chunk_y_size: usize,

    pub optimize: OptimizeMode,
}

impl RasterizeOptions {
    fn to_options(self, burn: &Burn) -> GdalResult<CslStringList> {
        let mut options = CslStringList::new();

        options.set_name_value(
            "ALL_TOUCHED",
            if self.all_touched { "TRUE" } else { "FALSE" },
        )?;
        options.set_name_value(
            "MERGE_ALG",
            match self.merge_algorithm {
                MergeAlgorithm::Replace => "REPLACE",
                MergeAlgorithm::Add => "ADD",
            },
        )?;
        options.set_name_value("CHUNKYSIZE", &self.chunk_y_size.to_string())?;
        options.set_name_value(
            "OPTIM",
            match self.optimize {
                OptimizeMode::Automatic => "AUTO",
                OptimizeMode::Raster => "RASTER",
                OptimizeMode::Vector => "VECTOR",
            },
        )?;
        if let Burn::Attribute(field) = burn {
            options.set_name_value("ATTRIBUTE", field)?;
        }

        Ok(options)
    }
}

/// Burn every feature of `layer` into the `bands` of `dataset`.
///
/// Band indices start at 1. The layer's coordinates must already be
/// georeferenced like `dataset`. With [`Burn::Attribute`], GDAL reads the burn
/// value of each feature from that field and reports a missing field as a
/// CPL error.
pub fn rasterize_layer(
    dataset: &mut Dataset,
    bands: &[usize],
    layer: &Layer,
    burn: &Burn,
    options: RasterizeOptions,
) -> GdalResult<()> {
    if bands.is_empty() {
        return Err(GdalError::BadArgument(
            "at least one band is required".to_string(),
        ));
    }
    let raster_count = dataset.raster_count();
    if let Some(band) = bands.iter().find(|&&b| b == 0 || b > raster_count) {
        return Err(GdalError::BadArgument(format!(
            "band {band} is out of range 1..={raster_count}"
        )));
    }

    let bands: Vec<c_int> = bands.iter().map(|&band| band as c_int).collect();
    let mut layers = [unsafe { layer.c_layer() }];
    // one value per band, for our single layer
    let mut burn_values: Vec<f64> = match burn {
        Burn::Value(value) => vec![*value as f64; bands.len()],
        Burn::Attribute(_) => Vec::new(),
    };
    let burn_ptr = if burn_values.is_empty() {
        ptr::null_mut()
    } else {
        burn_values.as_mut_ptr()
    };

    let c_options = options.to_options(burn)?;
    unsafe {
        // The C function takes `bands` and `options` without mention
        // of `const`, so we cast here.
        let error = gdal_sys::GDALRasterizeLayers(
            dataset.c_dataset(),
            bands.len() as c_int,
            bands.as_ptr() as *mut c_int,
            layers.len() as c_int,
            layers.as_mut_ptr(),
            None,
            ptr::null_mut(),
            burn_ptr,
            c_options.as_ptr() as *mut *mut c_char,
            None,
            ptr::null_mut(),
        );
        if error != CPLErr::CE_None {
            return Err(_last_cpl_err(error));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rasterizeoptions_as_options() {
        let c_options = RasterizeOptions::default()
            .to_options(&Burn::Value(1))
            .unwrap();
        assert_eq!(
            c_options.fetch_name_value("ALL_TOUCHED").unwrap(),
            Some("FALSE".to_string())
        );
        assert_eq!(c_options.fetch_name_value("ATTRIBUTE").unwrap(), None);
        assert_eq!(
            c_options.fetch_name_value("MERGE_ALG").unwrap(),
            Some("REPLACE".to_string())
        );
        assert_eq!(
            c_options.fetch_name_value("CHUNKYSIZE").unwrap(),
            Some("0".to_string())
        );
        assert_eq!(
            c_options.fetch_name_value("OPTIM").unwrap(),
            Some("AUTO".to_string())
        );
    }

    #[test]
    fn test_attribute_burn_sets_attribute_option() {
        let options = RasterizeOptions {
            all_touched: true,
            merge_algorithm: MergeAlgorithm::Add,
            ..Default::default()
        };
        let c_options = options.to_options(&Burn::from("class")).unwrap();
        assert_eq!(
            c_options.fetch_name_value("ATTRIBUTE").unwrap(),
            Some("class".to_string())
        );
        assert_eq!(
            c_options.fetch_name_value("ALL_TOUCHED").unwrap(),
            Some("TRUE".to_string())
        );
        assert_eq!(
            c_options.fetch_name_value("MERGE_ALG").unwrap(),
            Some("ADD".to_string())
        );
    }

    #[test]
    fn test_burn_from_conversions() {
        assert_eq!(Burn::from(5), Burn::Value(5));
        assert_eq!(Burn::from(5_i64), Burn::Value(5));
        assert_eq!(Burn::from("class"), Burn::Attribute("class".to_string()));
        assert_eq!(Burn::from(String::from("id")).to_string(), "attribute 'id'");
    }
}
