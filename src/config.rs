//! GDAL Configuration Functions
//!
//! GDAL reads runtime options from environment variables or from the functions
//! in this module; values set here override the environment.
//!
//! ```no_run
//! use gridvectors::config::*;
//!
//! // Let GDAL rasterize with a larger block cache
//! set_config_option("GDAL_CACHEMAX", "512").unwrap();
//! assert_eq!(get_config_option("GDAL_CACHEMAX", "").unwrap(), "512");
//! clear_config_option("GDAL_CACHEMAX").unwrap();
//!
//! // Send GDAL's own diagnostics through `tracing`
//! route_errors_to_tracing();
//! ```

use std::ffi::{c_char, CString};

use gdal_sys::{CPLErr, CPLErrorNum};

use crate::errors::{CplErrType, GdalResult};
use crate::utils::_string;

/// Set a GDAL library configuration option
pub fn set_config_option(key: &str, value: &str) -> GdalResult<()> {
    let c_key = CString::new(key.as_bytes())?;
    let c_val = CString::new(value.as_bytes())?;
    unsafe {
        gdal_sys::CPLSetConfigOption(c_key.as_ptr(), c_val.as_ptr());
    };
    Ok(())
}

/// Get the value of a GDAL library configuration option
///
/// If `key` is not set, `default` is returned.
pub fn get_config_option(key: &str, default: &str) -> GdalResult<String> {
    let c_key = CString::new(key.as_bytes())?;
    let c_default = CString::new(default.as_bytes())?;
    let rv = unsafe { gdal_sys::CPLGetConfigOption(c_key.as_ptr(), c_default.as_ptr()) };
    Ok(_string(rv))
}

/// Clear the value of a GDAL library configuration option
pub fn clear_config_option(key: &str) -> GdalResult<()> {
    let c_key = CString::new(key.as_bytes())?;
    unsafe {
        gdal_sys::CPLSetConfigOption(c_key.as_ptr(), ::std::ptr::null());
    };
    Ok(())
}

unsafe extern "C" fn tracing_error_handler(
    error_type: CPLErr::Type,
    error_num: CPLErrorNum,
    error_msg_ptr: *const c_char,
) {
    let msg = _string(error_msg_ptr);
    match CplErrType::from(error_type) {
        CplErrType::None => tracing::trace!(target: "gdal", code = error_num, "{msg}"),
        CplErrType::Debug => tracing::debug!(target: "gdal", code = error_num, "{msg}"),
        CplErrType::Warning => tracing::warn!(target: "gdal", code = error_num, "{msg}"),
        CplErrType::Failure | CplErrType::Fatal => {
            tracing::error!(target: "gdal", code = error_num, "{msg}")
        }
    }
}

/// Replace GDAL's stderr error printer with one that emits `tracing` events
/// under the `gdal` target.
///
/// Errors are still recorded as GDAL's "last error", so functions returning
/// [`GdalError::CplError`](crate::errors::GdalError::CplError) keep working.
pub fn route_errors_to_tracing() {
    unsafe {
        gdal_sys::CPLSetErrorHandler(Some(tracing_error_handler));
    };
}

/// Restore GDAL's default error printer.
pub fn restore_default_error_handler() {
    unsafe {
        gdal_sys::CPLSetErrorHandler(None);
    };
}
