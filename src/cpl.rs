//! GDAL Common Portability Library string lists.
//!
//! GDAL takes most of its tuning as `KEY=VALUE` string lists. [`CslStringList`]
//! owns one of those lists and frees it on drop.

use std::ffi::{c_char, CString};
use std::fmt::{Debug, Formatter};
use std::ptr;

use gdal_sys::{CSLCount, CSLDestroy, CSLFetchNameValue, CSLSetNameValue};

use crate::errors::{GdalError, GdalResult};
use crate::utils::_string;

/// Wraps a [`gdal_sys::CSLConstList`] (a.k.a. `char **papszStrList`).
pub struct CslStringList {
    list_ptr: *mut *mut c_char,
    // kept for `Debug`, GDAL has no cheap way to walk the list back
    keys: Vec<String>,
}

impl CslStringList {
    /// Creates an empty GDAL string list.
    pub fn new() -> Self {
        Self {
            list_ptr: ptr::null_mut(),
            keys: Vec::new(),
        }
    }

    /// Assigns `value` to `name`, overwriting an earlier value for `name`.
    ///
    /// Fails if `name` has non alphanumeric characters or `value` has newlines.
    pub fn set_name_value(&mut self, name: &str, value: &str) -> GdalResult<()> {
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(GdalError::BadArgument(format!(
                "Invalid characters in name: '{name}'"
            )));
        }
        if value.contains(['\n', '\r']) {
            return Err(GdalError::BadArgument(format!(
                "Invalid characters in value: '{value}'"
            )));
        }
        let psz_name = CString::new(name)?;
        let psz_value = CString::new(value)?;

        unsafe {
            self.list_ptr = CSLSetNameValue(self.list_ptr, psz_name.as_ptr(), psz_value.as_ptr());
        }
        if !self.keys.iter().any(|k| k == name) {
            self.keys.push(name.to_string());
        }

        Ok(())
    }

    /// Looks up the value corresponding to `key`.
    pub fn fetch_name_value(&self, key: &str) -> GdalResult<Option<String>> {
        let key = CString::new(key)?;
        let c_value = unsafe { CSLFetchNameValue(self.list_ptr, key.as_ptr()) };
        let value = if c_value.is_null() {
            None
        } else {
            Some(_string(c_value))
        };
        Ok(value)
    }

    pub fn len(&self) -> usize {
        (unsafe { CSLCount(self.list_ptr) }) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the raw pointer to the underlying data.
    pub fn as_ptr(&self) -> gdal_sys::CSLConstList {
        self.list_ptr
    }
}

impl Drop for CslStringList {
    fn drop(&mut self) {
        unsafe { CSLDestroy(self.list_ptr) }
    }
}

impl Default for CslStringList {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for CslStringList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for key in &self.keys {
            let value = self.fetch_name_value(key).ok().flatten().unwrap_or_default();
            f.write_fmt(format_args!("{key}={value}\n"))?;
        }
        Ok(())
    }
}
