//! A C API for parsing names.
//!
//! Strings returned by the getters are owned by the caller and must be
//! released with `nameparser_free_string`; names returned by
//! `nameparser_parse` must be released with `nameparser_free_name`.

use super::{HumanName, Parser, Prefer};
use libc::c_char;
use std::ffi::{CStr, CString};
use std::ptr;

// C strings can't hold interior NULs, so anything after one is dropped
fn to_char_star(s: &str) -> *mut c_char {
    let s = s.split('\0').next().unwrap_or_default();
    CString::new(s).map_or(ptr::null_mut(), CString::into_raw)
}

macro_rules! component_getter {
    ($name:ident, $method:ident) => {
        /// # Safety
        ///
        /// `name` must point to a live name returned by `nameparser_parse`.
        #[no_mangle]
        pub unsafe extern "C" fn $name(name: &HumanName) -> *mut c_char {
            to_char_star(&name.$method())
        }
    };
}

/// Parse a NUL-terminated UTF-8 string (invalid sequences are replaced).
/// Returns null if `input` is null.
///
/// # Safety
///
/// `input` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn nameparser_parse(
    input: *const c_char,
    multiple_names: bool,
    first_over_prefix: bool,
) -> *mut HumanName {
    let input = if input.is_null() {
        None
    } else {
        Some(CStr::from_ptr(input).to_string_lossy())
    };

    let mut prefer = Prefer::empty();
    prefer.set(Prefer::FIRST_OVER_PREFIX, first_over_prefix);

    let parser = Parser::new()
        .multiple_names(multiple_names)
        .prefer(prefer);

    match parser.try_parse(input.as_deref()) {
        Ok(name) => Box::into_raw(Box::new(name)),
        Err(_) => ptr::null_mut(),
    }
}

/// # Safety
///
/// `name_ptr` must be null or a pointer returned by `nameparser_parse` which
/// has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn nameparser_free_name(name_ptr: *mut HumanName) {
    if !name_ptr.is_null() {
        drop(Box::from_raw(name_ptr));
    }
}

/// # Safety
///
/// `str_ptr` must be null or a string returned by one of the getters which has
/// not already been freed.
#[no_mangle]
pub unsafe extern "C" fn nameparser_free_string(str_ptr: *mut c_char) {
    if !str_ptr.is_null() {
        drop(CString::from_raw(str_ptr));
    }
}

component_getter!(nameparser_title, title);
component_getter!(nameparser_first, first);
component_getter!(nameparser_middle, middle);
component_getter!(nameparser_last, last);
component_getter!(nameparser_suffix, suffix);
component_getter!(nameparser_nickname, nickname);
component_getter!(nameparser_last_base, last_base);
component_getter!(nameparser_last_prefixes, last_prefixes);
component_getter!(nameparser_full_name, full_name);
component_getter!(nameparser_original, original);
component_getter!(nameparser_display_full, display_full);

/// # Safety
///
/// `name` must point to a live name returned by `nameparser_parse`.
#[no_mangle]
pub unsafe extern "C" fn nameparser_is_unparsable(name: &HumanName) -> bool {
    name.is_unparsable()
}

/// # Safety
///
/// `name` must point to a live name returned by `nameparser_parse`.
#[no_mangle]
pub unsafe extern "C" fn nameparser_normalize(name: &mut HumanName) {
    name.normalize();
}

/// # Safety
///
/// Both arguments must point to live names returned by `nameparser_parse`.
#[no_mangle]
pub unsafe extern "C" fn nameparser_eq(a: &HumanName, b: &HumanName) -> bool {
    a == b
}

/// # Safety
///
/// `name` must point to a live name returned by `nameparser_parse`.
#[no_mangle]
pub unsafe extern "C" fn nameparser_additional_count(name: &HumanName) -> usize {
    name.additional_names().len()
}

/// Borrow one of the additional names; it lives as long as `name` does and
/// must not be freed separately. Returns null if `index` is out of range.
///
/// # Safety
///
/// `name` must point to a live name returned by `nameparser_parse`.
#[no_mangle]
pub unsafe extern "C" fn nameparser_additional_name(
    name: &HumanName,
    index: usize,
) -> *const HumanName {
    name.additional_names()
        .get(index)
        .map_or(ptr::null(), |n| n as *const HumanName)
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn take(s: *mut c_char) -> String {
        let result = CStr::from_ptr(s).to_string_lossy().into_owned();
        nameparser_free_string(s);
        result
    }

    #[test]
    fn parse_and_read() {
        let input = CString::new("Dr. Juan Q. Xavier de la Vega III").unwrap();
        unsafe {
            let name = nameparser_parse(input.as_ptr(), false, false);
            assert!(!name.is_null());
            assert_eq!("Dr.", take(nameparser_title(&*name)));
            assert_eq!("Juan", take(nameparser_first(&*name)));
            assert_eq!("de la", take(nameparser_last_prefixes(&*name)));
            assert!(!nameparser_is_unparsable(&*name));
            nameparser_free_name(name);
        }
    }

    #[test]
    fn null_input() {
        unsafe {
            assert!(nameparser_parse(ptr::null(), false, false).is_null());
            nameparser_free_name(ptr::null_mut());
            nameparser_free_string(ptr::null_mut());
        }
    }

    #[test]
    fn additional_names() {
        let input = CString::new("John D. and Catherine T. MacArthur").unwrap();
        unsafe {
            let name = nameparser_parse(input.as_ptr(), true, false);
            assert_eq!(1, nameparser_additional_count(&*name));

            let other = nameparser_additional_name(&*name, 0);
            assert_eq!("Catherine", take(nameparser_first(&*other)));
            assert!(nameparser_additional_name(&*name, 1).is_null());
            nameparser_free_name(name);
        }
    }

    #[test]
    fn normalize_and_compare() {
        let a = CString::new("john x smith").unwrap();
        let b = CString::new("Smith, John X").unwrap();
        unsafe {
            let a = nameparser_parse(a.as_ptr(), false, false);
            let b = nameparser_parse(b.as_ptr(), false, false);
            assert!(!nameparser_eq(&*a, &*b));
            nameparser_normalize(&mut *a);
            assert!(nameparser_eq(&*a, &*b));
            nameparser_free_name(a);
            nameparser_free_name(b);
        }
    }
}
