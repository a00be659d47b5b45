// FFI functions are inherently unsafe; callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// stemma-ffi: C-compatible FFI layer for StemmerHandle.
//
// Memory management rules:
// - Opaque `StemmerHandle` pointer: created by `stemma_new`, freed by `stemma_free`.
// - Returned strings: caller must free with `stemma_free_str`.
// - Returned string arrays: caller must free with `stemma_free_str_array`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use stemma_de::handle::StemmerHandle;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new stemmer handle for a language code ("de", "de-AT", "deu", ...).
///
/// A NULL `language` selects German.
///
/// Returns an opaque pointer on success, NULL on failure.
/// On failure, if `error_out` is non-NULL, it receives a heap-allocated error string
/// that the caller must free with `stemma_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stemma_new(
    language: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut StemmerHandle {
    let code = if language.is_null() {
        "de"
    } else {
        match cstr_to_str(language) {
            Some(code) => code,
            None => {
                set_error(error_out, "language is not valid UTF-8");
                return ptr::null_mut();
            }
        }
    };

    match StemmerHandle::new(code) {
        Ok(handle) => Box::into_raw(Box::new(handle)),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free a StemmerHandle created by `stemma_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stemma_free(handle: *mut StemmerHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Stemming ────────────────────────────────────────────────────

/// Stem a word in the handle's language.
///
/// Returns a heap-allocated C string. Caller must free with `stemma_free_str`.
/// Returns NULL on a NULL handle or invalid input.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stemma_stem(
    handle: *const StemmerHandle,
    word: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else { return ptr::null_mut(); };
    let Some(word) = cstr_to_str(word) else { return ptr::null_mut(); };
    str_to_c(&handle.stem(word))
}

/// Stem a word in an explicitly named language.
///
/// Returns a heap-allocated C string. Caller must free with `stemma_free_str`.
/// Returns NULL on invalid input or an unsupported language.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stemma_stem_in(
    handle: *const StemmerHandle,
    language: *const c_char,
    word: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else { return ptr::null_mut(); };
    let Some(language) = cstr_to_str(language) else { return ptr::null_mut(); };
    let Some(word) = cstr_to_str(word) else { return ptr::null_mut(); };
    match handle.stem_in(language, word) {
        Ok(stem) => str_to_c(&stem),
        Err(_) => ptr::null_mut(),
    }
}

/// Stem `count` words at once.
///
/// Returns a NULL-terminated array of C strings in input order. Caller must
/// free with `stemma_free_str_array`. Returns NULL if any word is NULL or
/// not valid UTF-8.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stemma_stem_words(
    handle: *const StemmerHandle,
    words: *const *const c_char,
    count: usize,
) -> *mut *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else { return ptr::null_mut(); };
    if words.is_null() && count > 0 {
        return ptr::null_mut();
    }

    let mut inputs: Vec<&str> = Vec::with_capacity(count);
    for i in 0..count {
        let Some(word) = cstr_to_str(unsafe { *words.add(i) }) else {
            return ptr::null_mut();
        };
        inputs.push(word);
    }
    strings_to_c_array(&handle.stem_words(&inputs))
}

// ── Option setters ──────────────────────────────────────────────

/// Set whether marked glides are lowercased in returned stems.
///
/// Returns 0 on success, -1 on a NULL handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stemma_set_restore_glides(
    handle: *mut StemmerHandle,
    value: c_int,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_mut() }) else { return -1; };
    handle.set_restore_glides(value != 0);
    0
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is valid for the lifetime of the library (static).
/// Do NOT free this pointer.
#[unsafe(no_mangle)]
pub extern "C" fn stemma_version() -> *const c_char {
    static VERSION: std::sync::LazyLock<CString> =
        std::sync::LazyLock::new(|| CString::new(StemmerHandle::get_version()).unwrap_or_default());
    VERSION.as_ptr()
}

/// Free a heap-allocated C string returned by stemma functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stemma_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stemma_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe { *out = str_to_c(msg); }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn strings_to_c_array(strings: &[String]) -> *mut *mut c_char {
    let mut ptrs: Vec<*mut c_char> = strings.iter().map(|s| str_to_c(s)).collect();
    ptrs.push(ptr::null_mut()); // NULL terminator
    Box::into_raw(ptrs.into_boxed_slice()).cast::<*mut c_char>()
}

fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut i = 0;
    loop {
        let p = unsafe { *arr.add(i) };
        if p.is_null() {
            break;
        }
        free_c_str(p);
        i += 1;
    }
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr, i + 1)) });
}
