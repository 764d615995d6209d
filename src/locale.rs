//! Pass-through to the host locale facility.
//!
//! Rust writes UTF-8 regardless of locale; these calls only forward the name to
//! the C runtime so that foreign code sharing the process sees the same
//! setting. An empty name selects the locale from the environment.

use crate::error::{DaylogError, Result};

/// Set the character-type locale used for console text.
pub fn set_locale_console(name: &str) -> Result<()> {
    set(Category::Console, name)
}

/// Set every locale category for the process.
pub fn set_locale_global(name: &str) -> Result<()> {
    set(Category::Global, name)
}

#[derive(Debug, Clone, Copy)]
enum Category {
    Console,
    Global,
}

#[cfg(unix)]
fn set(category: Category, name: &str) -> Result<()> {
    use std::ffi::CString;

    let c_name = CString::new(name).map_err(|_| DaylogError::LocaleInit {
        locale: name.to_string(),
    })?;
    let category = match category {
        Category::Console => libc::LC_CTYPE,
        Category::Global => libc::LC_ALL,
    };
    // SAFETY: `c_name` is a valid NUL-terminated string for the whole call.
    let result = unsafe { libc::setlocale(category, c_name.as_ptr()) };
    if result.is_null() {
        return Err(DaylogError::LocaleInit {
            locale: name.to_string(),
        });
    }
    tracing::debug!("Locale set to {:?} ({:?})", name, category);
    Ok(())
}

#[cfg(not(unix))]
fn set(_category: Category, name: &str) -> Result<()> {
    match name {
        "" | "C" => Ok(()),
        _ => Err(DaylogError::LocaleInit {
            locale: name.to_string(),
        }),
    }
}
