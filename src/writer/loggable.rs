//! Text conversion for logged values.

use std::fmt::Display;

/// A value that can appear in a log record.
///
/// Every [`Display`] type is loggable. Types without a `Display` impl can
/// implement this trait directly.
pub trait Loggable {
    /// UTF-8 text of the value.
    fn to_text(&self) -> String;

    /// UTF-16 text of the value, for wide-character consumers.
    fn to_wide_text(&self) -> Vec<u16> {
        self.to_text().encode_utf16().collect()
    }
}

impl<T: Display + ?Sized> Loggable for T {
    fn to_text(&self) -> String {
        self.to_string()
    }
}

/// Join the text of `args` with single spaces.
pub fn join_args(args: &[&dyn Loggable]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&arg.to_text());
    }
    out
}
