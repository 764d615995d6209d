//! Timestamped record output.
//!
//! [`LogWriter`] ties the pieces together: a keyed lock from
//! [`crate::lock`], rotation from [`crate::session`] and stamps from
//! [`crate::timestamp`]. The [`log_to!`](crate::log_to) and
//! [`print_to!`](crate::print_to) macros accept any number of [`Loggable`]
//! values.
//!
//! # Example
//!
//! ```no_run
//! use daylog::{log_to, print_to, LogWriter};
//!
//! let writer = LogWriter::new("Log/");
//! log_to!(writer, "connected", 3, "peers")?;
//! print_to!(writer, "ready");
//! # Ok::<(), daylog::DaylogError>(())
//! ```

mod log_writer;
mod loggable;

pub use log_writer::{Console, LogWriter, LogWriterBuilder};
pub use loggable::{join_args, Loggable};

/// Write one record through [`LogWriter::log`].
#[macro_export]
macro_rules! log_to {
    ($writer:expr $(, $arg:expr)* $(,)?) => {
        $writer.log(&[$(&$arg as &dyn $crate::writer::Loggable),*])
    };
}

/// Write one record through [`LogWriter::print`].
#[macro_export]
macro_rules! print_to {
    ($writer:expr $(, $arg:expr)* $(,)?) => {
        $writer.print(&[$(&$arg as &dyn $crate::writer::Loggable),*])
    };
}
