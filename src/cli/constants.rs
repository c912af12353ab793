// cli/constants.rs — Display-level global and output macros
//
// Diagnostics from the registry and the parser are written through the
// `displaylevel!` macro below, gated by a process-wide display level:
//
//   0 = no output; 1 = errors only; 2 = normal (default); 3 = banner / info; 4 = trace

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::{DISPLAY_LEVEL_DEFAULT, ENV_DISPLAY_LEVEL};

pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Reads `CMDLINE_DISPLAY_LEVEL` and returns the level it selects.
pub fn init_display_level() -> u32 {
    init_display_level_from(std::env::var(ENV_DISPLAY_LEVEL).ok().as_deref())
}

/// Testable core of [`init_display_level`].
///
/// Pass `Some(s)` with the raw variable value, or `None` to simulate the
/// variable being unset. Unparsable values fall back to the default level
/// with a warning.
pub fn init_display_level_from(env_val: Option<&str>) -> u32 {
    match env_val {
        None => DISPLAY_LEVEL_DEFAULT,
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(level) => level,
            Err(_) => {
                crate::displaylevel!(
                    2,
                    "Ignore environment variable setting {}={}: not a valid unsigned value \n",
                    ENV_DISPLAY_LEVEL,
                    raw
                );
                DISPLAY_LEVEL_DEFAULT
            }
        },
    }
}

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
