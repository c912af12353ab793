// config.rs — Compile-time configuration constants.
//
// Everything the usage renderer and the help shortcut rely on lives here so
// the layout of the help block can be tuned in one place.

// Width of the `-flag,--name` column in the usage block. Labels longer than
// this are not truncated; the description simply follows immediately.
pub const USAGE_LABEL_WIDTH: usize = 25;

// Indentation written before every option line of the usage block.
pub const USAGE_INDENT: &str = "    ";

// Invocation pattern shown after the program name in the usage header.
pub const USAGE_PATTERN: &str = "[option=value]";

// Prefix written before an enumerated option's permitted values.
pub const CHOICES_PREFIX: &str = " The accepted options: ";

// Separator written after every permitted value (including the last one).
pub const CHOICES_SEPARATOR: &str = ", ";

// Synthetic help option, injected at the start of every parse.
pub const HELP_FLAG: &str = "-h";
pub const HELP_NAME: &str = "--help";
pub const HELP_DESC: &str = "Print this help message.";

// Environment variable consulted by binaries to set the display level.
pub const ENV_DISPLAY_LEVEL: &str = "CMDLINE_DISPLAY_LEVEL";

// Display level used when `CMDLINE_DISPLAY_LEVEL` is unset or unparsable.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;
