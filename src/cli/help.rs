// cli/help.rs — Usage text and exit helpers
//
// Functions:
//   render_usage         → the usage block for a registry
//   print_usage          → write a `CmdLine`'s usage block to stdout
//   exit_help            → print usage, exit 0
//   exit_missing_option  → print "Missing Option: ..." + usage, exit 1
//   error_out            → print a message to stderr, exit 1

use std::fmt::Write as _;
use std::io::{self, Write as _};

use crate::cli::error::CmdLineError;
use crate::cli::parser::CmdLine;
use crate::cli::registry::Registry;
use crate::config::{
    CHOICES_PREFIX, CHOICES_SEPARATOR, USAGE_INDENT, USAGE_LABEL_WIDTH, USAGE_PATTERN,
};
use crate::{displaylevel, displayout};

/// Render the usage block for `registry`.
///
/// Layout:
///
/// ```text
///
///
/// Usage: <program> [option=value]
/// Options:
///     -flag,--name             description[ The accepted options: a, b, ]
/// Program <app_name>
///
/// ```
///
/// Options appear in short-flag lexical order, so identical registries
/// always render byte-identical text. The label column is padded by byte
/// length, so a non-ASCII label gets fewer visible padding characters.
pub fn render_usage(
    program: &str,
    app_name: &str,
    registry: &Registry,
) -> Result<String, CmdLineError> {
    let mut out = String::new();
    write!(out, "\n\nUsage: {} {}\nOptions:\n", program, USAGE_PATTERN)?;

    for item in registry.iter() {
        let label = format!("{},{}", item.flag(), item.name());
        let pad = USAGE_LABEL_WIDTH.saturating_sub(label.len());
        write!(out, "{}{}{:pad$}{}", USAGE_INDENT, label, "", item.desc(), pad = pad)?;
        if item.is_enumerated() {
            out.push_str(CHOICES_PREFIX);
            for choice in item.choices() {
                write!(out, "{}{}", choice, CHOICES_SEPARATOR)?;
            }
        }
        out.push('\n');
    }

    write!(out, "Program {}\n\n", app_name)?;
    Ok(out)
}

/// Write `cmd`'s usage block to stdout.
pub fn print_usage(cmd: &CmdLine) -> Result<(), CmdLineError> {
    let usage = cmd.usage()?;
    displayout!("{}", usage);
    let _ = io::stdout().flush();
    Ok(())
}

/// Print `cmd`'s usage block to stdout and exit with status 0.
pub fn exit_help(cmd: &CmdLine) -> ! {
    if let Err(e) = print_usage(cmd) {
        error_out(&e.to_string());
    }
    std::process::exit(0);
}

/// Report a missing required option on stdout and exit with status 1.
///
/// `err` is expected to be [`CmdLineError::MissingRequiredOption`], whose
/// message already reads `Missing Option: <flag>` followed by the usage
/// block. Any other error is printed to stderr instead.
pub fn exit_missing_option(err: &CmdLineError) -> ! {
    match err {
        CmdLineError::MissingRequiredOption { .. } => {
            displayout!("{}", err);
            let _ = io::stdout().flush();
            std::process::exit(1);
        }
        other => error_out(&other.to_string()),
    }
}

/// Print `msg` to stderr (at display level 1) then exit with code 1.
pub fn error_out(msg: &str) -> ! {
    displaylevel!(1, "{} \n", msg);
    std::process::exit(1);
}
