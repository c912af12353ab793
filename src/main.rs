//! Binary entry point for the `cmdline` demonstration program.
//!
//! Declares two required options, `-m/--mesh` and `-np/--npart`, parses the
//! process arguments and prints the partition count as an integer.
//!
//! Both options default to `""`, so running with no arguments reports
//! `Missing Option: -m`; a blank default such as `" "` would count as
//! provided and the program would print `0` instead.
//!
//! # Exit status
//!
//! - `-h` / `--help` as the first argument: usage on stdout, exit 0.
//! - a required option is missing: `Missing Option: <flag>` and usage on
//!   stdout, exit 1.
//! - any other parse error: the message (which embeds the usage text) on
//!   stderr, exit 1.

use cmdline::cli::constants::{init_display_level, set_display_level};
use cmdline::cli::help::{exit_help, exit_missing_option};
use cmdline::{displaylevel, displayout};
use cmdline::{CmdLine, CmdLineError, ParseOutcome, Requirement};

const APP_NAME: &str = "cmdline";
const APP_INFO: &str = "mesh partition demo";

fn main() -> anyhow::Result<()> {
    set_display_level(init_display_level());

    let mut cl = CmdLine::with_info(APP_NAME, APP_INFO, cmdline::version_string());
    cl.register("m", "mesh", "mesh file name.", "", Requirement::Required, &[])?;
    cl.register("np", "npart", "number to be cutting.", "", Requirement::Required, &[])?;

    displaylevel!(
        3,
        "*** {} v{} : {} ***\n",
        cl.app_name(),
        cl.app_version(),
        cl.app_info()
    );

    match cl.parse() {
        Ok(ParseOutcome::Parsed) => {}
        Ok(ParseOutcome::HelpRequested) => exit_help(&cl),
        Err(e @ CmdLineError::MissingRequiredOption { .. }) => exit_missing_option(&e),
        Err(e) => return Err(e.into()),
    }

    displaylevel!(3, "mesh file : {}\n", cl.get::<String>("mesh")?);
    displayout!("{}\n", cl.get::<i32>("np")?);
    Ok(())
}
