//! Option registration front-end, argument parsing and typed retrieval.
//!
//! The entry points are [`CmdLine::parse`] (reads `std::env::args_os()`) and
//! [`CmdLine::parse_from`] (takes an explicit slice, suitable for testing).
//!
//! The argument vector is read as strict `flag value flag value ...` pairs
//! starting at index 1; index 0 is the program name. There is no
//! `--flag=value` form, no value-less flag and no positional argument.
//!
//! A value that is itself spelled like a registered flag or name is taken as
//! the start of the next pair, so the preceding flag fails with
//! [`CmdLineError::MissingValue`]. Such values cannot be passed at all.

use std::str::FromStr;

use crate::cli::coerce::OptionValue;
use crate::cli::error::CmdLineError;
use crate::cli::help::render_usage;
use crate::cli::registry::{Registry, Requirement};
use crate::config::{HELP_FLAG, HELP_NAME};
use crate::displaylevel;

/// Result of a parse that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Every pair was consumed and all required options have a value.
    Parsed,
    /// The first argument was `-h` or `--help`. No option value was touched;
    /// the caller usually prints [`CmdLine::usage`] and exits successfully.
    HelpRequested,
}

// Parser states. `Done` and `Failed` are terminal.
#[derive(Debug)]
enum ParseState {
    ExpectFlag,
    ExpectValue { key: String, flag: String },
    Done,
    Failed(CmdLineError),
}

/// An option registry together with the program identity shown in usage text.
#[derive(Debug, Clone, Default)]
pub struct CmdLine {
    program_name: String,
    app_name: String,
    app_info: String,
    app_version: String,
    registry: Registry,
}

impl CmdLine {
    pub fn new(app_name: &str) -> Self {
        CmdLine {
            app_name: app_name.to_owned(),
            ..Self::default()
        }
    }

    pub fn with_info(app_name: &str, app_info: &str, app_version: &str) -> Self {
        CmdLine {
            app_name: app_name.to_owned(),
            app_info: app_info.to_owned(),
            app_version: app_version.to_owned(),
            ..Self::default()
        }
    }

    /// `argv[0]` of the last parse; empty before any parse.
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn app_info(&self) -> &str {
        &self.app_info
    }

    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Declare an option. See [`Registry::register`].
    pub fn register(
        &mut self,
        flag: &str,
        name: &str,
        desc: &str,
        default_value: &str,
        requirement: Requirement,
        choices: &[&str],
    ) -> Result<(), CmdLineError> {
        self.registry
            .register(flag, name, desc, default_value, requirement, choices)
    }

    /// Parse the process arguments. Non-UTF-8 arguments are converted lossily.
    pub fn parse(&mut self) -> Result<ParseOutcome, CmdLineError> {
        let argv: Vec<String> = std::env::args_os()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        self.parse_from(&argv)
    }

    /// Parse an explicit argument vector; `argv[0]` is the program name.
    ///
    /// On failure, values stored for pairs before the offending token are
    /// kept and everything after it is left untouched.
    pub fn parse_from<S: AsRef<str>>(&mut self, argv: &[S]) -> Result<ParseOutcome, CmdLineError> {
        self.registry.insert_help();
        self.program_name = arg(argv, 0).unwrap_or_default().to_owned();

        if let Some(first) = arg(argv, 1) {
            if first == HELP_FLAG || first == HELP_NAME {
                displaylevel!(4, "parse: help requested\n");
                return Ok(ParseOutcome::HelpRequested);
            }
        }

        let mut state = ParseState::ExpectFlag;
        let mut idx = 1usize;
        loop {
            state = match state {
                ParseState::ExpectFlag => match arg(argv, idx) {
                    None => self.check_required()?,
                    Some(token) => match self.registry.lookup(token) {
                        Some(key) => {
                            let key = key.to_owned();
                            idx += 1;
                            ParseState::ExpectValue {
                                key,
                                flag: token.to_owned(),
                            }
                        }
                        None => ParseState::Failed(CmdLineError::UnknownOption {
                            option: token.to_owned(),
                            usage: self.usage()?,
                        }),
                    },
                },
                ParseState::ExpectValue { key, flag } => {
                    let next = match arg(argv, idx) {
                        Some(value) if self.registry.lookup(value).is_none() => {
                            self.store(&key, &flag, value)?
                        }
                        _ => ParseState::Failed(CmdLineError::MissingValue {
                            option: flag,
                            usage: self.usage()?,
                        }),
                    };
                    next.advance(&mut idx)
                }
                ParseState::Done => return Ok(ParseOutcome::Parsed),
                ParseState::Failed(e) => {
                    displaylevel!(4, "parse: failed at argument {}\n", idx);
                    return Err(e);
                }
            };
        }
    }

    fn store(&mut self, key: &str, flag: &str, value: &str) -> Result<ParseState, CmdLineError> {
        let accepted = self
            .registry
            .get_item(key)
            .map_or(false, |item| item.accepts(value));
        if !accepted {
            return Ok(ParseState::Failed(CmdLineError::InvalidChoice {
                option: flag.to_owned(),
                value: value.to_owned(),
                usage: self.usage()?,
            }));
        }
        self.registry.set_value(key, value);
        displaylevel!(4, "parse: {} = {}\n", key, value);
        Ok(ParseState::ExpectFlag)
    }

    fn check_required(&self) -> Result<ParseState, CmdLineError> {
        Ok(match self.registry.first_missing_required() {
            None => ParseState::Done,
            Some(item) => ParseState::Failed(CmdLineError::MissingRequiredOption {
                option: item.flag().to_owned(),
                usage: self.usage()?,
            }),
        })
    }

    /// Render the usage block for the current registry.
    pub fn usage(&self) -> Result<String, CmdLineError> {
        render_usage(&self.program_name, &self.app_name, &self.registry)
    }

    // Accessors take the bare flag or name ("np" / "npart"); a fully dashed
    // token is accepted too.
    fn resolve(&self, name: &str) -> Result<&str, CmdLineError> {
        [format!("-{}", name), format!("--{}", name)]
            .iter()
            .find_map(|token| self.registry.lookup(token))
            .or_else(|| self.registry.lookup(name))
            .ok_or_else(|| CmdLineError::UnrecognizedOption {
                name: name.to_owned(),
            })
    }

    /// Raw stored text of an option.
    pub fn value(&self, name: &str) -> Result<&str, CmdLineError> {
        let key = self.resolve(name)?;
        self.registry
            .get_item(key)
            .map(|item| item.value())
            .ok_or_else(|| CmdLineError::UnrecognizedOption {
                name: name.to_owned(),
            })
    }

    /// Read an option as `T`.
    ///
    /// Numeric conversion is best-effort and never fails: text without a
    /// numeric prefix reads as zero, and integers are truncated toward zero.
    /// Only an unresolvable `name` is an error.
    pub fn get<T: OptionValue>(&self, name: &str) -> Result<T, CmdLineError> {
        self.value(name).map(T::from_option_text)
    }

    /// Read an option as `T` with a strict [`FromStr`] parse of the whole
    /// stored text. Fails with [`CmdLineError::InvalidValue`] where
    /// [`CmdLine::get`] would silently yield zero.
    pub fn get_strict<T: FromStr>(&self, name: &str) -> Result<T, CmdLineError> {
        let key = self.resolve(name)?;
        let value = self.value(name)?;
        value.parse::<T>().map_err(|_| CmdLineError::InvalidValue {
            option: key.to_owned(),
            value: value.to_owned(),
            target: std::any::type_name::<T>(),
        })
    }
}

fn arg<S: AsRef<str>>(argv: &[S], idx: usize) -> Option<&str> {
    argv.get(idx).map(|a| a.as_ref())
}

impl ParseState {
    // Step past the value token once it has been stored.
    fn advance(self, idx: &mut usize) -> Self {
        if matches!(self, ParseState::ExpectFlag) {
            *idx += 1;
        }
        self
    }
}
