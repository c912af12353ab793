//! Declared options and the short/long alias index.
//!
//! Options are keyed by their short flag (`-np`) in a [`BTreeMap`], which
//! gives the lexical ordering the usage renderer relies on. A second map pairs
//! every flag with its name and every name with its flag, so an option can be
//! found from either spelling.

use std::collections::{BTreeMap, BTreeSet};

use crate::cli::error::CmdLineError;
use crate::config::{HELP_DESC, HELP_FLAG, HELP_NAME};
use crate::displaylevel;

/// Whether an option must carry a non-empty value once parsing completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
}

impl Requirement {
    #[inline]
    pub fn is_required(self) -> bool {
        self == Requirement::Required
    }
}

/// One declared option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    flag: String,
    name: String,
    desc: String,
    value: String,
    required: bool,
    choices: BTreeSet<String>,
}

impl OptionItem {
    /// Short token, dash included (`-np`).
    pub fn flag(&self) -> &str {
        &self.flag
    }

    /// Long token, dashes included (`--npart`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Current value: the default until the parser stores one.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Permitted values in lexical order; empty for unconstrained options.
    pub fn choices(&self) -> &BTreeSet<String> {
        &self.choices
    }

    /// `true` when the option only accepts values from its choice set.
    pub fn is_enumerated(&self) -> bool {
        !self.choices.is_empty()
    }

    /// Returns `true` if `value` may be stored into this option.
    pub fn accepts(&self, value: &str) -> bool {
        !self.is_enumerated() || self.choices.contains(value)
    }
}

/// All declared options plus the bidirectional flag/name index.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    items: BTreeMap<String, OptionItem>,
    aliases: BTreeMap<String, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an option.
    ///
    /// `flag` and `name` are given without dashes and stored as `-flag` and
    /// `--name`. Both must be non-empty, and neither token may already be in
    /// use by another option (as flag or as name) or be one of the reserved
    /// help tokens. A rejected registration leaves the registry unchanged.
    pub fn register(
        &mut self,
        flag: &str,
        name: &str,
        desc: &str,
        default_value: &str,
        requirement: Requirement,
        choices: &[&str],
    ) -> Result<(), CmdLineError> {
        if flag.is_empty() || name.is_empty() {
            return Err(CmdLineError::EmptyOptionName);
        }

        let flag = format!("-{}", flag);
        let name = format!("--{}", name);
        if flag == name {
            return Err(CmdLineError::DuplicateOption { token: name });
        }
        for token in [&flag, &name] {
            if self.contains(token) || token == HELP_FLAG || token == HELP_NAME {
                return Err(CmdLineError::DuplicateOption {
                    token: token.clone(),
                });
            }
        }

        displaylevel!(4, "register: {},{} (default '{}')\n", flag, name, default_value);

        self.insert(OptionItem {
            flag,
            name,
            desc: desc.to_owned(),
            value: default_value.to_owned(),
            required: requirement.is_required(),
            choices: choices.iter().map(|c| (*c).to_owned()).collect(),
        });
        Ok(())
    }

    /// Inject the synthetic `-h`/`--help` option. Does nothing if it is
    /// already present.
    pub fn insert_help(&mut self) {
        if self.items.contains_key(HELP_FLAG) {
            return;
        }
        self.insert(OptionItem {
            flag: HELP_FLAG.to_owned(),
            name: HELP_NAME.to_owned(),
            desc: HELP_DESC.to_owned(),
            value: String::new(),
            required: false,
            choices: BTreeSet::new(),
        });
    }

    fn insert(&mut self, item: OptionItem) {
        self.aliases.insert(item.flag.clone(), item.name.clone());
        self.aliases.insert(item.name.clone(), item.flag.clone());
        self.items.insert(item.flag.clone(), item);
    }

    /// Resolve a flag or name to the option's short-flag key.
    ///
    /// Returns `None` when `token` is neither a registered flag nor a
    /// registered name.
    pub fn lookup(&self, token: &str) -> Option<&str> {
        if let Some((key, _)) = self.items.get_key_value(token) {
            return Some(key.as_str());
        }
        self.aliases
            .get(token)
            .filter(|flag| self.items.contains_key(flag.as_str()))
            .map(String::as_str)
    }

    /// The token paired with `token`: the name for a flag, the flag for a name.
    pub fn alias(&self, token: &str) -> Option<&str> {
        self.aliases.get(token).map(String::as_str)
    }

    /// `true` if `token` is a registered flag or name.
    pub fn contains(&self, token: &str) -> bool {
        self.aliases.contains_key(token)
    }

    /// Option stored under the short-flag `key`.
    pub fn get_item(&self, key: &str) -> Option<&OptionItem> {
        self.items.get(key)
    }

    /// Options in short-flag lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First required option (in short-flag order) whose value is empty.
    pub fn first_missing_required(&self) -> Option<&OptionItem> {
        self.iter().find(|item| item.required && item.value.is_empty())
    }

    /// Overwrite the value of the option stored under `key`.
    ///
    /// Returns `false` if no such option exists. Choice validation is the
    /// caller's job.
    pub(crate) fn set_value(&mut self, key: &str, value: &str) -> bool {
        match self.items.get_mut(key) {
            Some(item) => {
                item.value = value.to_owned();
                true
            }
            None => false,
        }
    }
}
