use anyhow::{bail, Result};

const NEGATION_SUFFIX: &str = "Not";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    PathExists,
    FileContains,
    FileEquals,
    DirContains,
    UserExists,
    Command,
    CommandContains,
}

impl ConditionKind {
    /// Parse a condition `type` string.
    ///
    /// Returns the kind and whether it carries the `Not` suffix, e.g.
    /// `PathExistsNot` is `(PathExists, true)`.
    pub fn parse(s: &str) -> Result<(Self, bool)> {
        let s = s.trim();
        let (base, negated) = match s.strip_suffix(NEGATION_SUFFIX) {
            Some(base) => (base, true),
            None => (s, false),
        };

        let kind = match base {
            "PathExists" => ConditionKind::PathExists,
            "FileContains" => ConditionKind::FileContains,
            "FileEquals" => ConditionKind::FileEquals,
            "DirContains" => ConditionKind::DirContains,
            "UserExists" => ConditionKind::UserExists,
            "Command" => ConditionKind::Command,
            "CommandContains" => ConditionKind::CommandContains,
            "" => bail!("Condition type must not be empty"),
            _ => bail!("Unknown condition type: {}", s),
        };

        Ok((kind, negated))
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConditionKind::PathExists => "PathExists",
            ConditionKind::FileContains => "FileContains",
            ConditionKind::FileEquals => "FileEquals",
            ConditionKind::DirContains => "DirContains",
            ConditionKind::UserExists => "UserExists",
            ConditionKind::Command => "Command",
            ConditionKind::CommandContains => "CommandContains",
        }
    }
}
