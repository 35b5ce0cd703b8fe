use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    /// Name of the image shown in the report header
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub checks: Vec<Check>,
}

/// One scored rule.
///
/// `points` is positive for a reward, negative for a penalty and zero when the
/// value should be filled in by the point allocator.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Check {
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub points: i32,

    /// All of these must be true for the check to pass
    #[serde(default)]
    pub pass: Vec<Condition>,

    /// Any of these being true passes the check regardless of `pass`
    #[serde(default, alias = "passoverride")]
    pub pass_override: Vec<Condition>,

    /// Any of these being true fails the check, overriding everything else
    #[serde(default)]
    pub fail: Vec<Condition>,
}

impl Check {
    pub fn is_penalty(&self) -> bool {
        self.points < 0
    }

    pub fn has_conditions(&self) -> bool {
        !(self.pass.is_empty() && self.pass_override.is_empty() && self.fail.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Condition {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub arg1: String,
    #[serde(default)]
    pub arg2: String,
    #[serde(default)]
    pub arg3: String,
}

impl Condition {
    pub fn new(kind: &str, arg1: &str) -> Self {
        Self {
            kind: kind.to_string(),
            arg1: arg1.to_string(),
            ..Default::default()
        }
    }

    pub fn with_arg2(mut self, arg2: &str) -> Self {
        self.arg2 = arg2.to_string();
        self
    }
}
