use crate::emit::Backend;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;

/// Compiler settings, loadable from YAML:
///
/// ```yaml
/// temp_prefix: t
/// placeholder: ""
/// require_sigil: true
/// backends: [quad, pcode]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix of quadruple temporaries
    pub temp_prefix: String,
    /// Filler of the unused operand in the assignment quadruple
    pub placeholder: String,
    /// Accept only `$`-prefixed identifiers
    pub require_sigil: bool,
    pub backends: Vec<Backend>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            temp_prefix: "v".to_string(),
            placeholder: "-".to_string(),
            require_sigil: false,
            backends: Backend::ALL.to_vec(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, Error> {
        let file = File::open(path)?;
        Ok(serde_yaml::from_reader(BufReader::new(file))?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
