use crate::error::{Result, WalkError};
use regex::Regex;

/// A CMR collection id such as `HLSS30.v1.5`: `<short name>.v<version>`.
#[derive(Debug, PartialEq, Clone)]
pub struct CollectionId {
    pub short_name: String,
    pub version: String,
}

impl CollectionId {
    pub fn parse(id: &str) -> Result<Self> {
        let re = Regex::new(r"^(?<short_name>[\w-]+)\.v(?<version>\d+(?:\.\d+)*)$")
            .expect("Regex pattern should always compile");

        let captures = re.captures(id).ok_or_else(|| WalkError::InvalidValue {
            what: "collection id".to_string(),
            reason: format!("'{id}' is not of the form <short name>.v<version>"),
        })?;

        let (_, [short_name, version]) = captures.extract();

        Ok(Self {
            short_name: short_name.to_string(),
            version: version.to_string(),
        })
    }
}

impl std::fmt::Display for CollectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.v{}", self.short_name, self.version)
    }
}
