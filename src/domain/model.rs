use crate::utils::error::{Result, SplitError};
use crate::utils::validation::validate_non_empty_string;
use serde::{Deserialize, Serialize};

/// A named length of cable. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCable")]
pub struct Cable {
    length: u32,
    name: String,
}

#[derive(Deserialize)]
struct RawCable {
    length: u32,
    name: String,
}

impl Cable {
    pub fn new(length: u32, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if length == 0 {
            return Err(SplitError::InvalidCable {
                reason: "length must be positive".to_string(),
            });
        }
        validate_non_empty_string("name", &name)?;
        Ok(Self { length, name })
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<RawCable> for Cable {
    type Error = SplitError;

    fn try_from(raw: RawCable) -> Result<Self> {
        Cable::new(raw.length, raw.name)
    }
}
