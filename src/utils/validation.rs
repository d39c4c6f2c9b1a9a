use crate::utils::error::{Result, SplitError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + Into<i64> + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SplitError::OutOfRange {
            field: field_name.to_string(),
            value: value.into(),
            min: min.into(),
            max: max.into(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SplitError::InvalidCable {
            reason: format!("'{}' cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_bounds(field_name: &str, min: u32, max: u32) -> Result<()> {
    if min > max {
        return Err(SplitError::ConfigError {
            message: format!(
                "'{}' lower bound {} is greater than upper bound {}",
                field_name, min, max
            ),
        });
    }
    Ok(())
}
