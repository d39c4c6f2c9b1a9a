use crate::config::{ShortCablePolicy, SplitterConfig};
use crate::domain::model::Cable;
use crate::utils::error::{Result, SplitError};
use crate::utils::validation::{validate_range, Validate};
use serde_json::Value;

/// Splits cables into evenly sized, sequentially named pieces.
///
/// A `Splitter` only holds its limits; every call to [`Splitter::split`] works on
/// local state and returns a fresh vector, so one instance can be reused freely.
#[derive(Debug, Clone, Default)]
pub struct Splitter {
    config: SplitterConfig,
}

impl Splitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SplitterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Cut `cable` `times` times.
    ///
    /// The cable is divided into `times + 1` sections of `length / (times + 1)`.
    /// Whole sections that fit in the remainder are added, and any length still
    /// left over is absorbed by the last section. Piece lengths always sum to the
    /// original length.
    pub fn split(&self, cable: &Cable, times: u32) -> Result<Vec<Cable>> {
        self.validate_inputs(cable.length().into(), times.into())?;

        let lengths = self.partition(cable.length(), times)?;
        tracing::debug!(
            cable = %cable.name(),
            length = cable.length(),
            times,
            sections = lengths.len(),
            "Split cable"
        );

        let width = index_width(lengths.len());
        lengths
            .into_iter()
            .enumerate()
            .map(|(index, length)| Cable::new(length, piece_name(cable.name(), index, width)))
            .collect()
    }

    /// Untyped entry point for callers holding JSON-like input.
    ///
    /// `cable` must be an object with an integer `length` and a string `name`;
    /// `times` must be an integer.
    pub fn split_value(&self, cable: &Value, times: &Value) -> Result<Vec<Cable>> {
        let fields = cable
            .as_object()
            .ok_or_else(|| type_error("cable", "object", cable))?;
        let length_value = fields.get("length").unwrap_or(&Value::Null);
        let length = integer_arg("cable.length", length_value)?;
        let name_value = fields.get("name").unwrap_or(&Value::Null);
        let name = name_value
            .as_str()
            .ok_or_else(|| type_error("cable.name", "string", name_value))?;
        let times = integer_arg("times", times)?;

        self.validate_inputs(length, times)?;

        // Both values are within u32 bounds after validation.
        let cable = Cable::new(length as u32, name)?;
        self.split(&cable, times as u32)
    }

    fn validate_inputs(&self, length: i64, times: i64) -> Result<()> {
        validate_range(
            "times",
            times,
            self.config.times_min.into(),
            self.config.times_max.into(),
        )?;
        validate_range(
            "cable.length",
            length,
            self.config.cable_min_length.into(),
            self.config.cable_max_length.into(),
        )
    }

    fn partition(&self, length: u32, times: u32) -> Result<Vec<u32>> {
        let initial_sections = times.saturating_add(1);
        let base = length / initial_sections;

        if base == 0 {
            return match self.config.short_cable_policy {
                ShortCablePolicy::Reject => Err(SplitError::InvalidOperation {
                    message: format!(
                        "cannot cut a cable of length {} into {} sections of positive length",
                        length, initial_sections
                    ),
                }),
                ShortCablePolicy::Clamp => {
                    tracing::warn!(
                        length,
                        requested = initial_sections,
                        "Cable too short for requested cuts, splitting into unit lengths"
                    );
                    Ok(vec![1; length as usize])
                }
            };
        }

        let remainder = length % initial_sections;
        if remainder == 0 {
            return Ok(vec![base; initial_sections as usize]);
        }

        let extra_sections = remainder / base;
        let leftover = remainder % base;
        let total_sections = initial_sections + extra_sections;

        let mut lengths = vec![base; total_sections as usize];
        if let Some(last) = lengths.last_mut() {
            *last += leftover;
        }
        Ok(lengths)
    }
}

/// Digits needed for the largest zero-based index among `count` pieces.
fn index_width(count: usize) -> usize {
    count.saturating_sub(1).max(1).to_string().len()
}

fn piece_name(name: &str, index: usize, width: usize) -> String {
    format!("{}-{:0width$}", name, index, width = width)
}

fn integer_arg(field: &str, value: &Value) -> Result<i64> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    // Integers beyond i64 are still integers, just out of any range we accept.
    if value.as_u64().is_some() {
        return Ok(i64::MAX);
    }
    Err(type_error(field, "integer", value))
}

fn type_error(field: &str, expected: &str, found: &Value) -> SplitError {
    let found = match found {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    SplitError::InvalidArgumentType {
        field: field.to_string(),
        expected: expected.to_string(),
        found: found.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lengths(pieces: &[Cable]) -> Vec<u32> {
        pieces.iter().map(Cable::length).collect()
    }

    fn names(pieces: &[Cable]) -> Vec<&str> {
        pieces.iter().map(Cable::name).collect()
    }

    #[test]
    fn test_exact_division() {
        let cable = Cable::new(10, "A").unwrap();
        let pieces = Splitter::new().split(&cable, 1).unwrap();

        assert_eq!(lengths(&pieces), vec![5, 5]);
        assert_eq!(names(&pieces), vec!["A-0", "A-1"]);
    }

    #[test]
    fn test_remainder_absorbed_by_last_piece() {
        let cable = Cable::new(10, "A").unwrap();
        let pieces = Splitter::new().split(&cable, 2).unwrap();

        assert_eq!(lengths(&pieces), vec![3, 3, 4]);
        assert_eq!(names(&pieces), vec!["A-0", "A-1", "A-2"]);
    }

    #[test]
    fn test_remainder_forms_extra_sections() {
        // 10 / 4 = 2 rem 2: the remainder is one more whole section.
        let cable = Cable::new(10, "A").unwrap();
        let pieces = Splitter::new().split(&cable, 3).unwrap();
        assert_eq!(lengths(&pieces), vec![2, 2, 2, 2, 2]);

        // 23 / 4 = 5 rem 3: no extra section, last piece takes the 3.
        let cable = Cable::new(23, "B").unwrap();
        let pieces = Splitter::new().split(&cable, 3).unwrap();
        assert_eq!(lengths(&pieces), vec![5, 5, 5, 8]);

        // 47 / 6 = 7 rem 5: no extra section, last piece is 12.
        let cable = Cable::new(47, "C").unwrap();
        let pieces = Splitter::new().split(&cable, 5).unwrap();
        assert_eq!(lengths(&pieces), vec![7, 7, 7, 7, 7, 12]);

        // 17 / 6 = 2 rem 5: two extra sections, the last absorbs the final 1.
        let cable = Cable::new(17, "D").unwrap();
        let pieces = Splitter::new().split(&cable, 5).unwrap();
        assert_eq!(lengths(&pieces), vec![2, 2, 2, 2, 2, 2, 2, 3]);
    }

    #[test]
    fn test_padding_width() {
        let cable = Cable::new(12, "A").unwrap();
        let pieces = Splitter::new().split(&cable, 11).unwrap();

        assert_eq!(pieces.len(), 12);
        assert_eq!(pieces[0].name(), "A-00");
        assert_eq!(pieces[9].name(), "A-09");
        assert_eq!(pieces[11].name(), "A-11");
    }

    #[test]
    fn test_ten_pieces_use_single_digit() {
        let cable = Cable::new(10, "A").unwrap();
        let pieces = Splitter::new().split(&cable, 9).unwrap();

        assert_eq!(pieces.len(), 10);
        assert_eq!(pieces[0].name(), "A-0");
        assert_eq!(pieces[9].name(), "A-9");
    }

    #[test]
    fn test_minimum_cable() {
        let cable = Cable::new(2, "A").unwrap();
        let pieces = Splitter::new().split(&cable, 1).unwrap();
        assert_eq!(lengths(&pieces), vec![1, 1]);
    }

    #[test]
    fn test_boundary_rejection() {
        let splitter = Splitter::new();
        let cable = Cable::new(10, "A").unwrap();

        for times in [0, 1025] {
            assert!(matches!(
                splitter.split(&cable, times),
                Err(SplitError::OutOfRange { ref field, .. }) if field == "times"
            ));
        }

        for length in [1, 1025] {
            let cable = Cable::new(length, "A").unwrap();
            assert!(matches!(
                splitter.split(&cable, 1),
                Err(SplitError::OutOfRange { ref field, .. }) if field == "cable.length"
            ));
        }
    }

    #[test]
    fn test_short_cable_rejected_by_default() {
        let cable = Cable::new(1024, "A").unwrap();
        let result = Splitter::new().split(&cable, 1024);
        assert!(matches!(result, Err(SplitError::InvalidOperation { .. })));
    }

    #[test]
    fn test_short_cable_clamped() {
        let config = SplitterConfig {
            short_cable_policy: ShortCablePolicy::Clamp,
            ..Default::default()
        };
        let splitter = Splitter::with_config(config).unwrap();

        let cable = Cable::new(1024, "A").unwrap();
        let pieces = splitter.split(&cable, 1024).unwrap();
        assert_eq!(pieces.len(), 1024);
        assert!(pieces.iter().all(|p| p.length() == 1));
        assert_eq!(pieces[0].name(), "A-0000");
        assert_eq!(pieces[1023].name(), "A-1023");
    }

    #[test]
    fn test_input_not_mutated_and_calls_independent() {
        let splitter = Splitter::new();
        let first = Cable::new(10, "A").unwrap();
        let second = Cable::new(9, "B").unwrap();

        let a = splitter.split(&first, 2).unwrap();
        let b = splitter.split(&second, 2).unwrap();
        let again = splitter.split(&first, 2).unwrap();

        assert_eq!(first, Cable::new(10, "A").unwrap());
        assert_eq!(lengths(&b), vec![3, 3, 3]);
        assert_eq!(names(&b), vec!["B-0", "B-1", "B-2"]);
        assert_eq!(a, again);
    }

    #[test]
    fn test_split_value() {
        let pieces = Splitter::new()
            .split_value(&json!({"length": 10, "name": "A"}), &json!(2))
            .unwrap();
        assert_eq!(lengths(&pieces), vec![3, 3, 4]);
    }

    #[test]
    fn test_split_value_type_errors() {
        let splitter = Splitter::new();
        let cases = [
            (json!("cable"), json!(2), "cable"),
            (json!({"length": "10", "name": "A"}), json!(2), "cable.length"),
            (json!({"length": 10.5, "name": "A"}), json!(2), "cable.length"),
            (json!({"length": 10}), json!(2), "cable.name"),
            (json!({"length": 10, "name": "A"}), json!("2"), "times"),
            (json!({"length": 10, "name": "A"}), json!(2.5), "times"),
        ];

        for (cable, times, expected_field) in cases {
            match splitter.split_value(&cable, &times) {
                Err(SplitError::InvalidArgumentType { field, .. }) => {
                    assert_eq!(field, expected_field)
                }
                other => panic!("expected type error for {}, got {:?}", expected_field, other),
            }
        }
    }

    #[test]
    fn test_split_value_range_errors() {
        let splitter = Splitter::new();
        let cable = json!({"length": 10, "name": "A"});

        for times in [json!(-1), json!(0), json!(1025), json!(u64::MAX)] {
            assert!(matches!(
                splitter.split_value(&cable, &times),
                Err(SplitError::OutOfRange { .. })
            ));
        }
        assert!(matches!(
            splitter.split_value(&json!({"length": -4, "name": "A"}), &json!(1)),
            Err(SplitError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_custom_limits() {
        let config = SplitterConfig {
            times_max: 3,
            ..Default::default()
        };
        let splitter = Splitter::with_config(config).unwrap();
        let cable = Cable::new(100, "A").unwrap();

        assert!(splitter.split(&cable, 3).is_ok());
        assert!(matches!(
            splitter.split(&cable, 4),
            Err(SplitError::OutOfRange { max: 3, .. })
        ));
    }

    #[test]
    fn test_with_invalid_config() {
        let config = SplitterConfig {
            times_min: 10,
            times_max: 2,
            ..Default::default()
        };
        assert!(Splitter::with_config(config).is_err());
    }
}
