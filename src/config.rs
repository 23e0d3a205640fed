///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use crate::error::KnobResult;
use crate::mapping::{AngleSpan, ValueRange};

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// KnobConfig
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Unvalidated knob settings. Missing fields take the defaults of
/// [`KnobConfig::default`] when deserialized.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KnobConfig {
    pub minimum_value: f64,
    pub maximum_value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub is_continuous: bool,
    pub line_width: f64,
    pub pointer_length: f64,
}

impl Default for KnobConfig {
    fn default() -> Self {
        let range = ValueRange::default();
        let span = AngleSpan::default();
        Self {
            minimum_value: range.minimum(),
            maximum_value: range.maximum(),
            start_angle: span.start(),
            end_angle: span.end(),
            is_continuous: true,
            line_width: 2.0,
            pointer_length: 6.0,
        }
    }
}

impl KnobConfig {
    pub fn validate(&self) -> KnobResult<(ValueRange, AngleSpan)> {
        let range = ValueRange::new(self.minimum_value, self.maximum_value)?;
        let span = AngleSpan::new(self.start_angle, self.end_angle)?;
        Ok((range, span))
    }

    #[cfg(feature = "serde")]
    pub fn from_toml_str(raw: &str) -> KnobResult<Self> {
        let config: Self = toml::from_str(raw)
            .map_err(|err| crate::error::KnobError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KnobError;

    #[test]
    fn default_config_is_valid() {
        let (range, span) = KnobConfig::default().validate().unwrap();
        assert_eq!(range, ValueRange::default());
        assert_eq!(span, AngleSpan::default());
    }

    #[test]
    fn validate_reports_the_first_bad_field() {
        let config = KnobConfig {
            maximum_value: -1.0,
            end_angle: f64::NAN,
            ..KnobConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(KnobError::DegenerateRange { minimum: 0.0, maximum: -1.0 })
        );

        let config = KnobConfig {
            end_angle: f64::NAN,
            ..KnobConfig::default()
        };
        assert_eq!(config.validate(), Err(KnobError::NonFinite { field: "end_angle" }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parses_partial_toml() {
        let config = KnobConfig::from_toml_str(
            r#"
            minimum_value = -12.0
            maximum_value = 12.0
            is_continuous = false
            "#,
        )
        .unwrap();
        assert_eq!(config.minimum_value, -12.0);
        assert!(!config.is_continuous);
        assert_eq!(config.start_angle, AngleSpan::DEFAULT_START);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rejects_invalid_toml() {
        assert!(matches!(
            KnobConfig::from_toml_str("minimum_value = \"low\""),
            Err(KnobError::InvalidConfig(_))
        ));
        assert!(matches!(
            KnobConfig::from_toml_str("start_angle = 0.0\nend_angle = 7.0"),
            Err(KnobError::DegenerateSpan { .. })
        ));
    }
}
