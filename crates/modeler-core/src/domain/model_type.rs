//! Model type discriminant.
//!
//! Stored as a small integer column. A NULL column is legal and is
//! treated as a process model by the process queries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of design artifact a model holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelType {
    /// BPMN process model.
    Bpmn,
    /// Process model written by the previous editor generation.
    LegacyProcess,
    /// Form definition.
    Form,
    /// App definition grouping other models.
    App,
    /// Decision table.
    DecisionTable,
}

impl ModelType {
    /// Integer value persisted in the `model_type` column.
    pub const fn code(self) -> i32 {
        match self {
            Self::Bpmn => 0,
            Self::LegacyProcess => 1,
            Self::Form => 2,
            Self::App => 3,
            Self::DecisionTable => 4,
        }
    }

    /// Type codes matched by the process queries (in addition to NULL).
    pub const PROCESS_CODES: [i32; 2] = [Self::Bpmn.code(), Self::LegacyProcess.code()];

    pub const fn is_process(self) -> bool {
        matches!(self, Self::Bpmn | Self::LegacyProcess)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bpmn => "bpmn",
            Self::LegacyProcess => "legacy-process",
            Self::Form => "form",
            Self::App => "app",
            Self::DecisionTable => "decision-table",
        }
    }
}

/// Returned when a stored or supplied model type is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelTypeError {
    #[error("unknown model type code {0}")]
    UnknownCode(i64),
    #[error("unknown model type '{0}'")]
    UnknownName(String),
}

impl TryFrom<i64> for ModelType {
    type Error = ModelTypeError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Bpmn),
            1 => Ok(Self::LegacyProcess),
            2 => Ok(Self::Form),
            3 => Ok(Self::App),
            4 => Ok(Self::DecisionTable),
            other => Err(ModelTypeError::UnknownCode(other)),
        }
    }
}

impl FromStr for ModelType {
    type Err = ModelTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bpmn" | "process" => Ok(Self::Bpmn),
            "legacy-process" => Ok(Self::LegacyProcess),
            "form" => Ok(Self::Form),
            "app" => Ok(Self::App),
            "decision-table" | "decision_table" => Ok(Self::DecisionTable),
            other => other
                .parse::<i64>()
                .map_err(|_| ModelTypeError::UnknownName(s.to_string()))
                .and_then(Self::try_from),
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_try_from() {
        for ty in [
            ModelType::Bpmn,
            ModelType::LegacyProcess,
            ModelType::Form,
            ModelType::App,
            ModelType::DecisionTable,
        ] {
            assert_eq!(ModelType::try_from(i64::from(ty.code())), Ok(ty));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(
            ModelType::try_from(17),
            Err(ModelTypeError::UnknownCode(17))
        );
    }

    #[test]
    fn parses_names_and_numeric_codes() {
        assert_eq!("Form".parse::<ModelType>(), Ok(ModelType::Form));
        assert_eq!("decision-table".parse::<ModelType>(), Ok(ModelType::DecisionTable));
        assert_eq!("2".parse::<ModelType>(), Ok(ModelType::Form));
        assert!("widget".parse::<ModelType>().is_err());
    }

    #[test]
    fn only_bpmn_and_legacy_are_processes() {
        assert!(ModelType::Bpmn.is_process());
        assert!(ModelType::LegacyProcess.is_process());
        assert!(!ModelType::Form.is_process());
        assert!(!ModelType::App.is_process());
    }
}
