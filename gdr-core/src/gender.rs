use crate::error::{CoreError, GenderRuleError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MATERNAL_DISORDERS: &str = "Maternal_Disorders";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

const BOTH: &[Gender] = &[Gender::Female, Gender::Male];

/// Causes whose estimates only exist for a subset of genders. A cause
/// absent from this table applies to both.
const CAUSE_GENDER_RULES: &[(&str, &[Gender])] = &[(MATERNAL_DISORDERS, &[Gender::Female])];

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }

    /// Radio-button label shown in the gender comparison section.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "Female Deaths",
            Gender::Male => "Male Deaths",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "female" => Ok(Gender::Female),
            "male" => Ok(Gender::Male),
            other => Err(CoreError::UnknownGender(other.to_string())),
        }
    }
}

/// The genders a cause can be broken down by. Cause names are compared
/// after trimming, matching how they arrive from the selector.
pub fn applicable_genders(cause: &str) -> &'static [Gender] {
    let cause = cause.trim();
    CAUSE_GENDER_RULES
        .iter()
        .find(|(name, _)| *name == cause)
        .map(|(_, genders)| *genders)
        .unwrap_or(BOTH)
}

/// Rejects a cause/gender pairing the dataset has no estimate for, so the
/// caller can surface the domain explanation instead of an empty chart.
pub fn check_gender_applies(cause: &str, gender: Gender) -> Result<(), GenderRuleError> {
    if applicable_genders(cause).contains(&gender) {
        Ok(())
    } else {
        Err(GenderRuleError {
            cause: cause.trim().to_string(),
            gender,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_genders_case_insensitively() {
        assert_eq!(Gender::from_str("female"), Ok(Gender::Female));
        assert_eq!(Gender::from_str("Male"), Ok(Gender::Male));
        assert_eq!(Gender::from_str(" FEMALE "), Ok(Gender::Female));
    }

    #[test]
    fn rejects_unknown_gender_string() {
        assert_eq!(
            Gender::from_str("other"),
            Err(CoreError::UnknownGender("other".to_string()))
        );
    }

    #[test]
    fn most_causes_apply_to_both_genders() {
        assert_eq!(applicable_genders("Malaria"), BOTH);
        assert_eq!(applicable_genders("Self_Harm"), BOTH);
        assert!(check_gender_applies("Malaria", Gender::Male).is_ok());
        assert!(check_gender_applies("Malaria", Gender::Female).is_ok());
    }

    #[test]
    fn maternal_disorders_is_female_only() {
        assert_eq!(applicable_genders(MATERNAL_DISORDERS), &[Gender::Female]);
        assert!(check_gender_applies(MATERNAL_DISORDERS, Gender::Female).is_ok());

        let err = check_gender_applies(MATERNAL_DISORDERS, Gender::Male).unwrap_err();
        assert_eq!(err.cause, MATERNAL_DISORDERS);
        assert_eq!(err.gender, Gender::Male);
    }

    #[test]
    fn rule_matches_after_trimming_selector_whitespace() {
        assert!(check_gender_applies(" Maternal_Disorders ", Gender::Male).is_err());
    }

    #[test]
    fn gender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
    }
}
