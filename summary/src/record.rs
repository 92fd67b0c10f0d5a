//! Input model: one ladder test outcome per record.
//!
//! Records arrive as JSON objects with all keys optional. Defaults are
//! applied here, at deserialization time, so no downstream read site ever
//! handles an absent field. Unrecognized keys are ignored.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Display value for a record whose `test` key is absent.
pub const DEFAULT_TEST: &str = "?";
/// Label assigned to a record whose `result` or `code` key is absent.
pub const DEFAULT_LABEL: &str = "UNKNOWN";

/// A single test outcome as emitted by the ladder runner.
///
/// The `result` string is kept verbatim for matrix display; classification
/// into the fixed [`Outcome`] set happens separately via [`ResultRecord::outcome`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResultRecord {
    /// Test identifier; `"?"` when the runner omitted it.
    #[serde(default = "default_test", deserialize_with = "de_test")]
    pub test: String,
    /// Outcome label exactly as reported; `"UNKNOWN"` when omitted.
    #[serde(default = "default_label", deserialize_with = "de_result")]
    pub result: String,
    /// Short machine-readable failure code; `"UNKNOWN"` when omitted.
    #[serde(default = "default_label", deserialize_with = "de_code")]
    pub code: String,
    /// Free-text explanation; empty when omitted.
    #[serde(default, deserialize_with = "de_detail")]
    pub detail: String,
}

impl ResultRecord {
    /// Classifies this record's `result` label.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::from_label(&self.result)
    }
}

impl Default for ResultRecord {
    fn default() -> Self {
        Self {
            test: default_test(),
            result: default_label(),
            code: default_label(),
            detail: String::new(),
        }
    }
}

/// Fixed outcome classification used for tallying.
///
/// `"PASS"`, `"FAIL"` and `"BLOCKED"` map exactly (case-sensitive, no
/// trimming); every other label, including the absent-field default, folds
/// into [`Outcome::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The test ran to completion and succeeded.
    Pass,
    /// The test ran and failed.
    Fail,
    /// The test never ran because an earlier dependency failed.
    Blocked,
    /// Any other label, or a missing `result` field.
    Unknown,
}

impl Outcome {
    /// Classifies a verbatim `result` label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "PASS" => Outcome::Pass,
            "FAIL" => Outcome::Fail,
            "BLOCKED" => Outcome::Blocked,
            _ => Outcome::Unknown,
        }
    }
}

fn default_test() -> String {
    DEFAULT_TEST.to_owned()
}

fn default_label() -> String {
    DEFAULT_LABEL.to_owned()
}

fn de_test<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    scalar_or(deserializer, default_test)
}

fn de_result<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    scalar_or(deserializer, default_label)
}

fn de_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    scalar_or(deserializer, default_label)
}

fn de_detail<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    scalar_or(deserializer, String::new)
}

/// Accepts any JSON scalar, rendering non-strings to their canonical JSON
/// text. `null` is treated exactly like an absent key: the field default
/// applies. Arrays and objects are shape errors.
fn scalar_or<'de, D: Deserializer<'de>>(
    deserializer: D,
    fallback: fn() -> String,
) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(fallback()),
        Value::Array(_) => Err(serde::de::Error::custom("expected a scalar, found an array")),
        Value::Object(_) => Err(serde::de::Error::custom(
            "expected a scalar, found an object",
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ResultRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn empty_object_takes_all_defaults() {
        let record = parse("{}");
        assert_eq!(record, ResultRecord::default());
        assert_eq!(record.test, "?");
        assert_eq!(record.result, "UNKNOWN");
        assert_eq!(record.code, "UNKNOWN");
        assert_eq!(record.detail, "");
    }

    #[test]
    fn full_object_parses_verbatim() {
        let record = parse(
            r#"{"test":"t3","result":"FAIL","code":"E_TIMEOUT","detail":"connect failed"}"#,
        );
        assert_eq!(record.test, "t3");
        assert_eq!(record.result, "FAIL");
        assert_eq!(record.code, "E_TIMEOUT");
        assert_eq!(record.detail, "connect failed");
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let record = parse(r#"{"test":"t1","result":"PASS","stage":4,"retries":[1,2]}"#);
        assert_eq!(record.test, "t1");
        assert_eq!(record.result, "PASS");
    }

    #[test]
    fn scalar_values_render_to_json_text() {
        let record = parse(r#"{"test":3,"result":true,"code":2.5}"#);
        assert_eq!(record.test, "3");
        assert_eq!(record.result, "true");
        assert_eq!(record.code, "2.5");
    }

    #[test]
    fn null_values_behave_like_absent_keys() {
        let record = parse(r#"{"test":null,"result":null,"code":null,"detail":null}"#);
        assert_eq!(record, ResultRecord::default());
    }

    #[test]
    fn container_values_are_rejected() {
        assert!(serde_json::from_str::<ResultRecord>(r#"{"test":["t1"]}"#).is_err());
        assert!(serde_json::from_str::<ResultRecord>(r#"{"detail":{"a":1}}"#).is_err());
    }

    #[test]
    fn classification_is_exact_and_case_sensitive() {
        assert_eq!(Outcome::from_label("PASS"), Outcome::Pass);
        assert_eq!(Outcome::from_label("FAIL"), Outcome::Fail);
        assert_eq!(Outcome::from_label("BLOCKED"), Outcome::Blocked);
        assert_eq!(Outcome::from_label("pass"), Outcome::Unknown);
        assert_eq!(Outcome::from_label("FAIL "), Outcome::Unknown);
        assert_eq!(Outcome::from_label("SKIPPED"), Outcome::Unknown);
        assert_eq!(Outcome::from_label("UNKNOWN"), Outcome::Unknown);
    }

    #[test]
    fn record_outcome_uses_verbatim_label() {
        let record = parse(r#"{"result":"BLOCKED"}"#);
        assert_eq!(record.outcome(), Outcome::Blocked);
        assert_eq!(parse("{}").outcome(), Outcome::Unknown);
    }
}
