//! Declarative per-field validation rules.
//!
//! Each route declares an ordered list of [`Rule`]s evaluated against the raw
//! request input: path parameters as strings, the body as a raw
//! [`serde_json::Value`]. Rules always run to completion and accumulate every
//! failure, so a single bad request reports all of its problems at once, and a
//! field checked by several rules can produce several entries.
//!
//! Callers wrap a non-empty violation list in their domain error, which
//! renders as `400 {"errors": [...]}` through `AppError::Validation`.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Where a rule reads its field from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// Path parameters (always strings).
    Params,
    /// The JSON request body.
    Body,
}

impl Location {
    fn as_str(self) -> &'static str {
        match self {
            Location::Params => "params",
            Location::Body => "body",
        }
    }
}

/// A single rule failure, rendered as one entry in the 400 error list.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct Violation {
    /// Discriminator for the violation kind (always "field").
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// The offending value as received; omitted when the field was absent.
    #[serde(skip_serializing_if = "Value::is_null")]
    pub value: Value,
    /// Human-readable message declared by the failing rule.
    pub msg: String,
    /// Field name the rule was bound to.
    pub path: String,
    /// "params" or "body".
    pub location: &'static str,
}

/// A declarative field check: a predicate plus the message reported on failure.
///
/// Predicates receive `None` when the field is absent from the request, so a
/// single field can carry independent presence and type/range rules.
#[derive(Clone, Copy)]
pub struct Rule {
    location: Location,
    field: &'static str,
    msg: &'static str,
    check: fn(Option<&Value>) -> bool,
}

impl Rule {
    /// Rule over a JSON body field.
    pub const fn body(
        field: &'static str,
        msg: &'static str,
        check: fn(Option<&Value>) -> bool,
    ) -> Self {
        Self {
            location: Location::Body,
            field,
            msg,
            check,
        }
    }

    /// Rule over a path parameter.
    pub const fn param(
        field: &'static str,
        msg: &'static str,
        check: fn(Option<&Value>) -> bool,
    ) -> Self {
        Self {
            location: Location::Params,
            field,
            msg,
            check,
        }
    }

    fn evaluate(&self, params: &[(&str, &str)], body: &Value) -> Option<Violation> {
        let value = match self.location {
            Location::Params => params
                .iter()
                .find(|(name, _)| *name == self.field)
                .map(|(_, raw)| Value::String((*raw).to_string())),
            Location::Body => body.get(self.field).cloned(),
        };

        if (self.check)(value.as_ref()) {
            return None;
        }

        Some(Violation {
            kind: "field",
            value: value.unwrap_or(Value::Null),
            msg: self.msg.to_string(),
            path: self.field.to_string(),
            location: self.location.as_str(),
        })
    }
}

/// Run every rule in declaration order, accumulating all violations.
///
/// Rules never short-circuit: an empty body yields one violation per rule
/// bound to a required field.
pub fn run_rules(rules: &[Rule], params: &[(&str, &str)], body: &Value) -> Vec<Violation> {
    rules
        .iter()
        .filter_map(|rule| rule.evaluate(params, body))
        .collect()
}

/// Reusable predicates for [`Rule`]s.
pub mod checks {
    use serde_json::Value;

    /// Field is present and not JSON `null`.
    pub fn present(value: Option<&Value>) -> bool {
        matches!(value, Some(v) if !v.is_null())
    }

    /// Field is a string whose trimmed form is non-empty.
    pub fn non_empty_string(value: Option<&Value>) -> bool {
        value
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty())
    }

    /// Field is a JSON number.
    pub fn numeric(value: Option<&Value>) -> bool {
        value.is_some_and(Value::is_number)
    }

    /// Field is a number strictly greater than zero.
    ///
    /// Anything that is not a number fails the comparison, so a non-numeric
    /// value trips both this and [`numeric`].
    pub fn positive_number(value: Option<&Value>) -> bool {
        value.and_then(Value::as_f64).is_some_and(|n| n > 0.0)
    }

    /// Field is a JSON boolean.
    pub fn boolean(value: Option<&Value>) -> bool {
        value.is_some_and(Value::is_boolean)
    }

    /// Field is a string that parses as an i32.
    pub fn int_string(value: Option<&Value>) -> bool {
        value
            .and_then(Value::as_str)
            .is_some_and(|s| s.parse::<i32>().is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const RULES: [Rule; 3] = [
        Rule::param("id", "id must be an integer", checks::int_string),
        Rule::body("name", "name must not be empty", checks::non_empty_string),
        Rule::body("amount", "amount must be numeric", checks::numeric),
    ];

    #[test]
    fn test_all_rules_pass() {
        let body = json!({"name": "widget", "amount": 3});
        let violations = run_rules(&RULES, &[("id", "7")], &body);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_rules_accumulate_in_declaration_order() {
        let violations = run_rules(&RULES, &[("id", "abc")], &Value::Null);
        assert_eq!(violations.len(), 3);
        assert_eq!(violations[0].msg, "id must be an integer");
        assert_eq!(violations[1].msg, "name must not be empty");
        assert_eq!(violations[2].msg, "amount must be numeric");
        assert_eq!(violations[0].location, "params");
        assert_eq!(violations[1].location, "body");
    }

    #[test]
    fn test_absent_field_serializes_without_value() {
        let violations = run_rules(&RULES, &[("id", "1")], &json!({"amount": 1}));
        assert_eq!(violations.len(), 1);
        let entry = serde_json::to_value(&violations[0]).unwrap();
        assert!(entry.get("value").is_none());
        assert_eq!(entry["path"], "name");
    }

    #[test]
    fn test_whitespace_only_string_is_empty() {
        assert!(!checks::non_empty_string(Some(&json!("   "))));
        assert!(checks::non_empty_string(Some(&json!(" x "))));
    }

    #[test]
    fn test_positive_number_rejects_non_numbers() {
        assert!(checks::positive_number(Some(&json!(1.5))));
        assert!(!checks::positive_number(Some(&json!(0))));
        assert!(!checks::positive_number(Some(&json!(-2))));
        assert!(!checks::positive_number(Some(&json!("Hola"))));
        assert!(!checks::positive_number(None));
    }

    #[test]
    fn test_int_string_bounds() {
        assert!(checks::int_string(Some(&json!("42"))));
        assert!(!checks::int_string(Some(&json!("4.2"))));
        assert!(!checks::int_string(Some(&json!("abc"))));
        assert!(!checks::int_string(Some(&json!(42))));
    }
}
