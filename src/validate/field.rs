//! Single-field validation.
//!
//! Exactly one branch runs, picked by the declared type. A type mismatch
//! short-circuits with a single finding; otherwise every present constraint
//! is checked and all failures are reported. Bounds are inclusive.

use super::violation::{FieldViolation, Rule};
use crate::{
    document::FieldValue,
    schema::{FieldSpec, IntegerRules, ListRules, StringRules},
};

/// Check `value` against `spec`. An empty result means the value is valid.
pub fn validate_field(value: &FieldValue, spec: &FieldSpec) -> Vec<FieldViolation> {
    match spec {
        FieldSpec::String(rules) => check_string(value, rules),
        FieldSpec::Integer(rules) => check_integer(value, rules),
        FieldSpec::List(rules) => check_list(value, rules),
        FieldSpec::Unchecked => Vec::new(),
    }
}

fn type_mismatch(expected: &str, value: &FieldValue) -> Vec<FieldViolation> {
    vec![FieldViolation::new(
        Rule::TypeMismatch,
        format!("expected {expected}, got {}", value.type_name()),
    )]
}

fn check_string(value: &FieldValue, rules: &StringRules) -> Vec<FieldViolation> {
    let FieldValue::String(text) = value else {
        return type_mismatch("string", value);
    };

    let mut errors = Vec::new();
    let len = text.chars().count();

    if let Some(allowed) = &rules.allowed
        && !allowed.iter().any(|a| a.as_str() == Some(text.as_str()))
    {
        errors.push(FieldViolation::new(
            Rule::NotInEnum,
            format!("must be one of {}, got '{text}'", quoted_list(allowed)),
        ));
    }
    if let Some(min) = rules.min_length
        && len < min
    {
        errors.push(FieldViolation::new(
            Rule::TooShort,
            format!("too short ({len} chars, min {min})"),
        ));
    }
    if let Some(max) = rules.max_length
        && len > max
    {
        errors.push(FieldViolation::new(
            Rule::TooLong,
            format!("too long ({len} chars, max {max})"),
        ));
    }
    if let Some(pattern) = &rules.pattern
        && !pattern.matches_prefix(text)
    {
        errors.push(FieldViolation::new(
            Rule::PatternMismatch,
            format!("does not match pattern {}", pattern.as_str()),
        ));
    }

    errors
}

/// Render allowed values as `['a', 'b']`, quoting strings.
fn quoted_list(values: &[FieldValue]) -> String {
    let items: Vec<String> = values
        .iter()
        .map(|value| match value {
            FieldValue::String(s) => format!("'{s}'"),
            other => other.to_string(),
        })
        .collect();
    format!("[{}]", items.join(", "))
}

fn check_integer(value: &FieldValue, rules: &IntegerRules) -> Vec<FieldViolation> {
    // `Bool` is its own variant, so `true` never gets here
    let FieldValue::Integer(n) = *value else {
        return type_mismatch("integer", value);
    };

    match rules.min {
        Some(min) if n < min => vec![FieldViolation::new(
            Rule::BelowMinimum,
            format!("value {n} below minimum {min}"),
        )],
        _ => Vec::new(),
    }
}

fn check_list(value: &FieldValue, rules: &ListRules) -> Vec<FieldViolation> {
    let FieldValue::List(items) = value else {
        return type_mismatch("list", value);
    };

    let mut errors = Vec::new();
    let count = items.len();

    if let Some(min) = rules.min_items
        && count < min
    {
        errors.push(FieldViolation::new(
            Rule::TooFewItems,
            format!("too few items ({count}, min {min})"),
        ));
    }
    if let Some(max) = rules.max_items
        && count > max
    {
        errors.push(FieldViolation::new(
            Rule::TooManyItems,
            format!("too many items ({count}, max {max})"),
        ));
    }

    for (i, item) in items.iter().enumerate() {
        if rules.string_items && item.as_str().is_none() {
            errors.push(FieldViolation::new(
                Rule::ItemTypeMismatch,
                format!("item [{i}] expected string, got {}", item.type_name()),
            ));
        } else if let (Some(pattern), Some(text)) = (&rules.item_pattern, item.as_str())
            && !pattern.matches_prefix(text)
        {
            errors.push(FieldViolation::new(
                Rule::ItemPatternMismatch,
                format!("item [{i}] '{text}' does not match pattern {}", pattern.as_str()),
            ));
        }
    }

    errors
}
