//! Tokenizer turning a template string into literal text and dynamic value descriptors.
//!
//! `Hello {d+1} World` becomes `["Hello ", {directory-name, offset 1}, " World"]`. A brace
//! written as `\{` or `\}` is literal text and the backslash is dropped; every other backslash
//! is kept as is so modifier level escapes (`\,`, `\;`) reach the modifier parser untouched.
//!
//! Nesting is not supported: a `{` inside a placeholder, a placeholder that is never closed and
//! a `}` with no placeholder open are all rejected with `InvalidTemplateString`.

use serde::Serialize;

use crate::core::{
    dynamic_value::DynamicValue,
    error::Result,
    error::StatusError,
    modifiers::convert_dynamic_template_value,
};

/// One piece of a split template. Serializes as a bare string or as the descriptor object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Segment {
    Text(String),
    Dynamic(DynamicValue),
}

impl From<&str> for Segment {
    fn from(text: &str) -> Self {
        Segment::Text(text.to_string())
    }
}

impl From<DynamicValue> for Segment {
    fn from(value: DynamicValue) -> Self {
        Segment::Dynamic(value)
    }
}

/// Split a template (a raw string or anything exposing one, such as a stored template) into
/// segments in source order.
pub fn split_template_string(template: impl AsRef<str>) -> Result<Vec<Segment>> {
    let template = template.as_ref();
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut placeholder: Option<String> = None;
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' if matches!(chars.peek(), Some('{') | Some('}')) => {
                if let Some(brace) = chars.next() {
                    placeholder.as_mut().unwrap_or(&mut literal).push(brace);
                }
            }
            '{' => {
                if placeholder.is_some() {
                    return Err(StatusError::invalid_template_string(
                        template,
                        "contains a nested opening brace",
                    ));
                }
                if !literal.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut literal)));
                }
                placeholder = Some(String::new());
            }
            '}' => {
                let body = placeholder.take().ok_or_else(|| {
                    StatusError::invalid_template_string(
                        template,
                        "contains a closing brace without a matching opening brace",
                    )
                })?;
                segments.push(Segment::Dynamic(convert_dynamic_template_value(&body)?));
            }
            _ => placeholder.as_mut().unwrap_or(&mut literal).push(ch),
        }
    }

    if placeholder.is_some() {
        return Err(StatusError::invalid_template_string(
            template,
            "contains an unterminated dynamic value",
        ));
    }
    if !literal.is_empty() {
        segments.push(Segment::Text(literal));
    }

    log::debug!(
        "Split template {template:?} into {} segment(s)",
        segments.len()
    );
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dynamic_value::{DirectoryNameValue, TimeValue};
    use crate::core::error::{ErrorCode, ErrorScope};

    fn offset(n: i64) -> Segment {
        Segment::Dynamic(DynamicValue::DirectoryName(DirectoryNameValue {
            directory_offset: Some(n),
            ..Default::default()
        }))
    }

    #[test]
    fn test_text_around_placeholder() -> Result<()> {
        assert_eq!(
            split_template_string("Hello {d+1} World")?,
            vec![Segment::from("Hello "), offset(1), Segment::from(" World")]
        );
        Ok(())
    }

    #[test]
    fn test_plain_text_is_one_segment() -> Result<()> {
        assert_eq!(
            split_template_string("Just text")?,
            vec![Segment::from("Just text")]
        );
        assert!(split_template_string("")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_adjacent_placeholders() -> Result<()> {
        let segments = split_template_string("{d+1}{t}")?;
        assert_eq!(
            segments,
            vec![
                offset(1),
                Segment::Dynamic(DynamicValue::Time(TimeValue::default()))
            ]
        );
        Ok(())
    }

    #[test]
    fn test_escaped_braces_are_literal() -> Result<()> {
        assert_eq!(
            split_template_string("a \\{b\\} c")?,
            vec![Segment::from("a {b} c")]
        );
        assert_eq!(
            split_template_string("\\{{d+1}\\}")?,
            vec![Segment::from("{"), offset(1), Segment::from("}")]
        );
        Ok(())
    }

    #[test]
    fn test_other_backslashes_are_kept() -> Result<()> {
        assert_eq!(
            split_template_string("C:\\temp")?,
            vec![Segment::from("C:\\temp")]
        );
        Ok(())
    }

    #[test]
    fn test_modifier_escapes_reach_modifier_parser() -> Result<()> {
        let segments = split_template_string("{d-\\,}")?;
        assert_eq!(
            segments,
            vec![Segment::Dynamic(DynamicValue::DirectoryName(
                DirectoryNameValue {
                    output_word_joiner: Some(",".to_string()),
                    ..Default::default()
                }
            ))]
        );
        Ok(())
    }

    #[test]
    fn test_structural_errors() {
        for template in ["oops }", "{d+1", "{d{+1}}", "a}b{d}"] {
            let err = split_template_string(template).unwrap_err();
            assert!(
                err.is_code(ErrorCode::InvalidTemplateString),
                "expected InvalidTemplateString for {template:?}"
            );
            assert_eq!(err.scope(), ErrorScope::User);
            assert!(err.message().contains(template));
        }
    }

    #[test]
    fn test_modifier_errors_propagate() {
        let err = split_template_string("x {d+1,+1} y").unwrap_err();
        assert!(err.is_code(ErrorCode::InvalidDynamicValue));
    }

    #[test]
    fn test_segments_serialize_untagged() -> serde_json::Result<()> {
        let json = serde_json::to_value(vec![Segment::from("Hi "), offset(2)])?;
        assert_eq!(
            json,
            serde_json::json!(["Hi ", {"type": "directory-name", "directoryOffset": 2}])
        );
        Ok(())
    }
}
