//! Conversion of a placeholder body into a [`DynamicValue`].
//!
//! The body is the text between the braces: a one-letter type tag followed by a comma separated
//! list of modifiers (`d+2,>kebab,^upWord,-`). A literal comma inside a modifier value is written
//! `\,`. Each modifier is a single identifier character followed by its value.
//!
//! Modifiers are applied as a strict left fold: every step takes the partial descriptor by value,
//! validates the modifier against it and returns the extended descriptor, or fails. An identifier
//! may be used at most once per placeholder.
//!
//! | Type | Identifier | Meaning |
//! |------|------------|---------|
//! | `d`  | `+` `>` `^` `-` | offset, input word format, word casing, output joiner |
//! | `g`  | `?` | reference type (`branch` / `commit`, required) |
//! | `i`  | `=` `~` | mandatory / optional values, `;` separated, mutually exclusive |
//! | `t`  | `+`/`-` `~` `=` | offset, round, format |

use crate::core::{
    dynamic_value::{
        DirectoryNameValue, DynamicValue, GitReferenceType, GitReferenceValue, InputValue,
        InputWordFormat, RoundDirection, TimeRound, TimeUnit, TimeValue, WordCasing,
        MAX_SAFE_INTEGER,
    },
    error::{ErrorCode, Result, StatusError},
    escape::split_unescaped,
    time_range::parse_time_range,
};

const FORMAT_ISO: &str = "[HH]-[MM]-00";
const FORMAT_AMERICAN: &str = "[h]:[MM] [t]";
const FORMAT_GERMAN: &str = "[HH]:[MM]";

/// Parse a placeholder body (braces already stripped) into a descriptor.
pub fn convert_dynamic_template_value(raw: &str) -> Result<DynamicValue> {
    let mut chars = raw.chars();
    let type_tag = chars.next();
    let rest = chars.as_str();

    let modifiers = if rest.is_empty() {
        Vec::new()
    } else {
        split_unescaped(rest, ',')
    };

    let value = match type_tag {
        Some('d') => DynamicValue::DirectoryName(
            modifiers
                .iter()
                .try_fold(DirectoryNameValue::default(), |value, modifier| {
                    apply_directory_modifier(value, modifier)
                })?,
        ),
        Some('g') => {
            let reference_type = modifiers
                .iter()
                .try_fold(None, |value, modifier| apply_git_modifier(value, modifier))?;

            let reference_type = reference_type.ok_or_else(|| {
                StatusError::invalid_dynamic_value(
                    "Reference type modifier in dynamic value required",
                )
            })?;
            DynamicValue::GitReference(GitReferenceValue { reference_type })
        }
        Some('i') => DynamicValue::Input(
            modifiers
                .iter()
                .try_fold(InputValue::default(), |value, modifier| {
                    apply_input_modifier(value, modifier)
                })?,
        ),
        Some('t') => DynamicValue::Time(
            modifiers
                .iter()
                .try_fold(TimeValue::default(), |value, modifier| {
                    apply_time_modifier(value, modifier)
                })?,
        ),
        _ => {
            let type_tag = type_tag.map(String::from).unwrap_or_default();
            return Err(StatusError::internal(
                ErrorCode::InvalidDynamicValue,
                format!("Invalid dynamic value type: {type_tag}"),
            ));
        }
    };

    log::debug!("Converted dynamic value {raw:?} into {value:?}");
    Ok(value)
}

/// Split a modifier into its identifier character and its value
fn split_modifier(modifier: &str) -> (&str, &str) {
    match modifier.chars().next() {
        Some(first) => modifier.split_at(first.len_utf8()),
        None => ("", ""),
    }
}

fn apply_directory_modifier(
    value: DirectoryNameValue,
    modifier: &str,
) -> Result<DirectoryNameValue> {
    let (identifier, modifier_value) = split_modifier(modifier);

    match identifier {
        "+" => {
            if value.directory_offset.is_some() {
                return Err(StatusError::modifier_already_defined(identifier));
            }

            let not_an_offset = || {
                StatusError::invalid_dynamic_value(format!(
                    "Invalid modifier value: \"{modifier}\". Modifier value has to be a non-negative integer."
                ))
            };
            let directory_offset: i64 = modifier_value.parse().map_err(|_| not_an_offset())?;
            if !(0..=MAX_SAFE_INTEGER).contains(&directory_offset) {
                return Err(not_an_offset());
            }

            Ok(DirectoryNameValue {
                directory_offset: Some(directory_offset),
                ..value
            })
        }
        ">" => {
            if value.input_word_format.is_some() {
                return Err(StatusError::modifier_already_defined(identifier));
            }

            let format = InputWordFormat::from_tag(modifier_value).ok_or_else(|| {
                StatusError::invalid_modifier_value(modifier, &InputWordFormat::TAGS)
            })?;

            Ok(DirectoryNameValue {
                input_word_format: Some(format),
                ..value
            })
        }
        "^" => {
            if value.reformat_word_casing.is_some() {
                return Err(StatusError::modifier_already_defined(identifier));
            }

            let casing = WordCasing::from_tag(modifier_value)
                .ok_or_else(|| StatusError::invalid_modifier_value(modifier, &WordCasing::TAGS))?;

            Ok(DirectoryNameValue {
                reformat_word_casing: Some(casing),
                ..value
            })
        }
        "-" => {
            if value.output_word_joiner.is_some() {
                return Err(StatusError::modifier_already_defined(identifier));
            }

            Ok(DirectoryNameValue {
                output_word_joiner: Some(modifier_value.to_string()),
                ..value
            })
        }
        _ => Err(StatusError::invalid_modifier_identifier(identifier)),
    }
}

fn apply_git_modifier(
    value: Option<GitReferenceType>,
    modifier: &str,
) -> Result<Option<GitReferenceType>> {
    let (identifier, modifier_value) = split_modifier(modifier);

    match identifier {
        "?" => {
            if value.is_some() {
                return Err(StatusError::modifier_already_defined(identifier));
            }

            GitReferenceType::from_tag(modifier_value)
                .map(Some)
                .ok_or_else(|| StatusError::invalid_modifier_value(modifier, &GitReferenceType::TAGS))
        }
        _ => Err(StatusError::invalid_modifier_identifier(identifier)),
    }
}

fn apply_input_modifier(value: InputValue, modifier: &str) -> Result<InputValue> {
    let (identifier, modifier_value) = split_modifier(modifier);

    match identifier {
        "=" => {
            if value.mandatory_values.is_some() {
                return Err(StatusError::modifier_already_defined(identifier));
            }
            if value.optional_values.is_some() {
                return Err(StatusError::invalid_dynamic_value(
                    "Cannot use \"=\" when \"~\" modifier is already defined",
                ));
            }

            Ok(InputValue {
                mandatory_values: Some(split_unescaped(modifier_value, ';')),
                ..value
            })
        }
        "~" => {
            if value.optional_values.is_some() {
                return Err(StatusError::modifier_already_defined(identifier));
            }
            if value.mandatory_values.is_some() {
                return Err(StatusError::invalid_dynamic_value(
                    "Cannot use \"~\" when \"=\" modifier is already defined",
                ));
            }

            Ok(InputValue {
                optional_values: Some(split_unescaped(modifier_value, ';')),
                ..value
            })
        }
        _ => Err(StatusError::invalid_modifier_identifier(identifier)),
    }
}

fn apply_time_modifier(value: TimeValue, modifier: &str) -> Result<TimeValue> {
    let (identifier, modifier_value) = split_modifier(modifier);

    match identifier {
        // Both signs fill the same offset slot
        "+" | "-" => {
            if value.offset.is_some() {
                return Err(StatusError::modifier_already_defined(identifier));
            }

            let seconds = parse_time_range(modifier)?
                .total_seconds()
                .filter(|s| s.abs() <= MAX_SAFE_INTEGER)
                .ok_or_else(|| {
                    StatusError::invalid_dynamic_value(format!(
                        "Time offset out of range: \"{modifier}\""
                    ))
                })?;

            Ok(TimeValue {
                offset: Some(seconds),
                ..value
            })
        }
        "~" => {
            if value.round.is_some() {
                return Err(StatusError::modifier_already_defined(identifier));
            }

            Ok(TimeValue {
                round: Some(parse_round(modifier_value)?),
                ..value
            })
        }
        "=" => {
            if value.format.is_some() {
                return Err(StatusError::modifier_already_defined(identifier));
            }

            let format = match modifier_value {
                "iso" => FORMAT_ISO,
                "american" => FORMAT_AMERICAN,
                "german" => FORMAT_GERMAN,
                custom => custom,
            };

            Ok(TimeValue {
                format: Some(format.to_string()),
                ..value
            })
        }
        _ => Err(StatusError::invalid_modifier_identifier(identifier)),
    }
}

/// `[+|-]<range>`: the sign picks the direction, the range names exactly one unit
fn parse_round(modifier_value: &str) -> Result<TimeRound> {
    let (direction, range) = if let Some(rest) = modifier_value.strip_prefix('+') {
        (RoundDirection::Up, rest)
    } else if let Some(rest) = modifier_value.strip_prefix('-') {
        (RoundDirection::Down, rest)
    } else {
        (RoundDirection::Nearest, modifier_value)
    };

    let invalid = || {
        StatusError::invalid_dynamic_value(format!("Invalid time range: {modifier_value}"))
    };

    let time_range = parse_time_range(range)?;
    let (increment, unit) = match (time_range.hours, time_range.minutes) {
        (None, Some(minutes)) => (minutes, TimeUnit::Minutes),
        (Some(hours), None) => (hours, TimeUnit::Hours),
        _ => return Err(invalid()),
    };

    let increment = u32::try_from(increment).map_err(|_| invalid())?;
    let round = TimeRound::new(increment, unit, direction);
    if !round.is_valid() {
        return Err(StatusError::invalid_dynamic_value(format!(
            "Invalid round increment: \"{modifier_value}\". The increment has to divide {} evenly and be smaller.",
            unit.units_per_parent()
        )));
    }

    Ok(round)
}
