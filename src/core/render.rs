//! Evaluation of dynamic values and whole templates.
//!
//! A [`Renderer`] borrows the three collaborators it reads from (working directory, version
//! control, clock) and turns descriptors into text. Nothing is cached: every call re-reads the
//! environment, so a time placeholder reflects the instant of the call.
//!
//! # Public API
//! - [`Renderer::render_dynamic_value`]: One descriptor to text
//! - [`Renderer::render_template_string`]: Split a template and render every segment in order
//! - [`split_words`], [`reformat_casing`], [`round_time`], [`format_time`]: The individual steps,
//!   usable on their own

use chrono::{NaiveTime, TimeDelta, Timelike, Utc};
use std::path::Path;

use crate::core::{
    dynamic_value::{
        DirectoryNameValue, DynamicValue, GitReferenceType, GitReferenceValue, InputWordFormat,
        RoundDirection, TimeRound, TimeValue, WordCasing, MAX_SAFE_INTEGER,
    },
    environment::{Clock, VersionControl, WorkingDirectory},
    error::{ErrorCode, Result, StatusError},
    splitter::{split_template_string, Segment},
};

const HEAD: &str = "HEAD";
const COMMIT_HASH_LENGTH: usize = 6;

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_DAY: i64 = 24 * 60 * 60 * NANOS_PER_SECOND;

pub struct Renderer<'a> {
    working_directory: &'a dyn WorkingDirectory,
    version_control: &'a dyn VersionControl,
    clock: &'a dyn Clock,
}

impl<'a> Renderer<'a> {
    pub fn new(
        working_directory: &'a dyn WorkingDirectory,
        version_control: &'a dyn VersionControl,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            working_directory,
            version_control,
            clock,
        }
    }

    /// Render a whole template. The first failing segment aborts the render.
    pub fn render_template_string(&self, template: impl AsRef<str>) -> Result<String> {
        let segments = split_template_string(template)?;

        let mut output = String::new();
        for segment in &segments {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Dynamic(value) => output.push_str(&self.render_dynamic_value(value)?),
            }
        }

        log::debug!("Rendered {} segment(s) into {output:?}", segments.len());
        Ok(output)
    }

    pub fn render_dynamic_value(&self, value: &DynamicValue) -> Result<String> {
        match value {
            DynamicValue::DirectoryName(value) => self.render_directory_name(value),
            DynamicValue::GitReference(value) => self.render_git_reference(value),
            DynamicValue::Input(_) => Err(StatusError::internal(
                ErrorCode::NotImplemented,
                "Input dynamic values are not implemented",
            )),
            DynamicValue::Time(value) => self.render_time(value),
        }
    }

    fn render_directory_name(&self, value: &DirectoryNameValue) -> Result<String> {
        let offset = value.directory_offset_or_default();
        if !(0..=MAX_SAFE_INTEGER).contains(&offset) {
            return Err(StatusError::internal(
                ErrorCode::InvalidDynamicValue,
                format!("The directory offset must be a safe non-negative integer, got {offset}"),
            ));
        }

        let current_dir = self.working_directory.current_dir()?;
        let name = resolve_directory_name(&current_dir, offset)?;

        let words = split_words(&name, value.input_word_format_or_default());
        let words = reformat_casing(words, value.reformat_word_casing_or_default());
        Ok(words.join(value.output_word_joiner_or_default()))
    }

    fn render_git_reference(&self, value: &GitReferenceValue) -> Result<String> {
        match value.reference_type {
            GitReferenceType::Branch => self.version_control.branch_name(HEAD)?.ok_or_else(|| {
                StatusError::internal(
                    ErrorCode::GitExtensionError,
                    format!("Could not get branch name of {HEAD}"),
                )
            }),
            GitReferenceType::Commit => Ok(self
                .version_control
                .commit_hash(HEAD)?
                .chars()
                .take(COMMIT_HASH_LENGTH)
                .collect()),
        }
    }

    fn render_time(&self, value: &TimeValue) -> Result<String> {
        let offset = value.offset_or_default();
        let invalid_offset = || {
            StatusError::internal(
                ErrorCode::InvalidDynamicValue,
                format!("Invalid time offset: {offset}"),
            )
        };

        if !(-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&offset) {
            return Err(invalid_offset());
        }

        // Shift on the UTC timeline, then take the local offset of the target instant
        let shifted = TimeDelta::try_seconds(offset)
            .and_then(|delta| self.clock.now().with_timezone(&Utc).checked_add_signed(delta))
            .map(|instant| self.clock.localize(instant))
            .ok_or_else(invalid_offset)?;

        let time = match value.round {
            Some(round) => round_time(shifted.time(), round)?,
            None => shifted.time(),
        };

        Ok(format_time(time, value.format_or_default()))
    }
}

/// Name of the directory `offset` levels above `current_dir`
fn resolve_directory_name(current_dir: &Path, offset: i64) -> Result<String> {
    let mut dir = current_dir.to_path_buf();
    for _ in 0..offset {
        if !dir.pop() {
            break;
        }
    }

    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            StatusError::internal(
                ErrorCode::InvalidDynamicValue,
                format!(
                    "Could not resolve the directory {offset} level(s) above {}",
                    current_dir.display()
                ),
            )
        })
}

/// Split a directory name into words. Whitespace separates words in every format except
/// `no-splitting`; empty words between adjacent separators are kept.
pub fn split_words(name: &str, format: InputWordFormat) -> Vec<String> {
    let split_on = |separator: char| -> Vec<String> {
        name.split(|c: char| c == separator || c.is_whitespace())
            .map(str::to_string)
            .collect()
    };

    match format {
        InputWordFormat::Camel | InputWordFormat::Pascal => {
            let mut words = Vec::new();
            let mut current = String::new();
            for ch in name.chars() {
                if ch.is_whitespace() {
                    words.push(std::mem::take(&mut current));
                } else {
                    if ch.is_uppercase() && !current.is_empty() {
                        words.push(std::mem::take(&mut current));
                    }
                    current.push(ch);
                }
            }
            words.push(current);
            words
        }
        InputWordFormat::Kebab => split_on('-'),
        InputWordFormat::Snake => split_on('_'),
        InputWordFormat::Space => name.split(char::is_whitespace).map(str::to_string).collect(),
        InputWordFormat::NoSplitting => vec![name.to_string()],
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Apply a casing mode to split words. Every mode except `unchanged` starts from lowercased
/// words.
pub fn reformat_casing(words: Vec<String>, casing: WordCasing) -> Vec<String> {
    let words = if casing == WordCasing::Unchanged {
        words
    } else {
        words.iter().map(|w| w.to_lowercase()).collect()
    };

    match casing {
        WordCasing::Unchanged => words,
        WordCasing::Low => words.iter().map(|w| w.to_lowercase()).collect(),
        WordCasing::Up => words.iter().map(|w| w.to_uppercase()).collect(),
        WordCasing::UpFirst => words
            .into_iter()
            .enumerate()
            .map(|(i, w)| if i == 0 { capitalize(&w) } else { w })
            .collect(),
        WordCasing::UpWord => words.iter().map(|w| capitalize(w)).collect(),
        WordCasing::UpWordExceptFirst => words
            .into_iter()
            .enumerate()
            .map(|(i, w)| if i == 0 { w } else { capitalize(&w) })
            .collect(),
    }
}

/// Round a time of day to a multiple of the round increment. Results past midnight wrap to the
/// start of the day.
pub fn round_time(time: NaiveTime, round: TimeRound) -> Result<NaiveTime> {
    let invalid = || {
        StatusError::internal(
            ErrorCode::InvalidDynamicValue,
            format!(
                "Invalid time round: {} {:?} {:?}",
                round.increment, round.unit, round.direction
            ),
        )
    };

    if !round.is_valid() {
        return Err(invalid());
    }

    // Leap seconds report nanosecond values above one second
    let nanos = i64::from(time.num_seconds_from_midnight()) * NANOS_PER_SECOND
        + i64::from(time.nanosecond().min(999_999_999));
    let increment = i64::from(round.increment) * round.unit.seconds() * NANOS_PER_SECOND;

    let quotient = nanos / increment;
    let remainder = nanos % increment;
    let steps = match round.direction {
        RoundDirection::Nearest if 2 * remainder >= increment => quotient + 1,
        RoundDirection::Up if remainder > 0 => quotient + 1,
        _ => quotient,
    };

    let rounded = (steps * increment).rem_euclid(NANOS_PER_DAY);
    let seconds = u32::try_from(rounded / NANOS_PER_SECOND).map_err(|_| invalid())?;
    let nanosecond = u32::try_from(rounded % NANOS_PER_SECOND).map_err(|_| invalid())?;

    NaiveTime::from_num_seconds_from_midnight_opt(seconds, nanosecond).ok_or_else(invalid)
}

/// Substitute the first occurrence of each time token in `format`. Unknown bracketed text is
/// left alone.
///
/// | Token | Value |
/// |-------|-------|
/// | `[HH]` / `[H]` | 24h hour, padded / unpadded |
/// | `[hh]` / `[h]` | 12h hour (12 for hour 0), padded / unpadded |
/// | `[MM]` / `[M]` | minute, padded / unpadded |
/// | `[T]` / `[t]` | `AM`/`PM`, `am`/`pm` |
pub fn format_time(time: NaiveTime, format: &str) -> String {
    let hour = time.hour();
    let minute = time.minute();
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    let meridiem = if hour >= 12 { "PM" } else { "AM" };

    let substitutions = [
        ("[HH]", format!("{hour:02}")),
        ("[H]", hour.to_string()),
        ("[hh]", format!("{hour12:02}")),
        ("[h]", hour12.to_string()),
        ("[MM]", format!("{minute:02}")),
        ("[M]", minute.to_string()),
        ("[T]", meridiem.to_string()),
        ("[t]", meridiem.to_lowercase()),
    ];

    substitutions
        .iter()
        .fold(format.to_string(), |acc, (token, value)| {
            acc.replacen(token, value, 1)
        })
}
