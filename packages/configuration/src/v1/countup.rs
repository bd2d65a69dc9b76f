//! Configuration for one countup.
//!
//! Every field has a default, so a TOML table only needs the options that
//! differ from it. Nested tables (`start`, `words` and `classes`) are merged
//! key by key:
//!
//! ```toml
//! [[countups]]
//! selector = "uptime"
//! zero_pad = true
//!
//! [countups.start]
//! year = 2023
//!
//! [countups.words]
//! days = "jour"
//! ```
//!
//! When a countup is started from code the overrides come as [`Options`],
//! the same set of fields with every field optional.
use std::time::Duration;

use countup_primitives::{Frame, Layout, Unit};
use serde::{Deserialize, Serialize};

use crate::validator::{SemanticValidationError, Validator};

#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Countup {
    /// Selects the presentation targets the countup is rendered into. How
    /// it's resolved depends on the host.
    #[serde(default = "Countup::default_selector")]
    pub selector: String,

    /// When `true` both the start and the current time are compared as UTC
    /// calendar fields, otherwise as local ones.
    #[serde(default = "Countup::default_enable_utc")]
    pub enable_utc: bool,

    /// Milliseconds between two updates.
    #[serde(default = "Countup::default_refresh")]
    pub refresh: u64,

    /// Append the plural letter to the unit words.
    #[serde(default = "Countup::default_plural")]
    pub plural: bool,

    /// Left pad single digit amounts with a zero. Sectioned layout only.
    #[serde(default = "Countup::default_zero_pad")]
    pub zero_pad: bool,

    /// Render a single line of text instead of one section per unit.
    #[serde(default = "Countup::default_inline")]
    pub inline: bool,

    /// The instant the countup counts from, as local calendar fields.
    #[serde(default = "Countup::default_start")]
    pub start: Start,

    #[serde(default = "Countup::default_words")]
    pub words: Words,

    /// Style hooks handed over to the renderer untouched.
    #[serde(default = "Countup::default_classes")]
    pub classes: Classes,
}

impl Default for Countup {
    fn default() -> Self {
        Self {
            selector: Self::default_selector(),
            enable_utc: Self::default_enable_utc(),
            refresh: Self::default_refresh(),
            plural: Self::default_plural(),
            zero_pad: Self::default_zero_pad(),
            inline: Self::default_inline(),
            start: Self::default_start(),
            words: Self::default_words(),
            classes: Self::default_classes(),
        }
    }
}

impl Countup {
    fn default_selector() -> String {
        String::from("countup")
    }

    fn default_start() -> Start {
        Start::default()
    }

    fn default_enable_utc() -> bool {
        true
    }

    fn default_refresh() -> u64 {
        1000
    }

    fn default_plural() -> bool {
        true
    }

    fn default_zero_pad() -> bool {
        false
    }

    fn default_inline() -> bool {
        false
    }

    fn default_words() -> Words {
        Words::default()
    }

    fn default_classes() -> Classes {
        Classes::default()
    }

    /// A countup for the given selector with the defaults overridden by
    /// `options`.
    #[must_use]
    pub fn with_options(selector: &str, options: Options) -> Self {
        Self {
            selector: selector.to_owned(),
            ..Self::default()
        }
        .merged(options)
    }

    /// Overrides the fields set in `options`. Nested fields are overridden
    /// one by one.
    #[must_use]
    pub fn merged(mut self, options: Options) -> Self {
        let Options {
            start_year,
            start_month,
            start_day,
            start_hours,
            start_minutes,
            start_seconds,
            words,
            plural,
            inline,
            enable_utc,
            refresh,
            zero_pad,
            classes,
        } = options;

        override_with(&mut self.start.year, start_year);
        override_with(&mut self.start.month, start_month);
        override_with(&mut self.start.day, start_day);
        override_with(&mut self.start.hours, start_hours);
        override_with(&mut self.start.minutes, start_minutes);
        override_with(&mut self.start.seconds, start_seconds);

        override_with(&mut self.words.months, words.months);
        override_with(&mut self.words.days, words.days);
        override_with(&mut self.words.hours, words.hours);
        override_with(&mut self.words.minutes, words.minutes);
        override_with(&mut self.words.seconds, words.seconds);
        override_with(&mut self.words.plural_letter, words.plural_letter);

        override_with(&mut self.plural, plural);
        override_with(&mut self.inline, inline);
        override_with(&mut self.enable_utc, enable_utc);
        override_with(&mut self.refresh, refresh);
        override_with(&mut self.zero_pad, zero_pad);

        override_with(&mut self.classes.inline, classes.inline);
        override_with(&mut self.classes.section, classes.section);
        override_with(&mut self.classes.amount, classes.amount);
        override_with(&mut self.classes.word, classes.word);

        self
    }

    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::from_utc_flag(self.enable_utc)
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::from_inline_flag(self.inline)
    }

    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh)
    }
}

impl Validator for Countup {
    fn validate(&self) -> Result<(), SemanticValidationError> {
        if self.selector.trim().is_empty() {
            return Err(SemanticValidationError::EmptySelector);
        }

        if self.refresh == 0 {
            return Err(SemanticValidationError::ZeroRefreshInterval {
                selector: self.selector.clone(),
            });
        }

        Ok(())
    }
}

fn override_with<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

/// The start instant as local calendar fields.
///
/// Values out of their usual range are accepted and normalized like a
/// calendar does, `day = 32` of January is the first of February.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub struct Start {
    #[serde(default = "Start::default_year")]
    pub year: i32,
    /// Month of the year, starting at `1`.
    #[serde(default = "Start::default_month")]
    pub month: i64,
    #[serde(default = "Start::default_day")]
    pub day: i64,
    #[serde(default)]
    pub hours: i64,
    #[serde(default)]
    pub minutes: i64,
    #[serde(default)]
    pub seconds: i64,
}

impl Default for Start {
    fn default() -> Self {
        Self {
            year: Self::default_year(),
            month: Self::default_month(),
            day: Self::default_day(),
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }
}

impl Start {
    fn default_year() -> i32 {
        2024
    }

    fn default_month() -> i64 {
        5
    }

    fn default_day() -> i64 {
        7
    }
}

/// The word shown next to each amount.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Words {
    #[serde(default = "Words::default_months")]
    pub months: String,
    #[serde(default = "Words::default_days")]
    pub days: String,
    #[serde(default = "Words::default_hours")]
    pub hours: String,
    #[serde(default = "Words::default_minutes")]
    pub minutes: String,
    #[serde(default = "Words::default_seconds")]
    pub seconds: String,
    /// Appended to a word to make it plural.
    #[serde(default = "Words::default_plural_letter")]
    pub plural_letter: String,
}

impl Default for Words {
    fn default() -> Self {
        Self {
            months: Self::default_months(),
            days: Self::default_days(),
            hours: Self::default_hours(),
            minutes: Self::default_minutes(),
            seconds: Self::default_seconds(),
            plural_letter: Self::default_plural_letter(),
        }
    }
}

impl Words {
    fn default_months() -> String {
        String::from("month")
    }

    fn default_days() -> String {
        String::from("day")
    }

    fn default_hours() -> String {
        String::from("hour")
    }

    fn default_minutes() -> String {
        String::from("minute")
    }

    fn default_seconds() -> String {
        String::from("second")
    }

    fn default_plural_letter() -> String {
        String::from("s")
    }

    /// The singular word for a unit.
    #[must_use]
    pub fn for_unit(&self, unit: Unit) -> &str {
        match unit {
            Unit::Months => &self.months,
            Unit::Days => &self.days,
            Unit::Hours => &self.hours,
            Unit::Minutes => &self.minutes,
            Unit::Seconds => &self.seconds,
        }
    }
}

/// Style hooks for the presentation targets.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Classes {
    #[serde(default = "Classes::default_inline")]
    pub inline: String,
    #[serde(default = "Classes::default_section")]
    pub section: String,
    #[serde(default = "Classes::default_amount")]
    pub amount: String,
    #[serde(default = "Classes::default_word")]
    pub word: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            inline: Self::default_inline(),
            section: Self::default_section(),
            amount: Self::default_amount(),
            word: Self::default_word(),
        }
    }
}

impl Classes {
    fn default_inline() -> String {
        String::from("simply-countup-inline")
    }

    fn default_section() -> String {
        String::from("simply-section")
    }

    fn default_amount() -> String {
        String::from("simply-amount")
    }

    fn default_word() -> String {
        String::from("simply-word")
    }
}

/// Overrides for a [`Countup`]. Fields left as `None` keep their default.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
#[serde(default)]
pub struct Options {
    pub start_year: Option<i32>,
    pub start_month: Option<i64>,
    pub start_day: Option<i64>,
    pub start_hours: Option<i64>,
    pub start_minutes: Option<i64>,
    pub start_seconds: Option<i64>,
    pub words: WordsOptions,
    pub plural: Option<bool>,
    pub inline: Option<bool>,
    pub enable_utc: Option<bool>,
    pub refresh: Option<u64>,
    pub zero_pad: Option<bool>,
    pub classes: ClassesOptions,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
#[serde(default)]
pub struct WordsOptions {
    pub months: Option<String>,
    pub days: Option<String>,
    pub hours: Option<String>,
    pub minutes: Option<String>,
    pub seconds: Option<String>,
    pub plural_letter: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
#[serde(default)]
pub struct ClassesOptions {
    pub inline: Option<String>,
    pub section: Option<String>,
    pub amount: Option<String>,
    pub word: Option<String>,
}
