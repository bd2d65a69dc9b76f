//! Rendering of countup readings into display targets.
//!
//! A countup never talks to a concrete display. It asks a host to:
//!
//! 1. [`Lookup::select`] the targets matching a selector.
//! 2. [`Renderer::mount`] a [`Board`] into each target, with the layout and
//!    the class names of the countup.
//!
//! After that, every refresh writes text into the sinks of the board. A
//! board is either a single inline sink or five sections, one per unit, each
//! with an amount sink and a word sink:
//!
//! ```text
//! Inline:     [1 month, 2 days, 3 hours, 4 minutes, 5 seconds.]
//! Sectioned:  [01][month] [02][days] [03][hours] [04][minutes] [05][seconds]
//! ```
//!
//! Hosts:
//!
//! - [`terminal::Console`]: prints a line per refresh to the standard output.
//! - [`memory::Recorder`]: keeps every write in memory, for tests and for
//!   embedding.
pub mod memory;
pub mod terminal;

use countup_configuration::Classes;
use countup_primitives::{Layout, Unit};
use derive_more::{Constructor, Display};

use crate::core::reading::Reading;

/// A place where a text content is written. Every write replaces the
/// previous content.
pub trait Sink: Send {
    fn write(&mut self, text: &str);
}

/// The opaque identity of a display target found by a [`Lookup`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Target(String);

impl Target {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.to_owned())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Finds the display targets matching a selector.
pub trait Lookup {
    /// Returns the matching targets in document order. An empty result is
    /// not an error.
    fn select(&self, selector: &str) -> Vec<Target>;
}

/// Builds the sinks of a board inside a display target.
pub trait Renderer {
    fn mount(&self, target: &Target, layout: Layout, classes: &Classes) -> Board;
}

/// A display host able to find targets and mount boards into them.
pub trait Host: Lookup + Renderer + Send + Sync + 'static {}

impl<T: Lookup + Renderer + Send + Sync + 'static> Host for T {}

/// The amount and word sinks of one unit.
#[derive(Constructor)]
pub struct Section {
    pub amount: Box<dyn Sink>,
    pub word: Box<dyn Sink>,
}

/// One section per unit, in display order.
#[derive(Constructor)]
pub struct Sections {
    pub months: Section,
    pub days: Section,
    pub hours: Section,
    pub minutes: Section,
    pub seconds: Section,
}

impl Sections {
    /// Builds the five sections with a closure called once per unit, in
    /// display order.
    #[must_use]
    pub fn build(mut section_for: impl FnMut(Unit) -> Section) -> Self {
        Self {
            months: section_for(Unit::Months),
            days: section_for(Unit::Days),
            hours: section_for(Unit::Hours),
            minutes: section_for(Unit::Minutes),
            seconds: section_for(Unit::Seconds),
        }
    }

    pub fn section_mut(&mut self, unit: Unit) -> &mut Section {
        match unit {
            Unit::Months => &mut self.months,
            Unit::Days => &mut self.days,
            Unit::Hours => &mut self.hours,
            Unit::Minutes => &mut self.minutes,
            Unit::Seconds => &mut self.seconds,
        }
    }
}

/// The sinks of a mounted countup.
pub enum Board {
    Inline(Box<dyn Sink>),
    Sectioned(Box<Sections>),
}

impl Board {
    #[must_use]
    pub fn layout(&self) -> Layout {
        match self {
            Board::Inline(_) => Layout::Inline,
            Board::Sectioned(_) => Layout::Sectioned,
        }
    }

    /// Writes the reading into the sinks.
    ///
    /// Inline boards get the whole sentence. Sectioned boards get every
    /// amount and word, months first.
    pub fn show(&mut self, reading: &Reading) {
        match self {
            Board::Inline(sink) => sink.write(&reading.sentence()),
            Board::Sectioned(sections) => {
                for entry in reading.entries() {
                    let section = sections.section_mut(entry.unit);
                    section.amount.write(&entry.text);
                    section.word.write(&entry.word);
                }
            }
        }
    }
}
