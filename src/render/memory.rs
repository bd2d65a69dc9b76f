//! An in-memory host.
//!
//! The [`Recorder`] knows a fixed list of named targets and keeps, for every
//! sink of the boards mounted on them, the last text written and how many
//! writes there were. It is the host used by the tests and by programs
//! embedding countups without a terminal. Its memory use does not grow with
//! the number of refreshes.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use countup::render::memory::{Recorder, Slot};
//! use countup::render::Target;
//!
//! let recorder = Arc::new(Recorder::new(&["uptime", "since-launch"]));
//!
//! assert_eq!(recorder.latest(&Target::new("uptime"), Slot::Inline), None);
//! ```
use std::collections::HashMap;
use std::sync::Arc;

use countup_configuration::Classes;
use countup_primitives::{Layout, Unit};
use parking_lot::Mutex;

use super::{Board, Lookup, Renderer, Section, Sections, Sink, Target};

/// A sink of a mounted board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Inline,
    Amount(Unit),
    Word(Unit),
}

/// The writes into one slot.
#[derive(Clone, Debug, Default)]
struct Record {
    count: usize,
    latest: String,
}

type Writes = Arc<Mutex<HashMap<(Target, Slot), Record>>>;

/// What a target was mounted with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mount {
    pub layout: Layout,
    pub classes: Classes,
    /// The class of every section, in display order. Empty for inline
    /// boards.
    pub section_classes: Vec<String>,
}

#[derive(Debug, Default)]
pub struct Recorder {
    targets: Vec<Target>,
    writes: Writes,
    mounts: Mutex<HashMap<Target, Mount>>,
}

impl Recorder {
    #[must_use]
    pub fn new(names: &[&str]) -> Self {
        Self {
            targets: names.iter().map(|name| Target::new(name)).collect(),
            ..Self::default()
        }
    }

    /// The last text written into a slot.
    #[must_use]
    pub fn latest(&self, target: &Target, slot: Slot) -> Option<String> {
        self.writes
            .lock()
            .get(&(target.clone(), slot))
            .map(|record| record.latest.clone())
    }

    /// How many times a slot was written.
    #[must_use]
    pub fn writes(&self, target: &Target, slot: Slot) -> usize {
        self.writes.lock().get(&(target.clone(), slot)).map_or(0, |record| record.count)
    }

    #[must_use]
    pub fn mount_of(&self, target: &Target) -> Option<Mount> {
        self.mounts.lock().get(target).cloned()
    }
}

impl Lookup for Recorder {
    /// A selector is a comma separated list of target names.
    fn select(&self, selector: &str) -> Vec<Target> {
        let names: Vec<&str> = selector.split(',').map(str::trim).collect();

        self.targets
            .iter()
            .filter(|target| names.contains(&target.name()))
            .cloned()
            .collect()
    }
}

impl Renderer for Recorder {
    fn mount(&self, target: &Target, layout: Layout, classes: &Classes) -> Board {
        let sink = |slot| -> Box<dyn Sink> {
            Box::new(RecordedSink {
                key: (target.clone(), slot),
                writes: self.writes.clone(),
            })
        };

        let (board, section_classes) = match layout {
            Layout::Inline => (Board::Inline(sink(Slot::Inline)), Vec::new()),
            Layout::Sectioned => (
                Board::Sectioned(Box::new(Sections::build(|unit| {
                    Section::new(sink(Slot::Amount(unit)), sink(Slot::Word(unit)))
                }))),
                Unit::ALL.iter().map(|unit| unit.section_class()).collect(),
            ),
        };

        self.mounts.lock().insert(
            target.clone(),
            Mount {
                layout,
                classes: classes.clone(),
                section_classes,
            },
        );

        board
    }
}

struct RecordedSink {
    key: (Target, Slot),
    writes: Writes,
}

impl Sink for RecordedSink {
    fn write(&mut self, text: &str) {
        let mut writes = self.writes.lock();
        let record = writes.entry(self.key.clone()).or_default();

        record.count += 1;
        text.clone_into(&mut record.latest);
    }
}
