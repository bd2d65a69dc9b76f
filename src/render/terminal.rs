//! A terminal host.
//!
//! Every name in a selector is a target: a line of output prefixed with the
//! name. An inline board prints its sentence on every refresh. A sectioned
//! board prints once all its amounts and words have been refreshed:
//!
//! ```text
//! uptime: 5 months, 10 days, 9 hours, 41 minutes, 3 seconds.
//! launch: 05 months | 10 days | 09 hours | 41 minutes | 03 seconds
//! ```
use std::sync::Arc;

use countup_configuration::Classes;
use countup_primitives::{Layout, Unit};
use parking_lot::Mutex;
use tracing::debug;

use super::{Board, Lookup, Renderer, Section, Sections, Sink, Target};

pub trait Printer: Send + Sync {
    fn print(&self, output: &str);
    fn println(&self, output: &str);
}

/// Prints to the standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Printer for Stdout {
    fn print(&self, output: &str) {
        print!("{output}");
    }

    fn println(&self, output: &str) {
        println!("{output}");
    }
}

/// Keeps the output in memory.
#[derive(Debug, Default)]
pub struct Logger {
    output: Mutex<String>,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn log(&self) -> String {
        self.output.lock().clone()
    }
}

impl Printer for Logger {
    fn print(&self, output: &str) {
        self.output.lock().push_str(output);
    }

    fn println(&self, output: &str) {
        self.print(&format!("{output}\n"));
    }
}

pub struct Console<P: Printer = Stdout> {
    printer: Arc<P>,
}

impl Default for Console<Stdout> {
    fn default() -> Self {
        Self::new(Arc::new(Stdout))
    }
}

impl<P: Printer> Console<P> {
    #[must_use]
    pub fn new(printer: Arc<P>) -> Self {
        Self { printer }
    }
}

impl<P: Printer + 'static> Lookup for Console<P> {
    fn select(&self, selector: &str) -> Vec<Target> {
        selector
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Target::new)
            .collect()
    }
}

impl<P: Printer + 'static> Renderer for Console<P> {
    fn mount(&self, target: &Target, layout: Layout, classes: &Classes) -> Board {
        let printer: Arc<dyn Printer> = self.printer.clone();

        debug!(line = %target, %layout, ?classes, "mounting terminal board");

        match layout {
            Layout::Inline => Board::Inline(Box::new(Line {
                name: target.name().to_owned(),
                printer,
            })),
            Layout::Sectioned => {
                let panel = Arc::new(Mutex::new(Panel::new(target.name(), printer)));

                Board::Sectioned(Box::new(Sections::build(|unit| {
                    Section::new(
                        Box::new(Cell::new(&panel, Panel::amount_index(unit))),
                        Box::new(Cell::new(&panel, Panel::word_index(unit))),
                    )
                })))
            }
        }
    }
}

struct Line {
    name: String,
    printer: Arc<dyn Printer>,
}

impl Sink for Line {
    fn write(&mut self, text: &str) {
        self.printer.println(&format!("{}: {text}", self.name));
    }
}

const CELLS: usize = Unit::ALL.len() * 2;

/// The amounts and words of a sectioned board, in display order.
struct Panel {
    name: String,
    printer: Arc<dyn Printer>,
    cells: [String; CELLS],
    fresh: [bool; CELLS],
}

impl Panel {
    fn new(name: &str, printer: Arc<dyn Printer>) -> Self {
        Self {
            name: name.to_owned(),
            printer,
            cells: Default::default(),
            fresh: [false; CELLS],
        }
    }

    fn amount_index(unit: Unit) -> usize {
        unit as usize * 2
    }

    fn word_index(unit: Unit) -> usize {
        unit as usize * 2 + 1
    }

    fn write(&mut self, index: usize, text: &str) {
        text.clone_into(&mut self.cells[index]);
        self.fresh[index] = true;

        if self.fresh.iter().all(|fresh| *fresh) {
            self.fresh = [false; CELLS];
            self.printer.println(&self.line());
        }
    }

    fn line(&self) -> String {
        let sections: Vec<String> = self.cells.chunks(2).map(|pair| pair.join(" ")).collect();

        format!("{}: {}", self.name, sections.join(" | "))
    }
}

struct Cell {
    panel: Arc<Mutex<Panel>>,
    index: usize,
}

impl Cell {
    fn new(panel: &Arc<Mutex<Panel>>, index: usize) -> Self {
        Self {
            panel: panel.clone(),
            index,
        }
    }
}

impl Sink for Cell {
    fn write(&mut self, text: &str) {
        self.panel.lock().write(self.index, text);
    }
}
