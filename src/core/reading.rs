//! What a countup shows on a refresh.
//!
//! A [`Reading`] turns a decomposed [`Duration`] into the five amount and
//! word pairs of a sectioned board, or into the sentence of an inline one:
//!
//! ```text
//! 1 month, 2 days, 3 hours, 4 minutes, 5 seconds.
//! ```
use countup_calendar::Duration;
use countup_configuration::{Countup, Words};
use countup_primitives::Unit;

/// The presentation of one unit.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Entry {
    pub unit: Unit,
    /// The count, as computed.
    pub amount: u64,
    /// The count as shown in a section, zero-padded when enabled.
    pub text: String,
    /// The unit word, pluralized when enabled.
    pub word: String,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Reading {
    elapsed: Duration,
    entries: Vec<Entry>,
}

impl Reading {
    #[must_use]
    pub fn new(elapsed: Duration, countup: &Countup) -> Self {
        let entries = Unit::ALL
            .iter()
            .map(|&unit| {
                let amount = elapsed.amount(unit);

                Entry {
                    unit,
                    amount,
                    text: pad(amount, countup.zero_pad),
                    word: word(&countup.words, unit, amount, countup.plural),
                }
            })
            .collect();

        Self { elapsed, entries }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The entries from months down to seconds.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The inline presentation. Amounts are never padded here.
    #[must_use]
    pub fn sentence(&self) -> String {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|entry| format!("{} {}", entry.amount, entry.word))
            .collect();

        format!("{}.", parts.join(", "))
    }
}

/// The word for `amount` units. It is singular exactly when the amount is
/// one.
#[must_use]
pub fn word(words: &Words, unit: Unit, amount: u64, plural: bool) -> String {
    let singular = words.for_unit(unit);

    if plural && amount != 1 {
        format!("{singular}{}", words.plural_letter)
    } else {
        singular.to_owned()
    }
}

/// Left-pads single digit amounts with one `0` when `zero_pad` is enabled.
#[must_use]
pub fn pad(amount: u64, zero_pad: bool) -> String {
    if zero_pad && amount < 10 {
        format!("0{amount}")
    } else {
        amount.to_string()
    }
}
