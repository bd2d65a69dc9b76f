//! Calendar units a countup is broken down into.
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A calendar unit, from the coarsest to the finest.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash, Display)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[display("months")]
    Months,
    #[display("days")]
    Days,
    #[display("hours")]
    Hours,
    #[display("minutes")]
    Minutes,
    #[display("seconds")]
    Seconds,
}

impl Unit {
    /// All the units in decomposition order.
    pub const ALL: [Unit; 5] = [Unit::Months, Unit::Days, Unit::Hours, Unit::Minutes, Unit::Seconds];

    /// The style hook given to the section that presents this unit.
    #[must_use]
    pub fn section_class(self) -> String {
        format!("simply-{self}-section")
    }
}
