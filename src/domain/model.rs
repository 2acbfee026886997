use std::collections::HashMap;
use std::fmt;

pub const LCSC_PART_NUMBER: &str = "LCSC Part Number";
pub const DIGIKEY_PART_NUMBER: &str = "DigiKey Part Number";
pub const MANUFACTURER_PART_NUMBER: &str = "Manufacturer Part Number";

/// Column order of an LCSC order export. Display order is the same.
pub const LCSC_FIELDS: [&str; 11] = [
    LCSC_PART_NUMBER,
    MANUFACTURER_PART_NUMBER,
    "Manufacturer",
    "Customer NO.",
    "Package",
    "Description",
    "RoHS",
    "Order Qty.",
    "Min/Mult Order Qty.",
    "Unit Price($)",
    "Order Price($)",
];

/// Labels for DigiKey columns 1..=8; column 0 is not used.
pub const DIGIKEY_FIELDS: [&str; 8] = [
    DIGIKEY_PART_NUMBER,
    MANUFACTURER_PART_NUMBER,
    "Description",
    "Customer Reference",
    "Quantity",
    "Backorder",
    "Unit Price($)",
    "Extended Price($)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Lcsc,
    DigiKey,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Lcsc => "LCSC",
            Source::DigiKey => "DigiKey",
        }
    }

    /// Labels shown for a record of this source, in display order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Source::Lcsc => &LCSC_FIELDS,
            Source::DigiKey => &DIGIKEY_FIELDS,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One purchase-order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub source: Source,
    pub data: HashMap<String, String>,
}

impl Record {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            data: HashMap::new(),
        }
    }

    pub fn with_field(mut self, label: &str, value: impl Into<String>) -> Self {
        self.data.insert(label.to_string(), value.into());
        self
    }

    /// `None` when the label is absent, which is different from an empty value.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.data.get(label).map(String::as_str)
    }

    /// Present fields in the source's display order.
    pub fn display_fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.source
            .fields()
            .iter()
            .filter_map(move |label| self.get(label).map(|value| (*label, value)))
    }
}
