use crate::domain::model::{Record, Source, DIGIKEY_FIELDS, LCSC_FIELDS};
use crate::utils::error::{LookupError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Rows shorter than this are skipped in a DigiKey export.
pub const DIGIKEY_MIN_COLUMNS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderFormat {
    Lcsc,
    DigiKey,
}

#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub format: OrderFormat,
    pub records: Vec<Record>,
}

fn order_reader<R: Read>(reader: R) -> Result<csv::Reader<R>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    // The header is skipped, never bound to field names, but it must exist.
    if csv_reader.byte_headers()?.is_empty() {
        return Err(LookupError::MissingHeader);
    }

    Ok(csv_reader)
}

/// Parses an LCSC export. Any row with fewer than 11 columns fails the
/// whole file.
pub fn parse_lcsc<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut csv_reader = order_reader(reader)?;
    let mut records = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        if row.len() < LCSC_FIELDS.len() {
            return Err(LookupError::ShortRow {
                line: row.position().map(|p| p.line()).unwrap_or_default(),
                expected: LCSC_FIELDS.len(),
                found: row.len(),
            });
        }

        let mut record = Record::new(Source::Lcsc);
        for (label, value) in LCSC_FIELDS.iter().zip(row.iter()) {
            record = record.with_field(label, value);
        }
        records.push(record);
    }

    Ok(records)
}

/// Parses a DigiKey export. Column 0 is ignored and short rows are skipped.
/// A row with exactly eight columns has no `Extended Price($)`.
pub fn parse_digikey<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut csv_reader = order_reader(reader)?;
    let mut records = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        if row.len() < DIGIKEY_MIN_COLUMNS {
            tracing::debug!(
                "Skipping DigiKey row with {} columns at line {}",
                row.len(),
                row.position().map(|p| p.line()).unwrap_or_default()
            );
            continue;
        }

        let mut record = Record::new(Source::DigiKey);
        for (label, value) in DIGIKEY_FIELDS.iter().zip(row.iter().skip(1)) {
            record = record.with_field(label, value);
        }
        records.push(record);
    }

    Ok(records)
}

/// Tries LCSC first and falls back to DigiKey on any failure. The first
/// format that parses wins, so the LCSC attempt's partial output is dropped.
pub fn parse_order_file(path: &Path) -> Result<ParsedFile> {
    let lcsc_error = match File::open(path)
        .map_err(LookupError::from)
        .and_then(parse_lcsc)
    {
        Ok(records) => {
            return Ok(ParsedFile {
                format: OrderFormat::Lcsc,
                records,
            })
        }
        Err(e) => e,
    };

    tracing::debug!(
        "{} is not an LCSC export ({}), retrying as DigiKey",
        path.display(),
        lcsc_error
    );

    match File::open(path)
        .map_err(LookupError::from)
        .and_then(parse_digikey)
    {
        Ok(records) => Ok(ParsedFile {
            format: OrderFormat::DigiKey,
            records,
        }),
        Err(e) => Err(LookupError::UnparseableFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DIGIKEY_PART_NUMBER, LCSC_PART_NUMBER, MANUFACTURER_PART_NUMBER};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const LCSC_HEADER: &str = "LCSC Part Number,Manufacture Part Number,Manufacturer,Customer NO.,Package,Description,RoHS,Order Qty.,Min\\Mult Order Qty.,Unit Price($),Order Price($)\n";
    const DIGIKEY_HEADER: &str = "Index,DigiKey Part #,Manufacturer Part Number,Description,Customer Reference,Quantity,Backorder,Unit Price,Extended Price\n";

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_lcsc_row_maps_every_column() {
        let csv = format!(
            "{}C25804,0603WAF1002T5E,UNI-ROYAL,,0603,10kΩ ±1% 100mW,YES,100,100\\100,0.0011,0.11\n",
            LCSC_HEADER
        );

        let records = parse_lcsc(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.source, Source::Lcsc);
        let values: Vec<Option<&str>> = LCSC_FIELDS.iter().map(|l| record.get(l)).collect();
        assert_eq!(
            values,
            vec![
                Some("C25804"),
                Some("0603WAF1002T5E"),
                Some("UNI-ROYAL"),
                Some(""),
                Some("0603"),
                Some("10kΩ ±1% 100mW"),
                Some("YES"),
                Some("100"),
                Some("100\\100"),
                Some("0.0011"),
                Some("0.11"),
            ]
        );
    }

    #[test]
    fn test_lcsc_header_is_never_a_record() {
        let records = parse_lcsc(LCSC_HEADER.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_lcsc_short_row_fails_whole_file() {
        let csv = format!(
            "{}C25804,0603WAF1002T5E,UNI-ROYAL,,0603,desc,YES,100,100,0.0011,0.11\nC1,short\n",
            LCSC_HEADER
        );

        let err = parse_lcsc(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LookupError::ShortRow {
                line: 3,
                expected: 11,
                found: 2
            }
        ));
    }

    #[test]
    fn test_missing_header_fails_both_parsers() {
        assert!(matches!(
            parse_lcsc("".as_bytes()),
            Err(LookupError::MissingHeader)
        ));
        assert!(matches!(
            parse_digikey("".as_bytes()),
            Err(LookupError::MissingHeader)
        ));
    }

    #[test]
    fn test_digikey_skips_short_rows_and_column_zero() {
        let csv = format!(
            "{}1,296-1600-5-ND,SN74HC595N,IC SHIFT REG 8BIT,BOARD-A,10,0,0.74,7.40\n\
             Subtotal,7.40\n\
             2,497-6063-ND,STM32F103C8T6,IC MCU 32BIT 64KB FLASH,,2,0,8.50\n",
            DIGIKEY_HEADER
        );

        let records = parse_digikey(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        let first = &records[0];
        assert_eq!(first.source, Source::DigiKey);
        assert_eq!(first.get(DIGIKEY_PART_NUMBER), Some("296-1600-5-ND"));
        assert_eq!(first.get(MANUFACTURER_PART_NUMBER), Some("SN74HC595N"));
        assert_eq!(first.get("Customer Reference"), Some("BOARD-A"));
        assert_eq!(first.get("Extended Price($)"), Some("7.40"));
        assert_eq!(first.get("Index"), None);

        let second = &records[1];
        assert_eq!(second.get(DIGIKEY_PART_NUMBER), Some("497-6063-ND"));
        assert_eq!(second.get("Unit Price($)"), Some("8.50"));
        assert_eq!(second.get("Extended Price($)"), None);
    }

    #[test]
    fn test_parse_order_file_detects_lcsc() {
        let file = write_temp(&format!(
            "{}C8734,STM32F103C8T6,ST,,LQFP-48,MCU,YES,5,1\\1,2.10,10.50\n",
            LCSC_HEADER
        ));

        let parsed = parse_order_file(file.path()).unwrap();

        assert_eq!(parsed.format, OrderFormat::Lcsc);
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].get(LCSC_PART_NUMBER), Some("C8734"));
    }

    #[test]
    fn test_parse_order_file_falls_back_to_digikey() {
        let file = write_temp(&format!(
            "{}1,296-1600-5-ND,SN74HC595N,IC SHIFT REG 8BIT,,10,0,0.74,7.40\n",
            DIGIKEY_HEADER
        ));

        let parsed = parse_order_file(file.path()).unwrap();

        assert_eq!(parsed.format, OrderFormat::DigiKey);
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].source, Source::DigiKey);
    }

    #[test]
    fn test_wide_digikey_rows_are_read_as_lcsc() {
        // First format that parses wins, even when the guess is wrong.
        let file = write_temp(&format!(
            "{}1,296-1600-5-ND,SN74HC595N,IC,,10,0,0.74,7.40,extra,extra\n",
            DIGIKEY_HEADER
        ));

        let parsed = parse_order_file(file.path()).unwrap();

        assert_eq!(parsed.format, OrderFormat::Lcsc);
        assert_eq!(parsed.records[0].get(LCSC_PART_NUMBER), Some("1"));
    }

    #[test]
    fn test_parse_order_file_rejects_empty_and_missing_files() {
        let empty = write_temp("");
        assert!(matches!(
            parse_order_file(empty.path()),
            Err(LookupError::UnparseableFile { .. })
        ));

        let missing = empty.path().with_extension("missing.csv");
        assert!(matches!(
            parse_order_file(&missing),
            Err(LookupError::UnparseableFile { .. })
        ));
    }
}
