//! Report Exporters
//!
//! Render the badness report either as the classic two-column table or as a
//! JSON array for downstream tooling.

use std::io::Write;

use crate::domain::report::ReportEntry;
use crate::ports::ReportExporter;

/// Plain-text table: `Badness  Function` header, zero-padded counts.
pub struct TableExporter;

impl ReportExporter for TableExporter {
    fn export(&self, entries: &[ReportEntry], out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "Badness  Function")?;
        for entry in entries {
            writeln!(out, "    {:03}  {}", entry.badness, entry.label)?;
        }
        Ok(())
    }
}

/// JSON array of `{label, badness}` objects.
pub struct JsonExporter;

impl ReportExporter for JsonExporter {
    fn export(&self, entries: &[ReportEntry], out: &mut dyn Write) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, entries)?;
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<ReportEntry> {
        vec![
            ReportEntry {
                label: "app::top".to_string(),
                badness: 12,
            },
            ReportEntry {
                label: "app::leaf".to_string(),
                badness: 1,
            },
        ]
    }

    #[test]
    fn test_table_format() {
        let mut out = Vec::new();
        TableExporter.export(&sample_entries(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Badness  Function\n    012  app::top\n    001  app::leaf\n"
        );
    }

    #[test]
    fn test_table_header_on_empty_report() {
        let mut out = Vec::new();
        TableExporter.export(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Badness  Function\n");
    }

    #[test]
    fn test_json_round_trips() {
        let mut out = Vec::new();
        JsonExporter.export(&sample_entries(), &mut out).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0]["label"], "app::top");
        assert_eq!(parsed[0]["badness"], 12);
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
    }
}
