//! Terminal output
//!
//! Plain text only: status lines (`OK`, `FAILED`), warnings and
//! space-padded tables.

use std::io::Write;

use crate::error::CliError;

/// Writes command output to `W`.
#[derive(Debug)]
pub struct Ui<W> {
    out: W,
}

impl<W: Write> Ui<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn say(&mut self, message: impl AsRef<str>) -> Result<(), CliError> {
        writeln!(self.out, "{}", message.as_ref())?;
        Ok(())
    }

    pub fn ok(&mut self) -> Result<(), CliError> {
        self.say("OK")?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn warn(&mut self, message: impl AsRef<str>) -> Result<(), CliError> {
        self.say(message)
    }

    /// `FAILED` followed by the reason.
    pub fn failed(&mut self, message: impl AsRef<str>) -> Result<(), CliError> {
        self.say("FAILED")?;
        self.say(message)
    }

    /// Left-aligned columns, each as wide as its longest cell.
    pub fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) -> Result<(), CliError> {
        let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();
        for row in rows {
            for (index, cell) in row.iter().enumerate() {
                let width = cell.chars().count();
                match widths.get_mut(index) {
                    Some(current) => *current = (*current).max(width),
                    None => widths.push(width),
                }
            }
        }

        let header: Vec<String> = headers.iter().map(|header| (*header).to_string()).collect();
        self.table_row(&header, &widths)?;
        for row in rows {
            self.table_row(row, &widths)?;
        }
        Ok(())
    }

    fn table_row(&mut self, cells: &[String], widths: &[usize]) -> Result<(), CliError> {
        let mut line = String::new();
        for (index, cell) in cells.iter().enumerate() {
            if index > 0 {
                line.push_str("   ");
            }
            let width = widths.get(index).copied().unwrap_or_default();
            line.push_str(&format!("{cell:<width$}"));
        }
        self.say(line.trim_end())
    }
}

/// Megabytes as shown in app listings: whole gigabytes as `G`, else `M`.
pub fn format_megabytes(megabytes: u64) -> String {
    if megabytes >= 1024 && megabytes % 1024 == 0 {
        format!("{}G", megabytes / 1024)
    } else {
        format!("{megabytes}M")
    }
}

const KILOBYTE: u64 = 1024;
const MEGABYTE: u64 = 1024 * KILOBYTE;
const GIGABYTE: u64 = 1024 * MEGABYTE;

/// Byte counts with one decimal in the largest fitting unit, `.0` dropped.
pub fn format_bytes(bytes: u64) -> String {
    let (unit, suffix) = if bytes >= GIGABYTE {
        (GIGABYTE, "G")
    } else if bytes >= MEGABYTE {
        (MEGABYTE, "M")
    } else if bytes >= KILOBYTE {
        (KILOBYTE, "K")
    } else {
        return format!("{bytes}B");
    };

    #[allow(clippy::cast_precision_loss)]
    let value = format!("{:.1}", bytes as f64 / unit as f64);
    format!("{}{suffix}", value.trim_end_matches(".0"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(ui: Ui<Vec<u8>>) -> String {
        String::from_utf8(ui.into_inner()).unwrap()
    }

    #[test]
    fn failed_prints_reason_on_next_line() {
        let mut ui = Ui::new(Vec::new());
        ui.failed("App web not found").unwrap();
        assert_eq!(output(ui), "FAILED\nApp web not found\n");
    }

    #[test]
    fn table_pads_columns() {
        let mut ui = Ui::new(Vec::new());
        ui.table(
            &["name", "state"],
            &[
                vec!["web".into(), "started".into()],
                vec!["worker-long".into(), "stopped".into()],
            ],
        )
        .unwrap();

        assert_eq!(
            output(ui),
            "name          state\nweb           started\nworker-long   stopped\n"
        );
    }

    #[test]
    fn megabytes_round_to_gigabytes_when_exact() {
        assert_eq!(format_megabytes(256), "256M");
        assert_eq!(format_megabytes(1024), "1G");
        assert_eq!(format_megabytes(1536), "1536M");
        assert_eq!(format_megabytes(0), "0M");
    }

    #[test]
    fn bytes_use_largest_unit() {
        assert_eq!(format_bytes(512), "512B");
        assert_eq!(format_bytes(2048), "2K");
        assert_eq!(format_bytes(64 * MEGABYTE), "64M");
        assert_eq!(format_bytes(3 * GIGABYTE / 2), "1.5G");
    }
}
