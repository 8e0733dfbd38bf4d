use std::fmt::Display;
use std::io::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Result;
use crate::record::CountRecord;

pub const DEFAULT_TOP: usize = 10;

/// Report formats supported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(fmt: &str) -> std::result::Result<Self, Self::Err> {
        match fmt {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            _ => Err("Invalid format"),
        }
    }
}

/// The sample together with its most common values, ready to be written out.
#[derive(Debug, Serialize)]
pub struct Report<'a, T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    sample: Option<&'a [T]>,
    top: Vec<CountRecord<T>>,
}

impl<'a, T: Display + Serialize> Report<'a, T> {
    pub fn new(sample: Option<&'a [T]>, top: Vec<CountRecord<T>>) -> Self {
        Self { sample, top }
    }

    pub fn top(&self) -> &[CountRecord<T>] {
        &self.top
    }

    /// Write the report. Plain output is the sample as `[a, b, c]` on one line
    /// followed by one line per record.
    pub fn write_to<W: Write>(&self, writer: &mut W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Plain => {
                if let Some(sample) = self.sample {
                    let items: Vec<_> = sample.iter().map(|x| x.to_string()).collect();
                    writeln!(writer, "[{}]", items.join(", "))?;
                }
                for record in &self.top {
                    writeln!(writer, "{}", record)?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *writer, self)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }
}
