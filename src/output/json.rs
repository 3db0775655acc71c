use super::OutputHandler;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Collects the export and writes it as one pretty-printed JSON array on
/// close. The file is created up front so a bad path fails before any
/// extraction work.
pub struct JsonOutput {
    writer: BufWriter<File>,
    records: Vec<Value>,
}

impl JsonOutput {
    pub fn new(path: PathBuf) -> Result<Self> {
        let file = File::create(&path)?;
        log::debug!("Exporting to {}", path.display());
        Ok(Self {
            writer: BufWriter::new(file),
            records: Vec::new(),
        })
    }
}

#[async_trait]
impl OutputHandler for JsonOutput {
    async fn write(&mut self, record: Value) -> Result<()> {
        self.records.push(record);
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        self.writer.flush()?;
        log::info!("Wrote {} record(s)", self.records.len());
        Ok(())
    }
}
