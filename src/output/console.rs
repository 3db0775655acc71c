use super::OutputHandler;
use crate::error::Result;
use async_trait::async_trait;
use indicatif::MultiProgress;
use serde_json::Value;
use std::sync::Arc;

/// Pretty-prints each record to stdout, suspending the `MultiProgress`
/// bars while writing so lines don't tear them.
pub struct ConsoleOutput {
    multi: Option<Arc<MultiProgress>>,
}

impl ConsoleOutput {
    pub fn new(multi: Option<Arc<MultiProgress>>) -> Self {
        Self { multi }
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl OutputHandler for ConsoleOutput {
    async fn write(&mut self, record: Value) -> Result<()> {
        let output = serde_json::to_string_pretty(&record)?;

        match &self.multi {
            Some(multi) => multi.suspend(|| println!("{}", output)),
            None => println!("{}", output),
        }
        Ok(())
    }
}
