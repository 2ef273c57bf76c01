use std::io::{self, Write};

use crate::application::ports::{ExportError, QueryExporter};

/// Prints query text to stdout; logs go to stderr so the output can be piped
pub struct StdoutExporter;

impl QueryExporter for StdoutExporter {
    fn export(&self, text: &str) -> Result<(), ExportError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", text)
            .and_then(|_| stdout.flush())
            .map_err(ExportError::Stdout)
    }
}
