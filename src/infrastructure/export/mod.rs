mod file_exporter;
mod stdout_exporter;

pub use file_exporter::FileQueryExporter;
pub use stdout_exporter::StdoutExporter;
