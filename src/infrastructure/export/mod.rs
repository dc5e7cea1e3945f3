mod archive;
mod csv;
mod partition;

pub use archive::{export_archive, ExportError};
pub use csv::{build_csv, CSV_HEADER};
pub use partition::{partition_assets, ExportCategory};
