//! Table loading for simpler-eda
//!
//! The plot helpers only take in-memory DataFrames. This module is the thin
//! layer the CLI uses to get one: a file in one of the formats polars reads,
//! or a built-in sample dataset.
//!
//! # Example
//!
//! ```rust,ignore
//! use simpler_eda::reader::{FileReader, Reader};
//!
//! let df = FileReader::new("cars.csv")?.read()?;
//! ```

use std::path::{Path, PathBuf};

use crate::{DataFrame, EdaError, Result};

pub mod data;

/// Source of a single table
pub trait Reader {
    /// Load the table
    ///
    /// # Errors
    ///
    /// Returns `EdaError::ReaderError` if the source cannot be opened or parsed.
    fn read(&self) -> Result<DataFrame>;
}

/// On-disk table formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Parquet,
    /// Arrow IPC (`.arrow`, `.ipc`, `.feather`)
    Ipc,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(TableFormat::Csv),
            "parquet" => Ok(TableFormat::Parquet),
            "arrow" | "ipc" | "feather" => Ok(TableFormat::Ipc),
            _ => Err(EdaError::ReaderError(format!(
                "Unsupported file extension for '{}' (expected csv, parquet, arrow, ipc or feather)",
                path.display()
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TableFormat::Csv => "csv",
            TableFormat::Parquet => "parquet",
            TableFormat::Ipc => "ipc",
        }
    }
}

/// Reads a table from a file
#[derive(Debug, Clone)]
pub struct FileReader {
    path: PathBuf,
    format: TableFormat,
}

impl FileReader {
    /// Create a reader, inferring the format from the file extension
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = TableFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> TableFormat {
        self.format
    }
}

impl Reader for FileReader {
    fn read(&self) -> Result<DataFrame> {
        tracing::debug!(path = %self.path.display(), format = self.format.as_str(), "Reading table");
        let df = match self.format {
            TableFormat::Csv => read_csv(&self.path),
            TableFormat::Parquet => read_parquet(&self.path),
            TableFormat::Ipc => read_ipc(&self.path),
        }?;
        tracing::debug!(rows = df.height(), columns = df.width(), "Table loaded");
        Ok(df)
    }
}

/// One of the datasets in [`data`]
#[derive(Debug, Clone)]
pub struct BuiltinReader {
    name: String,
}

impl BuiltinReader {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Reader for BuiltinReader {
    fn read(&self) -> Result<DataFrame> {
        data::builtin(&self.name).unwrap_or_else(|| {
            Err(EdaError::ReaderError(format!(
                "Unknown builtin dataset '{}' (available: {})",
                self.name,
                data::BUILTIN_DATASETS.join(", ")
            )))
        })
    }
}

fn reader_error(path: &Path, err: impl std::fmt::Display) -> EdaError {
    EdaError::ReaderError(format!("Failed to read '{}': {}", path.display(), err))
}

#[cfg(feature = "csv")]
fn read_csv(path: &Path) -> Result<DataFrame> {
    use polars::prelude::*;

    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| reader_error(path, e))
}

#[cfg(feature = "parquet")]
fn read_parquet(path: &Path) -> Result<DataFrame> {
    use polars::prelude::*;

    let file = std::fs::File::open(path).map_err(|e| reader_error(path, e))?;
    ParquetReader::new(file)
        .finish()
        .map_err(|e| reader_error(path, e))
}

#[cfg(feature = "ipc")]
fn read_ipc(path: &Path) -> Result<DataFrame> {
    use polars::prelude::*;

    let file = std::fs::File::open(path).map_err(|e| reader_error(path, e))?;
    IpcReader::new(file)
        .finish()
        .map_err(|e| reader_error(path, e))
}

#[cfg(not(feature = "csv"))]
fn read_csv(path: &Path) -> Result<DataFrame> {
    Err(reader_error(path, "CSV support not compiled in (enable the 'csv' feature)"))
}

#[cfg(not(feature = "parquet"))]
fn read_parquet(path: &Path) -> Result<DataFrame> {
    Err(reader_error(path, "Parquet support not compiled in (enable the 'parquet' feature)"))
}

#[cfg(not(feature = "ipc"))]
fn read_ipc(path: &Path) -> Result<DataFrame> {
    Err(reader_error(path, "Arrow IPC support not compiled in (enable the 'ipc' feature)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(TableFormat::from_path(Path::new("a.csv")).unwrap(), TableFormat::Csv);
        assert_eq!(TableFormat::from_path(Path::new("a.CSV")).unwrap(), TableFormat::Csv);
        assert_eq!(
            TableFormat::from_path(Path::new("dir/a.parquet")).unwrap(),
            TableFormat::Parquet
        );
        assert_eq!(TableFormat::from_path(Path::new("a.feather")).unwrap(), TableFormat::Ipc);
        assert!(TableFormat::from_path(Path::new("a.xlsx")).is_err());
        assert!(TableFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_builtin_reader() {
        let df = BuiltinReader::new("cars").read().unwrap();
        assert_eq!(df.height(), 24);

        let err = BuiltinReader::new("iris").read().unwrap_err();
        assert!(err.to_string().contains("Unknown builtin dataset 'iris'"));
    }

    #[cfg(feature = "csv")]
    #[test]
    fn test_read_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.csv");
        std::fs::write(&path, "Horsepower,Origin\n130,USA\n95,Japan\n").unwrap();

        let df = FileReader::new(&path).unwrap().read().unwrap();
        assert_eq!(df.shape(), (2, 2));
        assert_eq!(
            df.column("Origin").unwrap().dtype(),
            &polars::prelude::DataType::String
        );
        assert!(crate::chart::is_numeric_dtype(
            df.column("Horsepower").unwrap().dtype()
        ));
    }

    #[cfg(feature = "parquet")]
    #[test]
    fn test_read_parquet() {
        use polars::prelude::*;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cars.parquet");
        let mut df = data::cars().unwrap();
        let mut file = std::fs::File::create(&path).unwrap();
        ParquetWriter::new(&mut file).finish(&mut df).unwrap();

        let read = FileReader::new(&path).unwrap().read().unwrap();
        assert_eq!(read.shape(), df.shape());
    }

    #[test]
    fn test_missing_file() {
        let err = FileReader::new("/nonexistent/cars.csv")
            .unwrap()
            .read()
            .unwrap_err();
        assert!(matches!(err, EdaError::ReaderError(_)));
    }
}
