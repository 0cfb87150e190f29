use std::borrow::Borrow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::errors::GenerationError;
use crate::model::{PurchaseRecord, UserRecord};

/// Rows and bytes written for one exported table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSummary {
    pub rows: u64,
    pub bytes: u64,
}

/// Write users as CSV with a header row.
pub fn write_users_csv(path: &Path, users: &[UserRecord]) -> Result<CsvSummary, GenerationError> {
    write_records::<_, UserRecord>(path, users)
}

/// Write purchases as CSV, streaming directly from any record source.
pub fn write_purchases_csv<I>(path: &Path, purchases: I) -> Result<CsvSummary, GenerationError>
where
    I: IntoIterator,
    I::Item: Borrow<PurchaseRecord>,
{
    write_records::<_, PurchaseRecord>(path, purchases)
}

fn write_records<I, T>(path: &Path, records: I) -> Result<CsvSummary, GenerationError>
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: Serialize,
{
    let writer = BufWriter::new(File::create(path)?);
    let mut writer = csv::WriterBuilder::new().from_writer(CountingWriter::new(writer));

    let mut rows = 0_u64;
    for record in records {
        writer.serialize(Borrow::<T>::borrow(&record))?;
        rows += 1;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(CsvSummary {
        rows,
        bytes: counting.bytes_written(),
    })
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
