// Tue Jan 13 2026 - Alex

use crate::catalog::{Accessor, Value};
use crate::codec::{ensure_len, ensure_present, require, Codec, Record, Strategy};
use crate::error::Result;
use crate::layout::Layout;
use std::fmt;
use std::sync::Arc;

type ReadClosure = Box<dyn Fn(&[u8]) -> Result<Value> + Send + Sync>;
type WriteClosure = Box<dyn Fn(&mut [u8], Value) -> Result<()> + Send + Sync>;

struct BoundField {
    name: Arc<str>,
    read: ReadClosure,
    write: WriteClosure,
}

/// Closure-table codec: each field's accessor is picked from the catalog
/// once and bound to its offset. No code is synthesized, so any field name
/// is accepted.
pub struct ClosureCodec {
    layout: Layout,
    table: Vec<BoundField>,
}

impl ClosureCodec {
    pub fn new(layout: &Layout) -> Self {
        let byte_order = layout.byte_order();
        let table = layout
            .fields()
            .iter()
            .map(|field| {
                let accessor = Accessor::for_scalar(field.scalar(), byte_order);
                let offset = field.offset() as usize;
                BoundField {
                    name: Arc::clone(field.shared_name()),
                    read: Box::new(move |buf: &[u8]| accessor.read(buf, offset)),
                    write: Box::new(move |buf: &mut [u8], value: Value| accessor.write(buf, offset, value)),
                }
            })
            .collect();

        Self {
            layout: layout.clone(),
            table,
        }
    }
}

impl Codec for ClosureCodec {
    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn strategy(&self) -> Strategy {
        Strategy::ClosureTable
    }

    fn decode(&self, source: &[u8]) -> Result<Record> {
        ensure_len(self.layout.size(), source.len())?;

        let mut record = Record::with_capacity(self.table.len());
        for field in &self.table {
            record.insert_shared(&field.name, (field.read)(source)?);
        }
        Ok(record)
    }

    fn encode_into(&self, record: &Record, target: &mut [u8]) -> Result<()> {
        ensure_len(self.layout.size(), target.len())?;
        ensure_present(record, self.table.iter().map(|field| field.name.as_ref()))?;

        for field in &self.table {
            (field.write)(target, require(record, &field.name)?)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ClosureCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosureCodec")
            .field("layout", &self.layout.name())
            .field("fields", &self.table.len())
            .field("size", &self.layout.size())
            .finish()
    }
}
