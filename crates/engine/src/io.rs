// crates/engine/src/io.rs

use std::fs::File;
use std::io::{self, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

use checksums::Crc64;
use memmap2::Mmap;

use crate::EngineError;
use crate::block::{BlockLayout, TraversalOrder};

pub fn io_context(path: &Path, err: io::Error) -> EngineError {
    EngineError::Io(io::Error::new(
        err.kind(),
        format!("{}: {}", path.display(), err),
    ))
}

/// A file's bytes, addressable by block index.
pub trait BlockSource {
    /// Folds the bytes of block `index` into `crc`.
    fn feed_block(&mut self, layout: &BlockLayout, index: u64, crc: &mut Crc64) -> io::Result<()>;

    /// Folds every block into `crc` in the order dictated by `order`.
    fn feed_blocks(
        &mut self,
        layout: &BlockLayout,
        order: TraversalOrder,
        crc: &mut Crc64,
    ) -> io::Result<()> {
        feed_in_order(self, layout, order, crc)
    }
}

fn feed_in_order<S: BlockSource + ?Sized>(
    source: &mut S,
    layout: &BlockLayout,
    order: TraversalOrder,
    crc: &mut Crc64,
) -> io::Result<()> {
    for index in layout.traverse(order) {
        source.feed_block(layout, index, crc)?;
    }
    Ok(())
}

/// A single `read`, reissued only when interrupted by a signal.
pub fn read_once<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match reader.read(buf) {
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            res => return res,
        }
    }
}

/// Explicit `read` calls on an open file.
pub struct DirectRead {
    file: File,
    buf: Vec<u8>,
}

impl DirectRead {
    /// The buffer holds one block, capped at the file length; no read can
    /// return more than the file holds.
    pub fn new(file: File, block_size: usize, file_len: u64) -> Self {
        let cap = usize::try_from(file_len.max(1)).unwrap_or(usize::MAX);
        Self {
            file,
            buf: vec![0u8; block_size.min(cap)],
        }
    }

    pub fn buf_len(&self) -> usize {
        self.buf.len()
    }
}

impl BlockSource for DirectRead {
    fn feed_block(&mut self, layout: &BlockLayout, index: u64, crc: &mut Crc64) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(layout.offset(index)))?;
        // A single read; short counts (including 0) are folded as returned.
        let n = read_once(&mut self.file, &mut self.buf)?;
        tracing::trace!(target: "debug::io", index, bytes = n, "positioned read");
        crc.update(&self.buf[..n]);
        Ok(())
    }

    fn feed_blocks(
        &mut self,
        layout: &BlockLayout,
        order: TraversalOrder,
        crc: &mut Crc64,
    ) -> io::Result<()> {
        if order != TraversalOrder::Sequential {
            return feed_in_order(self, layout, order, crc);
        }
        // Sequential reads follow the stream position; the planner is not consulted.
        loop {
            let n = read_once(&mut self.file, &mut self.buf)?;
            if n == 0 {
                return Ok(());
            }
            tracing::trace!(target: "debug::io", bytes = n, "stream read");
            crc.update(&self.buf[..n]);
        }
    }
}

/// A whole-file read-only mapping sliced by block range.
pub struct Mapped {
    map: Mmap,
}

impl Mapped {
    pub fn map(file: &File) -> io::Result<Self> {
        // SAFETY: the mapping is read-only and private to this process. The
        // benchmark does not defend against the file being truncated by
        // another process while it is mapped.
        let map = unsafe { Mmap::map(file) }?;
        tracing::debug!(target: "debug::map", len = map.len(), "mapped file");
        Ok(Self { map })
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl BlockSource for Mapped {
    fn feed_block(&mut self, layout: &BlockLayout, index: u64, crc: &mut Crc64) -> io::Result<()> {
        let range = layout.range(index);
        let start = usize::try_from(range.start).unwrap_or(usize::MAX);
        let end = usize::try_from(range.end).unwrap_or(usize::MAX);
        let block = self.map.get(start..end).unwrap_or_default();
        tracing::trace!(target: "debug::io", index, bytes = block.len(), "mapped slice");
        crc.update(block);
        Ok(())
    }
}
