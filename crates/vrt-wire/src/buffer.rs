//! # Packet Buffer
//!
//! The byte container under every packet: either an owned mutable buffer or
//! a shared read-only view. All typed access is bounds-checked and
//! big-endian (network order); nothing here knows about packet semantics.

use bytes::{Bytes, BytesMut};

use crate::error::WireError;

/// An owned-or-shared byte buffer with offset-based typed access.
///
/// Writes against a shared buffer fail with [`WireError::ReadOnly`] instead
/// of mutating; reads work against either storage.
#[derive(Debug, Clone)]
pub struct PacketBuf {
    storage: Storage,
}

#[derive(Debug, Clone)]
enum Storage {
    Owned(BytesMut),
    Shared(Bytes),
}

impl PacketBuf {
    /// Copy a slice into a new buffer, owned or read-only.
    pub fn from_slice(data: &[u8], read_only: bool) -> Self {
        let storage = if read_only {
            Storage::Shared(Bytes::copy_from_slice(data))
        } else {
            Storage::Owned(BytesMut::from(data))
        };
        PacketBuf { storage }
    }

    /// Take ownership of a mutable buffer.
    pub fn owned(data: BytesMut) -> Self {
        PacketBuf {
            storage: Storage::Owned(data),
        }
    }

    /// Wrap shared bytes as a read-only buffer without copying.
    pub fn read_only(data: Bytes) -> Self {
        PacketBuf {
            storage: Storage::Shared(data),
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self.storage, Storage::Shared(_))
    }

    pub fn as_slice(&self) -> &[u8] {
        match &self.storage {
            Storage::Owned(b) => b,
            Storage::Shared(b) => b,
        }
    }

    /// A shareable snapshot of the current contents.
    pub fn snapshot(&self) -> Bytes {
        match &self.storage {
            Storage::Owned(b) => Bytes::copy_from_slice(b),
            Storage::Shared(b) => b.clone(),
        }
    }

    fn check(&self, offset: usize, len: usize) -> Result<(), WireError> {
        let size = self.len();
        match offset.checked_add(len) {
            Some(end) if end <= size => Ok(()),
            _ => Err(WireError::OutOfBounds { offset, len, size }),
        }
    }

    fn writable(&mut self) -> Result<&mut BytesMut, WireError> {
        match &mut self.storage {
            Storage::Owned(b) => Ok(b),
            Storage::Shared(_) => Err(WireError::ReadOnly),
        }
    }

    /// Borrow `len` bytes starting at `offset`.
    pub fn region(&self, offset: usize, len: usize) -> Result<&[u8], WireError> {
        self.check(offset, len)?;
        Ok(&self.as_slice()[offset..offset + len])
    }

    /// Mutably borrow `len` bytes starting at `offset`.
    pub fn region_mut(&mut self, offset: usize, len: usize) -> Result<&mut [u8], WireError> {
        self.check(offset, len)?;
        let buf = self.writable()?;
        Ok(&mut buf[offset..offset + len])
    }

    /// Grow or shrink the buffer; growth is zero-filled.
    pub fn resize(&mut self, new_len: usize) -> Result<(), WireError> {
        self.writable()?.resize(new_len, 0);
        Ok(())
    }

    // ─── Typed reads ─────────────────────────────────────────────────────

    pub fn get_u8(&self, offset: usize) -> Result<u8, WireError> {
        Ok(self.region(offset, 1)?[0])
    }

    pub fn get_u16(&self, offset: usize) -> Result<u16, WireError> {
        let b = self.region(offset, 2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn get_u32(&self, offset: usize) -> Result<u32, WireError> {
        let b = self.region(offset, 4)?;
        Ok(u32::from_be_bytes(b.try_into().expect("4-byte region")))
    }

    pub fn get_u64(&self, offset: usize) -> Result<u64, WireError> {
        let b = self.region(offset, 8)?;
        Ok(u64::from_be_bytes(b.try_into().expect("8-byte region")))
    }

    pub fn get_i32(&self, offset: usize) -> Result<i32, WireError> {
        self.get_u32(offset).map(|v| v as i32)
    }

    pub fn get_i64(&self, offset: usize) -> Result<i64, WireError> {
        self.get_u64(offset).map(|v| v as i64)
    }

    // ─── Typed writes ────────────────────────────────────────────────────

    pub fn put_u8(&mut self, offset: usize, val: u8) -> Result<(), WireError> {
        self.region_mut(offset, 1)?[0] = val;
        Ok(())
    }

    pub fn put_u16(&mut self, offset: usize, val: u16) -> Result<(), WireError> {
        self.region_mut(offset, 2)?.copy_from_slice(&val.to_be_bytes());
        Ok(())
    }

    pub fn put_u32(&mut self, offset: usize, val: u32) -> Result<(), WireError> {
        self.region_mut(offset, 4)?.copy_from_slice(&val.to_be_bytes());
        Ok(())
    }

    pub fn put_u64(&mut self, offset: usize, val: u64) -> Result<(), WireError> {
        self.region_mut(offset, 8)?.copy_from_slice(&val.to_be_bytes());
        Ok(())
    }

    pub fn put_i32(&mut self, offset: usize, val: i32) -> Result<(), WireError> {
        self.put_u32(offset, val as u32)
    }

    pub fn put_i64(&mut self, offset: usize, val: i64) -> Result<(), WireError> {
        self.put_u64(offset, val as u64)
    }
}
