//! Macro buffer access.
//!
//! The firmware keeps all macros in one flat buffer, each terminated by a
//! zero byte. A macro's index is the position of its segment in that buffer.

use std::io::{Read, Write};

use tracing::debug;

use crate::client::ViaClient;
use crate::error::ClientError;
use crate::framing::MAX_BUFFER_CHUNK;

const MACRO_TERMINATOR: u8 = 0;

/// Buffer size rounded up to whole chunks.
fn chunked_len(size: usize) -> usize {
    size.div_ceil(MAX_BUFFER_CHUNK) * MAX_BUFFER_CHUNK
}

/// Splits `buffer` after every terminator, keeping the terminators.
///
/// A buffer that is empty or ends in a terminator yields a trailing empty
/// segment, so `"a\0b\0"` splits into `["a\0", "b\0", ""]`.
pub fn split_macros(buffer: &[u8]) -> Vec<&[u8]> {
    let mut segments: Vec<&[u8]> = buffer
        .split_inclusive(|byte| *byte == MACRO_TERMINATOR)
        .collect();
    if buffer.last().is_none_or(|byte| *byte == MACRO_TERMINATOR) {
        segments.push(&[]);
    }
    segments
}

/// Concatenates segments produced by [`split_macros`].
pub fn join_macros<S: AsRef<[u8]>>(segments: &[S]) -> Vec<u8> {
    segments
        .iter()
        .flat_map(|segment| segment.as_ref().iter().copied())
        .collect()
}

/// Drops bytes past `capacity` if they are padding, i.e. the last byte kept
/// and everything after it are zero.
fn fit_to_capacity(data: &[u8], capacity: usize) -> Result<&[u8], ClientError> {
    if data.len() <= capacity {
        return Ok(data);
    }

    if data[capacity.saturating_sub(1)..]
        .iter()
        .all(|byte| *byte == MACRO_TERMINATOR)
    {
        Ok(&data[..capacity])
    } else {
        Err(ClientError::MacroBufferOverflow {
            len: data.len(),
            capacity,
        })
    }
}

impl<T: Read + Write> ViaClient<T> {
    /// Reads the whole macro buffer, trimmed to its logical size.
    ///
    /// The result is cached until the next write through this client.
    pub fn read_macro_buffer(&mut self) -> Result<Vec<u8>, ClientError> {
        if let Some(cached) = &self.macro_cache {
            debug!(len = cached.len(), "macro buffer cache hit");
            return Ok(cached.clone());
        }

        let size = usize::from(self.get_macro_buffer_size()?);
        debug!(size, "reading macro buffer");

        let mut buffer = Vec::with_capacity(chunked_len(size));
        for offset in (0..size).step_by(MAX_BUFFER_CHUNK) {
            buffer.extend(self.get_macro_buffer_chunk(offset as u16, MAX_BUFFER_CHUNK)?);
        }
        buffer.truncate(size);

        self.macro_cache = Some(buffer.clone());
        Ok(buffer)
    }

    /// Replaces the whole macro buffer.
    ///
    /// Shorter input is zero padded. Longer input is accepted only if the
    /// excess is zero padding, otherwise [`ClientError::MacroBufferOverflow`].
    pub fn write_macro_buffer(&mut self, data: &[u8]) -> Result<(), ClientError> {
        self.invalidate_macro_cache();

        let size = usize::from(self.get_macro_buffer_size()?);
        let data = fit_to_capacity(data, size)?;

        let mut padded = data.to_vec();
        padded.resize(chunked_len(size), MACRO_TERMINATOR);
        debug!(size, chunks = padded.len() / MAX_BUFFER_CHUNK, "writing macro buffer");

        for (index, chunk) in padded.chunks(MAX_BUFFER_CHUNK).enumerate() {
            self.set_macro_buffer_chunk((index * MAX_BUFFER_CHUNK) as u16, chunk)?;
        }
        Ok(())
    }

    /// Returns macro `index` without its terminator.
    pub fn get_macro(&mut self, index: u8) -> Result<Vec<u8>, ClientError> {
        self.check_macro_index(index)?;
        let buffer = self.read_macro_buffer()?;

        split_macros(&buffer)
            .get(usize::from(index))
            .map(|&segment| {
                segment
                    .strip_suffix(&[MACRO_TERMINATOR])
                    .unwrap_or(segment)
                    .to_vec()
            })
            .ok_or(ClientError::MacroNotFound { index })
    }

    /// Replaces macro `index` with `data` and writes the buffer back.
    pub fn set_macro(&mut self, index: u8, data: &[u8]) -> Result<(), ClientError> {
        self.check_macro_index(index)?;
        let buffer = self.read_macro_buffer()?;

        let mut segments: Vec<Vec<u8>> = split_macros(&buffer)
            .into_iter()
            .map(<[u8]>::to_vec)
            .collect();
        let segment = segments
            .get_mut(usize::from(index))
            .ok_or(ClientError::MacroNotFound { index })?;
        segment.clear();
        segment.extend_from_slice(data);
        segment.push(MACRO_TERMINATOR);

        self.write_macro_buffer(&join_macros(&segments))
    }

    /// Forgets the cached macro buffer. The next read fetches it again.
    pub fn invalidate_macro_cache(&mut self) {
        if self.macro_cache.take().is_some() {
            debug!("macro buffer cache invalidated");
        }
    }

    fn check_macro_index(&mut self, index: u8) -> Result<(), ClientError> {
        let count = self.get_macro_count()?;
        if index > count {
            return Err(ClientError::InvalidMacroIndex { index, count });
        }
        Ok(())
    }
}
