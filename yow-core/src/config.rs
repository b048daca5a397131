//! Format constants and the data range shared by the initializer and the picker.

/// Byte that separates records in a quotation file.
pub const SEPARATOR: u8 = b'\0';

/// Average length of a quotation.
///
/// The header (everything before the first separator) can be very long, which
/// would bias a uniform offset towards the first quotation. The header is
/// skipped, minus this many bytes so the first quotation can still be chosen.
pub const AVG_LEN: u64 = 40;

/// Initial capacity of the buffer a record is collected into.
pub const INITIAL_CAPACITY: usize = 80;

/// Size of the read buffer placed in front of the quotation stream.
pub(crate) const READ_BUFFER_SIZE: usize = 8 * 1024;

/// Byte span of a quotation file that random offsets are drawn from.
///
/// Produced once by [`crate::scan_range`] and passed by value to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataRange {
    start: u64,
    len: u64,
}

impl DataRange {
    /// Creates a range covering `len` bytes starting at `start`.
    pub const fn new(start: u64, len: u64) -> Self {
        Self { start, len }
    }

    /// First byte offset eligible for selection.
    pub const fn start(&self) -> u64 {
        self.start
    }

    /// Number of bytes eligible for selection.
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Offset one past the last eligible byte. Equal to the file size for
    /// ranges produced by [`crate::scan_range`].
    pub const fn end(&self) -> u64 {
        self.start.saturating_add(self.len)
    }

    /// Returns `true` when no offset can be drawn from this range.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maps a uniform random draw onto an offset inside the range.
    ///
    /// Returns `None` for an empty range.
    pub fn offset_for(&self, draw: u64) -> Option<u64> {
        if self.is_empty() {
            return None;
        }
        Some(self.start + draw % self.len)
    }
}

/// Whitespace as classified by C `isspace` in the "C" locale.
///
/// Unlike [`u8::is_ascii_whitespace`] this includes the vertical tab.
pub(crate) const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}
