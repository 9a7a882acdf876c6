//! Hex dump rendering for memory read from the analysis server.
//!
//! Bytes are laid out 16 per line with a gap after the 8th byte, followed by
//! the ASCII column:
//!
//! ```text
//! 00401234  48 65 6c 6c 6f 20 57 6f  72 6c 64 00 00 00 00 00  |Hello World.....|
//! 00401244  01 02 03 04                                       |....            |
//! ```
//!
//! The address field is 8 hex digits when every line address fits in 32 bits
//! and 16 digits otherwise, chosen once per block so the columns line up.

use std::fmt;

/// Number of bytes rendered on each dump line
pub const BYTES_PER_LINE: usize = 16;

/// Slot index after which the extra column gap is inserted
const GROUP_SIZE: usize = 8;

const NARROW_ADDRESS_WIDTH: usize = 8;
const WIDE_ADDRESS_WIDTH: usize = 16;

/// Map a byte to its ASCII column character.
///
/// Bytes in `0x20..=0x7E` are shown as themselves, everything else as `.`.
pub fn printable_char(byte: u8) -> char {
    if (0x20..=0x7E).contains(&byte) {
        byte as char
    } else {
        '.'
    }
}

/// Raw bytes read from the server together with the address they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteBlock {
    address: u64,
    data: Vec<u8>,
}

impl ByteBlock {
    pub fn new(address: u64, data: Vec<u8>) -> Self {
        Self { address, data }
    }

    pub fn address(&self) -> u64 {
        self.address
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Address of the `index`-th dump line (wraps at the end of the address space)
    fn line_address(&self, index: usize) -> u64 {
        self.address
            .wrapping_add((index as u64).wrapping_mul(BYTES_PER_LINE as u64))
    }

    /// Hex digits needed so that every line address of this block fits
    fn address_width(&self) -> usize {
        let line_count = self.data.len().div_ceil(BYTES_PER_LINE);
        let last_line = (line_count.saturating_sub(1) as u64)
            .checked_mul(BYTES_PER_LINE as u64)
            .and_then(|offset| self.address.checked_add(offset));

        match last_line {
            Some(addr) if addr <= u64::from(u32::MAX) => NARROW_ADDRESS_WIDTH,
            _ => WIDE_ADDRESS_WIDTH,
        }
    }

    /// Split the block into dump lines, in ascending address order.
    pub fn lines(&self) -> impl Iterator<Item = DumpLine<'_>> {
        let address_width = self.address_width();
        self.data
            .chunks(BYTES_PER_LINE)
            .enumerate()
            .map(move |(i, bytes)| DumpLine {
                address: self.line_address(i),
                bytes,
                address_width,
            })
    }
}

impl fmt::Display for ByteBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// One rendered line of a hex dump, covering up to 16 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpLine<'a> {
    pub address: u64,
    pub bytes: &'a [u8],
    address_width: usize,
}

impl DumpLine<'_> {
    /// Two-digit lowercase hex for each byte on the line
    pub fn hex_columns(&self) -> Vec<String> {
        self.bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// ASCII rendering of the line, one character per byte
    pub fn ascii_column(&self) -> String {
        self.bytes.iter().copied().map(printable_char).collect()
    }
}

impl fmt::Display for DumpLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$x}  ", self.address, width = self.address_width)?;

        for slot in 0..BYTES_PER_LINE {
            if slot == GROUP_SIZE {
                f.write_str(" ")?;
            }
            match self.bytes.get(slot) {
                Some(byte) => write!(f, "{:02x} ", byte)?,
                None => f.write_str("   ")?,
            }
        }

        // Pad the ASCII column so the closing bar lines up on a short final line
        write!(
            f,
            " |{:<width$}|",
            self.ascii_column(),
            width = BYTES_PER_LINE
        )
    }
}

/// Render `data` read at `address` as a hex dump, one `\n`-terminated line per
/// 16 bytes. Empty input renders as an empty string.
pub fn format_hex_dump(address: u64, data: &[u8]) -> String {
    ByteBlock::new(address, data.to_vec()).to_string()
}
