// crates/uener-pix-core/src/core/crc.rs
// ============================================================================
// Module: BR Code CRC16
// Description: CRC16-CCITT (polynomial 0x1021, init 0xFFFF) checksums.
// Purpose: Compute the tag 63 checksum exactly as PIX wallets do.
// Dependencies: None
// ============================================================================

//! ## Overview
//! The BR Code checksum is CRC-16/CCITT-FALSE: MSB-first, no reflection, no
//! final XOR. String input is processed one UTF-16 code unit at a time, which
//! matches the reference browser implementations bit for bit and reduces to
//! the byte-wise algorithm for ASCII payloads.

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Initial CRC register value.
pub const CRC16_INIT: u16 = 0xFFFF;
/// CCITT generator polynomial.
pub const CRC16_POLY: u16 = 0x1021;

// ============================================================================
// SECTION: Checksums
// ============================================================================

/// Computes the BR Code CRC16 over a string.
#[must_use]
pub fn crc16_ccitt(input: &str) -> u16 {
    crc16_units(input.encode_utf16())
}

/// Computes the BR Code CRC16 over raw bytes.
#[must_use]
pub fn crc16_ccitt_bytes(bytes: &[u8]) -> u16 {
    crc16_units(bytes.iter().map(|byte| u16::from(*byte)))
}

/// Formats a checksum as four uppercase, zero-padded hex digits.
#[must_use]
pub fn format_crc(crc: u16) -> String {
    format!("{crc:04X}")
}

/// Runs the shift register over a stream of code units.
fn crc16_units(units: impl Iterator<Item = u16>) -> u16 {
    // Wider than 16 bits so units above 0xFF shift exactly like the reference.
    let mut crc = u32::from(CRC16_INIT);
    let poly = u32::from(CRC16_POLY);
    for unit in units {
        crc ^= u32::from(unit) << 8;
        for _ in 0 .. 8 {
            crc = if crc & 0x8000 == 0 {
                (crc << 1) & 0xFFFF
            } else {
                ((crc << 1) ^ poly) & 0xFFFF
            };
        }
    }
    u16::try_from(crc & 0xFFFF).unwrap_or(u16::MAX)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use super::crc16_ccitt;
    use super::crc16_ccitt_bytes;
    use super::format_crc;

    #[test]
    fn check_value_matches_ccitt_false() {
        assert_eq!(crc16_ccitt("123456789"), 0x29B1);
        assert_eq!(crc16_ccitt_bytes(b"123456789"), 0x29B1);
    }

    #[test]
    fn empty_input_returns_init() {
        assert_eq!(crc16_ccitt(""), 0xFFFF);
    }

    #[test]
    fn format_pads_and_uppercases() {
        assert_eq!(format_crc(0x04D2), "04D2");
        assert_eq!(format_crc(0xabcd), "ABCD");
        assert_eq!(format_crc(0), "0000");
    }
}
