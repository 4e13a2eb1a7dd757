//! 9-bit command/data framing for the ST7701S serial interface
//!
//! The IC multiplexes commands and parameters over one serial line: every
//! transfer is a 9-bit word whose high bit selects between command and data
//! and whose low 8 bits carry the payload.

/// Selector bit of a serial frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dcx {
    /// the payload byte is a command code
    Command = 0,
    /// the payload byte is a command parameter
    Data = 1,
}

/// One 9-bit word on the serial interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandFrame {
    /// command/data selector
    pub dcx: Dcx,
    /// 8 bit payload
    pub byte: u8,
}

impl CommandFrame {
    /// Create a frame carrying a command code
    pub fn command(byte: u8) -> Self {
        CommandFrame {
            dcx: Dcx::Command,
            byte,
        }
    }

    /// Create a frame carrying a command parameter
    pub fn data(byte: u8) -> Self {
        CommandFrame { dcx: Dcx::Data, byte }
    }

    /// Encode to the wire word: selector in bit 8, payload in bits 7..0
    pub fn encode(self) -> u16 {
        ((self.dcx as u16) << 8) | self.byte as u16
    }

    /// Decode the low 9 bits of a wire word
    pub fn decode(word: u16) -> Self {
        let dcx = if word & 0x0100 != 0 {
            Dcx::Data
        } else {
            Dcx::Command
        };
        CommandFrame {
            dcx,
            byte: word as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_places_selector_in_bit_8() {
        assert_eq!(CommandFrame::command(0x29).encode(), 0x0029);
        assert_eq!(CommandFrame::data(0x29).encode(), 0x0129);
        assert_eq!(CommandFrame::command(0x00).encode(), 0x0000);
        assert_eq!(CommandFrame::data(0xFF).encode(), 0x01FF);
    }

    #[test]
    fn encode_uses_exactly_9_bits() {
        for byte in 0..=255u8 {
            assert_eq!(CommandFrame::command(byte).encode() & !0x01FF, 0);
            assert_eq!(CommandFrame::data(byte).encode() & !0x01FF, 0);
        }
    }

    #[test]
    fn round_trip_all_bytes() {
        for byte in 0..=255u8 {
            let cmd = CommandFrame::command(byte);
            assert_eq!(CommandFrame::decode(cmd.encode()), cmd);
            let data = CommandFrame::data(byte);
            assert_eq!(CommandFrame::decode(data.encode()), data);
        }
    }
}
