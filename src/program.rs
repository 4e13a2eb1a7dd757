//! The panel initialization program
//!
//! Ordered register writes that configure the ST7701S for the JLT4013A glass,
//! taken from the panel reference sequence. The register map is banked: a
//! [`ProgramEntry::SelectBank`] changes how the IC interprets the register
//! addresses that follow, so the table order is load bearing and entries must
//! never be reordered or deduplicated.

use crate::command;

/// One step of the initialization program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramEntry {
    /// Switch the Command2 register bank (`BKX_SEL_*` id byte)
    SelectBank(u8),
    /// Write a register with its parameter bytes
    Write {
        /// register address, interpreted relative to the selected bank
        reg: u8,
        /// parameter bytes, written in order
        data: &'static [u8],
    },
}

impl ProgramEntry {
    /// Number of 9-bit serial transfers this entry expands to
    pub fn word_count(&self) -> usize {
        match self {
            // command + 4 preamble bytes + bank id
            ProgramEntry::SelectBank(_) => 2 + command::BKX_SEL_PREAMBLE.len(),
            ProgramEntry::Write { data, .. } => 1 + data.len(),
        }
    }
}

use ProgramEntry::{SelectBank, Write};

/// Full configuration sequence for the JLT4013A
///
/// Transmitted once per bring-up attempt, between sleep-out and display-on.
/// Several entries carry unverified bytes from the reference sequence; they
/// are reproduced verbatim and marked below.
pub const INIT_PROGRAM: &[ProgramEntry] = &[
    SelectBank(command::BKX_SEL_BK0),
    // 854 lines as Table 12.3.2.7
    Write {
        reg: command::LNESET,
        data: &[0xE9, 0x03],
    },
    Write {
        reg: command::PORCTRL,
        data: &[0x11, 0x02],
    },
    Write {
        reg: command::INVSET,
        data: &[0x31, 0x03],
    },
    // undocumented
    Write {
        reg: 0xCC,
        data: &[0x10],
    },
    Write {
        reg: command::PVGAMCTRL,
        data: &[
            0x40, 0x01, 0x46, 0x0D, 0x13, 0x09, 0x05, 0x09, 0x09, 0x1B, 0x07, 0x15, 0x12, 0x4C,
            0x10, 0xC8,
        ],
    },
    Write {
        reg: command::NVGAMCTRL,
        data: &[
            0x40, 0x02, 0x86, 0x0D, 0x13, 0x09, 0x05, 0x09, 0x09, 0x1F, 0x07, 0x15, 0x12, 0x15,
            0x19, 0x08,
        ],
    },
    SelectBank(command::BKX_SEL_BK1),
    Write {
        reg: command::VRHS,
        data: &[0x50],
    },
    Write {
        reg: command::VCOM,
        data: &[0x68],
    },
    Write {
        reg: command::VGHSS,
        data: &[0x07],
    },
    Write {
        reg: command::TESTCMD,
        data: &[0x80],
    },
    Write {
        reg: command::VGLS,
        data: &[0x47],
    },
    Write {
        reg: command::PWCTRL1,
        data: &[0x85],
    },
    Write {
        reg: command::PWCTRL2,
        data: &[0x21],
    },
    Write {
        reg: command::PWCTRL3,
        data: &[0x10],
    },
    Write {
        reg: command::SPD1,
        data: &[0x21, 0x36],
    },
    Write {
        reg: command::SPD2,
        data: &[0x78],
    },
    // CRC error only?
    Write {
        reg: command::MIPISET1,
        data: &[0b0100_1001],
    },
    // 0xE0..0xED: gate/timing correction block, bytes unverified
    Write {
        reg: 0xE0,
        data: &[0x00, 0x00, 0x02],
    },
    Write {
        reg: 0xE1,
        data: &[0x08, 0x00, 0x0A, 0x00, 0x07, 0x00, 0x09, 0x00, 0x00, 0x33, 0x33],
    },
    Write {
        reg: 0xE2,
        data: &[
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
    },
    Write {
        reg: 0xE3,
        data: &[0x00, 0x00, 0x33, 0x33],
    },
    Write {
        reg: 0xE4,
        data: &[0x44, 0x44],
    },
    Write {
        reg: 0xE5,
        data: &[
            0x0E, 0x2D, 0xA0, 0xA0, 0x10, 0x2D, 0xA0, 0xA0, 0x0A, 0x2D, 0xA0, 0xA0, 0x0C, 0x2D,
            0xA0, 0xA0,
        ],
    },
    Write {
        reg: 0xE6,
        data: &[0x00, 0x00, 0x33, 0x33],
    },
    Write {
        reg: 0xE7,
        data: &[0x44, 0x44],
    },
    Write {
        reg: 0xE8,
        data: &[
            0x0D, 0x2D, 0xA0, 0xA0, 0x0F, 0x2D, 0xA0, 0xA0, 0x09, 0x2D, 0xA0, 0xA0, 0x0B, 0x2D,
            0xA0, 0xA0,
        ],
    },
    Write {
        reg: 0xEB,
        data: &[0x02, 0x01, 0xE4, 0xE4, 0x44, 0x00, 0x40],
    },
    Write {
        reg: 0xEC,
        data: &[0x02, 0x01],
    },
    Write {
        reg: 0xED,
        data: &[
            0xAB, 0x89, 0x76, 0x54, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x10, 0x45, 0x67,
            0x98, 0xBA,
        ],
    },
    SelectBank(command::BKX_SEL_NONE),
    Write {
        reg: command::COLMOD,
        data: &[0x70],
    },
];

/// Total number of 9-bit transfers the program expands to
pub fn word_count() -> usize {
    INIT_PROGRAM.iter().map(ProgramEntry::word_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_starts_with_bk0_and_ends_with_colmod() {
        assert_eq!(INIT_PROGRAM[0], SelectBank(command::BKX_SEL_BK0));
        assert_eq!(
            INIT_PROGRAM[INIT_PROGRAM.len() - 1],
            Write {
                reg: command::COLMOD,
                data: &[0x70]
            }
        );
    }

    #[test]
    fn bank_selects_appear_in_order_and_are_not_deduplicated() {
        let banks: Vec<u8> = INIT_PROGRAM
            .iter()
            .filter_map(|e| match e {
                SelectBank(id) => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(
            banks,
            vec![
                command::BKX_SEL_BK0,
                command::BKX_SEL_BK1,
                command::BKX_SEL_NONE
            ]
        );
    }

    #[test]
    fn bank1_select_precedes_its_register_writes() {
        let bk1 = INIT_PROGRAM
            .iter()
            .position(|e| *e == SelectBank(command::BKX_SEL_BK1))
            .unwrap();
        let vrhs = INIT_PROGRAM
            .iter()
            .position(|e| matches!(e, Write { reg, .. } if *reg == command::VRHS))
            .unwrap();
        assert!(bk1 < vrhs);
    }

    #[test]
    fn entry_word_counts() {
        assert_eq!(SelectBank(command::BKX_SEL_BK0).word_count(), 6);
        assert_eq!(
            Write {
                reg: command::LNESET,
                data: &[0xE9, 0x03]
            }
            .word_count(),
            3
        );
    }

    #[test]
    fn program_expands_to_196_words() {
        assert_eq!(word_count(), 196);
    }
}
