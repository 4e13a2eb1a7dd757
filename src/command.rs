// ---- ST7701S command defines ------------------------------------------------------------------
// Command1 (no bank selected)
const _SWRESET: u8 = 0x01; // Software reset
pub const SLPOUT: u8 = 0x11; // Sleep out
const _DISPOFF: u8 = 0x28; // Display off
pub const DISPON: u8 = 0x29; // Display on
pub const COLMOD: u8 = 0x3A; // Interface pixel format

// Command2 bank switch; the register map is banked and a BKx select changes
// how the following register addresses are interpreted
pub const CND2BKXSEL: u8 = 0xFF;
// fixed preamble of every BKx select, the bank id byte follows
pub const BKX_SEL_PREAMBLE: [u8; 4] = [0x77, 0x01, 0x00, 0x00];
pub const BKX_SEL_BK0: u8 = 0x10;
pub const BKX_SEL_BK1: u8 = 0x11;
pub const BKX_SEL_NONE: u8 = 0x00;

// Command2 BK0
pub const PVGAMCTRL: u8 = 0xB0; // Positive voltage gamma control
pub const NVGAMCTRL: u8 = 0xB1; // Negative voltage gamma control
pub const LNESET: u8 = 0xC0; // Display line setting
pub const PORCTRL: u8 = 0xC1; // Porch control
pub const INVSET: u8 = 0xC2; // Inversion selection & frame rate control

// Command2 BK1
pub const VRHS: u8 = 0xB0; // Vop amplitude
pub const VCOM: u8 = 0xB1; // VCOM amplitude
pub const VGHSS: u8 = 0xB2; // VGH voltage
pub const TESTCMD: u8 = 0xB3; // TEST command
pub const VGLS: u8 = 0xB5; // VGL voltage
pub const PWCTRL1: u8 = 0xB7; // Power control 1
pub const PWCTRL2: u8 = 0xB8; // Power control 2
pub const PWCTRL3: u8 = 0xB9; // Power control 3
pub const SPD1: u8 = 0xC1; // Source pre-drive timing set 1
pub const SPD2: u8 = 0xC2; // Source pre-drive timing set 2
pub const MIPISET1: u8 = 0xD0; // MIPI setting 1
