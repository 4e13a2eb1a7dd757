#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

//! Driver for the Jinglitai JLT4013A LCD panel (ST7701S controller)
//!
//! The panel is configured over a 3-wire serial bus carrying 9-bit
//! command/data words; pixel data reaches the glass over a separate parallel
//! RGB bus that is not handled here. The driver owns the serial interface,
//! the reset line and the power supply and exposes the usual panel lifecycle:
//! `prepare` runs the full power/reset/register bring-up, `enable`/`disable`
//! delegate to the backlight, `unprepare` powers the panel down.

mod command;
pub mod frame;
pub mod interface;
pub mod mode;
pub mod program;

use interface::{Backlight, NoBacklight, PowerSupply, St7701sInterface};
use log::warn;
use mode::{DisplayMode, JLT4013A_MODE};
use program::ProgramEntry;

/// Supply settle time before reset is safe; the internal regulators of the
/// IC need this long to stabilize
pub const POWER_SETTLE_MS: u32 = 120;
/// Reset assert hold time
pub const RESET_ASSERT_MS: u32 = 120;
/// Hold time after reset deassert, mandated by the datasheet
pub const RESET_DEASSERT_MS: u32 = 120;
/// Hold time after sleep-out before any further register traffic
pub const WAKE_MS: u32 = 120;
/// Settle time after display-on
pub const DISPLAY_ON_MS: u32 = 120;

/// Driver Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// panel interface error
    Interface(interface::Error),
    /// the operation is not valid in the current lifecycle state
    InvalidState(PanelState),
}
impl From<interface::Error> for Error {
    fn from(e: interface::Error) -> Self {
        Error::Interface(e)
    }
}

/// Lifecycle state of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// powered down, initial state
    Unprepared,
    /// powered and initialized, bring-up sequence completed
    Prepared,
    /// displaying, backlight on
    Enabled,
    /// backlight off, still powered
    Disabled,
}

/// JLT4013A panel driver
///
/// One driver instance exclusively owns the serial interface, the reset line
/// and the power supply of one physical panel; the host resolves those
/// collaborators before construction and must serialize calls into the
/// driver. Lifecycle transitions are strict: calling an operation from any
/// state other than the documented starting state returns
/// [`Error::InvalidState`] and has no hardware side effect.
pub struct Jlt4013a<IF, PWR, BL = NoBacklight> {
    interface: IF,
    supply: PWR,
    backlight: Option<BL>,
    state: PanelState,
}

impl<IF, PWR> Jlt4013a<IF, PWR>
where
    IF: St7701sInterface,
    PWR: PowerSupply,
{
    /// Creates a new panel driver in the `Unprepared` state
    /// Call prepare afterwards to bring the panel up
    pub fn new(interface: IF, supply: PWR) -> Jlt4013a<IF, PWR> {
        Jlt4013a {
            interface,
            supply,
            backlight: None,
            state: PanelState::Unprepared,
        }
    }
}

impl<IF, PWR, BL> Jlt4013a<IF, PWR, BL>
where
    IF: St7701sInterface,
    PWR: PowerSupply,
    BL: Backlight,
{
    /// Attach a backlight delegate, driven by `enable`/`disable`
    pub fn with_backlight<B>(self, backlight: B) -> Jlt4013a<IF, PWR, B>
    where
        B: Backlight,
    {
        Jlt4013a {
            interface: self.interface,
            supply: self.supply,
            backlight: Some(backlight),
            state: self.state,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// The supported display modes, a single fixed mode for this panel
    pub fn get_modes(&self) -> &'static [DisplayMode] {
        &[JLT4013A_MODE]
    }

    /// Power the panel up and run the full initialization sequence
    ///
    /// Only valid from `Unprepared`. The first transport or supply failure
    /// aborts the remainder of the sequence and is returned; the state stays
    /// `Unprepared` and a retry restarts from the power-enable step.
    pub fn prepare(&mut self) -> Result<(), Error> {
        if self.state != PanelState::Unprepared {
            return Err(Error::InvalidState(self.state));
        }

        if let Err(e) = self.bring_up() {
            warn!("jlt4013a: bring-up aborted: {:?}", e);
            return Err(e);
        }

        self.state = PanelState::Prepared;
        Ok(())
    }

    /// Mark the panel as displaying and switch the backlight on
    ///
    /// Only valid from `Prepared`. The panel IC needs no further traffic at
    /// this point; a backlight failure is propagated and the state does not
    /// advance.
    pub fn enable(&mut self) -> Result<(), Error> {
        if self.state != PanelState::Prepared {
            return Err(Error::InvalidState(self.state));
        }

        if let Some(backlight) = self.backlight.as_mut() {
            backlight.set_power(true)?;
        }

        self.state = PanelState::Enabled;
        Ok(())
    }

    /// Switch the backlight off
    ///
    /// Only valid from `Enabled`. No panel IC traffic.
    pub fn disable(&mut self) -> Result<(), Error> {
        if self.state != PanelState::Enabled {
            return Err(Error::InvalidState(self.state));
        }

        if let Some(backlight) = self.backlight.as_mut() {
            backlight.set_power(false)?;
        }

        self.state = PanelState::Disabled;
        Ok(())
    }

    /// Power the panel down
    ///
    /// Only valid from `Prepared` or `Disabled`. Disables the supply and
    /// nothing else; reset line and serial bus keep their last state since
    /// the IC loses power anyway. The state drops to `Unprepared` even when
    /// the supply reports a failure, the caller must treat the panel as torn
    /// down regardless.
    pub fn unprepare(&mut self) -> Result<(), Error> {
        match self.state {
            PanelState::Prepared | PanelState::Disabled => {
                self.state = PanelState::Unprepared;
                self.supply.disable()?;
                Ok(())
            }
            state => Err(Error::InvalidState(state)),
        }
    }

    // bring-up sequence ------------------------------------------------------------------------

    fn bring_up(&mut self) -> Result<(), Error> {
        self.supply.enable()?;
        self.interface.delay_ms(POWER_SETTLE_MS);

        self.interface.set_reset(true);
        self.interface.delay_ms(RESET_ASSERT_MS);
        self.interface.set_reset(false);
        self.interface.delay_ms(RESET_DEASSERT_MS);

        self.interface.write_command(command::SLPOUT)?;
        self.interface.delay_ms(WAKE_MS);

        program::INIT_PROGRAM
            .iter()
            .try_for_each(|entry| self.send_entry(entry))?;

        self.interface.write_command(command::DISPON)?;
        self.interface.delay_ms(DISPLAY_ON_MS);

        Ok(())
    }

    fn send_entry(&mut self, entry: &ProgramEntry) -> Result<(), Error> {
        match entry {
            ProgramEntry::SelectBank(bank) => {
                self.interface.write_command(command::CND2BKXSEL)?;
                for byte in command::BKX_SEL_PREAMBLE {
                    self.interface.write_data(byte)?;
                }
                self.interface.write_data(*bank)?;
            }
            ProgramEntry::Write { reg, data } => {
                self.interface.write_command(*reg)?;
                for byte in *data {
                    self.interface.write_data(*byte)?;
                }
            }
        }
        Ok(())
    }
}
