//! Contains the panel interface
//!
//! The ST7701S is addressed over a 3-wire serial bus carrying 9-bit words;
//! reset, power supply and backlight are separate collaborators resolved by
//! the host before the driver is constructed.

use crate::frame::CommandFrame;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

/// Interface Error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A error in the spi driver
    SpiError,
    /// The power supply control reported a failure
    PowerError,
    /// The backlight delegate reported a failure
    BacklightError,
}

/// Trait to describe the serial interface with the panel IC
///
/// Implementations must issue one synchronous transfer per frame and report
/// the transport failure unaltered; retry policy belongs to the caller.
pub trait St7701sInterface {
    /// transmit one 9-bit frame, blocking until the transfer completed
    fn send(&mut self, frame: CommandFrame) -> Result<(), Error>;

    /// assert (`true`) or deassert (`false`) the panel reset line, best effort
    fn set_reset(&mut self, asserted: bool);

    /// block for the given number of milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// issue a command byte on the panel IC
    fn write_command(&mut self, cmd: u8) -> Result<(), Error> {
        self.send(CommandFrame::command(cmd))
    }

    /// write a parameter byte to the panel IC
    fn write_data(&mut self, data: u8) -> Result<(), Error> {
        self.send(CommandFrame::data(data))
    }
}

/// Control of the panel power supply
pub trait PowerSupply {
    /// switch the supply on
    fn enable(&mut self) -> Result<(), Error>;
    /// switch the supply off
    fn disable(&mut self) -> Result<(), Error>;
}

/// A power supply switched by a single GPIO
pub struct GpioSupply<PIN> {
    pin: PIN,
}

impl<PIN> GpioSupply<PIN>
where
    PIN: OutputPin,
{
    /// Create a supply control from an enable pin (high = on)
    pub fn new(pin: PIN) -> GpioSupply<PIN> {
        GpioSupply { pin }
    }
}

impl<PIN> PowerSupply for GpioSupply<PIN>
where
    PIN: OutputPin,
{
    fn enable(&mut self) -> Result<(), Error> {
        self.pin.set_high().map_err(|_| Error::PowerError)
    }

    fn disable(&mut self) -> Result<(), Error> {
        self.pin.set_low().map_err(|_| Error::PowerError)
    }
}

/// Backlight delegate, opaque to the driver
///
/// Failures are propagated to the caller verbatim.
pub trait Backlight {
    /// switch the backlight on or off
    fn set_power(&mut self, on: bool) -> Result<(), Error>;
}

/// Placeholder for panels wired without a controllable backlight
pub struct NoBacklight;

impl Backlight for NoBacklight {
    fn set_power(&mut self, _on: bool) -> Result<(), Error> {
        Ok(())
    }
}

/// Implements the panel interface for the spi hardware interface
/// Uses embedded_hal spi and gpio driver and a embedded_hal delay driver
///
/// The spi bus must be configured for 9 bits per word; each frame is shipped
/// as one two-byte word in little-endian order, which is the layout the
/// spidev word framing expects for word sizes above 8 bit.
pub struct St7701sSpiInterface<SPI, RST, DELAY> {
    spi: SPI,
    rst: RST,
    delay: DELAY,
}

impl<SPI, RST, DELAY> St7701sSpiInterface<SPI, RST, DELAY>
where
    SPI: SpiDevice,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new spi panel interface
    pub fn new(spi: SPI, rst: RST, delay: DELAY) -> St7701sSpiInterface<SPI, RST, DELAY> {
        St7701sSpiInterface { spi, rst, delay }
    }
}

impl<SPI, RST, DELAY> St7701sInterface for St7701sSpiInterface<SPI, RST, DELAY>
where
    SPI: SpiDevice,
    RST: OutputPin,
    DELAY: DelayNs,
{
    fn send(&mut self, frame: CommandFrame) -> Result<(), Error> {
        let word = frame.encode().to_le_bytes();

        if self.spi.write(&word).is_err() {
            return Err(Error::SpiError);
        }

        Ok(())
    }

    fn set_reset(&mut self, asserted: bool) {
        // best effort, the gpio write has no meaningful failure mode
        let res = if asserted {
            self.rst.set_high()
        } else {
            self.rst.set_low()
        };
        res.ok();
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

    fn spi_write(word: [u8; 2]) -> [SpiTransaction<u8>; 3] {
        [
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(word.to_vec()),
            SpiTransaction::transaction_end(),
        ]
    }

    #[test]
    fn write_command_clears_the_selector_bit() {
        let mut spi = SpiMock::new(&spi_write([0x11, 0x00]));
        let mut rst = PinMock::new(&[]);

        let mut interface = St7701sSpiInterface::new(spi.clone(), rst.clone(), NoopDelay);
        interface.write_command(0x11).unwrap();

        spi.done();
        rst.done();
    }

    #[test]
    fn write_data_sets_the_selector_bit() {
        let mut spi = SpiMock::new(&spi_write([0xAB, 0x01]));
        let mut rst = PinMock::new(&[]);

        let mut interface = St7701sSpiInterface::new(spi.clone(), rst.clone(), NoopDelay);
        interface.write_data(0xAB).unwrap();

        spi.done();
        rst.done();
    }

    #[test]
    fn reset_line_follows_the_assert_level() {
        let mut spi = SpiMock::new(&[]);
        let mut rst = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ]);

        let mut interface = St7701sSpiInterface::new(spi.clone(), rst.clone(), NoopDelay);
        interface.set_reset(true);
        interface.set_reset(false);

        spi.done();
        rst.done();
    }

    #[test]
    fn gpio_supply_switches_the_enable_pin() {
        let mut pin = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ]);

        let mut supply = GpioSupply::new(pin.clone());
        supply.enable().unwrap();
        supply.disable().unwrap();

        pin.done();
    }
}
