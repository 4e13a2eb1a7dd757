use jlt4013a::interface::{GpioSupply, St7701sSpiInterface};
use jlt4013a::Jlt4013a;
use linux_embedded_hal::gpio_cdev::{Chip, LineRequestFlags};
use linux_embedded_hal::spidev::{SpiModeFlags, SpidevOptions};
use linux_embedded_hal::{CdevPin, Delay, SpidevDevice};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Raspi SPI0.0
    // MOSI: 10
    // SCK: 11
    // CS: 8
    let mut spi = SpidevDevice::open("/dev/spidev0.0")?;
    let spi_options = SpidevOptions::new()
        .bits_per_word(9)
        .max_speed_hz(1_000_000)
        .mode(SpiModeFlags::SPI_MODE_0)
        .build();
    spi.configure(&spi_options)?;

    let mut chip = Chip::new("/dev/gpiochip0")?;
    // RST: 17
    let rst_output = chip.get_line(17)?;
    let rst_output_handle = rst_output.request(LineRequestFlags::OUTPUT, 0, "jlt4013a")?;
    let rst = CdevPin::new(rst_output_handle)?;
    // panel supply switch: 22
    let power_output = chip.get_line(22)?;
    let power_output_handle = power_output.request(LineRequestFlags::OUTPUT, 0, "jlt4013a")?;
    let power = CdevPin::new(power_output_handle)?;

    let interface = St7701sSpiInterface::new(spi, rst, Delay);
    let mut panel = Jlt4013a::new(interface, GpioSupply::new(power));

    println!("Bring up panel");
    panel.prepare().unwrap();
    panel.enable().unwrap();

    println!("Panel is up: {:?}", panel.state());
    println!("Mode: {:?}", panel.get_modes()[0]);

    Ok(())
}
