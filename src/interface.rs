use core::fmt::{Display, Formatter};

use embedded_hal::{
    delay::DelayNs,
    digital::{self, OutputPin},
    spi::{self, SpiBus},
};

/// The transport a driver needs from the board: a command/data bus with a
/// session bracket and a separate backlight line.
///
/// Everything that goes over the wire between [`open`](LcdBus::open) and
/// [`close`](LcdBus::close) belongs to one transaction.
pub trait LcdBus {
    /// Error reported by the transport. The driver never interprets it.
    type Error;

    /// One time bus/controller reset, done before the init sequence
    fn init<DELAY: DelayNs>(&mut self, delay: &mut DELAY) -> Result<(), Self::Error>;

    /// Start a command/data transaction
    fn open(&mut self) -> Result<(), Self::Error>;

    /// End the transaction started by [`open`](LcdBus::open)
    fn close(&mut self) -> Result<(), Self::Error>;

    /// Send one control byte
    fn write_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send a burst of display data
    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Switch the backlight, independent of the command/data path
    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error>;
}

/// Runs `f` inside an open/close bracket.
///
/// The bus is closed even when `f` fails; the first error wins.
pub(crate) fn session<B, F>(bus: &mut B, f: F) -> Result<(), B::Error>
where
    B: LcdBus,
    F: FnOnce(&mut B) -> Result<(), B::Error>,
{
    bus.open()?;
    let written = f(bus);
    let closed = bus.close();
    written.and(closed)
}

/// Errors of the [`SpiInterface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceError {
    /// Encountered an SPI error
    Spi(spi::ErrorKind),
    /// Encountered an error on the DC GPIO
    Dc(digital::ErrorKind),
    /// Encountered an error on the RST GPIO
    Rst(digital::ErrorKind),
    /// Encountered an error on the CS GPIO
    Cs(digital::ErrorKind),
    /// Encountered an error on the backlight GPIO
    Backlight(digital::ErrorKind),
}

impl Display for InterfaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(kind) => write!(f, "spi: {kind}"),
            Self::Dc(kind) => write!(f, "dc pin: {kind:?}"),
            Self::Rst(kind) => write!(f, "rst pin: {kind:?}"),
            Self::Cs(kind) => write!(f, "cs pin: {kind:?}"),
            Self::Backlight(kind) => write!(f, "backlight pin: {kind:?}"),
        }
    }
}

fn spi_err<E: spi::Error>(err: E) -> InterfaceError {
    InterfaceError::Spi(err.kind())
}

fn pin_err<E: digital::Error>(
    wrap: fn(digital::ErrorKind) -> InterfaceError,
) -> impl Fn(E) -> InterfaceError {
    move |err| wrap(err.kind())
}

/// The 4-wire SPI connection shared by the ST7565 COG LCDs and the SSD1315 OLEDs
///
/// - CS is pulled low by [`open`](LcdBus::open) and released by [`close`](LcdBus::close)
/// - DC is low for commands and high for data
/// - RST is pulsed once by [`init`](LcdBus::init)
/// - the backlight pin is optional, OLED panels have none
pub struct SpiInterface<SPI, DC, RST, CS, BL> {
    spi: SPI,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Pin for Resetting
    rst: RST,
    /// Chip select, active low
    cs: CS,
    /// Backlight, active high
    bl: Option<BL>,
    /// number of us the reset line is held low
    reset_us: u32,
}

impl<SPI, DC, RST, CS, BL> SpiInterface<SPI, DC, RST, CS, BL>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    CS: OutputPin,
    BL: OutputPin,
{
    /// Creates a new `SpiInterface` struct
    ///
    /// If no reset time is given, the reset line is held low for 10ms.
    pub fn new(spi: SPI, dc: DC, rst: RST, cs: CS, bl: Option<BL>, reset_us: Option<u32>) -> Self {
        SpiInterface {
            spi,
            dc,
            rst,
            cs,
            bl,
            reset_us: reset_us.unwrap_or(10_000),
        }
    }

    /// Gives back the owned peripherals
    pub fn release(self) -> (SPI, DC, RST, CS, Option<BL>) {
        (self.spi, self.dc, self.rst, self.cs, self.bl)
    }
}

impl<SPI, DC, RST, CS, BL> LcdBus for SpiInterface<SPI, DC, RST, CS, BL>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    CS: OutputPin,
    BL: OutputPin,
{
    type Error = InterfaceError;

    fn init<DELAY: DelayNs>(&mut self, delay: &mut DELAY) -> Result<(), Self::Error> {
        self.cs.set_high().map_err(pin_err(InterfaceError::Cs))?;
        self.rst.set_low().map_err(pin_err(InterfaceError::Rst))?;
        delay.delay_us(self.reset_us);
        self.rst.set_high().map_err(pin_err(InterfaceError::Rst))?;
        delay.delay_us(self.reset_us);
        Ok(())
    }

    fn open(&mut self) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(pin_err(InterfaceError::Cs))
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        let flushed = self.spi.flush().map_err(spi_err);
        // release the line even when the flush failed
        self.cs.set_high().map_err(pin_err(InterfaceError::Cs))?;
        flushed
    }

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        // low for commands
        self.dc.set_low().map_err(pin_err(InterfaceError::Dc))?;
        self.spi.write(&[command]).map_err(spi_err)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        // high for data
        self.dc.set_high().map_err(pin_err(InterfaceError::Dc))?;
        self.spi.write(data).map_err(spi_err)
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
        match self.bl.as_mut() {
            Some(bl) if on => bl.set_high().map_err(pin_err(InterfaceError::Backlight)),
            Some(bl) => bl.set_low().map_err(pin_err(InterfaceError::Backlight)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec;

    use super::*;
    use embedded_hal_mock::eh1::{
        delay::NoopDelay,
        digital::{Mock as PinMock, State, Transaction as PinTransaction},
        spi::{Mock as SpiMock, Transaction as SpiTransaction},
    };

    #[test]
    fn command_then_data_in_one_session() {
        let spi = SpiMock::new(&[
            SpiTransaction::write_vec(vec![0xB0]),
            SpiTransaction::write_vec(vec![0x01, 0x02, 0x03]),
            SpiTransaction::flush(),
        ]);
        let dc = PinMock::new(&[
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
        ]);
        let rst = PinMock::new(&[]);
        let cs = PinMock::new(&[
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
        ]);
        let mut bus = SpiInterface::new(spi, dc, rst, cs, None::<PinMock>, None);

        session(&mut bus, |bus| {
            bus.write_command(0xB0)?;
            bus.write_data(&[0x01, 0x02, 0x03])
        })
        .unwrap();

        let (mut spi, mut dc, mut rst, mut cs, _) = bus.release();
        spi.done();
        dc.done();
        rst.done();
        cs.done();
    }

    #[test]
    fn reset_pulse_on_init() {
        let spi = SpiMock::new(&[]);
        let dc = PinMock::new(&[]);
        let rst = PinMock::new(&[
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
        ]);
        let cs = PinMock::new(&[PinTransaction::set(State::High)]);
        let mut bus = SpiInterface::new(spi, dc, rst, cs, None::<PinMock>, Some(1_000));

        bus.init(&mut NoopDelay::new()).unwrap();

        let (mut spi, mut dc, mut rst, mut cs, _) = bus.release();
        spi.done();
        dc.done();
        rst.done();
        cs.done();
    }

    #[test]
    fn backlight_follows_state() {
        let spi = SpiMock::new(&[]);
        let dc = PinMock::new(&[]);
        let rst = PinMock::new(&[]);
        let cs = PinMock::new(&[]);
        let bl = PinMock::new(&[
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
        ]);
        let mut bus = SpiInterface::new(spi, dc, rst, cs, Some(bl), None);

        bus.set_backlight(true).unwrap();
        bus.set_backlight(false).unwrap();

        let (mut spi, mut dc, mut rst, mut cs, bl) = bus.release();
        spi.done();
        dc.done();
        rst.done();
        cs.done();
        bl.unwrap().done();
    }

    #[test]
    fn missing_backlight_is_ignored() {
        let mut bus = SpiInterface::new(
            SpiMock::<u8>::new(&[]),
            PinMock::new(&[]),
            PinMock::new(&[]),
            PinMock::new(&[]),
            None::<PinMock>,
            None,
        );
        assert_eq!(bus.set_backlight(true), Ok(()));

        let (mut spi, mut dc, mut rst, mut cs, _) = bus.release();
        spi.done();
        dc.done();
        rst.done();
        cs.done();
    }
}
