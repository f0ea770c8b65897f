//! In-memory bus that records everything the driver sends

extern crate std;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::interface::LcdBus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Init,
    Open,
    Close,
    Cmd(u8),
    Data(Vec<u8>),
    Backlight(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MockError;

#[derive(Debug, Default)]
pub(crate) struct RecordingBus {
    pub events: Vec<Event>,
    /// Fail every data burst
    pub fail_data: bool,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Data bursts together with the page/column commands that preceded them
    pub fn writes(&self) -> Vec<(u8, u8, u8, Vec<u8>)> {
        self.events
            .windows(4)
            .filter_map(|w| match w {
                [Event::Cmd(page), Event::Cmd(high), Event::Cmd(low), Event::Data(data)] => {
                    Some((*page, *high, *low, data.clone()))
                }
                _ => None,
            })
            .collect()
    }

    /// Every command byte, in order
    pub fn commands(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Cmd(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl LcdBus for RecordingBus {
    type Error = MockError;

    fn init<DELAY: DelayNs>(&mut self, _delay: &mut DELAY) -> Result<(), Self::Error> {
        self.events.push(Event::Init);
        Ok(())
    }

    fn open(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::Open);
        Ok(())
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::Close);
        Ok(())
    }

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.events.push(Event::Cmd(command));
        Ok(())
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        if self.fail_data {
            return Err(MockError);
        }
        self.events.push(Event::Data(data.to_vec()));
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
        self.events.push(Event::Backlight(on));
        Ok(())
    }
}
