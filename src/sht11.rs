use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::calibration::{humidity_tenths, temperature_tenths};
use crate::command::{Command, MeasurementKind};
use crate::error::Error;
use crate::status::StatusRegister;

/// Number of times the data line is polled for measurement completion.
///
/// Datasheet conversion times are ~70 ms (temperature) and ~20 ms (humidity).
pub const MEASUREMENT_POLL_LIMIT: u16 = 240;

/// Delay between two measurement completion polls, in milliseconds.
pub const MEASUREMENT_POLL_INTERVAL_MS: u32 = 1;

/// Clock cycles sent with DATA released to resynchronise the interface.
const RESET_CLOCK_CYCLES: u8 = 9;

/// Driver for the SHT1x temperature and humidity sensor.
///
/// The sensor talks over Sensibus, a two-wire clock/data protocol that looks
/// like I2C but is not compatible with it. DATA must be an open-drain pin with
/// a pull-up: driving it high releases the line so the sensor can pull it low.
///
/// The bus is half-duplex and strictly sequential. The driver owns both pins,
/// so concurrent access from several contexts has to be serialised by the
/// caller (for example with a mutex around the whole driver).
pub struct Sht11<DATA, SCK, D> {
    data: DATA,
    sck: SCK,
    delay: D,
}

/// Calibrated reading, truncated to one decimal digit.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Temperature compensated relative humidity in percent.
    pub relative_humidity: f64,
}

/// Result of a single measurement cycle before calibration.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawMeasurement {
    /// Sensor output, 14 bits for temperature and 12 bits for humidity.
    pub ticks: u16,
    /// CRC-8 sent by the sensor after the value. Not verified.
    pub checksum: u8,
}

/// Outcome of a best-effort [`Sht11::read`].
///
/// `reading` is always filled in. When `error` is set the values were
/// computed from a failed measurement (zero ticks) and should not be trusted.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Acquisition<E> {
    pub reading: Reading,
    /// Last error observed during the read. A humidity failure replaces a
    /// temperature failure.
    pub error: Option<Error<E>>,
}

impl<E> Acquisition<E> {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Converts into a `Result`, discarding the values on error.
    pub fn into_result(self) -> Result<Reading, Error<E>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.reading),
        }
    }
}

impl<DATA, SCK, D, E> Sht11<DATA, SCK, D>
where
    DATA: InputPin<Error = E> + OutputPin<Error = E>,
    SCK: OutputPin<Error = E>,
    D: DelayNs,
{
    /// Creates a new instance of the SHT1x driver.
    ///
    /// # Arguments
    ///
    /// * `data` - Open-drain GPIO pin connected to DATA. Must support both input and output.
    /// * `sck` - Push-pull GPIO pin connected to SCK.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    pub fn new(data: DATA, sck: SCK, delay: D) -> Self {
        Sht11 { data, sck, delay }
    }

    /// Releases the pins and the delay provider.
    pub fn release(self) -> (DATA, SCK, D) {
        (self.data, self.sck, self.delay)
    }

    /// Reads temperature and humidity.
    ///
    /// Runs a temperature cycle, then a humidity cycle compensated with that
    /// temperature. A failing stage does not stop the read: its raw value is
    /// taken as zero and the error is reported in [`Acquisition::error`].
    /// Use [`try_read`](Self::try_read) to stop at the first failure instead.
    pub fn read(&mut self) -> Acquisition<E> {
        let mut error = None;

        let raw_temp = match self.measure(MeasurementKind::Temperature) {
            Ok(ticks) => ticks,
            Err(err) => {
                error = Some(err);
                0
            }
        };
        let raw_humi = match self.measure(MeasurementKind::Humidity) {
            Ok(ticks) => ticks,
            Err(err) => {
                error = Some(err);
                0
            }
        };

        Acquisition {
            reading: Self::calibrate(raw_temp, raw_humi),
            error,
        }
    }

    /// Reads temperature and humidity, returning the first error encountered.
    pub fn try_read(&mut self) -> Result<Reading, Error<E>> {
        let raw_temp = self.measure(MeasurementKind::Temperature)?;
        let raw_humi = self.measure(MeasurementKind::Humidity)?;
        Ok(Self::calibrate(raw_temp, raw_humi))
    }

    fn calibrate(raw_temp: u16, raw_humi: u16) -> Reading {
        Reading {
            temperature: f64::from(temperature_tenths(raw_temp)) / 10.0,
            relative_humidity: f64::from(humidity_tenths(raw_humi, raw_temp)) / 10.0,
        }
    }

    /// Runs one measurement cycle and returns the raw ticks.
    pub fn measure(&mut self, kind: MeasurementKind) -> Result<u16, Error<E>> {
        self.measure_raw(kind).map(|raw| raw.ticks)
    }

    /// Runs one measurement cycle and returns the raw ticks with the checksum.
    ///
    /// # Errors
    ///
    /// * `Error::WriteFailed` if the sensor did not acknowledge the command.
    /// * `Error::Timeout` if the conversion did not finish within
    ///   [`MEASUREMENT_POLL_LIMIT`] polls.
    pub fn measure_raw(&mut self, kind: MeasurementKind) -> Result<RawMeasurement, Error<E>> {
        self.transmission_start()?;
        self.write_byte(kind.command().code())?;
        let polls = self.wait_for_measurement()?;
        debug!("{} measurement ready after {=u16} polls", kind, polls);

        let msb = self.read_byte(true)?;
        let lsb = self.read_byte(true)?;
        // No ACK on the checksum ends the transfer
        let checksum = self.read_byte(false)?;

        Ok(RawMeasurement {
            ticks: u16::from_be_bytes([msb, lsb]),
            checksum,
        })
    }

    /// Releases DATA and waits for the sensor to pull it low, which signals
    /// the end of a conversion. Returns the number of polls it took.
    fn wait_for_measurement(&mut self) -> Result<u16, Error<E>> {
        self.data.set_high()?;
        for poll in 1..=MEASUREMENT_POLL_LIMIT {
            self.delay.delay_ms(MEASUREMENT_POLL_INTERVAL_MS);
            if self.data.is_low()? {
                return Ok(poll);
            }
        }
        warn!("measurement timed out");
        Err(Error::Timeout)
    }

    /// Reads the status register and the checksum that follows it.
    pub fn read_status_register(&mut self) -> Result<(StatusRegister, u8), Error<E>> {
        self.transmission_start()?;
        self.write_byte(Command::ReadStatusRegister.code())?;
        let status = self.read_byte(true)?;
        let checksum = self.read_byte(false)?;
        trace!("status register read: {=u8:#x}", status);
        Ok((StatusRegister::from_bits(status), checksum))
    }

    /// Writes the status register. The value is sent as is.
    pub fn write_status_register(
        &mut self,
        status: impl Into<StatusRegister>,
    ) -> Result<(), Error<E>> {
        let status = status.into();
        self.transmission_start()?;
        self.write_byte(Command::WriteStatusRegister.code())?;
        self.write_byte(status.bits())?;
        trace!("status register written: {=u8:#x}", status.bits());
        Ok(())
    }

    /// Resets the interface, then sends the soft reset command which restores
    /// the status register to its default value.
    ///
    /// Wait at least 11 ms before the next command.
    pub fn soft_reset(&mut self) -> Result<(), Error<E>> {
        self.connection_reset()?;
        debug!("soft reset");
        self.write_byte(Command::SoftReset.code())
    }

    /// Recovers a desynchronised interface: nine clock cycles with DATA
    /// released, followed by a transmission start. The status register is
    /// left untouched.
    ///
    /// ```text
    ///       _____________________________________________________         ________
    /// DATA:                                                      |_______|
    ///          _    _    _    _    _    _    _    _    _        ___     ___
    /// SCK : __| |__| |__| |__| |__| |__| |__| |__| |__| |______|   |___|   |______
    /// ```
    pub fn connection_reset(&mut self) -> Result<(), Error<E>> {
        self.data.set_high()?;
        self.sck.set_low()?;
        for _ in 0..RESET_CLOCK_CYCLES {
            self.sck.set_high()?;
            self.delay.delay_us(3);
            self.sck.set_low()?;
            self.delay.delay_us(3);
        }
        debug!("connection reset");
        self.transmission_start()
    }

    /// Sends the transmission start sequence that opens every transaction.
    ///
    /// ```text
    ///       _____         ________
    /// DATA:      |_______|
    ///           ___     ___
    /// SCK : ___|   |___|   |______
    /// ```
    pub fn transmission_start(&mut self) -> Result<(), Error<E>> {
        self.data.set_high()?;
        self.sck.set_low()?;
        self.delay.delay_us(1);
        self.sck.set_high()?;
        self.delay.delay_us(1);

        self.data.set_low()?;
        self.delay.delay_us(1);
        self.sck.set_low()?;
        self.delay.delay_us(3);
        self.sck.set_high()?;
        self.delay.delay_us(1);

        self.data.set_high()?;
        self.delay.delay_us(1);
        self.sck.set_low()?;
        Ok(())
    }

    /// Reads one byte, MSB first, sampling DATA while SCK is high.
    ///
    /// With `ack` set DATA is pulled low on the ninth clock to ask for more
    /// data; otherwise it stays released, which ends the transfer.
    pub fn read_byte(&mut self, ack: bool) -> Result<u8, Error<E>> {
        self.data.set_high()?;
        self.sck.set_low()?;

        let mut byte: u8 = 0;
        for i in 0..8 {
            let bit_mask = 1 << (7 - i);
            self.sck.set_high()?;
            self.delay.delay_us(1);
            if self.data.is_high()? {
                byte |= bit_mask;
            }
            self.sck.set_low()?;
            self.delay.delay_us(1);
        }

        if ack {
            self.data.set_low()?;
        } else {
            self.data.set_high()?;
        }
        self.sck.set_high()?;
        self.delay.delay_us(3);
        self.sck.set_low()?;
        self.delay.delay_us(1);
        self.data.set_high()?;

        Ok(byte)
    }

    /// Writes one byte, MSB first, and checks the sensor's acknowledge on the
    /// ninth clock.
    ///
    /// # Errors
    ///
    /// Returns `Error::WriteFailed` if DATA is still high on the ninth clock.
    pub fn write_byte(&mut self, value: u8) -> Result<(), Error<E>> {
        for i in 0..8 {
            if value & (1 << (7 - i)) != 0 {
                self.data.set_high()?;
            } else {
                self.data.set_low()?;
            }
            self.sck.set_high()?;
            self.delay.delay_us(3);
            self.sck.set_low()?;
            self.delay.delay_us(3);
        }

        self.data.set_high()?;
        self.sck.set_high()?;
        self.delay.delay_us(3);
        let missing_ack = self.data.is_high()?;
        self.delay.delay_us(1);
        self.sck.set_low()?;

        if missing_ack {
            warn!("no ACK for byte {=u8:#x}", value);
            return Err(Error::WriteFailed);
        }
        Ok(())
    }
}
