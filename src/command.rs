/// Commands understood by the SHT1x.
///
/// Every command byte is a 3-bit address (always `000`) followed by a 5-bit
/// command code, the last bit of which selects read (1) or write (0).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// `000 0001 1`
    MeasureTemperature = 0x03,
    /// `000 0010 1`
    MeasureHumidity = 0x05,
    /// `000 0011 0`
    WriteStatusRegister = 0x06,
    /// `000 0011 1`
    ReadStatusRegister = 0x07,
    /// `000 1111 0`
    SoftReset = 0x1E,
}

impl Command {
    /// The byte written on the bus for this command.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Quantity sampled by a single measurement cycle.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasurementKind {
    /// 14-bit temperature conversion.
    Temperature,
    /// 12-bit relative humidity conversion.
    Humidity,
}

impl MeasurementKind {
    pub const fn command(self) -> Command {
        match self {
            MeasurementKind::Temperature => Command::MeasureTemperature,
            MeasurementKind::Humidity => Command::MeasureHumidity,
        }
    }
}
