/// Heater on/off.
const HEATER: u8 = 1 << 2;
/// Skip reloading calibration data from OTP before each measurement.
const NO_OTP_RELOAD: u8 = 1 << 1;
/// 8-bit humidity / 12-bit temperature instead of 12 / 14 bits.
const LOW_RESOLUTION: u8 = 1 << 0;
/// End-of-battery detection, VDD below ~2.47 V. Read-only.
const LOW_VOLTAGE: u8 = 1 << 6;

/// Bits the sensor accepts on a status register write.
const WRITABLE: u8 = HEATER | NO_OTP_RELOAD | LOW_RESOLUTION;

/// Contents of the SHT1x status register.
///
/// This is a plain snapshot; the driver never caches the register, so read
/// it again with [`Sht11::read_status_register`](crate::Sht11::read_status_register)
/// to observe changes.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusRegister(u8);

impl StatusRegister {
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw register value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Value to send on a status register write, with read-only bits cleared.
    pub const fn writable_bits(self) -> u8 {
        self.0 & WRITABLE
    }

    pub const fn heater_enabled(self) -> bool {
        self.0 & HEATER != 0
    }

    pub const fn otp_reload_disabled(self) -> bool {
        self.0 & NO_OTP_RELOAD != 0
    }

    pub const fn low_resolution(self) -> bool {
        self.0 & LOW_RESOLUTION != 0
    }

    /// Supply voltage dropped below the end-of-battery threshold.
    pub const fn low_voltage(self) -> bool {
        self.0 & LOW_VOLTAGE != 0
    }

    pub const fn with_heater(self, on: bool) -> Self {
        self.with_bit(HEATER, on)
    }

    pub const fn with_otp_reload_disabled(self, disabled: bool) -> Self {
        self.with_bit(NO_OTP_RELOAD, disabled)
    }

    /// Note that the calibration formulas in this crate assume full
    /// resolution.
    pub const fn with_low_resolution(self, low: bool) -> Self {
        self.with_bit(LOW_RESOLUTION, low)
    }

    const fn with_bit(self, mask: u8, set: bool) -> Self {
        if set {
            Self(self.0 | mask)
        } else {
            Self(self.0 & !mask)
        }
    }
}

impl From<u8> for StatusRegister {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<StatusRegister> for u8 {
    fn from(status: StatusRegister) -> Self {
        status.0
    }
}
