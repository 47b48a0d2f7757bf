/// Possible errors from the SHT1x driver.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// The sensor did not acknowledge a written byte.
    WriteFailed,
    /// The measurement did not complete within the polling budget.
    Timeout,
    /// Error from the GPIO pin (data or clock line).
    Pin(E),
}

impl<E> From<E> for Error<E> {
    fn from(value: E) -> Self {
        Self::Pin(value)
    }
}
