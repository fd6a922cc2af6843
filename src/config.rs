use std::time::Duration;

/// Serial device the link talks to
#[cfg(windows)]
pub const DEFAULT_DEVICE: &str = "COM8";
#[cfg(not(windows))]
pub const DEFAULT_DEVICE: &str = "/dev/ttyUSB0";

/// The baudrate of the device link
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Byte sent on every writer tick
pub const CONTROL_BYTE: u8 = 0x01;

/// Time between two control writes
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Largest chunk pulled from the device in one poll
pub const READ_BUFFER_SIZE: usize = 4096;

/// Settings of one serial link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    /// Serial port path (e.g., /dev/ttyUSB0, COM8)
    pub device: String,
    /// Baud rate of the link
    pub baud_rate: u32,
    /// Time between two control writes
    pub interval: Duration,
    /// Byte sent on every writer tick
    pub control_byte: u8,
    /// Largest chunk read in one poll
    pub read_buffer_size: usize,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            device: DEFAULT_DEVICE.to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            interval: TICK_INTERVAL,
            control_byte: CONTROL_BYTE,
            read_buffer_size: READ_BUFFER_SIZE,
        }
    }
}

impl LinkConfig {
    pub fn with_device(mut self, device: &str) -> Self {
        self.device = device.to_string();
        self
    }

    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LinkConfig::default();
        assert_eq!(config.baud_rate, 115_200);
        assert_eq!(config.control_byte, 0x01);
        assert_eq!(config.interval, Duration::from_secs(1));
        assert_eq!(config.device, DEFAULT_DEVICE);
    }

    #[test]
    fn test_config_builder() {
        let config = LinkConfig::default()
            .with_device("/dev/ttyACM0")
            .with_baud_rate(9600)
            .with_interval(Duration::from_millis(250));

        assert_eq!(config.device, "/dev/ttyACM0");
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.interval, Duration::from_millis(250));
        assert_eq!(config.control_byte, CONTROL_BYTE);
    }
}
