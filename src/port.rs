use std::time::Duration;

use tokio_serial::{DataBits, FlowControl, Parity, SerialStream, StopBits};

use crate::error::ConnectionError;

/// Open the device as an async duplex stream, 8N1 without flow control.
///
/// No retry: a missing, busy or forbidden device is reported straight away.
pub fn open(device: &str, baud_rate: u32) -> Result<SerialStream, ConnectionError> {
    let stream = SerialStream::open(
        &tokio_serial::new(device, baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(Duration::from_millis(400))
    )
    .map_err(|source| ConnectionError::Open {
        device: device.to_string(),
        baud_rate,
        source,
    })?;

    log::info!("Opened serial port: {} at {} baud", device, baud_rate);
    Ok(stream)
}
