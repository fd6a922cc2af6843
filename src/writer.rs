//! Outbound side of the link: the periodic control byte

use std::time::Duration;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::error::{ConnectionError, Result};

/// Write the whole payload and push it out
pub async fn write<W>(conn: &mut W, payload: &[u8]) -> std::result::Result<(), ConnectionError>
where
    W: AsyncWrite + Unpin,
{
    conn.write_all(payload).await?;
    conn.flush().await?;
    Ok(())
}

/// Send `control_byte` once per elapsed `period`, starting one period from now
pub async fn run<W>(mut conn: W, control_byte: u8, period: Duration) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        write(&mut conn, &[control_byte]).await?;
        log::trace!("Sent control byte {:#04x}", control_byte);
    }
}
