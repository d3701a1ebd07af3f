//! Shutdown signalling shared between the step and its polling loop.
//!
//! A watch channel of unit type: the sender side is held by whoever owns the
//! step, receivers are handed into the poll loop so a suspended retry wait
//! can be interrupted.

use tokio::sync::watch;

/// Type alias to abstract a watch channel of `()`.
pub type SignalTx = watch::Sender<()>;

/// Type alias to abstract a watch channel of `()`.
pub type SignalRx = watch::Receiver<()>;

/// Handle for requesting that the step stops at its next suspension point.
#[derive(Debug, Clone)]
pub struct ShutdownTx(SignalTx);

impl ShutdownTx {
    pub fn shutdown(&self) -> Result<(), watch::error::SendError<()>> {
        self.0.send(())
    }

    pub fn subscribe(&self) -> ShutdownRx {
        self.0.subscribe()
    }
}

pub type ShutdownRx = SignalRx;

pub fn create_shutdown_channel() -> (ShutdownTx, ShutdownRx) {
    let (tx, rx) = watch::channel(());
    (ShutdownTx(tx), rx)
}
