// src/exit.rs

//! One-shot cleanup on process termination.
//!
//! A registration listens on three channels:
//! - interrupt (SIGINT / Ctrl-C),
//! - terminate (SIGTERM, unix only),
//! - normal exit (the [`ExitRegistration`] being dropped).
//!
//! Whichever fires first runs the callback; every later trigger is a no-op.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Which termination channel fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitTrigger {
    Interrupt,
    Terminate,
    NormalExit,
}

type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Guard + callback pair. Cloning shares the same guard.
#[derive(Clone)]
pub struct OnceExit {
    fired: Arc<AtomicBool>,
    callback: Arc<Mutex<Option<Callback>>>,
}

impl fmt::Debug for OnceExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnceExit")
            .field("fired", &self.has_fired())
            .finish_non_exhaustive()
    }
}

impl OnceExit {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            fired: Arc::new(AtomicBool::new(false)),
            callback: Arc::new(Mutex::new(Some(Box::new(callback)))),
        }
    }

    /// Run the callback if nothing has fired yet.
    ///
    /// The guard is flipped before the callback runs, so a trigger arriving
    /// while the callback is still executing is ignored. Returns `true` only
    /// for the call that ran the callback.
    pub fn trigger(&self, trigger: ExitTrigger) -> bool {
        if self
            .fired
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!(?trigger, "exit callback already ran; ignoring trigger");
            return false;
        }

        let callback = match self.callback.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };

        if let Some(callback) = callback {
            debug!(?trigger, "running exit callback");
            callback();
        }
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }
}

/// Live subscription returned by [`register_process_exit`].
///
/// Dropping it is the normal-exit channel.
#[derive(Debug)]
pub struct ExitRegistration {
    once: OnceExit,
    listener: Option<JoinHandle<()>>,
}

impl ExitRegistration {
    /// Fire a trigger by hand. Same semantics as a delivered signal.
    pub fn trigger(&self, trigger: ExitTrigger) -> bool {
        self.once.trigger(trigger)
    }

    pub fn has_fired(&self) -> bool {
        self.once.has_fired()
    }
}

impl Drop for ExitRegistration {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.abort();
        }
        self.once.trigger(ExitTrigger::NormalExit);
    }
}

/// Register `callback` to run once on interrupt, terminate or normal exit.
///
/// Must be called from within a tokio runtime. The signal handlers are
/// installed before this returns, so a signal delivered right after
/// registration already runs the callback. Each call is an independent
/// registration with its own guard.
pub fn register_process_exit<F>(callback: F) -> ExitRegistration
where
    F: FnOnce() + Send + 'static,
{
    let once = OnceExit::new(callback);
    let signals = ExitSignals::install();
    let listener = tokio::spawn(listen_for_signals(signals, once.clone()));

    ExitRegistration {
        once,
        listener: Some(listener),
    }
}

async fn listen_for_signals(mut signals: ExitSignals, once: OnceExit) {
    let trigger = signals.recv().await;
    info!(?trigger, "termination signal received");
    once.trigger(trigger);
}

#[cfg(unix)]
struct ExitSignals {
    interrupt: Option<tokio::signal::unix::Signal>,
    terminate: Option<tokio::signal::unix::Signal>,
}

#[cfg(unix)]
impl ExitSignals {
    fn install() -> Self {
        use tokio::signal::unix::SignalKind;

        Self {
            interrupt: install_signal(SignalKind::interrupt(), "SIGINT"),
            terminate: install_signal(SignalKind::terminate(), "SIGTERM"),
        }
    }

    async fn recv(&mut self) -> ExitTrigger {
        tokio::select! {
            trigger = recv_signal(self.interrupt.as_mut(), ExitTrigger::Interrupt) => trigger,
            trigger = recv_signal(self.terminate.as_mut(), ExitTrigger::Terminate) => trigger,
        }
    }
}

#[cfg(unix)]
fn install_signal(
    kind: tokio::signal::unix::SignalKind,
    name: &str,
) -> Option<tokio::signal::unix::Signal> {
    match tokio::signal::unix::signal(kind) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!(error = %e, signal = name, "failed to listen for signal; channel disabled");
            None
        }
    }
}

#[cfg(unix)]
async fn recv_signal(
    signal: Option<&mut tokio::signal::unix::Signal>,
    trigger: ExitTrigger,
) -> ExitTrigger {
    if let Some(s) = signal {
        if s.recv().await.is_some() {
            return trigger;
        }
    }
    // No handler, or the signal driver is gone: this channel never fires.
    std::future::pending().await
}

#[cfg(not(unix))]
struct ExitSignals;

#[cfg(not(unix))]
impl ExitSignals {
    fn install() -> Self {
        ExitSignals
    }

    async fn recv(&mut self) -> ExitTrigger {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            return std::future::pending().await;
        }
        ExitTrigger::Interrupt
    }
}
