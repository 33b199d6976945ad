//! Clipboard collaborator.
//!
//! The core hands plain strings to a [`ClipboardService`] and turns the
//! outcome into a notification. [`SystemClipboard`] talks to the OS through
//! `copypasta` (feature `clipboard`); [`MemoryClipboard`] keeps the last
//! copied value in memory for headless runs and tests.

#[cfg(feature = "clipboard")]
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use crate::types::errors::ClipboardError;

pub trait ClipboardService {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[cfg(feature = "clipboard")]
type CopyRequest = (String, mpsc::Sender<Result<(), ClipboardError>>);

/// OS clipboard.
///
/// One `copypasta` context is kept alive for the whole session on a dedicated
/// thread, since on X11 the selection is lost when its owning context is
/// dropped. The context is opened on the first copy and reopened after a
/// failed open.
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    requests: Option<mpsc::Sender<CopyRequest>>,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel::<CopyRequest>();
        let spawned = std::thread::Builder::new()
            .name("clipboard".to_string())
            .spawn(move || Self::serve(rx));
        match spawned {
            Ok(_) => Self { requests: Some(tx) },
            Err(e) => {
                tracing::warn!(error = %e, "clipboard thread could not start");
                Self { requests: None }
            }
        }
    }

    fn serve(rx: mpsc::Receiver<CopyRequest>) {
        use copypasta::{ClipboardContext, ClipboardProvider};

        let mut ctx: Option<ClipboardContext> = None;
        for (text, reply) in rx {
            if ctx.is_none() {
                match ClipboardContext::new() {
                    Ok(opened) => ctx = Some(opened),
                    Err(e) => {
                        let _ = reply.send(Err(ClipboardError::Unavailable(e.to_string())));
                        continue;
                    }
                }
            }
            let result = match ctx.as_mut() {
                Some(ctx) => ctx
                    .set_contents(text)
                    .map_err(|e| ClipboardError::Unavailable(e.to_string())),
                None => Err(ClipboardError::Unavailable("no clipboard context".to_string())),
            };
            let _ = reply.send(result);
        }
    }
}

#[cfg(feature = "clipboard")]
impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "clipboard")]
impl ClipboardService for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let unavailable = || ClipboardError::Unavailable("clipboard thread stopped".to_string());
        let requests = self.requests.as_ref().ok_or_else(unavailable)?;
        let (reply_tx, reply_rx) = mpsc::channel();
        requests
            .send((text.to_owned(), reply_tx))
            .map_err(|_| unavailable())?;
        reply_rx.recv().map_err(|_| unavailable())?
    }
}

/// In-memory clipboard. Clones share the same contents.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    denied: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that refuses every copy.
    pub fn denied() -> Self {
        Self {
            contents: Arc::default(),
            denied: true,
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl ClipboardService for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.denied {
            return Err(ClipboardError::Unavailable("clipboard access denied".to_string()));
        }
        let mut contents = self
            .contents
            .lock()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

/// The clipboard a session uses by default: the OS one when built with it.
pub fn default_clipboard() -> Box<dyn ClipboardService + Send> {
    #[cfg(feature = "clipboard")]
    {
        Box::new(SystemClipboard::new())
    }
    #[cfg(not(feature = "clipboard"))]
    {
        Box::new(MemoryClipboard::new())
    }
}
