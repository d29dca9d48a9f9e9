use std::sync::{Arc, Mutex, MutexGuard};

use counter_dapp_core::{FragmentPort, PortError};

/// Fragment held in memory, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryFragment {
    inner: Arc<Mutex<String>>,
}

impl MemoryFragment {
    /// Accepts a bare fragment or anything containing `#fragment`, such as a
    /// copied share link.
    pub fn new(initial: &str) -> Self {
        let value = match initial.split_once('#') {
            Some((_, fragment)) => fragment,
            None => initial,
        };
        Self {
            inner: Arc::new(Mutex::new(value.to_owned())),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, String>, PortError> {
        self.inner
            .lock()
            .map_err(|e| PortError::Transport(format!("fragment lock poisoned: {e}")))
    }
}

impl FragmentPort for MemoryFragment {
    fn read(&self) -> Result<String, PortError> {
        Ok(self.lock()?.clone())
    }

    fn write(&self, value: &str) -> Result<(), PortError> {
        *self.lock()? = value.to_owned();
        Ok(())
    }
}

/// `window.location.hash` of the hosting page.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFragment;

#[cfg(target_arch = "wasm32")]
impl FragmentPort for BrowserFragment {
    fn read(&self) -> Result<String, PortError> {
        let hash = location()?
            .hash()
            .map_err(|e| PortError::Transport(format!("read location.hash failed: {e:?}")))?;
        Ok(hash.strip_prefix('#').unwrap_or(&hash).to_owned())
    }

    fn write(&self, value: &str) -> Result<(), PortError> {
        location()?
            .set_hash(value)
            .map_err(|e| PortError::Transport(format!("write location.hash failed: {e:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
fn location() -> Result<web_sys::Location, PortError> {
    web_sys::window()
        .map(|window| window.location())
        .ok_or_else(|| PortError::Transport("missing window".to_owned()))
}
