//! `sessionStorage`-backed session store implementation.

use platform_host::SessionStore;

#[derive(Debug, Clone, Copy, Default)]
/// Browser session store backed by `window.sessionStorage`.
///
/// On non-WASM targets reads return `None` and writes succeed without storing anything.
pub struct WebSessionStore;

#[cfg(target_arch = "wasm32")]
fn session_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .ok_or_else(|| "sessionStorage unavailable".to_string())
}

impl SessionStore for WebSessionStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, String> {
        #[cfg(target_arch = "wasm32")]
        {
            session_storage()?
                .get_item(key)
                .map_err(|e| format!("sessionStorage get_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set_raw(&self, key: &str, raw: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            session_storage()?
                .set_item(key, raw)
                .map_err(|e| format!("sessionStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            session_storage()?
                .remove_item(key)
                .map_err(|e| format!("sessionStorage remove_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }
}
