//! High score persistence
//!
//! A single integer, stored in LocalStorage as a plain decimal string and
//! surviving across sessions. Absent or unreadable storage degrades to 0.

/// The persisted high score
#[derive(Debug, Clone, Copy, Default)]
pub struct HighScore {
    pub value: u32,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "pixel_invaders_highscore";

    /// Load the stored high score (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(raw)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(value) = raw.parse::<u32>() {
                    log::info!("Loaded high score: {}", value);
                    return Self { value };
                }
            }
        }

        log::info!("No high score found, starting at 0");
        Self::default()
    }

    /// Persist the high score (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.value.to_string());
            log::info!("High score saved: {}", self.value);
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
