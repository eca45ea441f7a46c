//! Persisted best score
//!
//! A single non-negative integer, read at startup and written whenever it
//! improves. Stored as a tiny JSON envelope in LocalStorage on wasm32;
//! native builds keep it in memory only.

use serde::{Deserialize, Serialize};

/// The best score across all sessions. Never decreases.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u32,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "raccoon_dash_highscore";

    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a session score. Returns true only on strict improvement;
    /// the stored value never goes down.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Load from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(high_score) = serde_json::from_str::<HighScore>(&json) {
                    log::info!("Loaded high score: {}", high_score.best);
                    return high_score;
                }
            }
        }

        log::info!("No stored high score, starting at 0");
        Self::new()
    }

    /// Save to LocalStorage (WASM only); storage failures are ignored
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High score saved: {}", self.best);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_only_improvements() {
        let mut hs = HighScore::new();
        assert!(hs.record(3));
        assert!(!hs.record(1));
        assert!(hs.record(7));
        assert!(!hs.record(2));
        assert!(!hs.record(7));
        assert_eq!(hs.best, 7);
    }

    #[test]
    fn test_displayed_sequence_is_running_max() {
        // Sessions scoring [3, 1, 7, 2] show [3, 3, 7, 7]
        let mut hs = HighScore::new();
        let mut shown = Vec::new();
        for score in [3, 1, 7, 2] {
            hs.record(score);
            shown.push(hs.best);
        }
        assert_eq!(shown, vec![3, 3, 7, 7]);
    }

    #[test]
    fn test_new_best_visible_mid_session() {
        // record() runs every frame, so the best must reflect a score
        // that passes it while the session is still running, not only
        // at game over
        let mut hs = HighScore::new();
        hs.record(5);
        let mut shown = Vec::new();
        for frame_score in [0, 2, 5, 6, 7] {
            hs.record(frame_score);
            shown.push(hs.best);
        }
        assert_eq!(shown, vec![5, 5, 5, 6, 7]);
    }

    #[test]
    fn test_json_roundtrip() {
        let hs = HighScore { best: 42 };
        let json = serde_json::to_string(&hs).unwrap();
        let back: HighScore = serde_json::from_str(&json).unwrap();
        assert_eq!(back.best, 42);
    }
}
