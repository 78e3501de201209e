//! Frames-per-second counter for the HUD

/// Number of frames averaged over
const WINDOW: usize = 60;

/// Ring buffer of recent frame timestamps
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; WINDOW],
    frame_index: usize,
    frames_seen: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frame_times: [0.0; WINDOW],
            frame_index: 0,
            frames_seen: 0,
            fps: 0,
        }
    }

    /// Record a frame drawn at `now_ms`
    pub fn record(&mut self, now_ms: f64) {
        // Oldest sample in the window (the slot about to be overwritten
        // once full, otherwise the first one recorded)
        let oldest = if self.frames_seen >= WINDOW {
            self.frame_times[self.frame_index]
        } else {
            self.frame_times[0]
        };

        self.frame_times[self.frame_index] = now_ms;
        self.frame_index = (self.frame_index + 1) % WINDOW;

        let intervals = self.frames_seen.min(WINDOW);
        self.frames_seen += 1;

        let elapsed = now_ms - oldest;
        if intervals > 0 && elapsed > 0.0 {
            self.fps = (intervals as f64 * 1000.0 / elapsed).round() as u32;
        }
    }

    /// Latest estimate
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
