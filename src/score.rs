use chrono::{DateTime, Local};

/// Current game's score plus the best seen since the process started.
#[derive(Clone, Debug, Default)]
pub struct Score {
    pub value: u32,
    pub best: u32,
    pub best_at: Option<DateTime<Local>>,
}

impl Score {
    pub fn increment(&mut self) {
        self.value += 1;
    }

    /// Called when a game ends. Returns `true` if this game set a new best.
    pub fn settle(&mut self) -> bool {
        if self.value > self.best {
            self.best = self.value;
            self.best_at = Some(Local::now());
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}
