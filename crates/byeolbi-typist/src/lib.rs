//! Typewriter message rotation for the byeolbi greeting card.
//!
//! A two-phase state machine reveals each message one character at a
//! time, pauses on the finished message, then rotates to the next one.
//! It is driven by the caller's elapsed-milliseconds clock and keeps a
//! single deadline per transition, so the reveal cadence is independent
//! of the frame rate.

/// The built-in greeting messages, rotated in order.
pub const DEFAULT_MESSAGES: [&str; 4] = [
    "没想到我会以这种方式发消息给你吧，\n我想你啦",
    "是不是也是看上流星雨啦\n而且，还是独属于你的流星雨！",
    "祝愿小乖天天开心\n天天哈哈哈哈哈哈hahaha",
    "最后呢，\n一句话，\n小乖请开心！\n有我在呢！",
];

/// Delay between revealed characters.
pub const REVEAL_DELAY_MS: u64 = 100;

/// Hold time on a fully revealed message before rotating.
pub const PAUSE_DELAY_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Revealing,
    Paused,
}

/// Typewriter state: current message, reveal length and next deadline.
#[derive(Debug)]
pub struct Typist {
    /// Messages as char sequences; reveal length counts Unicode scalars.
    messages: Vec<Vec<char>>,
    current: usize,
    revealed: usize,
    phase: Phase,
    next_at_ms: u64,
    reveal_ms: u64,
    pause_ms: u64,
}

impl Typist {
    /// Create a typist with the default cadence (100ms / 3000ms).
    pub fn new<S: AsRef<str>>(messages: &[S]) -> Self {
        Self::with_delays(messages, REVEAL_DELAY_MS, PAUSE_DELAY_MS)
    }

    /// Create a typist with an explicit cadence.
    ///
    /// An empty message list falls back to the built-in messages; zero
    /// delays are bumped to 1ms so the deadline always advances.
    pub fn with_delays<S: AsRef<str>>(messages: &[S], reveal_ms: u64, pause_ms: u64) -> Self {
        let messages: Vec<Vec<char>> = if messages.is_empty() {
            DEFAULT_MESSAGES.iter().map(|m| m.chars().collect()).collect()
        } else {
            messages
                .iter()
                .map(|m| m.as_ref().chars().collect())
                .collect()
        };

        Self {
            messages,
            current: 0,
            revealed: 0,
            phase: Phase::Revealing,
            next_at_ms: 0,
            reveal_ms: reveal_ms.max(1),
            pause_ms: pause_ms.max(1),
        }
    }

    /// Advance the state machine up to `now_ms`.
    ///
    /// Each transition schedules exactly one successor deadline; if the
    /// caller's clock lagged past several deadlines, the missed steps
    /// are replayed here.
    pub fn tick(&mut self, now_ms: u64) {
        while now_ms >= self.next_at_ms {
            self.step();
        }
    }

    fn step(&mut self) {
        if self.phase == Phase::Paused {
            // Rotate forward-wrapping and restart the reveal. The first
            // character of the new message appears in this same step,
            // matching the original's synchronous restart at pause end.
            self.current = (self.current + 1) % self.messages.len();
            self.revealed = 0;
            self.phase = Phase::Revealing;
        }

        let len = self.messages[self.current].len();
        if self.revealed < len {
            self.revealed += 1;
        }

        if self.revealed < len {
            self.next_at_ms += self.reveal_ms;
        } else {
            self.phase = Phase::Paused;
            self.next_at_ms += self.pause_ms;
        }
    }

    /// The currently displayed text: the revealed prefix of the current
    /// message, embedded line breaks included.
    pub fn text(&self) -> String {
        self.messages[self.current][..self.revealed]
            .iter()
            .collect()
    }

    /// The displayed text split into lines for rendering.
    pub fn lines(&self) -> Vec<String> {
        self.text().split('\n').map(str::to_owned).collect()
    }

    /// Index of the message currently being revealed.
    pub fn current_index(&self) -> usize {
        self.current
    }
}
