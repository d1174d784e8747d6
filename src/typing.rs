use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypingError {
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
    #[error("phrase {index} is empty")]
    EmptyPhrase { index: usize },
    #[error("typing and deleting speeds must be non-zero")]
    ZeroSpeed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingConfig {
    pub typing_speed: Duration,
    pub deleting_speed: Duration,
    pub pause: Duration,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            typing_speed: Duration::from_millis(150),
            deleting_speed: Duration::from_millis(100),
            pause: Duration::from_millis(2000),
        }
    }
}

impl TypingConfig {
    pub fn validate(&self) -> Result<(), TypingError> {
        if self.typing_speed.is_zero() || self.deleting_speed.is_zero() {
            return Err(TypingError::ZeroSpeed);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Deleting,
}

/// One displayed state of the typewriter and how long it stays on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay: Duration,
}

/// Finite-state machine behind the hero's rotating headline.
///
/// The visible text is always a prefix of the active phrase, measured in
/// `char`s. Each [`tick`](Typewriter::tick) moves exactly one character and
/// reports how long to wait before the next one. Reaching the end of a phrase
/// flips to [`Mode::Deleting`] and folds the pause into that wait; emptying the
/// text flips back to [`Mode::Typing`] on the next phrase.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    // char count of each phrase, cached so ticks never rescan
    lens: Vec<usize>,
    config: TypingConfig,
    index: usize,
    shown: usize,
    mode: Mode,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, config: TypingConfig) -> Result<Self, TypingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases = phrases.into_iter().map(Into::into).collect::<Vec<String>>();
        if phrases.is_empty() {
            return Err(TypingError::NoPhrases);
        }
        if let Some(index) = phrases.iter().position(|p| p.is_empty()) {
            return Err(TypingError::EmptyPhrase { index });
        }
        config.validate()?;
        let lens = phrases.iter().map(|p| p.chars().count()).collect();
        Ok(Self {
            phrases,
            lens,
            config,
            index: 0,
            shown: 0,
            mode: Mode::Typing,
        })
    }

    pub fn text(&self) -> &str {
        let phrase = &self.phrases[self.index];
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &TypingConfig {
        &self.config
    }

    /// Wait before the very first tick after mount.
    pub fn initial_delay(&self) -> Duration {
        self.current_speed()
    }

    /// Advance one character and return the delay until the next tick.
    pub fn tick(&mut self) -> Duration {
        let full = self.lens[self.index];
        match self.mode {
            Mode::Typing => {
                self.shown = (self.shown + 1).min(full);
                if self.shown == full {
                    self.mode = Mode::Deleting;
                    return self.config.pause + self.config.deleting_speed;
                }
            }
            Mode::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.mode = Mode::Typing;
                    self.index = (self.index + 1) % self.phrases.len();
                }
            }
        }
        self.current_speed()
    }

    fn current_speed(&self) -> Duration {
        match self.mode {
            Mode::Typing => self.config.typing_speed,
            Mode::Deleting => self.config.deleting_speed,
        }
    }
}

/// Never ends; each item is the text shown after one tick.
impl Iterator for Typewriter {
    type Item = Frame;

    fn next(&mut self) -> Option<Self::Item> {
        let delay = self.tick();
        Some(Frame {
            text: self.text().to_string(),
            delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_config() -> TypingConfig {
        TypingConfig {
            typing_speed: Duration::from_millis(1),
            deleting_speed: Duration::from_millis(1),
            pause: Duration::ZERO,
        }
    }

    #[test]
    fn test_two_phrase_cycle() {
        let tw = Typewriter::new(["AB", "C"], unit_config()).unwrap();
        assert_eq!(tw.text(), "");

        let shown = tw.take(10).map(|f| f.text).collect::<Vec<_>>();
        assert_eq!(
            shown,
            vec!["A", "AB", "A", "", "C", "", "A", "AB", "A", ""]
        );
    }

    #[test]
    fn test_delays_follow_mode() {
        let config = TypingConfig {
            typing_speed: Duration::from_millis(150),
            deleting_speed: Duration::from_millis(100),
            pause: Duration::from_millis(2000),
        };
        let mut tw = Typewriter::new(["Hi"], config).unwrap();
        assert_eq!(tw.initial_delay(), Duration::from_millis(150));

        // "H"
        assert_eq!(tw.tick(), Duration::from_millis(150));
        assert_eq!(tw.mode(), Mode::Typing);
        // "Hi" holds for the pause, then deletes
        assert_eq!(tw.tick(), Duration::from_millis(2100));
        assert_eq!(tw.mode(), Mode::Deleting);
        assert_eq!(tw.text(), "Hi");
        // "H"
        assert_eq!(tw.tick(), Duration::from_millis(100));
        // "" and back to typing
        assert_eq!(tw.tick(), Duration::from_millis(150));
        assert_eq!(tw.mode(), Mode::Typing);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_single_character_phrase_full_cycle() {
        let mut tw = Typewriter::new(["x"], unit_config()).unwrap();
        tw.tick();
        assert_eq!(tw.text(), "x");
        assert_eq!(tw.mode(), Mode::Deleting);
        tw.tick();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.mode(), Mode::Typing);
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn test_phrase_index_wraps() {
        let mut tw = Typewriter::new(["a", "b", "c"], unit_config()).unwrap();
        let mut order = Vec::new();
        for _ in 0..3 {
            order.push(tw.phrase().to_string());
            tw.tick();
            tw.tick();
        }
        assert_eq!(order, vec!["a", "b", "c"]);
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn test_multibyte_phrase_never_splits() {
        let tw = Typewriter::new(["héllo ▹"], unit_config()).unwrap();
        let frames = tw.take(7).map(|f| f.text).collect::<Vec<_>>();
        assert_eq!(frames[1], "hé");
        assert_eq!(frames[6], "héllo ▹");
    }

    #[test]
    fn test_rejects_invalid_input() {
        let empty: [&str; 0] = [];
        assert_eq!(
            Typewriter::new(empty, unit_config()).unwrap_err(),
            TypingError::NoPhrases
        );
        assert_eq!(
            Typewriter::new(["ok", ""], unit_config()).unwrap_err(),
            TypingError::EmptyPhrase { index: 1 }
        );
        let zero = TypingConfig {
            deleting_speed: Duration::ZERO,
            ..unit_config()
        };
        assert_eq!(
            Typewriter::new(["ok"], zero).unwrap_err(),
            TypingError::ZeroSpeed
        );
    }

    proptest! {
        #[test]
        fn prop_text_is_prefix_and_phrases_never_skipped(
            phrases in prop::collection::vec("[a-zA-Z .]{1,12}", 1..6),
            ticks in 1usize..400,
        ) {
            let mut tw = Typewriter::new(phrases.clone(), unit_config()).unwrap();
            let mut expected_index = 0;
            for _ in 0..ticks {
                let before = tw.text().chars().count();
                let mode = tw.mode();
                tw.tick();
                let after = tw.text().chars().count();

                prop_assert!(phrases[tw.phrase_index()].starts_with(tw.text()));
                prop_assert!(after <= phrases[tw.phrase_index()].chars().count());
                match mode {
                    Mode::Typing => prop_assert_eq!(after, before + 1),
                    Mode::Deleting => prop_assert_eq!(after + 1, before),
                }
                if tw.phrase_index() != expected_index {
                    prop_assert_eq!(tw.phrase_index(), (expected_index + 1) % phrases.len());
                    prop_assert_eq!(after, 0);
                    expected_index = tw.phrase_index();
                }
            }
        }

        #[test]
        fn prop_cycle_length_is_twice_total_chars(
            phrases in prop::collection::vec("[a-z]{1,8}", 1..5),
        ) {
            let cycle = phrases.iter().map(|p| 2 * p.len()).sum::<usize>();
            let mut tw = Typewriter::new(phrases, unit_config()).unwrap();
            for _ in 0..cycle {
                tw.tick();
            }
            prop_assert_eq!(tw.text(), "");
            prop_assert_eq!(tw.phrase_index(), 0);
            prop_assert_eq!(tw.mode(), Mode::Typing);
        }
    }
}
