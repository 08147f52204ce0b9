// File: src/core/tone.rs
use crate::core::types::Tone;
use std::collections::HashMap;

const COMBINING_ACUTE: char = '\u{0301}';
const COMBINING_GRAVE: char = '\u{0300}';

/// The three spellings of one vowel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneForms {
    pub high: String,
    /// Always the bare vowel.
    pub mid: String,
    pub low: String,
}

impl ToneForms {
    pub fn get(&self, tone: Tone) -> &str {
        match tone {
            Tone::High => &self.high,
            Tone::Mid => &self.mid,
            Tone::Low => &self.low,
        }
    }
}

/// Position of the main vowel inside a syllable, including any tone mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MainVowel {
    start: usize,
    end: usize,
    base: char,
}

/// Maps each base vowel to its high/mid/low spellings.
#[derive(Debug, Clone)]
pub struct ToneTable {
    forms: HashMap<char, ToneForms>,
    /// Single-character (precomposed) toned vowels back to their base.
    precomposed: HashMap<char, char>,
}

impl ToneTable {
    /// The Igbo table. Plain vowels use precomposed accented letters; the
    /// under-dotted vowels take a combining acute or grave.
    pub fn standard() -> Self {
        let plain = [
            ('a', 'á', 'à'),
            ('e', 'é', 'è'),
            ('i', 'í', 'ì'),
            ('o', 'ó', 'ò'),
            ('u', 'ú', 'ù'),
        ];
        let dotted = ['\u{1eb9}', '\u{1ecb}', '\u{1ecd}', '\u{1ee5}']; // ẹ ị ọ ụ

        let mut forms = HashMap::new();
        let mut precomposed = HashMap::new();
        for (base, high, low) in plain {
            forms.insert(
                base,
                ToneForms {
                    high: high.to_string(),
                    mid: base.to_string(),
                    low: low.to_string(),
                },
            );
            precomposed.insert(high, base);
            precomposed.insert(low, base);
        }
        for base in dotted {
            forms.insert(
                base,
                ToneForms {
                    high: format!("{base}{COMBINING_ACUTE}"),
                    mid: base.to_string(),
                    low: format!("{base}{COMBINING_GRAVE}"),
                },
            );
        }
        Self { forms, precomposed }
    }

    pub fn contains(&self, base: char) -> bool {
        self.forms.contains_key(&base)
    }

    fn base_of(&self, c: char) -> Option<char> {
        if self.forms.contains_key(&c) {
            Some(c)
        } else {
            self.precomposed.get(&c).copied()
        }
    }

    fn locate(&self, syllable: &str) -> Option<MainVowel> {
        let mut chars = syllable.char_indices().peekable();
        while let Some((start, c)) = chars.next() {
            let Some(base) = self.base_of(c) else {
                continue;
            };
            let mut end = start + c.len_utf8();
            if c == base {
                if let Some(&(_, mark)) = chars.peek() {
                    if mark == COMBINING_ACUTE || mark == COMBINING_GRAVE {
                        end += mark.len_utf8();
                    }
                }
            }
            return Some(MainVowel { start, end, base });
        }
        None
    }

    /// The base form of the first catalog vowel in `syllable`, if any.
    pub fn find_main_vowel(&self, syllable: &str) -> Option<char> {
        self.locate(syllable).map(|v| v.base)
    }

    /// Marks the main vowel of `syllable` with `tone`.
    ///
    /// Only the first catalog vowel is touched. A tone mark it already
    /// carries is replaced, so mid always yields the bare spelling. Input
    /// without any catalog vowel comes back unchanged.
    pub fn apply_tone(&self, syllable: &str, tone: Tone) -> String {
        let Some((vowel, forms)) = self
            .locate(syllable)
            .and_then(|v| self.forms.get(&v.base).map(|forms| (v, forms)))
        else {
            tracing::warn!(target: "roots.tone", syllable, %tone, "no catalog vowel, tone not applied");
            return syllable.to_string();
        };
        let mut result = String::with_capacity(syllable.len() + 2);
        result.push_str(&syllable[..vowel.start]);
        result.push_str(forms.get(tone));
        result.push_str(&syllable[vowel.end..]);
        result
    }
}

impl Default for ToneTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VOWELS: [&str; 9] = ["a", "ẹ", "ị", "ọ", "ụ", "e", "i", "o", "u"];

    #[test]
    fn marks_high_tone_on_plain_vowel() {
        let table = ToneTable::standard();
        assert_eq!(table.apply_tone("ma", Tone::High), "má");
        assert_eq!(table.apply_tone("ma", Tone::Low), "mà");
    }

    #[test]
    fn mid_tone_is_identity_on_bare_syllables() {
        let table = ToneTable::standard();
        for v in ALL_VOWELS {
            let syllable = format!("gb{v}");
            assert_eq!(table.apply_tone(&syllable, Tone::Mid), syllable);
        }
    }

    #[test]
    fn dotted_vowels_take_combining_marks() {
        let table = ToneTable::standard();
        assert_eq!(table.apply_tone("kpọ", Tone::High), "kpọ\u{301}");
        assert_eq!(table.apply_tone("bị", Tone::Low), "bị\u{300}");
    }

    #[test]
    fn mid_absorbs_a_previous_tone() {
        let table = ToneTable::standard();
        for v in ALL_VOWELS {
            let syllable = format!("s{v}");
            let high = table.apply_tone(&syllable, Tone::High);
            assert_ne!(high, syllable);
            assert_eq!(
                table.apply_tone(&high, Tone::Mid),
                table.apply_tone(&syllable, Tone::Mid),
                "mid should strip the tone from '{high}'"
            );
        }
    }

    #[test]
    fn retoning_replaces_the_existing_mark() {
        let table = ToneTable::standard();
        assert_eq!(table.apply_tone("má", Tone::Low), "mà");
        assert_eq!(table.apply_tone("nwụ\u{301}", Tone::Low), "nwụ\u{300}");
    }

    #[test]
    fn only_the_first_vowel_is_marked() {
        let table = ToneTable::standard();
        assert_eq!(table.apply_tone("mama", Tone::High), "máma");
    }

    #[test]
    fn input_without_a_vowel_is_unchanged_for_every_tone() {
        let table = ToneTable::standard();
        for input in ["m\u{329}", "gb", "", "xyz"] {
            for tone in Tone::ALL {
                assert_eq!(table.apply_tone(input, tone), input);
            }
        }
    }

    #[derive(Clone, Default)]
    struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn warns_when_there_is_no_vowel_to_mark() {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let table = ToneTable::standard();
        tracing::subscriber::with_default(subscriber, || {
            table.apply_tone("gb", Tone::High);
            table.apply_tone("ma", Tone::High);
        });

        let log = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let warnings: Vec<&str> = log.lines().filter(|l| l.contains("WARN")).collect();
        assert_eq!(warnings.len(), 1, "log was: {log}");
        assert!(warnings[0].contains("roots.tone"));
        assert!(warnings[0].contains("gb"));
    }

    #[test]
    fn finds_base_vowel_behind_tone_marks() {
        let table = ToneTable::standard();
        assert_eq!(table.find_main_vowel("shọ\u{300}"), Some('ọ'));
        assert_eq!(table.find_main_vowel("mé"), Some('e'));
        assert_eq!(table.find_main_vowel("ṅ"), None);
    }
}
