//! Rule-based polarity scoring for review text.
//!
//! Stands in for an external lexical-sentiment collaborator: a pure
//! function from a text to a single polarity score in [-1, 1]. Word
//! valences are averaged over every lexicon hit, with negation words
//! flipping the sign of the next hit and intensifiers scaling it.

use std::collections::HashMap;

/// Valence lexicon over common service-review vocabulary.
pub struct PolarityLexicon {
    words: HashMap<&'static str, f64>,
    negations: Vec<&'static str>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for PolarityLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityLexicon {
    pub fn new() -> Self {
        let mut words = HashMap::new();

        let positive_words = [
            ("excellent", 0.9),
            ("amazing", 0.9),
            ("fantastic", 0.9),
            ("wonderful", 0.9),
            ("perfect", 0.9),
            ("awesome", 0.8),
            ("great", 0.8),
            ("best", 0.8),
            ("love", 0.7),
            ("loved", 0.7),
            ("comfortable", 0.7),
            ("good", 0.6),
            ("friendly", 0.6),
            ("polite", 0.6),
            ("helpful", 0.6),
            ("clean", 0.6),
            ("smooth", 0.6),
            ("professional", 0.6),
            ("courteous", 0.6),
            ("reliable", 0.6),
            ("punctual", 0.6),
            ("pleasant", 0.6),
            ("nice", 0.5),
            ("quick", 0.5),
            ("prompt", 0.5),
            ("safe", 0.5),
            ("easy", 0.4),
            ("fair", 0.4),
            ("fine", 0.3),
        ];

        let negative_words = [
            ("terrible", -0.9),
            ("horrible", -0.9),
            ("awful", -0.9),
            ("worst", -0.9),
            ("scam", -0.9),
            ("fraud", -0.9),
            ("reckless", -0.8),
            ("disgusting", -0.8),
            ("unacceptable", -0.8),
            ("rude", -0.7),
            ("uncomfortable", -0.7),
            ("unsafe", -0.7),
            ("unprofessional", -0.7),
            ("overcharged", -0.7),
            ("disappointing", -0.7),
            ("disappointed", -0.7),
            ("bad", -0.6),
            ("poor", -0.6),
            ("dirty", -0.6),
            ("unhelpful", -0.6),
            ("annoying", -0.6),
            ("smelly", -0.6),
            ("noisy", -0.5),
            ("wrong", -0.5),
            ("lost", -0.5),
            ("ignored", -0.5),
            ("late", -0.4),
            ("slow", -0.4),
            ("cancelled", -0.4),
            ("canceled", -0.4),
            ("delayed", -0.4),
            ("expensive", -0.3),
        ];

        for (word, score) in positive_words {
            words.insert(word, score);
        }
        for (word, score) in negative_words {
            words.insert(word, score);
        }

        let negations = vec![
            "not", "no", "never", "neither", "nobody", "nothing", "none", "cannot", "cant",
            "can't", "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "won't", "wont",
            "wouldn't", "wouldnt", "isn't", "isnt", "wasn't", "wasnt", "hardly", "barely",
        ];

        let mut intensifiers = HashMap::new();
        intensifiers.insert("very", 1.5);
        intensifiers.insert("extremely", 2.0);
        intensifiers.insert("really", 1.4);
        intensifiers.insert("super", 1.5);
        intensifiers.insert("incredibly", 1.8);
        intensifiers.insert("quite", 1.2);
        intensifiers.insert("too", 1.3);
        intensifiers.insert("slightly", 0.5);
        intensifiers.insert("somewhat", 0.7);

        Self {
            words,
            negations,
            intensifiers,
        }
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word)
    }

    /// Scores `text`, returning a polarity in [-1, 1]. Texts with no
    /// lexicon hits score 0.
    pub fn polarity(&self, text: &str) -> f64 {
        let mut scores: Vec<f64> = Vec::new();

        let mut negate_next = false;
        let mut intensifier: f64 = 1.0;

        for token in tokenize(text) {
            if self.is_negation(&token) {
                negate_next = true;
                continue;
            }

            if let Some(mult) = self.intensifiers.get(token.as_str()) {
                intensifier = *mult;
                continue;
            }

            if let Some(mut score) = self.words.get(token.as_str()).copied() {
                if negate_next {
                    score = -score;
                    negate_next = false;
                }
                score *= intensifier;
                intensifier = 1.0;
                scores.push(score);
            } else {
                // Modifiers only reach across one ordinary word
                negate_next = false;
                intensifier = 1.0;
            }
        }

        if scores.is_empty() {
            return 0.0;
        }

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

/// Lowercases and strips surrounding punctuation from each whitespace token.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(|raw| {
        let token: String = raw
            .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
            .to_lowercase();
        if token.is_empty() { None } else { Some(token) }
    })
}
