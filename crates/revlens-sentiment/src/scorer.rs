//! Lexicon-based polarity scoring.

use crate::lexicon::{lexicon_weight, BOOSTERS, DAMPENERS, NEGATORS};
use crate::types::PolarityScores;

/// How many preceding tokens are searched for a negator.
const NEGATION_WINDOW: usize = 3;

/// Scale applied by boosters ("very good") and, inverted, by dampeners.
const BOOST_SCALE: f64 = 1.25;
const DAMPEN_SCALE: f64 = 0.75;

/// Sign-flip scale for negated hits ("not good" is weaker than "bad").
const NEGATION_SCALE: f64 = 0.75;

/// Normalization constant for the compound score: `sum / sqrt(sum² + ALPHA)`.
const ALPHA: f64 = 15.0;

/// Maps a text string to deterministic polarity sub-scores.
///
/// The aggregation pipeline treats the scorer as an external capability and
/// only relies on this contract: identical input text yields identical
/// scores, `compound` is in `[-1, 1]`, and the sub-scores are bounded.
pub trait PolarityScorer {
    fn score(&self, text: &str) -> PolarityScores;
}

/// Word-weight scorer over the built-in product-review lexicon.
///
/// Tokenizes on whitespace, trims surrounding punctuation, lowercases, and
/// sums lexicon weights with three refinements: boosters/dampeners scale the
/// hit that follows them, and a negator within the preceding three tokens
/// flips and attenuates a hit. The summed valence is squashed through
/// `sum / sqrt(sum² + 15)` into `(-1, 1)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> PolarityScores {
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(normalize_token)
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.is_empty() {
            return PolarityScores::default();
        }

        let mut sum = 0.0_f64;
        let mut positive_mass = 0.0_f64;
        let mut negative_mass = 0.0_f64;
        let mut neutral_count = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(weight) = lexicon_weight(token) else {
                neutral_count += 1;
                continue;
            };

            let mut valence = weight;

            if i > 0 {
                let prev = tokens[i - 1].as_str();
                if BOOSTERS.contains(&prev) {
                    valence *= BOOST_SCALE;
                } else if DAMPENERS.contains(&prev) {
                    valence *= DAMPEN_SCALE;
                }
            }

            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i].iter().any(|t| is_negator(t)) {
                valence = -valence * NEGATION_SCALE;
            }

            sum += valence;
            if valence >= 0.0 {
                positive_mass += valence;
            } else {
                negative_mass += -valence;
            }
        }

        let compound = (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0);

        #[allow(clippy::cast_precision_loss)]
        let mass = positive_mass + negative_mass + neutral_count as f64;
        let (positive, negative, neutral) = if mass > 0.0 {
            #[allow(clippy::cast_precision_loss)]
            let neutral = neutral_count as f64 / mass;
            (positive_mass / mass, negative_mass / mass, neutral)
        } else {
            (0.0, 0.0, 0.0)
        };

        PolarityScores {
            positive,
            negative,
            neutral,
            compound,
        }
    }
}

/// Trims surrounding punctuation and lowercases. Interior punctuation
/// (apostrophes, hyphens) survives so contractions keep their shape.
fn normalize_token(raw: &str) -> String {
    raw.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase()
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token) || token.ends_with("n't")
}
