//! Word-weight lexicon for product-review sentiment.

/// Sentiment word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. Weights feed the compound normalizer, so
/// a single strong word (|weight| >= 0.45) is enough to leave the neutral
/// dead zone while mild words need reinforcement.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("great", 0.45),
    ("good", 0.3),
    ("excellent", 0.6),
    ("amazing", 0.55),
    ("awesome", 0.5),
    ("fantastic", 0.55),
    ("wonderful", 0.5),
    ("perfect", 0.5),
    ("perfectly", 0.5),
    ("love", 0.55),
    ("loved", 0.55),
    ("best", 0.5),
    ("superb", 0.5),
    ("happy", 0.4),
    ("satisfied", 0.4),
    ("recommend", 0.4),
    ("recommended", 0.4),
    ("quality", 0.25),
    ("worth", 0.3),
    ("value", 0.25),
    ("nice", 0.3),
    ("fast", 0.25),
    ("quick", 0.25),
    ("easy", 0.3),
    ("reliable", 0.4),
    ("durable", 0.35),
    ("impressed", 0.45),
    ("pleased", 0.4),
    ("comfortable", 0.35),
    ("beautiful", 0.4),
    ("sturdy", 0.35),
    // Negative signals
    ("bad", -0.4),
    ("terrible", -0.6),
    ("awful", -0.6),
    ("horrible", -0.65),
    ("worst", -0.65),
    ("poor", -0.45),
    ("hate", -0.6),
    ("hated", -0.6),
    ("broken", -0.5),
    ("broke", -0.5),
    ("defective", -0.55),
    ("useless", -0.55),
    ("waste", -0.5),
    ("disappointed", -0.5),
    ("disappointing", -0.5),
    ("disappointment", -0.5),
    ("refund", -0.4),
    ("return", -0.25),
    ("returned", -0.3),
    ("slow", -0.25),
    ("cheap", -0.25),
    ("flimsy", -0.4),
    ("faulty", -0.5),
    ("problem", -0.3),
    ("problems", -0.3),
    ("issue", -0.3),
    ("issues", -0.3),
    ("buggy", -0.45),
    ("crashes", -0.45),
    ("crashed", -0.45),
    ("frustrating", -0.45),
    ("ripoff", -0.6),
    ("overpriced", -0.4),
    ("misleading", -0.45),
    ("damaged", -0.45),
];

/// Intensity boosters: scale the following sentiment hit up.
pub(crate) const BOOSTERS: &[&str] = &[
    "very",
    "really",
    "extremely",
    "absolutely",
    "incredibly",
    "truly",
    "so",
    "super",
];

/// Dampeners: scale the following sentiment hit down.
pub(crate) const DAMPENERS: &[&str] = &["slightly", "somewhat", "barely", "fairly", "kinda"];

/// Negators: flip a sentiment hit within the preceding window.
/// Contractions ending in "n't" are handled separately by the scorer.
pub(crate) const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "cannot", "cant", "dont", "didnt", "doesnt", "isnt", "wasnt",
    "wont", "couldnt", "wouldnt", "hardly",
];

/// Looks up a normalized (lowercase) token in the lexicon.
pub(crate) fn lexicon_weight(token: &str) -> Option<f64> {
    LEXICON
        .iter()
        .find(|&&(word, _)| word == token)
        .map(|&(_, weight)| weight)
}
