//! Display-only verdicts over a judge-computed comparison payload.
//!
//! Nothing here decides a win: correctness comes from `Guess::is_correct`.
use crate::attributes::{Attribute, compare_keys};
use crate::play::{AttributePair, AttributeValue, Comparison, Scalar};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Same value, or the same set of values.
    Exact,
    /// Lists that overlap without being equal.
    Partial,
    /// No overlap, mismatched shapes, or a missing side.
    None,
}

impl Verdict {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Exact => "verdict-exact",
            Self::Partial => "verdict-partial",
            Self::None => "verdict-none",
        }
    }

    #[must_use]
    pub const fn square(self) -> &'static str {
        match self {
            Self::Exact => "🟩",
            Self::Partial => "🟨",
            Self::None => "🟥",
        }
    }
}

fn same_set(a: &[Scalar], b: &[Scalar]) -> bool {
    a.iter().all(|x| b.contains(x)) && b.iter().all(|y| a.contains(y))
}

/// Classify one attribute. Either side may be missing.
#[must_use]
pub fn classify(guessed: Option<&AttributeValue>, target: Option<&AttributeValue>) -> Verdict {
    match (guessed, target) {
        (Some(AttributeValue::Scalar(g)), Some(AttributeValue::Scalar(t))) => {
            if g == t {
                Verdict::Exact
            } else {
                Verdict::None
            }
        }
        (Some(AttributeValue::List(g)), Some(AttributeValue::List(t))) => {
            if same_set(g, t) {
                Verdict::Exact
            } else if g.iter().any(|x| t.contains(x)) {
                Verdict::Partial
            } else {
                Verdict::None
            }
        }
        _ => Verdict::None,
    }
}

#[must_use]
pub fn classify_pair(pair: &AttributePair) -> Verdict {
    classify(pair.guessed.as_ref(), pair.target.as_ref())
}

/// Verdict for one cell of a guess row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeVerdict {
    pub key: String,
    pub attribute: Option<Attribute>,
    pub verdict: Verdict,
    pub guessed: Option<AttributeValue>,
}

pub type VerdictRow = SmallVec<[AttributeVerdict; 8]>;

/// Classify every attribute of a payload, in table order.
#[must_use]
pub fn classify_comparison(comparison: &Comparison) -> VerdictRow {
    let mut row: VerdictRow = comparison
        .iter()
        .map(|(key, pair)| AttributeVerdict {
            key: key.clone(),
            attribute: Attribute::from_key(key),
            verdict: classify_pair(pair),
            guessed: pair.guessed.clone(),
        })
        .collect();
    row.sort_by(|a, b| compare_keys(&a.key, &b.key));
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> AttributeValue {
        AttributeValue::list(items.iter().copied())
    }

    fn text(s: &str) -> AttributeValue {
        AttributeValue::text(s)
    }

    #[test]
    fn identical_values_are_exact() {
        assert_eq!(classify(Some(&text("MALE")), Some(&text("MALE"))), Verdict::Exact);
        let x = list(&["a", "b"]);
        assert_eq!(classify(Some(&x), Some(&x)), Verdict::Exact);
        assert_eq!(
            classify(Some(&list(&["a", "b"])), Some(&list(&["b", "a"]))),
            Verdict::Exact
        );
    }

    #[test]
    fn scalars_compare_case_sensitively() {
        assert_eq!(classify(Some(&text("male")), Some(&text("MALE"))), Verdict::None);
    }

    #[test]
    fn overlapping_lists_are_partial() {
        assert_eq!(
            classify(Some(&list(&["a", "b"])), Some(&list(&["b", "c"]))),
            Verdict::Partial
        );
        assert_eq!(classify(Some(&list(&["a"])), Some(&list(&["c"]))), Verdict::None);
    }

    #[test]
    fn duplicates_collapse_in_set_equality() {
        assert_eq!(
            classify(Some(&list(&["a", "a", "b"])), Some(&list(&["b", "a"]))),
            Verdict::Exact
        );
    }

    #[test]
    fn empty_lists() {
        assert_eq!(classify(Some(&list(&[])), Some(&list(&[]))), Verdict::Exact);
        assert_eq!(classify(Some(&list(&[])), Some(&list(&["a"]))), Verdict::None);
    }

    #[test]
    fn mixed_or_missing_sides_are_none() {
        assert_eq!(classify(Some(&text("a")), Some(&list(&["a"]))), Verdict::None);
        assert_eq!(classify(None, Some(&text("a"))), Verdict::None);
        assert_eq!(classify(Some(&text("a")), None), Verdict::None);
        assert_eq!(classify(None, None), Verdict::None);
    }

    #[test]
    fn flags_compare_by_value() {
        let yes = AttributeValue::Scalar(Scalar::Flag(true));
        let no = AttributeValue::Scalar(Scalar::Flag(false));
        assert_eq!(classify(Some(&yes), Some(&yes)), Verdict::Exact);
        assert_eq!(classify(Some(&yes), Some(&no)), Verdict::None);
    }

    #[test]
    fn payload_rows_are_ordered_and_classified() {
        let mut comparison = Comparison::new();
        comparison.insert(
            "race".into(),
            AttributePair::new(list(&["Human"]), list(&["Human", "Ogre"])),
        );
        comparison.insert(
            "gender".into(),
            AttributePair::new(text("MALE"), text("MALE")),
        );
        comparison.insert("weapon".into(), AttributePair::default());

        let row = classify_comparison(&comparison);
        let summary: Vec<(&str, Verdict)> =
            row.iter().map(|c| (c.key.as_str(), c.verdict)).collect();
        assert_eq!(
            summary,
            vec![
                ("gender", Verdict::Exact),
                ("race", Verdict::Partial),
                ("weapon", Verdict::None),
            ]
        );
        assert_eq!(row[0].attribute, Some(Attribute::Gender));
        assert!(row[2].attribute.is_none());
    }
}
