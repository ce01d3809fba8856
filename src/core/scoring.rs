use std::collections::BTreeMap;
use crate::models::{Attribute, CompatibilityResult, LifestyleProfile, UnsetPolicy};
use crate::core::rules::{pair_score, NEUTRAL};

/// Score returned when the two profiles share no attribute
pub const FALLBACK_SCORE: u8 = 50;

/// Sub-scores at or above this are listed as strengths
pub const STRENGTH_THRESHOLD: f64 = 0.8;

/// Sub-scores at or below this are listed as concerns
pub const CONCERN_THRESHOLD: f64 = 0.4;

/// Sub-score of one attribute, `None` if either profile leaves it unset
pub fn attribute_score(
    attribute: Attribute,
    a: &LifestyleProfile,
    b: &LifestyleProfile,
) -> Option<f64> {
    match attribute {
        Attribute::SleepSchedule => pair_score(a.sleep_schedule.as_ref(), b.sleep_schedule.as_ref()),
        Attribute::WorkSchedule => pair_score(a.work_schedule.as_ref(), b.work_schedule.as_ref()),
        Attribute::DietaryPreference => {
            pair_score(a.dietary_preference.as_ref(), b.dietary_preference.as_ref())
        }
        Attribute::Smoking => pair_score(a.smoking.as_ref(), b.smoking.as_ref()),
        Attribute::Drinking => pair_score(a.drinking.as_ref(), b.drinking.as_ref()),
        Attribute::Cleanliness => pair_score(a.cleanliness.as_ref(), b.cleanliness.as_ref()),
        Attribute::GuestsPolicy => pair_score(a.guests_policy.as_ref(), b.guests_policy.as_ref()),
        Attribute::PetPreference => {
            pair_score(a.pet_preference.as_ref(), b.pet_preference.as_ref())
        }
    }
}

/// Compatibility scorer for pairs of lifestyle profiles
///
/// Scoring formula:
/// score = round(100 * Σ(subscore_i * weight_i) / Σ(weight_i))
///
/// Which attributes enter the sums depends on the [`UnsetPolicy`]. The same
/// policy drives both the full result and the persisted score, so the two
/// can never disagree.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    policy: UnsetPolicy,
}

impl Scorer {
    pub fn new(policy: UnsetPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnsetPolicy {
        self.policy
    }

    /// Score two profiles with a per-attribute breakdown
    pub fn score(&self, a: &LifestyleProfile, b: &LifestyleProfile) -> CompatibilityResult {
        let sub_scores = sub_scores(a, b);
        let score = self.combine(&sub_scores);

        let mut factors = BTreeMap::new();
        let mut strengths = Vec::new();
        let mut concerns = Vec::new();

        for (attribute, sub_score) in sub_scores {
            let factor = sub_score.unwrap_or(NEUTRAL);
            factors.insert(attribute, factor);

            if factor >= STRENGTH_THRESHOLD {
                strengths.push(attribute.label().to_string());
            } else if factor <= CONCERN_THRESHOLD {
                concerns.push(attribute.label().to_string());
            }
        }

        tracing::trace!(
            score,
            strengths = strengths.len(),
            concerns = concerns.len(),
            "scored profile pair"
        );

        CompatibilityResult {
            score,
            factors,
            strengths,
            concerns,
        }
    }

    /// Integer score only, as stored on match records
    pub fn match_score(&self, a: &LifestyleProfile, b: &LifestyleProfile) -> u8 {
        self.combine(&sub_scores(a, b))
    }

    /// Score formatted for a `numeric(5, 2)` column, e.g. `"84.00"`
    pub fn persisted_score(&self, a: &LifestyleProfile, b: &LifestyleProfile) -> String {
        format!("{:.2}", f64::from(self.match_score(a, b)))
    }

    fn combine(&self, sub_scores: &[(Attribute, Option<f64>)]) -> u8 {
        let mut weighted = 0.0;
        let mut total_weight = 0.0;

        for (attribute, sub_score) in sub_scores {
            let value = match (sub_score, self.policy) {
                (Some(value), _) => *value,
                (None, UnsetPolicy::Neutral) => NEUTRAL,
                (None, UnsetPolicy::Renormalize) => continue,
            };
            weighted += value * attribute.weight();
            total_weight += attribute.weight();
        }

        to_percentage(weighted, total_weight)
    }
}

fn sub_scores(a: &LifestyleProfile, b: &LifestyleProfile) -> [(Attribute, Option<f64>); 8] {
    Attribute::ALL.map(|attribute| (attribute, attribute_score(attribute, a, b)))
}

#[inline]
fn to_percentage(weighted: f64, total_weight: f64) -> u8 {
    if total_weight <= 0.0 {
        return FALLBACK_SCORE;
    }

    // Snap float noise first so exact halves always round up
    let raw = weighted / total_weight * 100.0;
    let percentage = ((raw * 1e9).round() / 1e9).round();
    percentage.min(100.0).max(0.0) as u8
}

/// Score two profiles with the default scorer
pub fn calculate_compatibility(a: &LifestyleProfile, b: &LifestyleProfile) -> CompatibilityResult {
    Scorer::default().score(a, b)
}
