use crate::models::{
    Cleanliness, DietaryPreference, Drinking, GuestsPolicy, PetPreference, SleepSchedule, Smoking,
    WorkSchedule,
};

/// Sub-score for identical values
pub const EXACT_MATCH: f64 = 1.0;

/// Sub-score reported when either profile leaves an attribute unset
pub const NEUTRAL: f64 = 0.5;

/// Lower bound of the cleanliness decay
pub const CLEANLINESS_FLOOR: f64 = 0.3;

/// Per-step penalty on the cleanliness scale
const CLEANLINESS_STEP: f64 = 0.25;

/// Pairwise compatibility of two values of one lifestyle attribute
///
/// Implementations return a sub-score in `0.0..=1.0`, give `1.0` for equal
/// values and are symmetric: `a.compatibility(b) == b.compatibility(a)`.
///
/// Unrecognized values are only equal to the identical unrecognized value.
/// Otherwise they fall through to the rule's generic branch.
pub trait Compatible {
    fn compatibility(&self, other: &Self) -> f64;
}

/// Sub-score for an attribute that may be unset on either side
#[inline]
pub fn pair_score<T: Compatible>(a: Option<&T>, b: Option<&T>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.compatibility(b)),
        _ => None,
    }
}

impl Compatible for SleepSchedule {
    fn compatibility(&self, other: &Self) -> f64 {
        if self == other {
            return EXACT_MATCH;
        }
        if *self == SleepSchedule::Flexible || *other == SleepSchedule::Flexible {
            return 0.8;
        }
        // early_bird vs night_owl
        0.3
    }
}

impl Compatible for WorkSchedule {
    fn compatibility(&self, other: &Self) -> f64 {
        use WorkSchedule::*;

        if self == other {
            return EXACT_MATCH;
        }
        match (self, other) {
            (RemoteWork, Student)
            | (Student, RemoteWork)
            | (RegularOffice, Student)
            | (Student, RegularOffice) => 0.7,
            _ => 0.4,
        }
    }
}

impl Compatible for DietaryPreference {
    fn compatibility(&self, other: &Self) -> f64 {
        use DietaryPreference::*;

        if self == other {
            return EXACT_MATCH;
        }
        if *self == NoPreference || *other == NoPreference {
            return 0.8;
        }
        match (self, other) {
            (Vegetarian, Vegan) | (Vegan, Vegetarian) => 0.9,
            _ => 0.6,
        }
    }
}

impl Compatible for Smoking {
    fn compatibility(&self, other: &Self) -> f64 {
        if self == other {
            return EXACT_MATCH;
        }
        // Values differ, so at most one side is a non-smoker
        if *self == Smoking::NonSmoker || *other == Smoking::NonSmoker {
            return 0.2;
        }
        0.6
    }
}

impl Compatible for Drinking {
    fn compatibility(&self, other: &Self) -> f64 {
        use Drinking::*;

        if self == other {
            return EXACT_MATCH;
        }
        match (self, other) {
            (NonDrinker, RegularDrinker) | (RegularDrinker, NonDrinker) => 0.3,
            _ => 0.7,
        }
    }
}

impl Compatible for Cleanliness {
    fn compatibility(&self, other: &Self) -> f64 {
        if self == other {
            return EXACT_MATCH;
        }
        match (self.scale_index(), other.scale_index()) {
            (Some(a), Some(b)) => {
                let distance = f64::from(a.abs_diff(b));
                (1.0 - distance * CLEANLINESS_STEP).max(CLEANLINESS_FLOOR)
            }
            // An unrecognized level has no position on the scale
            _ => CLEANLINESS_FLOOR,
        }
    }
}

impl Compatible for GuestsPolicy {
    fn compatibility(&self, other: &Self) -> f64 {
        use GuestsPolicy::*;

        if self == other {
            return EXACT_MATCH;
        }
        match (self, other) {
            (NoGuests, GuestsWelcome) | (GuestsWelcome, NoGuests) => 0.2,
            _ => 0.7,
        }
    }
}

impl Compatible for PetPreference {
    fn compatibility(&self, other: &Self) -> f64 {
        use PetPreference::*;

        if self == other {
            return EXACT_MATCH;
        }
        match (self, other) {
            (NoPets, LovePets) | (LovePets, NoPets) => 0.2,
            _ => 0.7,
        }
    }
}
