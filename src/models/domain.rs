use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Declares a lifestyle attribute enum.
///
/// Every variant carries its wire key and display label. Strings outside the
/// known set deserialize into `Unrecognized` so that scoring stays total.
macro_rules! lifestyle_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $wire:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// A value outside the known set, kept verbatim
            Unrecognized(String),
        }

        impl $name {
            /// All recognized values, in declaration order
            pub fn known() -> Vec<Self> {
                vec![$(Self::$variant),+]
            }

            /// Wire key, e.g. `night_owl`
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unrecognized(raw) => raw.as_str(),
                }
            }

            /// Short display label used for profile tags
            pub fn label(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Unrecognized(raw) => raw.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Unrecognized(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Unrecognized(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

lifestyle_enum! {
    SleepSchedule {
        EarlyBird => "early_bird", "Early Bird";
        NightOwl => "night_owl", "Night Owl";
        Flexible => "flexible", "Flexible";
    }
}

lifestyle_enum! {
    WorkSchedule {
        RegularOffice => "regular_office", "Office";
        RemoteWork => "remote_work", "Remote";
        NightShift => "night_shift", "Night Shift";
        Student => "student", "Student";
    }
}

lifestyle_enum! {
    DietaryPreference {
        Vegetarian => "vegetarian", "Vegetarian";
        NonVegetarian => "non_vegetarian", "Non-Veg";
        Vegan => "vegan", "Vegan";
        NoPreference => "no_preference", "Any Diet";
    }
}

lifestyle_enum! {
    Smoking {
        NonSmoker => "non_smoker", "Non-Smoker";
        OccasionalSmoker => "occasional_smoker", "Occasional";
        RegularSmoker => "regular_smoker", "Smoker";
    }
}

// Drinking, guests and pets have no tag labels; they display their wire key.
lifestyle_enum! {
    Drinking {
        NonDrinker => "non_drinker", "non_drinker";
        SocialDrinker => "social_drinker", "social_drinker";
        RegularDrinker => "regular_drinker", "regular_drinker";
    }
}

lifestyle_enum! {
    /// Ordered from strictest to most relaxed on the wire; see
    /// `Cleanliness::scale_index` for the scoring order.
    Cleanliness {
        VeryClean => "very_clean", "Very Clean";
        CleanFlexible => "clean_flexible", "Clean";
        ModeratelyClean => "moderately_clean", "Moderate";
        Relaxed => "relaxed", "Relaxed";
    }
}

lifestyle_enum! {
    GuestsPolicy {
        GuestsWelcome => "guests_welcome", "guests_welcome";
        GuestsWithNotice => "guests_with_notice", "guests_with_notice";
        OccasionalGuests => "occasional_guests", "occasional_guests";
        NoGuests => "no_guests", "no_guests";
    }
}

lifestyle_enum! {
    PetPreference {
        LovePets => "love_pets", "love_pets";
        OkayWithPets => "okay_with_pets", "okay_with_pets";
        NoPets => "no_pets", "no_pets";
    }
}

impl Cleanliness {
    /// Position on the relaxed → very clean scale, `None` if unrecognized
    pub fn scale_index(&self) -> Option<u8> {
        match self {
            Cleanliness::Relaxed => Some(0),
            Cleanliness::ModeratelyClean => Some(1),
            Cleanliness::CleanFlexible => Some(2),
            Cleanliness::VeryClean => Some(3),
            Cleanliness::Unrecognized(_) => None,
        }
    }
}

/// Lifestyle preferences of a single user
///
/// Every attribute is optional. The scorer reads profiles but never mutates
/// them; storage and validation belong to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifestyleProfile {
    #[serde(rename = "sleepSchedule", default, skip_serializing_if = "Option::is_none")]
    pub sleep_schedule: Option<SleepSchedule>,
    #[serde(rename = "workSchedule", default, skip_serializing_if = "Option::is_none")]
    pub work_schedule: Option<WorkSchedule>,
    #[serde(rename = "dietaryPreference", default, skip_serializing_if = "Option::is_none")]
    pub dietary_preference: Option<DietaryPreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoking: Option<Smoking>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drinking: Option<Drinking>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleanliness: Option<Cleanliness>,
    #[serde(rename = "guestsPolicy", default, skip_serializing_if = "Option::is_none")]
    pub guests_policy: Option<GuestsPolicy>,
    #[serde(rename = "petPreference", default, skip_serializing_if = "Option::is_none")]
    pub pet_preference: Option<PetPreference>,
}

impl LifestyleProfile {
    /// Whether the given attribute has a value
    pub fn is_set(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::SleepSchedule => self.sleep_schedule.is_some(),
            Attribute::WorkSchedule => self.work_schedule.is_some(),
            Attribute::DietaryPreference => self.dietary_preference.is_some(),
            Attribute::Smoking => self.smoking.is_some(),
            Attribute::Drinking => self.drinking.is_some(),
            Attribute::Cleanliness => self.cleanliness.is_some(),
            Attribute::GuestsPolicy => self.guests_policy.is_some(),
            Attribute::PetPreference => self.pet_preference.is_some(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Attribute::ALL.iter().all(|attribute| !self.is_set(*attribute))
    }

    /// Display tags for listing cards: sleep, diet, smoking, work, cleanliness
    pub fn tags(&self) -> Vec<(Attribute, String)> {
        let mut tags = Vec::new();

        if let Some(value) = &self.sleep_schedule {
            tags.push((Attribute::SleepSchedule, value.label().to_string()));
        }
        if let Some(value) = &self.dietary_preference {
            tags.push((Attribute::DietaryPreference, value.label().to_string()));
        }
        if let Some(value) = &self.smoking {
            tags.push((Attribute::Smoking, value.label().to_string()));
        }
        if let Some(value) = &self.work_schedule {
            tags.push((Attribute::WorkSchedule, value.label().to_string()));
        }
        if let Some(value) = &self.cleanliness {
            tags.push((Attribute::Cleanliness, value.label().to_string()));
        }

        tags
    }
}

/// Lifestyle attribute compared between two profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    SleepSchedule,
    WorkSchedule,
    DietaryPreference,
    Smoking,
    Drinking,
    Cleanliness,
    GuestsPolicy,
    PetPreference,
}

impl Attribute {
    pub const ALL: [Attribute; 8] = [
        Attribute::SleepSchedule,
        Attribute::WorkSchedule,
        Attribute::DietaryPreference,
        Attribute::Smoking,
        Attribute::Drinking,
        Attribute::Cleanliness,
        Attribute::GuestsPolicy,
        Attribute::PetPreference,
    ];

    /// Profile field key, e.g. `sleepSchedule`
    pub fn key(self) -> &'static str {
        match self {
            Attribute::SleepSchedule => "sleepSchedule",
            Attribute::WorkSchedule => "workSchedule",
            Attribute::DietaryPreference => "dietaryPreference",
            Attribute::Smoking => "smoking",
            Attribute::Drinking => "drinking",
            Attribute::Cleanliness => "cleanliness",
            Attribute::GuestsPolicy => "guestsPolicy",
            Attribute::PetPreference => "petPreference",
        }
    }

    /// Label shown in the strengths / concerns lists
    pub fn label(self) -> &'static str {
        match self {
            Attribute::SleepSchedule => "Sleep Schedule",
            Attribute::WorkSchedule => "Work Schedule",
            Attribute::DietaryPreference => "Dietary Preferences",
            Attribute::Smoking => "Smoking Habits",
            Attribute::Drinking => "Drinking Habits",
            Attribute::Cleanliness => "Cleanliness Standards",
            Attribute::GuestsPolicy => "Guest Policy",
            Attribute::PetPreference => "Pet Preferences",
        }
    }

    /// Share of the overall score; the eight weights sum to 1.0
    pub fn weight(self) -> f64 {
        match self {
            Attribute::SleepSchedule => 0.15,
            Attribute::WorkSchedule => 0.10,
            Attribute::DietaryPreference => 0.15,
            Attribute::Smoking => 0.20,
            Attribute::Drinking => 0.15,
            Attribute::Cleanliness => 0.15,
            Attribute::GuestsPolicy => 0.05,
            Attribute::PetPreference => 0.05,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How attributes missing from either profile enter the weighted average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsetPolicy {
    /// Drop unset attributes and renormalize over the shared ones
    #[default]
    Renormalize,
    /// Count unset attributes as a 0.5 sub-score at full weight
    Neutral,
}

/// Outcome of comparing two profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub score: u8,
    pub factors: BTreeMap<Attribute, f64>,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
}

impl CompatibilityResult {
    pub fn tier(&self) -> CompatibilityTier {
        CompatibilityTier::from_score(self.score)
    }

    /// Badge text shown on listing cards
    pub fn badge(&self) -> String {
        format!("{}% Match", self.score)
    }
}

/// Coarse bucket used for badge colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityTier {
    High,
    Medium,
    Low,
}

impl CompatibilityTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            CompatibilityTier::High
        } else if score >= 60 {
            CompatibilityTier::Medium
        } else {
            CompatibilityTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompatibilityTier::High => "High",
            CompatibilityTier::Medium => "Medium",
            CompatibilityTier::Low => "Low",
        }
    }
}

impl fmt::Display for CompatibilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Role of a user on the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    RoomSeeker,
    RoomOwner,
}

/// Lifecycle of a persisted match record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Matched,
}

/// Match record ready to be handed to the storage layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMatch {
    #[serde(rename = "seekerId")]
    pub seeker_id: String,
    #[serde(rename = "ownerId")]
    pub owner_id: String,
    #[serde(rename = "listingId")]
    pub listing_id: Option<i64>,
    /// Two-decimal string, matching the `numeric(5, 2)` column
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: String,
    pub status: MatchStatus,
}

/// A room listing to be ranked for a viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingCandidate {
    #[serde(rename = "listingId")]
    pub listing_id: i64,
    #[serde(rename = "ownerId")]
    pub owner_id: String,
    #[serde(rename = "ownerProfile", default)]
    pub owner_profile: Option<LifestyleProfile>,
}

/// Ranked listing result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedListing {
    #[serde(rename = "listingId")]
    pub listing_id: i64,
    #[serde(rename = "ownerId")]
    pub owner_id: String,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: u8,
    pub tier: CompatibilityTier,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let sum: f64 = Attribute::ALL.iter().map(|a| a.weight()).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unrecognized_value_roundtrip() {
        let value: SleepSchedule = serde_json::from_str("\"siesta\"").unwrap();
        assert_eq!(value, SleepSchedule::Unrecognized("siesta".to_string()));
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"siesta\"");

        let known: SleepSchedule = serde_json::from_str("\"night_owl\"").unwrap();
        assert_eq!(known, SleepSchedule::NightOwl);
    }

    #[test]
    fn test_profile_deserializes_camel_case() {
        let json = r#"{"sleepSchedule":"early_bird","petPreference":"no_pets"}"#;
        let profile: LifestyleProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.sleep_schedule, Some(SleepSchedule::EarlyBird));
        assert_eq!(profile.pet_preference, Some(PetPreference::NoPets));
        assert!(profile.smoking.is_none());
        assert!(!profile.is_empty());
    }

    #[test]
    fn test_tags_follow_card_order() {
        let profile = LifestyleProfile {
            sleep_schedule: Some(SleepSchedule::NightOwl),
            work_schedule: Some(WorkSchedule::RemoteWork),
            smoking: Some(Smoking::NonSmoker),
            drinking: Some(Drinking::SocialDrinker),
            ..Default::default()
        };

        let tags: Vec<String> = profile.tags().into_iter().map(|(_, label)| label).collect();
        assert_eq!(tags, vec!["Night Owl", "Non-Smoker", "Remote"]);
    }

    #[test]
    fn test_tier_bands() {
        assert_eq!(CompatibilityTier::from_score(100), CompatibilityTier::High);
        assert_eq!(CompatibilityTier::from_score(80), CompatibilityTier::High);
        assert_eq!(CompatibilityTier::from_score(79), CompatibilityTier::Medium);
        assert_eq!(CompatibilityTier::from_score(60), CompatibilityTier::Medium);
        assert_eq!(CompatibilityTier::from_score(59), CompatibilityTier::Low);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(CompatibilityTier::High.label(), "High");
        assert_eq!(CompatibilityTier::from_score(65).to_string(), "Medium");
        assert_eq!(CompatibilityTier::Low.to_string(), "Low");
        assert_eq!(serde_json::to_string(&CompatibilityTier::Low).unwrap(), "\"low\"");
    }

    #[test]
    fn test_factor_keys_serialize_as_profile_keys() {
        let mut factors = BTreeMap::new();
        factors.insert(Attribute::GuestsPolicy, 0.7);
        let json = serde_json::to_string(&factors).unwrap();
        assert_eq!(json, r#"{"guestsPolicy":0.7}"#);
    }
}
