use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One doctor as returned by the listing endpoint.
///
/// Only `id` and `name` are required; display fields fall back to empty values so
/// a sparse record still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_initials: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub doctor_introduction: String,
    #[serde(default)]
    pub specialities: Vec<Specialty>,
    #[serde(default)]
    pub fees: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub clinic: Clinic,
    #[serde(default)]
    pub video_consult: bool,
    #[serde(default)]
    pub in_clinic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clinic {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address_line1: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub logo_url: String,
}

impl Doctor {
    pub fn has_specialty(&self, name: &str) -> bool {
        self.specialities.iter().any(|s| s.name == name)
    }

    pub fn supports(&self, mode: ConsultationType) -> bool {
        match mode {
            ConsultationType::VideoConsult => self.video_consult,
            ConsultationType::InClinic => self.in_clinic,
        }
    }

    /// Fee as an integer: every non-digit is dropped, unparsable input is 0.
    pub fn fee_value(&self) -> u64 {
        let digits: String = self.fees.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse().unwrap_or(0)
    }

    /// Leading digits of the first whitespace-delimited token of `experience`, or 0.
    pub fn experience_years(&self) -> u32 {
        self.experience
            .split_whitespace()
            .next()
            .map(|token| {
                let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
                digits.parse().unwrap_or(0)
            })
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationType {
    VideoConsult,
    InClinic,
}

impl ConsultationType {
    pub const ACCEPTED: &'static [&'static str] = &["video_consult", "in_clinic"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationType::VideoConsult => "video_consult",
            ConsultationType::InClinic => "in_clinic",
        }
    }
}

impl FromStr for ConsultationType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "video_consult" => Ok(ConsultationType::VideoConsult),
            "in_clinic" => Ok(ConsultationType::InClinic),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Lowest fee first.
    Fees,
    /// Most experienced first.
    Experience,
}

impl SortBy {
    pub const ACCEPTED: &'static [&'static str] = &["fees", "experience"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Fees => "fees",
            SortBy::Experience => "experience",
        }
    }
}

impl FromStr for SortBy {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "fees" => Ok(SortBy::Fees),
            "experience" => Ok(SortBy::Experience),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value '{}'", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

/// The search/mode/specialty/sort selection currently in effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub consultation_type: Option<ConsultationType>,
    /// Insertion-ordered set: members are unique.
    pub specialties: Vec<String>,
    pub sort_by: Option<SortBy>,
}

impl FilterState {
    /// Adds or removes a specialty, keeping the set free of duplicates.
    pub fn toggle_specialty(&mut self, name: &str, checked: bool) {
        let present = self.specialties.iter().any(|s| s == name);
        if checked && !present {
            self.specialties.push(name.to_string());
        } else if !checked && present {
            self.specialties.retain(|s| s != name);
        }
    }
}

/// A partial update to [`FilterState`]. `None` leaves a field untouched;
/// for the enum fields `Some(None)` clears the constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChange {
    pub search: Option<String>,
    pub consultation_type: Option<Option<ConsultationType>>,
    pub specialties: Option<Vec<String>>,
    pub sort_by: Option<Option<SortBy>>,
}

impl FilterChange {
    pub fn apply_to(self, state: &mut FilterState) {
        if let Some(search) = self.search {
            state.search = search;
        }
        if let Some(mode) = self.consultation_type {
            state.consultation_type = mode;
        }
        if let Some(specialties) = self.specialties {
            state.specialties.clear();
            for name in specialties {
                state.toggle_specialty(&name, true);
            }
        }
        if let Some(sort_by) = self.sort_by {
            state.sort_by = sort_by;
        }
    }
}
