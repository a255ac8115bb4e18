//! Type-safe enumerations for the study-unit model.
//!
//! These enums are the closed vocabularies every authored record is
//! normalized to. Section and track codes match the identifiers used in
//! the authored content (`FAR`, `CIA1`, `SEE2`, ...); adding a new
//! certification track means extending these enums, never inventing an
//! ad hoc string value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Certification track contributing content to the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Track {
    /// Certified Public Accountant (AICPA) - native canonical content.
    Cpa,
    /// Certified Internal Auditor (IIA).
    Cia,
    /// Enrolled Agent (IRS SEE).
    Ea,
    /// Certified Financial Planner (CFP Board).
    Cfp,
}

impl Track {
    /// Every registered track, in aggregation order.
    pub const ALL: [Track; 4] = [Track::Cpa, Track::Cia, Track::Ea, Track::Cfp];

    /// Returns the track code as it appears in content ids and tooling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Track::Cpa => "CPA",
            Track::Cia => "CIA",
            Track::Ea => "EA",
            Track::Cfp => "CFP",
        }
    }

    /// Returns the human-readable program name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Track::Cpa => "Certified Public Accountant",
            Track::Cia => "Certified Internal Auditor",
            Track::Ea => "Enrolled Agent",
            Track::Cfp => "Certified Financial Planner",
        }
    }

    /// Returns the sections belonging to this track.
    pub fn sections(&self) -> &'static [Section] {
        match self {
            Track::Cpa => &[
                Section::Far,
                Section::Aud,
                Section::Reg,
                Section::Tcp,
                Section::Isc,
                Section::Bar,
            ],
            Track::Cia => &[Section::Cia1, Section::Cia2, Section::Cia3],
            Track::Ea => &[Section::See1, Section::See2, Section::See3],
            Track::Cfp => &[Section::Cfp],
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Track {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CPA" => Ok(Track::Cpa),
            "CIA" => Ok(Track::Cia),
            "EA" => Ok(Track::Ea),
            "CFP" => Ok(Track::Cfp),
            _ => Err(format!("Unknown track: {s}")),
        }
    }
}

/// Exam section identifier, the registered closed set across all tracks.
///
/// CPA contributes the three core sections plus the three discipline
/// sections; CIA and the IRS SEE contribute their three exam parts; the
/// CFP exam is a single sitting and contributes one section (its
/// principal-knowledge domains live in `StudyUnit::blueprint_area`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Section {
    /// Financial Accounting and Reporting (CPA core).
    Far,
    /// Auditing and Attestation (CPA core).
    Aud,
    /// Taxation and Regulation (CPA core).
    Reg,
    /// Tax Compliance and Planning (CPA discipline).
    Tcp,
    /// Information Systems and Controls (CPA discipline).
    Isc,
    /// Business Analysis and Reporting (CPA discipline).
    Bar,
    /// Essentials of Internal Auditing (CIA Part 1).
    Cia1,
    /// Practice of Internal Auditing (CIA Part 2).
    Cia2,
    /// Business Knowledge for Internal Auditing (CIA Part 3).
    Cia3,
    /// Individuals (SEE Part 1).
    See1,
    /// Businesses (SEE Part 2).
    See2,
    /// Representation, Practices and Procedures (SEE Part 3).
    See3,
    /// CFP certification exam (single section).
    Cfp,
}

impl Section {
    /// Every registered section, grouped by track in aggregation order.
    pub const ALL: [Section; 13] = [
        Section::Far,
        Section::Aud,
        Section::Reg,
        Section::Tcp,
        Section::Isc,
        Section::Bar,
        Section::Cia1,
        Section::Cia2,
        Section::Cia3,
        Section::See1,
        Section::See2,
        Section::See3,
        Section::Cfp,
    ];

    /// Returns the section code as authored in content (e.g. "FAR", "CIA1").
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Far => "FAR",
            Section::Aud => "AUD",
            Section::Reg => "REG",
            Section::Tcp => "TCP",
            Section::Isc => "ISC",
            Section::Bar => "BAR",
            Section::Cia1 => "CIA1",
            Section::Cia2 => "CIA2",
            Section::Cia3 => "CIA3",
            Section::See1 => "SEE1",
            Section::See2 => "SEE2",
            Section::See3 => "SEE3",
            Section::Cfp => "CFP",
        }
    }

    /// Returns the official section title.
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Far => "Financial Accounting and Reporting",
            Section::Aud => "Auditing and Attestation",
            Section::Reg => "Taxation and Regulation",
            Section::Tcp => "Tax Compliance and Planning",
            Section::Isc => "Information Systems and Controls",
            Section::Bar => "Business Analysis and Reporting",
            Section::Cia1 => "Essentials of Internal Auditing",
            Section::Cia2 => "Practice of Internal Auditing",
            Section::Cia3 => "Business Knowledge for Internal Auditing",
            Section::See1 => "Individuals",
            Section::See2 => "Businesses",
            Section::See3 => "Representation, Practices and Procedures",
            Section::Cfp => "CFP Certification Examination",
        }
    }

    /// Returns the track this section belongs to. Every section belongs
    /// to exactly one track.
    pub fn track(&self) -> Track {
        match self {
            Section::Far
            | Section::Aud
            | Section::Reg
            | Section::Tcp
            | Section::Isc
            | Section::Bar => Track::Cpa,
            Section::Cia1 | Section::Cia2 | Section::Cia3 => Track::Cia,
            Section::See1 | Section::See2 | Section::See3 => Track::Ea,
            Section::Cfp => Track::Cfp,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    /// Parse a section code (case-insensitive, trimmed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FAR" => Ok(Section::Far),
            "AUD" => Ok(Section::Aud),
            "REG" => Ok(Section::Reg),
            "TCP" => Ok(Section::Tcp),
            "ISC" => Ok(Section::Isc),
            "BAR" => Ok(Section::Bar),
            "CIA1" => Ok(Section::Cia1),
            "CIA2" => Ok(Section::Cia2),
            "CIA3" => Ok(Section::Cia3),
            "SEE1" => Ok(Section::See1),
            "SEE2" => Ok(Section::See2),
            "SEE3" => Ok(Section::See3),
            "CFP" => Ok(Section::Cfp),
            _ => Err(format!("Unknown section: {s}")),
        }
    }
}

/// Canonical content type, the closed 6-way vocabulary every track's
/// native card kinds are mapped onto. No seventh value may leak through
/// an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Definition,
    Formula,
    Mnemonic,
    Comparison,
    Concept,
    Rule,
}

impl ContentType {
    /// All six canonical content types.
    pub const ALL: [ContentType; 6] = [
        ContentType::Definition,
        ContentType::Formula,
        ContentType::Mnemonic,
        ContentType::Comparison,
        ContentType::Concept,
        ContentType::Rule,
    ];

    /// Returns the lowercase code as authored in content.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Definition => "definition",
            ContentType::Formula => "formula",
            ContentType::Mnemonic => "mnemonic",
            ContentType::Comparison => "comparison",
            ContentType::Concept => "concept",
            ContentType::Rule => "rule",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "definition" => Ok(ContentType::Definition),
            "formula" => Ok(ContentType::Formula),
            "mnemonic" => Ok(ContentType::Mnemonic),
            "comparison" => Ok(ContentType::Comparison),
            "concept" => Ok(ContentType::Concept),
            "rule" => Ok(ContentType::Rule),
            _ => Err(format!("Unknown content type: {s}")),
        }
    }
}

/// Difficulty rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All three difficulty levels, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Unknown difficulty: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_from_str() {
        assert_eq!("FAR".parse::<Section>().unwrap(), Section::Far);
        assert_eq!(" cia2 ".parse::<Section>().unwrap(), Section::Cia2);
        assert_eq!("see1".parse::<Section>().unwrap(), Section::See1);
        assert!("QRS".parse::<Section>().is_err());
    }

    #[test]
    fn test_section_roundtrip() {
        for section in Section::ALL {
            assert_eq!(section.as_str().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn test_track_sections_partition() {
        let mut seen = Vec::new();
        for track in Track::ALL {
            for section in track.sections() {
                assert_eq!(section.track(), track);
                seen.push(*section);
            }
        }
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), Section::ALL.len());
    }

    #[test]
    fn test_content_type_from_str() {
        assert_eq!(
            "definition".parse::<ContentType>().unwrap(),
            ContentType::Definition
        );
        assert_eq!("RULE".parse::<ContentType>().unwrap(), ContentType::Rule);
        assert!("penalty".parse::<ContentType>().is_err());
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("extreme".parse::<Difficulty>().is_err());
    }
}
