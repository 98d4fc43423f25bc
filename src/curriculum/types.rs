use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two parallel subject groupings of the first year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cycle {
    Physics,
    Chemistry,
}

impl Cycle {
    pub const ALL: [Cycle; 2] = [Cycle::Physics, Cycle::Chemistry];

    pub fn as_str(&self) -> &'static str {
        match self {
            Cycle::Physics => "physics",
            Cycle::Chemistry => "chemistry",
        }
    }

    /// Human-readable name, e.g. "Physics Cycle"
    pub fn display_name(&self) -> &'static str {
        match self {
            Cycle::Physics => "Physics Cycle",
            Cycle::Chemistry => "Chemistry Cycle",
        }
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "physics" | "p" => Ok(Cycle::Physics),
            "chemistry" | "c" => Ok(Cycle::Chemistry),
            other => Err(format!(
                "unknown cycle '{}' (expected 'physics' or 'chemistry')",
                other
            )),
        }
    }
}

/// Calculation mode selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// CIE finalisation and SEE marks required
    CieFinal,
    /// Final grade with predicted SEE marks
    FinalGrade,
    /// GPA across both cycles
    FinalCgpa,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::CieFinal => "cie-final",
            Mode::FinalGrade => "final-grade",
            Mode::FinalCgpa => "final-cgpa",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Mode::CieFinal => "CIE Finalization & SEE Marks Required",
            Mode::FinalGrade => "Final Grade Calculator",
            Mode::FinalCgpa => "Final GPA Calculator",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cie-final" | "cie" => Ok(Mode::CieFinal),
            "final-grade" | "grade" => Ok(Mode::FinalGrade),
            "final-cgpa" | "cgpa" => Ok(Mode::FinalCgpa),
            other => Err(format!(
                "unknown mode '{}' (expected 'cie-final', 'final-grade' or 'final-cgpa')",
                other
            )),
        }
    }
}

/// Subject kind, deciding which mark fields apply and how CIE is weighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    Math,
    Lab,
    Regular,
}

impl SubjectKind {
    /// Mark fields entered for this kind, in form order.
    /// `see` is only entered in final-grade mode and is appended by the caller.
    pub fn cie_fields(&self) -> &'static [MarkField] {
        use MarkField::*;
        match self {
            SubjectKind::Math => &[Quiz1, Quiz2, Test1, Test2, Matlab, El],
            SubjectKind::Lab => &[Quiz1, Quiz2, Test1, Test2, Lab, El],
            SubjectKind::Regular => &[Quiz1, Quiz2, Test1, Test2, El],
        }
    }

    pub fn accepts(&self, field: MarkField) -> bool {
        field == MarkField::See || self.cie_fields().contains(&field)
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SubjectKind::Math => "math",
            SubjectKind::Lab => "lab",
            SubjectKind::Regular => "regular",
        };
        f.write_str(s)
    }
}

/// A single mark component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MarkField {
    #[serde(rename = "q1")]
    Quiz1,
    #[serde(rename = "q2")]
    Quiz2,
    #[serde(rename = "t1")]
    Test1,
    #[serde(rename = "t2")]
    Test2,
    #[serde(rename = "matlab")]
    Matlab,
    #[serde(rename = "lab")]
    Lab,
    #[serde(rename = "el")]
    El,
    #[serde(rename = "see")]
    See,
}

impl MarkField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkField::Quiz1 => "q1",
            MarkField::Quiz2 => "q2",
            MarkField::Test1 => "t1",
            MarkField::Test2 => "t2",
            MarkField::Matlab => "matlab",
            MarkField::Lab => "lab",
            MarkField::El => "el",
            MarkField::See => "see",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarkField::Quiz1 => "Quiz 1",
            MarkField::Quiz2 => "Quiz 2",
            MarkField::Test1 => "Test 1",
            MarkField::Test2 => "Test 2",
            MarkField::Matlab => "MATLAB",
            MarkField::Lab => "Lab",
            MarkField::El => "EL",
            MarkField::See => "SEE",
        }
    }

    /// Maximum marks for this field on a subject of the given kind.
    pub fn max_value(&self, kind: SubjectKind) -> f64 {
        match self {
            MarkField::Quiz1 | MarkField::Quiz2 => 10.0,
            MarkField::Test1 | MarkField::Test2 => 50.0,
            MarkField::Matlab => 20.0,
            MarkField::Lab => 30.0,
            MarkField::El => match kind {
                SubjectKind::Math => 20.0,
                SubjectKind::Lab => 30.0,
                SubjectKind::Regular => 40.0,
            },
            MarkField::See => 100.0,
        }
    }
}

impl fmt::Display for MarkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "q1" | "quiz1" => Ok(MarkField::Quiz1),
            "q2" | "quiz2" => Ok(MarkField::Quiz2),
            "t1" | "test1" => Ok(MarkField::Test1),
            "t2" | "test2" => Ok(MarkField::Test2),
            "matlab" => Ok(MarkField::Matlab),
            "lab" => Ok(MarkField::Lab),
            "el" => Ok(MarkField::El),
            "see" => Ok(MarkField::See),
            other => Err(format!("unknown mark field '{}'", other)),
        }
    }
}

/// A curriculum subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subject {
    pub id: &'static str,
    pub name: &'static str,
    pub credits: u32,
    pub kind: SubjectKind,
}

impl Subject {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        credits: u32,
        kind: SubjectKind,
    ) -> Self {
        Self {
            id,
            name,
            credits,
            kind,
        }
    }
}
