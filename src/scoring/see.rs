use super::grade::grade_letter;

/// Grades a student can still aim for, highest first.
const TARGET_GRADES: [u8; 7] = [10, 9, 8, 7, 6, 5, 4];

/// SEE below this fails outright.
const SEE_FLOOR: i32 = 35;
const SEE_MAX: i32 = 100;

/// SEE marks needed to reach one grade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeeRequirement {
    pub grade: u8,
    pub letter: &'static str,
    pub required_see: i32,
}

/// Result of solving SEE requirements for a fixed CIE total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeeRequirements {
    pub cie: u32,
    /// Reachable grades, sorted by ascending required SEE
    pub entries: Vec<SeeRequirement>,
    /// Grade obtained with the minimum passing SEE
    pub at_minimum: SeeRequirement,
}

impl SeeRequirements {
    /// The reachable grade with the smallest required SEE.
    pub fn best_achievable(&self) -> Option<&SeeRequirement> {
        self.entries.first()
    }

    /// The highest grade still within reach (SEE <= 100).
    pub fn highest_achievable(&self) -> Option<&SeeRequirement> {
        self.entries.last()
    }

    pub fn requirement_for(&self, grade: u8) -> Option<&SeeRequirement> {
        self.entries.iter().find(|r| r.grade == grade)
    }
}

/// SEE marks needed for `grade` given `cie`.
///
/// Inverts `(cie + see) / 2 >= (grade - 1) * 10`.
pub fn required_see(cie: u32, grade: u8) -> i32 {
    (grade as i32 - 1) * 20 - cie as i32
}

/// Grade reached by scoring exactly the minimum passing SEE.
pub fn grade_at_minimum_see(cie: u32) -> u8 {
    let grade = (cie as i32 + SEE_FLOOR).div_euclid(20) + 1;
    grade.clamp(0, 10) as u8
}

/// SEE requirement table for every target grade.
///
/// Requirements below 35 are dropped (SEE under 35 fails regardless of the
/// total) and so are those above 100.
pub fn see_requirements(cie: u32) -> SeeRequirements {
    let mut entries: Vec<SeeRequirement> = TARGET_GRADES
        .iter()
        .map(|&grade| SeeRequirement {
            grade,
            letter: grade_letter(grade),
            required_see: required_see(cie, grade),
        })
        .filter(|r| (SEE_FLOOR..=SEE_MAX).contains(&r.required_see))
        .collect();
    entries.sort_by_key(|r| r.required_see);

    let min_grade = grade_at_minimum_see(cie);
    SeeRequirements {
        cie,
        entries,
        at_minimum: SeeRequirement {
            grade: min_grade,
            letter: grade_letter(min_grade),
            required_see: SEE_FLOOR,
        },
    }
}
