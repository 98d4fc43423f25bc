use super::types::{Cycle, Subject, SubjectKind};

use SubjectKind::{Lab, Math, Regular};

const PHYSICS_SUBJECTS: [Subject; 5] = [
    Subject::new("math", "Mathematics", 4, Math),
    Subject::new("phy", "Physics", 4, Lab),
    Subject::new("esc-p", "ESC", 3, Regular),
    Subject::new("etc", "ETC", 3, Regular),
    Subject::new("core", "Core", 3, Regular),
];

const CHEMISTRY_SUBJECTS: [Subject; 4] = [
    Subject::new("math-c", "Mathematics", 4, Math),
    Subject::new("chem", "Chemistry", 4, Lab),
    Subject::new("esc-c", "ESC", 3, Regular),
    Subject::new("plc", "PLC", 3, Lab),
];

const PHYSICS_GPA_SUBJECTS: [Subject; 8] = [
    PHYSICS_SUBJECTS[0],
    PHYSICS_SUBJECTS[1],
    PHYSICS_SUBJECTS[2],
    PHYSICS_SUBJECTS[3],
    PHYSICS_SUBJECTS[4],
    Subject::new("idea-lab", "IDEA Lab", 1, Regular),
    Subject::new("comm-eng-p", "Communicative English", 1, Regular),
    Subject::new("kannada", "Kannada", 1, Regular),
];

const CHEMISTRY_GPA_SUBJECTS: [Subject; 8] = [
    CHEMISTRY_SUBJECTS[0],
    CHEMISTRY_SUBJECTS[1],
    CHEMISTRY_SUBJECTS[2],
    CHEMISTRY_SUBJECTS[3],
    Subject::new("caeg", "Computer Aided Engineering Graphics", 3, Regular),
    Subject::new("comm-eng-c", "Communicative English", 1, Regular),
    Subject::new("constitution", "Fundamentals of Indian Constitution", 1, Regular),
    Subject::new("yoga", "Yoga", 1, Regular),
];

/// Subjects with mark entry (CIE finalisation and final grade modes)
pub fn subjects(cycle: Cycle) -> &'static [Subject] {
    match cycle {
        Cycle::Physics => &PHYSICS_SUBJECTS,
        Cycle::Chemistry => &CHEMISTRY_SUBJECTS,
    }
}

/// Every graded subject of a cycle, used for SGPA/CGPA
pub fn gpa_subjects(cycle: Cycle) -> &'static [Subject] {
    match cycle {
        Cycle::Physics => &PHYSICS_GPA_SUBJECTS,
        Cycle::Chemistry => &CHEMISTRY_GPA_SUBJECTS,
    }
}

/// Look up a subject by id within a cycle's GPA list.
///
/// Subject ids are unique per cycle, so the GPA list is a superset of the
/// mark-entry list.
pub fn find_subject(cycle: Cycle, id: &str) -> Option<&'static Subject> {
    gpa_subjects(cycle)
        .iter()
        .find(|s| s.id.eq_ignore_ascii_case(id.trim()))
}
