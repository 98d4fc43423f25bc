/// Minimum CIE total needed to pass a subject.
pub const MIN_PASS_CIE: u32 = 40;
/// Minimum SEE marks needed to pass a subject.
pub const MIN_PASS_SEE: f64 = 35.0;

/// Every grade point a subject can receive, highest first.
pub const GRADE_POINTS: [u8; 8] = [10, 9, 8, 7, 6, 5, 4, 0];

/// Grade point for a CIE total and SEE marks.
///
/// A CIE below 40 or SEE below 35 fails outright regardless of the
/// combined total. Otherwise each 10 marks of the CIE/SEE average is one
/// grade point, offset by one.
pub fn calculate_final_grade(cie: u32, see: f64) -> u8 {
    if cie < MIN_PASS_CIE || see < MIN_PASS_SEE {
        return 0;
    }

    let total = combined_total(cie, see);
    let grade = (total / 10.0).floor() + 1.0;
    grade.clamp(0.0, 10.0) as u8
}

/// Average of CIE and SEE, the total a grade is read from.
pub fn combined_total(cie: u32, see: f64) -> f64 {
    (cie as f64 + see) / 2.0
}

/// Letter for a grade point. Anything outside the grade table is an F.
pub fn grade_letter(grade_point: u8) -> &'static str {
    match grade_point {
        10 => "O",
        9 => "A+",
        8 => "A",
        7 => "B+",
        6 => "B",
        5 => "C",
        4 => "P",
        _ => "F",
    }
}

/// Parse a grade given either as a letter ("A+") or a grade point ("9").
pub fn parse_grade(s: &str) -> Option<u8> {
    let s = s.trim();
    if let Ok(n) = s.parse::<u8>() {
        return GRADE_POINTS.contains(&n).then_some(n);
    }

    GRADE_POINTS
        .iter()
        .copied()
        .find(|gp| grade_letter(*gp).eq_ignore_ascii_case(s))
}
