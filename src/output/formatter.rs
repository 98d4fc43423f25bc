use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::curriculum::{Cycle, Subject};
use crate::draft::DraftState;
use crate::scoring::{grade_letter, SeeRequirements, SubjectResult, MIN_PASS_CIE};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// "8 (A)" style label for a grade point, colored by band when enabled
fn grade_label(grade_point: u8, use_colors: bool) -> String {
    let label = format!("{} ({})", grade_point, grade_letter(grade_point));
    if !use_colors {
        return label;
    }
    // Traffic light: distinction, pass, fail
    match grade_point {
        8..=10 => label.green().to_string(),
        4..=7 => label.yellow().to_string(),
        _ => label.red().to_string(),
    }
}

/// One subject per line: "{id} | {name} | {credits} credits | {kind}"
pub fn format_subject_list(subjects: &[Subject], use_colors: bool) -> String {
    subjects
        .iter()
        .map(|s| {
            if use_colors {
                format!(
                    "{} | {} | {} credits | {}",
                    s.id.cyan(),
                    s.name.bold(),
                    s.credits,
                    s.kind
                )
            } else {
                format!("{} | {} | {} credits | {}", s.id, s.name, s.credits, s.kind)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a subject result.
///
/// CIE-only results read "Mathematics (math): CIE 80/100"; results with a
/// final grade add the grade and the combined total.
pub fn format_subject_result(
    subject: &Subject,
    result: &SubjectResult,
    use_colors: bool,
) -> String {
    let name = if use_colors {
        subject.name.bold().to_string()
    } else {
        subject.name.to_string()
    };

    match &result.grade {
        None => format!("{} ({}): CIE {}/100", name, subject.id, result.cie_total),
        Some(grade) => format!(
            "{} ({}): Grade {} | CIE: {} | SEE: {} | Total: {:.2}",
            name,
            subject.id,
            grade_label(grade.grade_point, use_colors),
            result.cie_total,
            grade.see,
            grade.total
        ),
    }
}

/// SEE requirement table for one subject
pub fn format_see_requirements(
    subject_name: &str,
    reqs: &SeeRequirements,
    use_colors: bool,
) -> String {
    let mut lines = vec![format!(
        "SEE Requirements for {} (CIE: {}):",
        subject_name, reqs.cie
    )];
    if reqs.cie < MIN_PASS_CIE {
        lines.push(format!(
            "CIE below {}: subject fails regardless of SEE",
            MIN_PASS_CIE
        ));
    }

    for r in &reqs.entries {
        lines.push(format!(
            "  Grade {}: {:.1} marks",
            grade_label(r.grade, use_colors),
            r.required_see as f64
        ));
    }

    if let Some(best) = reqs.best_achievable() {
        lines.push(format!(
            "Lowest target: Grade {} with {} marks",
            grade_label(best.grade, use_colors),
            best.required_see
        ));
    }
    if let Some(highest) = reqs.highest_achievable() {
        lines.push(format!(
            "Highest reachable: Grade {} with {} marks",
            grade_label(highest.grade, use_colors),
            highest.required_see
        ));
    }
    lines.push(format!(
        "Minimum SEE ({} marks) gives Grade {}",
        reqs.at_minimum.required_see,
        grade_label(reqs.at_minimum.grade, use_colors)
    ));

    lines.join("\n")
}

/// "Physics Cycle SGPA: 8.09/10"
pub fn format_sgpa(cycle: Cycle, sgpa: &str) -> String {
    format!("{} SGPA: {}/10", cycle.display_name(), sgpa)
}

/// "CGPA: 8.50/10"
pub fn format_cgpa(cgpa: &str) -> String {
    format!("CGPA: {}/10", cgpa)
}

/// Human-readable dump of the whole draft
pub fn format_draft(draft: &DraftState) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Mode: {}",
        draft.mode.map(|m| m.to_string()).unwrap_or_else(|| "(none)".to_string())
    ));
    lines.push(format!(
        "Cycle: {}",
        draft.cycle.map(|c| c.to_string()).unwrap_or_else(|| "(none)".to_string())
    ));

    lines.push("Marks:".to_string());
    if draft.form_data.is_empty() {
        lines.push("  (none)".to_string());
    }
    for (subject_id, entry) in &draft.form_data {
        let fields = entry
            .iter()
            .map(|(field, value)| format!("{}={}", field, value))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("  {}: {}", subject_id, fields));
    }

    lines.push("SGPA overrides:".to_string());
    if draft.sgpa_overrides.is_empty() {
        lines.push("  (none)".to_string());
    }
    for (cycle, sgpa) in &draft.sgpa_overrides {
        lines.push(format!("  {}: {}", cycle, sgpa));
    }

    lines.push("GPA grades:".to_string());
    if draft.gpa_grades.is_empty() {
        lines.push("  (none)".to_string());
    }
    for (cycle, grades) in &draft.gpa_grades {
        let picks = grades
            .iter()
            .map(|(id, gp)| format!("{}={}", id, grade_letter(*gp)))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("  {}: {}", cycle, picks));
    }

    lines.join("\n")
}
