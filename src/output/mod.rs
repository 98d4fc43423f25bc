pub mod formatter;

pub use formatter::{
    format_cgpa, format_draft, format_see_requirements, format_sgpa, format_subject_list,
    format_subject_result, should_use_colors,
};
