/// Prefix of every storage key unless configured otherwise.
pub const DEFAULT_NAMESPACE: &str = "cgpa_calc";

/// The five independently persisted pieces of draft state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Raw per-subject mark entries
    FormData,
    /// Directly entered SGPA per cycle
    SgpaValues,
    /// Grade selections for the final CGPA
    FinalCgpaGrades,
    CurrentMode,
    CurrentCycle,
}

impl Bucket {
    pub const ALL: [Bucket; 5] = [
        Bucket::FormData,
        Bucket::SgpaValues,
        Bucket::FinalCgpaGrades,
        Bucket::CurrentMode,
        Bucket::CurrentCycle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Bucket::FormData => "form_data",
            Bucket::SgpaValues => "sgpa_values",
            Bucket::FinalCgpaGrades => "final_cgpa_grades",
            Bucket::CurrentMode => "current_mode",
            Bucket::CurrentCycle => "current_cycle",
        }
    }

    /// Storage key under a namespace, e.g. `cgpa_calc_form_data`.
    pub fn key(&self, namespace: &str) -> String {
        format!("{}_{}", namespace, self.name())
    }
}
