use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cgpa_calc::config::Config;
use cgpa_calc::curriculum::{self, Cycle, MarkField, Mode, Subject};
use cgpa_calc::draft::DraftState;
use cgpa_calc::output;
use cgpa_calc::scoring::{self, MarkError};
use cgpa_calc::storage::{FileStore, Persistence};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the subjects of one or both cycles
    Subjects {
        /// Cycle to list (both if omitted)
        cycle: Option<Cycle>,
        /// List every graded subject used for SGPA/CGPA
        #[arg(long)]
        gpa: bool,
    },
    /// Show or select the calculation mode (cie-final, final-grade, final-cgpa)
    Mode { mode: Option<Mode> },
    /// Show or select the current cycle (physics, chemistry)
    Cycle { cycle: Option<Cycle> },
    /// Enter one mark for a subject of the current cycle ("" clears it)
    Set {
        subject: String,
        /// q1, q2, t1, t2, matlab, lab, el or see
        field: MarkField,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Show CIE totals for the current cycle
    Cie { subject: Option<String> },
    /// Show the SEE marks needed for each grade
    See { subject: String },
    /// Show final grades and SGPA for the current cycle
    Grade { subject: Option<String> },
    /// Evaluate under the selected mode (CIE and SEE targets, final grades, or CGPA)
    Eval { subject: Option<String> },
    /// Select a final grade for the CGPA calculator (omit GRADE to clear)
    GpaGrade {
        cycle: Cycle,
        subject: String,
        /// Letter (O, A+, A, B+, B, C, P, F) or grade point
        grade: Option<String>,
    },
    /// Enter a cycle's SGPA directly (omit VALUE to clear)
    SgpaOverride {
        cycle: Cycle,
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },
    /// Compute the SGPA of a cycle from selected grades or its override
    Sgpa { cycle: Cycle },
    /// Compute the CGPA across both cycles
    Cgpa,
    /// Reset saved state (everything if no section is given)
    Reset {
        /// Reset entered marks
        #[arg(long)]
        marks: bool,
        /// Reset GPA grade selections and SGPA overrides
        #[arg(long)]
        gpa: bool,
    },
    /// Print the saved draft state
    Show,
    /// Write a default config file
    Init {
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "cgpa-calc")]
#[command(about = "CIE, final grade, SGPA and CGPA calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/cgpa-calc/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for saved state (overrides the config file)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Input the user has to correct; exits with EXIT_INPUT
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct InputError(String);

fn input_error(msg: impl Into<String>) -> anyhow::Error {
    InputError(msg.into()).into()
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "cgpa_calc=debug"
    } else {
        "cgpa_calc=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}

/// Loaded config plus the restored draft
struct Session {
    config: Config,
    persistence: Persistence<FileStore>,
    draft: DraftState,
    use_colors: bool,
}

impl Session {
    fn open(config: Config, store_dir: PathBuf) -> Self {
        tracing::debug!("using store at {}", store_dir.display());
        let persistence = Persistence::new(FileStore::new(store_dir), config.namespace());
        let draft = DraftState::restore(&persistence);
        Self {
            config,
            persistence,
            draft,
            use_colors: output::should_use_colors(),
        }
    }

    fn save(&mut self) {
        if !self.draft.persist(&mut self.persistence) {
            eprintln!("Warning: some changes could not be saved");
        }
    }

    fn current_mode(&self) -> anyhow::Result<Mode> {
        self.draft.mode.ok_or_else(|| {
            input_error(
                "No mode selected. Run `cgpa-calc mode cie-final`, `final-grade` or `final-cgpa` first.",
            )
        })
    }

    fn current_cycle(&self) -> anyhow::Result<Cycle> {
        self.draft.cycle.ok_or_else(|| {
            input_error(
                "No cycle selected. Run `cgpa-calc cycle physics` or `cgpa-calc cycle chemistry` first.",
            )
        })
    }
}

/// Subject with mark entry in `cycle`
fn mark_subject(cycle: Cycle, id: &str) -> anyhow::Result<&'static Subject> {
    curriculum::subjects(cycle)
        .iter()
        .find(|s| s.id.eq_ignore_ascii_case(id.trim()))
        .ok_or_else(|| {
            input_error(format!(
                "Unknown subject '{}' in the {} (see `cgpa-calc subjects {}`)",
                id,
                cycle.display_name(),
                cycle
            ))
        })
}

/// Any graded subject of `cycle`
fn gpa_subject(cycle: Cycle, id: &str) -> anyhow::Result<&'static Subject> {
    curriculum::find_subject(cycle, id).ok_or_else(|| {
        input_error(format!(
            "Unknown subject '{}' in the {} (see `cgpa-calc subjects --gpa {}`)",
            id,
            cycle.display_name(),
            cycle
        ))
    })
}

/// One named subject, or every mark-entry subject of the cycle
fn selected_subjects(cycle: Cycle, id: Option<&str>) -> anyhow::Result<Vec<&'static Subject>> {
    match id {
        Some(id) => Ok(vec![mark_subject(cycle, id)?]),
        None => Ok(curriculum::subjects(cycle).iter().collect()),
    }
}

fn print_cie(session: &Session, cycle: Cycle, subject: Option<&str>) -> anyhow::Result<()> {
    for subject in selected_subjects(cycle, subject)? {
        let result = session.draft.evaluate(subject, Mode::CieFinal);
        println!(
            "{}",
            output::format_subject_result(subject, &result, session.use_colors)
        );
    }
    Ok(())
}

fn print_see(session: &Session, subject: &Subject) {
    let result = session.draft.evaluate(subject, Mode::CieFinal);
    let reqs = scoring::see_requirements(result.cie_total);
    println!(
        "{}",
        output::format_see_requirements(subject.name, &reqs, session.use_colors)
    );
}

/// Final grades of the named subject, or of the cycle plus its SGPA
fn print_grades(session: &Session, cycle: Cycle, subject: Option<&str>) -> anyhow::Result<()> {
    let mut results = Vec::new();
    for s in selected_subjects(cycle, subject)? {
        if !session.draft.form_data.contains_key(s.id) {
            println!("{} ({}): no marks entered", s.name, s.id);
            continue;
        }
        let result = session.draft.evaluate(s, Mode::FinalGrade);
        println!(
            "{}",
            output::format_subject_result(s, &result, session.use_colors)
        );
        results.push(result);
    }
    if subject.is_none() {
        let sgpa =
            scoring::results_contribution(curriculum::subjects(cycle), &results).formatted();
        println!("{}", output::format_sgpa(cycle, &sgpa));
    }
    Ok(())
}

fn print_sgpa(session: &Session, cycle: Cycle) {
    let selection = session.draft.cycle_selection(cycle);
    let sgpa = scoring::calculate_sgpa(curriculum::gpa_subjects(cycle), &selection);
    println!("{}", output::format_sgpa(cycle, &sgpa));
}

fn print_cgpa(session: &Session) {
    let selections: Vec<_> = Cycle::ALL
        .iter()
        .map(|c| (*c, session.draft.cycle_selection(*c)))
        .collect();
    let cgpa = scoring::calculate_cgpa(
        selections
            .iter()
            .map(|(c, s)| (curriculum::gpa_subjects(*c), s)),
        session.config.override_credits(),
    );
    println!("{}", output::format_cgpa(&cgpa));
}

fn run(session: &mut Session, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Subjects { cycle, gpa } => {
            let cycles = match cycle {
                Some(c) => vec![c],
                None => Cycle::ALL.to_vec(),
            };
            for (i, cycle) in cycles.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                let list = if gpa {
                    curriculum::gpa_subjects(*cycle)
                } else {
                    curriculum::subjects(*cycle)
                };
                println!("{}:", cycle.display_name());
                println!("{}", output::format_subject_list(list, session.use_colors));
            }
        }
        Commands::Mode { mode } => {
            if let Some(mode) = mode {
                session.draft.set_mode(mode);
                session.save();
            }
            match session.draft.mode {
                Some(mode) => println!("Mode: {} ({})", mode, mode.title()),
                None => println!("Mode: (none)"),
            }
        }
        Commands::Cycle { cycle } => {
            if let Some(cycle) = cycle {
                session.draft.set_cycle(cycle);
                session.save();
            }
            match session.draft.cycle {
                Some(cycle) => println!("Cycle: {} ({})", cycle, cycle.display_name()),
                None => println!("Cycle: (none)"),
            }
        }
        Commands::Set {
            subject,
            field,
            value,
        } => {
            let cycle = session.current_cycle()?;
            let subject = mark_subject(cycle, &subject)?;
            let stored = session.draft.set_mark(subject, field, &value)?;
            session.save();
            match stored {
                Some(v) => println!("{} {} = {}", subject.name, field.label(), v),
                None => println!("{} {} cleared", subject.name, field.label()),
            }
        }
        Commands::Cie { subject } => {
            let cycle = session.current_cycle()?;
            print_cie(session, cycle, subject.as_deref())?;
        }
        Commands::See { subject } => {
            let cycle = session.current_cycle()?;
            let subject = mark_subject(cycle, &subject)?;
            print_see(session, subject);
        }
        Commands::Grade { subject } => {
            let cycle = session.current_cycle()?;
            print_grades(session, cycle, subject.as_deref())?;
        }
        Commands::Eval { subject } => match session.current_mode()? {
            Mode::CieFinal => {
                let cycle = session.current_cycle()?;
                print_cie(session, cycle, subject.as_deref())?;
                if let Some(id) = subject.as_deref() {
                    print_see(session, mark_subject(cycle, id)?);
                }
            }
            Mode::FinalGrade => {
                let cycle = session.current_cycle()?;
                print_grades(session, cycle, subject.as_deref())?;
            }
            Mode::FinalCgpa => {
                if subject.is_some() {
                    return Err(input_error(
                        "final-cgpa mode works on whole cycles; run `cgpa-calc eval` without a subject",
                    ));
                }
                for cycle in Cycle::ALL {
                    print_sgpa(session, cycle);
                }
                print_cgpa(session);
            }
        },
        Commands::GpaGrade {
            cycle,
            subject,
            grade,
        } => {
            let subject = gpa_subject(cycle, &subject)?;
            match grade {
                Some(raw) => {
                    let gp = session.draft.set_gpa_grade(cycle, subject, &raw)?;
                    println!(
                        "{} ({}): {} ({})",
                        subject.name,
                        cycle,
                        gp,
                        scoring::grade_letter(gp)
                    );
                }
                None => {
                    session.draft.clear_gpa_grade(cycle, subject.id);
                    println!("{} ({}): cleared", subject.name, cycle);
                }
            }
            session.save();
        }
        Commands::SgpaOverride { cycle, value } => {
            let value = match value {
                Some(raw) => session.draft.set_sgpa_override(cycle, &raw)?,
                None => {
                    session.draft.clear_sgpa_override(cycle);
                    None
                }
            };
            session.save();
            match value {
                Some(v) => println!("{} SGPA set to {}", cycle.display_name(), v),
                None => println!("{} SGPA override cleared", cycle.display_name()),
            }
        }
        Commands::Sgpa { cycle } => print_sgpa(session, cycle),
        Commands::Cgpa => print_cgpa(session),
        Commands::Reset { marks, gpa } => {
            if !marks && !gpa {
                session.draft.reset_all(&mut session.persistence);
                println!("All saved state cleared");
            } else {
                if marks {
                    session.draft.reset_marks(&mut session.persistence);
                    println!("Marks cleared");
                }
                if gpa {
                    session.draft.reset_gpa(&mut session.persistence);
                    println!("GPA selections cleared");
                }
            }
        }
        Commands::Show => {
            println!("{}", output::format_draft(&session.draft));
            println!("Store: {}", session.persistence.store().dir().display());
        }
        // Handled in main before the session opens
        Commands::Init { .. } => {}
    }

    Ok(())
}

fn exit_code_for(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<InputError>().is_some() || error.downcast_ref::<MarkError>().is_some() {
        EXIT_INPUT
    } else {
        EXIT_CONFIG
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Init writes the config, so it must not depend on loading one
    if let Commands::Init { path, force } = &cli.command {
        let target = path.clone().or_else(|| cli.config.clone());
        match cgpa_calc::config::write_default_config(target, *force) {
            Ok(path) => {
                println!("Config written to {}", path.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    let config = match cgpa_calc::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = cgpa_calc::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let store_dir = cli.store.unwrap_or_else(|| config.store_dir());
    let mut session = Session::open(config, store_dir);

    if let Err(e) = run(&mut session, cli.command) {
        eprintln!("{}", e);
        std::process::exit(exit_code_for(&e));
    }

    std::process::exit(EXIT_SUCCESS);
}
