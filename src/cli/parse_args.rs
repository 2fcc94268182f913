use otter_ipasir::{session::Session, structures::literal::IntLiteral};

/// A collection of configuration options relevant only to the CLI.
#[derive(Default)]
pub struct CliOptions {
    /// Whether to report the failed assumptions, if the formula is unsatisfiable given the assumptions.
    pub core: bool,

    /// Whether to report a model, if one exists.
    pub model: bool,

    /// Assumptions for the solve.
    pub assumptions: Vec<IntLiteral>,

    /// The path to the formula.
    pub path: Option<String>,
}

pub enum ArgError {
    Assumption(String),
    Option(String, String),
    Unrecognised(String),
}

impl std::fmt::Display for ArgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::Assumption(a) => write!(f, "Unable to parse assumption '{a}'"),
            Self::Option(name, e) => write!(f, "Unable to set {name}: {e}"),
            Self::Unrecognised(arg) => write!(f, "Unable to parse argument: {arg:?}"),
        }
    }
}

/// Parse CLI arguments, revising the options of `session` and noting the remainder in a [CliOptions] struct.
///
/// Any argument `--name=value` with `name` an option of the registry sets the option.
/// The final argument which is not a flag is taken to be the path to the formula.
pub(super) fn parse_args(args: &[String], session: &mut Session) -> Result<CliOptions, ArgError> {
    let mut cli_options = CliOptions::default();

    for arg in args.iter().skip(1) {
        let mut split = arg.splitn(2, '=');
        match (split.next(), split.next()) {
            (Some("--core"), None) => {
                println!("c Failed assumptions will be written, if any.");
                cli_options.core = true;
            }

            (Some("--model"), None) | (Some("--valuation"), None) => {
                println!("c A model will be written, if one exists.");
                cli_options.model = true;
            }

            (Some("--assume"), Some(literals)) => {
                for literal in literals.split(',').filter(|s| !s.is_empty()) {
                    match literal.trim().parse::<IntLiteral>() {
                        Ok(lit) if lit != 0 && lit != IntLiteral::MIN => {
                            cli_options.assumptions.push(lit)
                        }
                        _ => return Err(ArgError::Assumption(literal.to_owned())),
                    }
                }
            }

            (Some(flag), Some(request)) if flag.starts_with("--") => {
                let name = &flag[2..];
                let value = match request.parse::<i64>() {
                    Ok(value) => value,
                    Err(e) => return Err(ArgError::Option(name.to_owned(), e.to_string())),
                };
                match session.set_option(name, value) {
                    Ok(()) => println!("c {name} set to: {value}"),
                    Err(e) => return Err(ArgError::Option(name.to_owned(), e.to_string())),
                }
            }

            (Some(path), None) if !path.starts_with("--") => cli_options.path = Some(path.to_owned()),

            _ => return Err(ArgError::Unrecognised(arg.to_owned())),
        }
    }

    Ok(cli_options)
}
