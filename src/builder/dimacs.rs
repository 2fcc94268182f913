/*!
Reads a formula in DIMACS form into a [session](crate::session).

The reader is permissive:
- Lines beginning with `c` are comments.
- The problem line `p cnf <atoms> <clauses>` is optional, and if present the counts are noted only.
- A line beginning with `%` ends the formula, as in some of the SATLIB benchmarks.
- Clauses may span lines, and a line may hold many clauses.

Literals are passed to the session as read, so the atoms of the formula are the atoms of the session.
*/

use std::io::BufRead;

use crate::{
    engine::Engine,
    session::Session,
    types::err::{self, ErrorKind},
};

/// Details of a parsed formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms stated by the problem line, if one was found.
    pub expected_atoms: Option<usize>,

    /// The count of clauses stated by the problem line, if one was found.
    pub expected_clauses: Option<usize>,

    /// The size of the variable pool after reading.
    pub added_atoms: usize,

    /// The count of clauses read.
    pub added_clauses: usize,
}

/// Parses the counts of a problem line.
fn problem_counts(line: &str) -> Result<(usize, usize), ErrorKind> {
    let mut details = line.split_whitespace();
    match (details.next(), details.next()) {
        (Some("p"), Some("cnf")) => {}
        _ => return Err(err::ParseError::ProblemSpecification.into()),
    }

    let mut count = || -> Result<usize, ErrorKind> {
        details
            .next()
            .and_then(|string| string.parse().ok())
            .ok_or(err::ParseError::ProblemSpecification.into())
    };

    let atoms = count()?;
    let clauses = count()?;
    Ok((atoms, clauses))
}

impl<E: Engine> Session<E> {
    /// Reads a DIMACS formula into the session.
    ///
    /// ```rust
    /// # use otter_ipasir::session::Session;
    /// # use otter_ipasir::reports::Report;
    /// let mut session: Session = Session::new();
    ///
    /// let dimacs = b"
    /// c two atoms, four clauses
    /// p cnf 2 4
    ///  1  2 0
    /// -1  2 0
    /// -1 -2 0
    ///  1 -2 0
    /// ";
    ///
    /// let info = session.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(info.expected_atoms, Some(2));
    /// assert_eq!(info.added_clauses, 4);
    /// assert_eq!(session.solve(), Ok(Report::Unsatisfiable));
    /// ```
    ///
    /// A clause without a terminating zero at the end of the formula is added, as though terminated.
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut info = ParserInfo::default();
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;
        let mut open_clause = false;

        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter).into()),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue,

                Some('%') => break 'formula_loop,

                Some('p') => {
                    let (atoms, clauses) = problem_counts(&buffer)?;
                    log::info!("Expecting {atoms} atoms and {clauses} clauses");
                    info.expected_atoms = Some(atoms);
                    info.expected_clauses = Some(clauses);
                }

                _ => {
                    for item in buffer.split_whitespace() {
                        let lit = match item.parse::<i32>() {
                            Ok(lit) => lit,
                            Err(_) => return Err(err::ParseError::Literal(line_counter).into()),
                        };

                        match self.add(lit) {
                            Ok(()) => {}
                            Err(ErrorKind::InvalidArgument) => {
                                return Err(err::ParseError::Literal(line_counter).into())
                            }
                            Err(e) => return Err(e),
                        }

                        match lit {
                            0 => {
                                info.added_clauses += 1;
                                open_clause = false;
                            }
                            _ => open_clause = true,
                        }
                    }
                }
            }
        }

        if open_clause {
            self.add(0)?;
            info.added_clauses += 1;
        }

        info.added_atoms = self.pool_size() as usize;
        Ok(info)
    }
}
