use std::{io::BufReader, path::PathBuf, str::FromStr};

use otter_ipasir::{session::Session, types::err::ErrorKind};

pub(super) enum ReadError {
    NoPath,
    ParseError(ErrorKind),
    FailedToOpen,
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::NoPath => write!(f, "Some path to a CNF formula is required."),
            Self::ParseError(err) => write!(f, "Parse error: '{err}'."),
            Self::FailedToOpen => write!(f, "Failed to open CNF file."),
        }
    }
}

/// Reads the DIMACS file at `path` to `session` and writes a report.
///
/// Files with an `xz` extension are decompressed when built with the `xz` feature.
pub(super) fn read_dimacs(path: &str, session: &mut Session) -> Result<(), ReadError> {
    let path = match PathBuf::from_str(path) {
        Ok(path) => path,
        Err(_) => return Err(ReadError::NoPath),
    };

    println!("c Reading DIMACS file from {path:?}");

    let file = match std::fs::File::open(&path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    let parse_report = match &path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if *extension == "xz" => {
            session.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        _ => session.read_dimacs(BufReader::new(&file)),
    };

    match parse_report {
        Ok(info) => {
            match info.expected_atoms {
                Some(count) => println!("c Expected atoms:   {count}"),
                None => println!("c No preamble was found."),
            }

            println!("c Atom count:       {}", info.added_atoms);

            if let Some(count) = info.expected_clauses {
                println!("c Expected clauses: {count}")
            }

            println!("c Clause count:     {}", info.added_clauses);
            Ok(())
        }

        Err(e) => Err(ReadError::ParseError(e)),
    }
}
