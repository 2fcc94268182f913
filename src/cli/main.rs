use otter_ipasir::{reports::Report, session::Session};

use parse_args::parse_args;
use read::read_dimacs;

mod parse_args;
mod read;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let mut session: Session = Session::new();
    println!("c {}", <Session>::signature());

    let args: Vec<String> = std::env::args().collect();

    let cli_options = match parse_args(&args, &mut session) {
        Ok(options) => options,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    let Some(path) = &cli_options.path else {
        println!("c Path to CNF required");
        std::process::exit(1);
    };

    if let Err(e) = read_dimacs(path, &mut session) {
        println!("c {e}");
        std::process::exit(1);
    }

    let result = match session.solve_given(&cli_options.assumptions) {
        Ok(report) => report,
        Err(e) => {
            println!("c Solve error: {e}");
            std::process::exit(2);
        }
    };

    println!("s {}", result.to_string().to_uppercase());

    if result == Report::Satisfiable && cli_options.model {
        let mut valuation = String::new();
        for atom in 1..=session.pool_size() as i32 {
            valuation.push_str(&format!("{} ", session.value(atom)));
        }
        println!("v {valuation}0");
    }

    if result == Report::Unsatisfiable && cli_options.core {
        let failed: Vec<String> = cli_options
            .assumptions
            .iter()
            .filter(|lit| session.failed(**lit) != 0)
            .map(|lit| lit.to_string())
            .collect();
        println!("c Failed assumptions: {}", failed.join(" "));
    }

    std::process::exit(result.code());
}
