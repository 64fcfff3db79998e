//! Exit codes for dispatcher outcomes.

use std::process::ExitCode;

use fibseries_core::constants::exit_codes;

use crate::app::Outcome;

/// Map a dispatcher outcome to its exit code.
///
/// Only missing arguments fail; an unrecognized method still exits 0.
pub fn exit_code(outcome: Outcome) -> i32 {
    match outcome {
        Outcome::Usage => exit_codes::USAGE,
        Outcome::Completed | Outcome::InvalidMethod => exit_codes::SUCCESS,
    }
}

/// Same as [`exit_code`], as a process `ExitCode`.
pub fn process_exit_code(outcome: Outcome) -> ExitCode {
    u8::try_from(exit_code(outcome)).map_or(ExitCode::FAILURE, ExitCode::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(exit_code(Outcome::Usage), 1);
        assert_eq!(exit_code(Outcome::InvalidMethod), 0);
        assert_eq!(exit_code(Outcome::Completed), 0);
    }
}
