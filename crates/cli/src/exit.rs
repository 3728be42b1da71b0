// crates/cli/src/exit.rs

use engine::EngineError;

/// Process exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitCode {
    Ok,
    SyntaxOrUsage,
    FileOpen,
    FileIo,
}

impl ExitCode {
    pub const fn code(self) -> i32 {
        match self {
            ExitCode::Ok => 0,
            ExitCode::SyntaxOrUsage | ExitCode::FileOpen | ExitCode::FileIo => 1,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.code()
    }
}

pub fn exit_code_from_error_kind(kind: clap::error::ErrorKind) -> ExitCode {
    use clap::error::ErrorKind::*;
    match kind {
        DisplayHelp | DisplayVersion => ExitCode::Ok,
        Io | Format => ExitCode::FileIo,
        _ => ExitCode::SyntaxOrUsage,
    }
}

pub fn exit_code_from_engine_error(e: &EngineError) -> ExitCode {
    match e {
        EngineError::Open { .. } => ExitCode::FileOpen,
        EngineError::Io(_) => ExitCode::FileIo,
        EngineError::InvalidBlockSize(_) => ExitCode::SyntaxOrUsage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind::*;
    use std::path::PathBuf;

    #[test]
    fn maps_error_kinds_to_exit_codes() {
        let cases = [
            (MissingRequiredArgument, ExitCode::SyntaxOrUsage),
            (UnknownArgument, ExitCode::SyntaxOrUsage),
            (ValueValidation, ExitCode::SyntaxOrUsage),
            (InvalidValue, ExitCode::SyntaxOrUsage),
            (DisplayHelp, ExitCode::Ok),
            (DisplayVersion, ExitCode::Ok),
            (Io, ExitCode::FileIo),
        ];

        for (kind, expected) in cases {
            assert_eq!(exit_code_from_error_kind(kind), expected);
        }
    }

    #[test]
    fn failures_are_nonzero() {
        let open = EngineError::Open {
            path: PathBuf::from("missing"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(exit_code_from_engine_error(&open), ExitCode::FileOpen);
        assert_eq!(i32::from(exit_code_from_engine_error(&open)), 1);
        assert_eq!(ExitCode::Ok.code(), 0);
        assert_eq!(ExitCode::SyntaxOrUsage.code(), 1);
    }
}
