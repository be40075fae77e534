use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish argument mistakes from
/// failures while reading, transforming, or writing documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the requested document was produced
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O error, invalid document, invalid config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency report processing.
///
/// Uses thiserror to derive Display and Error traits; every variant that a
/// user can act on carries a hint.
#[derive(Debug, Error)]
pub enum DepTreeError {
    #[error("Input file not found: {path}\n\n💡 Hint: {suggestion}")]
    InputNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid dependency tree document: {path}\nDetails: {details}\n\n💡 Hint: Tree documents are produced by `deptree parse` and map a project name to a list of nodes")]
    InvalidTreeDocument { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid classpath header pattern: {pattern}\nDetails: {details}\n\n💡 Hint: The header pattern is a regular expression such as '^\\w+(Runtime|Compile)Classpath'")]
    InvalidHeaderPattern { pattern: String, details: String },

    /// Validation error for requests and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_input_not_found_display() {
        let error = DepTreeError::InputNotFound {
            path: PathBuf::from("/test/dependencies.txt"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Input file not found"));
        assert!(display.contains("/test/dependencies.txt"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
    }

    #[test]
    fn test_invalid_tree_document_display() {
        let error = DepTreeError::InvalidTreeDocument {
            path: PathBuf::from("/test/tree.json"),
            details: "expected value at line 1 column 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid dependency tree document"));
        assert!(display.contains("/test/tree.json"));
        assert!(display.contains("expected value"));
        assert!(display.contains("deptree parse"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = DepTreeError::FileWriteError {
            path: PathBuf::from("/test/output.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/output.json"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_invalid_header_pattern_display() {
        let error = DepTreeError::InvalidHeaderPattern {
            pattern: "(unclosed".to_string(),
            details: "unclosed group".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid classpath header pattern"));
        assert!(display.contains("(unclosed"));
        assert!(display.contains("unclosed group"));
    }

    #[test]
    fn test_security_error_display() {
        let error = DepTreeError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Symbolic links are not allowed"));
        assert!(display.contains("Use a regular file instead"));
    }
}
