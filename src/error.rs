use miette::Diagnostic;
use thiserror::Error;

/// Main error type for appicon operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("invalid canvas dimension: {width}x{height}")]
    #[diagnostic(code(appicon::canvas))]
    InvalidDimension { width: u32, height: u32 },

    #[error("pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    #[diagnostic(code(appicon::canvas))]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("source image not found: {path}")]
    #[diagnostic(
        code(appicon::source),
        help("pass the path to an existing PNG or JPEG image")
    )]
    SourceNotFound { path: std::path::PathBuf },

    #[error("failed to decode {path}: {message}")]
    #[diagnostic(code(appicon::source))]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("unsupported scale factor: {scale}x")]
    #[diagnostic(
        code(appicon::resample),
        help("the size catalogue only uses 1x, 2x, and 3x")
    )]
    UnsupportedScale { scale: u32 },

    #[error("base image must be square, got {width}x{height}")]
    #[diagnostic(code(appicon::resample))]
    InvalidBase { width: u32, height: u32 },

    #[error("manifest has {actual} entries but {expected} variants were requested")]
    #[diagnostic(code(appicon::manifest))]
    ManifestCountMismatch { expected: usize, actual: usize },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(appicon::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(appicon::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, IconError>;
