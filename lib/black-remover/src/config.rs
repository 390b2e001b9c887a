use derivative::Derivative;
use derive_setters::Setters;
use std::path::PathBuf;

/// Input and output locations of a single conversion
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct RemoveConfig {
    /// Image to read, any format the decoder recognizes
    #[derivative(Default(value = "PathBuf::new()"))]
    pub input: PathBuf,
    /// Destination file, always written as PNG
    #[derivative(Default(value = "PathBuf::new()"))]
    pub output: PathBuf,
}

impl RemoveConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self::default()
            .with_input(input.into())
            .with_output(output.into())
    }
}
