use std::io;
use std::path::Path;

/// Answers whether a source file was produced by a code generator.
///
/// Implementations may touch the filesystem. Errors are returned rather than
/// swallowed so the caller can decide how to degrade.
pub trait GeneratedFileDetector: Sync {
    fn is_generated(&self, path: &Path) -> io::Result<bool>;
}

impl<F> GeneratedFileDetector for F
where
    F: Fn(&Path) -> io::Result<bool> + Sync,
{
    fn is_generated(&self, path: &Path) -> io::Result<bool> {
        self(path)
    }
}

/// Detector that never reports a generated file.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoGeneratedFiles;

impl GeneratedFileDetector for NoGeneratedFiles {
    fn is_generated(&self, _path: &Path) -> io::Result<bool> {
        Ok(false)
    }
}
