/// Options controlling how strictly a `.blend` file is decoded.
///
/// The defaults match the lenient behavior: unknown header flags are reported as
/// `Unknown` and catalog indices are only checked when they are looked up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fail with `UnrecognizedFlag` when a header flag byte is not recognized.
    pub strict_flags: bool,
    /// Validate every catalog index as soon as the catalog is decoded.
    pub validate_indices: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict_flags(mut self, strict_flags: bool) -> Self {
        self.strict_flags = strict_flags;
        self
    }

    pub fn with_validate_indices(mut self, validate_indices: bool) -> Self {
        self.validate_indices = validate_indices;
        self
    }
}
