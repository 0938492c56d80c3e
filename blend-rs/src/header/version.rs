/// The three ASCII version digits from the file header, e.g. `281` for 2.81.
///
/// The digits are kept as written; no numeric range is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub digits: [u8; 3],
}

impl Version {
    pub fn new(digits: [u8; 3]) -> Self {
        Self { digits }
    }

    /// The first digit.
    pub fn major(&self) -> char {
        char::from(self.digits[0])
    }

    /// The remaining two digits.
    ///
    /// Each byte maps to one `char`, the same way as [`Version::major`].
    pub fn minor(&self) -> String {
        self.digits[1..].iter().copied().map(char::from).collect()
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major(), self.minor())
    }
}
