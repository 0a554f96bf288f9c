use super::SubstitutionMatrix;
use crate::config::ConfigError;
use std::str::FromStr;

/// Parses a matrix name such as `blosum62` or `PAM250`, ignoring case and
/// surrounding whitespace.
impl FromStr for SubstitutionMatrix {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        SubstitutionMatrix::ALL
            .into_iter()
            .find(|matrix| matrix.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::UnknownMatrix(name.to_string()))
    }
}

impl TryFrom<&str> for SubstitutionMatrix {
    type Error = ConfigError;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
