// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Token normalization.
//!
//! Gauss codes arrive either as integers or as text copied from papers and
//! tables, where the entries are often comma separated (`1, -4, 3, -1`).
//! After shell word splitting such input becomes tokens like `"1,"` and
//! `"-4,"`. Normalization strips the separators and parses each token.

use crate::diagram::constants::SEPARATOR;
use crate::error::McnError;

/// A value that can be read as one signed Gauss code entry.
pub trait GaussToken {
    fn to_entry(&self) -> Result<i32, McnError>;
}

impl GaussToken for str {
    fn to_entry(&self) -> Result<i32, McnError> {
        let cleaned: String = self.chars().filter(|&c| c != SEPARATOR).collect();
        cleaned.trim().parse().map_err(|_| McnError::Format {
            token: self.to_string(),
        })
    }
}

impl GaussToken for String {
    fn to_entry(&self) -> Result<i32, McnError> {
        self.as_str().to_entry()
    }
}

impl GaussToken for i32 {
    fn to_entry(&self) -> Result<i32, McnError> {
        Ok(*self)
    }
}

impl GaussToken for i64 {
    fn to_entry(&self) -> Result<i32, McnError> {
        i32::try_from(*self).map_err(|_| McnError::Format {
            token: self.to_string(),
        })
    }
}

impl<T: GaussToken + ?Sized> GaussToken for &T {
    fn to_entry(&self) -> Result<i32, McnError> {
        (**self).to_entry()
    }
}

/// Convert raw tokens into signed Gauss code entries, in order.
///
/// Separators are removed before conversion; no other validation is done
/// here (see [`GaussCode::new`](crate::gauss::GaussCode::new)).
///
/// # Errors
///
/// Returns [`McnError::Format`] for the first token that is not an integer.
///
/// # Example
///
/// ```
/// use meridional_coloring::gauss::normalize;
///
/// let code = normalize(["1,", "-4,", "3", "-1"]).unwrap();
/// assert_eq!(code, vec![1, -4, 3, -1]);
/// ```
pub fn normalize<T, I>(tokens: I) -> Result<Vec<i32>, McnError>
where
    T: GaussToken,
    I: IntoIterator<Item = T>,
{
    tokens.into_iter().map(|token| token.to_entry()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_tokens() {
        assert_eq!(
            normalize(["1", "-4", "3", "-1"]).unwrap(),
            vec![1, -4, 3, -1]
        );
    }

    #[test]
    fn test_trailing_separators() {
        assert_eq!(
            normalize(["1,", "-4,", "3,", "-1"]).unwrap(),
            vec![1, -4, 3, -1]
        );
    }

    #[test]
    fn test_embedded_separator_is_stripped() {
        assert_eq!(normalize([",-2"]).unwrap(), vec![-2]);
        assert_eq!(normalize(["1,2"]).unwrap(), vec![12]);
    }

    #[test]
    fn test_owned_strings() {
        let tokens = vec![String::from(" 7 "), String::from("-7,")];
        assert_eq!(normalize(&tokens).unwrap(), vec![7, -7]);
    }

    #[test]
    fn test_integers() {
        assert_eq!(normalize([2, -2]).unwrap(), vec![2, -2]);
        assert_eq!(normalize([5i64, -5i64]).unwrap(), vec![5, -5]);
    }

    #[test]
    fn test_format_error() {
        assert_eq!(
            normalize(["1", "x", "-1"]),
            Err(McnError::Format {
                token: "x".to_string()
            })
        );
        assert!(normalize([","]).is_err());
        assert!(normalize([i64::MAX]).is_err());
    }

    #[test]
    fn test_empty_input() {
        let tokens: [&str; 0] = [];
        assert_eq!(normalize(tokens).unwrap(), Vec::<i32>::new());
    }
}
