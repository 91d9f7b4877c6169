//! Footer newsletter address check
//!
//! Addresses are validated and acknowledged in the browser only.

use derive_more::Display;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubscribeError {
    #[error("Please enter your email address")]
    Empty,

    #[error("An email address needs an @")]
    MissingAt,

    #[error("Something is missing before the @")]
    EmptyLocalPart,

    #[error("The domain after the @ looks incomplete")]
    InvalidDomain,
}

/// A syntactically plausible e-mail address
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(input: &str) -> Result<Self, SubscribeError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SubscribeError::Empty);
        }
        let (local, domain) = trimmed.rsplit_once('@').ok_or(SubscribeError::MissingAt)?;
        if local.is_empty() {
            return Err(SubscribeError::EmptyLocalPart);
        }
        let valid_domain = domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
            && !domain.ends_with('.')
            && !domain.contains(char::is_whitespace);
        if !valid_domain {
            return Err(SubscribeError::InvalidDomain);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Confirmation line shown under the form
pub fn acknowledgement(address: &EmailAddress) -> String {
    format!("Thanks! {address} is on the list.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        let email = EmailAddress::parse("  info@teksoi.com ").unwrap();
        assert_eq!(email.as_str(), "info@teksoi.com");
        assert_eq!(email.to_string(), "info@teksoi.com");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(EmailAddress::parse(""), Err(SubscribeError::Empty));
        assert_eq!(EmailAddress::parse("   "), Err(SubscribeError::Empty));
    }

    #[test]
    fn test_rejects_missing_at() {
        assert_eq!(
            EmailAddress::parse("teksoi.com"),
            Err(SubscribeError::MissingAt)
        );
    }

    #[test]
    fn test_rejects_empty_local_part() {
        assert_eq!(
            EmailAddress::parse("@teksoi.com"),
            Err(SubscribeError::EmptyLocalPart)
        );
    }

    #[test]
    fn test_rejects_bad_domain() {
        for input in ["a@teksoi", "a@.com", "a@teksoi.", "a@", "a@tek soi.com"] {
            assert_eq!(
                EmailAddress::parse(input),
                Err(SubscribeError::InvalidDomain),
                "{input}"
            );
        }
    }

    #[test]
    fn test_acknowledgement() {
        let email = EmailAddress::parse("a@b.co").unwrap();
        assert_eq!(acknowledgement(&email), "Thanks! a@b.co is on the list.");
    }
}
