//! # Brand Name Resolution
//!
//! A brand name comes from one of three places, in order of precedence:
//! an explicit caller override, the name inferred by an AI source, or a name
//! derived from the uploaded filename. `BrandName::resolve` applies that order
//! in one place.

use crate::constants::UNNAMED_BRAND;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static INTERVIEW_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[_-]interview").expect("interview marker pattern is valid")
});

/// A non-empty brand name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandName(String);

impl BrandName {
    /// Resolves the brand name with precedence override > inferred > filename.
    ///
    /// Only an empty override counts as absent; any other override is kept
    /// verbatim, whitespace included. Blank inferred names count as absent.
    pub fn resolve(overridden: Option<&str>, inferred: Option<&str>, filename: &str) -> Self {
        if let Some(name) = overridden.filter(|name| !name.is_empty()) {
            return Self(name.to_string());
        }
        if let Some(name) = inferred.filter(|name| !name.trim().is_empty()) {
            return Self(name.trim().to_string());
        }
        Self::from_filename(filename)
    }

    /// Derives a brand name from an uploaded filename.
    ///
    /// `"awesome_brand_interview.md"` becomes `"Awesome Brand"` and
    /// `"my-company-interview.pdf"` becomes `"My-Company"`.
    pub fn from_filename(filename: &str) -> Self {
        let stem = strip_extension(filename);
        let without_marker = INTERVIEW_MARKER.replace_all(stem, "");
        let spaced = without_marker.replace('_', " ");
        let titled = title_case(spaced.trim());
        if titled.is_empty() {
            Self(UNNAMED_BRAND.to_string())
        } else {
            Self(titled)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for BrandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BrandName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Removes the final extension. A name made only of leading dots plus one
/// segment (e.g. `".pdf"`) has no extension.
fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) if filename[..idx].chars().any(|c| c != '.') => &filename[..idx],
        _ => filename,
    }
}

/// Upper-cases the first letter of every run of letters and lower-cases the rest.
fn title_case(input: &str) -> String {
    let mut titled = String::with_capacity(input.len());
    let mut previous_is_letter = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                titled.extend(c.to_lowercase());
            } else {
                titled.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            titled.push(c);
            previous_is_letter = false;
        }
    }
    titled
}
