//! Version pins and version comparison.
//!
//! A pin such as `>=1.2.3` is split into an [`Operator`] and a bare version
//! string. Installed versions are compared the way pip orders them: epoch,
//! numeric release segments (trailing zeros are insignificant), then pre-,
//! post- and dev-release markers. Local labels (`+cpu`) do not take part in
//! ordering.

use crate::error::{EnsureError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static PIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([<>=]*)\s*([0-9.]*)").unwrap());

static VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?xi)
        ^v?
        (?:(?P<epoch>[0-9]+)!)?
        (?P<release>[0-9]+(?:\.[0-9]+)*)
        (?:[-_.]?(?P<pre_l>alpha|a|beta|b|preview|pre|c|rc)[-_.]?(?P<pre_n>[0-9]+)?)?
        (?:-(?P<post_n1>[0-9]+)|[-_.]?(?P<post_l>post|rev|r)[-_.]?(?P<post_n2>[0-9]+)?)?
        (?:[-_.]?(?P<dev_l>dev)[-_.]?(?P<dev_n>[0-9]+)?)?
        (?:\+(?P<local>[a-z0-9]+(?:[-_.][a-z0-9]+)*))?
        $",
    )
    .unwrap()
});

/// Relational operator of a version pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    /// `==`
    #[default]
    Equal,
    /// `>=`
    GreaterOrEqual,
    /// `<=`
    LessOrEqual,
    /// `>`
    Greater,
    /// `<`
    Less,
}

impl Operator {
    /// The textual form used in requirement strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::GreaterOrEqual => ">=",
            Operator::LessOrEqual => "<=",
            Operator::Greater => ">",
            Operator::Less => "<",
        }
    }

    /// Evaluate `installed <op> target`.
    pub fn holds<T: Ord + ?Sized>(&self, installed: &T, target: &T) -> bool {
        let ordering = installed.cmp(target);
        match self {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::GreaterOrEqual => ordering != Ordering::Less,
            Operator::LessOrEqual => ordering != Ordering::Greater,
            Operator::Greater => ordering == Ordering::Greater,
            Operator::Less => ordering == Ordering::Less,
        }
    }
}

impl FromStr for Operator {
    type Err = EnsureError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "==" => Ok(Operator::Equal),
            ">=" => Ok(Operator::GreaterOrEqual),
            "<=" => Ok(Operator::LessOrEqual),
            ">" => Ok(Operator::Greater),
            "<" => Ok(Operator::Less),
            other => Err(EnsureError::UnknownOperator {
                operator: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pre-release phase, ordered alpha < beta < release candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PreRelease {
    Alpha,
    Beta,
    Candidate,
}

impl PreRelease {
    fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "a" | "alpha" => PreRelease::Alpha,
            "b" | "beta" => PreRelease::Beta,
            _ => PreRelease::Candidate,
        }
    }
}

/// A numeric version component of any length.
///
/// Stored as its digits without leading zeros, so date stamps longer than
/// any machine integer still order correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Number(String);

impl Number {
    fn zero() -> Self {
        Number(String::new())
    }

    fn parse(digits: &str) -> Self {
        Number(digits.trim_start_matches('0').to_string())
    }

    fn is_zero(&self) -> bool {
        self.0.is_empty()
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum PreKey<'a> {
    // A bare dev release sorts before any pre-release of the same version.
    DevOnly,
    Pre(PreRelease, &'a Number),
    Final,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum DevKey<'a> {
    Dev(&'a Number),
    Released,
}

/// A parsed package version.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    epoch: Number,
    release: Vec<Number>,
    pre: Option<(PreRelease, Number)>,
    post: Option<Number>,
    dev: Option<Number>,
}

impl Version {
    /// Parse a version string.
    ///
    /// Local labels (`+cu118`) are accepted and dropped.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let caps = VERSION
            .captures(trimmed)
            .ok_or_else(|| EnsureError::InvalidVersionSpec {
                spec: text.to_string(),
            })?;

        let number = |name: &str| caps.name(name).map(|m| Number::parse(m.as_str()));

        let release = caps["release"].split('.').map(Number::parse).collect();

        let pre = caps.name("pre_l").map(|label| {
            (
                PreRelease::from_label(label.as_str()),
                number("pre_n").unwrap_or_else(Number::zero),
            )
        });

        let post = if caps.name("post_n1").is_some() {
            number("post_n1")
        } else if caps.name("post_l").is_some() {
            Some(number("post_n2").unwrap_or_else(Number::zero))
        } else {
            None
        };

        let dev = caps
            .name("dev_l")
            .map(|_| number("dev_n").unwrap_or_else(Number::zero));

        Ok(Self {
            raw: trimmed.to_string(),
            epoch: number("epoch").unwrap_or_else(Number::zero),
            release,
            pre,
            post,
            dev,
        })
    }

    fn significant_release(&self) -> &[Number] {
        let mut end = self.release.len();
        while end > 1 && self.release[end - 1].is_zero() {
            end -= 1;
        }
        &self.release[..end]
    }

    fn pre_key(&self) -> PreKey<'_> {
        match (&self.pre, &self.post, &self.dev) {
            (None, None, Some(_)) => PreKey::DevOnly,
            (Some((phase, n)), _, _) => PreKey::Pre(*phase, n),
            _ => PreKey::Final,
        }
    }

    fn dev_key(&self) -> DevKey<'_> {
        match &self.dev {
            Some(n) => DevKey::Dev(n),
            None => DevKey::Released,
        }
    }
}

impl FromStr for Version {
    type Err = EnsureError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch
            .cmp(&other.epoch)
            .then_with(|| self.significant_release().cmp(other.significant_release()))
            .then_with(|| self.pre_key().cmp(&other.pre_key()))
            .then_with(|| self.post.cmp(&other.post))
            .then_with(|| self.dev_key().cmp(&other.dev_key()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

/// A parsed version pin: operator plus bare version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpec {
    pub operator: Operator,
    pub version: String,
}

impl VersionSpec {
    /// Parse a pin such as `>=1.2`, `==2.0` or `3.1`.
    ///
    /// The operator defaults to `==` when the pin starts with a digit.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || EnsureError::InvalidVersionSpec {
            spec: text.to_string(),
        };
        let trimmed = text.trim();
        let caps = PIN.captures(trimmed).ok_or_else(invalid)?;

        let version = caps[2].trim_matches('.');
        if !version.bytes().any(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        Version::parse(version).map_err(|_| invalid())?;

        let operator = match &caps[1] {
            "" => Operator::Equal,
            op => op.parse()?,
        };

        Ok(Self {
            operator,
            version: version.to_string(),
        })
    }

    /// Whether an installed version string satisfies this pin.
    pub fn is_satisfied_by(&self, installed: &str) -> Result<bool> {
        compare(installed, &self.version, self.operator)
    }

    /// Requirement string handed to the installer, e.g. `requests>=2.0`.
    pub fn requirement_for(&self, package: &str) -> String {
        format!("{}{}", package, self)
    }
}

impl FromStr for VersionSpec {
    type Err = EnsureError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

/// Split a pin string into operator and version.
pub fn parse_pin(text: &str) -> Result<VersionSpec> {
    VersionSpec::parse(text)
}

/// Evaluate `installed <operator> target`, with the operator given as text.
pub fn satisfies(installed: &str, target: &str, operator: &str) -> Result<bool> {
    let operator: Operator = operator.parse()?;
    compare(installed, target, operator)
}

/// Evaluate `installed <operator> target`.
pub fn compare(installed: &str, target: &str, operator: Operator) -> Result<bool> {
    let installed = Version::parse(installed)?;
    let target = Version::parse(target)?;
    Ok(operator.holds(&installed, &target))
}
