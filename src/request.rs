//! Turn the raw `TARGET ENTRY[:INTERVAL]...` tokens into a [`Request`].
use std::num::NonZeroU32;

use crate::error::RequestError;

/// Mean time between nuzzles, in hours, when an entry gives no interval.
pub const DEFAULT_INTERVAL: NonZeroU32 = NonZeroU32::MIN.saturating_add(23);

/// One animal to patch: its `ThingDef` name and nuzzle interval.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroU32;
/// use nuzzle_gen::request::{Entry, DEFAULT_INTERVAL};
///
/// let e = Entry::parse("Muffalo:12", DEFAULT_INTERVAL).unwrap();
/// assert_eq!(e.name, "Muffalo");
/// assert_eq!(e.interval, NonZeroU32::new(12).unwrap());
///
/// let e = Entry::parse("Chicken", DEFAULT_INTERVAL).unwrap();
/// assert_eq!(e.interval, DEFAULT_INTERVAL);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// `defName` of the animal's `ThingDef`.
    pub name: String,
    /// `nuzzleMtbHours` value.
    pub interval: NonZeroU32,
}

impl Entry {
    /// Parse a single `name` or `name:interval` token.
    ///
    /// The token is split on the first `:` only. An empty interval (`"Boomalope:"`)
    /// counts as absent and takes `default_interval`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::EmptyEntryName`] when nothing precedes the `:`,
    /// and [`RequestError::InvalidInterval`] when the interval is not a
    /// positive integer or does not fit in `u32`.
    pub fn parse(token: &str, default_interval: NonZeroU32) -> Result<Self, RequestError> {
        let (name, value) = match token.split_once(':') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };

        if name.is_empty() {
            return Err(RequestError::EmptyEntryName {
                token: token.to_string(),
            });
        }

        let interval = match value {
            None | Some("") => default_interval,
            Some(raw) => raw
                .parse::<NonZeroU32>()
                .map_err(|_| RequestError::InvalidInterval {
                    name: name.to_string(),
                    value: raw.to_string(),
                })?,
        };

        Ok(Self {
            name: name.to_string(),
            interval,
        })
    }
}

/// A fully parsed generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Mod name; becomes the destination directory and the `<name>` field.
    pub target: String,
    /// Entries in command-line order.
    pub entries: Vec<Entry>,
}

impl Request {
    /// Build a request from the target token and the entry tokens that follow it.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingTarget`] for an absent or empty target,
    /// [`RequestError::NoEntries`] when no entry tokens follow, or the first
    /// error produced by [`Entry::parse`].
    pub fn parse<S: AsRef<str>>(
        target: Option<&str>,
        tokens: &[S],
        default_interval: NonZeroU32,
    ) -> Result<Self, RequestError> {
        let target = match target {
            Some(t) if !t.is_empty() => t,
            _ => return Err(RequestError::MissingTarget),
        };

        if tokens.is_empty() {
            return Err(RequestError::NoEntries {
                target: target.to_string(),
            });
        }

        let entries = tokens
            .iter()
            .map(|t| Entry::parse(t.as_ref(), default_interval))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            target: target.to_string(),
            entries,
        })
    }
}
