//! Trackable vocabulary and free-text scanning.

use derive_getters::Getters;
use giotto_error::{VocabularyError, VocabularyErrorKind, VocabularyResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Prefixes of the dynamically ranged day/night trackable family.
const RANGED_PREFIXES: [&str; 2] = ["cetus.day.", "cetus.night."];

/// Meta-selectors recognized alongside vocabulary terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opt {
    All,
    Events,
    Items,
}

impl Opt {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "all" => Some(Self::All),
            "events" => Some(Self::Events),
            "items" => Some(Self::Items),
            _ => None,
        }
    }
}

/// The controlled vocabulary of trackable event and reward types.
///
/// The static sets are externally supplied — the framework ships them as a
/// camelCase JSON resource — and must be disjoint. The `cetus.day.<n>` /
/// `cetus.night.<n>` family is matched structurally rather than enumerated.
///
/// # Examples
///
/// ```
/// use giotto_core::TrackableVocabulary;
///
/// let vocabulary = TrackableVocabulary::from_json_str(
///     r#"{ "eventTypes": ["alerts"], "rewardTypes": ["nitain"] }"#,
/// )
/// .unwrap();
/// let selection = vocabulary.scan("alerts and cetus.day.50 in here");
/// assert_eq!(selection.events(), &["alerts", "cetus.day.50"]);
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    Serialize,
    Deserialize,
    Getters,
    derive_new::new,
    derive_setters::Setters,
)]
#[serde(rename_all = "camelCase")]
#[setters(prefix = "with_")]
pub struct TrackableVocabulary {
    /// Trackable event types
    #[serde(default)]
    #[new(default)]
    event_types: Vec<String>,

    /// Trackable reward/item types
    #[serde(default)]
    #[new(default)]
    reward_types: Vec<String>,
}

impl TrackableVocabulary {
    /// Load and validate a vocabulary from a JSON document.
    pub fn from_json_str(json: &str) -> VocabularyResult<Self> {
        let vocabulary: Self = serde_json::from_str(json)
            .map_err(|e| VocabularyError::new(VocabularyErrorKind::JsonParse(e.to_string())))?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Load and validate a vocabulary from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> VocabularyResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| VocabularyError::new(VocabularyErrorKind::FileRead(e.to_string())))?;
        Self::from_json_str(&content)
    }

    fn validate(&self) -> VocabularyResult<()> {
        let mut events = HashSet::new();
        for term in &self.event_types {
            if term.trim().is_empty() {
                return Err(VocabularyError::new(VocabularyErrorKind::EmptyTerm));
            }
            events.insert(term.to_ascii_lowercase());
        }
        for term in &self.reward_types {
            if term.trim().is_empty() {
                return Err(VocabularyError::new(VocabularyErrorKind::EmptyTerm));
            }
            if events.contains(&term.to_ascii_lowercase()) {
                return Err(VocabularyError::new(VocabularyErrorKind::OverlappingTerm(
                    term.clone(),
                )));
            }
        }
        Ok(())
    }

    /// Scan a free-text fragment for recognized trackables.
    ///
    /// Tokens are matched case-insensitively against the vocabulary, the
    /// ranged day/night family, and the `all`/`events`/`items`
    /// meta-selectors. Anything else — noise words, channel references,
    /// malformed tokens — is ignored; scanning never fails. The result is
    /// deduplicated in first-occurrence order.
    pub fn scan(&self, text: &str) -> TrackableSelection {
        let mut selection = TrackableSelection::default();
        for raw in text.split_whitespace() {
            let token = raw.to_ascii_lowercase();
            if let Some(opt) = Opt::parse(&token) {
                self.expand_opt(opt, &mut selection);
            } else if ranged_variant(&token) {
                selection.push_event(token);
            } else if contains_term(&self.event_types, &token) {
                selection.push_event(token);
            } else if contains_term(&self.reward_types, &token) {
                selection.push_item(token);
            }
        }
        debug!(
            events = selection.events().len(),
            items = selection.items().len(),
            "Scanned trackables"
        );
        selection
    }

    fn expand_opt(&self, opt: Opt, selection: &mut TrackableSelection) {
        if matches!(opt, Opt::All | Opt::Events) {
            for term in &self.event_types {
                selection.push_event(term.to_ascii_lowercase());
            }
        }
        if matches!(opt, Opt::All | Opt::Items) {
            for term in &self.reward_types {
                selection.push_item(term.to_ascii_lowercase());
            }
        }
    }
}

fn contains_term(terms: &[String], token: &str) -> bool {
    terms.iter().any(|term| term.eq_ignore_ascii_case(token))
}

/// Whether a token belongs to the ranged `cetus.day.<n>` / `cetus.night.<n>`
/// family, with `<n>` in `[0, 999]`.
fn ranged_variant(token: &str) -> bool {
    RANGED_PREFIXES.iter().any(|prefix| {
        token.strip_prefix(prefix).is_some_and(|rest| {
            !rest.is_empty() && rest.len() <= 3 && rest.bytes().all(|b| b.is_ascii_digit())
        })
    })
}

/// Recognized trackables split into events and items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct TrackableSelection {
    /// Matched event types, first-occurrence order
    events: Vec<String>,
    /// Matched reward/item types, first-occurrence order
    items: Vec<String>,
}

impl TrackableSelection {
    /// Whether nothing at all was recognized.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.items.is_empty()
    }

    fn push_event(&mut self, term: String) {
        if !self.events.contains(&term) {
            self.events.push(term);
        }
    }

    fn push_item(&mut self, term: String) {
        if !self.items.contains(&term) {
            self.items.push(term);
        }
    }
}
