//! Family members and the roster they are resolved against.

use crate::error::{LedgerError, Result};
use crate::normalize::normalize;
use crate::token::{stems, Word};
use std::fmt;
use std::ops::Range;

/// A family member, identified by the name given on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Member(String);

impl Member {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A roster member found in a line, and the words it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    pub member: Member,
    pub at: usize,
    pub len: usize,
}

impl Mention {
    /// Index of the first word after the mention.
    pub fn end(&self) -> usize {
        self.at + self.len
    }
}

#[derive(Debug, Clone)]
struct RosterEntry {
    member: Member,
    /// Normalized, lowercased words of the name.
    words: Vec<String>,
}

/// The fixed, ordered set of members for a run.
///
/// # Invariants
///
/// - At least one member
/// - No two members share the same normalized name
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Vec<RosterEntry>,
    /// Entry indices, longest names first, so `Abu Omar` wins over `Abu`.
    match_order: Vec<usize>,
}

impl Roster {
    /// Builds a roster from names in the order given.
    ///
    /// Blank names are skipped and later duplicates (compared after
    /// normalization, case-insensitively) are dropped. Fails with
    /// [`LedgerError::EmptyRoster`] when nothing is left.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<RosterEntry> = Vec::new();

        for name in names {
            let display = name.as_ref().split_whitespace().collect::<Vec<_>>().join(" ");
            let words: Vec<String> = normalize(&display)
                .to_lowercase()
                .split(' ')
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect();
            if words.is_empty() || entries.iter().any(|e| e.words == words) {
                continue;
            }
            entries.push(RosterEntry {
                member: Member(display),
                words,
            });
        }

        if entries.is_empty() {
            return Err(LedgerError::EmptyRoster);
        }

        let mut match_order: Vec<usize> = (0..entries.len()).collect();
        match_order.sort_by_key(|&i| std::cmp::Reverse(entries[i].words.len()));

        Ok(Roster {
            entries,
            match_order,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for a roster built with [`Roster::new`].
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Members in roster order.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.entries.iter().map(|e| &e.member)
    }

    /// Roster position of a member.
    pub fn position(&self, member: &Member) -> Option<usize> {
        self.entries.iter().position(|e| &e.member == member)
    }

    pub fn contains(&self, member: &Member) -> bool {
        self.position(member).is_some()
    }

    /// Whether some member's name starts with this normalized word.
    pub fn starts_a_name(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.words[0] == key)
    }

    /// Matches a member whose name starts at word `at`.
    ///
    /// The first word may carry an Arabic prefix (`لسارة`, `وأحمد`); the
    /// rest of a multi-word name must match exactly.
    pub fn match_at(&self, words: &[Word], at: usize) -> Option<Mention> {
        let first = words.get(at)?;
        let first_stems = first.stems();

        self.match_order.iter().find_map(|&i| {
            let entry = &self.entries[i];
            let len = entry.words.len();
            let candidate = words.get(at..at + len)?;

            let head_matches = first_stems.contains(&entry.words[0].as_str());
            let tail_matches = candidate[1..]
                .iter()
                .zip(&entry.words[1..])
                .all(|(w, name)| &w.key == name);

            (head_matches && tail_matches).then(|| Mention {
                member: entry.member.clone(),
                at,
                len,
            })
        })
    }

    /// Every member mention inside `range`, left to right.
    pub fn mentions(&self, words: &[Word], range: Range<usize>) -> Vec<Mention> {
        let end = range.end.min(words.len());
        let mut found = Vec::new();
        let mut i = range.start;

        while i < end {
            match self.match_at(words, i) {
                Some(mention) if mention.end() <= end => {
                    i = mention.end();
                    found.push(mention);
                }
                _ => i += 1,
            }
        }

        found
    }

    /// Whether the word is a member name behind the Arabic `ل` ("for").
    pub fn is_dative_mention(&self, word: &Word) -> bool {
        word.key.starts_with('ل')
            && !self.starts_a_name(&word.key)
            && stems(&word.key)
                .iter()
                .skip(1)
                .any(|stem| self.starts_a_name(stem))
    }
}
