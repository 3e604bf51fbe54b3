/**
 * Search Engine
 *
 * Cross-workspace note search over the workspace documents:
 *
 * 1. Workspace filter: pattern against name or description
 * 2. Note filter: pattern against title or content
 * 3. Tag ranking: drop notes sharing no tag with the query, then stable
 *    sort by overlap count, highest first
 * 4. Flatten in workspace order, then paginate
 *
 * Patterns are case-insensitive regular expressions. A pattern that does
 * not compile is matched as a literal substring.
 */

use regex::{Regex, RegexBuilder};
use std::collections::HashSet;

use crate::backend::error::BackendError;
use crate::shared::{Note, Paging, SearchHit, SearchPage, Workspace};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Compiled regexes are capped so a hostile pattern cannot blow up memory.
const REGEX_SIZE_LIMIT: usize = 1 << 20;

/// Case-insensitive text matcher
#[derive(Debug, Clone)]
pub enum Matcher {
    Pattern(Regex),
    /// Lower-cased literal, used when the pattern is not a valid regex
    Literal(String),
}

impl Matcher {
    /// Build a matcher, or `None` for a blank pattern (match everything)
    pub fn new(pattern: &str) -> Option<Self> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return None;
        }

        let matcher = match RegexBuilder::new(pattern)
            .case_insensitive(true)
            .size_limit(REGEX_SIZE_LIMIT)
            .build()
        {
            Ok(regex) => Matcher::Pattern(regex),
            Err(e) => {
                tracing::debug!("Search pattern {:?} is not a regex ({}), matching literally", pattern, e);
                Matcher::Literal(pattern.to_lowercase())
            }
        };
        Some(matcher)
    }

    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::Pattern(regex) => regex.is_match(text),
            Matcher::Literal(needle) => text.to_lowercase().contains(needle.as_str()),
        }
    }
}

/// A validated search request
#[derive(Debug, Clone)]
pub struct SearchQuery {
    workspace: Option<Matcher>,
    note: Option<Matcher>,
    tags: HashSet<String>,
    page: u64,
    limit: u64,
}

impl SearchQuery {
    /// Validate raw parameters
    ///
    /// # Arguments
    /// * `workspace` - Pattern for workspace name/description
    /// * `note` - Pattern for note title/content
    /// * `tags` - Comma-separated tags; blank entries are ignored
    /// * `page` - 1-based page number (default 1)
    /// * `limit` - Page size (default 10)
    ///
    /// # Errors
    /// `Validation` when `page < 1` or `limit < 1`
    pub fn new(
        workspace: Option<&str>,
        note: Option<&str>,
        tags: Option<&str>,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Self, BackendError> {
        let paging = Paging::new(page.unwrap_or(DEFAULT_PAGE), limit.unwrap_or(DEFAULT_LIMIT))?;

        let tags = tags
            .unwrap_or_default()
            .split(',')
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(Self {
            workspace: workspace.and_then(Matcher::new),
            note: note.and_then(Matcher::new),
            tags,
            page: paging.page,
            limit: paging.limit,
        })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    fn matches_workspace(&self, workspace: &Workspace) -> bool {
        self.workspace
            .as_ref()
            .map_or(true, |m| m.is_match(&workspace.name) || m.is_match(&workspace.description))
    }

    fn matches_note(&self, note: &Note) -> bool {
        self.note
            .as_ref()
            .map_or(true, |m| m.is_match(&note.title) || m.is_match(&note.content))
    }

    /// Number of the note's tags that appear in the query tag set
    pub fn tag_score(&self, note: &Note) -> usize {
        note.tags
            .iter()
            .filter(|t| self.tags.contains(&t.to_lowercase()))
            .count()
    }
}

fn hit(workspace: &Workspace, note: &Note) -> SearchHit {
    SearchHit {
        workspace_id: workspace.id.to_string(),
        workspace_name: workspace.name.clone(),
        note_id: note.id.to_string(),
        title: note.title.clone(),
        content: note.content.clone(),
        tags: note.tags.clone(),
        author: note.author.map(|a| a.to_string()),
        created_at: note.created_at,
        updated_at: note.updated_at,
    }
}

/// Notes of one workspace that pass the note filter and tag ranking, in
/// result order
pub fn rank_notes<'a>(workspace: &'a Workspace, query: &SearchQuery) -> Vec<&'a Note> {
    let candidates = workspace.notes.iter().filter(|n| query.matches_note(n));

    if query.tags.is_empty() {
        return candidates.collect();
    }

    let mut scored: Vec<(usize, &Note)> = candidates
        .map(|n| (query.tag_score(n), n))
        .filter(|(score, _)| *score > 0)
        .collect();
    // sort_by is stable: equal scores keep storage order
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, n)| n).collect()
}

/// Run a search over `workspaces` (in iteration order)
pub fn search(workspaces: &[Workspace], query: &SearchQuery) -> SearchPage {
    let results: Vec<SearchHit> = workspaces
        .iter()
        .filter(|ws| query.matches_workspace(ws))
        .flat_map(|ws| rank_notes(ws, query).into_iter().map(move |n| hit(ws, n)))
        .collect();

    let total = results.len();
    let data = paginate(results, query.page, query.limit);

    tracing::debug!(
        "Search over {} workspace(s): {} hit(s), page {} returns {}",
        workspaces.len(),
        total,
        query.page,
        data.len()
    );

    SearchPage {
        total,
        page: query.page,
        limit: query.limit,
        data,
    }
}

/// The 1-based `page` of `items`, `limit` items per page
pub fn paginate<T>(items: Vec<T>, page: u64, limit: u64) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(limit);
    let start = usize::try_from(start).unwrap_or(usize::MAX);
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    items.into_iter().skip(start).take(limit).collect()
}
