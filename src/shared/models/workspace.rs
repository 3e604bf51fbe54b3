/**
 * Workspace Aggregate
 *
 * A workspace owns its notes: notes are embedded in the workspace document
 * and are only ever persisted together with it. Note ids are generated at
 * creation and never change, so a serialized `id` can be echoed back as a
 * `note_id` to locate the same note.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Note embedded in a workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Collaborator who created the note; immutable after creation
    pub author: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a note with a fresh id and `created_at == updated_at`
    pub fn new(author: Uuid, title: String, content: String, tags: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            tags,
            author: Some(author),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields and bump `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the wall clock does.
    pub fn revise(&mut self, title: String, content: String, tags: Vec<String>) {
        self.title = title;
        self.content = content;
        self.tags = tags;
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

/// Workspace document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Collaborator ids in invite order; other half of the membership link
    #[serde(default)]
    pub collaborators: Vec<Uuid>,
    /// Embedded notes in insertion order
    #[serde(default)]
    pub notes: Vec<Note>,
    /// Admin who created the workspace
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub version: i64,
}

impl Workspace {
    pub fn new(name: String, description: String, created_by: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            collaborators: Vec::new(),
            notes: Vec::new(),
            created_by,
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    pub fn has_collaborator(&self, collaborator_id: Uuid) -> bool {
        self.collaborators.contains(&collaborator_id)
    }

    /// Link a collaborator. Returns `false` when already linked.
    pub fn add_collaborator(&mut self, collaborator_id: Uuid) -> bool {
        if self.has_collaborator(collaborator_id) {
            return false;
        }
        self.collaborators.push(collaborator_id);
        true
    }

    /// Linear scan for an embedded note
    pub fn note_mut(&mut self, note_id: Uuid) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id == note_id)
    }

    /// Append a note unless one with the same id is already embedded.
    pub fn push_note(&mut self, note: Note) -> bool {
        if self.notes.iter().any(|n| n.id == note.id) {
            return false;
        }
        self.notes.push(note);
        true
    }
}

/// Split a comma-separated tag list.
///
/// Each tag is trimmed; tags that are empty after trimming are dropped.
/// Order and case are preserved.
pub fn parse_tags(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
