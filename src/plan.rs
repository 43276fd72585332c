use serde::Deserialize;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

/// Subdirectories prepared under the target root before any file is written.
pub const TARGET_DIRS: &[&str] = &[
    "getting-started",
    "features",
    "architecture",
    "api",
    "guides",
];

struct LegacyDoc {
    source: &'static str,
    target: &'static str,
    id: &'static str,
    title: &'static str,
    position: u32,
}

const LEGACY_DOCS: &[LegacyDoc] = &[
    LegacyDoc {
        source: "README.md",
        target: "intro.md",
        id: "intro",
        title: "Introduction",
        position: 1,
    },
    LegacyDoc {
        source: "features.md",
        target: "features/core-features.md",
        id: "core-features",
        title: "Core Features",
        position: 1,
    },
    LegacyDoc {
        source: "architecture.md",
        target: "architecture/overview.md",
        id: "overview",
        title: "Architecture Overview",
        position: 1,
    },
    LegacyDoc {
        source: "api_reference/rag_api.md",
        target: "api/rag-api.md",
        id: "rag-api",
        title: "RAG API Reference",
        position: 1,
    },
];

struct StubDoc {
    target: &'static str,
    id: &'static str,
    title: &'static str,
    position: u32,
}

const STUB_DOCS: &[StubDoc] = &[
    StubDoc {
        target: "getting-started/installation.md",
        id: "installation",
        title: "Installation",
        position: 1,
    },
    StubDoc {
        target: "getting-started/quickstart.md",
        id: "quickstart",
        title: "Quickstart Guide",
        position: 2,
    },
    StubDoc {
        target: "guides/basic-usage.md",
        id: "basic-usage",
        title: "Basic Usage Guide",
        position: 1,
    },
];

/// The three metadata fields every written document starts with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    pub id: String,
    pub title: String,
    pub sidebar_position: u32,
}

/// One legacy document to carry over: where it comes from, where it lands,
/// and the metadata block it gets wrapped in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MigrationEntry {
    pub source: PathBuf,
    pub target: PathBuf,
    #[serde(flatten)]
    pub front_matter: FrontMatter,
}

/// A stub written only when the target does not already exist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceholderEntry {
    pub target: PathBuf,
    #[serde(flatten)]
    pub front_matter: FrontMatter,
}

/// The full ordered work list for one run. Entries are processed strictly in
/// list order; directories first, then migrations, then placeholders.
#[derive(Debug, Clone)]
pub struct MigrationPlan {
    pub dirs: Vec<PathBuf>,
    pub migrations: Vec<MigrationEntry>,
    pub placeholders: Vec<PlaceholderEntry>,
}

impl MigrationPlan {
    /// The fixed plan the legacy migration tool hardcoded.
    pub fn built_in() -> Self {
        let migrations = LEGACY_DOCS
            .iter()
            .map(|doc| MigrationEntry {
                source: PathBuf::from(doc.source),
                target: PathBuf::from(doc.target),
                front_matter: FrontMatter {
                    id: doc.id.to_string(),
                    title: doc.title.to_string(),
                    sidebar_position: doc.position,
                },
            })
            .collect();

        let placeholders = STUB_DOCS
            .iter()
            .map(|doc| PlaceholderEntry {
                target: PathBuf::from(doc.target),
                front_matter: FrontMatter {
                    id: doc.id.to_string(),
                    title: doc.title.to_string(),
                    sidebar_position: doc.position,
                },
            })
            .collect();

        MigrationPlan {
            dirs: TARGET_DIRS.iter().map(|dir| PathBuf::from(*dir)).collect(),
            migrations,
            placeholders,
        }
    }

    /// Returns the first target path that appears twice within a pass.
    ///
    /// Targets are assumed unique per pass; a duplicate would silently
    /// overwrite an earlier entry's output, so plan loading treats this as a
    /// configuration error rather than running with it.
    pub fn duplicate_target(&self) -> Option<&Path> {
        let mut seen: HashSet<&Path> = HashSet::new();
        for entry in &self.migrations {
            if !seen.insert(entry.target.as_path()) {
                return Some(entry.target.as_path());
            }
        }

        let mut seen: HashSet<&Path> = HashSet::new();
        for entry in &self.placeholders {
            if !seen.insert(entry.target.as_path()) {
                return Some(entry.target.as_path());
            }
        }

        None
    }
}
