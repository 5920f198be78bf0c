// Command catalog - static teaching data for common shell commands
//
// The catalog is immutable and loaded once. Lookups borrow `'static` entries;
// nothing in the crate owns or mutates catalog data.

mod danger;
mod entries;

pub use danger::DangerLevel;

use entries::ENTRIES;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound;
use std::str::FromStr;

/// One teachable command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Lookup key, matched against the first token of the input line
    pub name: &'static str,
    /// Example command line inserted into the shell (never submitted)
    pub template: &'static str,
    /// One-line explanation shown in the tooltip
    pub summary: &'static str,
    /// Longer plain-text explanation (usage rows, examples)
    pub detail: &'static str,
    pub danger: DangerLevel,
    pub category: Category,
}

/// Command category used to group the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Query,
    #[serde(rename = "file")]
    FileOperations,
    Permission,
    #[serde(rename = "system")]
    SystemControl,
    Network,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Query,
        Category::FileOperations,
        Category::Permission,
        Category::SystemControl,
        Category::Network,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Query => "查詢/瀏覽 (Query)",
            Category::FileOperations => "檔案操作 (File Operations)",
            Category::Permission => "權限設定 (Permission)",
            Category::SystemControl => "系統操作 (System Control)",
            Category::Network => "網路操作 (Network)",
        }
    }

    /// Short ASCII name accepted on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Query => "query",
            Category::FileOperations => "file",
            Category::Permission => "permission",
            Category::SystemControl => "system",
            Category::Network => "network",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category selection in the palette: everything, or one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "全部",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Next filter in `categories()` order, wrapping around
    pub fn next(&self) -> CategoryFilter {
        let all = categories();
        let idx = all.iter().position(|c| c == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    /// Accepts the ASCII slug ("query", "file", ...), "all", or the full label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("all") || wanted == "全部" {
            return Ok(CategoryFilter::All);
        }
        Category::ALL
            .iter()
            .find(|c| c.slug().eq_ignore_ascii_case(wanted) || c.label() == wanted)
            .map(|c| CategoryFilter::Only(*c))
            .ok_or_else(|| {
                let names: Vec<&str> = Category::ALL.iter().map(|c| c.slug()).collect();
                format!("unknown category '{}' (expected all, {})", s, names.join(", "))
            })
    }
}

static INDEX: Lazy<BTreeMap<&'static str, &'static CatalogEntry>> =
    Lazy::new(|| ENTRIES.iter().map(|e| (e.name, e)).collect());

/// Exact-name lookup. Pure; empty or unknown names return `None`.
pub fn lookup(name: &str) -> Option<&'static CatalogEntry> {
    INDEX.get(name).copied()
}

/// All entries in display order
pub fn entries() -> &'static [CatalogEntry] {
    ENTRIES
}

/// Ordered filter list: "全部" first, then each category
pub fn categories() -> [CategoryFilter; 6] {
    [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Query),
        CategoryFilter::Only(Category::FileOperations),
        CategoryFilter::Only(Category::Permission),
        CategoryFilter::Only(Category::SystemControl),
        CategoryFilter::Only(Category::Network),
    ]
}

/// Entries matching `filter`, in display order
pub fn filter(filter: CategoryFilter) -> Vec<&'static CatalogEntry> {
    ENTRIES
        .iter()
        .filter(|e| match filter {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => e.category == category,
        })
        .collect()
}

/// Names starting with `prefix`, sorted. An empty prefix matches nothing.
pub fn match_prefix(prefix: &str) -> Vec<&'static str> {
    if prefix.is_empty() {
        return Vec::new();
    }
    INDEX
        .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
        .take_while(|(name, _)| name.starts_with(prefix))
        .map(|(name, _)| *name)
        .collect()
}
