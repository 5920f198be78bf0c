// Non-interactive subcommands: list and explain

use anyhow::{bail, Result};
use std::io::Write;

use crate::catalog::{self, CatalogEntry, CategoryFilter};

/// Catalog listing grouped by category, in palette order
pub fn format_list(filter: CategoryFilter) -> String {
    let entries = catalog::filter(filter);
    let name_width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    let template_width = entries.iter().map(|e| e.template.len()).max().unwrap_or(0);

    let mut out = String::new();
    let mut current = None;
    for entry in entries {
        if current != Some(entry.category) {
            if current.is_some() {
                out.push('\n');
            }
            out.push_str(entry.category.label());
            out.push('\n');
            current = Some(entry.category);
        }
        out.push_str(&format!(
            "  {} {:<nw$}  {:<tw$}  {}\n",
            entry.danger.icon(),
            entry.name,
            entry.template,
            entry.summary,
            nw = name_width,
            tw = template_width,
        ));
    }
    out
}

pub fn format_list_json(filter: CategoryFilter) -> Result<String> {
    Ok(serde_json::to_string_pretty(&catalog::filter(filter))?)
}

/// Full explanation of one entry
pub fn format_explain(entry: &CatalogEntry) -> String {
    format!(
        "{name}  {badge}\n{danger}\n\n{summary}\n範本：{template}\n分類：{category}\n\n{detail}\n",
        name = entry.name,
        badge = entry.danger.badge(),
        danger = entry.danger.description(),
        summary = entry.summary,
        template = entry.template,
        category = entry.category.label(),
        detail = entry.detail,
    )
}

pub fn run_list(filter: CategoryFilter, json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        writeln!(out, "{}", format_list_json(filter)?)?;
    } else {
        write!(out, "{}", format_list(filter))?;
    }
    Ok(())
}

/// Explain `name`. Unknown names are an error, with prefix suggestions.
pub fn run_explain(name: &str, out: &mut dyn Write) -> Result<()> {
    let name = name.trim();
    let Some(entry) = catalog::lookup(name) else {
        let candidates = catalog::match_prefix(name);
        if candidates.is_empty() {
            bail!(
                "'{}' is not in the command catalog\n\nRun `teachterm list` to see every command",
                name
            );
        }
        bail!(
            "'{}' is not in the command catalog\n\n可能的補齊選項：{}",
            name,
            candidates.join(", ")
        );
    };

    write!(out, "{}", format_explain(entry))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    #[test]
    fn test_list_groups_by_category() {
        let text = format_list(CategoryFilter::All);
        let query = text.find("查詢/瀏覽 (Query)").unwrap();
        let network = text.find("網路操作 (Network)").unwrap();
        assert!(query < network);
        assert!(text.contains("ls -l"));
        assert_eq!(text.lines().filter(|l| l.starts_with("  ")).count(), 24);
    }

    #[test]
    fn test_list_single_category() {
        let text = format_list(CategoryFilter::Only(Category::Network));
        assert!(text.starts_with("網路操作 (Network)\n"));
        assert!(text.contains("netstat"));
        assert!(!text.contains("chmod"));
    }

    #[test]
    fn test_list_json_is_parseable() {
        let json = format_list_json(CategoryFilter::Only(Category::Permission)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["name"], "chmod");
        assert_eq!(items[0]["danger"], "medium");
        assert_eq!(items[0]["category"], "permission");
    }

    #[test]
    fn test_explain_known_command() {
        let mut out = Vec::new();
        run_explain("rm", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("rm  🔴 高危險度"));
        assert!(text.contains("範本：rm test.txt"));
        assert!(text.contains("rm -rf"));
    }

    #[test]
    fn test_explain_unknown_command_suggests_prefixes() {
        let mut out = Vec::new();
        let err = run_explain("ch", &mut out).unwrap_err().to_string();
        assert!(err.contains("chmod, chown"));
        assert!(out.is_empty());

        let err = run_explain("bogus", &mut out).unwrap_err().to_string();
        assert!(err.contains("teachterm list"));
    }
}
