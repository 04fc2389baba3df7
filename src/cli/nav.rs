//! `nav` command: print the navigation tree.
//!
//! Without a `nav` key the tree is generated from the docs directory.

use super::common::{locate_config, report_warnings, source_name};
use anyhow::{Context, Result};
use docplan::config::load;
use docplan::config::section::{NavTarget, Navigation, NavigationNode};
use docplan::docs::{docs_root, scan_docs};
use docplan::debug;
use std::fmt::Write;
use std::path::Path;

pub fn run_nav(config: &Path, flat: bool) -> Result<()> {
    let path = locate_config(config)?;
    let resolved = load(&path).with_context(|| format!("Failed to resolve '{}'", path.display()))?;
    report_warnings(&resolved.warnings, &source_name(&path));

    let plan = resolved.plan;
    let nav = if plan.nav.is_auto() {
        let docs_dir = docs_root(&plan, &path);
        debug!("nav"; "no `nav` declared, scanning {}", docs_dir.display());
        let nodes = scan_docs(&docs_dir)
            .with_context(|| format!("Failed to scan docs in '{}'", docs_dir.display()))?;
        Navigation::Declared(nodes)
    } else {
        plan.nav.clone()
    };

    let text = if flat { render_flat(&nav) } else { render_tree(nav.nodes()) };
    print!("{text}");
    Ok(())
}

/// Indented tree, two spaces per level.
///
/// ```text
/// Home: index.md
/// Guide/
///   guide/install.md
/// Issues -> https://github.com/acme/docs/issues
/// ```
pub fn render_tree(nodes: &[NavigationNode]) -> String {
    let mut out = String::new();
    write_nodes(&mut out, nodes, 0);
    out
}

fn write_nodes(out: &mut String, nodes: &[NavigationNode], depth: usize) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        let title = node.title().unwrap_or_default();
        let _ = match &node.target {
            NavTarget::Page(path) if title.is_empty() => writeln!(out, "{indent}{path}"),
            NavTarget::Page(path) => writeln!(out, "{indent}{title}: {path}"),
            NavTarget::Link(url) if title.is_empty() => writeln!(out, "{indent}-> {url}"),
            NavTarget::Link(url) => writeln!(out, "{indent}{title} -> {url}"),
            NavTarget::Section(children) => {
                let _ = writeln!(out, "{indent}{title}/");
                write_nodes(out, children, depth + 1);
                Ok(())
            }
        };
    }
}

/// Leaves only, one target per line, in declaration order.
pub fn render_flat(nav: &Navigation) -> String {
    nav.flatten().iter().fold(String::new(), |mut out, entry| {
        let _ = writeln!(out, "{}", entry.target);
        out
    })
}
