//! `markdown_extensions` section.
//!
//! Same entry shapes as `plugins`; the long `markdown.extensions.` prefix of
//! the built-in extensions is accepted.

use super::ident::identifiers;
use super::{NamedEntry, named_entries, named_entry_value};
use crate::config::{ConfigValue, ConfigWarning, KeyPath, ResolveError, ValueMap};
use rustc_hash::FxHashSet;
use serde::Serialize;

identifiers! {
    /// Recognized markdown extensions.
    pub enum MarkdownExtension {
        Abbr = "abbr",
        Admonition = "admonition",
        AttrList = "attr_list",
        Codehilite = "codehilite",
        DefList = "def_list",
        Extra = "extra",
        FencedCode = "fenced_code",
        Footnotes = "footnotes",
        LegacyAttrs = "legacy_attrs",
        LegacyEm = "legacy_em",
        MdInHtml = "md_in_html",
        Meta = "meta",
        Nl2br = "nl2br",
        SaneLists = "sane_lists",
        Smarty = "smarty",
        Tables = "tables",
        Toc = "toc",
        WikiLinks = "wikilinks",
        Arithmatex = "pymdownx.arithmatex",
        BetterEm = "pymdownx.betterem",
        BlocksAdmonition = "pymdownx.blocks.admonition",
        BlocksDetails = "pymdownx.blocks.details",
        BlocksTab = "pymdownx.blocks.tab",
        Caret = "pymdownx.caret",
        Critic = "pymdownx.critic",
        Details = "pymdownx.details",
        Emoji = "pymdownx.emoji",
        EscapeAll = "pymdownx.escapeall",
        Highlight = "pymdownx.highlight",
        InlineHilite = "pymdownx.inlinehilite",
        Keys = "pymdownx.keys",
        MagicLink = "pymdownx.magiclink",
        Mark = "pymdownx.mark",
        ProgressBar = "pymdownx.progressbar",
        SaneHeaders = "pymdownx.saneheaders",
        SmartSymbols = "pymdownx.smartsymbols",
        Snippets = "pymdownx.snippets",
        StripHtml = "pymdownx.striphtml",
        SuperFences = "pymdownx.superfences",
        Tabbed = "pymdownx.tabbed",
        TaskList = "pymdownx.tasklist",
        Tilde = "pymdownx.tilde",
    }
}

const BUILTIN_PREFIX: &str = "markdown.extensions.";

impl MarkdownExtension {
    /// Resolve an extension name, accepting the long built-in form
    /// (`markdown.extensions.toc`).
    pub fn lookup(name: &str) -> Option<Self> {
        Self::from_name(name.strip_prefix(BUILTIN_PREFIX).unwrap_or(name))
    }
}

/// An enabled markdown extension with its options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtensionSpec {
    pub extension: MarkdownExtension,
    pub options: ValueMap,
}

impl ExtensionSpec {
    pub fn new(extension: MarkdownExtension, options: ValueMap) -> Self {
        Self { extension, options }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.extension.as_str()
    }

    /// Resolve the `markdown_extensions` value, keeping declaration order.
    pub(crate) fn resolve_all(
        value: Option<&ConfigValue>,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<Vec<Self>, ResolveError> {
        let Some(value) = value else {
            return Ok(Vec::new());
        };

        let mut seen = FxHashSet::default();
        let mut extensions = Vec::new();
        let root = KeyPath::root("markdown_extensions");
        for NamedEntry { name, options, key } in named_entries(value, &root)? {
            let extension =
                MarkdownExtension::lookup(name).ok_or_else(|| ResolveError::UnknownExtension {
                    key: key.clone(),
                    value: name.to_string(),
                })?;
            if !seen.insert(extension) {
                warnings.push(ConfigWarning::Duplicate {
                    key,
                    name: extension.as_str(),
                });
            }
            extensions.push(Self::new(extension, options));
        }
        Ok(extensions)
    }

    pub(crate) fn to_value(&self) -> ConfigValue {
        named_entry_value(self.name(), &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(text: &str) -> Result<Vec<ExtensionSpec>, ResolveError> {
        let value: ConfigValue = serde_yaml::from_str(text).unwrap();
        ExtensionSpec::resolve_all(Some(&value), &mut Vec::new())
    }

    #[test]
    fn test_order_and_options() {
        let extensions = resolve(
            "- admonition\n- toc:\n    permalink: true\n- pymdownx.superfences\n- markdown.extensions.tables",
        )
        .unwrap();
        let names: Vec<_> = extensions.iter().map(ExtensionSpec::name).collect();
        assert_eq!(names, ["admonition", "toc", "pymdownx.superfences", "tables"]);
        assert_eq!(extensions[1].options["permalink"], ConfigValue::Bool(true));
    }

    #[test]
    fn test_unknown_extension() {
        let err = resolve("- admonition\n- pymdownx.bogus").unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownExtension {
                key: KeyPath::root("markdown_extensions").index(1),
                value: "pymdownx.bogus".into(),
            }
        );
    }

    #[test]
    fn test_duplicate_extension_warns() {
        let value: ConfigValue = serde_yaml::from_str("- toc\n- markdown.extensions.toc").unwrap();
        let mut warnings = Vec::new();
        let extensions = ExtensionSpec::resolve_all(Some(&value), &mut warnings).unwrap();
        assert_eq!(extensions.len(), 2);
        assert_eq!(warnings.len(), 1);
    }
}
