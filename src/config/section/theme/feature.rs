//! `theme.features` flags.

use super::super::ident::identifiers;

identifiers! {
    /// Named toggle for an optional theme behavior.
    pub enum FeatureFlag {
        AnnounceDismiss = "announce.dismiss",
        ContentActionEdit = "content.action.edit",
        ContentActionView = "content.action.view",
        ContentCodeAnnotate = "content.code.annotate",
        ContentCodeCopy = "content.code.copy",
        ContentCodeSelect = "content.code.select",
        ContentFootnoteTooltips = "content.footnote.tooltips",
        ContentTabsLink = "content.tabs.link",
        ContentTooltips = "content.tooltips",
        HeaderAutohide = "header.autohide",
        NavigationExpand = "navigation.expand",
        NavigationFooter = "navigation.footer",
        NavigationIndexes = "navigation.indexes",
        NavigationInstant = "navigation.instant",
        NavigationInstantPrefetch = "navigation.instant.prefetch",
        NavigationInstantProgress = "navigation.instant.progress",
        NavigationPath = "navigation.path",
        NavigationPrune = "navigation.prune",
        NavigationSections = "navigation.sections",
        NavigationTabs = "navigation.tabs",
        NavigationTabsSticky = "navigation.tabs.sticky",
        NavigationTop = "navigation.top",
        NavigationTracking = "navigation.tracking",
        SearchHighlight = "search.highlight",
        SearchShare = "search.share",
        SearchSuggest = "search.suggest",
        TocFollow = "toc.follow",
        TocIntegrate = "toc.integrate",
    }
}

impl FeatureFlag {
    /// Flags that only take effect together with `navigation.instant`.
    pub const fn requires_instant(self) -> bool {
        matches!(
            self,
            Self::NavigationInstantPrefetch | Self::NavigationInstantProgress
        )
    }
}
