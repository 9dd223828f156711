//! Reusable page indexes.

use sidenav::{Folder, PageIndex, TreeNode};

/// `Guides` folder holding a single `Intro` page
pub fn guides_index() -> PageIndex {
    PageIndex::new(vec![TreeNode::folder(
        "guides",
        "/guides",
        "Guides",
        [TreeNode::page("intro", "/guides/intro", "Intro")],
    )])
}

/// A small documentation site with nested folders
pub fn docs_site() -> PageIndex {
    PageIndex::new(vec![
        TreeNode::folder(
            "guide",
            "/guide",
            "Guide",
            [
                TreeNode::page("start", "/guide/start", "Getting Started"),
                TreeNode::folder(
                    "basic",
                    "/guide/basic",
                    "Basics",
                    [
                        TreeNode::page("routing", "/guide/basic/routing", "Routing"),
                        TreeNode::page("i18n", "/guide/basic/i18n", "Internationalization"),
                    ],
                ),
                TreeNode::folder(
                    "advanced",
                    "/guide/advanced",
                    "Advanced",
                    [TreeNode::page("plugins", "/guide/advanced/plugins", "Plugins")],
                ),
            ],
        ),
        TreeNode::Folder(
            Folder::new("api", "/api", "API")
                .with_collapsed(true)
                .with_child(TreeNode::page("config", "/api/config", "Config"))
                .with_child(TreeNode::page("cli", "/api/cli", "CLI")),
        ),
        TreeNode::Folder(
            Folder::new("changelog", "/changelog", "Changelog")
                .with_collapsible(false)
                .with_child(TreeNode::page("v1", "/changelog/v1", "v1.0")),
        ),
    ])
}

/// JSON document for `docs_site`-like content, as a page-index builder emits it
pub const SITE_JSON: &str = r#"[
  {
    "kind": "folder",
    "name": "guide",
    "route": "/guide",
    "title": "Guide",
    "children": [
      { "kind": "page", "name": "start", "route": "/guide/start", "title": "Getting Started" },
      {
        "kind": "folder",
        "name": "basic",
        "route": "/guide/basic",
        "title": "Basics",
        "collapsed": true,
        "children": [
          { "kind": "page", "name": "routing", "route": "/guide/basic/routing", "title": "Routing" }
        ]
      }
    ]
  },
  { "kind": "page", "name": "faq", "route": "/faq", "title": "FAQ" }
]"#;
