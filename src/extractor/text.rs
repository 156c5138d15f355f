use scraper::{ElementRef, Node};

/// Elements whose text never renders.
pub const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Hidden elements plus the document head, which never renders as body text.
pub const DOCUMENT_SKIP_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "head"];

/// Hidden elements plus page chrome that surrounds, but is not part of, an
/// article body.
pub const NON_CONTENT_ELEMENTS: &[&str] = &[
    "script", "style", "noscript", "template", "nav", "header", "footer", "aside", "form",
];

/// Elements that visually break text. A space is emitted around them so
/// adjacent paragraphs don't run together.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "blockquote", "body", "br", "dd", "div", "dl", "dt", "figcaption", "figure",
    "h1", "h2", "h3", "h4", "h5", "h6", "head", "hr", "li", "main", "ol", "p", "pre", "section", "table",
    "td", "th", "title", "tr", "ul",
];

/// Text under `root`, skipping any descendant element named in `skip`.
///
/// Walks with an explicit stack so hostile nesting depth can't blow the
/// call stack.
pub fn visible_text(root: ElementRef<'_>, skip: &[&str]) -> String {
    let mut out = String::new();
    let root_id = root.id();
    let mut stack = vec![(*root, false)];

    while let Some((node, closing)) = stack.pop() {
        if closing {
            out.push(' ');
            continue;
        }
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                let name = element.name();
                if node.id() != root_id && skip.contains(&name) {
                    continue;
                }
                if BLOCK_ELEMENTS.contains(&name) {
                    out.push(' ');
                    stack.push((node, true));
                }
                stack.extend(node.children().rev().map(|child| (child, false)));
            }
            _ => {}
        }
    }

    out
}

/// Whether any ancestor of `element` is named in `names`.
pub fn has_ancestor_named(element: ElementRef<'_>, names: &[&str]) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| names.contains(&ancestor.value().name()))
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
