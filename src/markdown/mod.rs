//! Markdown block tree.
//!
//! The comrak AST is folded into a small closed set of [`Block`] variants so
//! the content checks never depend on the parser's node shapes. Inline text
//! is only kept where a check needs it (heading text, image alt text).

use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, Options, parse_document};

/// One node of the block tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: u8,
        text: String,
        children: Vec<Block>,
    },
    Image {
        href: String,
        alt: String,
    },
    Code {
        lang: Option<String>,
        text: String,
    },
    /// Paragraphs, lists, list items, block quotes, emphasis, links, tables
    Container(Vec<Block>),
}

/// An image reference found anywhere in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef<'a> {
    pub href: &'a str,
    pub alt: &'a str,
}

/// Tokenize markdown into its top-level blocks.
#[must_use]
pub fn tokenize(content: &str) -> Vec<Block> {
    let arena = Arena::new();
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;

    let root = parse_document(&arena, content, &options);
    convert_children(root)
}

fn convert_children<'a>(node: &'a AstNode<'a>) -> Vec<Block> {
    node.children().filter_map(convert).collect()
}

fn convert<'a>(node: &'a AstNode<'a>) -> Option<Block> {
    let data = node.data.borrow();
    match &data.value {
        NodeValue::Heading(heading) => Some(Block::Heading {
            level: heading.level,
            text: inline_text(node),
            children: convert_children(node),
        }),
        NodeValue::Image(link) => Some(Block::Image {
            href: link.url.clone(),
            alt: inline_text(node),
        }),
        NodeValue::CodeBlock(code) => Some(Block::Code {
            lang: code.info.split_whitespace().next().map(str::to_string),
            text: code.literal.trim_end_matches('\n').to_string(),
        }),
        _ if node.first_child().is_some() => Some(Block::Container(convert_children(node))),
        _ => None,
    }
}

fn inline_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for descendant in node.descendants() {
        match &descendant.data.borrow().value {
            NodeValue::Text(literal) => text.push_str(literal),
            NodeValue::Code(code) => text.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => {}
        }
    }
    text
}

/// Top-level headings in document order as `(level, text)`
#[must_use]
pub fn headings(blocks: &[Block]) -> Vec<(u8, &str)> {
    blocks
        .iter()
        .filter_map(|block| match block {
            Block::Heading { level, text, .. } => Some((*level, text.as_str())),
            _ => None,
        })
        .collect()
}

/// Every image in the tree, depth-first in document order
#[must_use]
pub fn images(blocks: &[Block]) -> Vec<ImageRef<'_>> {
    let mut found = Vec::new();
    collect_images(blocks, &mut found);
    found
}

fn collect_images<'a>(blocks: &'a [Block], found: &mut Vec<ImageRef<'a>>) {
    for block in blocks {
        match block {
            Block::Image { href, alt } => found.push(ImageRef { href, alt }),
            Block::Heading { children, .. } | Block::Container(children) => {
                collect_images(children, found);
            }
            Block::Code { .. } => {}
        }
    }
}

/// Bodies of top-level fenced code blocks tagged with `lang`
#[must_use]
pub fn code_blocks<'a>(blocks: &'a [Block], lang: &str) -> Vec<&'a str> {
    blocks
        .iter()
        .filter_map(|block| match block {
            Block::Code {
                lang: Some(tag),
                text,
            } if tag == lang => Some(text.as_str()),
            _ => None,
        })
        .collect()
}
