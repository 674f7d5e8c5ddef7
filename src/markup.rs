//! Markup emitter
//!
//! Renders component nodes into Angular template markup, one fixed rule per
//! node kind. Rendering is total: a node whose type has no rule becomes an
//! HTML comment naming the type and the rest of the page renders normally.
//!
//! Layout: a container puts each child on its own line, indented two spaces
//! per nesting level. Indentation is only ever added at structural line
//! breaks, never inside user text.

use crate::model::{ComponentDefinition, ComponentKind, ListType};
use crate::naming::{escape_comment, escape_html, sanitize_identifier};

const INDENT: &str = "  ";

/// Render a page's top-level nodes, one per line. Nodes that render to
/// nothing (a radio group without options) take no line.
pub fn render_page(components: &[ComponentDefinition]) -> String {
    components
        .iter()
        .map(render)
        .filter(|markup| !markup.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a single node and its subtree.
pub fn render(node: &ComponentDefinition) -> String {
    render_node(node, 0)
}

/// Render `node` as if its first line sits at `depth`. The first line carries
/// no indentation of its own; the caller positions it.
fn render_node(node: &ComponentDefinition, depth: usize) -> String {
    let id = &node.id;

    match &node.kind {
        ComponentKind::Container
        | ComponentKind::Card
        | ComponentKind::Grid
        | ComponentKind::FormGroup
        | ComponentKind::Tabs
        | ComponentKind::Accordion => render_block("div", &class_list(node, &[]), node, depth),
        ComponentKind::Section => render_block("section", &class_list(node, &[]), node, depth),
        ComponentKind::Nav => render_block("nav", &class_list(node, &[]), node, depth),
        ComponentKind::QuickStack => {
            let direction = node.direction.as_deref().unwrap_or("row");
            render_block(
                "div",
                &class_list(node, &["quick-stack", direction]),
                node,
                depth,
            )
        }
        ComponentKind::VFlex => render_block("div", &class_list(node, &["v-flex"]), node, depth),
        ComponentKind::HFlex => render_block("div", &class_list(node, &["h-flex"]), node, depth),
        ComponentKind::PageSlot => render_block("ng-container", &class_list(node, &[]), node, depth),

        ComponentKind::Text => format!("<p class=\"{}\">{}</p>", id, text_of(node)),

        ComponentKind::Button => {
            let click = node
                .action()
                .map(|action| format!(" (click)=\"{}\"", action))
                .unwrap_or_default();
            format!(
                "<button class=\"{}\"{}>{}</button>",
                class_list(node, &[]),
                click,
                text_of(node)
            )
        }

        ComponentKind::Input => format!(
            "<input class=\"{}\" type=\"{}\" placeholder=\"{}\" [(ngModel)]=\"{}Model\" />",
            id,
            node.input_type.as_deref().unwrap_or("text"),
            escape_html(node.placeholder.as_deref().unwrap_or_default()),
            sanitize_identifier(id)
        ),

        ComponentKind::Textarea => format!(
            "<textarea class=\"{}\" placeholder=\"{}\" [(ngModel)]=\"{}Model\"></textarea>",
            id,
            escape_html(node.placeholder.as_deref().unwrap_or_default()),
            sanitize_identifier(id)
        ),

        ComponentKind::Select => {
            let options: String = node
                .options
                .iter()
                .map(|opt| {
                    let opt = escape_html(opt);
                    format!("<option [value]=\"'{}'\">{}</option>", opt, opt)
                })
                .collect();
            format!(
                "<select class=\"{}\" [(ngModel)]=\"{}Selected\">{}</select>",
                id,
                sanitize_identifier(id),
                options
            )
        }

        ComponentKind::Checkbox => format!(
            "<label class=\"{}\"><input type=\"checkbox\" [(ngModel)]=\"{}Checked\" /> {}</label>",
            id,
            sanitize_identifier(id),
            text_of(node)
        ),

        ComponentKind::RadioGroup => {
            let model = format!("{}Selected", sanitize_identifier(id));
            let separator = format!("\n{}", INDENT.repeat(depth));
            node.options
                .iter()
                .map(|opt| {
                    let opt = escape_html(opt);
                    format!(
                        "<label class=\"{}\"><input type=\"radio\" name=\"{}\" [(ngModel)]=\"{}\" [value]=\"'{}'\" /> {}</label>",
                        id, id, model, opt, opt
                    )
                })
                .collect::<Vec<_>>()
                .join(separator.as_str())
        }

        ComponentKind::Image => format!(
            "<img class=\"{}\" src=\"{}\" alt=\"{}\" />",
            id,
            node.src.as_deref().unwrap_or_default(),
            escape_html(node.alt.as_deref().unwrap_or_default())
        ),

        ComponentKind::Icon => match node.icon_class.as_deref().filter(|c| !c.is_empty()) {
            Some(icon_class) => format!("<i class=\"{} {}\"></i>", icon_class, id),
            None => format!("<i class=\"{}\"></i>", id),
        },

        ComponentKind::Link => format!(
            "<a class=\"{}\" href=\"{}\" target=\"_blank\">{}</a>",
            id,
            node.href.as_deref().unwrap_or_default(),
            text_of(node)
        ),

        ComponentKind::Divider => format!("<hr class=\"{}\" />", id),

        ComponentKind::Progress => format!("<progress class=\"{}\"></progress>", id),

        ComponentKind::Video => {
            let mut attrs = format!("class=\"{}\"", id);
            if node.controls {
                attrs.push_str(" controls");
            }
            if node.autoplay {
                attrs.push_str(" autoplay");
            }
            format!(
                "<video {}><source src=\"{}\" type=\"video/mp4\" /></video>",
                attrs,
                node.src.as_deref().unwrap_or_default()
            )
        }

        ComponentKind::Iframe => format!(
            "<iframe class=\"{}\" src=\"{}\" title=\"{}\"></iframe>",
            id,
            node.src.as_deref().unwrap_or_default(),
            escape_html(node.title.as_deref().unwrap_or_default())
        ),

        ComponentKind::List => {
            let tag = match node.list_type.unwrap_or_default() {
                ListType::Ordered => "ol",
                ListType::Unordered => "ul",
            };
            let items: String = node
                .items
                .iter()
                .map(|item| format!("<li>{}</li>", escape_html(item)))
                .collect();
            format!("<{} class=\"{}\">{}</{}>", tag, id, items, tag)
        }

        ComponentKind::Table => render_table(node, depth),

        ComponentKind::Unknown(tag) => {
            format!("<!-- Unknown component: {} -->", escape_comment(tag))
        }
    }
}

/// `id`, then any fixed layout classes, then the node's own `class`.
fn class_list(node: &ComponentDefinition, layout: &[&str]) -> String {
    let mut classes = vec![node.id.as_str()];
    classes.extend_from_slice(layout);
    if let Some(extra) = node.class.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        classes.push(extra);
    }
    classes.join(" ")
}

fn text_of(node: &ComponentDefinition) -> String {
    escape_html(node.text.as_deref().unwrap_or_default())
}

fn render_block(tag: &str, classes: &str, node: &ComponentDefinition, depth: usize) -> String {
    let child_indent = INDENT.repeat(depth + 1);
    let children: Vec<String> = node
        .children
        .iter()
        .map(|child| render_node(child, depth + 1))
        .filter(|markup| !markup.is_empty())
        .map(|markup| format!("{}{}", child_indent, markup))
        .collect();

    if children.is_empty() {
        return format!("<{} class=\"{}\"></{}>", tag, classes, tag);
    }
    let children = children.join("\n");

    format!(
        "<{} class=\"{}\">\n{}\n{}</{}>",
        tag,
        classes,
        children,
        INDENT.repeat(depth),
        tag
    )
}

fn render_table(node: &ComponentDefinition, depth: usize) -> String {
    let pad = INDENT.repeat(depth);
    let section = format!("{}{}", pad, INDENT);
    let row_pad = format!("{}{}", section, INDENT);

    let header_cells: String = node
        .headers
        .iter()
        .map(|header| format!("<th>{}</th>", escape_html(header)))
        .collect();

    let mut lines = vec![
        format!("<table class=\"{}\">", node.id),
        format!("{}<thead>", section),
        format!("{}<tr>{}</tr>", row_pad, header_cells),
        format!("{}</thead>", section),
        format!("{}<tbody>", section),
    ];
    for row in &node.rows {
        let cells: String = row
            .iter()
            .map(|cell| format!("<td>{}</td>", escape_html(cell)))
            .collect();
        lines.push(format!("{}<tr>{}</tr>", row_pad, cells));
    }
    lines.push(format!("{}</tbody>", section));
    lines.push(format!("{}</table>", pad));

    lines.join("\n")
}
