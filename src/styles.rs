//! Stylesheet emitter
//!
//! Collects the inline `styles` of every node into class-scoped SCSS blocks,
//! in document order, under a single theme `@import`.

use crate::model::ComponentDefinition;
use crate::naming::camel_to_kebab;

/// Import target used by generated stylesheets, relative to
/// `{output}/{pageName}/{pageName}.component.scss`.
pub const DEFAULT_THEME_IMPORT: &str = "../../../styles/theme.scss";

pub fn render_styles(components: &[ComponentDefinition], theme_import: &str) -> String {
    let mut blocks = vec![format!("@import '{}';", theme_import)];
    for component in components {
        collect_styles(component, &mut blocks);
    }
    blocks.join("\n\n")
}

fn collect_styles(node: &ComponentDefinition, blocks: &mut Vec<String>) {
    if let Some(block) = style_block(node) {
        blocks.push(block);
    }
    for child in &node.children {
        collect_styles(child, blocks);
    }
}

/// The `.{id} { ... }` rule for one node, or `None` when it has no styles.
pub fn style_block(node: &ComponentDefinition) -> Option<String> {
    if node.styles.is_empty() {
        return None;
    }

    let declarations = node
        .styles
        .iter()
        .map(|(property, value)| format!("  {}: {};", camel_to_kebab(property), value))
        .collect::<Vec<_>>()
        .join("\n");

    Some(format!(".{} {{\n{}\n}}", node.id, declarations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComponentKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_style_block() {
        let styled = ComponentDefinition::new(ComponentKind::Container, "styled-div")
            .with_style("backgroundColor", "red")
            .with_style("fontSize", "16px");

        let css = render_styles(&[styled], DEFAULT_THEME_IMPORT);
        assert_eq!(
            css,
            "@import '../../../styles/theme.scss';\n\n.styled-div {\n  background-color: red;\n  font-size: 16px;\n}"
        );
    }

    #[test]
    fn test_declaration_order_follows_input() {
        let node = ComponentDefinition::new(ComponentKind::Text, "t")
            .with_style("zIndex", "2")
            .with_style("alignItems", "center")
            .with_style("color", "#333");

        assert_eq!(
            style_block(&node).unwrap(),
            ".t {\n  z-index: 2;\n  align-items: center;\n  color: #333;\n}"
        );
    }

    #[test]
    fn test_values_pass_through() {
        let node = ComponentDefinition::new(ComponentKind::Text, "t")
            .with_style("fontFamily", "'Inter', sans-serif")
            .with_style("margin", "calc(100% - 2rem) !important");

        let block = style_block(&node).unwrap();
        assert!(block.contains("  font-family: 'Inter', sans-serif;"));
        assert!(block.contains("  margin: calc(100% - 2rem) !important;"));
    }

    #[test]
    fn test_preorder_walk() {
        let tree = ComponentDefinition::new(ComponentKind::Container, "outer")
            .with_style("padding", "8px")
            .with_child(
                ComponentDefinition::new(ComponentKind::Card, "inner")
                    .with_child(
                        ComponentDefinition::new(ComponentKind::Text, "deep")
                            .with_style("color", "red"),
                    ),
            )
            .with_child(
                ComponentDefinition::new(ComponentKind::Text, "sibling").with_style("color", "blue"),
            );

        let css = render_styles(&[tree], "theme.scss");
        let outer = css.find(".outer").unwrap();
        let deep = css.find(".deep").unwrap();
        let sibling = css.find(".sibling").unwrap();
        assert!(outer < deep && deep < sibling);
        // Unstyled nodes contribute nothing
        assert!(!css.contains(".inner"));
        assert_eq!(css.matches("\n\n").count(), 3);
    }

    #[test]
    fn test_no_styles_only_import() {
        let nodes = vec![ComponentDefinition::new(ComponentKind::Text, "plain")];
        assert_eq!(render_styles(&nodes, "theme.scss"), "@import 'theme.scss';");
    }
}
