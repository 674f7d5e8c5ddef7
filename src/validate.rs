use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::codegen::{component_class_name, selector};
use crate::interaction::{handler_name, state_for};
use crate::library::route_path;
use crate::model::{ComponentDefinition, PageDefinition};

// ═══════════════════════════════════════════════════════════════════════════════
// ISSUE CODES
// ═══════════════════════════════════════════════════════════════════════════════

pub const E_PAGE_NAME: &str = "E-PAGE-NAME";
pub const E_PAGE_DUPLICATE: &str = "E-PAGE-DUP";
pub const E_NODE_ID: &str = "E-NODE-ID";
pub const E_NODE_TYPE: &str = "E-NODE-TYPE";

lazy_static! {
    /// Page names become directory names, file stems and class names.
    static ref PAGE_NAME: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
    /// Class names start with the page name's first character.
    static ref PAGE_NAME_START: Regex = Regex::new(r"^[A-Za-z]").unwrap();
}

// ═══════════════════════════════════════════════════════════════════════════════
// VALIDATION ISSUES
// ═══════════════════════════════════════════════════════════════════════════════

/// One structural problem in the input, located by page and node path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub code: String,
    pub page: String,
    /// e.g. `pages[0].components[1].children[0]`
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(code: &str, page: &str, path: String, message: String) -> Self {
        ValidationIssue {
            code: code.to_string(),
            page: page.to_string(),
            path,
            message,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path, self.message)
    }
}

/// Check the shape guarantees every emitter relies on.
pub fn validate_pages(pages: &[PageDefinition]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut generated_names = GeneratedNames::default();

    for (index, page) in pages.iter().enumerate() {
        let path = format!("pages[{}]", index);
        let name = page.page_name.as_str();

        if name.is_empty() {
            issues.push(ValidationIssue::new(
                E_PAGE_NAME,
                name,
                format!("{}.pageName", path),
                "page name must not be empty".to_string(),
            ));
        } else if !PAGE_NAME.is_match(name) {
            issues.push(ValidationIssue::new(
                E_PAGE_NAME,
                name,
                format!("{}.pageName", path),
                format!(
                    "page name '{}' may only contain letters, digits, '-' and '_'",
                    name
                ),
            ));
        } else if !PAGE_NAME_START.is_match(name) {
            issues.push(ValidationIssue::new(
                E_PAGE_NAME,
                name,
                format!("{}.pageName", path),
                format!(
                    "page name '{}' must start with a letter to give a valid class name",
                    name
                ),
            ));
        }

        if !name.is_empty() {
            if let Some(message) = generated_names.claim(pages, name, index) {
                issues.push(ValidationIssue::new(
                    E_PAGE_DUPLICATE,
                    name,
                    format!("{}.pageName", path),
                    message,
                ));
            }
        }

        for (i, component) in page.components.iter().enumerate() {
            validate_node(
                component,
                name,
                &format!("{}.components[{}]", path, i),
                &mut issues,
            );
        }
    }

    issues
}

/// Names each page is emitted under, with the index of the page that first
/// claimed them.
#[derive(Default)]
struct GeneratedNames {
    page_names: HashMap<String, usize>,
    class_names: HashMap<String, usize>,
    selectors: HashMap<String, usize>,
}

impl GeneratedNames {
    /// Record `name` for page `index`; describes the clash if any of its
    /// generated names is already taken.
    fn claim(&mut self, pages: &[PageDefinition], name: &str, index: usize) -> Option<String> {
        let class_name = component_class_name(name);
        let selector = selector(name);

        let clash = if let Some(&first) = self.page_names.get(name) {
            Some(format!("page name '{}' is already used by pages[{}]", name, first))
        } else if let Some(&first) = self.class_names.get(&class_name) {
            Some(format!(
                "page '{}' generates class {}, already generated by pages[{}] ('{}')",
                name, class_name, first, pages[first].page_name
            ))
        } else if let Some(&first) = self.selectors.get(&selector) {
            Some(format!(
                "page '{}' generates selector '{}', already generated by pages[{}] ('{}')",
                name, selector, first, pages[first].page_name
            ))
        } else {
            None
        };

        self.page_names.entry(name.to_string()).or_insert(index);
        self.class_names.entry(class_name).or_insert(index);
        self.selectors.entry(selector).or_insert(index);
        clash
    }
}

fn validate_node(
    node: &ComponentDefinition,
    page: &str,
    path: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    if node.kind.as_tag().is_empty() {
        issues.push(ValidationIssue::new(
            E_NODE_TYPE,
            page,
            format!("{}.type", path),
            "component type must not be empty".to_string(),
        ));
    }
    if node.id.is_empty() {
        issues.push(ValidationIssue::new(
            E_NODE_ID,
            page,
            format!("{}.id", path),
            format!("'{}' component has an empty id", node.kind),
        ));
    }

    for (i, child) in node.children.iter().enumerate() {
        validate_node(child, page, &format!("{}.children[{}]", path, i), issues);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// IDENTIFIER COLLISIONS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionKind {
    /// Two nodes share an id (CSS class and any derived names overlap)
    DuplicateId,
    /// Two form controls bind the same state field
    DuplicateState,
    /// Two actions strip to the same method name
    DuplicateHandler,
    /// Two pages map onto the same route path in the library barrel
    DuplicateRoute,
}

impl CollisionKind {
    /// What the duplicate does to the generated sources.
    pub fn effect(self) -> &'static str {
        match self {
            CollisionKind::DuplicateId => "nodes share one CSS class and its style rules",
            CollisionKind::DuplicateState => {
                "duplicate class property; the generated component will not type-check"
            }
            CollisionKind::DuplicateHandler => {
                "duplicate class method; the generated component will not type-check"
            }
            CollisionKind::DuplicateRoute => {
                "duplicate route path; only the first matching route is reachable"
            }
        }
    }
}

/// Generated names that more than one node maps onto. Collisions are not
/// rejected: every member is still emitted as-is, with the consequence
/// described by [`CollisionKind::effect`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collision {
    pub kind: CollisionKind,
    pub name: String,
    /// Node ids, or page names for [`CollisionKind::DuplicateRoute`]
    pub node_ids: Vec<String>,
}

pub fn find_collisions(page: &PageDefinition) -> Vec<Collision> {
    let mut ids: Vec<(String, String)> = Vec::new();
    let mut states: Vec<(String, String)> = Vec::new();
    let mut handlers: Vec<(String, String)> = Vec::new();

    page.visit(|node| {
        ids.push((node.id.clone(), node.id.clone()));
        if let Some(state) = state_for(node) {
            states.push((state.name, node.id.clone()));
        }
        if let Some(action) = node.action() {
            handlers.push((handler_name(action).to_string(), node.id.clone()));
        }
    });

    let mut collisions = group_duplicates(CollisionKind::DuplicateId, ids);
    collisions.extend(group_duplicates(CollisionKind::DuplicateState, states));
    collisions.extend(group_duplicates(CollisionKind::DuplicateHandler, handlers));
    collisions
}

/// Pages whose route paths coincide, e.g. `home` and `home-page`.
pub fn find_route_collisions(pages: &[PageDefinition]) -> Vec<Collision> {
    let routes = pages
        .iter()
        .map(|page| (route_path(&page.page_name), page.page_name.clone()))
        .collect();
    group_duplicates(CollisionKind::DuplicateRoute, routes)
}

/// Group `(name, node id)` pairs by name, keeping names seen more than once
/// in first-seen order.
fn group_duplicates(kind: CollisionKind, entries: Vec<(String, String)>) -> Vec<Collision> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<String>> = HashMap::new();

    for (name, node_id) in entries {
        let group = groups.entry(name.clone()).or_default();
        if group.is_empty() {
            order.push(name);
        }
        group.push(node_id);
    }

    order
        .into_iter()
        .filter_map(|name| {
            let node_ids = groups.remove(&name)?;
            (node_ids.len() > 1).then(|| Collision {
                kind,
                name,
                node_ids,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComponentKind;

    fn node(kind: &str, id: &str) -> ComponentDefinition {
        ComponentDefinition::new(ComponentKind::from_tag(kind), id)
    }

    #[test]
    fn test_valid_pages() {
        let pages = vec![
            PageDefinition::new("home-page", vec![node("container", "root").with_child(node("text", "t"))]),
            PageDefinition::new("about_page", vec![]),
        ];
        assert!(validate_pages(&pages).is_empty());
    }

    #[test]
    fn test_bad_page_names() {
        let pages = vec![
            PageDefinition::new("", vec![]),
            PageDefinition::new("../escape", vec![]),
            PageDefinition::new("home", vec![]),
            PageDefinition::new("home", vec![]),
        ];
        let issues = validate_pages(&pages);
        let codes: Vec<&str> = issues.iter().map(|i| i.code.as_str()).collect();
        assert_eq!(codes, [E_PAGE_NAME, E_PAGE_NAME, E_PAGE_DUPLICATE]);
        assert_eq!(issues[2].path, "pages[3].pageName");
        assert!(issues[2].message.contains("pages[2]"));
    }

    #[test]
    fn test_page_name_must_start_with_letter() {
        let pages = vec![
            PageDefinition::new("404", vec![]),
            PageDefinition::new("_draft", vec![]),
            PageDefinition::new("page404", vec![]),
        ];
        let issues = validate_pages(&pages);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.code == E_PAGE_NAME));
        assert_eq!(issues[0].path, "pages[0].pageName");
        assert!(issues[0].message.contains("must start with a letter"));
        assert_eq!(issues[1].path, "pages[1].pageName");
    }

    #[test]
    fn test_pages_sharing_generated_names() {
        let pages = vec![
            PageDefinition::new("home-page", vec![]),
            PageDefinition::new("HomePage", vec![]),
            PageDefinition::new("about", vec![]),
            PageDefinition::new("ABOUT", vec![]),
        ];
        let issues = validate_pages(&pages);
        assert_eq!(issues.len(), 2);

        assert_eq!(issues[0].code, E_PAGE_DUPLICATE);
        assert_eq!(issues[0].path, "pages[1].pageName");
        assert_eq!(
            issues[0].message,
            "page 'HomePage' generates class HomePageComponent, already generated by pages[0] ('home-page')"
        );

        // Different class names (AboutComponent, ABOUTComponent) but one selector
        assert_eq!(issues[1].code, E_PAGE_DUPLICATE);
        assert_eq!(issues[1].path, "pages[3].pageName");
        assert!(issues[1].message.contains("selector 'app-about'"));
    }

    #[test]
    fn test_route_collisions() {
        let pages = vec![
            PageDefinition::new("home", vec![]),
            PageDefinition::new("about", vec![]),
            PageDefinition::new("home-page", vec![]),
        ];
        // Distinct pages otherwise, so this is not a validation issue
        assert!(validate_pages(&pages).is_empty());

        let collisions = find_route_collisions(&pages);
        assert_eq!(
            collisions,
            vec![Collision {
                kind: CollisionKind::DuplicateRoute,
                name: "home".to_string(),
                node_ids: vec!["home".to_string(), "home-page".to_string()],
            }]
        );
    }

    #[test]
    fn test_collision_effects() {
        assert!(CollisionKind::DuplicateState.effect().contains("will not type-check"));
        assert!(CollisionKind::DuplicateHandler.effect().contains("will not type-check"));
        assert!(!CollisionKind::DuplicateId.effect().contains("type-check"));
    }

    #[test]
    fn test_empty_id_and_type_are_located() {
        let pages = vec![PageDefinition::new(
            "p",
            vec![node("container", "root").with_child(node("text", "")).with_child(node("", "x"))],
        )];
        let issues = validate_pages(&pages);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].code, E_NODE_ID);
        assert_eq!(issues[0].path, "pages[0].components[0].children[0].id");
        assert_eq!(issues[1].code, E_NODE_TYPE);
        assert_eq!(issues[1].path, "pages[0].components[0].children[1].type");
        assert_eq!(
            issues[0].to_string(),
            "[E-NODE-ID] pages[0].components[0].children[0].id: 'text' component has an empty id"
        );
    }

    #[test]
    fn test_unknown_kinds_are_not_issues() {
        let pages = vec![PageDefinition::new("p", vec![node("carousel", "c")])];
        assert!(validate_pages(&pages).is_empty());
    }

    #[test]
    fn test_find_collisions() {
        let page = PageDefinition::new(
            "p",
            vec![
                node("input", "email"),
                node("container", "box")
                    .with_child(node("textarea", "email"))
                    .with_child(node("button", "a").with_action("save()")),
                node("button", "b").with_action("save"),
                node("checkbox", "ok"),
            ],
        );

        let collisions = find_collisions(&page);
        assert_eq!(
            collisions,
            vec![
                Collision {
                    kind: CollisionKind::DuplicateId,
                    name: "email".to_string(),
                    node_ids: vec!["email".to_string(), "email".to_string()],
                },
                Collision {
                    kind: CollisionKind::DuplicateState,
                    name: "emailModel".to_string(),
                    node_ids: vec!["email".to_string(), "email".to_string()],
                },
                Collision {
                    kind: CollisionKind::DuplicateHandler,
                    name: "save".to_string(),
                    node_ids: vec!["a".to_string(), "b".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_sanitized_names_collide() {
        // Distinct ids, same generated identifier
        let page = PageDefinition::new("p", vec![node("input", "first-name"), node("input", "first.name")]);
        let collisions = find_collisions(&page);
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].kind, CollisionKind::DuplicateState);
        assert_eq!(collisions[0].name, "first_nameModel");
    }

    #[test]
    fn test_no_collisions() {
        let page = PageDefinition::new("p", vec![node("input", "a"), node("input", "b")]);
        assert!(find_collisions(&page).is_empty());
    }
}
