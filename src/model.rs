//! Component tree model
//!
//! Pages and component nodes as saved by the page builder. A tree is built
//! once per compile from the input JSON and is read-only from then on.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════════
// NODE KINDS
// ═══════════════════════════════════════════════════════════════════════════════

/// The `type` tag of a component node.
///
/// Tags the compiler has no rule for are kept verbatim in
/// [`ComponentKind::Unknown`] so the markup can name them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentKind {
    #[default]
    // Layout containers
    Container,
    Card,
    Grid,
    FormGroup,
    Tabs,
    Accordion,
    Section,
    QuickStack,
    VFlex,
    HFlex,
    PageSlot,
    Nav,

    // Content
    Text,
    Button,
    Image,
    Icon,
    Link,
    Divider,
    Progress,
    Video,
    Iframe,
    List,
    Table,

    // Form controls
    Input,
    Textarea,
    Select,
    Checkbox,
    RadioGroup,

    Unknown(String),
}

impl ComponentKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "container" => Self::Container,
            "card" => Self::Card,
            "grid" => Self::Grid,
            "form-group" => Self::FormGroup,
            "tabs" => Self::Tabs,
            "accordion" => Self::Accordion,
            "section" => Self::Section,
            "quick-stack" => Self::QuickStack,
            "v-flex" => Self::VFlex,
            "h-flex" => Self::HFlex,
            "page-slot" => Self::PageSlot,
            "nav" => Self::Nav,
            "text" => Self::Text,
            "button" => Self::Button,
            "image" => Self::Image,
            "icon" => Self::Icon,
            "link" => Self::Link,
            "divider" => Self::Divider,
            "progress" => Self::Progress,
            "video" => Self::Video,
            "iframe" => Self::Iframe,
            "list" => Self::List,
            "table" => Self::Table,
            "input" => Self::Input,
            "textarea" => Self::Textarea,
            "select" => Self::Select,
            "checkbox" => Self::Checkbox,
            "radio-group" => Self::RadioGroup,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Self::Container => "container",
            Self::Card => "card",
            Self::Grid => "grid",
            Self::FormGroup => "form-group",
            Self::Tabs => "tabs",
            Self::Accordion => "accordion",
            Self::Section => "section",
            Self::QuickStack => "quick-stack",
            Self::VFlex => "v-flex",
            Self::HFlex => "h-flex",
            Self::PageSlot => "page-slot",
            Self::Nav => "nav",
            Self::Text => "text",
            Self::Button => "button",
            Self::Image => "image",
            Self::Icon => "icon",
            Self::Link => "link",
            Self::Divider => "divider",
            Self::Progress => "progress",
            Self::Video => "video",
            Self::Iframe => "iframe",
            Self::List => "list",
            Self::Table => "table",
            Self::Input => "input",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::RadioGroup => "radio-group",
            Self::Unknown(tag) => tag,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl From<String> for ComponentKind {
    fn from(tag: String) -> Self {
        ComponentKind::from_tag(&tag)
    }
}

impl From<ComponentKind> for String {
    fn from(kind: ComponentKind) -> Self {
        kind.as_tag().to_string()
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Ordered,
    #[default]
    Unordered,
}

// ═══════════════════════════════════════════════════════════════════════════════
// TREE TYPES
// ═══════════════════════════════════════════════════════════════════════════════

/// A single node of a page tree.
///
/// Which optional fields matter depends on `kind`; the emitters fall back to
/// documented defaults when a field is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    #[serde(rename = "type")]
    pub kind: ComponentKind,

    /// CSS class name and base of generated identifiers
    pub id: String,

    /// Extra CSS class appended after the id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_class: Option<String>,

    /// Click handler expression, e.g. `handleSubmit()`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_type: Option<ListType>,

    /// Quick-stack direction class (`row` when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,

    /// Informational only; grids lay out through their stylesheet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,

    /// camelCase property -> CSS value, in authoring order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub styles: IndexMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Vec<String>>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub controls: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub autoplay: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentDefinition>,
}

impl ComponentDefinition {
    pub fn new(kind: ComponentKind, id: impl Into<String>) -> Self {
        ComponentDefinition {
            kind,
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_child(mut self, child: ComponentDefinition) -> Self {
        self.children.push(child);
        self
    }

    /// The action, if set and non-empty.
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref().filter(|a| !a.is_empty())
    }

    /// Visit this node and all of its descendants, parents before children.
    pub fn visit<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a ComponentDefinition),
    {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }
}

/// One unit of compilation: a page name plus its top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDefinition {
    /// Stem of the class name, file names, selector and route
    pub page_name: String,
    pub components: Vec<ComponentDefinition>,
}

impl PageDefinition {
    pub fn new(page_name: impl Into<String>, components: Vec<ComponentDefinition>) -> Self {
        PageDefinition {
            page_name: page_name.into(),
            components,
        }
    }

    /// Visit every node of the page in document order.
    pub fn visit<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a ComponentDefinition),
    {
        for component in &self.components {
            component.visit(&mut f);
        }
    }

    /// Node types without an emission rule, in document order.
    pub fn unknown_kinds(&self) -> Vec<String> {
        let mut unknown = Vec::new();
        self.visit(|node| {
            if let ComponentKind::Unknown(tag) = &node.kind {
                unknown.push(tag.clone());
            }
        });
        unknown
    }
}
