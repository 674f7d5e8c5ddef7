//! Interaction collector
//!
//! Two pre-order walks over a page: one finds the form controls that need a
//! two-way-bound field on the page class, the other finds nodes with an
//! `action` and derives a handler stub for each.
//!
//! Neither walk deduplicates. Two nodes sharing an id (or two actions that
//! strip to the same method name) produce two members with the same name.

use serde::Serialize;
use std::fmt;

use crate::model::{ComponentDefinition, ComponentKind};
use crate::naming::{escape_ts_string, sanitize_identifier};

// ═══════════════════════════════════════════════════════════════════════════════
// STATE DECLARATIONS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum StateValue {
    String(String),
    Boolean(bool),
}

impl StateValue {
    pub fn ts_type(&self) -> &'static str {
        match self {
            StateValue::String(_) => "string",
            StateValue::Boolean(_) => "boolean",
        }
    }

    pub fn ts_literal(&self) -> String {
        match self {
            StateValue::String(s) => format!("'{}'", escape_ts_string(s)),
            StateValue::Boolean(b) => b.to_string(),
        }
    }
}

/// A field on the page class bound to one form control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDeclaration {
    pub name: String,
    pub initial_value: StateValue,
}

impl fmt::Display for StateDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} = {};",
            self.name,
            self.initial_value.ts_type(),
            self.initial_value.ts_literal()
        )
    }
}

/// The state field a node binds to, if it is a form control.
pub fn state_for(node: &ComponentDefinition) -> Option<StateDeclaration> {
    let base = sanitize_identifier(&node.id);
    let (suffix, initial_value) = match node.kind {
        ComponentKind::Input | ComponentKind::Textarea => {
            ("Model", StateValue::String(String::new()))
        }
        ComponentKind::Select | ComponentKind::RadioGroup => (
            "Selected",
            StateValue::String(node.options.first().cloned().unwrap_or_default()),
        ),
        ComponentKind::Checkbox => ("Checked", StateValue::Boolean(false)),
        _ => return None,
    };

    Some(StateDeclaration {
        name: format!("{}{}", base, suffix),
        initial_value,
    })
}

pub fn collect_state(components: &[ComponentDefinition]) -> Vec<StateDeclaration> {
    let mut states = Vec::new();
    for component in components {
        component.visit(&mut |node| states.extend(state_for(node)));
    }
    states
}

// ═══════════════════════════════════════════════════════════════════════════════
// HANDLER STUBS
// ═══════════════════════════════════════════════════════════════════════════════

/// A generated click handler that logs which node fired it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerStub {
    pub method_name: String,
    pub node_id: String,
}

impl fmt::Display for HandlerStub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}() {{ console.log('{} clicked'); }}",
            self.method_name,
            escape_ts_string(&self.node_id)
        )
    }
}

/// `handleSubmit()` -> `handleSubmit`; anything else is used as-is.
pub fn handler_name(action: &str) -> &str {
    action.strip_suffix("()").unwrap_or(action)
}

pub fn collect_handlers(components: &[ComponentDefinition]) -> Vec<HandlerStub> {
    let mut handlers = Vec::new();
    for component in components {
        collect_handlers_into(component, &mut handlers);
    }
    handlers
}

fn collect_handlers_into(node: &ComponentDefinition, handlers: &mut Vec<HandlerStub>) {
    if let Some(action) = node.action() {
        handlers.push(HandlerStub {
            method_name: handler_name(action).to_string(),
            node_id: node.id.clone(),
        });
    }
    for child in &node.children {
        collect_handlers_into(child, handlers);
    }
}
