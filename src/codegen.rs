//! Codegen module
//!
//! Assembles the page component class and bundles the three per-page
//! artifacts. Everything here is pure string assembly over already-collected
//! data; the orchestrator owns file I/O.

use serde::Serialize;

use crate::interaction::{collect_handlers, collect_state, HandlerStub, StateDeclaration};
use crate::markup::render_page;
use crate::model::PageDefinition;
use crate::naming::{camel_to_kebab, to_pascal_case};
use crate::styles::render_styles;

pub const COMPONENT_SUFFIX: &str = "Component";

// ═══════════════════════════════════════════════════════════════════════════════
// PAGE NAMING
// ═══════════════════════════════════════════════════════════════════════════════

/// `button-page` -> `ButtonPageComponent`
pub fn component_class_name(page_name: &str) -> String {
    format!("{}{}", to_pascal_case(page_name), COMPONENT_SUFFIX)
}

/// `button-page` -> `app-button-page`
pub fn selector(page_name: &str) -> String {
    format!("app-{}", camel_to_kebab(page_name))
}

pub fn template_file_name(page_name: &str) -> String {
    format!("{}.component.html", page_name)
}

pub fn stylesheet_file_name(page_name: &str) -> String {
    format!("{}.component.scss", page_name)
}

pub fn class_file_name(page_name: &str) -> String {
    format!("{}.component.ts", page_name)
}

/// Import specifier of the class file, without extension.
pub fn class_module_stem(page_name: &str) -> String {
    format!("{}.component", page_name)
}

// ═══════════════════════════════════════════════════════════════════════════════
// CLASS EMITTER
// ═══════════════════════════════════════════════════════════════════════════════

/// Render the page component class from already-collected members.
pub fn render_class(
    page_name: &str,
    states: &[StateDeclaration],
    handlers: &[HandlerStub],
) -> String {
    let mut members: Vec<String> = states.iter().map(|s| format!("  {}", s)).collect();
    if !states.is_empty() && !handlers.is_empty() {
        members.push(String::new());
    }
    members.extend(handlers.iter().map(|h| format!("  {}", h)));

    let body = if members.is_empty() {
        String::new()
    } else {
        format!("{}\n", members.join("\n"))
    };

    format!(
        "import {{ Component }} from '@angular/core';\n\
         \n\
         @Component({{\n\
         \x20 selector: '{selector}',\n\
         \x20 templateUrl: './{template}',\n\
         \x20 styleUrls: ['./{stylesheet}']\n\
         }})\n\
         export class {class_name} {{\n\
         {body}}}\n",
        selector = selector(page_name),
        template = template_file_name(page_name),
        stylesheet = stylesheet_file_name(page_name),
        class_name = component_class_name(page_name),
        body = body,
    )
}

pub fn render_module(page: &PageDefinition) -> String {
    let states = collect_state(&page.components);
    let handlers = collect_handlers(&page.components);
    render_class(&page.page_name, &states, &handlers)
}

// ═══════════════════════════════════════════════════════════════════════════════
// PAGE ARTIFACTS
// ═══════════════════════════════════════════════════════════════════════════════

/// The three generated sources of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPage {
    pub page_name: String,
    pub html: String,
    pub scss: String,
    pub ts: String,
}

impl GeneratedPage {
    /// `(file name, contents)` for each artifact, in html/scss/ts order.
    pub fn files(&self) -> [(String, &str); 3] {
        [
            (template_file_name(&self.page_name), self.html.as_str()),
            (stylesheet_file_name(&self.page_name), self.scss.as_str()),
            (class_file_name(&self.page_name), self.ts.as_str()),
        ]
    }
}

pub fn generate_page(page: &PageDefinition, theme_import: &str) -> GeneratedPage {
    GeneratedPage {
        page_name: page.page_name.clone(),
        html: render_page(&page.components),
        scss: render_styles(&page.components, theme_import),
        ts: render_module(page),
    }
}
