//! # No-code page compiler
//!
//! Turns the JSON page definitions saved by the visual page builder into
//! Angular components, one directory per page:
//!
//! - `{page}.component.html`: the template, one fixed rule per node type
//! - `{page}.component.scss`: the theme import plus one class block per styled node
//! - `{page}.component.ts`: the component class with form state and click handlers
//!
//! ## Output invariants
//!
//! 1. **Escaping**: user text in element content and attribute values is
//!    HTML-escaped, including `@` so Angular never reads it as block syntax.
//!    `action`, `src` and `href` are trusted and emitted verbatim.
//! 2. **Nesting**: children render inside their parent, in input order.
//! 3. **Totality**: an unknown node type renders as a comment and never fails
//!    the page.
//! 4. **Shared stem**: the three files of a page share the page name as
//!    their stem and the class file references the other two.
//! 5. **Determinism**: the same input always produces byte-identical output.

pub mod codegen;
pub mod compiler;
pub mod config;
pub mod error;
pub mod interaction;
pub mod library;
pub mod markup;
pub mod model;
pub mod naming;
pub mod parse;
pub mod styles;
pub mod validate;


pub use codegen::{generate_page, GeneratedPage};
pub use compiler::{compile, compile_pages, CompileReport, PageReport};
pub use config::{CompileOptions, LibraryOptions, ThemeAsset};
pub use error::{CompileError, Result};
pub use model::{ComponentDefinition, ComponentKind, ListType, PageDefinition};
pub use parse::{load_pages, parse_pages};
pub use validate::{
    find_collisions, find_route_collisions, validate_pages, Collision, CollisionKind,
    ValidationIssue,
};
