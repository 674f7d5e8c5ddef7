//! Library barrel
//!
//! Sources that tie the generated pages together: an NgModule declaring every
//! page component, a public API re-exporting them, and a route table. All
//! import paths are relative to the output directory the pages are written
//! into.

use crate::codegen::{class_module_stem, component_class_name};
use crate::model::PageDefinition;
use crate::naming::{camel_to_kebab, escape_ts_string, to_pascal_case};

pub const PUBLIC_API_FILE: &str = "public-api.ts";
pub const ROUTES_FILE: &str = "app.routes.ts";

pub fn module_file_name(module_name: &str) -> String {
    format!("{}.module.ts", module_name)
}

/// `dynamic-components` -> `DynamicComponentsModule`
pub fn module_class_name(module_name: &str) -> String {
    format!("{}Module", to_pascal_case(module_name))
}

/// `about-page` -> `about`; the stem is otherwise kept as-is.
pub fn route_path(page_name: &str) -> String {
    let stem = camel_to_kebab(page_name);
    match stem.strip_suffix("-page") {
        Some(route) => route.to_string(),
        None => stem,
    }
}

fn page_import(page: &PageDefinition) -> String {
    format!(
        "import {{ {} }} from './{}/{}';",
        component_class_name(&page.page_name),
        page.page_name,
        class_module_stem(&page.page_name)
    )
}

pub fn render_library_module(pages: &[PageDefinition], module_name: &str) -> String {
    let imports: Vec<String> = pages.iter().map(page_import).collect();
    let declarations = pages
        .iter()
        .map(|page| format!("    {}", component_class_name(&page.page_name)))
        .collect::<Vec<_>>()
        .join(",\n");

    let mut out = String::new();
    out.push_str("import { NgModule } from '@angular/core';\n");
    out.push_str("import { CommonModule } from '@angular/common';\n");
    out.push_str("import { FormsModule } from '@angular/forms';\n");
    for import in &imports {
        out.push_str(import);
        out.push('\n');
    }
    out.push('\n');
    out.push_str("@NgModule({\n");
    out.push_str("  imports: [CommonModule, FormsModule],\n");
    out.push_str(&format!("  declarations: [\n{}\n  ],\n", declarations));
    out.push_str(&format!("  exports: [\n{}\n  ]\n", declarations));
    out.push_str("})\n");
    out.push_str(&format!("export class {} {{}}\n", module_class_name(module_name)));
    out
}

pub fn render_public_api(pages: &[PageDefinition], module_name: &str) -> String {
    let mut lines = vec![format!("export * from './{}.module';", module_name)];
    lines.extend(pages.iter().map(|page| {
        format!(
            "export * from './{}/{}';",
            page.page_name,
            class_module_stem(&page.page_name)
        )
    }));
    lines.join("\n") + "\n"
}

pub fn render_routes(pages: &[PageDefinition]) -> String {
    let mut out = String::from("import { Routes } from '@angular/router';\n");
    for page in pages {
        out.push_str(&page_import(page));
        out.push('\n');
    }
    out.push('\n');

    let mut routes: Vec<String> = pages
        .iter()
        .map(|page| {
            format!(
                "  {{ path: '{}', component: {} }}",
                escape_ts_string(&route_path(&page.page_name)),
                component_class_name(&page.page_name)
            )
        })
        .collect();
    if let Some(first) = pages.first() {
        routes.push(format!(
            "  {{ path: '', redirectTo: '{}', pathMatch: 'full' }}",
            escape_ts_string(&route_path(&first.page_name))
        ));
    }

    if routes.is_empty() {
        out.push_str("export const routes: Routes = [];\n");
    } else {
        out.push_str(&format!(
            "export const routes: Routes = [\n{}\n];\n",
            routes.join(",\n")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pages() -> Vec<PageDefinition> {
        vec![
            PageDefinition::new("home-page", vec![]),
            PageDefinition::new("about-page", vec![]),
        ]
    }

    #[test]
    fn test_route_path() {
        assert_eq!(route_path("home-page"), "home");
        assert_eq!(route_path("pricing"), "pricing");
        assert_eq!(route_path("ContactPage"), "contact");
        assert_eq!(route_path("page-list"), "page-list");
    }

    #[test]
    fn test_module_class_name() {
        assert_eq!(module_class_name("dynamic-components"), "DynamicComponentsModule");
    }

    #[test]
    fn test_library_module() {
        assert_eq!(
            render_library_module(&pages(), "dynamic-components"),
            "import { NgModule } from '@angular/core';\n\
             import { CommonModule } from '@angular/common';\n\
             import { FormsModule } from '@angular/forms';\n\
             import { HomePageComponent } from './home-page/home-page.component';\n\
             import { AboutPageComponent } from './about-page/about-page.component';\n\
             \n\
             @NgModule({\n\
             \x20 imports: [CommonModule, FormsModule],\n\
             \x20 declarations: [\n\
             \x20   HomePageComponent,\n\
             \x20   AboutPageComponent\n\
             \x20 ],\n\
             \x20 exports: [\n\
             \x20   HomePageComponent,\n\
             \x20   AboutPageComponent\n\
             \x20 ]\n\
             })\n\
             export class DynamicComponentsModule {}\n"
        );
    }

    #[test]
    fn test_public_api() {
        assert_eq!(
            render_public_api(&pages(), "dynamic-components"),
            "export * from './dynamic-components.module';\n\
             export * from './home-page/home-page.component';\n\
             export * from './about-page/about-page.component';\n"
        );
    }

    #[test]
    fn test_routes() {
        let routes = render_routes(&pages());
        assert!(routes.contains("import { HomePageComponent } from './home-page/home-page.component';"));
        assert!(routes.contains(
            "export const routes: Routes = [\n  { path: 'home', component: HomePageComponent },\n  { path: 'about', component: AboutPageComponent },\n  { path: '', redirectTo: 'home', pathMatch: 'full' }\n];\n"
        ));
    }

    #[test]
    fn test_routes_without_pages() {
        assert_eq!(
            render_routes(&[]),
            "import { Routes } from '@angular/router';\n\nexport const routes: Routes = [];\n"
        );
    }
}
