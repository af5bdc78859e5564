//! Starter project layouts

use serde::Serialize;

use super::{ProjectKind, TemplateContext};
use crate::error::Result;

/// One rendered file of a layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    /// Path relative to the repository root, `/`-separated
    pub path: String,
    pub contents: String,
}

impl ScaffoldFile {
    fn new(path: &str, contents: String) -> Self {
        Self {
            path: path.to_string(),
            contents,
        }
    }
}

/// Render every file of `kind`
pub fn files(kind: ProjectKind, ctx: &TemplateContext) -> Result<Vec<ScaffoldFile>> {
    let files = match kind {
        ProjectKind::RustLib => vec![
            ScaffoldFile::new("Cargo.toml", cargo_toml(ctx)?),
            ScaffoldFile::new("src/lib.rs", lib_rs(ctx)),
            ScaffoldFile::new("README.md", readme(ctx, true)),
            ScaffoldFile::new(".gitignore", rust_gitignore(kind)),
        ],
        ProjectKind::RustBin => vec![
            ScaffoldFile::new("Cargo.toml", cargo_toml(ctx)?),
            ScaffoldFile::new("src/main.rs", main_rs(ctx)),
            ScaffoldFile::new("README.md", readme(ctx, true)),
            ScaffoldFile::new(".gitignore", rust_gitignore(kind)),
        ],
        ProjectKind::Generic => vec![
            ScaffoldFile::new("README.md", readme(ctx, false)),
            ScaffoldFile::new(".gitignore", generic_gitignore()),
            ScaffoldFile::new("docs/README.md", docs_readme(ctx)),
        ],
    };
    Ok(files)
}

/// `[package]` table of the generated manifest
#[derive(Debug, Serialize)]
struct Manifest<'a> {
    package: Package<'a>,
}

#[derive(Debug, Serialize)]
struct Package<'a> {
    name: String,
    version: &'a str,
    edition: &'a str,
    description: String,
    license: &'a str,
    repository: String,
    readme: &'a str,
}

fn cargo_toml(ctx: &TemplateContext) -> Result<String> {
    let manifest = Manifest {
        package: Package {
            name: ctx.package_name(),
            version: "0.1.0",
            edition: "2021",
            description: ctx.description_or_default(),
            license: "MIT OR Apache-2.0",
            repository: format!("https://github.com/{}/{}", ctx.owner, ctx.name),
            readme: "README.md",
        },
    };
    let package = toml::to_string(&manifest)?;
    Ok(format!("{}\n[dependencies]\n", package))
}

fn lib_rs(ctx: &TemplateContext) -> String {
    let docs = doc_comment(&ctx.description_or_default());
    let ident = ctx.crate_ident();
    format!(
        r#"{docs}

/// Returns the crate name.
pub fn name() -> &'static str {{
    "{ident}"
}}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::test_context;

    fn paths(files: &[ScaffoldFile]) -> Vec<&str> {
        files.iter().map(|f| f.path.as_str()).collect()
    }

    fn package(manifest: &str) -> toml::Value {
        let value: toml::Value = toml::from_str(manifest).unwrap();
        value["package"].clone()
    }

    #[test]
    fn test_rust_lib_layout() {
        let files = files(ProjectKind::RustLib, &test_context()).unwrap();
        assert_eq!(
            paths(&files),
            vec!["Cargo.toml", "src/lib.rs", "README.md", ".gitignore"]
        );

        let package = package(&files[0].contents);
        assert_eq!(package["name"].as_str(), Some("my-widget"));
        assert_eq!(package["license"].as_str(), Some("MIT OR Apache-2.0"));
        assert_eq!(
            package["repository"].as_str(),
            Some("https://github.com/acme/My.Widget")
        );
        assert!(files[0].contents.ends_with("[dependencies]\n"));

        assert!(files[1].contents.contains("\"my_widget\""));
        assert!(files[3].contents.contains("Cargo.lock"));
    }

    #[test]
    fn test_rust_bin_layout() {
        let files = files(ProjectKind::RustBin, &test_context()).unwrap();
        assert_eq!(
            paths(&files),
            vec!["Cargo.toml", "src/main.rs", "README.md", ".gitignore"]
        );
        assert!(files[1].contents.contains("Hello from my-widget!"));
        assert!(!files[3].contents.contains("Cargo.lock"));
    }

    #[test]
    fn test_generic_layout_has_no_license_section() {
        let files = files(ProjectKind::Generic, &test_context()).unwrap();
        assert_eq!(paths(&files), vec!["README.md", ".gitignore", "docs/README.md"]);
        assert!(files[0].contents.starts_with("# My.Widget\n"));
        assert!(!files[0].contents.contains("## License"));
    }

    #[test]
    fn test_manifest_keeps_description_verbatim() {
        for description in [
            "A \"quoted\" widget",
            r"Parses C:\paths and 100\% inputs",
            r"C:\tools",
            "First line\nsecond line",
            "It's 'single' quoted",
        ] {
            let mut ctx = test_context();
            ctx.description = Some(description.to_string());
            let package = package(&cargo_toml(&ctx).unwrap());
            assert_eq!(package["description"].as_str(), Some(description));
        }
    }

    #[test]
    fn test_crate_docs_cover_every_description_line() {
        let mut ctx = test_context();
        ctx.description = Some("First line\n\nthird line".to_string());
        let lib = lib_rs(&ctx);
        assert!(lib.starts_with("//! First line\n//!\n//! third line\n\n/// Returns"));
    }
}
