//! MIT and Apache-2.0 license texts

use super::TemplateContext;

const APACHE_TEXT: &str = include_str!("../../templates/LICENSE-APACHE");

/// One license file of the dual-license pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseFile {
    Mit,
    Apache,
}

/// Files written by the dual-license workflow, in commit order
pub const DUAL_LICENSE_FILES: [LicenseFile; 2] = [LicenseFile::Mit, LicenseFile::Apache];

impl LicenseFile {
    /// Path of the file in the repository
    pub fn path(&self) -> &'static str {
        match self {
            LicenseFile::Mit => "LICENSE-MIT",
            LicenseFile::Apache => "LICENSE-APACHE",
        }
    }

    /// SPDX identifier
    pub fn spdx(&self) -> &'static str {
        match self {
            LicenseFile::Mit => "MIT",
            LicenseFile::Apache => "Apache-2.0",
        }
    }

    pub fn render(&self, ctx: &TemplateContext) -> String {
        match self {
            LicenseFile::Mit => mit(ctx.year, &ctx.holder),
            LicenseFile::Apache => apache(ctx.year, &ctx.holder),
        }
    }
}

/// MIT license text
pub fn mit(year: i32, holder: &str) -> String {
    format!(
        r#"MIT License

Copyright (c) {year} {holder}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#
    )
}

/// Apache License 2.0 text with the appendix notice filled in
pub fn apache(year: i32, holder: &str) -> String {
    APACHE_TEXT.replace(
        "[yyyy] [name of copyright owner]",
        &format!("{} {}", year, holder),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::test_context;

    #[test]
    fn test_mit_header() {
        let text = mit(2024, "Jane Doe");
        assert!(text.starts_with("MIT License\n\nCopyright (c) 2024 Jane Doe\n"));
        assert!(text.ends_with("SOFTWARE.\n"));
    }

    #[test]
    fn test_apache_fills_notice() {
        let text = apache(2023, "Acme Corp");
        assert!(text.contains("Apache License"));
        assert!(text.contains("Version 2.0, January 2004"));
        assert!(text.contains("Copyright 2023 Acme Corp"));
        assert!(!text.contains("[yyyy]"));
    }

    #[test]
    fn test_dual_license_files() {
        let ctx = test_context();
        let paths: Vec<_> = DUAL_LICENSE_FILES.iter().map(|f| f.path()).collect();
        assert_eq!(paths, vec!["LICENSE-MIT", "LICENSE-APACHE"]);
        assert!(LicenseFile::Mit.render(&ctx).contains("2024 Acme Corp"));
        assert_eq!(LicenseFile::Apache.spdx(), "Apache-2.0");
    }
}
