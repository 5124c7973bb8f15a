//! Gradle version catalog parser (libs.versions.toml)
//!
//! Handles the subset of TOML a version catalog needs:
//! - `[versions]` aliases: `kotlin = "1.9.22"` (single or double quotes)
//! - Rich version tables: `okhttp = { strictly = "4.12.0" }`
//! - `[libraries]` module notation: `{ module = "group:artifact", version.ref = "alias" }`
//! - `[libraries]` group/name notation: `{ group = "g", name = "a", version.ref = "alias" }`
//! - `version = { ref = "alias" }` as an alternative spelling of `version.ref`
//!
//! Every other table (`[plugins]`, `[bundles]`, ...) is ignored. Lines that do
//! not fit are skipped one by one; parsing never fails as a whole.

use crate::domain::DependencyCoordinate;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// Library inline-table fields
static MODULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bmodule\s*=\s*['"]([^'"]+)['"]"#).unwrap());
static GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bgroup\s*=\s*['"]([^'"]+)['"]"#).unwrap());
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bname\s*=\s*['"]([^'"]+)['"]"#).unwrap());

// version.ref = "alias" or version = { ref = "alias" }
static VERSION_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bversion(?:\.ref\s*=|\s*=\s*\{\s*ref\s*=)\s*['"]([^'"]+)['"]"#).unwrap()
});

// Rich version constraint; `require` wins over `prefer` over `strictly`
static RICH_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(strictly|require|prefer)\s*=\s*['"]([^'"]+)['"]"#).unwrap()
});

/// Parser for libs.versions.toml files
pub struct CatalogParser;

/// Table the parser is currently inside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Versions,
    Libraries,
}

/// Output of parsing one version catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCatalog {
    /// `[versions]` alias → literal version
    pub versions: IndexMap<String, String>,
    /// Library key → coordinate, in declaration order
    pub libraries: IndexMap<String, DependencyCoordinate>,
    /// Library key → alias key its version was resolved through
    pub aliases: IndexMap<String, String>,
}

impl ParsedCatalog {
    /// Number of resolvable libraries
    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    /// Returns true if no library could be resolved
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    /// Look up a coordinate by library key
    pub fn get(&self, key: &str) -> Option<&DependencyCoordinate> {
        self.libraries.get(key)
    }

    /// Alias key the library's version came from
    pub fn alias_for(&self, key: &str) -> Option<&str> {
        self.aliases.get(key).map(String::as_str)
    }

    /// Iterate coordinates in declaration order
    pub fn coordinates(&self) -> impl Iterator<Item = &DependencyCoordinate> {
        self.libraries.values()
    }

    /// Find the 1-based line of the `[versions]` entry a library resolved through.
    ///
    /// `content` must be the text this catalog was parsed from.
    pub fn declaration_line(&self, content: &str, key: &str) -> Option<usize> {
        let alias = self.alias_for(key)?;
        let declared = &self.libraries.get(key)?.declared_version;
        declaration_line(content, alias, declared)
    }
}

/// Locate `alias = "...declared..."` inside the `[versions]` table
pub fn declaration_line(content: &str, alias: &str, declared: &str) -> Option<usize> {
    let mut section = Section::None;

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if let Some(next) = section_header(trimmed) {
            section = next;
            continue;
        }
        if section != Section::Versions {
            continue;
        }
        let Some((key, _)) = trimmed.split_once('=') else {
            continue;
        };
        if unquote(key.trim()) == alias && line.contains(declared) {
            return Some(idx + 1);
        }
    }

    None
}

/// Parse a version catalog
pub fn parse_catalog(content: &str) -> ParsedCatalog {
    CatalogParser.parse(content)
}

impl CatalogParser {
    /// Parse catalog text into coordinates and the alias cache.
    ///
    /// Versions are collected in a first pass, so `[libraries]` may appear
    /// before `[versions]` in the file.
    pub fn parse(&self, content: &str) -> ParsedCatalog {
        let versions = self.extract_versions(content);
        let mut libraries = IndexMap::new();
        let mut aliases = IndexMap::new();
        let mut section = Section::None;

        for (line_idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            if let Some(next) = section_header(trimmed) {
                section = next;
                continue;
            }

            if section != Section::Libraries || is_skippable(trimmed) {
                continue;
            }

            match self.parse_library_line(trimmed, &versions) {
                Some((coordinate, alias)) => {
                    aliases.insert(coordinate.key.clone(), alias);
                    libraries.insert(coordinate.key.clone(), coordinate);
                }
                None => debug!("Skipping library line {}: {}", line_idx + 1, trimmed),
            }
        }

        ParsedCatalog {
            versions,
            libraries,
            aliases,
        }
    }

    /// Collect every `[versions]` entry; later duplicates win
    fn extract_versions(&self, content: &str) -> IndexMap<String, String> {
        let mut versions = IndexMap::new();
        let mut section = Section::None;

        for (line_idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            if let Some(next) = section_header(trimmed) {
                section = next;
                continue;
            }

            if section != Section::Versions || is_skippable(trimmed) {
                continue;
            }

            let Some((key, value)) = trimmed.split_once('=') else {
                continue;
            };
            let key = unquote(key.trim());
            let value = parse_version_value(value.trim());

            match value {
                Some(value) if !key.is_empty() => {
                    debug!("Found version alias: {} = {}", key, value);
                    versions.insert(key.to_string(), value);
                }
                _ => debug!("Skipping version line {}: {}", line_idx + 1, trimmed),
            }
        }

        versions
    }

    /// Parse one `[libraries]` entry, returning the coordinate and the alias it used
    fn parse_library_line(
        &self,
        line: &str,
        versions: &IndexMap<String, String>,
    ) -> Option<(DependencyCoordinate, String)> {
        let (key, value) = line.split_once('=')?;
        let key = unquote(key.trim());
        if key.is_empty() {
            return None;
        }

        let alias = capture(&VERSION_REF_RE, value);
        let resolved = alias.and_then(|a| versions.get(a).map(|v| (a, v)));

        // Module notation takes precedence; a module without a colon is not retried
        if let (Some(module), Some((alias, version))) = (capture(&MODULE_RE, value), resolved) {
            let coordinate = DependencyCoordinate::from_module(key, module, version)?;
            return Some((coordinate, alias.to_string()));
        }

        let group = capture(&GROUP_RE, value)?;
        let name = capture(&NAME_RE, value)?;
        let (alias, version) = resolved?;
        Some((
            DependencyCoordinate::new(key, group, name, version),
            alias.to_string(),
        ))
    }
}

/// Returns the section a header line switches to, or `None` for non-header lines
fn section_header(trimmed: &str) -> Option<Section> {
    let inner = trimmed.strip_prefix('[')?;
    let end = inner.find(']')?;
    let section = match inner[..end].trim() {
        "versions" => Section::Versions,
        "libraries" => Section::Libraries,
        _ => Section::None,
    };
    Some(section)
}

fn is_skippable(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.starts_with('#') || !trimmed.contains('=')
}

fn capture<'a>(re: &Regex, haystack: &'a str) -> Option<&'a str> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Strip one pair of surrounding `"` or `'`
fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|r| r.strip_suffix(quote)) {
            return inner;
        }
    }
    s
}

/// Gradle range notation such as `[1.0, 2.0[` or `(,3.0]`
fn is_range(value: &str) -> bool {
    value.starts_with(['[', ']', '('])
}

/// Turn the right-hand side of a `[versions]` entry into a literal version
fn parse_version_value(value: &str) -> Option<String> {
    if value.starts_with('{') {
        let caps = RICH_VERSION_RE
            .captures_iter(value)
            .map(|c| (c.get(1).map(|m| m.as_str()), c.get(2).map(|m| m.as_str())))
            .collect::<Vec<_>>();
        return ["require", "prefer", "strictly"].iter().find_map(|wanted| {
            caps.iter()
                .find(|(kind, v)| *kind == Some(*wanted) && v.is_some_and(|v| !is_range(v)))
                .and_then(|(_, v)| v.map(str::to_string))
        });
    }

    // Quoted value, possibly followed by a comment
    for quote in ['"', '\''] {
        if let Some(rest) = value.strip_prefix(quote) {
            return rest
                .find(quote)
                .map(|end| rest[..end].to_string())
                .filter(|v| !v.is_empty());
        }
    }

    let bare = value.split('#').next().unwrap_or("").trim();
    if bare.is_empty() {
        None
    } else {
        Some(bare.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_module_notation() {
        let content = r#"
[versions]
foo = "1.2.3"
[libraries]
bar = { module = "com.example:bar", version.ref = "foo" }
"#;
        let catalog = parse_catalog(content);
        assert_eq!(catalog.len(), 1);
        let bar = catalog.get("bar").unwrap();
        assert_eq!(bar.key, "bar");
        assert_eq!(bar.group, "com.example");
        assert_eq!(bar.artifact, "bar");
        assert_eq!(bar.declared_version, "1.2.3");
        assert_eq!(catalog.alias_for("bar"), Some("foo"));
    }

    #[test]
    fn test_parse_group_name_notation() {
        let content = r#"
[versions]
okhttp = "4.12.0"

[libraries]
okhttp = { group = "com.squareup.okhttp3", name = "okhttp", version.ref = "okhttp" }
"#;
        let catalog = parse_catalog(content);
        let okhttp = catalog.get("okhttp").unwrap();
        assert_eq!(okhttp.group, "com.squareup.okhttp3");
        assert_eq!(okhttp.artifact, "okhttp");
        assert_eq!(okhttp.declared_version, "4.12.0");
    }

    #[test]
    fn test_parse_version_ref_table() {
        let content = r#"
[versions]
coil = "2.5.0"
[libraries]
coil = { module = "io.coil-kt:coil", version = { ref = "coil" } }
"#;
        let catalog = parse_catalog(content);
        assert_eq!(catalog.get("coil").unwrap().declared_version, "2.5.0");
        assert_eq!(catalog.alias_for("coil"), Some("coil"));
    }

    #[test]
    fn test_parse_single_quotes() {
        let content = r#"
[versions]
foo = '1.0.0'
[libraries]
bar = { module = 'com.example:bar', version.ref = 'foo' }
"#;
        let catalog = parse_catalog(content);
        assert_eq!(catalog.get("bar").unwrap().declared_version, "1.0.0");
    }

    #[test]
    fn test_missing_alias_is_dropped() {
        let content = r#"
[versions]
foo = "1.2.3"
[libraries]
bar = { module = "com.example:bar", version.ref = "missing" }
"#;
        let catalog = parse_catalog(content);
        assert!(catalog.is_empty());
        assert!(catalog.aliases.is_empty());
    }

    #[test]
    fn test_literal_version_is_dropped() {
        let content = r#"
[libraries]
bar = { module = "com.example:bar", version = "1.0" }
baz = "com.example:baz:1.0"
"#;
        assert!(parse_catalog(content).is_empty());
    }

    #[test]
    fn test_module_without_colon_is_dropped() {
        let content = r#"
[versions]
foo = "1.2.3"
[libraries]
bar = { module = "com.example.bar", version.ref = "foo" }
"#;
        assert!(parse_catalog(content).is_empty());
    }

    #[test]
    fn test_module_split_at_last_colon() {
        let content = r#"
[versions]
foo = "1.0"
[libraries]
bar = { module = "org.a:b:c", version.ref = "foo" }
"#;
        let bar = parse_catalog(content).get("bar").cloned().unwrap();
        assert_eq!(bar.group, "org.a:b");
        assert_eq!(bar.artifact, "c");
    }

    #[test]
    fn test_libraries_before_versions() {
        let content = r#"
[libraries]
bar = { module = "com.example:bar", version.ref = "foo" }

[versions]
foo = "1.2.3"
"#;
        let catalog = parse_catalog(content);
        assert_eq!(catalog.get("bar").unwrap().declared_version, "1.2.3");
    }

    #[test]
    fn test_other_sections_reset_state() {
        let content = r#"
[versions]
foo = "1.2.3"

[plugins]
android = { id = "com.android.application", version.ref = "foo" }

[bundles]
all = ["bar"]

[libraries]
bar = { module = "com.example:bar", version.ref = "foo" }
"#;
        let catalog = parse_catalog(content);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.versions.len(), 1);
        assert!(catalog.get("android").is_none());
    }

    #[test]
    fn test_duplicate_versions_overwrite() {
        let content = r#"
[versions]
foo = "1.0.0"
foo = "2.0.0"
[libraries]
bar = { module = "com.example:bar", version.ref = "foo" }
"#;
        let catalog = parse_catalog(content);
        assert_eq!(catalog.get("bar").unwrap().declared_version, "2.0.0");
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let content = r#"
# top comment
[versions]
# foo = "9.9.9"
foo = "1.2.3" # trailing comment

[libraries]
# bar = { module = "commented:out", version.ref = "foo" }
bar = { module = "com.example:bar", version.ref = "foo" }
"#;
        let catalog = parse_catalog(content);
        assert_eq!(catalog.versions.get("foo").map(String::as_str), Some("1.2.3"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("bar").unwrap().group, "com.example");
    }

    #[test]
    fn test_rich_versions() {
        let content = r#"
[versions]
strict = { strictly = "[1.0, 2.0[", prefer = "1.5" }
pinned = { strictly = "2.2.0" }
both = { strictly = "5.0", require = "4.9" }
range_only = { strictly = "[1.0, 2.0)" }
required = { require = "3.1" }
preferred = { prefer = "4.0" }
empty = { reject = "1.0" }
"#;
        let catalog = parse_catalog(content);
        assert_eq!(catalog.versions.get("strict").map(String::as_str), Some("1.5"));
        assert_eq!(catalog.versions.get("pinned").map(String::as_str), Some("2.2.0"));
        assert_eq!(catalog.versions.get("both").map(String::as_str), Some("4.9"));
        assert!(!catalog.versions.contains_key("range_only"));
        assert_eq!(catalog.versions.get("required").map(String::as_str), Some("3.1"));
        assert_eq!(catalog.versions.get("preferred").map(String::as_str), Some("4.0"));
        assert!(!catalog.versions.contains_key("empty"));
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let content = r#"
[versions]
no equals sign here
= "1.0"
foo = "1.2.3"
[libraries]
garbage = {{{{
bar = { module = "com.example:bar", version.ref = "foo" }
"#;
        let catalog = parse_catalog(content);
        assert_eq!(catalog.versions.len(), 1);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_preserves_declaration_order() {
        let content = r#"
[versions]
v = "1.0"
[libraries]
zeta = { module = "z:z", version.ref = "v" }
alpha = { module = "a:a", version.ref = "v" }
mid = { module = "m:m", version.ref = "v" }
"#;
        let keys: Vec<_> = parse_catalog(content).libraries.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_parse_empty() {
        let catalog = parse_catalog("");
        assert!(catalog.is_empty());
        assert!(catalog.versions.is_empty());
    }

    #[test]
    fn test_declaration_line() {
        let content = r#"[versions]
agp = "8.2.0"
core-ktx = "1.12.0"

[libraries]
core-ktx = { module = "androidx.core:core-ktx", version.ref = "core-ktx" }
"#;
        let catalog = parse_catalog(content);
        assert_eq!(catalog.declaration_line(content, "core-ktx"), Some(3));
        assert_eq!(catalog.declaration_line(content, "unknown"), None);
    }

    #[test]
    fn test_declaration_line_ignores_libraries_section() {
        let content = r#"[libraries]
foo = { module = "com.example:foo", version.ref = "foo" } # 1.0
[versions]
foo = "1.0"
"#;
        let catalog = parse_catalog(content);
        assert_eq!(catalog.declaration_line(content, "foo"), Some(4));
    }

    #[test]
    fn test_realistic_android_catalog() {
        let content = r#"
[versions]
agp = "8.2.0"
kotlin = "1.9.22"
coreKtx = "1.12.0"
junit = "4.13.2"
composeBom = "2024.02.00"
lifecycle = "2.8.0-alpha01"

[libraries]
androidx-core-ktx = { group = "androidx.core", name = "core-ktx", version.ref = "coreKtx" }
junit = { group = "junit", name = "junit", version.ref = "junit" }
androidx-compose-bom = { group = "androidx.compose", name = "compose-bom", version.ref = "composeBom" }
androidx-ui = { group = "androidx.compose.ui", name = "ui" }
lifecycle-runtime = { module = "androidx.lifecycle:lifecycle-runtime-ktx", version.ref = "lifecycle" }

[plugins]
android-application = { id = "com.android.application", version.ref = "agp" }
kotlin-android = { id = "org.jetbrains.kotlin.android", version.ref = "kotlin" }
"#;
        let catalog = parse_catalog(content);
        assert_eq!(catalog.versions.len(), 6);
        assert_eq!(catalog.len(), 4);
        assert!(catalog.get("androidx-ui").is_none());
        assert_eq!(
            catalog.get("lifecycle-runtime").unwrap().declared_version,
            "2.8.0-alpha01"
        );
        assert_eq!(catalog.alias_for("androidx-core-ktx"), Some("coreKtx"));
    }
}
