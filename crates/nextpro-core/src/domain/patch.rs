//! Best-effort text patches applied to files produced by the external
//! project generator.
//!
//! The generator's output is not under our control, so every patch looks for
//! a tolerant anchor and reports what happened through [`PatchOutcome`]
//! instead of silently leaving the file alone. All functions here are pure.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Import line inserted into the root layout.
pub const TRPC_PROVIDER_IMPORT: &str =
    r#"import { TRPCProvider } from "@/components/providers/trpc-provider";"#;

const STANDALONE_ENTRY: &str = "\n  output: 'standalone',";

static STANDALONE_PRESENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"output\s*:\s*['"]standalone['"]"#).expect("static pattern compiles")
});

// `const nextConfig = {`, optionally typed: `const nextConfig: NextConfig = {`
static NEXT_CONFIG_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"const\s+nextConfig\s*(?::\s*[\w.]+\s*)?=\s*\{").expect("static pattern compiles")
});

static METADATA_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*import\s+(?:type\s+)?\{\s*Metadata\s*\}\s+from\s+["']next["'];?"#)
        .expect("static pattern compiles")
});

static BODY_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<body([^>]*)>(.*?)</body>").expect("static pattern compiles")
});

/// What a single patch step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The anchor was found and the content changed.
    Applied,
    /// The change was already there; content unchanged.
    AlreadyPresent,
    /// The anchor was not found; content unchanged.
    AnchorMissing { anchor: &'static str },
}

impl PatchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::AnchorMissing { .. })
    }
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied => f.write_str("applied"),
            Self::AlreadyPresent => f.write_str("already present"),
            Self::AnchorMissing { anchor } => write!(f, "anchor `{anchor}` not found"),
        }
    }
}

/// Patched content together with the outcome of the patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    pub content: String,
    pub outcome: PatchOutcome,
}

/// Result of the two-step layout patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPatch {
    pub content: String,
    pub import: PatchOutcome,
    pub wrap: PatchOutcome,
}

impl LayoutPatch {
    pub fn changed(&self) -> bool {
        self.import.is_applied() || self.wrap.is_applied()
    }
}

/// Enable `output: 'standalone'` in a Next.js config so the Docker image can
/// copy `.next/standalone`.
pub fn enable_standalone_output(source: &str) -> Patched {
    if STANDALONE_PRESENT.is_match(source) {
        return unchanged(source, PatchOutcome::AlreadyPresent);
    }

    match NEXT_CONFIG_OPEN.find(source) {
        Some(open) => {
            let mut content = String::with_capacity(source.len() + STANDALONE_ENTRY.len());
            content.push_str(&source[..open.end()]);
            content.push_str(STANDALONE_ENTRY);
            content.push_str(&source[open.end()..]);
            Patched {
                content,
                outcome: PatchOutcome::Applied,
            }
        }
        None => unchanged(
            source,
            PatchOutcome::AnchorMissing {
                anchor: "const nextConfig = {",
            },
        ),
    }
}

/// Import the tRPC provider in the root layout and wrap the `<body>` content
/// with it.
///
/// A layout that already mentions `TRPCProvider` is left untouched.
pub fn inject_trpc_provider(source: &str) -> LayoutPatch {
    if source.contains("TRPCProvider") {
        return LayoutPatch {
            content: source.to_string(),
            import: PatchOutcome::AlreadyPresent,
            wrap: PatchOutcome::AlreadyPresent,
        };
    }

    let (content, import) = match METADATA_IMPORT.find(source) {
        Some(anchor) => {
            let mut out = String::with_capacity(source.len() + TRPC_PROVIDER_IMPORT.len() + 1);
            out.push_str(&source[..anchor.end()]);
            out.push('\n');
            out.push_str(TRPC_PROVIDER_IMPORT);
            out.push_str(&source[anchor.end()..]);
            (out, PatchOutcome::Applied)
        }
        None => (
            source.to_string(),
            PatchOutcome::AnchorMissing {
                anchor: r#"import type { Metadata } from "next";"#,
            },
        ),
    };

    let (content, wrap) = wrap_body(content);

    LayoutPatch {
        content,
        import,
        wrap,
    }
}

fn wrap_body(source: String) -> (String, PatchOutcome) {
    let Some(caps) = BODY_ELEMENT.captures(&source) else {
        return (
            source,
            PatchOutcome::AnchorMissing {
                anchor: "<body>…</body>",
            },
        );
    };

    let whole = caps.get(0).map(|m| m.range()).unwrap_or_default();
    let attrs = caps.get(1).map_or("", |m| m.as_str());
    let inner = caps.get(2).map_or("", |m| m.as_str());

    let replacement = format!(
        "<body{attrs}>\n        <TRPCProvider>{inner}\n        </TRPCProvider>\n      </body>"
    );

    let mut out = String::with_capacity(source.len() + replacement.len());
    out.push_str(&source[..whole.start]);
    out.push_str(&replacement);
    out.push_str(&source[whole.end..]);
    (out, PatchOutcome::Applied)
}

/// Entries appended to `extends` in a legacy `.eslintrc.json`.
pub const ESLINT_EXTENDS: [&str; 2] = ["next/core-web-vitals", "prettier"];

/// Append the Prettier-compatible presets to an `.eslintrc.json`.
///
/// A string `extends` is treated as a one-element list. Presets already
/// listed are not repeated. Content that is not a JSON object is reported as
/// a missing anchor.
pub fn extend_eslint_config(source: &str) -> Patched {
    let missing = PatchOutcome::AnchorMissing {
        anchor: "top-level JSON object",
    };

    let Ok(Value::Object(mut config)) = serde_json::from_str::<Value>(source) else {
        return unchanged(source, missing);
    };

    let mut extends: Vec<Value> = match config.get("extends") {
        Some(Value::Array(items)) => items.clone(),
        Some(Value::String(single)) => vec![Value::String(single.clone())],
        _ => Vec::new(),
    };

    let mut added = false;
    for preset in ESLINT_EXTENDS {
        if !extends.iter().any(|v| v.as_str() == Some(preset)) {
            extends.push(Value::String(preset.to_string()));
            added = true;
        }
    }

    if !added {
        return unchanged(source, PatchOutcome::AlreadyPresent);
    }

    // Existing keys keep their position.
    config.insert("extends".into(), Value::Array(extends));

    match serde_json::to_string_pretty(&Value::Object(config)) {
        Ok(mut content) => {
            content.push('\n');
            Patched {
                content,
                outcome: PatchOutcome::Applied,
            }
        }
        Err(_) => unchanged(source, missing),
    }
}

fn unchanged(source: &str, outcome: PatchOutcome) -> Patched {
    Patched {
        content: source.to_string(),
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEXT_CONFIG_MJS: &str = "/** @type {import('next').NextConfig} */\nconst nextConfig = {};\n\nexport default nextConfig;\n";

    const NEXT_CONFIG_TS: &str = "import type { NextConfig } from \"next\";\n\nconst nextConfig: NextConfig = {\n  /* config options here */\n};\n\nexport default nextConfig;\n";

    const LAYOUT: &str = r#"import type { Metadata } from "next";
import "./globals.css";

export default function RootLayout({
  children,
}: Readonly<{
  children: React.ReactNode;
}>) {
  return (
    <html lang="en">
      <body className="antialiased">
        {children}
      </body>
    </html>
  );
}
"#;

    // ── standalone output ───────────────────────────────────────────────────

    #[test]
    fn standalone_inserted_after_plain_anchor() {
        let patched = enable_standalone_output(NEXT_CONFIG_MJS);
        assert_eq!(patched.outcome, PatchOutcome::Applied);
        assert!(
            patched
                .content
                .contains("const nextConfig = {\n  output: 'standalone',};")
        );
    }

    #[test]
    fn standalone_tolerates_type_annotation() {
        let patched = enable_standalone_output(NEXT_CONFIG_TS);
        assert_eq!(patched.outcome, PatchOutcome::Applied);
        assert!(
            patched
                .content
                .contains("const nextConfig: NextConfig = {\n  output: 'standalone',\n  /* config")
        );
    }

    #[test]
    fn standalone_is_idempotent() {
        let once = enable_standalone_output(NEXT_CONFIG_TS);
        let twice = enable_standalone_output(&once.content);
        assert_eq!(twice.outcome, PatchOutcome::AlreadyPresent);
        assert_eq!(twice.content, once.content);
    }

    #[test]
    fn standalone_detects_double_quoted_value() {
        let src = "const nextConfig = {\n  output: \"standalone\",\n};\n";
        assert_eq!(
            enable_standalone_output(src).outcome,
            PatchOutcome::AlreadyPresent
        );
    }

    #[test]
    fn standalone_reports_missing_anchor() {
        let src = "module.exports = { reactStrictMode: true };\n";
        let patched = enable_standalone_output(src);
        assert!(patched.outcome.is_missing());
        assert_eq!(patched.content, src);
    }

    // ── layout ──────────────────────────────────────────────────────────────

    #[test]
    fn layout_gets_import_and_wrapper() {
        let patch = inject_trpc_provider(LAYOUT);
        assert_eq!(patch.import, PatchOutcome::Applied);
        assert_eq!(patch.wrap, PatchOutcome::Applied);
        assert!(patch.content.starts_with(&format!(
            "import type {{ Metadata }} from \"next\";\n{TRPC_PROVIDER_IMPORT}\n"
        )));
        assert!(patch.content.contains(
            "<body className=\"antialiased\">\n        <TRPCProvider>\n        {children}\n      \n        </TRPCProvider>\n      </body>"
        ));
    }

    #[test]
    fn layout_accepts_value_import() {
        let src = LAYOUT.replace("import type { Metadata }", "import { Metadata }");
        let patch = inject_trpc_provider(&src);
        assert_eq!(patch.import, PatchOutcome::Applied);
        assert!(patch.content.contains(TRPC_PROVIDER_IMPORT));
    }

    #[test]
    fn layout_already_wired_is_untouched() {
        let once = inject_trpc_provider(LAYOUT);
        let twice = inject_trpc_provider(&once.content);
        assert_eq!(twice.import, PatchOutcome::AlreadyPresent);
        assert_eq!(twice.wrap, PatchOutcome::AlreadyPresent);
        assert!(!twice.changed());
        assert_eq!(twice.content, once.content);
    }

    #[test]
    fn layout_without_metadata_import_still_wraps_body() {
        let src = "export default function L({ children }) {\n  return <html><body>{children}</body></html>;\n}\n";
        let patch = inject_trpc_provider(src);
        assert!(patch.import.is_missing());
        assert_eq!(patch.wrap, PatchOutcome::Applied);
        assert!(patch.content.contains("<TRPCProvider>{children}"));
    }

    #[test]
    fn layout_without_body_reports_missing_wrap() {
        let src = "import type { Metadata } from \"next\";\nexport default function L() { return null; }\n";
        let patch = inject_trpc_provider(src);
        assert_eq!(patch.import, PatchOutcome::Applied);
        assert!(patch.wrap.is_missing());
    }

    // ── eslint ──────────────────────────────────────────────────────────────

    #[test]
    fn eslint_extends_array_is_extended() {
        let patched = extend_eslint_config(r#"{ "extends": ["next/typescript"] }"#);
        assert_eq!(patched.outcome, PatchOutcome::Applied);
        let value: Value = serde_json::from_str(&patched.content).unwrap();
        assert_eq!(
            value["extends"],
            serde_json::json!(["next/typescript", "next/core-web-vitals", "prettier"])
        );
        assert!(patched.content.ends_with('\n'));
    }

    #[test]
    fn eslint_string_extends_becomes_list() {
        let patched = extend_eslint_config(r#"{ "extends": "next/core-web-vitals" }"#);
        let value: Value = serde_json::from_str(&patched.content).unwrap();
        assert_eq!(
            value["extends"],
            serde_json::json!(["next/core-web-vitals", "prettier"])
        );
    }

    #[test]
    fn eslint_with_both_presets_is_untouched() {
        let source = r#"{ "extends": ["prettier", "next/core-web-vitals"] }"#;
        let patched = extend_eslint_config(source);
        assert_eq!(patched.outcome, PatchOutcome::AlreadyPresent);
        assert_eq!(patched.content, source);
    }

    #[test]
    fn eslint_without_extends_gets_presets() {
        let patched = extend_eslint_config(r#"{ "root": true }"#);
        let value: Value = serde_json::from_str(&patched.content).unwrap();
        assert_eq!(value["root"], Value::Bool(true));
        assert_eq!(value["extends"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn eslint_invalid_json_is_reported() {
        let patched = extend_eslint_config("not json");
        assert!(patched.outcome.is_missing());
        assert_eq!(patched.content, "not json");
    }
}
