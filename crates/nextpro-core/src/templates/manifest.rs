//! `package.json` enhancement and the pinned dependency table.
//!
//! The same table feeds both the manifest patch and the `yarn add`
//! invocations, so the installed set always matches what the manifest
//! declares.

use serde_json::{Map, Value, json};
use tracing::trace;

use crate::domain::{DomainError, Integration, IntegrationSet};
use crate::templates::gate_open;

/// A pinned npm package, optionally gated on an integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    pub name: &'static str,
    pub version: &'static str,
    pub when: Option<Integration>,
}

impl Package {
    const fn base(name: &'static str, version: &'static str) -> Self {
        Self {
            name,
            version,
            when: None,
        }
    }

    const fn with(integration: Integration, name: &'static str, version: &'static str) -> Self {
        Self {
            name,
            version,
            when: Some(integration),
        }
    }
}

pub const SCRIPTS: &[(&str, &str)] = &[
    ("type-check", "tsc --noEmit"),
    ("lint:fix", "next lint --fix"),
    ("format", "prettier --write ."),
    ("format:check", "prettier --check ."),
    ("prepare", "husky install"),
    ("commit", "cz"),
];

pub const DEPENDENCIES: &[Package] = &[
    Package::base("zod", "^3.23.8"),
    Package::base("@tanstack/react-query", "^5.62.11"),
    Package::base("@trpc/server", "^10.45.2"),
    Package::base("@trpc/client", "^10.45.2"),
    Package::base("@trpc/react-query", "^10.45.2"),
    Package::base("@trpc/next", "^10.45.2"),
    Package::base("superjson", "^2.2.2"),
    Package::base("framer-motion", "^11.15.0"),
    Package::with(Integration::Supabase, "@supabase/supabase-js", "^2.47.10"),
    Package::with(Integration::Stripe, "stripe", "^17.4.0"),
    Package::with(Integration::Ai, "ai", "^3.4.36"),
    Package::with(Integration::Ai, "openai", "^4.73.1"),
];

pub const DEV_DEPENDENCIES: &[Package] = &[
    Package::base("@types/node", "^22.10.5"),
    Package::base("prettier", "^3.4.2"),
    Package::base("eslint-config-prettier", "^9.1.0"),
    Package::base("husky", "^9.1.7"),
    Package::base("lint-staged", "^15.2.11"),
    Package::base("@commitlint/cli", "^19.6.0"),
    Package::base("@commitlint/config-conventional", "^19.6.0"),
    Package::base("commitizen", "^4.3.1"),
    Package::base("cz-conventional-changelog", "^3.3.0"),
];

pub const COMMITIZEN_ADAPTER: &str = "cz-conventional-changelog";

fn selected<'a>(
    table: &'a [Package],
    integrations: &'a IntegrationSet,
) -> impl Iterator<Item = &'a Package> + 'a {
    table.iter().filter(|p| gate_open(p.when, integrations))
}

/// Runtime packages passed to `yarn add`, in table order.
pub fn dependency_names(integrations: &IntegrationSet) -> Vec<&'static str> {
    selected(DEPENDENCIES, integrations).map(|p| p.name).collect()
}

/// Development packages passed to `yarn add -D`.
pub fn dev_dependency_names() -> Vec<&'static str> {
    DEV_DEPENDENCIES.iter().map(|p| p.name).collect()
}

/// Take a copy of `key` as an object, treating a missing or `null` value as
/// empty.
fn section(manifest: &Map<String, Value>, key: &str) -> Result<Map<String, Value>, DomainError> {
    match manifest.get(key) {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(_) => Err(DomainError::InvalidManifest(format!(
            "`{key}` must be a JSON object"
        ))),
    }
}

/// Merge scripts, dependencies and the commitizen config into `base`.
///
/// Existing keys keep their position; entries we manage overwrite values in
/// place and new ones are appended. `config` is replaced outright.
pub fn enhance_manifest(base: Value, integrations: &IntegrationSet) -> Result<Value, DomainError> {
    let Value::Object(mut manifest) = base else {
        return Err(DomainError::InvalidManifest(
            "package.json must contain a JSON object".into(),
        ));
    };

    let mut scripts = section(&manifest, "scripts")?;
    for (name, command) in SCRIPTS {
        scripts.insert((*name).into(), Value::from(*command));
    }

    let mut dependencies = section(&manifest, "dependencies")?;
    for package in selected(DEPENDENCIES, integrations) {
        dependencies.insert(package.name.into(), Value::from(package.version));
    }

    let mut dev_dependencies = section(&manifest, "devDependencies")?;
    for package in selected(DEV_DEPENDENCIES, integrations) {
        dev_dependencies.insert(package.name.into(), Value::from(package.version));
    }

    manifest.insert("scripts".into(), Value::Object(scripts));
    manifest.insert("dependencies".into(), Value::Object(dependencies));
    manifest.insert("devDependencies".into(), Value::Object(dev_dependencies));
    manifest.insert(
        "config".into(),
        json!({ "commitizen": { "path": COMMITIZEN_ADAPTER } }),
    );

    trace!(keys = manifest.len(), "manifest enhanced");
    Ok(Value::Object(manifest))
}

/// Serialize a manifest the way npm tooling writes it: two-space indent and
/// a trailing newline.
pub fn to_manifest_string(manifest: &Value) -> Result<String, DomainError> {
    let mut text = serde_json::to_string_pretty(manifest)
        .map_err(|e| DomainError::InvalidManifest(e.to_string()))?;
    text.push('\n');
    Ok(text)
}
