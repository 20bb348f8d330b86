//! Template renderer.
//!
//! Pure functions from an [`IntegrationSet`] to file contents. Nothing in
//! this module touches the filesystem; the enhancer writes what
//! [`render_project`] returns.
//!
//! Integration-specific content is never chosen with nested conditionals.
//! Each generated file is described by an ordered table of rules, each rule
//! optionally gated on one [`Integration`]. Rendering walks the table in
//! order and keeps the rules whose gate is satisfied, so output order is
//! fixed by the table and identical inputs always produce identical bytes.

pub mod env;
pub mod manifest;
pub mod pages;
pub mod paths;

use tracing::debug;

use crate::domain::{Integration, IntegrationSet, Permissions, ProjectStructure};

/// One piece of a generated file, optionally gated on an integration.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fragment {
    when: Option<Integration>,
    text: &'static str,
}

impl Fragment {
    pub(crate) const fn always(text: &'static str) -> Self {
        Self { when: None, text }
    }

    pub(crate) const fn when(integration: Integration, text: &'static str) -> Self {
        Self {
            when: Some(integration),
            text,
        }
    }
}

/// Concatenate every fragment whose gate is satisfied, in table order.
pub(crate) fn compose(fragments: &[Fragment], integrations: &IntegrationSet) -> String {
    fragments
        .iter()
        .filter(|f| gate_open(f.when, integrations))
        .map(|f| f.text)
        .collect()
}

pub(crate) fn gate_open(when: Option<Integration>, integrations: &IntegrationSet) -> bool {
    when.is_none_or(|i| integrations.contains(i))
}

/// A whole file whose content does not depend on the integration set.
#[derive(Debug, Clone, Copy)]
struct StaticFile {
    when: Option<Integration>,
    path: &'static str,
    content: &'static str,
    executable: bool,
}

impl StaticFile {
    const fn always(path: &'static str, content: &'static str) -> Self {
        Self {
            when: None,
            path,
            content,
            executable: false,
        }
    }

    const fn hook(path: &'static str, content: &'static str) -> Self {
        Self {
            when: None,
            path,
            content,
            executable: true,
        }
    }

    const fn when(integration: Integration, path: &'static str, content: &'static str) -> Self {
        Self {
            when: Some(integration),
            path,
            content,
            executable: false,
        }
    }
}

pub const DOCKERFILE: &str = include_str!("../../assets/infra/Dockerfile");
pub const DOCKERIGNORE: &str = include_str!("../../assets/infra/dockerignore");
pub const VERCEL_JSON: &str = include_str!("../../assets/infra/vercel.json");
pub const CI_WORKFLOW: &str = include_str!("../../assets/infra/ci.yml");
pub const LINT_STAGED_CONFIG: &str = include_str!("../../assets/infra/lintstagedrc.json");
pub const COMMITLINT_CONFIG: &str = include_str!("../../assets/infra/commitlint.config.js");
pub const PRE_COMMIT_HOOK: &str = "yarn lint-staged\n";
pub const COMMIT_MSG_HOOK: &str = "yarn commitlint --edit $1\n";
pub const PRETTIER_CONFIG: &str = "{\n  \"semi\": true,\n  \"trailingComma\": \"es5\",\n  \"singleQuote\": false,\n  \"printWidth\": 80,\n  \"tabWidth\": 2,\n  \"useTabs\": false\n}";

/// Files written before the tRPC and integration wiring.
const INFRA_FILES: &[StaticFile] = &[
    StaticFile::always(paths::DB_CLIENT, include_str!("../../assets/infra/db.ts")),
];

const TOOLING_FILES: &[StaticFile] = &[
    StaticFile::always(paths::DOCKERFILE, DOCKERFILE),
    StaticFile::always(paths::DOCKERIGNORE, DOCKERIGNORE),
    StaticFile::always(paths::VERCEL_JSON, VERCEL_JSON),
    StaticFile::always(paths::CI_WORKFLOW, CI_WORKFLOW),
    StaticFile::hook(paths::PRE_COMMIT_HOOK, PRE_COMMIT_HOOK),
    StaticFile::hook(paths::COMMIT_MSG_HOOK, COMMIT_MSG_HOOK),
    StaticFile::always(paths::LINT_STAGED_CONFIG, LINT_STAGED_CONFIG),
    StaticFile::always(paths::COMMITLINT_CONFIG, COMMITLINT_CONFIG),
];

/// tRPC is part of the base stack; integrations follow in the order
/// supabase, stripe, ai.
const WIRING_FILES: &[StaticFile] = &[
    StaticFile::always(paths::TRPC_CONTEXT, include_str!("../../assets/trpc/context.ts")),
    StaticFile::always(paths::TRPC_INSTANCE, include_str!("../../assets/trpc/trpc.ts")),
    StaticFile::always(paths::TRPC_ROOT, include_str!("../../assets/trpc/root.ts")),
    StaticFile::always(paths::TRPC_ROUTE, include_str!("../../assets/trpc/route.ts")),
    StaticFile::always(paths::TRPC_CLIENT, include_str!("../../assets/trpc/client.ts")),
    StaticFile::when(
        Integration::Supabase,
        paths::SUPABASE_CLIENT,
        include_str!("../../assets/supabase/supabase.ts"),
    ),
    StaticFile::when(
        Integration::Stripe,
        paths::STRIPE_CLIENT,
        include_str!("../../assets/stripe/stripe.ts"),
    ),
    StaticFile::when(
        Integration::Stripe,
        paths::STRIPE_WEBHOOK_ROUTE,
        include_str!("../../assets/stripe/webhook-route.ts"),
    ),
    StaticFile::when(Integration::Ai, paths::AI_CLIENT, include_str!("../../assets/ai/ai.ts")),
    StaticFile::when(
        Integration::Ai,
        paths::AI_CHAT_ROUTE,
        include_str!("../../assets/ai/chat-route.ts"),
    ),
];

fn add_static(structure: &mut ProjectStructure, files: &[StaticFile], integrations: &IntegrationSet) {
    for file in files.iter().filter(|f| gate_open(f.when, integrations)) {
        let perms = if file.executable {
            Permissions::executable()
        } else {
            Permissions::read_write()
        };
        structure.add_file(file.path, file.content, perms);
    }
}

/// Render every file the enhancer overwrites, in write order.
///
/// Patched files (`package.json`, `next.config.*`, the root layout and
/// `.eslintrc.json`) are not part of the output; see `crate::domain::patch`
/// and [`manifest`].
pub fn render_project(integrations: &IntegrationSet) -> ProjectStructure {
    let mut structure = ProjectStructure::new().with_directory(paths::LIB_DIR);

    add_static(&mut structure, INFRA_FILES, integrations);
    structure.add_file(
        paths::ENV_EXAMPLE,
        env::render_env_example(integrations),
        Permissions::read_write(),
    );
    structure.add_file(
        paths::ENV_MODULE,
        env::render_env_module(integrations),
        Permissions::read_write(),
    );
    add_static(&mut structure, TOOLING_FILES, integrations);
    add_static(&mut structure, WIRING_FILES, integrations);

    let structure = structure
        .merge(pages::render_pages(integrations))
        .with_file(paths::PRETTIER_CONFIG, PRETTIER_CONFIG)
        .with_file(paths::UI_GITKEEP, "");

    debug!(
        integrations = %integrations,
        entries = structure.entry_count(),
        "project templates rendered"
    );
    structure
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainValidator;

    fn set(list: &str) -> IntegrationSet {
        IntegrationSet::from_comma_list(list)
    }

    #[test]
    fn rendered_structure_is_valid_for_every_subset() {
        for list in ["", "stripe", "supabase", "ai", "stripe,ai", "stripe,supabase,ai"] {
            let structure = render_project(&set(list));
            assert!(
                DomainValidator::validate_project_structure(&structure).is_ok(),
                "invalid structure for {list:?}"
            );
        }
    }

    #[test]
    fn stripe_and_ai_selection_writes_only_their_files() {
        let structure = render_project(&set("stripe,ai"));

        assert!(structure.file(paths::STRIPE_CLIENT).is_some());
        assert!(structure.file(paths::STRIPE_WEBHOOK_ROUTE).is_some());
        assert!(structure.file(paths::AI_CLIENT).is_some());
        assert!(structure.file(paths::AI_CHAT_ROUTE).is_some());
        assert!(structure.file(paths::SUPABASE_CLIENT).is_none());
    }

    #[test]
    fn empty_selection_writes_no_integration_files() {
        let structure = render_project(&IntegrationSet::empty());
        for path in paths::INTEGRATION_FILES {
            assert!(structure.file(path).is_none(), "unexpected {path}");
        }
        assert!(structure.file(paths::TRPC_ROUTE).is_some());
        assert!(structure.file(paths::EXAMPLE_PAGE).is_some());
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = render_project(&set("ai,supabase"));
        let b = render_project(&set("supabase,ai"));
        assert_eq!(a, b);
    }

    #[test]
    fn hooks_are_executable() {
        let structure = render_project(&IntegrationSet::empty());
        for hook in [paths::PRE_COMMIT_HOOK, paths::COMMIT_MSG_HOOK] {
            assert!(structure.file(hook).unwrap().permissions.executable_flag());
        }
        assert!(
            !structure
                .file(paths::DOCKERFILE)
                .unwrap()
                .permissions
                .executable_flag()
        );
    }

    #[test]
    fn static_files_match_expected_content() {
        let structure = render_project(&IntegrationSet::empty());
        assert_eq!(structure.file(paths::PRE_COMMIT_HOOK).unwrap().content, "yarn lint-staged\n");
        assert!(structure.file(paths::UI_GITKEEP).unwrap().is_empty());
        assert!(
            structure
                .file(paths::DOCKERFILE)
                .unwrap()
                .content
                .starts_with("FROM node:20-alpine AS base\n")
        );
        assert!(!PRETTIER_CONFIG.ends_with('\n'));
    }

    #[test]
    fn compose_respects_table_order_not_selection_order() {
        const TABLE: &[Fragment] = &[
            Fragment::always("a"),
            Fragment::when(Integration::Ai, "b"),
            Fragment::when(Integration::Stripe, "c"),
        ];
        assert_eq!(compose(TABLE, &set("stripe,ai")), "abc");
        assert_eq!(compose(TABLE, &set("stripe")), "ac");
        assert_eq!(compose(TABLE, &IntegrationSet::empty()), "a");
    }
}
