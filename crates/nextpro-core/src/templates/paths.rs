//! Fixed paths, relative to the generated project root.

pub const PACKAGE_JSON: &str = "package.json";
/// Probed in this order; the first that exists is patched.
pub const NEXT_CONFIG_CANDIDATES: [&str; 3] = ["next.config.ts", "next.config.mjs", "next.config.js"];
pub const ROOT_LAYOUT: &str = "src/app/layout.tsx";
pub const ESLINT_CONFIG: &str = ".eslintrc.json";
pub const HUSKY_DIR: &str = ".husky";

pub const LIB_DIR: &str = "src/lib";
pub const DB_CLIENT: &str = "src/lib/db.ts";
pub const ENV_EXAMPLE: &str = ".env.example";
pub const ENV_MODULE: &str = "src/env.mjs";

pub const DOCKERFILE: &str = "Dockerfile";
pub const DOCKERIGNORE: &str = ".dockerignore";
pub const VERCEL_JSON: &str = "vercel.json";
pub const CI_WORKFLOW: &str = ".github/workflows/ci.yml";
pub const PRE_COMMIT_HOOK: &str = ".husky/pre-commit";
pub const COMMIT_MSG_HOOK: &str = ".husky/commit-msg";
pub const LINT_STAGED_CONFIG: &str = ".lintstagedrc.json";
pub const COMMITLINT_CONFIG: &str = "commitlint.config.js";
pub const PRETTIER_CONFIG: &str = ".prettierrc";

pub const TRPC_CONTEXT: &str = "src/server/trpc/context.ts";
pub const TRPC_INSTANCE: &str = "src/server/trpc/trpc.ts";
pub const TRPC_ROOT: &str = "src/server/trpc/root.ts";
pub const TRPC_ROUTE: &str = "src/app/api/trpc/[trpc]/route.ts";
pub const TRPC_CLIENT: &str = "src/lib/trpc.ts";

pub const SUPABASE_CLIENT: &str = "src/lib/supabase.ts";
pub const STRIPE_CLIENT: &str = "src/lib/stripe.ts";
pub const STRIPE_WEBHOOK_ROUTE: &str = "src/app/api/webhooks/stripe/route.ts";
pub const AI_CLIENT: &str = "src/lib/ai.ts";
pub const AI_CHAT_ROUTE: &str = "src/app/api/ai/chat/route.ts";

/// Every file that exists only when some integration is selected.
pub const INTEGRATION_FILES: [&str; 5] = [
    SUPABASE_CLIENT,
    STRIPE_CLIENT,
    STRIPE_WEBHOOK_ROUTE,
    AI_CLIENT,
    AI_CHAT_ROUTE,
];

pub const TRPC_PROVIDER: &str = "src/components/providers/trpc-provider.tsx";
pub const EXAMPLE_PAGE: &str = "src/app/example/page.tsx";
pub const UI_GITKEEP: &str = "src/components/ui/.gitkeep";
