//! The tRPC provider component and the example page.

use crate::domain::{Integration, IntegrationSet, ProjectStructure};
use crate::templates::{Fragment, compose, paths};

pub const TRPC_PROVIDER: &str = include_str!("../../assets/pages/trpc-provider.tsx");

/// Imports appear in the order stripe, supabase, ai regardless of how the
/// integrations were selected.
const EXAMPLE_PAGE: &[Fragment] = &[
    Fragment::always("\"use client\";\n\nimport { trpc } from \"@/lib/trpc\";\n\n"),
    Fragment::when(Integration::Stripe, "import { stripe } from \"@/lib/stripe\";\n\n"),
    Fragment::when(
        Integration::Supabase,
        "import { supabase } from \"@/lib/supabase\";\n\n",
    ),
    Fragment::when(Integration::Ai, "import { generateText } from \"@/lib/ai\";\n\n"),
    Fragment::always(include_str!("../../assets/pages/example-page-body.tsx")),
];

pub fn render_example_page(integrations: &IntegrationSet) -> String {
    compose(EXAMPLE_PAGE, integrations)
}

pub fn render_pages(integrations: &IntegrationSet) -> ProjectStructure {
    ProjectStructure::new()
        .with_file(paths::TRPC_PROVIDER, TRPC_PROVIDER)
        .with_file(paths::EXAMPLE_PAGE, render_example_page(integrations))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_page_imports_trpc_only() {
        let page = render_example_page(&IntegrationSet::empty());
        assert!(page.starts_with("\"use client\";\n\nimport { trpc } from \"@/lib/trpc\";\n\nexport default function ExamplePage() {"));
        assert!(!page.contains("@/lib/stripe"));
    }

    #[test]
    fn imports_follow_fixed_order() {
        let page = render_example_page(&IntegrationSet::from_comma_list("ai,supabase,stripe"));
        let stripe = page.find("@/lib/stripe").unwrap();
        let supabase = page.find("@/lib/supabase").unwrap();
        let ai = page.find("@/lib/ai").unwrap();
        assert!(stripe < supabase && supabase < ai);
    }

    #[test]
    fn provider_is_a_client_component() {
        assert!(TRPC_PROVIDER.starts_with("\"use client\";"));
        assert!(TRPC_PROVIDER.contains("export function TRPCProvider"));
    }
}
