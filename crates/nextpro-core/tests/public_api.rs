//! Cross-module checks through the crate's public API.

use nextpro_core::prelude::*;
use nextpro_core::templates::{self, env, manifest, paths};

fn subsets() -> Vec<IntegrationSet> {
    ["", "stripe", "supabase", "ai", "stripe,ai", "stripe,supabase,ai"]
        .iter()
        .map(|list| IntegrationSet::from_comma_list(list))
        .collect()
}

#[test]
fn generated_env_example_passes_generated_schema() {
    for set in subsets() {
        let structure = templates::render_project(&set);
        let example = structure
            .file(paths::ENV_EXAMPLE)
            .expect(".env.example is always written");

        let values = env::parse_env_file(&example.content).unwrap();
        let schema = env::EnvSchema::for_integrations(&set);
        assert_eq!(schema.validate(&values), Ok(()), "integrations: {set}");
    }
}

#[test]
fn dropping_a_required_integration_key_is_reported() {
    let set = IntegrationSet::from_comma_list("supabase");
    let structure = templates::render_project(&set);
    let example = structure.file(paths::ENV_EXAMPLE).unwrap();

    let mut values = env::parse_env_file(&example.content).unwrap();
    values.remove("NEXT_PUBLIC_SUPABASE_URL");

    let violations = env::EnvSchema::for_integrations(&set)
        .validate(&values)
        .unwrap_err();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].key, "NEXT_PUBLIC_SUPABASE_URL");
}

#[test]
fn manifest_dependencies_track_the_selection() {
    let base: serde_json::Value =
        serde_json::from_str(r#"{ "name": "my-app", "dependencies": { "next": "15.1.3" } }"#).unwrap();

    for set in subsets() {
        let enhanced = manifest::enhance_manifest(base.clone(), &set).unwrap();
        let deps = enhanced["dependencies"].as_object().unwrap();

        assert!(deps.contains_key("next"));
        assert!(deps.contains_key("zod"));
        assert_eq!(deps.contains_key("stripe"), set.contains(Integration::Stripe));
        assert_eq!(
            deps.contains_key("@supabase/supabase-js"),
            set.contains(Integration::Supabase)
        );
        assert_eq!(deps.contains_key("openai"), set.contains(Integration::Ai));
    }
}

#[test]
fn interactive_name_rules() {
    assert!(ProjectName::parse("my-app").is_ok());
    let err = ProjectName::parse("My_App!").unwrap_err();
    assert!(err.to_string().contains("lowercase"));
    assert_eq!(ProjectName::unchecked("My_App!").as_str(), "My_App!");
}
