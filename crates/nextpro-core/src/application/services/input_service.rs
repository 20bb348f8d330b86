//! Input collection: flags first, prompts for whatever is missing.

use tracing::{debug, info, warn};

use crate::application::{
    ApplicationError,
    ports::{MultiSelectQuestion, Prompter, TextQuestion},
};
use crate::domain::{Integration, IntegrationSet, ProjectName, RunConfig};
use crate::error::NextProResult;

pub const NAME_QUESTION: TextQuestion = TextQuestion {
    message: "What is your project named?",
    placeholder: "my-app",
};

pub const INTEGRATIONS_MESSAGE: &str = "Which integrations would you like to include?";

/// Raw command-line values before any prompting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub name: Option<String>,
    pub with: Option<String>,
    pub minimal: bool,
}

pub struct InputService;

impl InputService {
    /// Resolve a [`RunConfig`], prompting for anything not given as a flag.
    ///
    /// A positional name is taken verbatim. Integration precedence is
    /// `--minimal`, then `--with`, then the interactive multi-select.
    pub fn collect(raw: RawInput, prompter: &mut dyn Prompter) -> NextProResult<RunConfig> {
        let name = match raw.name {
            Some(name) => ProjectName::unchecked(name),
            None => Self::ask_name(prompter)?,
        };

        if raw.minimal {
            if raw.with.is_some() {
                debug!("--minimal given; ignoring --with");
            }
            info!(project = %name, "minimal setup");
            return Ok(RunConfig::minimal(name));
        }

        let integrations = match raw.with {
            Some(list) => IntegrationSet::from_comma_list(&list),
            None => Self::ask_integrations(prompter)?,
        };

        if !integrations.unrecognized().is_empty() {
            warn!(
                ignored = ?integrations.unrecognized(),
                "unknown integrations ignored; known: stripe, supabase, ai"
            );
        }

        info!(project = %name, integrations = %integrations, "input collected");
        Ok(RunConfig::new(name, integrations))
    }

    fn ask_name(prompter: &mut dyn Prompter) -> NextProResult<ProjectName> {
        loop {
            let answer = prompter
                .ask_text(&NAME_QUESTION, &ProjectName::validation_message)?
                .ok_or(ApplicationError::Cancelled)?;

            match ProjectName::parse(&answer) {
                Ok(name) => return Ok(name),
                Err(e) => debug!(error = %e, "prompter returned an invalid name; asking again"),
            }
        }
    }

    fn ask_integrations(prompter: &mut dyn Prompter) -> NextProResult<IntegrationSet> {
        let question = MultiSelectQuestion {
            message: INTEGRATIONS_MESSAGE,
            options: Integration::ALL.iter().map(Integration::label).collect(),
        };

        let selected = prompter
            .ask_multi_select(&question)?
            .ok_or(ApplicationError::Cancelled)?;

        Ok(selected
            .into_iter()
            .filter_map(|i| Integration::ALL.get(i).copied())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Replays canned answers; `None` cancels.
    #[derive(Default)]
    struct Scripted {
        texts: VecDeque<Option<String>>,
        selections: VecDeque<Option<Vec<usize>>>,
        rejected: Vec<&'static str>,
        text_calls: usize,
        select_calls: usize,
    }

    impl Prompter for Scripted {
        fn ask_text(
            &mut self,
            question: &TextQuestion,
            validate: &dyn Fn(&str) -> Option<&'static str>,
        ) -> NextProResult<Option<String>> {
            assert_eq!(question.placeholder, "my-app");
            self.text_calls += 1;
            // Play the role of a terminal that keeps asking until valid.
            while let Some(answer) = self.texts.pop_front() {
                match answer {
                    None => return Ok(None),
                    Some(text) => match validate(&text) {
                        Some(msg) => self.rejected.push(msg),
                        None => return Ok(Some(text)),
                    },
                }
            }
            panic!("ran out of text answers");
        }

        fn ask_multi_select(
            &mut self,
            question: &MultiSelectQuestion,
        ) -> NextProResult<Option<Vec<usize>>> {
            assert_eq!(question.options.len(), 3);
            self.select_calls += 1;
            Ok(self.selections.pop_front().expect("ran out of selections"))
        }
    }

    fn raw(name: Option<&str>, with: Option<&str>, minimal: bool) -> RawInput {
        RawInput {
            name: name.map(String::from),
            with: with.map(String::from),
            minimal,
        }
    }

    #[test]
    fn flags_skip_all_prompts() {
        let mut prompter = Scripted::default();
        let config = InputService::collect(raw(Some("my-app"), Some("stripe,ai"), false), &mut prompter)
            .unwrap();

        assert_eq!(config.name().as_str(), "my-app");
        assert!(config.integrations().contains(Integration::Stripe));
        assert!(config.integrations().contains(Integration::Ai));
        assert!(!config.integrations().contains(Integration::Supabase));
        assert_eq!(prompter.text_calls + prompter.select_calls, 0);
    }

    #[test]
    fn positional_name_is_not_validated() {
        let mut prompter = Scripted::default();
        let config =
            InputService::collect(raw(Some("My_App!"), None, true), &mut prompter).unwrap();
        assert_eq!(config.name().as_str(), "My_App!");
    }

    #[test]
    fn minimal_wins_over_with() {
        let mut prompter = Scripted::default();
        let config =
            InputService::collect(raw(Some("app"), Some("stripe"), true), &mut prompter).unwrap();
        assert!(config.is_minimal());
        assert!(config.integrations().is_empty());
    }

    #[test]
    fn interactive_name_rejects_invalid_then_accepts() {
        let mut prompter = Scripted {
            texts: VecDeque::from([Some("My_App!".into()), Some(String::new()), Some("my-app".into())]),
            selections: VecDeque::from([Some(vec![])]),
            ..Default::default()
        };

        let config = InputService::collect(RawInput::default(), &mut prompter).unwrap();

        assert_eq!(config.name().as_str(), "my-app");
        assert_eq!(prompter.rejected.len(), 2);
        assert!(prompter.rejected[0].contains("lowercase"));
        assert_eq!(prompter.rejected[1], "Project name is required");
        assert!(config.integrations().is_empty());
    }

    #[test]
    fn multi_select_maps_indices_in_fixed_order() {
        let mut prompter = Scripted {
            selections: VecDeque::from([Some(vec![2, 0])]),
            ..Default::default()
        };
        let config = InputService::collect(raw(Some("app"), None, false), &mut prompter).unwrap();
        let order: Vec<_> = config.integrations().iter().collect();
        assert_eq!(order, vec![Integration::Stripe, Integration::Ai]);
    }

    #[test]
    fn cancelling_name_prompt_cancels_run() {
        let mut prompter = Scripted {
            texts: VecDeque::from([None]),
            ..Default::default()
        };
        let err = InputService::collect(RawInput::default(), &mut prompter).unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn cancelling_multi_select_cancels_run() {
        let mut prompter = Scripted {
            selections: VecDeque::from([None]),
            ..Default::default()
        };
        let err = InputService::collect(raw(Some("app"), None, false), &mut prompter).unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn unknown_with_entries_are_not_fatal() {
        let mut prompter = Scripted::default();
        let config =
            InputService::collect(raw(Some("app"), Some("redis, stripe"), false), &mut prompter)
                .unwrap();
        assert_eq!(config.integrations().len(), 1);
        assert_eq!(config.integrations().unrecognized(), ["redis".to_string()]);
    }
}
