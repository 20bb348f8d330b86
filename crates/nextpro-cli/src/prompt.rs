//! Terminal implementation of the [`Prompter`] port.

use nextpro_core::{
    application::{
        ApplicationError,
        ports::{MultiSelectQuestion, Prompter, TextQuestion},
    },
    error::NextProResult,
};

/// Build the prompter for this binary.
pub fn terminal_prompter() -> Box<dyn Prompter> {
    #[cfg(feature = "interactive")]
    {
        Box::new(interactive::DialoguerPrompter::new())
    }
    #[cfg(not(feature = "interactive"))]
    {
        Box::new(Unavailable)
    }
}

#[cfg(feature = "interactive")]
mod interactive {
    use std::io;

    use dialoguer::{Input, MultiSelect, theme::ColorfulTheme};
    use tracing::debug;

    use super::*;

    pub struct DialoguerPrompter {
        theme: ColorfulTheme,
    }

    impl DialoguerPrompter {
        pub fn new() -> Self {
            Self {
                theme: ColorfulTheme::default(),
            }
        }
    }

    /// Ctrl-C while reading is a cancellation; anything else is a failure.
    fn classify<T>(result: dialoguer::Result<Option<T>>) -> NextProResult<Option<T>> {
        match result {
            Ok(answer) => Ok(answer),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
                debug!("prompt interrupted");
                Ok(None)
            }
            Err(e) => Err(ApplicationError::Prompt(e.to_string()).into()),
        }
    }

    impl Prompter for DialoguerPrompter {
        fn ask_text(
            &mut self,
            question: &TextQuestion,
            validate: &dyn Fn(&str) -> Option<&'static str>,
        ) -> NextProResult<Option<String>> {
            let answer = Input::<String>::with_theme(&self.theme)
                .with_prompt(format!("{} (e.g. {})", question.message, question.placeholder))
                .validate_with(|input: &String| match validate(input) {
                    Some(message) => Err(message),
                    None => Ok(()),
                })
                .interact_text()
                .map(Some);
            classify(answer)
        }

        fn ask_multi_select(
            &mut self,
            question: &MultiSelectQuestion,
        ) -> NextProResult<Option<Vec<usize>>> {
            let answer = MultiSelect::with_theme(&self.theme)
                .with_prompt(question.message)
                .items(&question.options)
                .interact_opt();
            classify(answer)
        }
    }
}

#[cfg(not(feature = "interactive"))]
struct Unavailable;

#[cfg(not(feature = "interactive"))]
impl Prompter for Unavailable {
    fn ask_text(
        &mut self,
        _question: &TextQuestion,
        _validate: &dyn Fn(&str) -> Option<&'static str>,
    ) -> NextProResult<Option<String>> {
        Err(ApplicationError::Prompt("built without the `interactive` feature".into()).into())
    }

    fn ask_multi_select(
        &mut self,
        _question: &MultiSelectQuestion,
    ) -> NextProResult<Option<Vec<usize>>> {
        Err(ApplicationError::Prompt("built without the `interactive` feature".into()).into())
    }
}
