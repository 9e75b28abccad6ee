//! Draft generation: validate input, assemble the request, call the model.

use crate::domain::{AppError, Preamble, SessionInput, assemble};
use crate::ports::CompletionClient;

/// Produce a draft progress note for `input`.
///
/// Incomplete input is refused before the client is called. Client failures
/// are returned unchanged; nothing is retried.
pub fn execute<C: CompletionClient + ?Sized>(
    client: &C,
    preamble: &Preamble,
    input: &SessionInput,
) -> Result<String, AppError> {
    input.validate()?;

    let request = assemble(preamble, input.notes.trim());
    tracing::debug!(chars = request.len(), "assembled completion request");

    let draft = client.complete(&request)?;
    tracing::info!(chars = draft.len(), "received draft");
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Section, SessionMetadata, parse_sections};
    use crate::testing::FakeCompletionClient;

    const MODEL_OUTPUT: &str = "Presenting Problem(s):\nAnxiety.\nAssessment:\nGAD likely.\nIntervention:\nCBT.\nPlan:\nFollow up in 2 weeks.";

    fn input(notes: &str) -> SessionInput {
        SessionInput {
            metadata: SessionMetadata {
                client_name: "Jane Doe".into(),
                session_count: "3".into(),
                day: "01".into(),
                month: "JAN".into(),
                year: "2025".into(),
                hour: "10".into(),
                minute: "30".into(),
                am_pm: "AM".into(),
            },
            notes: notes.into(),
        }
    }

    #[test]
    fn sends_preamble_and_stripped_notes() {
        let client = FakeCompletionClient::responding(MODEL_OUTPUT);
        let preamble = Preamble::default();

        execute(&client, &preamble, &input("  Client discussed anxiety.\n")).unwrap();

        assert_eq!(client.recorded_prompts(), vec![format!(
            "{}\nClient discussed anxiety.",
            preamble.as_str()
        )]);
    }

    #[test]
    fn default_preamble_end_to_end_sections() {
        let client = FakeCompletionClient::responding(MODEL_OUTPUT);

        let draft = execute(&client, &Preamble::default(), &input("Client discussed anxiety."))
            .unwrap();
        let sections = parse_sections(&draft);

        assert_eq!(sections.get(Section::PresentingProblems), Some("Anxiety. "));
        assert_eq!(sections.get(Section::Assessment), Some("GAD likely. "));
        assert_eq!(sections.get(Section::Intervention), Some("CBT. "));
        assert_eq!(sections.get(Section::Plan), Some("Follow up in 2 weeks. "));
    }

    #[test]
    fn incomplete_input_never_reaches_the_client() {
        let client = FakeCompletionClient::responding(MODEL_OUTPUT);

        let err = execute(&client, &Preamble::default(), &input("   ")).unwrap_err();

        assert!(matches!(err, AppError::IncompleteInput(_)));
        assert!(client.recorded_prompts().is_empty());
    }

    #[test]
    fn client_failure_is_returned_once() {
        let client = FakeCompletionClient::failing("insufficient_quota");

        let err = execute(&client, &Preamble::default(), &input("notes")).unwrap_err();

        assert_eq!(err.to_string(), "Something went wrong: insufficient_quota");
        assert_eq!(client.recorded_prompts().len(), 1);
    }
}
