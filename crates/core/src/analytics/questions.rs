use std::collections::HashMap;

use serde::Serialize;

use crate::{Role, TranscriptMessage};

/// A user's answer, tagged with the index of the interview it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionResponse {
    pub content: String,
    pub interview_index: usize,
}

/// All answers to one distinct agent question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSummary {
    pub question: String,
    pub responses: Vec<QuestionResponse>,
    pub response_count: usize,
    pub average_response_chars: usize,
}

/// Mines transcripts for agent questions and the user turn that follows each.
///
/// A question is any agent turn containing `?`, keyed by its trimmed text so
/// repeats merge across and within transcripts. Only a `user` turn directly
/// after the question counts as a response. Questions nobody answered are
/// dropped; the rest come back most-answered first, ties in order of first
/// appearance.
pub fn extract_questions<'a, I>(transcripts: I) -> Vec<QuestionSummary>
where
    I: IntoIterator<Item = &'a [TranscriptMessage]>,
{
    let mut order: Vec<(String, Vec<QuestionResponse>)> = Vec::new();
    let mut index_of: HashMap<String, usize> = HashMap::new();

    for (interview_index, transcript) in transcripts.into_iter().enumerate() {
        for (pos, message) in transcript.iter().enumerate() {
            if message.role != Role::Agent || !message.content.contains('?') {
                continue;
            }
            let question = message.content.trim();
            let slot = match index_of.get(question) {
                Some(&slot) => slot,
                None => {
                    order.push((question.to_owned(), Vec::new()));
                    index_of.insert(question.to_owned(), order.len() - 1);
                    order.len() - 1
                },
            };

            let answer = transcript
                .get(pos + 1)
                .filter(|next| next.role == Role::User && !next.content.is_empty());
            if let Some(answer) = answer {
                order[slot]
                    .1
                    .push(QuestionResponse { content: answer.content.clone(), interview_index });
            }
        }
    }

    let mut summaries: Vec<QuestionSummary> = order
        .into_iter()
        .filter(|(_, responses)| !responses.is_empty())
        .map(|(question, responses)| summarize(question, responses))
        .collect();
    summaries.sort_by(|a, b| b.response_count.cmp(&a.response_count));
    summaries
}

fn summarize(question: String, responses: Vec<QuestionResponse>) -> QuestionSummary {
    let count = responses.len();
    let total_chars: usize = responses.iter().map(|r| r.content.chars().count()).sum();
    QuestionSummary {
        question,
        response_count: count,
        average_response_chars: (total_chars + count / 2) / count,
        responses,
    }
}
