//! Prompt assembly for the finance Q&A pass.
//!
//! The provider is constrained to answer only from the supplied figures;
//! the instruction block below is part of the product behavior, not
//! decoration, and is covered by tests.

use std::fmt::Write as _;

/// System message sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You are a helpful finance assistant.";

/// Ordered, display-formatted financial figures.
///
/// Values arrive pre-formatted (currency symbols and all) because the
/// summary is shown to the user verbatim and embedded in the prompt in the
/// same form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinancialSummary {
    entries: Vec<(String, String)>,
}

impl FinancialSummary {
    pub fn push(
        &mut self,
        label: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.entries.push((label.into(), value.into()));
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// The `label: value` block embedded in the prompt.
    pub fn context_block(&self) -> String {
        let mut block = String::new();
        for (index, (label, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                block.push('\n');
            }
            let _ = write!(block, "{label}: {value}");
        }
        block
    }
}

/// Builds the user prompt embedding the financial data and the question.
pub fn build_user_prompt(
    query: &str,
    summary: &FinancialSummary,
) -> String {
    format!(
        "You are a financial assistant. Use the following user's financial data to answer their questions.\n\
         \n\
         Financial Data:\n\
         {context}\n\
         \n\
         Question: {query}\n\
         \n\
         Instructions:\n\
         1. Base answers ONLY on the user's financial data.\n\
         2. Give practical, simple suggestions.\n\
         3. If the data is insufficient, say so clearly.",
        context = summary.context_block(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_summary() -> FinancialSummary {
        let mut summary = FinancialSummary::default();
        summary.push("Monthly Income", "₹100000.00");
        summary.push("Net Savings", "₹21333.33");
        summary
    }

    #[test]
    fn context_block_joins_entries_in_order() {
        let summary = sample_summary();

        assert_eq!(
            summary.context_block(),
            "Monthly Income: ₹100000.00\nNet Savings: ₹21333.33"
        );
    }

    #[test]
    fn context_block_of_empty_summary_is_empty() {
        let summary = FinancialSummary::default();

        assert_eq!(summary.context_block(), "");
    }

    #[test]
    fn user_prompt_embeds_data_question_and_instructions() {
        let prompt = build_user_prompt("How much should I invest?", &sample_summary());

        assert!(prompt.contains("Financial Data:\nMonthly Income: ₹100000.00"));
        assert!(prompt.contains("Question: How much should I invest?"));
        assert!(prompt.contains("1. Base answers ONLY on the user's financial data."));
        assert!(prompt.contains("3. If the data is insufficient, say so clearly."));
    }
}
