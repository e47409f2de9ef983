use std::fmt;

pub const MISSING_KEY_NOTICE: &str = "### Perplexity API Key Missing\n\
Please set your `PERPLEXITY_API_KEY` in the `.env` file to enable the AI.";

pub const AI_ERROR_HEADING: &str = "### AI Error";

/// Outcome of one gateway call, before it is rendered for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// No usable API key; the provider was not contacted.
    Unconfigured,
    /// First choice text returned by the provider, untouched.
    Completed(String),
    /// The provider call failed; holds the failure description.
    Failed(String),
}

impl Answer {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Collapse to the text sent back in the `response` field.
    pub fn into_text(self) -> String {
        match self {
            Self::Completed(text) => text,
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unconfigured => f.write_str(MISSING_KEY_NOTICE),
            Self::Completed(text) => f.write_str(text),
            Self::Failed(reason) => write!(
                f,
                "{AI_ERROR_HEADING}\nAn error occurred while contacting the AI: {reason}"
            ),
        }
    }
}
