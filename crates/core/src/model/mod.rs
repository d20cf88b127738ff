mod ids;
mod question;
mod session;
mod settings;
mod topic;

pub use ids::{QuestionId, TopicId};
pub use question::Question;
pub use session::{RoundSummary, RoundSummaryError, RoundTally};
pub use settings::{RoundSettings, RoundSettingsError};
pub use topic::{Category, Explainer, Topic, catalog, explainer_for, find_topic};
