pub mod catalog;
pub mod domain;
pub mod report;

mod dataset;
mod filter;
mod rate;
mod selections;
mod tally;

pub use catalog::{AttributeAxis, QuestionCatalog};
pub use dataset::SurveyDataset;
pub use filter::{MatchRule, Subgroup, SubgroupFilter};
pub use rate::Rate;
pub use selections::split_selections;
pub use tally::{Tally, TallyEntry};
