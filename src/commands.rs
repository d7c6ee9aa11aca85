mod summarize;

pub use summarize::run_summarize;
