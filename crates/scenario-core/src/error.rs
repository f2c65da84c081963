use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
}
