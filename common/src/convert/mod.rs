use crate::{error::Result, files::FileRef, state::ExecutionContext};

mod create_pdf;
pub use create_pdf::*;

/// One unit of remote work with a single input and a single output.
#[async_trait::async_trait]
pub trait IOperation: Send + Sync {
    fn name(&self) -> &'static str;
    async fn execute(&self, context: &ExecutionContext) -> Result<FileRef>;
}
