//! File operation backend (simulated).

use async_trait::async_trait;

use crate::agent::envelope::EnvelopeBuilder;
use crate::types::Category;

use super::{Backend, BackendError, BackendRequest};

/// Simulated file system backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileBackend;

#[async_trait]
impl Backend for FileBackend {
    fn category(&self) -> Category {
        Category::File
    }

    async fn execute(&self, request: &BackendRequest) -> Result<EnvelopeBuilder, BackendError> {
        let action = &request.action;

        let execution = format!(
            "File System Operation:\n\
             1. Path resolved\n\
             2. Permissions verified\n\
             3. Operation: {action}\n\
             4. File(s) processed\n\
             5. Integrity check: Passed\n\
             6. Backup created\n\
             \n\
             Status: Success"
        );

        let response = format!(
            "✓ File operation completed!\n\n\
             Action: {action}\n\n\
             File system operations include:\n\
             - Read/write files\n\
             - Directory operations\n\
             - File search and filtering\n\
             - Backup and versioning"
        );

        Ok(EnvelopeBuilder::new()
            .completed("File operation", "Operation successful")
            .execution(execution)
            .response(response))
    }
}
