//! Code generation backend (simulated).

use async_trait::async_trait;

use crate::agent::envelope::EnvelopeBuilder;
use crate::types::Category;

use super::{Backend, BackendError, BackendRequest};

/// Example program attached to every simulated generation.
const SAMPLE_SNIPPET: &str = r#"```python
import asyncio
import aiohttp

async def automate_task():
    """AI-generated automation function"""
    async with aiohttp.ClientSession() as session:
        async with session.get('https://api.example.com') as response:
            data = await response.json()
            return data

if __name__ == "__main__":
    result = asyncio.run(automate_task())
    print(result)
```"#;

/// Simulated code generation backend. Echoes the requested model.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeBackend;

#[async_trait]
impl Backend for CodeBackend {
    fn category(&self) -> Category {
        Category::Code
    }

    async fn execute(&self, request: &BackendRequest) -> Result<EnvelopeBuilder, BackendError> {
        let BackendRequest { action, model, .. } = request;

        let execution = format!(
            "Code Generation Process:\n\
             1. Model: {model}\n\
             2. Task: {action}\n\
             3. Language detection: Auto\n\
             4. Code generated successfully\n\
             5. Syntax validation: Passed\n\
             6. Best practices applied\n\
             \n\
             Generated code ready for use."
        );

        let response = format!(
            "✓ Code generation completed!\n\n\
             Using model: {model}\n\n\
             Generated code for: {action}\n\n\
             Example output:\n\
             {SAMPLE_SNIPPET}"
        );

        Ok(EnvelopeBuilder::new()
            .completed(format!("Generate code using {model}"), "Code generated")
            .execution(execution)
            .response(response))
    }
}
