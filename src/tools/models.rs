//! Read-only model catalog served by `GET /models`.
//!
//! Loaded once at startup (built-in or from `[catalog]` in the config) and
//! shared immutably afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One model in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Identifier callers pass as `model`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Publisher.
    pub provider: String,
    /// Architecture family.
    #[serde(rename = "type")]
    pub kind: String,
    /// Capability tags.
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Parameter count, human readable.
    pub parameters: String,
    /// Availability.
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "available".to_owned()
}

/// Models plus capability groupings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCatalog {
    /// All models.
    pub models: Vec<ModelDescriptor>,
    /// Capability group name → model ids.
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<String>>,
}

/// Body returned by `GET /models`.
#[derive(Debug, Clone, Serialize)]
pub struct ModelsResponse<'a> {
    /// All models.
    pub models: &'a [ModelDescriptor],
    /// Number of models.
    pub total: usize,
    /// Capability group name → model ids.
    pub categories: &'a BTreeMap<String, Vec<String>>,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn model(
    id: &str,
    name: &str,
    provider: &str,
    kind: &str,
    capabilities: &[&str],
    parameters: &str,
) -> ModelDescriptor {
    ModelDescriptor {
        id: id.to_owned(),
        name: name.to_owned(),
        provider: provider.to_owned(),
        kind: kind.to_owned(),
        capabilities: capabilities.iter().map(|c| (*c).to_owned()).collect(),
        parameters: parameters.to_owned(),
        status: default_status(),
    }
}

fn group(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| (*id).to_owned()).collect()
}

impl ModelCatalog {
    /// The built-in catalog of open models.
    pub fn builtin() -> Self {
        let models = vec![
            model(
                "mixtral-8x7b",
                "Mixtral 8x7B",
                "Mistral AI",
                "Mixture of Experts",
                &["text-generation", "code", "reasoning"],
                "46.7B",
            ),
            model(
                "llama-2-70b",
                "Llama 2 70B",
                "Meta",
                "Transformer",
                &["text-generation", "chat", "reasoning"],
                "70B",
            ),
            model(
                "mistral-7b",
                "Mistral 7B",
                "Mistral AI",
                "Transformer",
                &["text-generation", "code", "fast-inference"],
                "7.3B",
            ),
            model(
                "codellama",
                "Code Llama",
                "Meta",
                "Code-Specialized",
                &["code-generation", "code-completion", "debugging"],
                "34B",
            ),
            model(
                "falcon-180b",
                "Falcon 180B",
                "TII",
                "Transformer",
                &["text-generation", "reasoning", "multilingual"],
                "180B",
            ),
            model(
                "stablelm",
                "StableLM",
                "Stability AI",
                "Transformer",
                &["text-generation", "chat"],
                "7B",
            ),
            model(
                "vicuna",
                "Vicuna 13B",
                "LMSYS",
                "Fine-tuned",
                &["chat", "instruction-following"],
                "13B",
            ),
            model(
                "gpt4all",
                "GPT4All",
                "Nomic AI",
                "Edge-Optimized",
                &["chat", "local-inference"],
                "7B",
            ),
        ];

        let categories = BTreeMap::from([
            (
                "Code Generation".to_owned(),
                group(&["codellama", "mixtral-8x7b"]),
            ),
            (
                "General Purpose".to_owned(),
                group(&["llama-2-70b", "falcon-180b", "mixtral-8x7b"]),
            ),
            (
                "Fast Inference".to_owned(),
                group(&["mistral-7b", "stablelm", "gpt4all"]),
            ),
            (
                "Chat Optimized".to_owned(),
                group(&["vicuna", "llama-2-70b"]),
            ),
        ]);

        Self { models, categories }
    }

    /// Returns `true` if a model with `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.models.iter().any(|m| m.id == id)
    }

    /// Category entries naming a model that is not in the catalog, as
    /// `(category, id)` pairs.
    pub fn dangling_references(&self) -> Vec<(String, String)> {
        self.categories
            .iter()
            .flat_map(|(category, ids)| {
                ids.iter()
                    .filter(|id| !self.contains(id))
                    .map(move |id| (category.clone(), id.clone()))
            })
            .collect()
    }

    /// Response body for `GET /models`.
    pub fn response(&self) -> ModelsResponse<'_> {
        ModelsResponse {
            models: &self.models,
            total: self.models.len(),
            categories: &self.categories,
        }
    }
}
