//! Models offered by the builder's model picker

/// An entry of the model picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelOption {
    /// Identifier passed as the `model` argument
    pub id: &'static str,
    /// Display name shown in the picker
    pub name: &'static str,
}

pub const MODELS: &[ModelOption] = &[
    ModelOption {
        id: "gpt-4o",
        name: "GPT-4o",
    },
    ModelOption {
        id: "gpt-4-turbo",
        name: "GPT-4 Turbo",
    },
    ModelOption {
        id: "claude-3-opus",
        name: "Claude 3 Opus",
    },
    ModelOption {
        id: "claude-3-sonnet",
        name: "Claude 3 Sonnet",
    },
    ModelOption {
        id: "gemini-1.5-pro",
        name: "Gemini 1.5 Pro",
    },
];

/// Look up a model by id
pub fn find_model(id: &str) -> Option<&'static ModelOption> {
    MODELS.iter().find(|m| m.id == id)
}
