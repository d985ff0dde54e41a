//! Built-in keyword vocabularies.

/// Tags for machine learning course content and the keywords that trigger them.
pub const BUILTIN_TAGS: &[(&str, &[&str])] = &[
    (
        "optimization",
        &["optimization", "optimizer", "optimize", "optimizing", "gradient descent"],
    ),
    (
        "SGD",
        &["SGD", "stochastic gradient descent", "vanilla sgd", "gradient descent"],
    ),
    (
        "momentum",
        &["momentum", "momentum-based", "momentum sgd", "momentum optimizer"],
    ),
    (
        "implicit regularization",
        &["implicit regularization", "implicit regulariz", "implicit bias"],
    ),
    ("Adam", &["Adam", "adam optimizer", "adamw", "adaptive moment"]),
    (
        "features/representation",
        &["features", "representation", "feature learning", "representations", "feature space"],
    ),
    (
        "optimizer comparisons",
        &["optimizer comparison", "compare optimizers", "optimizer vs", "sgd vs", "adam vs", "momentum vs"],
    ),
    (
        "induced matrix norms",
        &["induced matrix norm", "matrix norm", "induced norm", "frobenius", "spectral norm"],
    ),
    (
        "μP (maximal update parameterization)",
        &["μP", "muP", "maximal update", "parameterization", "mup"],
    ),
    ("MuON", &["MuON", "muon", "second-order", "second order"]),
    (
        "CNNs",
        &["CNN", "CNNs", "convolutional", "conv net", "convolutional neural network"],
    ),
    (
        "pooling/downsampling",
        &["pooling", "downsampling", "max pool", "average pool", "downsample"],
    ),
    (
        "data augmentation",
        &["data augmentation", "augment", "augmentation", "augmented data"],
    ),
    (
        "normalization layers",
        &["normalization", "batch norm", "layer norm", "instance norm", "group norm", "normalization layer"],
    ),
    ("dropout", &["dropout", "drop out"]),
    (
        "ResNets",
        &["ResNet", "ResNets", "residual network", "residual connection", "skip connection"],
    ),
    (
        "fully convolutional networks (FCNs)",
        &["FCN", "FCNs", "fully convolutional", "fully convolutional network"],
    ),
    ("U-Nets", &["U-Net", "U-Nets", "unet", "unets", "u-net"]),
    (
        "GNNs",
        &["GNN", "GNNs", "graph neural network", "graph neural", "graph network"],
    ),
    ("DiffPool", &["DiffPool", "diffpool", "differentiable pooling"]),
    (
        "RNNs",
        &["RNN", "RNNs", "recurrent neural network", "recurrent", "lstm", "gru"],
    ),
    (
        "self-supervision",
        &["self-supervision", "self-supervised", "self supervision", "self supervised"],
    ),
    (
        "state-space models (SSMs)",
        &["SSM", "SSMs", "state space", "state-space", "state space model"],
    ),
    (
        "attention",
        &["attention", "attention mechanism", "attention layer", "self-attention", "self attention"],
    ),
    (
        "Transformers",
        &["Transformer", "Transformers", "transformer model", "transformer architecture"],
    ),
    (
        "in-context learning (ICL)",
        &["in-context learning", "ICL", "in context learning", "few-shot", "few shot"],
    ),
    ("prompting", &["prompt", "prompting", "prompts", "prompt engineering"]),
    ("PEFT", &["PEFT", "parameter efficient", "parameter-efficient"]),
    ("soft prompting", &["soft prompt", "soft prompting", "learnable prompt"]),
    ("LoRA", &["LoRA", "low-rank adaptation", "low rank"]),
    (
        "transfer learning",
        &["transfer learning", "transfer", "fine-tuning", "fine tuning", "finetuning"],
    ),
    ("meta-learning", &["meta-learning", "meta learning", "learn to learn", "maml"]),
    (
        "generative models",
        &["generative", "generation", "generative model", "VAE", "GAN", "diffusion", "autoregressive"],
    ),
    (
        "post-training",
        &["post-training", "post training", "posttrain", "alignment", "RLHF"],
    ),
];

/// Subcategories for student projects, in tie-break order.
pub const BUILTIN_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Generating Questions",
        &["quiz", "question", "practice problem", "exam prep", "test", "worksheet", "drill"],
    ),
    (
        "Learning Tools & Tutors",
        &["tutor", "chatgpt", "study mode", "learning", "teach", "explain", "socratic", "dialogue", "notebooklm", "gemini"],
    ),
    (
        "Visualizations",
        &["visualiz", "interactive", "animation", "graph", "plot", "diagram", "explorer"],
    ),
    (
        "Cheatsheets & Notes",
        &["cheatsheet", "notes", "summary", "latex", "pdf", "transcript", "lecture"],
    ),
    (
        "Understanding Concepts",
        &["understand", "intuition", "concept", "explain", "clarify", "compare", "connection"],
    ),
    (
        "New Content Creation",
        &["generated", "create", "build", "tool", "website", "app", "artifact"],
    ),
];

/// Subcategory assigned when no category keyword matches.
pub const DEFAULT_FALLBACK: &str = "Other";

/// Subcategories that are treated as unassigned and may be reclassified.
pub const DEFAULT_REPLACE: &[&str] = &["General"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tag_count() {
        assert_eq!(BUILTIN_TAGS.len(), 34);
        assert!(BUILTIN_TAGS.iter().all(|(_, kws)| !kws.is_empty()));
    }

    #[test]
    fn builtin_category_count() {
        assert_eq!(BUILTIN_CATEGORIES.len(), 6);
    }
}
