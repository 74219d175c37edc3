use thiserror::Error;

/// Structural contract violations raised while emitting markup.
///
/// These never come from user input. They mean the renderer itself opened and
/// closed blocks or indentation levels out of order, so the render of the
/// current element is abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("unindent called at indentation depth 0")]
    NegativeIndent,

    #[error("cannot close `{expected}` block: no block is open")]
    NoOpenBlock { expected: String },

    #[error("expected to close a `{expected}` block but `{found}` block `{name}` is open")]
    BlockMismatch {
        expected: String,
        found: String,
        name: String,
    },

    #[error("output extracted with unclosed blocks: {}", open.join(", "))]
    UnclosedBlocks { open: Vec<String> },

    #[error("output extracted at indentation depth {depth}")]
    UnbalancedIndent { depth: usize },
}
