//! Id generation for parser-produced elements.
//!
//! Ids are synthetic and only have to be unique within one document; the
//! strategy is injected into the parser so tests get deterministic output
//! and embedders can substitute their own scheme.

/// Supplies fresh ids for elements and menu choices.
pub trait IdGen {
    fn element_id(&mut self) -> String;
    fn choice_id(&mut self) -> String;
}

/// Monotonic-counter generator producing `element-<n>` / `choice-<n>` in
/// emission order. This is the parser's default.
#[derive(Debug, Default)]
pub struct SequentialIds {
    elements: usize,
    choices: usize,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGen for SequentialIds {
    fn element_id(&mut self) -> String {
        let id = format!("element-{}", self.elements);
        self.elements += 1;
        id
    }

    fn choice_id(&mut self) -> String {
        let id = format!("choice-{}", self.choices);
        self.choices += 1;
        id
    }
}
