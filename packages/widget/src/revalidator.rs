use blockgate_common::AttributeTree;
use blockgate_editor::StoreObserver;
use blockgate_gate::SaveGate;
use blockgate_validator::{ValidationEngine, ValidationReport};
use tracing::debug;

/// Store observer that revalidates every new tree and feeds the save gate
#[derive(Debug)]
pub struct Revalidator {
    engine: ValidationEngine,
    report: ValidationReport,
    gate: SaveGate,
}

impl Revalidator {
    pub fn new(engine: ValidationEngine, gate: SaveGate) -> Self {
        Self {
            engine,
            report: ValidationReport::default(),
            gate,
        }
    }

    /// Report for the tree the store currently holds
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn engine(&self) -> &ValidationEngine {
        &self.engine
    }

    pub fn gate(&self) -> &SaveGate {
        &self.gate
    }

    pub fn into_gate(self) -> SaveGate {
        self.gate
    }
}

impl StoreObserver for Revalidator {
    fn tree_replaced(&mut self, tree: &AttributeTree, version: u64) {
        self.report = self.engine.run(tree);
        let transition = self.gate.observe(self.report.is_valid());
        debug!(
            widget = %self.engine.schema().name,
            version,
            errors = self.report.len(),
            ?transition,
            "widget revalidated"
        );
    }
}
