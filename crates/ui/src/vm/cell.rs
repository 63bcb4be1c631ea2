use crate::vm::StepRowVm;

/// What a row in the step list needs to look like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    Step,
    /// Last row of its section; drawn without a bottom separator.
    SectionEnd,
}

/// Builds presentation cells for step rows.
///
/// The list asks the factory for a cell of a given kind instead of
/// downcasting reused cells.
pub trait CellFactory {
    type Cell;

    fn make_cell(&self, kind: RowKind, row: &StepRowVm) -> Self::Cell;
}
