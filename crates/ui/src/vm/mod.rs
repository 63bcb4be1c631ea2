mod cell;
mod distance_fmt;
mod road_vm;
mod step_list_vm;
mod step_row_vm;

pub use cell::{CellFactory, RowKind};
pub use distance_fmt::format_distance;
pub use road_vm::{CurrentRoadVm, ShieldBadgeVm, map_current_road};
pub use step_list_vm::{
    ROW_HEIGHT, RebuildOutcome, SECTION_HEADER_HEIGHT, StepListVm, StepSection, StepSelection,
};
pub use step_row_vm::{StepRowVm, map_step_row};
