use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::use_feed;
use crate::vm::{CellFactory, ROW_HEIGHT, RowKind, StepListVm, StepRowVm, StepSelection};

struct SectionView {
    index: usize,
    leg_index: usize,
    title: Option<String>,
    header_height: f32,
    cells: Vec<(usize, Element)>,
}

struct StepCells;

impl CellFactory for StepCells {
    type Cell = Element;

    fn make_cell(&self, kind: RowKind, row: &StepRowVm) -> Element {
        rsx! { StepCell { row: row.clone(), kind } }
    }
}

/// Upcoming steps of the active route, kept in sync with the progress feed.
#[component]
pub fn StepListView(on_step_selected: Option<EventHandler<StepSelection>>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut revision = use_signal(|| 0_u64);

    let vm = use_hook(|| {
        let mut vm = StepListVm::new(ctx.current_progress(), ctx.config().sanitizer.clone());
        vm.rebuild();
        Rc::new(RefCell::new(vm))
    });

    use_feed(ctx.progress_feed(), {
        let vm = Rc::clone(&vm);
        move |progress| {
            if vm.borrow_mut().update_progress(progress).is_changed() {
                revision += 1;
            }
        }
    });

    let on_tap = use_callback({
        let vm = Rc::clone(&vm);
        move |(section, row): (usize, usize)| {
            let selection = vm.borrow().select(section, row);
            if let (Some(selection), Some(handler)) = (selection, on_step_selected) {
                handler.call(selection);
            }
        }
    });

    // re-render whenever a rebuild reports a change
    let _ = revision();
    let strings = ctx.strings();
    let list = vm.borrow();
    let sections: Vec<SectionView> = list
        .sections()
        .iter()
        .enumerate()
        .map(|(index, section)| SectionView {
            index,
            leg_index: section.leg_index(),
            title: list.title_for_header(index, &strings),
            header_height: list.header_height(index),
            cells: (0..section.len())
                .filter_map(|row| list.build_cell(index, row, &StepCells).map(|cell| (row, cell)))
                .collect(),
        })
        .collect();
    drop(list);

    rsx! {
        div { class: "step-list",
            if sections.is_empty() {
                p { class: "step-list-empty", "No upcoming steps." }
            }
            for SectionView { index, leg_index, title, header_height, cells } in sections {
                div { key: "{leg_index}", class: "step-section",
                    if let Some(title) = title.filter(|_| header_height > 0.0) {
                        h3 {
                            class: "step-section-header",
                            style: "height: {header_height}px",
                            "{title}"
                        }
                    }
                    ul {
                        for (row, cell) in cells {
                            li {
                                key: "{row}",
                                onclick: move |_| on_tap.call((index, row)),
                                {cell}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StepCell(row: StepRowVm, kind: RowKind) -> Element {
    let class = match kind {
        RowKind::Step => "step-row",
        RowKind::SectionEnd => "step-row step-row-last",
    };

    rsx! {
        div { class: "{class}", style: "min-height: {ROW_HEIGHT}px",
            span { class: "maneuver {row.maneuver_class}" }
            div { class: "step-text",
                p { class: "step-primary", "{row.primary_text}" }
                if let Some(secondary) = &row.secondary_text {
                    p { class: "step-secondary", "{secondary}" }
                }
            }
            span { class: "step-distance", "{row.distance_label}" }
        }
    }
}
