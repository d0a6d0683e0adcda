use super::*;
use tessel_ui_graphics::EdgeInsets;
use tessel_ui_layout::{SafeAreaExpandOpts, SafeAreaState};

const INSETS: SafeAreaInsets = SafeAreaInsets::new(24.0, 30.0, 0.0, 0.0);

fn ignoring(edges: SafeAreaEdges) -> LayoutProperty {
    LayoutProperty {
        ignore_layout_safe_area: Some(SafeAreaExpandOpts::new(SafeAreaTypes::SYSTEM, edges)),
        ..LayoutProperty::new()
    }
}

#[test]
fn top_overlap_when_hidden_title_bar_sits_on_the_inset_boundary() {
    let nav = ignoring(SafeAreaEdges::TOP);
    assert!(check_top_edge_overlap(&nav, true, 24.0, &INSETS));
}

#[test]
fn top_overlap_requires_opting_in() {
    let nav = LayoutProperty::new();
    assert!(!check_top_edge_overlap(&nav, true, 24.0, &INSETS));

    let nav = ignoring(SafeAreaEdges::BOTTOM);
    assert!(!check_top_edge_overlap(&nav, true, 24.0, &INSETS));
}

#[test]
fn top_padding_blocks_overlap() {
    let nav = LayoutProperty {
        padding: EdgeInsets::from_components(0.0, 8.0, 0.0, 0.0),
        title_bar_style: Some(BarStyle::Stack),
        ..ignoring(SafeAreaEdges::TOP)
    };
    assert!(!check_top_edge_overlap(&nav, false, 24.0, &INSETS));
}

#[test]
fn top_margin_blocks_overlap() {
    let nav = LayoutProperty {
        margin: EdgeInsets::from_components(0.0, 4.0, 0.0, 0.0),
        ..ignoring(SafeAreaEdges::TOP)
    };
    assert!(!check_top_edge_overlap(&nav, true, 24.0, &INSETS));
}

#[test]
fn visible_standard_title_bar_blocks_overlap() {
    let nav = ignoring(SafeAreaEdges::TOP);
    assert!(!check_top_edge_overlap(&nav, false, 24.0, &INSETS));

    let stacked = LayoutProperty {
        title_bar_style: Some(BarStyle::Stack),
        ..ignoring(SafeAreaEdges::TOP)
    };
    assert!(check_top_edge_overlap(&stacked, false, 24.0, &INSETS));
}

#[test]
fn title_bar_off_the_inset_boundary_does_not_overlap() {
    let nav = ignoring(SafeAreaEdges::TOP);
    assert!(check_top_edge_overlap(&nav, true, 24.4, &INSETS));
    assert!(check_top_edge_overlap(&nav, true, 23.6, &INSETS));
    // Already covering the status bar.
    assert!(!check_top_edge_overlap(&nav, true, 0.0, &INSETS));
    assert!(!check_top_edge_overlap(&nav, true, 100.0, &INSETS));
}

#[test]
fn bottom_overlap_when_toolbar_sits_on_the_inset_boundary() {
    let nav = ignoring(SafeAreaEdges::BOTTOM);
    assert!(check_bottom_edge_overlap(&nav, true, 750.0, 780.0, &INSETS));
    assert!(check_bottom_edge_overlap(&nav, true, 750.4, 780.0, &INSETS));
    assert!(!check_bottom_edge_overlap(&nav, true, 780.0, 780.0, &INSETS));
    assert!(!check_bottom_edge_overlap(&nav, true, 700.0, 780.0, &INSETS));
}

#[test]
fn bottom_padding_and_visible_toolbar_block_overlap() {
    let padded = LayoutProperty {
        padding: EdgeInsets::from_components(0.0, 0.0, 0.0, 8.0),
        ..ignoring(SafeAreaEdges::BOTTOM)
    };
    assert!(!check_bottom_edge_overlap(&padded, true, 750.0, 780.0, &INSETS));

    let nav = ignoring(SafeAreaEdges::BOTTOM);
    assert!(!check_bottom_edge_overlap(&nav, false, 750.0, 780.0, &INSETS));
}

#[test]
fn resolve_takes_extents_from_the_provider() {
    let state = SafeAreaState::new(INSETS);
    let nav = ignoring(SafeAreaEdges::VERTICAL);
    let edges = EdgePositions {
        title_bar_hidden: true,
        title_bar_top: 24.0,
        tool_bar_hidden: true,
        tool_bar_bottom: 750.0,
        window_height: 780.0,
    };

    let overlap = SafeAreaOverlap::resolve(&nav, &edges, &state);
    assert_eq!(overlap, SafeAreaOverlap { top: 24.0, bottom: 30.0 });
    assert_eq!(overlap.total(), 54.0);
}

#[test]
fn resolve_includes_requested_cutout() {
    let state = SafeAreaState::new(INSETS);
    state.set_cutout(SafeAreaInsets::new(40.0, 0.0, 0.0, 0.0));
    let nav = LayoutProperty {
        ignore_layout_safe_area: Some(SafeAreaExpandOpts::new(
            SafeAreaTypes::SYSTEM | SafeAreaTypes::CUTOUT,
            SafeAreaEdges::TOP,
        )),
        ..LayoutProperty::new()
    };
    let edges = EdgePositions {
        title_bar_hidden: true,
        title_bar_top: 40.0,
        window_height: 780.0,
        ..EdgePositions::default()
    };

    let overlap = SafeAreaOverlap::resolve(&nav, &edges, &state);
    assert_eq!(overlap.top, 40.0);
    assert_eq!(overlap.bottom, 0.0);

    // The system boundary alone no longer lines up with the cutout.
    let below_status_bar = EdgePositions {
        title_bar_top: 24.0,
        ..edges
    };
    let overlap = SafeAreaOverlap::resolve(&nav, &below_status_bar, &state);
    assert_eq!(overlap, SafeAreaOverlap::NONE);
}

#[test]
fn bars_covering_the_insets_get_no_overlap() {
    let state = SafeAreaState::new(INSETS);
    let nav = ignoring(SafeAreaEdges::VERTICAL);
    let edges = EdgePositions {
        title_bar_hidden: true,
        title_bar_top: 0.0,
        tool_bar_hidden: true,
        tool_bar_bottom: 780.0,
        window_height: 780.0,
    };
    assert_eq!(SafeAreaOverlap::resolve(&nav, &edges, &state), SafeAreaOverlap::NONE);
}

#[test]
fn resolve_without_opt_in_is_none() {
    let state = SafeAreaState::new(INSETS);
    let edges = EdgePositions {
        title_bar_hidden: true,
        tool_bar_hidden: true,
        tool_bar_bottom: 780.0,
        window_height: 780.0,
        ..EdgePositions::default()
    };
    let overlap = SafeAreaOverlap::resolve(&LayoutProperty::new(), &edges, &state);
    assert_eq!(overlap, SafeAreaOverlap::NONE);
}
