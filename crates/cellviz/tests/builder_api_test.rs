//! Integration tests for the DiagramBuilder API
//!
//! These tests drive a realistic Graphviz call graph through parsing,
//! normalization and a series of pointer releases.

use cellviz::{
    CellvizError, Diagram, DiagramBuilder, EDGE_FROM, EDGE_TO, NodeId, NodeKind, Selection,
    config::AppConfig,
};
use cellviz_parser::error::ErrorCode;

const CALLGRAPH: &str = include_str!("../../../fixtures/callgraph.svg");

const EDGE_MAIN_RUN: &str = "1:1 -> 2:1";
const EDGE_HELPER_CONFIG: &str = "1:2 -> 2:2";
const EDGE_MAIN_HELPER: &str = "1:1 -> 1:2";

const HIGHLIGHTS: [&str; 4] = ["selected", "fade", "incoming", "outgoing"];

fn callgraph() -> Diagram {
    DiagramBuilder::default()
        .build(CALLGRAPH)
        .expect("Failed to build call graph")
}

fn classes(diagram: &Diagram, id: &str) -> Vec<String> {
    let element = diagram
        .element_by_id(id)
        .unwrap_or_else(|| panic!("no element with id {id}"));
    element
        .classes()
        .iter()
        .filter(|class| HIGHLIGHTS.contains(class))
        .map(str::to_string)
        .collect()
}

fn assert_no_highlights(diagram: &Diagram) {
    let document = diagram.document();
    let highlighted = document.select(|el| HIGHLIGHTS.iter().any(|class| el.has_class(class)));
    assert!(
        highlighted.is_empty(),
        "expected no highlight classes, found {} highlighted elements",
        highlighted.len()
    );
}

/// Finds the `<text>` element whose content is `label`.
fn text_labelled(diagram: &Diagram, label: &str) -> NodeId {
    let document = diagram.document();
    document
        .select(|el| el.is("text"))
        .into_iter()
        .find(|text| {
            document.children(*text).iter().any(|child| {
                matches!(document.kind(*child), NodeKind::Text(content) if content.trim() == label)
            })
        })
        .unwrap_or_else(|| panic!("no text labelled {label}"))
}

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
    let _builder = DiagramBuilder::new(AppConfig::default());
}

#[test]
fn test_normalize_report() {
    let report = *callgraph().report();

    assert_eq!(report.rectified_curves, 1);
    assert_eq!(report.hit_areas, 3);
    assert_eq!(report.unwrapped_links, 4);
    assert_eq!(report.endpoints, 3);
    assert_eq!(report.removed_tooltips, 6);
}

#[test]
fn test_no_sentinel_links_or_titles_remain() {
    let diagram = callgraph();
    let document = diagram.document();

    assert!(
        document
            .select(|el| el.is("a") || el.is("title"))
            .is_empty()
    );
    assert!(diagram.element_by_id("a_1:1").is_none());

    let main = diagram.element_by_id("1:1").unwrap();
    assert!(main.has_class("cell"));
    assert!(main.has_class("fn"));

    let helper = diagram.element_by_id("1:2").unwrap();
    assert!(helper.has_class("method"));

    let config = diagram.element_by_id("2:2").unwrap();
    assert!(config.has_class("cell"));
    assert!(!config.has_class("fn"));
}

#[test]
fn test_edge_endpoints_materialized() {
    let diagram = callgraph();

    for (id, from, to) in [
        (EDGE_MAIN_RUN, "1:1", "2:1"),
        (EDGE_HELPER_CONFIG, "1:2", "2:2"),
        (EDGE_MAIN_HELPER, "1:1", "1:2"),
    ] {
        let edge = diagram.element_by_id(id).unwrap();
        assert_eq!(edge.attribute(EDGE_FROM), Some(from));
        assert_eq!(edge.attribute(EDGE_TO), Some(to));
    }
}

#[test]
fn test_every_edge_has_a_hit_area() {
    let diagram = callgraph();
    let document = diagram.document();

    for id in [EDGE_MAIN_RUN, EDGE_HELPER_CONFIG, EDGE_MAIN_HELPER] {
        let edge = document.find_by_id(id).unwrap();
        let paths = document.select_within(edge, |el| el.is("path"));
        assert_eq!(paths.len(), 2, "edge {id}");

        let original = document.element(paths[0]).unwrap();
        let hit_area = document.element(paths[1]).unwrap();
        assert!(!original.has_class("hover-path"));
        assert!(hit_area.has_class("hover-path"));
        assert_eq!(hit_area.attribute("stroke-dasharray"), None);
        assert_eq!(hit_area.attribute("d"), original.attribute("d"));
    }

    let dashed = document.find_by_id(EDGE_HELPER_CONFIG).unwrap();
    let paths = document.select_within(dashed, |el| el.is("path"));
    assert_eq!(
        document.element(paths[0]).unwrap().attribute("stroke-dasharray"),
        Some("5,2")
    );
}

#[test]
fn test_marked_curve_is_rectified() {
    let diagram = callgraph();
    let edge = diagram.element_by_id(EDGE_MAIN_HELPER).unwrap();
    assert!(!edge.has_class("modify-me"));

    let document = diagram.document();
    let group = document.find_by_id(EDGE_MAIN_HELPER).unwrap();
    let path = document.select_within(group, |el| el.is("path"))[0];
    assert_eq!(
        document.element(path).unwrap().attribute("d"),
        Some("M152,-140 C164,-140 169,-130 169,-108 C169,-86 164,-76 162.1,-76")
    );
}

#[test]
fn test_edge_toggle() {
    let mut diagram = callgraph();

    let selection = diagram.click_by_id(EDGE_MAIN_RUN).clone();
    assert_eq!(selection, Selection::Edge(EDGE_MAIN_RUN.to_string()));
    assert_eq!(classes(&diagram, EDGE_MAIN_RUN), ["selected"]);
    assert_eq!(classes(&diagram, EDGE_HELPER_CONFIG), ["fade"]);
    assert_eq!(classes(&diagram, EDGE_MAIN_HELPER), ["fade"]);

    assert_eq!(diagram.click_by_id(EDGE_MAIN_RUN), &Selection::None);
    assert_no_highlights(&diagram);
}

#[test]
fn test_release_on_edge_descendant() {
    let mut diagram = callgraph();
    let document = diagram.document();
    let edge = document.find_by_id(EDGE_HELPER_CONFIG).unwrap();
    let hit_area = *document
        .select_within(edge, |el| el.has_class("hover-path"))
        .first()
        .unwrap();

    assert_eq!(
        diagram.on_pointer_release(hit_area),
        &Selection::Edge(EDGE_HELPER_CONFIG.to_string())
    );
}

#[test]
fn test_background_release_resets() {
    let mut diagram = callgraph();
    diagram.click_by_id("1:1");

    let root = diagram.document().root();
    assert_eq!(diagram.on_pointer_release(root), &Selection::None);
    assert_no_highlights(&diagram);

    diagram.click_by_id(EDGE_MAIN_RUN);
    assert_eq!(diagram.click_by_id("no-such-element"), &Selection::None);
    assert_no_highlights(&diagram);
}

#[test]
fn test_cell_selection() {
    let mut diagram = callgraph();

    assert_eq!(
        diagram.click_by_id("1:1"),
        &Selection::Cell("1:1".to_string())
    );
    assert_eq!(classes(&diagram, "1:1"), ["selected"]);
    assert_eq!(classes(&diagram, EDGE_MAIN_RUN), ["incoming"]);
    assert_eq!(classes(&diagram, EDGE_MAIN_HELPER), ["incoming"]);
    assert_eq!(classes(&diagram, EDGE_HELPER_CONFIG), ["fade"]);
    assert!(classes(&diagram, "1").is_empty());

    assert_eq!(
        diagram.click_by_id("1:2"),
        &Selection::Cell("1:2".to_string())
    );
    assert!(classes(&diagram, "1:1").is_empty());
    assert_eq!(classes(&diagram, EDGE_HELPER_CONFIG), ["incoming"]);
    assert_eq!(classes(&diagram, EDGE_MAIN_HELPER), ["outgoing"]);
    assert_eq!(classes(&diagram, EDGE_MAIN_RUN), ["fade"]);
}

#[test]
fn test_cell_selected_through_its_label() {
    let mut diagram = callgraph();
    let label = text_labelled(&diagram, "Run");

    assert_eq!(
        diagram.on_pointer_release(label),
        &Selection::Cell("2:1".to_string())
    );
    assert_eq!(classes(&diagram, EDGE_MAIN_RUN), ["outgoing"]);

    assert_eq!(diagram.on_pointer_release(label), &Selection::None);
    assert_no_highlights(&diagram);
}

#[test]
fn test_non_function_cell_stays_idle() {
    let mut diagram = callgraph();
    diagram.click_by_id(EDGE_MAIN_RUN);

    let label = text_labelled(&diagram, "Config");
    assert_eq!(diagram.on_pointer_release(label), &Selection::None);
    assert_no_highlights(&diagram);
}

#[test]
fn test_node_selection_uses_prefix() {
    let mut diagram = callgraph();
    let label = text_labelled(&diagram, "server.go");

    assert_eq!(
        diagram.on_pointer_release(label),
        &Selection::Node("2".to_string())
    );
    assert_eq!(classes(&diagram, "2"), ["selected"]);
    assert_eq!(classes(&diagram, EDGE_MAIN_RUN), ["outgoing"]);
    assert_eq!(classes(&diagram, EDGE_HELPER_CONFIG), ["outgoing"]);
    assert_eq!(classes(&diagram, EDGE_MAIN_HELPER), ["fade"]);

    assert_eq!(
        diagram.click_by_id("1"),
        &Selection::Node("1".to_string())
    );
    assert!(classes(&diagram, "2").is_empty());
    assert_eq!(classes(&diagram, EDGE_MAIN_RUN), ["incoming"]);
    assert_eq!(classes(&diagram, EDGE_MAIN_HELPER), ["incoming", "outgoing"]);
}

#[test]
fn test_selection_kinds_are_exclusive() {
    let mut diagram = callgraph();

    diagram.click_by_id("1:1");
    assert_eq!(
        diagram.click_by_id(EDGE_MAIN_RUN),
        &Selection::Edge(EDGE_MAIN_RUN.to_string())
    );
    assert!(classes(&diagram, "1:1").is_empty());

    // Same id, different kind: not a toggle
    diagram.click_by_id("1");
    assert_eq!(
        diagram.click_by_id("1:1"),
        &Selection::Cell("1:1".to_string())
    );
    assert!(classes(&diagram, "1").is_empty());
}

#[test]
fn test_clear_selection() {
    let mut diagram = callgraph();
    diagram.click_by_id("1");

    diagram.clear_selection();
    assert_eq!(diagram.selection(), &Selection::None);
    assert_no_highlights(&diagram);
}

#[test]
fn test_render_round_trip() {
    let builder = DiagramBuilder::default();
    let mut diagram = builder.build(CALLGRAPH).unwrap();
    diagram.click_by_id("1:1");

    let svg = builder.render_svg(&diagram).expect("Failed to render");
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(!svg.contains("remove_me_url"));
    assert!(!svg.contains("<title"));

    let reparsed = builder.parse(&svg).expect("Rendered SVG should parse");
    let document = reparsed.document();
    let cell = document
        .element(document.find_by_id("1:1").unwrap())
        .unwrap();
    assert!(cell.has_class("selected"));

    let edge = document
        .element(document.find_by_id(EDGE_MAIN_RUN).unwrap())
        .unwrap();
    assert!(edge.has_class("incoming"));
    assert_eq!(edge.attribute(EDGE_FROM), Some("1:1"));
}

#[test]
fn test_custom_markers() {
    let config: AppConfig = toml::from_str(
        r#"
        [markers]
        function = "callable"

        [highlight]
        selected = "active"
        "#,
    )
    .unwrap();
    let source = r#"<svg>
        <g id="n" class="node">
          <g id="a_n:1"><a href="remove_me_url.cell.callable"><text>f</text></a></g>
        </g>
        <g id="n:1 -> m:1" class="edge"><path d="M0,0C1,1 2,2 3,3"/></g>
    </svg>"#;

    let mut diagram = DiagramBuilder::new(config).build(source).unwrap();
    assert_eq!(
        diagram.click_by_id("n:1"),
        &Selection::Cell("n:1".to_string())
    );
    assert!(diagram.element_by_id("n:1").unwrap().has_class("active"));
    assert!(
        diagram
            .element_by_id("n:1 -> m:1")
            .unwrap()
            .has_class("incoming")
    );
}

#[test]
fn test_parse_error_keeps_source() {
    let source = "<svg><g></svg>";
    let err = DiagramBuilder::default().build(source).unwrap_err();

    match err {
        CellvizError::Parse { err, src } => {
            assert_eq!(src, source);
            assert_eq!(err.diagnostic().code(), Some(ErrorCode::E100));
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_non_svg_root_is_rejected() {
    let result = DiagramBuilder::default().build("<html><body/></html>");
    assert!(matches!(result, Err(CellvizError::Parse { .. })));
}
