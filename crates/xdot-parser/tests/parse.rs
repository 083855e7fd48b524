use float_cmp::approx_eq;
use xdot_core::{
    draw::{LineStyle, Shape},
    geometry::{Point, Size},
    scene::Element,
};
use xdot_parser::{ParseConfig, error::ErrorCode, parse};

const TWO_NODES: &str = include_str!("fixtures/two_nodes.xdot");

#[test]
fn test_layout_output_builds_scene() {
    let parsed = parse(TWO_NODES, ParseConfig::new()).expect("Failed to parse");
    assert!(parsed.warnings().is_empty());

    let graph = parsed.graph();
    assert_eq!(graph.size(), Size::new(62.0, 116.0));
    assert_eq!(graph.shapes().len(), 2, "filled background plus its outline");
    assert_eq!(graph.visible_node_count(), 2);
    assert_eq!(graph.edge_count(), 1);

    let a = graph.node_by_id("a").unwrap();
    assert_eq!(a.center(), Point::new(27.0, 18.0));
    assert!(approx_eq!(f32, a.bounds().width(), 54.0));
    assert!(approx_eq!(f32, a.bounds().height(), 36.0));
    assert_eq!(a.url(), Some("http://example.com/a"));
    assert_eq!(a.shapes().len(), 2);

    match &a.shapes()[1] {
        Shape::Text(text) => {
            assert_eq!(text.text(), "a");
            assert_eq!(text.anchor(), Point::new(27.0, 22.0));
            assert_eq!(text.pen().font_name(), "Times-Roman");
            assert_eq!(text.pen().font_size(), 14.0);
        }
        other => panic!("Expected label text, got {other:?}"),
    }

    let b = graph.node_by_id("b").unwrap();
    assert_eq!(b.center(), Point::new(27.0, 98.0));
    assert_eq!(b.url(), None);
}

#[test]
fn test_edge_geometry_is_normalised() {
    let parsed = parse(TWO_NODES, ParseConfig::new()).unwrap();
    let graph = parsed.graph();

    let (_, edge) = graph.edges().next().unwrap();
    assert_eq!(edge.source(), graph.node_index("a").unwrap());
    assert_eq!(edge.destination(), graph.node_index("b").unwrap());

    let points = edge.points();
    assert_eq!(points.len(), 4, "the arrow marker is not a control point");
    assert!(approx_eq!(f32, points[0].y(), 116.0 - 79.697, epsilon = 1e-3));
    assert!(approx_eq!(f32, points[3].y(), 116.0 - 54.112, epsilon = 1e-3));

    assert_eq!(edge.shapes().len(), 3);
    assert!(matches!(edge.shapes()[0], Shape::Bezier(_)));
    assert!(matches!(edge.shapes()[1], Shape::Polygon(_)));
    assert!(edge.shapes()[1].is_filled());
    assert!(!edge.shapes()[2].is_filled());
    assert_eq!(
        edge.shapes()[1].pen().unwrap().line_style(),
        LineStyle::Solid
    );
}

#[test]
fn test_hit_testing_on_parsed_scene() {
    let parsed = parse(TWO_NODES, ParseConfig::new()).unwrap();
    let graph = parsed.graph();
    let a = graph.node_index("a").unwrap();
    let b = graph.node_index("b").unwrap();

    let url = graph.url_at(Point::new(27.0, 18.0)).unwrap();
    assert_eq!(url.url(), "http://example.com/a");
    assert_eq!(url.element(), Element::Node(a));
    assert!(graph.url_at(Point::new(27.0, 98.0)).is_none());

    let jump = graph.jump_at(Point::new(27.0, 38.0)).unwrap();
    assert_eq!(jump.point(), Point::new(27.0, 98.0));
    assert!(jump.highlight().contains(&Element::Node(b)));
    assert!(matches!(jump.element(), Element::Edge(_)));

    let jump = graph.jump_at(Point::new(30.0, 100.0)).unwrap();
    assert_eq!(jump.element(), Element::Node(b));
    assert_eq!(jump.point(), Point::new(27.0, 98.0));

    assert!(graph.jump_at(Point::new(60.0, 60.0)).is_none());
}

#[test]
fn test_bounding_box_transform() {
    let source = r#"graph {
        graph [bb="0,0,100,50"];
        n [pos="0,0", width=1, height=1, _draw_="e 100 50 1 1"];
    }"#;

    let parsed = parse(source, ParseConfig::new()).unwrap();
    let node = parsed.graph().node_by_id("n").unwrap();
    assert_eq!(node.center(), Point::new(0.0, 50.0));

    match &node.shapes()[0] {
        Shape::Ellipse(ellipse) => assert_eq!(ellipse.center(), Point::new(100.0, 0.0)),
        other => panic!("Expected ellipse, got {other:?}"),
    }
}

#[test]
fn test_parse_is_idempotent() {
    let first = parse(TWO_NODES, ParseConfig::new()).unwrap();
    let second = parse(TWO_NODES, ParseConfig::new()).unwrap();

    assert_eq!(first.graph(), second.graph());
    assert_eq!(first.warnings(), second.warnings());
}

#[test]
fn test_attribute_problems_are_warnings() {
    let source = r#"digraph {
        a [pos="1,1", width=1, height=1, _draw_="c 3 -red e 1 1 1 1 Q"];
        b [pos="oops", width=1, height=1];
    }"#;

    let parsed = parse(source, ParseConfig::new()).unwrap();
    let codes: Vec<_> = parsed.warnings().iter().map(|w| w.code()).collect();
    assert_eq!(
        codes,
        vec![Some(ErrorCode::E202), Some(ErrorCode::E200), Some(ErrorCode::E301)]
    );

    let graph = parsed.graph();
    assert_eq!(graph.node_by_id("a").unwrap().shapes().len(), 1);
    assert!(graph.node_by_id("b").is_none());
}

#[test]
fn test_fatal_errors_name_the_source() {
    let config = ParseConfig::new().with_source_name("g.xdot");
    let err = parse("graph {\n  $ }", config).unwrap_err();
    assert_eq!(err.to_string(), "g.xdot:2:3:unexpected char '$'");

    let err = parse("graph { a -> }", ParseConfig::new()).unwrap_err();
    assert_eq!(err.diagnostic().code(), Some(ErrorCode::E100));
    assert_eq!(err.col(), Some(14));
}

#[test]
fn test_empty_source_name_is_left_out() {
    let config = ParseConfig::new().with_source_name("");
    let err = parse("graph { a $ }", config).unwrap_err();
    assert_eq!(err.to_string(), "1:11:unexpected char '$'");
}

#[test]
fn test_empty_graph() {
    let parsed = parse("digraph {}", ParseConfig::new()).unwrap();
    let graph = parsed.graph();
    assert_eq!(graph.size(), Size::default());
    assert_eq!(graph.visible_node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.shapes().is_empty());
}
