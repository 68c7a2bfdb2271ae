use std::fs;
use std::path::PathBuf;

use slide_layout::background::{data_url_background, file_background};
use slide_layout::collector::Origin;
use slide_layout::{hide_insertion_points, HtmlProjector, Slide};

fn load_test_slide(filename: &str) -> Slide {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("test_data");
    path.push(filename);
    let json = fs::read_to_string(path).expect("Unable to read test data file");
    Slide::from_json(&json).expect("Unable to parse test slide")
}

fn project(slide: &Slide) -> HtmlProjector {
    let mut projector = HtmlProjector::builder()
        .set_page_size(slide.page_size)
        .set_canvas_size(640, 360)
        .build()
        .unwrap();
    projector.add_shapes(&slide.insertion_points()).unwrap();
    projector
}

#[test]
fn test_collects_points_from_all_containers() {
    let slide = load_test_slide("slide.json");
    let points = slide.insertion_points();

    let ids: Vec<&str> = points.iter().map(|p| p.object_id.as_str()).collect();
    assert_eq!(ids, vec!["customer", "cell-1-2", "footer-date"]);
    assert_eq!(points[0].origin, Origin::Slide);
    assert_eq!(points[1].origin, Origin::TableCell { row: 1, column: 2 });
    assert_eq!(
        points[2].origin,
        Origin::GroupMember {
            group_id: "footer-group".to_string(),
            index: 1
        }
    );
}

#[test]
fn test_left_aligned_shape_markup() {
    let slide = load_test_slide("slide.json");
    let projector = project(&slide);

    let expected = concat!(
        r#"<div class="shape" style=""#,
        "padding: 2px 5px 2px 5px;",
        "align-items: center;justify-content: flex-start;",
        "left: 64px;text-align: left;width: 256px;top: 100px;",
        "width: 256px;height: 40px;",
        "white-space: pre-wrap;overflow-wrap: break-word;",
        "font-family: 'Segoe UI';font-size: 16px;font-style: italic;",
        "line-height: 1.5;",
        "color: #1f3864;",
        r#""><div>Dear {{customer}},</div></div>"#,
        "\n"
    );
    assert_eq!(projector.buffer().iter().next().unwrap(), expected);
}

#[test]
fn test_table_cell_markup() {
    let slide = load_test_slide("slide.json");
    let projector = project(&slide);
    let cell = projector.buffer().iter().nth(1).unwrap();

    assert!(cell.contains("justify-content: flex-end;right: 320px;text-align: right;"));
    assert!(cell.contains("font-family: 'Calibri';font-size: 12px;"));
    assert!(cell.contains("text-decoration: underline;"));
    assert!(cell.contains("line-height: 16px;"));
    assert!(cell.contains("color: #000000;"));
    assert!(!cell.contains("left:"));
}

#[test]
fn test_group_member_markup() {
    let slide = load_test_slide("slide.json");
    let projector = project(&slide);
    let footer = projector.buffer().iter().nth(2).unwrap();

    assert!(footer.contains("align-items: flex-end;justify-content: center;"));
    assert!(footer.contains("left: 320px;text-align: center;transform: translate(-50%, 0);"));
    assert!(footer.contains("width: 200px;top: 320px;width: auto;height: auto;"));
    assert!(footer.contains("white-space: pre;"));
    assert!(footer.contains(
        "font-size: 8px;text-transform: uppercase;text-decoration: line-through;"
    ));
    assert!(!footer.contains("line-height"));
}

#[test]
fn test_page_with_both_background_kinds() {
    let slide = load_test_slide("slide.json");
    let projector = project(&slide);

    let linked = projector.html_text(Some(&file_background("Background.png")));
    let embedded_value = data_url_background(b"not really a png");
    let embedded = projector.html_text(Some(&embedded_value));

    assert!(linked.contains("background-image: url(Background.png);"));
    assert!(embedded.contains("background-image: url('data:image/png;base64,"));
    assert_eq!(
        linked.replace("url(Background.png)", "BG"),
        embedded.replace(&embedded_value, "BG")
    );
    assert_eq!(linked.matches(r#"<div class="shape""#).count(), 3);
    assert!(linked.contains("width: 640px;"));
    assert!(linked.contains("height: 360px;"));
}

#[test]
fn test_hiding_prepares_background_export() {
    let mut slide = load_test_slide("slide.json");
    let points = slide.insertion_points();

    hide_insertion_points(&points, &mut slide).unwrap();
    assert!(slide.insertion_points().is_empty());

    let hidden = slide.to_json_pretty().unwrap();
    assert!(!hidden.contains("{{customer}}"));
    assert!(hidden.contains("Quarterly Report"));
    assert!(hidden.contains("}} not a {{ marker"));

    let customer = slide.shape_mut("customer").unwrap().text_frame.clone().unwrap();
    assert_eq!(customer.style.fill_transparency, 1.0);
    assert!(customer.text.is_empty());
}
