//! The HTML projector: turns insertion points into absolutely positioned
//! elements and places them into a page template.

use log::debug;

use super::{
    canvas::CanvasContext,
    constants::SHAPE_CLASS,
    error::{HtmlConversionError, Result},
    style::build_shape_style,
    template::{substitute_content, substitute_dimensions, DEFAULT_TEMPLATE},
    utils::{escape_html_text, strip_markers},
};
use crate::collector::InsertionPoint;
use crate::models::common::PageSize;
use std::fmt::Write;

/// What happens to the `{{`/`}}` markers when a shape's text is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkerPolicy {
    /// Render the text verbatim, markers included.
    #[default]
    Keep,
    /// Remove the markers and keep what they enclose.
    Strip,
}

/// Rendered elements, in the order their insertion points were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectionBuffer {
    elements: Vec<String>,
}

impl ProjectionBuffer {
    pub(crate) fn push(&mut self, element: String) {
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(String::as_str)
    }

    /// All elements joined, each on its own line.
    pub fn to_markup(&self) -> String {
        self.elements.concat()
    }
}

/// Projects insertion points of one slide into an HTML page.
///
/// A projector is created per slide. It fixes the canvas scale and the page
/// dimensions at construction; afterwards it only accumulates elements.
#[derive(Debug, Clone)]
pub struct HtmlProjector {
    template: String,
    canvas: CanvasContext,
    marker_policy: MarkerPolicy,
    buffer: ProjectionBuffer,
}

impl HtmlProjector {
    /// Creates a projector for a `slide_width` x `slide_height` slide rendered
    /// on a `canvas_width` x `canvas_height` pixel canvas.
    pub fn new(
        template: &str,
        canvas_width: u32,
        canvas_height: u32,
        slide_width: f64,
        slide_height: f64,
    ) -> Result<Self> {
        let canvas = CanvasContext::new(canvas_width, canvas_height, slide_width, slide_height)?;
        Ok(Self::with_canvas(template, canvas, MarkerPolicy::default()))
    }

    pub fn builder() -> ProjectorBuilder {
        ProjectorBuilder::default()
    }

    fn with_canvas(template: &str, canvas: CanvasContext, marker_policy: MarkerPolicy) -> Self {
        Self {
            template: substitute_dimensions(
                template,
                canvas.canvas_width(),
                canvas.canvas_height(),
            ),
            canvas,
            marker_policy,
            buffer: ProjectionBuffer::default(),
        }
    }

    pub fn canvas(&self) -> &CanvasContext {
        &self.canvas
    }

    pub fn buffer(&self) -> &ProjectionBuffer {
        &self.buffer
    }

    /// Renders one insertion point and appends it to the buffer.
    pub fn add_shape(&mut self, point: &InsertionPoint) -> Result<()> {
        let css = build_shape_style(&point.geometry, &point.style, &self.canvas)?;

        let text = match self.marker_policy {
            MarkerPolicy::Keep => escape_html_text(&point.text),
            MarkerPolicy::Strip => escape_html_text(&strip_markers(&point.text)),
        };

        let mut element = String::new();
        writeln!(
            element,
            r#"<div class="{}" style="{}"><div>{}</div></div>"#,
            SHAPE_CLASS, css, text
        )?;
        debug!("Projected insertion point '{}': {}", point.object_id, css);

        self.buffer.push(element);
        Ok(())
    }

    /// Renders insertion points in order.
    pub fn add_shapes<'a, I>(&mut self, points: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a InsertionPoint>,
    {
        for point in points {
            self.add_shape(point)?;
        }
        Ok(())
    }

    /// Returns the complete page.
    ///
    /// The buffer is only read, so this can be called repeatedly, e.g. once
    /// with a file reference and once with an embedded image.
    pub fn html_text(&self, background: Option<&str>) -> String {
        substitute_content(&self.template, background, &self.buffer.to_markup())
    }
}

/// Builder for [`HtmlProjector`].
///
/// The template defaults to the bundled page template and markers are kept
/// unless configured otherwise. A page size and either a canvas size or a
/// bounding box to fit into are required.
#[derive(Debug, Default)]
pub struct ProjectorBuilder {
    template: Option<String>,
    page_size: Option<PageSize>,
    canvas_size: Option<(u32, u32)>,
    fit_within: Option<(u32, u32)>,
    marker_policy: MarkerPolicy,
}

impl ProjectorBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Uses a custom page template instead of the bundled one.
    pub fn set_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Sets the slide size, in slide units.
    pub fn set_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets an exact canvas size in pixels.
    pub fn set_canvas_size(mut self, width: u32, height: u32) -> Self {
        self.canvas_size = Some((width, height));
        self
    }

    /// Sizes the canvas to the largest one within the bounds that keeps the
    /// slide's aspect ratio. Ignored when an exact canvas size is set.
    pub fn set_fit_within(mut self, max_width: u32, max_height: u32) -> Self {
        self.fit_within = Some((max_width, max_height));
        self
    }

    pub fn set_marker_policy(mut self, marker_policy: MarkerPolicy) -> Self {
        self.marker_policy = marker_policy;
        self
    }

    pub fn build(self) -> Result<HtmlProjector> {
        let page = self
            .page_size
            .ok_or_else(|| HtmlConversionError::MissingData("Page size not set".to_string()))?;

        let canvas = match (self.canvas_size, self.fit_within) {
            (Some((width, height)), _) => CanvasContext::from_page(page, width, height)?,
            (None, Some((max_width, max_height))) => {
                CanvasContext::fit(page, max_width, max_height)?
            }
            (None, None) => {
                return Err(HtmlConversionError::MissingData(
                    "Canvas size not set".to_string(),
                ))
            }
        };

        let template = self.template.as_deref().unwrap_or(DEFAULT_TEMPLATE);
        Ok(HtmlProjector::with_canvas(template, canvas, self.marker_policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::Origin;
    use crate::models::{
        common::ShapeGeometry,
        properties::{ParagraphAlignment, TextStyle},
    };

    const TEMPLATE: &str = "<page w=$$width$$ h=$$height$$ bg=$$background$$>\n$$shapes$$</page>";

    fn point(id: &str, text: &str) -> InsertionPoint {
        InsertionPoint {
            object_id: id.to_string(),
            node_index: 0,
            origin: Origin::Slide,
            geometry: ShapeGeometry::new(100.0, 50.0, 200.0, 100.0),
            style: TextStyle::default(),
            text: text.to_string(),
        }
    }

    fn projector() -> HtmlProjector {
        HtmlProjector::new(TEMPLATE, 500, 300, 1000.0, 600.0).unwrap()
    }

    #[test]
    fn test_dimensions_substituted_at_construction() {
        let projector = projector();
        assert_eq!(projector.html_text(None), "<page w=500 h=300 bg=none>\n</page>");
    }

    #[test]
    fn test_invalid_slide_size() {
        let err = HtmlProjector::new(TEMPLATE, 500, 300, 0.0, 600.0).unwrap_err();
        assert!(matches!(err, HtmlConversionError::InvalidCanvasConfiguration { .. }));
    }

    #[test]
    fn test_add_shape_emits_one_element() {
        let mut projector = projector();
        projector.add_shape(&point("a", "Hello {{name}}")).unwrap();

        assert_eq!(projector.buffer().len(), 1);
        let element = projector.buffer().iter().next().unwrap();
        assert!(element.starts_with(r#"<div class="shape" style="padding: "#));
        assert!(element.ends_with("\"><div>Hello {{name}}</div></div>\n"));
        assert!(element.contains("left: 50px;"));
        assert!(element.contains("top: 25px;"));
    }

    #[test]
    fn test_elements_keep_input_order() {
        let mut projector = projector();
        let points = vec![
            point("a", "{{first}}"),
            point("b", "{{second}}"),
            point("c", "{{third}}"),
        ];
        projector.add_shapes(&points).unwrap();

        let html = projector.html_text(None);
        let first = html.find("{{first}}").unwrap();
        let second = html.find("{{second}}").unwrap();
        let third = html.find("{{third}}").unwrap();
        assert!(first < second && second < third);
        assert_eq!(html.matches(r#"<div class="shape""#).count(), 3);
    }

    #[test]
    fn test_html_text_is_repeatable() {
        let mut projector = projector();
        projector.add_shape(&point("a", "{{x}}")).unwrap();

        let file = projector.html_text(Some("url(Background.png)"));
        assert_eq!(file, projector.html_text(Some("url(Background.png)")));

        let embedded = projector.html_text(Some("url('data:image/png;base64,AAAA')"));
        assert_ne!(file, embedded);
        assert_eq!(
            file.replace("url(Background.png)", ""),
            embedded.replace("url('data:image/png;base64,AAAA')", "")
        );
        assert_eq!(projector.buffer().len(), 1);
    }

    #[test]
    fn test_text_is_escaped() {
        let mut projector = projector();
        projector.add_shape(&point("a", "{{a}} < {{b}} & c")).unwrap();
        assert!(projector.html_text(None).contains("<div>{{a}} &lt; {{b}} &amp; c</div>"));
    }

    #[test]
    fn test_strip_markers_policy() {
        let mut projector = HtmlProjector::builder()
            .set_template(TEMPLATE)
            .set_page_size(PageSize::new(1000.0, 600.0))
            .set_canvas_size(500, 300)
            .set_marker_policy(MarkerPolicy::Strip)
            .build()
            .unwrap();
        projector.add_shape(&point("a", "Dear {{name}},")).unwrap();
        assert!(projector.html_text(None).contains("<div>Dear name,</div>"));
    }

    #[test]
    fn test_right_aligned_shape() {
        let mut projector = HtmlProjector::new(TEMPLATE, 500, 300, 1000.0, 600.0).unwrap();
        let mut right = point("r", "{{r}}");
        right.style.alignment = ParagraphAlignment::Right;
        projector.add_shape(&right).unwrap();
        assert!(projector.html_text(None).contains("right: 350px;"));
    }

    #[test]
    fn test_builder_defaults_and_requirements() {
        let projector = HtmlProjector::builder()
            .set_page_size(PageSize::new(960.0, 540.0))
            .set_fit_within(640, 640)
            .build()
            .unwrap();
        assert_eq!(projector.canvas().canvas_width(), 640);
        assert_eq!(projector.canvas().canvas_height(), 360);
        let html = projector.html_text(None);
        assert!(html.contains("width: 640px;"));
        assert!(html.contains("background-image: none;"));

        let missing_page = HtmlProjector::builder().set_canvas_size(640, 360).build();
        assert!(matches!(missing_page, Err(HtmlConversionError::MissingData(_))));

        let missing_canvas = HtmlProjector::builder()
            .set_page_size(PageSize::new(960.0, 540.0))
            .build();
        assert!(matches!(missing_canvas, Err(HtmlConversionError::MissingData(_))));
    }
}
