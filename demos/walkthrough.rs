//  cargo run --example walkthrough
//  cargo run --example walkthrough --features instrumented

use tipkit::*;

const CONTAINER: Size = Size {
    width: 390.0,
    height: 844.0,
};

/// Stand-in for a text layout engine: fixed advance, wrapped at `width`.
fn text_height(text: &str, width: f32, font_size: f32) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    let per_line = (width / (font_size * 0.55)).floor().max(1.0) as usize;
    let lines = text.chars().count().div_ceil(per_line);
    lines as f32 * font_size * 1.2
}

/// Shows each tooltip as an overlay and prints what a renderer would draw.
#[derive(Default)]
struct Screen {
    overlay: Option<(PresentationId, Overlay)>,
}

impl Presenter<TooltipRequest> for Screen {
    fn show(&mut self, id: PresentationId, request: &TooltipRequest) {
        let style = default_style();
        let mut overlay = match Overlay::new(request.clone(), CONTAINER, &style) {
            Ok(o) => o,
            Err(e) => {
                log::error!("Bad tooltip style: {}", e);
                return;
            }
        };
        if let Some((title_width, description_width)) = overlay.text_widths() {
            let s = overlay.style();
            let (title_size, description_size) = (s.title_font_size, s.description_font_size);
            overlay.measured(
                text_height(&request.title, title_width, title_size),
                text_height(&request.description, description_width, description_size),
            );
        }

        match overlay.frame() {
            Some(frame) => {
                println!("[{:?}] {:?}", id, request.title);
                println!("  body      {:?}", frame.body.round());
                println!("  arrow at  {:?}", frame.arrow_tip);
                println!("  title     {:?}", frame.content.title.round());
                if let Some(d) = frame.content.description {
                    println!("  text      {:?}", d.round());
                }
                println!(
                    "  outline   {} segments, {} path elements",
                    frame.outline.segments.len(),
                    frame.outline.to_bez_path().elements().len()
                );
                if let Some(dim) = frame.dim {
                    println!("  dim mask  {} path elements", dim.to_bez_path().elements().len());
                }
            }
            None => println!("[{:?}] {:?} is hidden", id, request.title),
        }
        self.overlay = Some((id, overlay));
    }

    fn hide(&mut self, id: PresentationId) {
        if let Some((shown, mut overlay)) = self.overlay.take() {
            if shown == id {
                overlay.dismiss();
            }
        }
    }
}

fn main() {
    use simplelog::*;

    let _ = TermLogger::init(
        LevelFilter::Debug,
        ConfigBuilder::new().build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    set_default_style(
        TooltipStyle::default()
            .corner_radius(12.0)
            .background(color!(250, 250, 245)),
    );

    let mut queue = PresentationQueue::new();
    queue.enqueue_all([
        TooltipRequest::new(
            "Search",
            "Find anything in your library by title, author or tag.",
            Rect::from_xywh(16.0, 60.0, 44.0, 44.0),
        ),
        TooltipRequest::new(
            "New note",
            "Start writing. Notes are saved as you type.",
            Rect::from_xywh(173.0, 770.0, 44.0, 44.0),
        ),
        TooltipRequest::new("Settings", "", Rect::from_xywh(330.0, 60.0, 44.0, 44.0))
            .style("highlight", false),
    ]);

    let mut screen = Screen::default();
    queue.present(&mut screen);

    // Every tap dismisses, wherever it lands
    let taps = [
        Point::new(200.0, 400.0),
        Point::new(195.0, 790.0),
        Point::new(350.0, 120.0),
    ];
    for tap in taps {
        let Some((id, region)) = screen
            .overlay
            .as_ref()
            .map(|(id, o)| (*id, o.hit(tap)))
        else {
            break;
        };
        println!("tap at {:?} hit {:?}", tap, region);
        // A double tap: the second one is ignored
        queue.dismiss(id, &mut screen);
        queue.dismiss(id, &mut screen);
    }
    assert!(queue.is_idle());
}
