use super::*;
use crate::render::sink::{ImageSink, NullSink};
use crate::tree::op::{Op, Var};

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn shade_scales_and_converts_each_channel() {
    let tree = Expr::vector(Expr::number(1.0), Expr::number(0.5), Expr::number(2.0));
    let frag = FragCoord::new(0.0, 0.0);
    assert_eq!(shade(&tree, frag, ColorMode::Clamp), Rgb8::new(255, 127, 255));
    assert_eq!(shade(&tree, frag, ColorMode::Wrap), Rgb8::new(255, 127, 0xFE));
}

#[test]
fn render_frame_fills_every_pixel() {
    let c = canvas(8, 4);
    let mut sink = ImageSink::new();
    render_frame(&Expr::variable(Var::X), c, ColorMode::Clamp, &mut sink).unwrap();
    assert!(sink.is_finished());

    let image = sink.into_image().unwrap();
    assert_eq!(image.dimensions(), (8, 4));
    // Left half has negative X and clamps to black; the ramp rises to the right.
    assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0]);
    assert_eq!(image.get_pixel(4, 2).0, [0, 0, 0]);
    assert_eq!(image.get_pixel(6, 1).0, [127, 127, 127]);
}

#[test]
fn render_rows_clips_to_canvas() {
    let c = canvas(5, 3);
    let mut sink = NullSink::default();
    let pushed = render_rows(&Expr::number(0.2), c, 1..10, ColorMode::Clamp, &mut sink).unwrap();
    assert_eq!(pushed, 10);
    assert_eq!(sink.samples, 10);
}

#[test]
fn scanline_renderer_matches_full_frame() {
    let tree = Expr::binary(
        Op::Mul,
        Expr::variable(Var::X),
        Expr::unary(Op::Sin, Expr::variable(Var::Y)),
    );
    let c = canvas(16, 10);

    let mut full = ImageSink::new();
    render_frame(&tree, c, ColorMode::Clamp, &mut full).unwrap();

    let mut progressive = ImageSink::new();
    let mut scan = ScanlineRenderer::new(c, ColorMode::Clamp);
    let mut steps = 0;
    while !scan.step(&tree, 3, &mut progressive).unwrap() {
        steps += 1;
        assert!(!progressive.is_finished());
    }
    assert_eq!(steps, 3);
    assert_eq!(scan.rows_done(), 10);
    assert!(progressive.is_finished());
    assert_eq!(progressive.image(), full.image());

    // Further steps are no-ops until restarted.
    assert!(scan.step(&tree, 3, &mut progressive).unwrap());
    scan.restart();
    assert!(!scan.is_complete());
}

#[test]
fn image_sink_rejects_out_of_bounds_and_early_samples() {
    let mut sink = ImageSink::new();
    let s = Sample {
        x: 0,
        y: 0,
        color: Rgb8::default(),
    };
    assert!(sink.push_sample(s).is_err());

    sink.begin(canvas(2, 2)).unwrap();
    assert!(sink.push_sample(s).is_ok());
    assert!(sink.push_sample(Sample { x: 2, ..s }).is_err());
}

#[test]
fn frame_stats_detect_flat_frames() {
    let c = canvas(6, 6);

    let mut flat = ImageSink::new();
    render_frame(&Expr::number(0.4), c, ColorMode::Clamp, &mut flat).unwrap();
    let stats = FrameStats::from_image(flat.image().unwrap());
    assert!(stats.is_flat());
    assert_eq!(stats.mean, [102.0; 3]);

    let mut ramp = ImageSink::new();
    render_frame(&Expr::variable(Var::Y), c, ColorMode::Clamp, &mut ramp).unwrap();
    let stats = FrameStats::from_image(ramp.image().unwrap());
    assert!(!stats.is_flat());
    assert_eq!((stats.width, stats.height), (6, 6));
}
