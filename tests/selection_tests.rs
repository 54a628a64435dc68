use approx::assert_relative_eq;
use floem::kurbo::Size;
use floem_palette::{
    GradientSampler, GradientSpec, PaletteColor, PaletteConfig, PaletteController, SolidColor,
};

const CYAN: SolidColor = SolidColor::from_rgba(0.0, 1.0, 1.0, 1.0);

fn controller() -> PaletteController {
    PaletteController::new(PaletteColor::default(), PaletteConfig::default())
}

#[test]
fn test_default_strip_end_to_end() {
    let mut c = controller();

    let top = c.select(0.0, 200.0);
    assert_eq!(top.phase(), 0.0);
    assert_eq!(top.color().to_hex(), "FFFFFF");

    let middle = c.select(100.0, 200.0);
    assert_relative_eq!(middle.phase(), 0.5);
    assert!(middle.color().distance(&CYAN) < 0.05, "{:?}", middle.color());

    let bottom = c.select(200.0, 200.0);
    assert_eq!(bottom.phase(), 1.0);
    assert_eq!(bottom.color().to_hex(), "000000");

    let past_bottom = c.select(250.0, 200.0);
    assert_eq!(past_bottom, bottom);
}

#[test]
fn test_select_is_idempotent() {
    let mut c = controller();
    for y in [0.0, 13.0, 77.5, 140.0, 199.0] {
        let first = c.select(y, 200.0);
        let second = c.select(y, 200.0);
        assert_eq!(first, second);
        assert_eq!(c.current_selection(), second);
    }
}

#[test]
fn test_clamping_law() {
    let mut c = controller();
    let at_top = c.select(0.0, 200.0);
    assert_eq!(c.select(-40.0, 200.0), at_top);
    assert_eq!(c.select(f64::NEG_INFINITY, 200.0), at_top);

    let at_bottom = c.select(200.0, 200.0);
    assert_eq!(c.select(1e9, 200.0), at_bottom);
}

#[test]
fn test_track_height_does_not_change_phase_mapping() {
    let mut c = controller();
    let small = c.select(30.0, 120.0);
    let large = c.select(100.0, 400.0);
    assert_eq!(small, large);
    assert_relative_eq!(c.indicator_offset(400.0), 100.0);
}

#[test]
fn test_endpoints_at_device_scale() {
    let spec = GradientSpec::default();
    for scale in [1.0, 2.0, 3.0] {
        let bmp = GradientSampler::build(&spec, Size::new(8.0, 200.0), scale).unwrap();
        assert_eq!(GradientSampler::sample(&bmp, 0.0).unwrap(), spec.first());
        assert_eq!(GradientSampler::sample(&bmp, 1.0).unwrap(), spec.last());
        // Out-of-range phases clamp to the ends
        assert_eq!(GradientSampler::sample(&bmp, -1.0).unwrap(), spec.first());
        assert_eq!(GradientSampler::sample(&bmp, 3.0).unwrap(), spec.last());
    }
}

#[test]
fn test_row_mapping_is_monotonic() {
    let bmp =
        GradientSampler::build(&GradientSpec::default(), Size::new(8.0, 200.0), 2.0).unwrap();
    let mut prev = 0;
    for i in 0..=500 {
        let row = GradientSampler::row_for_phase(&bmp, i as f64 / 500.0);
        assert!(row >= prev);
        assert!(row < bmp.height());
        prev = row;
    }
}

#[test]
fn test_custom_two_stop_gradient() {
    let spec = GradientSpec::new(vec![SolidColor::BLACK, SolidColor::WHITE]).unwrap();
    let config = PaletteConfig::default()
        .with_spec(spec)
        .with_strip_size(Size::new(4.0, 101.0));
    let mut c = PaletteController::new(PaletteColor::default(), config);

    // 101 rows: phase 0.5 lands exactly on row 50
    let mid = c.select(50.0, 100.0);
    let [r, g, b, a] = mid.color().to_rgba8();
    assert_eq!((r, g, b, a), (128, 128, 128, 255));
}

#[test]
fn test_fallback_when_gradient_unavailable() {
    let config = PaletteConfig::default().with_strip_size(Size::new(0.0, 0.0));
    let mut c = PaletteController::new(PaletteColor::new(CYAN, 0.5), config);
    for y in [-10.0, 0.0, 100.0, 300.0] {
        assert_eq!(c.select(y, 200.0), PaletteColor::default());
    }
    assert_eq!(c.current_selection(), PaletteColor::default());
}
